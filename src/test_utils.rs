// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the Kubernetes API and the secret store.

use crate::kubernetes::SecretStore;
use async_trait::async_trait;
use http::{Request, Response};
use k8s_openapi::api::core::v1::Secret;
use kube::client::Body;
use kube::core::ErrorResponse;
use kube::{Client, ResourceExt};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Route = (String, String);

/// A mock HTTP service that returns predefined responses based on method and path,
/// and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Route, (u16, String)>>>,
    requests: Arc<Mutex<Vec<Route>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the exact path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    /// Requests seen so far, as (method, path)
    pub fn requests(&self) -> Vec<Route> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);

        Box::pin(async move {
            let (status, body) =
                response.unwrap_or_else(|| (404, not_found_json("path", &path)));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock secret JSON response
pub fn secret_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "type": "kubernetes.io/dockerconfigjson"
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    status_json(409, "AlreadyExists", &format!("{} \"{}\" already exists", resource, name))
}

/// Create a 500 internal error response
pub fn internal_error_json(message: &str) -> String {
    status_json(500, "InternalError", message)
}

fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// In-memory `SecretStore` that records calls and can be told to fail
#[derive(Clone, Default)]
pub struct FakeSecretStore {
    secrets: Arc<Mutex<HashMap<(String, String), Secret>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    fail_create: Option<u16>,
    fail_update: Option<u16>,
}

impl FakeSecretStore {
    /// Make every create fail with the given API status code
    pub fn with_failing_create(mut self, code: u16) -> Self {
        self.fail_create = Some(code);
        self
    }

    /// Make every update fail with the given API status code
    pub fn with_failing_update(mut self, code: u16) -> Self {
        self.fail_update = Some(code);
        self
    }

    /// Store calls so far, "create" or "update"
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<Secret> {
        self.secrets
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }
}

fn store_key(secret: &Secret) -> (String, String) {
    (secret.namespace().unwrap_or_default(), secret.name_any())
}

/// Build an API error as the kube client would return it
pub fn api_error(code: u16, message: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: message.to_string(),
        reason: "Failed".to_string(),
        code,
    })
}

#[async_trait]
impl SecretStore for FakeSecretStore {
    async fn create(&self, secret: &Secret) -> Result<(), kube::Error> {
        self.calls.lock().unwrap().push("create");
        if let Some(code) = self.fail_create {
            return Err(api_error(code, "create failed"));
        }
        let mut secrets = self.secrets.lock().unwrap();
        if secrets.contains_key(&store_key(secret)) {
            return Err(api_error(409, "already exists"));
        }
        secrets.insert(store_key(secret), secret.clone());
        Ok(())
    }

    async fn update(&self, secret: &Secret) -> Result<(), kube::Error> {
        self.calls.lock().unwrap().push("update");
        if let Some(code) = self.fail_update {
            return Err(api_error(code, "update failed"));
        }
        self.secrets
            .lock()
            .unwrap()
            .insert(store_key(secret), secret.clone());
        Ok(())
    }
}
