// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret persistence against the Kubernetes API

use crate::constants::OPERATOR_NAME;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{api::PostParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// Writes secrets to the cluster. Target namespace and name are taken from
/// the secret's metadata.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn create(&self, secret: &Secret) -> Result<(), kube::Error>;
    async fn update(&self, secret: &Secret) -> Result<(), kube::Error>;
}

pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api_for(&self, secret: &Secret) -> Api<Secret> {
        match secret.namespace() {
            Some(namespace) => Api::namespaced(self.client.clone(), &namespace),
            None => Api::default_namespaced(self.client.clone()),
        }
    }
}

fn post_params() -> PostParams {
    PostParams {
        dry_run: false,
        field_manager: Some(OPERATOR_NAME.to_string()),
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    #[instrument(skip(self, secret), fields(secret = %secret.name_any()))]
    async fn create(&self, secret: &Secret) -> Result<(), kube::Error> {
        self.api_for(secret).create(&post_params(), secret).await?;
        debug!("Secret created");
        Ok(())
    }

    #[instrument(skip(self, secret), fields(secret = %secret.name_any()))]
    async fn update(&self, secret: &Secret) -> Result<(), kube::Error> {
        self.api_for(secret)
            .replace(&secret.name_any(), &post_params(), secret)
            .await?;
        debug!("Secret replaced");
        Ok(())
    }
}
