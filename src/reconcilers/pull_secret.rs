// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pull secret reconciler - writes the docker config for a token into the target secret.

use crate::config::Config;
use crate::constants::{labels, pull_secret, OPERATOR_NAME};
use crate::error::{Result, UpdaterError};
use crate::kubernetes::SecretStore;
use crate::types::{AuthorizationToken, DockerConfig};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

pub struct PullSecretReconciler<S> {
    store: S,
    registry: String,
    secret_name: String,
    secret_namespace: String,
}

impl<S: SecretStore> PullSecretReconciler<S> {
    pub fn new(
        store: S,
        registry: impl Into<String>,
        secret_name: impl Into<String>,
        secret_namespace: impl Into<String>,
    ) -> Self {
        Self {
            store,
            registry: registry.into(),
            secret_name: secret_name.into(),
            secret_namespace: secret_namespace.into(),
        }
    }

    pub fn from_config(store: S, config: &Config) -> Self {
        Self::new(
            store,
            &config.registry,
            &config.secret_name,
            &config.secret_namespace,
        )
    }

    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    /// Create the pull secret, or overwrite it when creation fails.
    ///
    /// Any create error falls through to the update; the returned error is
    /// always the one from the last attempt.
    #[instrument(skip(self, token), fields(secret = %format!("{}/{}", self.secret_namespace, self.secret_name)))]
    pub async fn reconcile(&self, token: &AuthorizationToken) -> Result<()> {
        if token.token().is_empty() {
            return Err(UpdaterError::Provider("empty authorization token".to_string()));
        }

        let secret = build_pull_secret(
            &self.registry,
            token.token(),
            &self.secret_name,
            &self.secret_namespace,
        )?;

        match self.store.create(&secret).await {
            Ok(()) => {
                info!("Created pull secret");
                Ok(())
            }
            Err(e) => {
                debug!("Create failed ({}), trying update", e);
                self.store.update(&secret).await?;
                info!("Updated pull secret");
                Ok(())
            }
        }
    }
}

/// Build the `kubernetes.io/dockerconfigjson` secret for a registry token
pub fn build_pull_secret(
    registry: &str,
    token: &str,
    name: &str,
    namespace: &str,
) -> Result<Secret> {
    let config = DockerConfig::for_registry(registry, token).to_json()?;

    Ok(Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([(
                labels::MANAGED_BY.to_string(),
                OPERATOR_NAME.to_string(),
            )])),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            pull_secret::DATA_KEY.to_string(),
            ByteString(config),
        )])),
        type_: Some(pull_secret::SECRET_TYPE.to_string()),
        ..Default::default()
    })
}
