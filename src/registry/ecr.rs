// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ECR `GetAuthorizationToken` backed token provider

use crate::config::Config;
use crate::error::{Result, UpdaterError};
use crate::registry::TokenProvider;
use crate::types::AuthorizationToken;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::types::AuthorizationData;
use aws_sdk_ecr::Client as EcrClient;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

pub struct EcrTokenProvider {
    client: EcrClient,
    region: String,
}

impl std::fmt::Debug for EcrTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcrTokenProvider")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl EcrTokenProvider {
    /// Build an ECR client for the configured region using the default
    /// credential chain (environment, shared profile, IRSA web identity).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.registry_region.clone()));

        if let Some(endpoint) = &config.registry_endpoint {
            info!("Using ECR endpoint override {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        Self {
            client: EcrClient::new(&sdk_config),
            region: config.registry_region.clone(),
        }
    }
}

#[async_trait]
impl TokenProvider for EcrTokenProvider {
    #[instrument(skip(self), fields(region = %self.region))]
    async fn authorization_tokens(&self) -> Result<Vec<AuthorizationToken>> {
        let response = self
            .client
            .get_authorization_token()
            .send()
            .await
            .map_err(|e| UpdaterError::Provider(DisplayErrorContext(e).to_string()))?;

        let data = response.authorization_data();
        debug!("ECR returned {} authorization entries", data.len());

        tokens_from_authorization_data(data)
    }
}

/// Convert the authorization entries of one response.
///
/// Only the first entry is authoritative and must be well formed. Later
/// entries that cannot be converted are logged and dropped.
fn tokens_from_authorization_data(data: &[AuthorizationData]) -> Result<Vec<AuthorizationToken>> {
    let mut entries = data.iter();

    let Some(first) = entries.next() else {
        return Ok(Vec::new());
    };

    let mut tokens = vec![token_from_authorization_data(first)?];
    for (index, entry) in entries.enumerate() {
        match token_from_authorization_data(entry) {
            Ok(token) => tokens.push(token),
            Err(e) => warn!("Ignoring authorization entry {}: {}", index + 1, e),
        }
    }

    Ok(tokens)
}

/// Convert one ECR authorization entry, which must carry both a token and an expiry
fn token_from_authorization_data(data: &AuthorizationData) -> Result<AuthorizationToken> {
    let token = data
        .authorization_token()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| UpdaterError::Provider("authorization data has no token".to_string()))?;

    let expires_at = data
        .expires_at()
        .ok_or_else(|| UpdaterError::Provider("authorization data has no expiry".to_string()))?;

    let expires_at = DateTime::<Utc>::from_timestamp(expires_at.secs(), expires_at.subsec_nanos())
        .ok_or_else(|| {
            UpdaterError::Provider(format!("expiry {:?} is out of range", expires_at))
        })?;

    Ok(AuthorizationToken::new(token, expires_at))
}
