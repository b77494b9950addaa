// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;

/// Updater configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Registry host used as the key in the docker config, e.g. `123456789012.dkr.ecr.eu-west-2.amazonaws.com`
    pub registry: String,
    pub registry_region: String,
    /// Overrides the ECR API endpoint (local emulators, VPC endpoints)
    pub registry_endpoint: Option<String>,
    pub secret_name: String,
    pub secret_namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            let value = lookup(key).with_context(|| format!("{} environment variable not set", key))?;
            if value.trim().is_empty() {
                bail!("{} environment variable is empty", key);
            }
            Ok(value)
        };

        Ok(Config {
            registry: required("ECR_REGISTRY")?,
            registry_region: required("ECR_REGISTRY_REGION")?,
            registry_endpoint: lookup("ECR_REGISTRY_ENDPOINT").filter(|v| !v.trim().is_empty()),
            secret_name: required("ECR_SECRET_NAME")?,
            secret_namespace: required("ECR_SECRET_NAMESPACE")?,
        })
    }
}
