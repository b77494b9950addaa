// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::ecr;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contents of a `.dockerconfigjson` image pull secret.
///
/// Keyed by registry host. The updater only ever writes one entry, but the
/// map is kept so the document stays readable by the kubelet as-is.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DockerConfig {
    pub auths: BTreeMap<String, RegistryAuth>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryAuth {
    pub username: String,
    pub password: String,
    pub email: String,
    pub auth: String,
}

impl RegistryAuth {
    /// Build the entry for an ECR token, which is always issued for user `AWS`
    pub fn from_ecr_token(token: &str) -> Self {
        Self {
            username: ecr::USERNAME.to_string(),
            password: token.to_string(),
            email: ecr::EMAIL.to_string(),
            auth: STANDARD.encode(format!("{}:{}", ecr::USERNAME, token)),
        }
    }
}

impl DockerConfig {
    pub fn for_registry(registry: &str, token: &str) -> Self {
        Self {
            auths: BTreeMap::from([(registry.to_string(), RegistryAuth::from_ecr_token(token))]),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
