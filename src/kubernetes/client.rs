// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation

use anyhow::{Context, Result};
use kube::{Client, Config as KConfig};
use tracing::{info, instrument};

/// Create a Kubernetes client.
///
/// Uses the local kubeconfig (`KUBECONFIG` or `~/.kube/config`) when one is
/// present, otherwise falls back to the in-cluster service account.
#[instrument]
pub async fn create_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .context("Failed to infer Kubernetes configuration")?;

    info!(
        "Using cluster {} (default namespace {})",
        config.cluster_url, config.default_namespace
    );

    Client::try_from(config).context("Failed to create Kubernetes client")
}
