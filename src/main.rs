// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecr_credential_updater::config::Config;
use ecr_credential_updater::kubernetes::{create_client, KubeSecretStore};
use ecr_credential_updater::reconcilers::PullSecretReconciler;
use ecr_credential_updater::registry::EcrTokenProvider;
use ecr_credential_updater::scheduler::{RefreshScheduler, TokioClock};

#[tokio::main]
async fn main() -> Result<()> {
    // JSON logs with level and message at the top level
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting ecr-credential-updater");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: registry={}, region={}, secret={}/{}",
        config.registry, config.registry_region, config.secret_namespace, config.secret_name
    );

    let client = create_client().await?;
    info!("Connected to Kubernetes cluster");

    let provider = EcrTokenProvider::from_config(&config).await;
    let reconciler = PullSecretReconciler::from_config(KubeSecretStore::new(client), &config);
    let scheduler = RefreshScheduler::new(provider, reconciler, TokioClock);

    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        res = scheduler.run() => res?,
        _ = tokio::signal::ctrl_c() => info!("Received SIGINT, shutting down"),
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
    }

    Ok(())
}
