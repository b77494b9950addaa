// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Refresh scheduler - fetches a token, reconciles the pull secret and sleeps until expiry.

use crate::constants::{RETRY_BACKOFF, SCHEDULE_FORMAT};
use crate::error::{Result, UpdaterError};
use crate::kubernetes::SecretStore;
use crate::reconcilers::PullSecretReconciler;
use crate::registry::TokenProvider;
use crate::scheduler::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;
use tracing::{debug, error, info};

/// Where the scheduler is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// About to fetch a token and write the secret
    Refreshing,
    /// Sleeping until the next refresh is due
    Waiting { next_refresh_at: DateTime<Utc> },
}

pub struct RefreshScheduler<P, S, C> {
    provider: P,
    reconciler: PullSecretReconciler<S>,
    clock: C,
    state: RefreshState,
}

impl<P, S, C> RefreshScheduler<P, S, C>
where
    P: TokenProvider,
    S: SecretStore,
    C: Clock,
{
    pub fn new(provider: P, reconciler: PullSecretReconciler<S>, clock: C) -> Self {
        Self {
            provider,
            reconciler,
            clock,
            state: RefreshState::Refreshing,
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Fetch a fresh token and write it to the pull secret.
    ///
    /// Returns the token's expiry, which is when the next refresh is due.
    pub async fn update_credentials(&self) -> Result<DateTime<Utc>> {
        let tokens = self.provider.authorization_tokens().await?;

        // ECR may return several entries for legacy reasons, only the first one counts
        let token = tokens.into_iter().next().ok_or_else(|| {
            UpdaterError::Provider("empty authorization response".to_string())
        })?;

        self.reconciler.reconcile(&token).await?;

        Ok(token.expires_at())
    }

    /// Perform a single state transition
    pub async fn step(&mut self) {
        self.state = match self.state {
            RefreshState::Refreshing => {
                info!(
                    "Updating ECR credentials for secret {}",
                    self.reconciler.secret_name()
                );

                let next_refresh_at = match self.update_credentials().await {
                    Ok(expires_at) => {
                        info!(
                            "Credentials updated, next update scheduled for {}",
                            expires_at.format(SCHEDULE_FORMAT)
                        );
                        expires_at
                    }
                    Err(e) => {
                        let retry_at = retry_after_backoff(self.clock.now());
                        error!(retry_at = %retry_at.format(SCHEDULE_FORMAT), "{}", e);
                        retry_at
                    }
                };

                RefreshState::Waiting { next_refresh_at }
            }
            RefreshState::Waiting { next_refresh_at } => {
                let duration = sleep_duration(next_refresh_at, self.clock.now());
                debug!("Sleeping for {:?}", duration);
                self.clock.sleep(duration).await;
                RefreshState::Refreshing
            }
        };
    }

    /// Keep the pull secret fresh for the lifetime of the process.
    ///
    /// Errors are logged and retried, so this never returns `Ok`; the
    /// future only ends when it is dropped on shutdown.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.step().await;
        }
    }
}

fn retry_after_backoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now + TimeDelta::seconds(RETRY_BACKOFF.as_secs() as i64)
}

/// Time left until `next_refresh_at`, or zero if it has already passed
pub fn sleep_duration(next_refresh_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (next_refresh_at - now).to_std().unwrap_or(Duration::ZERO)
}
