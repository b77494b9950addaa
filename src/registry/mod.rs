// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sources of registry authorization tokens.

pub mod ecr;

pub use ecr::EcrTokenProvider;

use crate::error::Result;
use crate::types::AuthorizationToken;
use async_trait::async_trait;

/// Issues fresh authorization tokens for the configured registry.
///
/// An empty vector is a valid response at this level; callers decide
/// whether that is an error.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn authorization_tokens(&self) -> Result<Vec<AuthorizationToken>>;
}
