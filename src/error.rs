// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("Unable to generate auth token, error: {0}")]
    Provider(String),

    #[error("Unable to build dockerconfig secret, error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Unable to update dockerconfig secret, error: {0}")]
    Persistence(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
