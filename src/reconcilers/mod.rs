// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reconcilers that turn registry tokens into cluster state.

pub mod pull_secret;

pub use pull_secret::{build_pull_secret, PullSecretReconciler};
