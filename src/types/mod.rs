// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry tokens and the docker config document built from them.

pub mod docker_config;
pub mod token;

pub use docker_config::{DockerConfig, RegistryAuth};
pub use token::AuthorizationToken;
