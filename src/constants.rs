// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// The name used as field manager and in the managed-by label
pub const OPERATOR_NAME: &str = "ecr-credential-updater";

/// Kubernetes label keys used by the updater
pub mod labels {
    /// Marks the pull secret as owned by this process
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
}

/// Fixed values ECR expects in a docker config entry
pub mod ecr {
    /// ECR tokens are always issued for this user
    pub const USERNAME: &str = "AWS";
    /// ECR ignores the email, but the dockerconfig format wants one
    pub const EMAIL: &str = "deprecated@example.com";
}

/// Image pull secret conventions
pub mod pull_secret {
    /// Secret type for `.dockerconfigjson` payloads
    pub const SECRET_TYPE: &str = "kubernetes.io/dockerconfigjson";
    /// Data key holding the docker config document
    pub const DATA_KEY: &str = ".dockerconfigjson";
}

/// Delay before retrying after a failed refresh cycle
pub const RETRY_BACKOFF: Duration = Duration::from_secs(120);

/// Timestamp layout for the "next update" log line
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
