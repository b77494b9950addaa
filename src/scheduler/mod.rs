// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The refresh loop that keeps the pull secret ahead of token expiry.

pub mod clock;
pub mod refresh;

pub use clock::{Clock, TokioClock};
pub use refresh::{sleep_duration, RefreshScheduler, RefreshState};
