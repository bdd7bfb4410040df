// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Policies controlling the polling loop for long-running operations.
//!
//! Creating a namespace or deleting a resource group can take minutes. The
//! client polls these operations until they complete. The loop is controlled
//! by two policies:
//!
//! * a [PollingErrorPolicy][error_policy::PollingErrorPolicy], which decides
//!   if polling continues after an error, and how long polling can last.
//! * a [PollingBackoffPolicy][backoff_policy::PollingBackoffPolicy], which
//!   decides how long to wait between polls.
//!
//! # Example
//! ```
//! # use servicebus_admin::polling::error_policy::*;
//! use std::time::Duration;
//! // Poll for at most 15 minutes or at most 50 attempts.
//! let policy = TransientErrors
//!     .with_time_limit(Duration::from_secs(15 * 60))
//!     .with_attempt_limit(50);
//! ```

pub mod backoff_policy;
pub mod error_policy;
pub mod exponential_backoff;
pub mod loop_state;

use crate::options::RequestOptions;
use backoff_policy::PollingBackoffPolicy;
use error_policy::{LimitedElapsedTime, PollingErrorPolicy};
use exponential_backoff::ExponentialBackoff;
use std::sync::Arc;
use std::time::Duration;

/// How long `until_done()` polls before giving up, unless configured.
const DEFAULT_POLLING_TIME_LIMIT: Duration = Duration::from_secs(30 * 60);

/// The polling error policy in `options`, or the default policy.
pub(crate) fn default_error_policy(options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
    options
        .polling_error_policy()
        .clone()
        .unwrap_or_else(|| Arc::new(LimitedElapsedTime::new(DEFAULT_POLLING_TIME_LIMIT)))
}

/// The polling backoff policy in `options`, or the default policy.
pub(crate) fn default_backoff_policy(options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy> {
    options
        .polling_backoff_policy()
        .clone()
        .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
}
