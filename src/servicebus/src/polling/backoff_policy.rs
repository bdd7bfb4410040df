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

//! Decide how long to wait between polls.

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Computes the wait period between polls of a long-running operation.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// The wait before the next poll.
    ///
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of polls so far.
    fn wait_period(&self, loop_start: Instant, attempt_count: u32) -> Duration;
}

/// A helper type to use [PollingBackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingBackoffPolicyArg(pub(crate) Arc<dyn PollingBackoffPolicy>);

impl<T: PollingBackoffPolicy + 'static> From<T> for PollingBackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}
