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

//! Decide if the polling loop continues after an error.
//!
//! Polling a long-running operation fails for many reasons. Some failures are
//! transient: the service is temporarily unavailable, or the connection was
//! reset. The polling loop keeps going on those. Other failures, such as a
//! permission error, do not go away by polling again.
//!
//! Policies in this module also bound the polling loop. Use
//! [with_time_limit][PollingErrorPolicyExt::with_time_limit] and
//! [with_attempt_limit][PollingErrorPolicyExt::with_attempt_limit] to stop
//! polling operations that take too long.

use super::loop_state::LoopState;
use crate::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Determines how errors are handled in the polling loop.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the policy after an error.
    ///
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of polls, including the failed one.
    /// * `error` - the error from the last poll.
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> LoopState;

    /// Query the policy after a poll that reported the operation is still in
    /// progress.
    ///
    /// Returns an error if the loop must stop.
    fn on_in_progress(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _operation_name: &str,
    ) -> Option<Error> {
        None
    }
}

/// A helper type to use [PollingErrorPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T> From<T> for PollingErrorPolicyArg
where
    T: PollingErrorPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

/// Extension trait for [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Decorate a policy with a limit on the total polling time.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a policy with a limit on the number of polls.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// Continue polling on transient errors, stop on all others.
///
/// Transient errors are timeouts, I/O errors, and service errors with the
/// `Unavailable`, `ResourceExhausted` or `DeadlineExceeded` codes. See
/// [Error::is_transient].
///
/// This policy does not limit the polling time. Most applications decorate
/// it with a time limit.
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl PollingErrorPolicy for TransientErrors {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        if error.is_transient() {
            LoopState::Continue(error)
        } else {
            LoopState::Permanent(error)
        }
    }
}

/// Continue polling after any error.
///
/// Only useful decorated with a time or attempt limit.
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        LoopState::Continue(error)
    }
}

/// Stops polling after a fixed amount of time.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a policy that stops after `maximum_duration`, continuing on
    /// transient errors until then.
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(TransientErrors, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    /// Decorates `inner` with a time limit.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn expired(&self, loop_start: Instant) -> bool {
        Instant::now() >= loop_start + self.maximum_duration
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> LoopState {
        match self.inner.on_error(loop_start, attempt_count, error) {
            LoopState::Continue(e) if self.expired(loop_start) => LoopState::Exhausted(e),
            state => state,
        }
    }

    fn on_in_progress(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        operation_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(loop_start, attempt_count, operation_name)
            .or_else(|| {
                self.expired(loop_start).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "elapsed time",
                        format!("{:?}", Instant::now().saturating_duration_since(loop_start)),
                        format!("{:?}", self.maximum_duration),
                    ))
                })
            })
    }
}

/// Stops polling after a fixed number of polls.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a policy that stops after `maximum_attempts` polls, continuing
    /// on transient errors until then.
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(TransientErrors, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    /// Decorates `inner` with an attempt limit.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> LoopState {
        match self.inner.on_error(loop_start, attempt_count, error) {
            LoopState::Continue(e) if attempt_count >= self.maximum_attempts => {
                LoopState::Exhausted(e)
            }
            state => state,
        }
    }

    fn on_in_progress(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        operation_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(loop_start, attempt_count, operation_name)
            .or_else(|| {
                (attempt_count >= self.maximum_attempts).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "attempt count",
                        attempt_count.to_string(),
                        self.maximum_attempts.to_string(),
                    ))
                })
            })
    }
}

/// The source of [Error::is_exhausted] errors created by these policies.
#[derive(Debug, thiserror::Error)]
#[error(
    "polling loop for {operation} exhausted, {limit_name} value ({value}) exceeds limit ({limit})"
)]
pub struct Exhausted {
    operation: String,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl Exhausted {
    pub fn new(
        operation: &str,
        limit_name: &'static str,
        value: String,
        limit: String,
    ) -> Self {
        Self {
            operation: operation.to_string(),
            limit_name,
            value,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use test_case::test_case;

    fn service(code: Code) -> Error {
        Error::service(Status::default().set_code(code))
    }

    #[test_case(Error::io("reset"), true)]
    #[test_case(Error::timeout("slow"), true)]
    #[test_case(service(Code::Unavailable), true)]
    #[test_case(service(Code::ResourceExhausted), true)]
    #[test_case(service(Code::NotFound), false)]
    #[test_case(service(Code::PermissionDenied), false)]
    #[test_case(Error::deser("bad payload"), false)]
    fn transient_errors(error: Error, want_continue: bool) {
        let state = TransientErrors.on_error(Instant::now(), 1, error);
        assert_eq!(state.is_continue(), want_continue, "{state:?}");
        assert_eq!(state.is_permanent(), !want_continue, "{state:?}");
    }

    #[test]
    fn always_continue() {
        let state = AlwaysContinue.on_error(Instant::now(), 1, service(Code::PermissionDenied));
        assert!(state.is_continue(), "{state:?}");
        assert!(AlwaysContinue.on_in_progress(Instant::now(), 1, "op").is_none());
    }

    #[test]
    fn limited_elapsed_time() {
        let policy = LimitedElapsedTime::new(Duration::from_secs(60));
        let now = Instant::now();
        let state = policy.on_error(now, 1, Error::io("reset"));
        assert!(state.is_continue(), "{state:?}");
        let state = policy.on_error(now, 1, service(Code::NotFound));
        assert!(state.is_permanent(), "{state:?}");
        assert!(policy.on_in_progress(now, 1, "op").is_none());

        let start = now - Duration::from_secs(120);
        let state = policy.on_error(start, 1, Error::io("reset"));
        assert!(state.is_exhausted(), "{state:?}");
        let state = policy.on_error(start, 1, service(Code::NotFound));
        assert!(state.is_permanent(), "{state:?}");
        let error = policy.on_in_progress(start, 1, "op-123");
        assert!(error.as_ref().is_some_and(Error::is_exhausted), "{error:?}");
        let fmt = error.map(|e| e.to_string()).unwrap_or_default();
        assert!(fmt.contains("op-123"), "{fmt}");
        assert!(fmt.contains("elapsed time"), "{fmt}");
    }

    #[test]
    fn limited_attempt_count() {
        let policy = LimitedAttemptCount::new(3);
        let now = Instant::now();
        let state = policy.on_error(now, 1, Error::io("reset"));
        assert!(state.is_continue(), "{state:?}");
        let state = policy.on_error(now, 3, Error::io("reset"));
        assert!(state.is_exhausted(), "{state:?}");
        let state = policy.on_error(now, 1, service(Code::PermissionDenied));
        assert!(state.is_permanent(), "{state:?}");

        assert!(policy.on_in_progress(now, 2, "op").is_none());
        let error = policy.on_in_progress(now, 3, "op-123");
        assert!(error.as_ref().is_some_and(Error::is_exhausted), "{error:?}");
    }

    #[test]
    fn composed() {
        let policy = AlwaysContinue
            .with_time_limit(Duration::from_secs(60))
            .with_attempt_limit(5);
        let now = Instant::now();
        let state = policy.on_error(now, 1, service(Code::PermissionDenied));
        assert!(state.is_continue(), "{state:?}");
        let state = policy.on_error(now, 5, service(Code::PermissionDenied));
        assert!(state.is_exhausted(), "{state:?}");
        let state = policy.on_error(now - Duration::from_secs(120), 1, Error::io("reset"));
        assert!(state.is_exhausted(), "{state:?}");
    }

    #[test]
    fn policy_arg() {
        let _ = PollingErrorPolicyArg::from(TransientErrors);
        let policy: Arc<dyn PollingErrorPolicy> = Arc::new(LimitedAttemptCount::new(3));
        let _ = PollingErrorPolicyArg::from(policy);
    }
}
