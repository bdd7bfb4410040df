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

//! Per request options.
//!
//! The client defaults work for most applications. Sometimes a single call
//! needs a different configuration, for example, a longer polling loop for a
//! namespace that takes a while to provision. The request builders returned
//! by each client method implement [RequestOptionsBuilder] to override the
//! client defaults for one call.

use crate::polling::backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling::error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// Options that apply to a single request.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// Appends `v` to the user agent sent with the request.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for each attempt of the request.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    pub fn polling_error_policy(&self) -> &Option<Arc<dyn PollingErrorPolicy>> {
        &self.polling_error_policy
    }

    /// Sets the polling error policy, for long-running operations only.
    pub fn set_polling_error_policy<V: Into<PollingErrorPolicyArg>>(&mut self, v: V) {
        self.polling_error_policy = Some(v.into().0);
    }

    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Sets the polling backoff policy, for long-running operations only.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().0);
    }
}

/// Implemented by the request builders to override per request options.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Appends `v` to the user agent sent with the request.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for each attempt of the request.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the polling error policy, for long-running operations only.
    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(self, v: V) -> Self;

    /// Sets the polling backoff policy, for long-running operations only.
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details, not part of the public API.
    use super::RequestOptions;

    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_error_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::RequestBuilder;
    use super::*;
    use crate::polling::error_policy::LimitedAttemptCount;
    use crate::polling::exponential_backoff::ExponentialBackoffBuilder;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }

    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert!(opts.user_agent().is_none(), "{opts:?}");
        assert!(opts.attempt_timeout().is_none(), "{opts:?}");
        assert!(opts.polling_error_policy().is_none(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_none(), "{opts:?}");

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        opts.set_attempt_timeout(Duration::from_secs(30));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(30)));
        opts.set_polling_error_policy(LimitedAttemptCount::new(3));
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        opts.set_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default()
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(30))
            .with_polling_error_policy(LimitedAttemptCount::new(3))
            .with_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        let opts = builder.request_options;
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(30)));
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }
}
