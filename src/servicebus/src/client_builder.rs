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

//! Types for client construction.
//!
//! Some applications need to construct clients with custom configuration,
//! for example, they may need to override the endpoint or the credentials.
//! Applications do not create builders directly, use
//! [ServiceBusManagement::builder()][crate::client::ServiceBusManagement::builder].
//!
//! ## Example: create a client with the default configuration.
//!
//! ```no_run
//! # use servicebus_admin::client::ServiceBusManagement;
//! # async fn sample() -> servicebus_admin::client_builder::Result<()> {
//! let client = ServiceBusManagement::builder().build().await?;
//! # Ok(()) }
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```no_run
//! # use servicebus_admin::client::ServiceBusManagement;
//! # async fn sample() -> servicebus_admin::client_builder::Result<()> {
//! let client = ServiceBusManagement::builder()
//!     .with_endpoint("https://management.usgovcloudapi.net")
//!     .build()
//!     .await?;
//! # Ok(()) }
//! ```

use crate::client::ServiceBusManagement;
use crate::credentials::Credentials;
use crate::polling::backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling::error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use servicebus_admin::client::ServiceBusManagement;
/// # async fn sample() {
/// match ServiceBusManagement::builder().build().await {
///     Ok(c) => { /* use the client */ },
///     Err(e) if e.is_credentials() => {
///         println!("cannot load the credentials: {e:?}");
///     },
///     Err(e) => { println!("error creating the client: {e:?}"); },
/// }
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The credentials could not be loaded.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// The HTTP client could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// The configuration is incomplete, e.g. there is no subscription id.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    pub(crate) fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    pub(crate) fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    pub(crate) fn configuration(message: &'static str) -> Self {
        Self(ErrorKind::Configuration(message))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not load the credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("incomplete client configuration: {0}")]
    Configuration(&'static str),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A builder for [ServiceBusManagement].
#[derive(Clone, Debug, Default)]
pub struct ClientBuilder {
    pub(crate) config: ClientConfig,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a new client.
    pub async fn build(self) -> Result<ServiceBusManagement> {
        ServiceBusManagement::new(self.config).await
    }

    /// Sets the Resource Manager endpoint.
    ///
    /// The default is `https://management.azure.com`, or the endpoint in the
    /// auth file, if any.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// Each call creates an `info` span, and failed calls are logged.
    /// Applications must initialize a `tracing` subscriber to see these.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configures the credentials.
    ///
    /// By default the client loads [Credentials] using
    /// [credentials::Builder](crate::credentials::Builder).
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the subscription id, overriding the value in the credentials.
    pub fn with_subscription_id<V: Into<String>>(mut self, v: V) -> Self {
        self.config.subscription_id = Some(v.into());
        self
    }

    /// Configures the polling error policy for long-running operations.
    ///
    /// # Example
    /// ```no_run
    /// # use servicebus_admin::client::ServiceBusManagement;
    /// # use servicebus_admin::polling::error_policy::*;
    /// # async fn sample() -> servicebus_admin::client_builder::Result<()> {
    /// use std::time::Duration;
    /// let client = ServiceBusManagement::builder()
    ///     .with_polling_error_policy(TransientErrors.with_time_limit(Duration::from_secs(15 * 60)))
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().0);
        self
    }

    /// Configures the polling backoff policy for long-running operations.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().0);
        self
    }
}

/// The configuration consumed by the transport.
#[derive(Clone, Debug, Default)]
pub(crate) struct ClientConfig {
    pub endpoint: Option<String>,
    pub cred: Option<Credentials>,
    pub subscription_id: Option<String>,
    pub tracing: bool,
    pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::anonymous;
    use crate::polling::error_policy::LimitedAttemptCount;
    use crate::polling::exponential_backoff::ExponentialBackoffBuilder;
    use std::error::Error as _;

    #[test]
    fn defaults() {
        let builder = ClientBuilder::new();
        let config = builder.config;
        assert!(config.endpoint.is_none(), "{config:?}");
        assert!(config.cred.is_none(), "{config:?}");
        assert!(config.subscription_id.is_none(), "{config:?}");
        assert!(!config.tracing, "{config:?}");
        assert!(config.polling_error_policy.is_none(), "{config:?}");
        assert!(config.polling_backoff_policy.is_none(), "{config:?}");
    }

    #[test]
    fn setters() {
        let builder = ClientBuilder::new()
            .with_endpoint("http://localhost:8080")
            .with_credentials(anonymous::Builder::new().build())
            .with_subscription_id("sub-123")
            .with_tracing()
            .with_polling_error_policy(LimitedAttemptCount::new(5))
            .with_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        let config = builder.config;
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
        assert!(config.cred.is_some(), "{config:?}");
        assert_eq!(config.subscription_id.as_deref(), Some("sub-123"));
        assert!(config.tracing, "{config:?}");
        assert!(config.polling_error_policy.is_some(), "{config:?}");
        assert!(config.polling_backoff_policy.is_some(), "{config:?}");
    }

    #[test]
    fn errors() {
        let error = Error::cred("missing token");
        assert!(error.is_credentials(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");

        let error = Error::transport("cannot create client");
        assert!(error.is_transport(), "{error:?}");

        let error = Error::configuration("missing subscription id");
        assert!(error.is_configuration(), "{error:?}");
        assert!(error.to_string().contains("missing subscription id"), "{error}");
    }
}
