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

//! Credentials for the management API.
//!
//! The client sends an OAuth2 bearer token with each request. This module does
//! not acquire tokens, it loads an existing token (and the target subscription
//! id) from the sources configured by the application:
//!
//! 1. A token set explicitly with [Builder::with_access_token].
//! 2. The JSON auth file named by `AZURE_AUTH_LOCATION`, or set with
//!    [Builder::with_auth_file].
//! 3. The `AZURE_ACCESS_TOKEN` and `AZURE_SUBSCRIPTION_ID` environment
//!    variables.

use crate::build_errors::Error;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

/// The environment variable naming the JSON auth file.
pub const AUTH_LOCATION_VAR: &str = "AZURE_AUTH_LOCATION";
/// The environment variable holding a bearer token.
pub const ACCESS_TOKEN_VAR: &str = "AZURE_ACCESS_TOKEN";
/// The environment variable holding the default subscription id.
pub const SUBSCRIPTION_ID_VAR: &str = "AZURE_SUBSCRIPTION_ID";

/// A `Result` alias where the error is a credentials build error.
pub type Result<T> = std::result::Result<T, Error>;

/// Provides the authentication headers for management requests.
///
/// `Credentials` are cheap to clone, they hold an `Arc` internally.
#[derive(Clone)]
pub struct Credentials {
    inner: Arc<CredentialsInner>,
}

#[derive(Default)]
struct CredentialsInner {
    token: Option<String>,
    subscription_id: Option<String>,
    endpoint: Option<String>,
}

impl Credentials {
    /// Returns the headers to attach to each request.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.inner.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(Error::invalid_header)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// The subscription id loaded with the credentials, if any.
    pub fn subscription_id(&self) -> Option<&str> {
        self.inner.subscription_id.as_deref()
    }

    /// The Resource Manager endpoint loaded with the credentials, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.inner.endpoint.as_deref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.inner.token.as_ref().map(|_| "[censored]"))
            .field("subscription_id", &self.inner.subscription_id)
            .field("endpoint", &self.inner.endpoint)
            .finish()
    }
}

/// Anonymous credentials.
///
/// These credentials send no authentication headers. They are useful with
/// local emulators and in tests.
pub mod anonymous {
    use super::*;

    /// A builder for anonymous credentials.
    #[derive(Debug, Default)]
    pub struct Builder {
        subscription_id: Option<String>,
    }

    impl Builder {
        /// Creates a new builder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the subscription id returned with the credentials.
        pub fn with_subscription_id<V: Into<String>>(mut self, v: V) -> Self {
            self.subscription_id = Some(v.into());
            self
        }

        /// Returns a [Credentials] instance.
        pub fn build(self) -> Credentials {
            Credentials {
                inner: Arc::new(CredentialsInner {
                    subscription_id: self.subscription_id,
                    ..Default::default()
                }),
            }
        }
    }
}

/// The contents of an auth file.
///
/// Only the fields used by this client are parsed. The file may contain
/// other fields, such as `clientSecret`, which are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AuthFile {
    subscription_id: Option<String>,
    tenant_id: Option<String>,
    client_id: Option<String>,
    access_token: Option<String>,
    resource_manager_endpoint_url: Option<String>,
}

/// A builder for [Credentials].
///
/// # Example
/// ```
/// # use servicebus_admin::credentials::Builder;
/// let credentials = Builder::default()
///     .with_access_token("test-only-token")
///     .with_subscription_id("00000000-0000-0000-0000-000000000000")
///     .build()?;
/// assert_eq!(credentials.subscription_id(), Some("00000000-0000-0000-0000-000000000000"));
/// # Ok::<(), servicebus_admin::build_errors::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    access_token: Option<String>,
    subscription_id: Option<String>,
    auth_file: Option<PathBuf>,
}

impl Builder {
    /// Uses the given bearer token.
    pub fn with_access_token<V: Into<String>>(mut self, v: V) -> Self {
        self.access_token = Some(v.into());
        self
    }

    /// Overrides the subscription id found in the auth file or environment.
    pub fn with_subscription_id<V: Into<String>>(mut self, v: V) -> Self {
        self.subscription_id = Some(v.into());
        self
    }

    /// Loads the credentials from this file instead of `AZURE_AUTH_LOCATION`.
    pub fn with_auth_file<V: Into<PathBuf>>(mut self, v: V) -> Self {
        self.auth_file = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Result<Credentials> {
        if let Some(token) = self.access_token {
            let subscription_id = self
                .subscription_id
                .or_else(|| std::env::var(SUBSCRIPTION_ID_VAR).ok());
            return Ok(Credentials {
                inner: Arc::new(CredentialsInner {
                    token: Some(token),
                    subscription_id,
                    endpoint: None,
                }),
            });
        }

        let path = self
            .auth_file
            .or_else(|| std::env::var_os(AUTH_LOCATION_VAR).map(PathBuf::from));
        if let Some(path) = path {
            let contents = std::fs::read_to_string(&path).map_err(Error::loading)?;
            let file = serde_json::from_str::<AuthFile>(&contents).map_err(Error::parsing)?;
            tracing::debug!(
                tenant_id = ?file.tenant_id,
                client_id = ?file.client_id,
                "loaded auth file {}",
                path.display()
            );
            let token = file
                .access_token
                .ok_or_else(|| Error::missing_field("accessToken"))?;
            let subscription_id = self
                .subscription_id
                .or(file.subscription_id)
                .ok_or_else(|| Error::missing_field("subscriptionId"))?;
            return Ok(Credentials {
                inner: Arc::new(CredentialsInner {
                    token: Some(token),
                    subscription_id: Some(subscription_id),
                    endpoint: file.resource_manager_endpoint_url,
                }),
            });
        }

        let token =
            std::env::var(ACCESS_TOKEN_VAR).map_err(|_| Error::missing_field(ACCESS_TOKEN_VAR))?;
        let subscription_id = self
            .subscription_id
            .or_else(|| std::env::var(SUBSCRIPTION_ID_VAR).ok());
        Ok(Credentials {
            inner: Arc::new(CredentialsInner {
                token: Some(token),
                subscription_id,
                endpoint: None,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use std::io::Write;

    type TestResult = anyhow::Result<()>;

    fn auth_file(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn anonymous() -> TestResult {
        let credentials = anonymous::Builder::new()
            .with_subscription_id("sub-123")
            .build();
        assert!(credentials.headers()?.is_empty());
        assert_eq!(credentials.subscription_id(), Some("sub-123"));
        assert_eq!(credentials.endpoint(), None);
        Ok(())
    }

    #[test]
    #[serial]
    fn explicit_token() -> TestResult {
        let _e = ScopedEnv::remove(SUBSCRIPTION_ID_VAR);
        let credentials = Builder::default()
            .with_access_token("test-token")
            .with_subscription_id("sub-123")
            .build()?;
        let headers = credentials.headers()?;
        let value = headers.get(AUTHORIZATION).map(|v| v.to_str()).transpose()?;
        assert_eq!(value, Some("Bearer test-token"));
        assert_eq!(credentials.subscription_id(), Some("sub-123"));
        Ok(())
    }

    #[test]
    #[serial]
    fn from_auth_file() -> TestResult {
        let file = auth_file(
            r#"{
                "clientId": "client-123",
                "clientSecret": "ignored",
                "subscriptionId": "sub-456",
                "tenantId": "tenant-789",
                "accessToken": "file-token",
                "resourceManagerEndpointUrl": "https://management.example.com"
            }"#,
        )?;
        let path = file.path().to_string_lossy().to_string();
        let _e = ScopedEnv::set(AUTH_LOCATION_VAR, path.as_str());
        let credentials = Builder::default().build()?;
        let headers = credentials.headers()?;
        let value = headers.get(AUTHORIZATION).map(|v| v.to_str()).transpose()?;
        assert_eq!(value, Some("Bearer file-token"));
        assert_eq!(credentials.subscription_id(), Some("sub-456"));
        assert_eq!(
            credentials.endpoint(),
            Some("https://management.example.com")
        );
        Ok(())
    }

    #[test]
    #[serial]
    fn auth_file_override_subscription() -> TestResult {
        let file = auth_file(r#"{"subscriptionId": "sub-456", "accessToken": "file-token"}"#)?;
        let credentials = Builder::default()
            .with_auth_file(file.path())
            .with_subscription_id("sub-override")
            .build()?;
        assert_eq!(credentials.subscription_id(), Some("sub-override"));
        Ok(())
    }

    #[test]
    #[serial]
    fn auth_file_errors() -> TestResult {
        let err = Builder::default()
            .with_auth_file("/nonexistent/path/to/auth.json")
            .build()
            .unwrap_err();
        assert!(err.is_loading(), "{err:?}");

        let file = auth_file("not json")?;
        let err = Builder::default()
            .with_auth_file(file.path())
            .build()
            .unwrap_err();
        assert!(err.is_parsing(), "{err:?}");

        let file = auth_file(r#"{"subscriptionId": "sub-456"}"#)?;
        let err = Builder::default()
            .with_auth_file(file.path())
            .build()
            .unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains("accessToken"), "{err}");

        let file = auth_file(r#"{"accessToken": "file-token"}"#)?;
        let err = Builder::default()
            .with_auth_file(file.path())
            .build()
            .unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains("subscriptionId"), "{err}");
        Ok(())
    }

    #[test]
    #[serial]
    fn from_environment() -> TestResult {
        let _l = ScopedEnv::remove(AUTH_LOCATION_VAR);
        let _t = ScopedEnv::set(ACCESS_TOKEN_VAR, "env-token");
        let _s = ScopedEnv::set(SUBSCRIPTION_ID_VAR, "env-sub");
        let credentials = Builder::default().build()?;
        let headers = credentials.headers()?;
        let value = headers.get(AUTHORIZATION).map(|v| v.to_str()).transpose()?;
        assert_eq!(value, Some("Bearer env-token"));
        assert_eq!(credentials.subscription_id(), Some("env-sub"));
        Ok(())
    }

    #[test]
    #[serial]
    fn missing_everything() {
        let _l = ScopedEnv::remove(AUTH_LOCATION_VAR);
        let _t = ScopedEnv::remove(ACCESS_TOKEN_VAR);
        let err = Builder::default().build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
    }

    #[test]
    fn debug_censors_token() -> TestResult {
        let credentials = Builder::default()
            .with_access_token("super-secret")
            .with_subscription_id("sub-123")
            .build()?;
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        assert!(fmt.contains("sub-123"), "{fmt}");
        Ok(())
    }
}
