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

//! The error type returned by the Service Bus management client.

/// Status codes and the detailed status returned by the management service.
///
/// # Examples
///
/// ```
/// use servicebus_admin::error::Error;
/// use servicebus_admin::error::rpc::Code;
/// fn handle_error(e: Error) {
///     if let Some(status) = e.status() {
///         if status.code == Code::NotFound {
///             println!("nothing there: {}", status.message);
///         }
///     }
/// }
/// ```
pub mod rpc;

use crate::build_errors::Error as CredentialsError;
use rpc::Status;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the client.
///
/// The client reports errors from multiple sources. The service may reject a
/// request, the transport may be unable to reach the service, the polling
/// policy may be exhausted while waiting for a long-running operation, or the
/// client may be unable to format the request because a required field is
/// missing.
///
/// Most applications just return or log the error. Applications that need to
/// react to specific conditions can use the predicates and the
/// [status()][Error::status] accessor.
///
/// # Example
/// ```
/// use servicebus_admin::error::Error;
/// use servicebus_admin::error::rpc::{Code, Status};
/// match example_function() {
///     Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => {
///         println!("already gone");
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use servicebus_admin::error::Error;
    /// use servicebus_admin::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_status(status, None)
    }

    /// Creates a service error, recording the HTTP status code of the response.
    pub fn service_with_http_status(status: Status, status_code: Option<u16>) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(ServiceDetails {
                status,
                status_code,
            })),
            source: None,
        }
    }

    /// The [Status] payload associated with this error, if the service
    /// reported the error.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(d) => d.status_code,
            ErrorKind::Http(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns true if the service reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status()
            .is_some_and(|s| s.code == rpc::Code::NotFound)
    }

    /// Creates an error for an HTTP response that does not carry a status
    /// payload the client can parse.
    pub fn http<T: Into<BoxError>>(status_code: u16, source: T) -> Self {
        Self {
            kind: ErrorKind::Http(status_code),
            source: Some(source.into()),
        }
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. The request may or may
    /// not have started, and it may or may not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted polling policy.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The long-running operation did not complete before the polling policy
    /// expired.
    ///
    /// The operation may still complete in the service. Extend the polling
    /// policy if your application can tolerate longer provisioning times.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error representing a problem sending the request or
    /// receiving the response.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The most common cause is a service returning a payload that does not
    /// match the API version requested by the client.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a missing or invalid request field.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// A required request field is missing, the request was never sent.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing a problem with the credentials.
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The client could not create the authentication headers.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Returns true for errors that may disappear if the request is repeated.
    ///
    /// Polling loops use this to decide whether to keep polling a
    /// long-running operation.
    pub fn is_transient(&self) -> bool {
        use rpc::Code;
        match &self.kind {
            ErrorKind::Timeout | ErrorKind::Io => true,
            ErrorKind::Http(code) => matches!(code, 429 | 502..=504),
            ErrorKind::Service(d) => matches!(
                d.status.code,
                Code::Unavailable | Code::ResourceExhausted | Code::DeadlineExceeded
            ),
            _ => false,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Service(d), _) => write!(
                f,
                "the service reports an error with code {} ({}) described as: {}",
                d.status.code, d.status.reason, d.status.message
            ),
            (ErrorKind::Http(code), Some(e)) => {
                write!(f, "the service returned HTTP status {code}: {e}")
            }
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot format the request, a field is missing: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Io, Some(e)) => write!(f, "cannot send the request or read the response {e}"),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Service(Box<ServiceDetails>),
    Http(u16),
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Io,
}

#[derive(Debug)]
struct ServiceDetails {
    status: Status,
    status_code: Option<u16>,
}
