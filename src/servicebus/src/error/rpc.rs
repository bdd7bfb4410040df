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

use serde::{Deserialize, Serialize};

/// The error reported by the management service.
///
/// Resource Manager returns errors as `{"error": {"code": ..., "message": ...}}`.
/// The `code` in that payload is a service-specific string, such as
/// `ResourceGroupNotFound`, which is preserved in [reason][Status::reason].
/// The [code][Status::code] field is the canonical category of the error,
/// derived from the HTTP status of the response.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Status {
    /// The canonical error category.
    pub code: Code,

    /// The service-specific error code, e.g. `ResourceGroupNotFound`.
    pub reason: String,

    /// A developer-facing error message.
    pub message: String,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [reason][Status::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Parses a Resource Manager error payload.
    ///
    /// Returns `None` if the payload is not a JSON object with an `error`
    /// field.
    pub fn from_response(http_status: u16, payload: &[u8]) -> Option<Self> {
        let body = serde_json::from_slice::<ErrorResponse>(payload).ok()?;
        Some(
            Status::default()
                .set_code(Code::from_http_status(http_status))
                .set_reason(body.error.code)
                .set_message(body.error.message),
        )
    }
}

/// The canonical error categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Code {
    /// Unknown error, or an HTTP status without a better mapping.
    #[default]
    Unknown,
    /// HTTP 400. The request is malformed, e.g. an invalid resource name.
    InvalidArgument,
    /// HTTP 401. The credentials are missing or invalid.
    Unauthenticated,
    /// HTTP 403. The caller is not authorized to perform the operation.
    PermissionDenied,
    /// HTTP 404. The resource, or one of its parents, does not exist.
    NotFound,
    /// HTTP 409. The resource exists or is being modified by another request.
    AlreadyExists,
    /// HTTP 412. A precondition (e.g. an `If-Match` header) failed.
    FailedPrecondition,
    /// HTTP 429. The caller is being throttled.
    ResourceExhausted,
    /// HTTP 500.
    Internal,
    /// HTTP 503. The service is temporarily unavailable.
    Unavailable,
    /// HTTP 504.
    DeadlineExceeded,
}

impl Code {
    /// Maps an HTTP status code to its canonical category.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidArgument,
            401 => Self::Unauthenticated,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::AlreadyExists,
            412 => Self::FailedPrecondition,
            429 => Self::ResourceExhausted,
            500 => Self::Internal,
            503 => Self::Unavailable,
            504 => Self::DeadlineExceeded,
            _ => Self::Unknown,
        }
    }

    /// The name of the code, as used in logs and error messages.
    pub fn name(&self) -> &str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error payload used by Resource Manager.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl From<&Status> for ErrorResponse {
    fn from(value: &Status) -> Self {
        Self {
            error: ErrorDetail {
                code: value.reason.clone(),
                message: value.message.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(400, Code::InvalidArgument)]
    #[test_case(401, Code::Unauthenticated)]
    #[test_case(403, Code::PermissionDenied)]
    #[test_case(404, Code::NotFound)]
    #[test_case(409, Code::AlreadyExists)]
    #[test_case(412, Code::FailedPrecondition)]
    #[test_case(429, Code::ResourceExhausted)]
    #[test_case(500, Code::Internal)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(504, Code::DeadlineExceeded)]
    #[test_case(418, Code::Unknown)]
    fn from_http_status(input: u16, want: Code) {
        assert_eq!(Code::from_http_status(input), want);
    }

    #[test]
    fn from_response() {
        let payload = serde_json::json!({"error": {
            "code": "ResourceGroupNotFound",
            "message": "Resource group 'rg-test' could not be found."
        }});
        let status = Status::from_response(404, payload.to_string().as_bytes());
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_reason("ResourceGroupNotFound")
            .set_message("Resource group 'rg-test' could not be found.");
        assert_eq!(status, Some(want));
    }

    #[test_case(b"")]
    #[test_case(b"not json")]
    #[test_case(b"{\"value\": []}")]
    fn from_response_unparseable(payload: &[u8]) {
        assert_eq!(Status::from_response(400, payload), None);
    }

    #[test]
    fn display() {
        assert_eq!(Code::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(Code::default(), Code::Unknown);
    }
}
