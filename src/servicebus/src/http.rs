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

use crate::Result;
use crate::client_builder::{ClientConfig, Error as BuilderError};
use crate::credentials::Credentials;
use crate::error::Error;
use crate::error::rpc::Status;
use crate::options::RequestOptions;

const DEFAULT_USER_AGENT: &str = concat!("servicebus-admin/", env!("CARGO_PKG_VERSION"));

/// A thin wrapper over [reqwest::Client] for Resource Manager requests.
#[derive(Clone, Debug)]
pub(crate) struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

/// The parts of a successful response used by the transport.
#[derive(Debug)]
pub(crate) struct Response<O> {
    pub status: u16,
    pub headers: http::HeaderMap,
    pub body: O,
}

impl ReqwestClient {
    pub async fn new(config: &ClientConfig, default_endpoint: &str) -> crate::client_builder::Result<Self> {
        let cred = Self::make_credentials(config).await?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .clone()
            .or_else(|| cred.endpoint().map(str::to_string))
            .unwrap_or_else(|| default_endpoint.to_string());
        let endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            inner,
            cred,
            endpoint,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.cred
    }

    /// Creates a request for `path`, relative to the configured endpoint.
    pub fn builder(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, format!("{}{path}", &self.endpoint))
    }

    /// Creates a request for a URL returned by the service, such as a
    /// `nextLink` or an `Azure-AsyncOperation` header.
    pub fn builder_for_url(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, url)
    }

    pub async fn execute<I, O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: &RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let user_agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };
        builder = builder.header(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
        );
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let auth_headers = self.cred.headers().map_err(Error::authentication)?;
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    async fn make_credentials(config: &ClientConfig) -> crate::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        crate::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// Placeholder for requests without a body.
#[derive(serde::Serialize)]
pub(crate) struct NoBody;

pub(crate) async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let body = response.bytes().await.map_err(Error::io)?;
    let error = match Status::from_response(status_code, &body) {
        Some(status) => Error::service_with_http_status(status, Some(status_code)),
        None => Error::http(status_code, String::from_utf8_lossy(&body).into_owned()),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let content = response.bytes().await.map_err(Error::io)?;
    // Resource Manager sends empty bodies with 200, 202 and 204 responses.
    let body = match content {
        content if content.is_empty() => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };
    Ok(Response {
        status,
        headers,
        body,
    })
}
