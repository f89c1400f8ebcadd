// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blocking HTTP execution.
//!
//! One invocation performs at most one round-trip. The executor does not
//! inspect HTTP status codes: a 4xx/5xx body flows downstream exactly like a
//! 2xx body, and only transport failures are errors.

use crate::error::ClientError;
use crate::request::{HttpMethod, PreparedRequest};
use tracing::debug;

/// Blocking client for the maintenance REST API.
///
/// Attaches the static API key and content type to every request.
#[derive(Debug)]
pub struct ApiClient {
    /// The underlying blocking HTTP client.
    http: reqwest::blocking::Client,
    /// Value of the Authorization header, `API-KEY <key>`.
    authorization: String,
}

impl ApiClient {
    /// Creates a client that authenticates with `api_key`.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            authorization: format!("API-KEY {api_key}"),
        }
    }

    /// Sends `request` and reads the entire response body.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` on any transport failure (connection
    /// refused, TLS, timeout, request-time DNS). HTTP error statuses are not
    /// failures at this layer.
    pub fn execute(&self, request: &PreparedRequest) -> Result<String, ClientError> {
        debug!(method = ?request.method, url = %request.url, "Sending request");

        let mut builder: reqwest::blocking::RequestBuilder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
            HttpMethod::Delete => self.http.delete(&request.url),
        };
        builder = builder
            .header("Content-Type", "application/json")
            .header("Authorization", &self.authorization);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response: reqwest::blocking::Response = builder.send()?;
        let body: String = response.text()?;

        debug!(bytes = body.len(), "Response body read");
        Ok(body)
    }
}
