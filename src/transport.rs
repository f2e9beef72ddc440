// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

use crate::response::ErrorResponse;

/// A failure raised by the HTTP client layer, before any normalization into
/// the status-coded taxonomy.
///
/// Callers that catch raw transport failures catch these alongside them: a
/// [`ClientError`] and an [`IgnorableAppError`] both originate in the client
/// layer, not in the normalization step.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A raw failure from the underlying HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// A 4xx response reported explicitly by the client layer.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// A failure from an integration app's endpoint that callers may treat
    /// as non-fatal.
    #[error(transparent)]
    IgnorableApp(#[from] IgnorableAppError),
}

/// A 4xx response, reported with the URL that produced it.
#[derive(Debug, Error)]
#[error("{status_code} Client Error: for url: {url}")]
pub struct ClientError {
    status_code: String,
    url: String,
    response: Option<ErrorResponse>,
}

impl ClientError {
    /// Creates a `ClientError` for the given status code and URL.
    pub fn new(status_code: impl Into<String>, url: impl Into<String>) -> ClientError {
        ClientError {
            status_code: status_code.into(),
            url: url.into(),
            response: None,
        }
    }

    /// Attaches the response that produced this error.
    pub fn with_response(mut self, response: ErrorResponse) -> ClientError {
        self.response = Some(response);
        self
    }

    /// The status code of the response, as reported by the client layer.
    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    /// The URL of the request that drew the 4xx response.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The response itself, when the caller captured it.
    pub fn response(&self) -> Option<&ErrorResponse> {
        self.response.as_ref()
    }
}

/// A transport failure that calling code is permitted to swallow.
///
/// Wraps the raw failure unchanged; the wrapper exists only so handlers can
/// recognize failures from an integration app's own endpoint and downgrade
/// them without touching any other transport failure.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct IgnorableAppError(#[from] reqwest::Error);

impl IgnorableAppError {
    /// The underlying transport failure.
    pub fn inner(&self) -> &reqwest::Error {
        &self.0
    }
}
