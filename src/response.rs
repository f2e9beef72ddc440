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

use reqwest::StatusCode;

/// A snapshot of the HTTP response attached to an error.
///
/// Errors outlive the exchange that produced them, and a live response
/// cannot be stored in one (reading its body is async and consuming), so
/// callers capture the status and body text at classification time and
/// attach this instead.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    status_code: StatusCode,
    body: String,
}

impl ErrorResponse {
    /// Creates a snapshot from a status code and the already-read body text.
    pub fn new(status_code: StatusCode, body: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            status_code,
            body: body.into(),
        }
    }

    /// The HTTP status code of the response.
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// The raw body text of the response.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// The body parsed as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
