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

use reqwest::{Request, StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use crate::response::ErrorResponse;
use crate::transport::TransportError;

/// An error surfaced by a call to a third-party integration.
///
/// The two variants separate the two failure axes callers care about:
/// failures of the transport itself, and failures the integration's API
/// reported (or that were normalized into API semantics, like a timeout
/// becoming a 504).
#[derive(Debug, Error)]
pub enum Error {
    /// An error in the underlying transport.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// An error returned by the integration's API.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Transport(TransportError::Http(e))
    }
}

impl Error {
    /// Normalizes a raw transport failure into the typed taxonomy.
    ///
    /// Timeouts become [`ApiErrorKind::RequestTimeout`] and connection
    /// failures become [`ApiErrorKind::HostUnreachable`]. A failure that
    /// matches neither category passes through unmodified as a
    /// [`TransportError`], so callers matching on a specific kind never
    /// receive a silently downgraded error.
    pub fn classify(err: reqwest::Error) -> Error {
        if err.is_timeout() {
            debug!(url = ?err.url(), "classified transport failure as request timeout");
            Error::Api(ApiError::timed_out_from_error(&err))
        } else if err.is_connect() {
            debug!(url = ?err.url(), "classified transport failure as unreachable host");
            Error::Api(ApiError::host_unreachable_from_error(&err))
        } else {
            Error::Transport(TransportError::Http(err))
        }
    }
}

/// The category of an [`ApiError`].
///
/// The set is closed: every failure this layer normalizes maps to exactly
/// one of these kinds, and upstream code branches on the kind to pick retry
/// policy and user messaging without inspecting transport internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The remote host could not be reached at all (DNS failure, refused
    /// connection). No HTTP response exists.
    HostUnreachable,
    /// The request was sent but the host did not answer in time.
    RequestTimeout,
    /// The integration rejected our credentials.
    Unauthorized,
    /// The integration throttled us.
    RateLimited,
    /// The integration answered with a content type we cannot handle.
    UnsupportedResponseType,
}

impl ApiErrorKind {
    /// The semantic HTTP status for this kind.
    ///
    /// The status is fixed per kind and mirrors HTTP semantics even when no
    /// real response exists: an unreachable host reads as 503, a timeout as
    /// 504. [`ApiErrorKind::UnsupportedResponseType`] declares no status of
    /// its own and returns `None`.
    pub const fn status_code(self) -> Option<StatusCode> {
        match self {
            ApiErrorKind::HostUnreachable => Some(StatusCode::SERVICE_UNAVAILABLE),
            ApiErrorKind::RequestTimeout => Some(StatusCode::GATEWAY_TIMEOUT),
            ApiErrorKind::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ApiErrorKind::RateLimited => Some(StatusCode::TOO_MANY_REQUESTS),
            ApiErrorKind::UnsupportedResponseType => None,
        }
    }
}

/// A failure normalized into API semantics.
///
/// Values are immutable once constructed. The message is always populated
/// and displayable; the response snapshot is present only when a real HTTP
/// response was involved (pure transport failures carry none).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    response: Option<ErrorResponse>,
}

impl ApiError {
    /// Creates an error of the given kind with the given message.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> ApiError {
        ApiError {
            kind,
            message: message.into(),
            response: None,
        }
    }

    /// Attaches the response that produced this error.
    pub fn with_response(mut self, response: ErrorResponse) -> ApiError {
        self.response = Some(response);
        self
    }

    /// Creates an [`ApiErrorKind::Unauthorized`] error.
    pub fn unauthorized(message: impl Into<String>) -> ApiError {
        ApiError::new(ApiErrorKind::Unauthorized, message)
    }

    /// Creates an [`ApiErrorKind::RateLimited`] error.
    pub fn rate_limited(message: impl Into<String>) -> ApiError {
        ApiError::new(ApiErrorKind::RateLimited, message)
    }

    /// Creates an [`ApiErrorKind::UnsupportedResponseType`] error carrying
    /// the raw body text of the offending response as its message.
    pub fn unsupported_response_type(body: impl Into<String>) -> ApiError {
        ApiError::new(ApiErrorKind::UnsupportedResponseType, body)
    }

    /// Creates an [`ApiErrorKind::HostUnreachable`] error from a raw
    /// transport failure.
    ///
    /// When the failure carries the URL of the outbound request, the host is
    /// named in the message. Failures raised before a request was fully
    /// built carry no URL; those get the fixed fallback message. This
    /// constructor always succeeds.
    pub fn host_unreachable_from_error(err: &reqwest::Error) -> ApiError {
        match err.url() {
            Some(url) => Self::host_unreachable_for_url(url),
            None => ApiError::new(ApiErrorKind::HostUnreachable, "Unable to reach host"),
        }
    }

    /// Creates an [`ApiErrorKind::HostUnreachable`] error naming the host of
    /// the given request.
    pub fn host_unreachable_from_request(request: &Request) -> ApiError {
        Self::host_unreachable_for_url(request.url())
    }

    fn host_unreachable_for_url(url: &Url) -> ApiError {
        ApiError::new(
            ApiErrorKind::HostUnreachable,
            format!("Unable to reach host: {}", netloc(url)),
        )
    }

    /// Creates an [`ApiErrorKind::RequestTimeout`] error from a raw
    /// transport failure, with the same URL fallback behavior as
    /// [`ApiError::host_unreachable_from_error`].
    pub fn timed_out_from_error(err: &reqwest::Error) -> ApiError {
        match err.url() {
            Some(url) => Self::timed_out_for_url(url),
            None => ApiError::new(ApiErrorKind::RequestTimeout, "Timed out reaching host"),
        }
    }

    /// Creates an [`ApiErrorKind::RequestTimeout`] error naming the host of
    /// the given request.
    pub fn timed_out_from_request(request: &Request) -> ApiError {
        Self::timed_out_for_url(request.url())
    }

    fn timed_out_for_url(url: &Url) -> ApiError {
        ApiError::new(
            ApiErrorKind::RequestTimeout,
            format!("Timed out attempting to reach host: {}", netloc(url)),
        )
    }

    /// The kind of this error.
    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// The semantic HTTP status of this error. Fixed per kind; see
    /// [`ApiErrorKind::status_code`].
    pub fn status_code(&self) -> Option<StatusCode> {
        self.kind.status_code()
    }

    /// The human-readable description of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP response that produced this error, when one exists.
    pub fn response(&self) -> Option<&ErrorResponse> {
        self.response.as_ref()
    }

    /// The content type reported by an
    /// [`ApiErrorKind::UnsupportedResponseType`] error.
    ///
    /// An alias for the raw body text stored as the message; `None` for
    /// every other kind.
    pub fn content_type(&self) -> Option<&str> {
        match self.kind {
            ApiErrorKind::UnsupportedResponseType => Some(&self.message),
            _ => None,
        }
    }
}

/// Formats the network location of a URL: host, plus the port when the URL
/// names one explicitly. Credentials, path, query, and fragment never appear
/// in error messages.
fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    }
}
