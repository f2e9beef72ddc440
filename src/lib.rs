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

//! Typed error classification for third-party HTTP integrations.
//!
//! Code that talks to many external services sees the same failures in many
//! shapes: connection errors, timeouts, throttling, rejected credentials,
//! responses in formats nobody asked for. This crate normalizes them into a
//! small, closed set of typed categories so that retry policy, user
//! messaging, and logging can branch on error *kind* instead of on raw
//! transport details.
//!
//! Three families, catchable independently:
//!
//! * [`ApiError`] — the status-coded taxonomy. Each [`ApiErrorKind`] carries
//!   a fixed semantic status (503 for an unreachable host, 504 for a
//!   timeout, and so on), a displayable message, and optionally the
//!   [`ErrorResponse`] that produced it. [`Error::classify`] turns a raw
//!   [`reqwest::Error`] into one of these, or passes it through unmodified
//!   when it matches no kind.
//! * [`TransportError`] — failures of the HTTP client layer itself,
//!   including the explicit 4xx report [`ClientError`] and the
//!   [`IgnorableAppError`] marker.
//! * [`IntegrationError`] and [`IntegrationProviderError`] — configuration
//!   failures and provider-reported non-fatal failures. The two share no
//!   common ancestor on purpose.
//!
//! Construction is pure and synchronous: no I/O, no shared state, no
//! failure modes of its own.

#![warn(missing_debug_implementations, missing_docs)]

mod error;
mod integration;
mod response;
mod transport;

pub use error::{ApiError, ApiErrorKind, Error};
pub use integration::{FieldError, IntegrationError, IntegrationProviderError};
pub use response::ErrorResponse;
pub use transport::{ClientError, IgnorableAppError, TransportError};
