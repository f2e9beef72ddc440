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

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration-level failure for an integration.
///
/// This family covers problems with the integration's setup on our side
/// (name collisions, invalid form input), not with the wire. It is
/// deliberately unrelated to [`IntegrationProviderError`]: a handler scoped
/// to configuration failures must never catch provider-side noise, and vice
/// versa.
///
/// [`IntegrationProviderError`]: crate::IntegrationProviderError
#[derive(Debug, Clone, Error)]
pub enum IntegrationError {
    /// A failure with no more specific category.
    #[error("{0}")]
    General(String),
    /// An integration with the requested display name already exists.
    #[error("{0}")]
    DuplicateDisplayName(String),
    /// Submitted configuration-form data failed validation. The per-field
    /// failures are the payload; the message is fixed.
    #[error("Invalid integration action")]
    Form {
        /// The validation failures, in the order they were detected.
        field_errors: Vec<FieldError>,
    },
}

impl IntegrationError {
    /// Creates a form-validation failure from the given per-field errors.
    pub fn form(field_errors: Vec<FieldError>) -> IntegrationError {
        IntegrationError::Form { field_errors }
    }

    /// The per-field validation failures of a form error, in order. `None`
    /// for every other variant.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            IntegrationError::Form { field_errors } => Some(field_errors),
            _ => None,
        }
    }
}

/// A validation failure tied to one input field of an integration
/// configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The name of the form field that failed validation.
    pub field: String,
    /// The failure, in terms suitable for display next to the field.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A non-fatal error reported by the external provider itself.
///
/// Not a variant of [`IntegrationError`]: provider-side failures are a
/// different axis, and callers routinely swallow or downgrade them without
/// touching their configuration-error handling.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct IntegrationProviderError {
    message: String,
}

impl IntegrationProviderError {
    /// Creates a provider error with the given message.
    pub fn new(message: impl Into<String>) -> IntegrationProviderError {
        IntegrationProviderError {
            message: message.into(),
        }
    }

    /// The provider's description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}
