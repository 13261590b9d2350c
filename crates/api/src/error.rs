// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::store::StoreError;
use bigster::CoreError;
use bigster_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role that attempted it.
        role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, role } => {
                write!(f, "Unauthorized: role '{role}' may not perform '{action}'")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Each kind maps to a distinct user-facing category, so the UI
/// can tell "you are not allowed" apart from "that move isn't possible".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor lacks the capability for the requested action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role that attempted it.
        role: String,
    },
    /// The selection is in a terminal status and admits no transitions.
    SelectionClosed {
        /// A human-readable description.
        message: String,
    },
    /// The requested transition violates the lifecycle sequence.
    InvalidTransition {
        /// A human-readable description.
        message: String,
    },
    /// The requested transition targets the current status.
    ///
    /// Benign: safe to surface as "no change".
    NoChange {
        /// A human-readable description.
        message: String,
    },
    /// A stored status value is not in the registry.
    ///
    /// Data corruption or version skew; must reach an operator.
    UnknownStatus {
        /// The unrecognized status value.
        status: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource.
        resource_type: String,
        /// A human-readable description.
        message: String,
    },
    /// The selection was updated concurrently; the retry also failed.
    Conflict {
        /// A human-readable description.
        message: String,
    },
    /// An internal invariant was violated.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, role } => {
                write!(f, "Unauthorized: role '{role}' may not perform '{action}'")
            }
            Self::SelectionClosed { message }
            | Self::InvalidTransition { message }
            | Self::NoChange { message }
            | Self::Conflict { message } => write!(f, "{message}"),
            Self::UnknownStatus { status } => {
                write!(f, "Unknown selection status '{status}'")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized { action, role } => Self::Unauthorized { action, role },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownStatus { status } => ApiError::UnknownStatus { status },
        DomainError::UnknownRole { role } => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role '{role}'"),
        },
        DomainError::InvalidSelectionType(value) => ApiError::InvalidInput {
            field: String::from("selection_type"),
            message: format!("Invalid selection type '{value}'"),
        },
        DomainError::InvalidPackage(value) => ApiError::InvalidInput {
            field: String::from("package"),
            message: format!("Invalid package '{value}'"),
        },
        DomainError::InvalidTitle(message) => ApiError::InvalidInput {
            field: String::from("title"),
            message,
        },
        DomainError::NoOpTransition { status } => ApiError::NoChange {
            message: format!("Selection is already in status '{status}'"),
        },
        DomainError::TerminalState { from, .. } => ApiError::SelectionClosed {
            message: format!("Selection is closed (status '{from}')"),
        },
        DomainError::InvalidSequence { from, to, reason } => ApiError::InvalidTransition {
            message: format!("Cannot transition from '{from}' to '{to}': {reason}"),
        },
        DomainError::PermissionDenied { action, role } => ApiError::Unauthorized { action, role },
        DomainError::ClosedTimestampMismatch { .. } | DomainError::MissingAssignedHr { .. } => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a store error into an API error.
///
/// Conflicts are translated only after the caller has exhausted its single
/// retry.
#[must_use]
pub fn translate_store_error(err: &StoreError) -> ApiError {
    match err {
        StoreError::NotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Selection"),
            message: format!("Selection {id} does not exist"),
        },
        StoreError::Conflict { .. } => ApiError::Conflict {
            message: String::from("Someone else updated this selection, please refresh"),
        },
        StoreError::Duplicate(_) | StoreError::History(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
