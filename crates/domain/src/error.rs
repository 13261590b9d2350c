// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Status value is not in the registry.
    ///
    /// This indicates data corruption or version skew and must be surfaced
    /// to an operator, never auto-corrected.
    UnknownStatus {
        /// The unrecognized status value.
        status: String,
    },
    /// Role value is not in the closed role set.
    UnknownRole {
        /// The unrecognized role value.
        role: String,
    },
    /// Selection type value is invalid.
    InvalidSelectionType(String),
    /// Package value is invalid.
    InvalidPackage(String),
    /// Selection title is empty or invalid.
    InvalidTitle(String),
    /// Requested transition targets the current status.
    ///
    /// A benign rejection: no change was requested, so none is applied.
    NoOpTransition {
        /// The status the selection already holds.
        status: String,
    },
    /// Attempted transition out of a terminal status.
    TerminalState {
        /// The terminal status the selection holds.
        from: String,
        /// The requested target status.
        to: String,
    },
    /// Attempted skip, backward, or otherwise unsupported transition.
    InvalidSequence {
        /// The current status.
        from: String,
        /// The requested target status.
        to: String,
        /// Why the sequence is not permitted.
        reason: String,
    },
    /// The actor lacks the capability gating the requested mutation.
    PermissionDenied {
        /// The action that was attempted.
        action: String,
        /// The role of the actor that attempted it.
        role: String,
    },
    /// `closed_at` presence does not match the terminal classification
    /// of the status.
    ClosedTimestampMismatch {
        /// The selection status.
        status: String,
        /// Whether `closed_at` was set.
        has_closed_at: bool,
    },
    /// A status at or beyond HR assignment has no assigned HR user.
    MissingAssignedHr {
        /// The selection status.
        status: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus { status } => {
                write!(f, "Unknown selection status '{status}'")
            }
            Self::UnknownRole { role } => {
                write!(f, "Unknown role '{role}'")
            }
            Self::InvalidSelectionType(value) => {
                write!(f, "Invalid selection type '{value}'")
            }
            Self::InvalidPackage(value) => {
                write!(f, "Invalid package '{value}'")
            }
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::NoOpTransition { status } => {
                write!(f, "Selection is already in status '{status}'")
            }
            Self::TerminalState { from, to } => {
                write!(
                    f,
                    "Selection is closed: cannot transition from terminal status '{from}' to '{to}'"
                )
            }
            Self::InvalidSequence { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
            Self::PermissionDenied { action, role } => {
                write!(f, "Role '{role}' is not permitted to perform '{action}'")
            }
            Self::ClosedTimestampMismatch {
                status,
                has_closed_at,
            } => {
                if *has_closed_at {
                    write!(
                        f,
                        "Selection in non-terminal status '{status}' must not have a closed_at timestamp"
                    )
                } else {
                    write!(
                        f,
                        "Selection in terminal status '{status}' must have a closed_at timestamp"
                    )
                }
            }
            Self::MissingAssignedHr { status } => {
                write!(
                    f,
                    "Selection in status '{status}' must have an assigned HR user"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
