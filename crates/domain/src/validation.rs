// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::SelectionStatus;
use crate::types::Selection;

/// Validates a selection title.
///
/// # Errors
///
/// Returns `DomainError::InvalidTitle` if the title is empty or
/// whitespace-only.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }
    Ok(())
}

/// Validates the structural invariants of a selection snapshot.
///
/// Checked invariants:
/// - `closed_at` is set if and only if the status is terminal
/// - every status at or beyond HR assignment carries an assigned HR user,
///   except a cancellation that happened before assignment
///
/// # Errors
///
/// Returns an error if any invariant is violated.
pub fn validate_selection(selection: &Selection) -> Result<(), DomainError> {
    validate_title(&selection.title)?;

    if selection.status.is_terminal() != selection.closed_at.is_some() {
        return Err(DomainError::ClosedTimestampMismatch {
            status: selection.status.as_str().to_string(),
            has_closed_at: selection.closed_at.is_some(),
        });
    }

    if requires_assigned_hr(selection.status) && selection.assigned_hr_id.is_none() {
        return Err(DomainError::MissingAssignedHr {
            status: selection.status.as_str().to_string(),
        });
    }

    Ok(())
}

/// Whether a status implies an HR user has been assigned.
///
/// `ANNULLATA` is exempt: a selection can be cancelled before assignment.
const fn requires_assigned_hr(status: SelectionStatus) -> bool {
    match status.ordinal() {
        Some(ordinal) => ordinal >= 2,
        None => matches!(
            status,
            SelectionStatus::SelezioniInSostituzione | SelectionStatus::Chiusa
        ),
    }
}
