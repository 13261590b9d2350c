// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status history records for selections.
//!
//! Every validated status transition appends exactly one
//! [`StatusHistoryEntry`]. Entries are immutable once created; the log is
//! append-only and maintains two invariants:
//!
//! - entries are monotonically ordered by `changed_at`
//! - each entry chains onto the previous one (`previous_status` of entry N
//!   equals `new_status` of entry N-1), and the `new_status` of the latest
//!   entry equals the selection's current status

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use bigster_domain::{Selection, SelectionId, SelectionStatus, UserId};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// An append-only audit record for a single status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// The selection the change belongs to.
    pub selection_id: SelectionId,
    /// The status before the change; `None` for the creation entry.
    pub previous_status: Option<SelectionStatus>,
    /// The status after the change.
    pub new_status: SelectionStatus,
    /// The user who performed the change.
    pub changed_by_user_id: UserId,
    /// When the change happened.
    #[serde(with = "time::serde::rfc3339")]
    pub changed_at: OffsetDateTime,
    /// Optional deadline for completing the new status.
    pub due_date: Option<Date>,
    /// Optional free-form note.
    pub note: Option<String>,
}

impl StatusHistoryEntry {
    /// Creates a new history entry.
    ///
    /// Once created, an entry is immutable.
    #[must_use]
    pub const fn new(
        selection_id: SelectionId,
        previous_status: Option<SelectionStatus>,
        new_status: SelectionStatus,
        changed_by_user_id: UserId,
        changed_at: OffsetDateTime,
        due_date: Option<Date>,
        note: Option<String>,
    ) -> Self {
        Self {
            selection_id,
            previous_status,
            new_status,
            changed_by_user_id,
            changed_at,
            due_date,
            note,
        }
    }
}

/// Errors raised when a history log invariant would be violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The entry belongs to a different selection.
    WrongSelection {
        /// The selection the log tracks.
        expected: SelectionId,
        /// The selection on the offending entry.
        actual: SelectionId,
    },
    /// The entry's timestamp precedes the latest recorded entry.
    OutOfOrder {
        /// The timestamp of the latest recorded entry.
        latest: OffsetDateTime,
        /// The timestamp of the offending entry.
        offered: OffsetDateTime,
    },
    /// The entry does not chain onto the latest recorded status.
    BrokenChain {
        /// The `new_status` of the latest recorded entry.
        expected_previous: Option<SelectionStatus>,
        /// The `previous_status` of the offending entry.
        actual_previous: Option<SelectionStatus>,
    },
    /// The latest entry does not match the selection's current status.
    HeadMismatch {
        /// The selection's current status.
        selection_status: SelectionStatus,
        /// The `new_status` of the latest entry, if any.
        latest_entry_status: Option<SelectionStatus>,
    },
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongSelection { expected, actual } => {
                write!(
                    f,
                    "History entry for selection {} appended to log of selection {}",
                    actual.value(),
                    expected.value()
                )
            }
            Self::OutOfOrder { latest, offered } => {
                write!(
                    f,
                    "History entry at {offered} predates the latest entry at {latest}"
                )
            }
            Self::BrokenChain {
                expected_previous,
                actual_previous,
            } => {
                write!(
                    f,
                    "History entry chains onto {actual_previous:?}, expected {expected_previous:?}"
                )
            }
            Self::HeadMismatch {
                selection_status,
                latest_entry_status,
            } => {
                write!(
                    f,
                    "Latest history entry {latest_entry_status:?} does not match selection status {selection_status}"
                )
            }
        }
    }
}

impl std::error::Error for AuditError {}

/// The append-only status history of one selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<StatusHistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry, enforcing ordering and chaining invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry belongs to another selection, is older
    /// than the latest entry, or does not chain onto the recorded head.
    pub fn append(&mut self, entry: StatusHistoryEntry) -> Result<(), AuditError> {
        if let Some(latest) = self.entries.last() {
            if latest.selection_id != entry.selection_id {
                return Err(AuditError::WrongSelection {
                    expected: latest.selection_id,
                    actual: entry.selection_id,
                });
            }
            if entry.changed_at < latest.changed_at {
                return Err(AuditError::OutOfOrder {
                    latest: latest.changed_at,
                    offered: entry.changed_at,
                });
            }
            if entry.previous_status != Some(latest.new_status) {
                return Err(AuditError::BrokenChain {
                    expected_previous: Some(latest.new_status),
                    actual_previous: entry.previous_status,
                });
            }
        } else if entry.previous_status.is_some() {
            return Err(AuditError::BrokenChain {
                expected_previous: None,
                actual_previous: entry.previous_status,
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Returns the latest entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&StatusHistoryEntry> {
        self.entries.last()
    }

    /// Returns all entries in chronological order.
    #[must_use]
    pub fn entries(&self) -> &[StatusHistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that the log head matches the selection's current status.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::HeadMismatch` if the latest entry's `new_status`
    /// differs from the selection's status, or if the log is empty.
    pub fn verify_head(&self, selection: &Selection) -> Result<(), AuditError> {
        match self.latest() {
            Some(latest) if latest.new_status == selection.status => Ok(()),
            other => Err(AuditError::HeadMismatch {
                selection_status: selection.status,
                latest_entry_status: other.map(|entry| entry.new_status),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    const SELECTION: SelectionId = SelectionId::new(42);
    const CHANGER: UserId = UserId::new(7);

    fn entry(
        previous: Option<SelectionStatus>,
        new: SelectionStatus,
        at: OffsetDateTime,
    ) -> StatusHistoryEntry {
        StatusHistoryEntry::new(SELECTION, previous, new, CHANGER, at, None, None)
    }

    #[test]
    fn test_creation_entry_has_no_previous_status() {
        let mut log = HistoryLog::new();
        let result = log.append(entry(
            None,
            SelectionStatus::FatturaAvSaldata,
            OffsetDateTime::UNIX_EPOCH,
        ));
        assert!(result.is_ok());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_first_entry_with_previous_status_rejected() {
        let mut log = HistoryLog::new();
        let result = log.append(entry(
            Some(SelectionStatus::FatturaAvSaldata),
            SelectionStatus::HrAssegnata,
            OffsetDateTime::UNIX_EPOCH,
        ));
        assert!(matches!(result, Err(AuditError::BrokenChain { .. })));
    }

    #[test]
    fn test_entries_must_chain() {
        let mut log = HistoryLog::new();
        let t0 = OffsetDateTime::UNIX_EPOCH;
        log.append(entry(None, SelectionStatus::FatturaAvSaldata, t0))
            .unwrap();
        log.append(entry(
            Some(SelectionStatus::FatturaAvSaldata),
            SelectionStatus::HrAssegnata,
            t0 + Duration::minutes(1),
        ))
        .unwrap();

        // Skipping the chain head is rejected.
        let result = log.append(entry(
            Some(SelectionStatus::FatturaAvSaldata),
            SelectionStatus::PrimaCallCompletata,
            t0 + Duration::minutes(2),
        ));
        assert!(matches!(result, Err(AuditError::BrokenChain { .. })));
    }

    #[test]
    fn test_out_of_order_timestamps_rejected() {
        let mut log = HistoryLog::new();
        let t0 = OffsetDateTime::UNIX_EPOCH + Duration::hours(1);
        log.append(entry(None, SelectionStatus::FatturaAvSaldata, t0))
            .unwrap();

        let result = log.append(entry(
            Some(SelectionStatus::FatturaAvSaldata),
            SelectionStatus::HrAssegnata,
            OffsetDateTime::UNIX_EPOCH,
        ));
        assert!(matches!(result, Err(AuditError::OutOfOrder { .. })));
    }

    #[test]
    fn test_wrong_selection_rejected() {
        let mut log = HistoryLog::new();
        log.append(entry(
            None,
            SelectionStatus::FatturaAvSaldata,
            OffsetDateTime::UNIX_EPOCH,
        ))
        .unwrap();

        let foreign = StatusHistoryEntry::new(
            SelectionId::new(99),
            Some(SelectionStatus::FatturaAvSaldata),
            SelectionStatus::HrAssegnata,
            CHANGER,
            OffsetDateTime::UNIX_EPOCH + Duration::minutes(1),
            None,
            None,
        );
        assert!(matches!(
            log.append(foreign),
            Err(AuditError::WrongSelection { .. })
        ));
    }

    #[test]
    fn test_latest_reflects_last_append() {
        let mut log = HistoryLog::new();
        let t0 = OffsetDateTime::UNIX_EPOCH;
        log.append(entry(None, SelectionStatus::FatturaAvSaldata, t0))
            .unwrap();
        log.append(entry(
            Some(SelectionStatus::FatturaAvSaldata),
            SelectionStatus::HrAssegnata,
            t0 + Duration::minutes(1),
        ))
        .unwrap();

        let latest = log.latest().unwrap();
        assert_eq!(latest.new_status, SelectionStatus::HrAssegnata);
        assert_eq!(
            latest.previous_status,
            Some(SelectionStatus::FatturaAvSaldata)
        );
    }
}
