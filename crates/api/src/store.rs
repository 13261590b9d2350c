// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory selection storage with optimistic concurrency.
//!
//! The engine itself is pure; this store is the collaborator responsible for
//! making validate-then-apply atomic. A transition commit is conditioned on
//! the selection's status still matching the snapshot the transition was
//! validated against. On mismatch the commit fails with
//! [`StoreError::Conflict`] and the caller re-runs the whole cycle.

use bigster::{CreationResult, TransitionResult};
use bigster_audit::{AuditError, HistoryLog};
use bigster_domain::{Selection, SelectionId, SelectionStatus};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by the selection store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The selection does not exist.
    #[error("Selection {0} not found")]
    NotFound(i64),
    /// The selection was updated concurrently since it was read.
    #[error(
        "Selection {id} was updated concurrently: expected status '{expected}', found '{actual}'"
    )]
    Conflict {
        /// The selection identifier.
        id: i64,
        /// The status the transition was validated against.
        expected: String,
        /// The status found at commit time.
        actual: String,
    },
    /// A selection with this identifier already exists.
    #[error("Selection {0} already exists")]
    Duplicate(i64),
    /// A history invariant would have been violated.
    #[error("History invariant violated: {0}")]
    History(#[from] AuditError),
}

/// In-memory store of selections and their status histories.
#[derive(Debug, Default)]
pub struct SelectionStore {
    selections: HashMap<SelectionId, Selection>,
    histories: HashMap<SelectionId, HistoryLog>,
    next_id: i64,
}

impl SelectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selections: HashMap::new(),
            histories: HashMap::new(),
            next_id: 1,
        }
    }

    /// Allocates the next selection identifier.
    pub const fn allocate_id(&mut self) -> SelectionId {
        let id = self.next_id;
        self.next_id += 1;
        SelectionId::new(id)
    }

    /// Inserts a newly created selection and its creation history entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Duplicate` if the identifier is already taken.
    pub fn insert(&mut self, creation: CreationResult) -> Result<(), StoreError> {
        let id = creation.selection.id;
        if self.selections.contains_key(&id) {
            return Err(StoreError::Duplicate(id.value()));
        }
        let mut log = HistoryLog::new();
        log.append(creation.history_entry)?;
        self.selections.insert(id, creation.selection);
        self.histories.insert(id, log);
        Ok(())
    }

    /// Returns a snapshot of a selection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the selection does not exist.
    pub fn get(&self, id: SelectionId) -> Result<Selection, StoreError> {
        self.selections
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id.value()))
    }

    /// Returns the status history of a selection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the selection does not exist.
    pub fn history(&self, id: SelectionId) -> Result<&HistoryLog, StoreError> {
        self.histories
            .get(&id)
            .ok_or(StoreError::NotFound(id.value()))
    }

    /// Returns every selection, ordered by identifier.
    #[must_use]
    pub fn list(&self) -> Vec<Selection> {
        let mut selections: Vec<Selection> = self.selections.values().cloned().collect();
        selections.sort_by_key(|selection| selection.id);
        selections
    }

    /// Commits an applied command as a single atomic read-modify-write.
    ///
    /// The write is conditioned on the stored status still equalling
    /// `expected_status`, the status the command was validated against.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `StoreError::NotFound` if the selection disappeared
    /// - `StoreError::Conflict` if the status moved since the read
    /// - `StoreError::History` if the history entry does not chain
    pub fn commit(
        &mut self,
        expected_status: SelectionStatus,
        result: TransitionResult,
    ) -> Result<(), StoreError> {
        let id = result.new_selection.id;
        let current = self
            .selections
            .get(&id)
            .ok_or(StoreError::NotFound(id.value()))?;

        if current.status != expected_status {
            return Err(StoreError::Conflict {
                id: id.value(),
                expected: expected_status.as_str().to_string(),
                actual: current.status.as_str().to_string(),
            });
        }

        if let Some(entry) = result.history_entry {
            let log = self
                .histories
                .get_mut(&id)
                .ok_or(StoreError::NotFound(id.value()))?;
            log.append(entry)?;
        }
        self.selections.insert(id, result.new_selection);
        Ok(())
    }
}
