// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bigster_audit::StatusHistoryEntry;
use bigster_domain::Selection;

/// The result of a successfully applied command.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Status changes carry exactly one history entry; metadata
/// edits carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new selection snapshot after the command.
    pub new_selection: Selection,
    /// The history entry recording the status change, if the status changed.
    pub history_entry: Option<StatusHistoryEntry>,
}

/// The result of creating a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationResult {
    /// The newly created selection snapshot.
    pub selection: Selection,
    /// The creation history entry (`previous_status` is `None`).
    pub history_entry: StatusHistoryEntry,
}
