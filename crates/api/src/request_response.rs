// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use crate::capabilities::SelectionCapabilities;
use bigster_audit::StatusHistoryEntry;
use bigster_domain::{DisplayMeta, Selection, StatusStep};
use time::Date;

/// API request to create a new selection.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSelectionRequest {
    /// The selection title.
    pub title: String,
    /// The selection type (INTERNAL or EXTERNAL).
    pub selection_type: String,
    /// The contracted package (BASE or MDO).
    pub package: String,
    /// The department the selection recruits for.
    pub department_id: i64,
    /// The professional figure being recruited.
    pub professional_figure_id: i64,
}

/// API response for a successful selection creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CreateSelectionResponse {
    /// The created selection, with presentation metadata.
    pub selection: SelectionView,
    /// A success message.
    pub message: String,
}

/// A selection enriched with presentation and authorization metadata.
///
/// The raw status code is returned alongside its display projection so
/// clients never have to interpret lifecycle codes themselves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SelectionView {
    /// The selection record.
    pub selection: Selection,
    /// Where the current status sits in the funnel.
    pub step: StatusStep,
    /// Presentation metadata for the current status.
    pub display: DisplayMeta,
    /// What the requesting actor may do with this selection.
    pub capabilities: SelectionCapabilities,
}

impl SelectionView {
    /// Builds a view from a selection and the requesting actor's capabilities.
    #[must_use]
    pub fn new(selection: Selection, capabilities: SelectionCapabilities) -> Self {
        let step = selection.status.step();
        let display = bigster_domain::project_known(selection.status);
        Self {
            selection,
            step,
            display,
            capabilities,
        }
    }
}

/// API request to transition a selection to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    /// The target status code.
    pub new_status: String,
    /// Optional due date for the next stage.
    pub due_date: Option<Date>,
    /// Optional free-form note recorded in the history.
    pub note: Option<String>,
}

/// API response for a successful status transition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChangeStatusResponse {
    /// The selection after the transition.
    pub selection: SelectionView,
    /// A success message.
    pub message: String,
}

/// API request to assign the responsible HR user to a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignHrRequest {
    /// The HR user to assign.
    pub hr_user_id: i64,
    /// Optional due date for the next stage.
    pub due_date: Option<Date>,
    /// Optional free-form note recorded in the history.
    pub note: Option<String>,
}

/// API request to edit selection metadata.
///
/// Metadata edits do not touch the lifecycle and are allowed even after
/// the selection reaches a terminal status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSelectionRequest {
    /// The new title.
    pub title: String,
}

/// API response for a successful metadata edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EditSelectionResponse {
    /// The selection after the edit.
    pub selection: SelectionView,
    /// A success message.
    pub message: String,
}

/// API response listing the selections visible to the requesting actor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ListSelectionsResponse {
    /// The visible selections, ordered by identifier.
    pub selections: Vec<SelectionView>,
    /// How many selections are visible.
    pub total: usize,
}

/// API response with the full status history of a selection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SelectionHistoryResponse {
    /// The selection identifier.
    pub selection_id: i64,
    /// The history entries, oldest first.
    pub entries: Vec<StatusHistoryEntry>,
}

/// A single status in the registry, with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusInfo {
    /// The status code.
    pub code: String,
    /// Where the status sits in the funnel.
    pub step: StatusStep,
    /// Presentation metadata.
    pub display: DisplayMeta,
    /// Whether the status is terminal.
    pub is_terminal: bool,
}

/// API response listing every registered status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ListStatusesResponse {
    /// Every registered status, funnel order first, then specials.
    pub statuses: Vec<StatusInfo>,
}
