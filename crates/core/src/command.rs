// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bigster_domain::{
    DepartmentId, Package, ProfessionalFigureId, SelectionStatus, SelectionType, UserId,
};
use time::Date;

/// A command represents user intent as data only.
///
/// Commands are the only way to request selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new selection in the initial funnel status.
    CreateSelection {
        /// Human-readable title.
        title: String,
        /// Internal or external recruiting.
        selection_type: SelectionType,
        /// Purchased service package.
        package: Package,
        /// The client department.
        department_id: DepartmentId,
        /// The professional figure being recruited.
        professional_figure_id: ProfessionalFigureId,
    },
    /// Assign the HR user, moving the selection to `HR_ASSEGNATA`.
    AssignHr {
        /// The HR user to assign.
        hr_user_id: UserId,
        /// Optional deadline for the new status.
        due_date: Option<Date>,
        /// Optional note recorded in the history entry.
        note: Option<String>,
    },
    /// Request a status transition.
    ChangeStatus {
        /// The requested target status.
        to: SelectionStatus,
        /// Optional deadline for the new status.
        due_date: Option<Date>,
        /// Optional note recorded in the history entry.
        note: Option<String>,
    },
    /// Edit selection metadata without touching the status.
    ///
    /// Permitted even after a terminal status; appends no history entry.
    EditMetadata {
        /// The new title.
        title: String,
    },
}
