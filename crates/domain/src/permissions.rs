// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability resolution for an actor over a specific selection.
//!
//! Every caller (server validation, UI gating) consults this one authority
//! instead of duplicating boolean formulas. All flags are computed for every
//! call; there are no early-return shortcuts that leave flags unset.

use crate::role::Role;
use crate::status::SelectionStatus;
use crate::types::{Actor, DepartmentId, Selection};

/// The computed boolean permissions an actor holds over a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySet {
    /// May open the selection detail.
    pub can_view: bool,
    /// May edit selection metadata.
    pub can_edit: bool,
    /// May approve the engagement at the pending-approval stage.
    pub can_approve: bool,
    /// May assign the HR user at the assignment stage.
    pub can_assign_hr: bool,
    /// May create job-ad announcements.
    pub can_create_announcements: bool,
    /// May manage candidate applications.
    pub can_manage_applications: bool,
    /// May request status transitions.
    pub can_change_status: bool,
    /// May create new selections.
    pub can_create_selection: bool,
}

/// Computes the capability set for `(actor, selection)`.
#[must_use]
pub fn resolve_permissions(actor: &Actor, selection: &Selection) -> CapabilitySet {
    let is_owner = selection.is_owned_by(actor);
    let is_assigned_hr = selection.is_assigned_to(actor);
    let high = actor.role.has_high_access();
    let hr_operator = actor.role == Role::RisorseUmane;
    let pending_approval = selection.status == SelectionStatus::FatturaAvSaldata;

    CapabilitySet {
        can_view: high || is_owner || is_assigned_hr,
        can_edit: high || is_owner,
        can_approve: high && pending_approval,
        can_assign_hr: high && pending_approval,
        can_create_announcements: (hr_operator && is_assigned_hr) || high,
        can_manage_applications: (hr_operator && is_assigned_hr) || high || is_owner,
        can_change_status: hr_operator || high,
        can_create_selection: actor.role.can_create_selections(),
    }
}

/// Which departments an actor may see in list and filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentScope {
    /// Every department.
    All,
    /// A single department (department heads without high access).
    Only(DepartmentId),
    /// No department-wide visibility; per-selection capabilities apply.
    OwnSelectionsOnly,
}

/// Computes the department visibility scope for list/filter UIs.
///
/// This scoping never gates the state machine itself.
#[must_use]
pub const fn department_scope(actor: &Actor) -> DepartmentScope {
    if actor.role.has_high_access() {
        return DepartmentScope::All;
    }
    if let (Role::Responsabile, Some(department_id)) = (actor.role, actor.department_id) {
        return DepartmentScope::Only(department_id);
    }
    DepartmentScope::OwnSelectionsOnly
}

/// Whether a selection appears in the actor's listings.
///
/// Listing visibility is the per-selection `can_view` capability widened by
/// the department scope of department heads.
#[must_use]
pub fn is_visible_to(actor: &Actor, selection: &Selection) -> bool {
    if resolve_permissions(actor, selection).can_view {
        return true;
    }
    matches!(
        department_scope(actor),
        DepartmentScope::Only(department_id) if department_id == selection.department_id
    )
}
