// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability DTOs for authorization-aware UI gating.
//!
//! Capabilities expose what actions an actor is permitted to perform on a
//! selection without leaking domain internals. They are advisory for UI
//! gating; the backend re-checks the same authority on every mutation.

use crate::auth::AuthenticatedActor;
use bigster_domain::{CapabilitySet, Selection, resolve_permissions};
use serde::{Deserialize, Serialize};

/// A single capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Builds a capability from a boolean decision.
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Per-selection capabilities of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCapabilities {
    /// May open the selection detail.
    pub can_view: Capability,
    /// May edit selection metadata.
    pub can_edit: Capability,
    /// May approve the engagement at the pending-approval stage.
    pub can_approve: Capability,
    /// May assign the HR user at the assignment stage.
    pub can_assign_hr: Capability,
    /// May create job-ad announcements.
    pub can_create_announcements: Capability,
    /// May manage candidate applications.
    pub can_manage_applications: Capability,
    /// May request status transitions.
    pub can_change_status: Capability,
    /// May create new selections.
    pub can_create_selection: Capability,
}

impl From<CapabilitySet> for SelectionCapabilities {
    fn from(caps: CapabilitySet) -> Self {
        Self {
            can_view: Capability::from_bool(caps.can_view),
            can_edit: Capability::from_bool(caps.can_edit),
            can_approve: Capability::from_bool(caps.can_approve),
            can_assign_hr: Capability::from_bool(caps.can_assign_hr),
            can_create_announcements: Capability::from_bool(caps.can_create_announcements),
            can_manage_applications: Capability::from_bool(caps.can_manage_applications),
            can_change_status: Capability::from_bool(caps.can_change_status),
            can_create_selection: Capability::from_bool(caps.can_create_selection),
        }
    }
}

/// Computes the capability DTO for an actor over a selection.
#[must_use]
pub fn compute_selection_capabilities(
    actor: &AuthenticatedActor,
    selection: &Selection,
) -> SelectionCapabilities {
    resolve_permissions(&actor.to_domain_actor(), selection).into()
}
