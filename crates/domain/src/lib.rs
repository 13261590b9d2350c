// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod display;
mod error;
mod permissions;
mod role;
mod status;
mod transition;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use display::{DisplayMeta, StepBadge, Tone, project_display, project_known};
pub use error::DomainError;
pub use permissions::{
    CapabilitySet, DepartmentScope, department_scope, is_visible_to, resolve_permissions,
};
pub use role::Role;
pub use status::{LINEAR_STEP_TOTAL, SelectionStatus, StatusStep, step_of};
pub use transition::{
    TransitionContext, TransitionDecision, TransitionKind, validate_transition,
};
pub use types::{
    Actor, DepartmentId, Package, ProfessionalFigureId, Selection, SelectionId, SelectionType,
    UserId,
};
pub use validation::{validate_selection, validate_title};
