// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status transition validation.
//!
//! The validator decides whether `(from, to, actor context)` is a legal
//! mutation. Rules are checked in a fixed order, first match wins:
//!
//! 1. `from == to` is a no-op and is rejected to force explicit intent.
//! 2. Terminal statuses admit no transitions at all.
//! 3. `ANNULLATA` is reachable from every non-terminal status, gated by
//!    cancel permission.
//! 4. From `PROPOSTA_CANDIDATI` the funnel forks: close (`CHIUSA`) or open a
//!    replacement (`SELEZIONI_IN_SOSTITUZIONE`); a replacement re-enters the
//!    funnel at `COLLOQUI_IN_CORSO`.
//! 5. Linear forward transitions advance exactly one ordinal, gated per step.
//! 6. Everything else (backward, skip-ahead, unsupported) is rejected.
//!
//! Validation never applies the transition. Applying it and appending the
//! history entry is the caller's responsibility, performed atomically with
//! the selection update.

use crate::error::DomainError;
use crate::role::Role;
use crate::status::SelectionStatus;
use crate::types::{Actor, Selection};

/// The actor's relationship to the selection, as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// The actor's role.
    pub role: Role,
    /// Whether the actor created the selection.
    pub is_owner: bool,
    /// Whether the actor is the assigned HR user.
    pub is_assigned_hr: bool,
}

impl TransitionContext {
    /// Derives the context for an actor acting on a selection.
    #[must_use]
    pub fn for_actor(actor: &Actor, selection: &Selection) -> Self {
        Self {
            role: actor.role,
            is_owner: selection.is_owned_by(actor),
            is_assigned_hr: selection.is_assigned_to(actor),
        }
    }

    /// Cancellation is reserved to the CEO, administration, developers,
    /// and the selection owner.
    #[must_use]
    pub const fn can_cancel(&self) -> bool {
        self.is_owner
            || matches!(
                self.role,
                Role::Ceo | Role::Amministrazione | Role::Developer
            )
    }

    /// The assigned HR user, or any high-access role.
    #[must_use]
    pub const fn is_assigned_hr_or_high(&self) -> bool {
        self.is_assigned_hr || self.role.has_high_access()
    }
}

/// Classifies a permitted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// One forward step through the linear funnel.
    Advance,
    /// Successful closure from the end of the funnel.
    Close,
    /// A placement fell through; the selection re-opens for replacement.
    Replace,
    /// Re-entry from replacement into the funnel at interviews.
    Reenter,
    /// Cancellation from any non-terminal status.
    Cancel,
}

/// A validated transition, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDecision {
    /// The status the transition starts from.
    pub from: SelectionStatus,
    /// The status the transition moves to.
    pub to: SelectionStatus,
    /// The classification of the transition.
    pub kind: TransitionKind,
}

/// Validates a requested status transition.
///
/// # Errors
///
/// Returns:
/// - `DomainError::NoOpTransition` if `from == to`
/// - `DomainError::TerminalState` if `from` is terminal
/// - `DomainError::PermissionDenied` if the sequence is legal but the actor
///   lacks the capability gating it
/// - `DomainError::InvalidSequence` for backward, skip-ahead, or otherwise
///   unsupported transitions
pub fn validate_transition(
    from: SelectionStatus,
    to: SelectionStatus,
    ctx: &TransitionContext,
) -> Result<TransitionDecision, DomainError> {
    if from == to {
        return Err(DomainError::NoOpTransition {
            status: from.as_str().to_string(),
        });
    }

    if from.is_terminal() {
        return Err(DomainError::TerminalState {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        });
    }

    if to == SelectionStatus::Annullata {
        if !ctx.can_cancel() {
            return Err(permission_denied("cancel_selection", ctx));
        }
        return Ok(decision(from, to, TransitionKind::Cancel));
    }

    // Forks around the end of the funnel and the replacement loop.
    match (from, to) {
        (SelectionStatus::PropostaCandidati, SelectionStatus::Chiusa) => {
            if !ctx.role.has_high_access() {
                return Err(permission_denied("close_selection", ctx));
            }
            return Ok(decision(from, to, TransitionKind::Close));
        }
        (SelectionStatus::PropostaCandidati, SelectionStatus::SelezioniInSostituzione) => {
            if !ctx.role.has_high_access() {
                return Err(permission_denied("open_replacement", ctx));
            }
            return Ok(decision(from, to, TransitionKind::Replace));
        }
        (SelectionStatus::SelezioniInSostituzione, SelectionStatus::ColloquiInCorso) => {
            if !ctx.is_assigned_hr_or_high() {
                return Err(permission_denied("reenter_interviews", ctx));
            }
            return Ok(decision(from, to, TransitionKind::Reenter));
        }
        _ => {}
    }

    if let (Some(from_ordinal), Some(to_ordinal)) = (from.ordinal(), to.ordinal()) {
        if to_ordinal == from_ordinal + 1 {
            return validate_linear_gate(from, to, ctx)
                .map(|()| decision(from, to, TransitionKind::Advance));
        }
        let reason = if to_ordinal <= from_ordinal {
            String::from("the funnel only moves forward")
        } else {
            String::from("the funnel advances one step at a time")
        };
        return Err(DomainError::InvalidSequence {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
            reason,
        });
    }

    Err(DomainError::InvalidSequence {
        from: from.as_str().to_string(),
        to: to.as_str().to_string(),
        reason: String::from("transition not permitted by the selection lifecycle"),
    })
}

/// Checks the actor gate for a single forward funnel step.
fn validate_linear_gate(
    from: SelectionStatus,
    to: SelectionStatus,
    ctx: &TransitionContext,
) -> Result<(), DomainError> {
    match (from, to) {
        // HR assignment is a management act, before any HR user is attached.
        (SelectionStatus::FatturaAvSaldata, SelectionStatus::HrAssegnata) => {
            if ctx.role.has_high_access() {
                Ok(())
            } else {
                Err(permission_denied("assign_hr", ctx))
            }
        }
        // Announcement approval is reserved to the CEO tier.
        (SelectionStatus::BozzaAnnuncioInApprovazioneCeo, SelectionStatus::AnnuncioApprovato) => {
            if ctx.role.can_approve_announcements() {
                Ok(())
            } else {
                Err(permission_denied("approve_announcement", ctx))
            }
        }
        // Every other step is driven by the assigned HR user.
        _ => {
            if ctx.is_assigned_hr_or_high() {
                Ok(())
            } else {
                Err(permission_denied("advance_status", ctx))
            }
        }
    }
}

const fn decision(
    from: SelectionStatus,
    to: SelectionStatus,
    kind: TransitionKind,
) -> TransitionDecision {
    TransitionDecision { from, to, kind }
}

fn permission_denied(action: &str, ctx: &TransitionContext) -> DomainError {
    DomainError::PermissionDenied {
        action: action.to_string(),
        role: ctx.role.as_str().to_string(),
    }
}
