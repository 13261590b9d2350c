// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CreationResult, TransitionResult};
use bigster_audit::StatusHistoryEntry;
use bigster_domain::{
    Actor, DomainError, Selection, SelectionId, SelectionStatus, TransitionContext,
    resolve_permissions, validate_selection, validate_title, validate_transition,
};
use time::{Date, OffsetDateTime};

/// Creates a new selection in the initial funnel status.
///
/// The caller supplies the identifier (identity assignment is a storage
/// concern). The returned history entry is the creation record, with
/// `previous_status = None`.
///
/// # Errors
///
/// Returns an error if:
/// - the actor's role may not create selections
/// - the title is invalid
pub fn create_selection(
    id: SelectionId,
    command: Command,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<CreationResult, CoreError> {
    let Command::CreateSelection {
        title,
        selection_type,
        package,
        department_id,
        professional_figure_id,
    } = command
    else {
        // Non-creation commands go through apply() instead.
        unreachable!("create_selection called with a non-creation command")
    };

    if !actor.role.can_create_selections() {
        return Err(CoreError::DomainViolation(DomainError::PermissionDenied {
            action: String::from("create_selection"),
            role: actor.role.as_str().to_string(),
        }));
    }

    validate_title(&title)?;

    let selection: Selection = Selection {
        id,
        title,
        status: SelectionStatus::FatturaAvSaldata,
        selection_type,
        package,
        owner_id: actor.id,
        assigned_hr_id: None,
        department_id,
        professional_figure_id,
        created_at: now,
        modified_at: now,
        closed_at: None,
        announcement_count: 0,
        job_collection_count: 0,
    };
    validate_selection(&selection)?;

    let history_entry: StatusHistoryEntry = StatusHistoryEntry::new(
        id,
        None,
        SelectionStatus::FatturaAvSaldata,
        actor.id,
        now,
        None,
        None,
    );

    Ok(CreationResult {
        selection,
        history_entry,
    })
}

/// Applies a command to a selection snapshot, producing the new snapshot and
/// the history entry to append.
///
/// Pure: the caller is responsible for committing the result atomically
/// against the backing store, conditioned on the snapshot's status still
/// holding at commit time.
///
/// # Errors
///
/// Returns an error if:
/// - the actor lacks the capability gating the command
/// - the requested transition violates the lifecycle rules
/// - the resulting snapshot would violate a structural invariant
pub fn apply(
    selection: &Selection,
    command: Command,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AssignHr {
            hr_user_id,
            due_date,
            note,
        } => {
            let capabilities = resolve_permissions(actor, selection);
            if !capabilities.can_assign_hr {
                return Err(CoreError::DomainViolation(DomainError::PermissionDenied {
                    action: String::from("assign_hr"),
                    role: actor.role.as_str().to_string(),
                }));
            }
            transition(
                selection,
                SelectionStatus::HrAssegnata,
                Some(hr_user_id),
                actor,
                now,
                due_date,
                note,
            )
        }
        Command::ChangeStatus { to, due_date, note } => {
            // HR assignment carries an assignee and must go through AssignHr.
            if to == SelectionStatus::HrAssegnata {
                return Err(CoreError::DomainViolation(DomainError::InvalidSequence {
                    from: selection.status.as_str().to_string(),
                    to: to.as_str().to_string(),
                    reason: String::from("HR assignment must specify the HR user"),
                }));
            }
            let capabilities = resolve_permissions(actor, selection);
            // Cancellation has its own gate (owner and administration
            // included); everything else requires the status-change
            // capability up front.
            if to != SelectionStatus::Annullata && !capabilities.can_change_status {
                return Err(CoreError::DomainViolation(DomainError::PermissionDenied {
                    action: String::from("change_status"),
                    role: actor.role.as_str().to_string(),
                }));
            }
            transition(selection, to, None, actor, now, due_date, note)
        }
        Command::EditMetadata { title } => {
            let capabilities = resolve_permissions(actor, selection);
            if !capabilities.can_edit {
                return Err(CoreError::DomainViolation(DomainError::PermissionDenied {
                    action: String::from("edit_selection"),
                    role: actor.role.as_str().to_string(),
                }));
            }
            validate_title(&title)?;

            let mut new_selection: Selection = selection.clone();
            new_selection.title = title;
            new_selection.modified_at = now;

            Ok(TransitionResult {
                new_selection,
                history_entry: None,
            })
        }
        Command::CreateSelection { .. } => {
            // Creation goes through create_selection() instead.
            unreachable!("apply called with a creation command")
        }
    }
}

/// Validates and applies a status transition, producing the new snapshot and
/// its history entry.
fn transition(
    selection: &Selection,
    to: SelectionStatus,
    assign_hr: Option<bigster_domain::UserId>,
    actor: &Actor,
    now: OffsetDateTime,
    due_date: Option<Date>,
    note: Option<String>,
) -> Result<TransitionResult, CoreError> {
    let ctx: TransitionContext = TransitionContext::for_actor(actor, selection);
    let decision = validate_transition(selection.status, to, &ctx)?;

    let mut new_selection: Selection = selection.clone();
    new_selection.status = decision.to;
    new_selection.modified_at = now;
    new_selection.closed_at = decision.to.is_terminal().then_some(now);
    if let Some(hr_user_id) = assign_hr {
        new_selection.assigned_hr_id = Some(hr_user_id);
    }
    validate_selection(&new_selection)?;

    let history_entry: StatusHistoryEntry = StatusHistoryEntry::new(
        selection.id,
        Some(decision.from),
        decision.to,
        actor.id,
        now,
        due_date,
        note,
    );

    Ok(TransitionResult {
        new_selection,
        history_entry: Some(history_entry),
    })
}
