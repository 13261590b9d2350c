// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;
use time::OffsetDateTime;

use bigster::{Command, apply, create_selection as core_create_selection};
use bigster_domain::{
    Package, Selection, SelectionId, SelectionStatus, SelectionType, is_visible_to,
};

use crate::auth::AuthenticatedActor;
use crate::capabilities::compute_selection_capabilities;
use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_store_error};
use crate::request_response::{
    AssignHrRequest, ChangeStatusRequest, ChangeStatusResponse, CreateSelectionRequest,
    CreateSelectionResponse, EditSelectionRequest, EditSelectionResponse, ListSelectionsResponse,
    ListStatusesResponse, SelectionHistoryResponse, SelectionView, StatusInfo,
};
use crate::store::{SelectionStore, StoreError};

fn view_for(actor: &AuthenticatedActor, selection: Selection) -> SelectionView {
    let capabilities = compute_selection_capabilities(actor, &selection);
    SelectionView::new(selection, capabilities)
}

/// Applies a lifecycle command with exactly one automatic retry.
///
/// The command is validated against a fresh snapshot and committed
/// conditionally on that snapshot's status. If another writer moved the
/// status between read and commit, the whole cycle re-runs once against
/// the new snapshot; a second conflict is surfaced to the caller.
fn apply_with_retry(
    store: &mut SelectionStore,
    id: SelectionId,
    command: &Command,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<Selection, ApiError> {
    let domain_actor = actor.to_domain_actor();
    let mut retried = false;
    loop {
        let snapshot = store.get(id).map_err(|e| translate_store_error(&e))?;
        let result =
            apply(&snapshot, command.clone(), &domain_actor, now).map_err(translate_core_error)?;
        match store.commit(snapshot.status, result) {
            Ok(()) => return store.get(id).map_err(|e| translate_store_error(&e)),
            Err(err @ StoreError::Conflict { .. }) if !retried => {
                tracing::warn!(
                    selection_id = id.value(),
                    error = %err,
                    "Concurrent update detected, retrying once"
                );
                retried = true;
            }
            Err(err) => return Err(translate_store_error(&err)),
        }
    }
}

/// Creates a new selection in the initial lifecycle status.
///
/// # Errors
///
/// Returns an error if the actor may not create selections or any field
/// fails validation.
pub fn create_selection(
    store: &mut SelectionStore,
    request: CreateSelectionRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<CreateSelectionResponse, ApiError> {
    let selection_type =
        SelectionType::from_str(&request.selection_type).map_err(translate_domain_error)?;
    let package = Package::from_str(&request.package).map_err(translate_domain_error)?;

    let id = store.allocate_id();
    let command = Command::CreateSelection {
        title: request.title,
        selection_type,
        package,
        department_id: bigster_domain::DepartmentId::new(request.department_id),
        professional_figure_id: bigster_domain::ProfessionalFigureId::new(
            request.professional_figure_id,
        ),
    };
    let creation = core_create_selection(id, command, &actor.to_domain_actor(), now)
        .map_err(translate_core_error)?;
    let selection = creation.selection.clone();
    store.insert(creation).map_err(|e| translate_store_error(&e))?;

    tracing::info!(
        selection_id = id.value(),
        actor_id = actor.id.value(),
        "Selection created"
    );
    Ok(CreateSelectionResponse {
        selection: view_for(actor, selection),
        message: String::from("Selection created"),
    })
}

/// Returns a single selection with presentation and capability metadata.
///
/// # Errors
///
/// Returns an error if the selection does not exist or the actor may not
/// view it.
pub fn get_selection(
    store: &SelectionStore,
    selection_id: i64,
    actor: &AuthenticatedActor,
) -> Result<SelectionView, ApiError> {
    let selection = store
        .get(SelectionId::new(selection_id))
        .map_err(|e| translate_store_error(&e))?;
    ensure_visible(actor, &selection)?;
    Ok(view_for(actor, selection))
}

fn ensure_visible(actor: &AuthenticatedActor, selection: &Selection) -> Result<(), ApiError> {
    if is_visible_to(&actor.to_domain_actor(), selection) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized {
            action: String::from("view_selection"),
            role: actor.role.as_str().to_string(),
        })
    }
}

/// Lists the selections visible to the requesting actor.
///
/// Full-access and high-access roles see everything; department heads see
/// their department; everyone else sees selections they own or are
/// assigned to.
#[must_use]
pub fn list_selections(store: &SelectionStore, actor: &AuthenticatedActor) -> ListSelectionsResponse {
    let domain_actor = actor.to_domain_actor();
    let selections: Vec<SelectionView> = store
        .list()
        .into_iter()
        .filter(|selection| is_visible_to(&domain_actor, selection))
        .map(|selection| view_for(actor, selection))
        .collect();
    let total = selections.len();
    ListSelectionsResponse { selections, total }
}

/// Transitions a selection to a new status.
///
/// # Errors
///
/// Returns an error if the selection does not exist, the target status is
/// not registered, the transition violates the lifecycle rules, the actor
/// lacks the required authority, or the selection was updated concurrently
/// twice in a row.
pub fn change_status(
    store: &mut SelectionStore,
    selection_id: i64,
    request: ChangeStatusRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<ChangeStatusResponse, ApiError> {
    let to = SelectionStatus::from_str(&request.new_status).map_err(translate_domain_error)?;
    let command = Command::ChangeStatus {
        to,
        due_date: request.due_date,
        note: request.note,
    };
    let selection = apply_with_retry(store, SelectionId::new(selection_id), &command, actor, now)?;

    tracing::info!(
        selection_id,
        new_status = to.as_str(),
        actor_id = actor.id.value(),
        "Selection status changed"
    );
    Ok(ChangeStatusResponse {
        selection: view_for(actor, selection),
        message: format!("Selection moved to '{to}'"),
    })
}

/// Assigns the responsible HR user and advances the selection to the
/// assignment stage.
///
/// # Errors
///
/// Returns an error if the selection does not exist, the actor lacks
/// assignment authority, the selection is not at the assignment stage, or
/// the selection was updated concurrently twice in a row.
pub fn assign_hr(
    store: &mut SelectionStore,
    selection_id: i64,
    request: AssignHrRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<ChangeStatusResponse, ApiError> {
    let command = Command::AssignHr {
        hr_user_id: bigster_domain::UserId::new(request.hr_user_id),
        due_date: request.due_date,
        note: request.note,
    };
    let selection = apply_with_retry(store, SelectionId::new(selection_id), &command, actor, now)?;

    tracing::info!(
        selection_id,
        hr_user_id = request.hr_user_id,
        actor_id = actor.id.value(),
        "HR user assigned"
    );
    Ok(ChangeStatusResponse {
        selection: view_for(actor, selection),
        message: String::from("HR user assigned"),
    })
}

/// Edits selection metadata without touching the lifecycle.
///
/// # Errors
///
/// Returns an error if the selection does not exist, the actor may not
/// edit it, or the title is invalid.
pub fn edit_selection(
    store: &mut SelectionStore,
    selection_id: i64,
    request: EditSelectionRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<EditSelectionResponse, ApiError> {
    let command = Command::EditMetadata {
        title: request.title,
    };
    let selection = apply_with_retry(store, SelectionId::new(selection_id), &command, actor, now)?;
    Ok(EditSelectionResponse {
        selection: view_for(actor, selection),
        message: String::from("Selection updated"),
    })
}

/// Returns the full status history of a selection, oldest first.
///
/// # Errors
///
/// Returns an error if the selection does not exist or the actor may not
/// view it.
pub fn selection_history(
    store: &SelectionStore,
    selection_id: i64,
    actor: &AuthenticatedActor,
) -> Result<SelectionHistoryResponse, ApiError> {
    let id = SelectionId::new(selection_id);
    let selection = store.get(id).map_err(|e| translate_store_error(&e))?;
    ensure_visible(actor, &selection)?;
    let log = store.history(id).map_err(|e| translate_store_error(&e))?;
    Ok(SelectionHistoryResponse {
        selection_id,
        entries: log.entries().to_vec(),
    })
}

/// Returns the requesting actor's capabilities over a selection.
///
/// Unlike the other read endpoints this one never hides the selection:
/// the whole point is to tell the caller what they may do, including
/// "nothing".
///
/// # Errors
///
/// Returns an error if the selection does not exist.
pub fn selection_capabilities(
    store: &SelectionStore,
    selection_id: i64,
    actor: &AuthenticatedActor,
) -> Result<crate::capabilities::SelectionCapabilities, ApiError> {
    let selection = store
        .get(SelectionId::new(selection_id))
        .map_err(|e| translate_store_error(&e))?;
    Ok(compute_selection_capabilities(actor, &selection))
}

/// Lists every registered status with its presentation metadata.
#[must_use]
pub fn list_statuses() -> ListStatusesResponse {
    let statuses = SelectionStatus::ALL
        .iter()
        .map(|status| StatusInfo {
            code: status.as_str().to_string(),
            step: status.step(),
            display: bigster_domain::project_known(*status),
            is_terminal: status.is_terminal(),
        })
        .collect();
    ListStatusesResponse { statuses }
}
