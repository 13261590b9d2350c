// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use bigster_domain::{DepartmentId, Role, UserId};
use time::{Duration, OffsetDateTime};

use crate::request_response::{ChangeStatusRequest, CreateSelectionRequest};
use crate::store::SelectionStore;
use crate::{AuthenticatedActor, change_status, create_selection};

pub fn administration() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new(1), Role::Amministrazione, None)
}

pub fn hr_manager() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new(2), Role::ResponsabileRisorseUmane, None)
}

pub fn assigned_hr() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new(3), Role::RisorseUmane, None)
}

pub fn other_hr() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new(4), Role::RisorseUmane, None)
}

pub fn ceo() -> AuthenticatedActor {
    AuthenticatedActor::new(UserId::new(5), Role::Ceo, None)
}

pub fn department_head(department: i64) -> AuthenticatedActor {
    AuthenticatedActor::new(
        UserId::new(6),
        Role::Responsabile,
        Some(DepartmentId::new(department)),
    )
}

pub fn base_time() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
}

pub fn valid_create_request() -> CreateSelectionRequest {
    CreateSelectionRequest {
        title: String::from("Backend developer"),
        selection_type: String::from("EXTERNAL"),
        package: String::from("BASE"),
        department_id: 7,
        professional_figure_id: 12,
    }
}

/// Creates a selection and returns its identifier.
pub fn seed_selection(store: &mut SelectionStore) -> i64 {
    let response = create_selection(store, valid_create_request(), &administration(), base_time())
        .expect("Failed to create selection");
    response.selection.selection.id.value()
}

/// Advances a selection to the given status code through the full funnel.
///
/// HR assignment goes through the dedicated command, and the announcement
/// approval step is performed by the CEO; every other step is driven by
/// the HR manager.
pub fn advance_to(store: &mut SelectionStore, selection_id: i64, target: &str) {
    let codes = [
        "HR_ASSEGNATA",
        "PRIMA_CALL_COMPLETATA",
        "RACCOLTA_JOB_IN_APPROVAZIONE_CLIENTE",
        "RACCOLTA_JOB_APPROVATA_CLIENTE",
        "BOZZA_ANNUNCIO_IN_APPROVAZIONE_CEO",
        "ANNUNCIO_APPROVATO",
        "ANNUNCIO_PUBBLICATO",
        "CANDIDATURE_RICEVUTE",
        "COLLOQUI_IN_CORSO",
        "PROPOSTA_CANDIDATI",
    ];
    let mut now = base_time();
    for code in codes {
        now += Duration::hours(1);
        if code == "HR_ASSEGNATA" {
            crate::assign_hr(
                store,
                selection_id,
                crate::AssignHrRequest {
                    hr_user_id: assigned_hr().id.value(),
                    due_date: None,
                    note: None,
                },
                &hr_manager(),
                now,
            )
            .expect("Failed to assign HR");
        } else {
            let actor = if code == "ANNUNCIO_APPROVATO" {
                ceo()
            } else {
                hr_manager()
            };
            change_status(
                store,
                selection_id,
                ChangeStatusRequest {
                    new_status: String::from(code),
                    due_date: None,
                    note: None,
                },
                &actor,
                now,
            )
            .expect("Failed to advance selection");
        }
        if code == target {
            return;
        }
    }
    panic!("Unknown target status '{target}'");
}
