// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use bigster_domain::{
    Actor, DepartmentId, Package, ProfessionalFigureId, Role, Selection, SelectionId,
    SelectionStatus, SelectionType, UserId,
};
use time::OffsetDateTime;

pub(crate) const OWNER: Actor = Actor::new(UserId::new(1), Role::Amministrazione, None);
pub(crate) const ASSIGNED_HR: Actor = Actor::new(UserId::new(2), Role::RisorseUmane, None);
pub(crate) const OTHER_HR: Actor = Actor::new(UserId::new(3), Role::RisorseUmane, None);
pub(crate) const CEO: Actor = Actor::new(UserId::new(4), Role::Ceo, None);
pub(crate) const HR_MANAGER: Actor =
    Actor::new(UserId::new(5), Role::ResponsabileRisorseUmane, None);

pub(crate) fn selection_at(status: SelectionStatus) -> Selection {
    let assigned = match status.ordinal() {
        Some(ordinal) => ordinal >= 2,
        None => status != SelectionStatus::Annullata,
    };
    Selection {
        id: SelectionId::new(100),
        title: String::from("Senior backend developer"),
        status,
        selection_type: SelectionType::External,
        package: Package::Base,
        owner_id: OWNER.id,
        assigned_hr_id: assigned.then_some(ASSIGNED_HR.id),
        department_id: DepartmentId::new(7),
        professional_figure_id: ProfessionalFigureId::new(4),
        created_at: OffsetDateTime::UNIX_EPOCH,
        modified_at: OffsetDateTime::UNIX_EPOCH,
        closed_at: status.is_terminal().then_some(OffsetDateTime::UNIX_EPOCH),
        announcement_count: 0,
        job_collection_count: 0,
    }
}
