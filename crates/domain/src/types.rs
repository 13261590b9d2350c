// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::role::Role;
use crate::status::SelectionStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Opaque identifier of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(i64);

impl SelectionId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Opaque identifier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Opaque identifier of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(i64);

impl DepartmentId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Opaque identifier of a professional figure definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfessionalFigureId(i64);

impl ProfessionalFigureId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Whether the selection recruits inside the client company or externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionType {
    /// Recruiting within the client company.
    Internal,
    /// Recruiting on the open market.
    External,
}

impl SelectionType {
    /// Returns the string representation of the selection type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "INTERNAL",
            Self::External => "EXTERNAL",
        }
    }
}

impl FromStr for SelectionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INTERNAL" => Ok(Self::Internal),
            "EXTERNAL" => Ok(Self::External),
            _ => Err(DomainError::InvalidSelectionType(s.to_string())),
        }
    }
}

/// The service package the client purchased.
///
/// The package affects which features are available on the dashboard,
/// never which transitions are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Package {
    /// Base package.
    Base,
    /// MDO package.
    Mdo,
}

impl Package {
    /// Returns the string representation of the package.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "BASE",
            Self::Mdo => "MDO",
        }
    }
}

impl FromStr for Package {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASE" => Ok(Self::Base),
            "MDO" => Ok(Self::Mdo),
            _ => Err(DomainError::InvalidPackage(s.to_string())),
        }
    }
}

/// A recruiting selection: the central entity the dashboard manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Opaque identifier.
    pub id: SelectionId,
    /// Human-readable title.
    pub title: String,
    /// Current lifecycle status.
    pub status: SelectionStatus,
    /// Internal or external recruiting.
    pub selection_type: SelectionType,
    /// Purchased service package.
    pub package: Package,
    /// The creator / responsible user.
    pub owner_id: UserId,
    /// The HR user assigned to run the selection, once assigned.
    pub assigned_hr_id: Option<UserId>,
    /// The client department the selection belongs to.
    pub department_id: DepartmentId,
    /// The professional figure being recruited.
    pub professional_figure_id: ProfessionalFigureId,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last modification timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub modified_at: OffsetDateTime,
    /// Set exactly when the selection reaches a terminal status.
    #[serde(with = "time::serde::rfc3339::option")]
    pub closed_at: Option<OffsetDateTime>,
    /// Number of job-ad announcements (derived, read-only).
    pub announcement_count: u32,
    /// Number of job collections (derived, read-only).
    pub job_collection_count: u32,
}

impl Selection {
    /// Returns true if the selection is in a terminal status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns true if the actor created the selection.
    #[must_use]
    pub fn is_owned_by(&self, actor: &Actor) -> bool {
        self.owner_id == actor.id
    }

    /// Returns true if the actor is the assigned HR user.
    #[must_use]
    pub fn is_assigned_to(&self, actor: &Actor) -> bool {
        self.assigned_hr_id == Some(actor.id)
    }
}

/// The authenticated user attempting an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The actor's user identifier.
    pub id: UserId,
    /// The actor's role.
    pub role: Role,
    /// The actor's department, used to scope department-head visibility.
    pub department_id: Option<DepartmentId>,
}

impl Actor {
    /// Creates a new actor.
    #[must_use]
    pub const fn new(id: UserId, role: Role, department_id: Option<DepartmentId>) -> Self {
        Self {
            id,
            role,
            department_id,
        }
    }
}
