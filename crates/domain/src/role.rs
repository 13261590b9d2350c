// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor roles and access tiers.
//!
//! Roles form a closed set. Access tiers (`full`, `high`) are derived
//! predicates consumed by the permission resolver and the transition
//! validator; nothing else in the workspace re-derives them.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Roles an authenticated actor can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Chief executive: approves announcements and closures.
    Ceo,
    /// Department head: sees the selections of their own department.
    Responsabile,
    /// HR manager: full access over every selection.
    ResponsabileRisorseUmane,
    /// HR operator: runs the selections assigned to them.
    RisorseUmane,
    /// Administration: creates selections and handles invoicing.
    Amministrazione,
    /// Developer: unrestricted technical access.
    Developer,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Responsabile => "RESPONSABILE",
            Self::ResponsabileRisorseUmane => "RESPONSABILE_RISORSE_UMANE",
            Self::RisorseUmane => "RISORSE_UMANE",
            Self::Amministrazione => "AMMINISTRAZIONE",
            Self::Developer => "DEVELOPER",
        }
    }

    /// Parses a role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRole` if the string is not a valid role.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "CEO" => Ok(Self::Ceo),
            "RESPONSABILE" => Ok(Self::Responsabile),
            "RESPONSABILE_RISORSE_UMANE" => Ok(Self::ResponsabileRisorseUmane),
            "RISORSE_UMANE" => Ok(Self::RisorseUmane),
            "AMMINISTRAZIONE" => Ok(Self::Amministrazione),
            "DEVELOPER" => Ok(Self::Developer),
            _ => Err(DomainError::UnknownRole {
                role: s.to_string(),
            }),
        }
    }

    /// Full access: every capability, on every selection.
    #[must_use]
    pub const fn has_full_access(&self) -> bool {
        matches!(self, Self::ResponsabileRisorseUmane | Self::Developer)
    }

    /// High access: full access plus the CEO.
    #[must_use]
    pub const fn has_high_access(&self) -> bool {
        self.has_full_access() || matches!(self, Self::Ceo)
    }

    /// Whether this role may create new selections.
    #[must_use]
    pub const fn can_create_selections(&self) -> bool {
        matches!(self, Self::Amministrazione | Self::Developer)
    }

    /// Whether this role may approve announcement drafts (funnel step 6 to 7).
    #[must_use]
    pub const fn can_approve_announcements(&self) -> bool {
        matches!(self, Self::Ceo | Self::Amministrazione | Self::Developer)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
