// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication types for the API boundary.
//!
//! Real authentication (tokens, sessions) is an external collaborator. The
//! API accepts the caller's claimed identity through a stub seam so the
//! authorization path stays identical once a real authenticator is wired in.

use bigster_domain::{Actor, DepartmentId, Role, UserId};
use std::str::FromStr;

use crate::error::AuthError;

/// An authenticated actor with an associated role and department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The actor's user identifier.
    pub id: UserId,
    /// The actor's role.
    pub role: Role,
    /// The actor's department, if any.
    pub department_id: Option<DepartmentId>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(id: UserId, role: Role, department_id: Option<DepartmentId>) -> Self {
        Self {
            id,
            role,
            department_id,
        }
    }

    /// Converts this authenticated actor into a domain actor.
    #[must_use]
    pub const fn to_domain_actor(&self) -> Actor {
        Actor::new(self.id, self.role, self.department_id)
    }
}

/// Stub authentication: accepts the claimed identity after validating the
/// role against the closed role set.
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the role is not recognized.
pub fn authenticate_stub(
    actor_id: i64,
    role: &str,
    department_id: Option<i64>,
) -> Result<AuthenticatedActor, AuthError> {
    let role: Role = Role::from_str(role).map_err(|err| AuthError::AuthenticationFailed {
        reason: err.to_string(),
    })?;
    Ok(AuthenticatedActor::new(
        UserId::new(actor_id),
        role,
        department_id.map(DepartmentId::new),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_stub_accepts_known_roles() {
        let actor = authenticate_stub(7, "RISORSE_UMANE", None).unwrap();
        assert_eq!(actor.id, UserId::new(7));
        assert_eq!(actor.role, Role::RisorseUmane);
        assert_eq!(actor.department_id, None);
    }

    #[test]
    fn test_authenticate_stub_keeps_department() {
        let actor = authenticate_stub(3, "RESPONSABILE", Some(5)).unwrap();
        assert_eq!(actor.department_id, Some(DepartmentId::new(5)));
    }

    #[test]
    fn test_authenticate_stub_rejects_unknown_role() {
        let result = authenticate_stub(7, "SUPERUSER", None);
        assert!(matches!(
            result,
            Err(AuthError::AuthenticationFailed { .. })
        ));
    }
}
