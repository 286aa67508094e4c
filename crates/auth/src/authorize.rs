use std::collections::HashSet;

use thiserror::Error;

use webshop_core::UserId;

use crate::{Permission, Role};

/// A fully resolved principal for authorization decisions.
///
/// Construction is decoupled from storage and transport: the API derives it
/// from verified token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub principal_id: UserId,
    pub user_name: String,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
}

impl Principal {
    /// Build a principal whose permissions are derived from its roles.
    pub fn from_roles(principal_id: UserId, user_name: impl Into<String>, roles: Vec<Role>) -> Self {
        let permissions = permissions_from_roles(&roles);
        Self {
            principal_id,
            user_name: user_name.into(),
            roles,
            permissions,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(Role::is_admin)
    }
}

/// Role → permission mapping.
///
/// Administrators hold the wildcard; every other role grants nothing beyond
/// anonymous catalog browsing.
pub fn permissions_from_roles(roles: &[Role]) -> Vec<Permission> {
    if roles.iter().any(Role::is_admin) {
        vec![Permission::WILDCARD]
    } else {
        Vec::new()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Authorize a principal for one permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(principal: &Principal, required: &Permission) -> Result<(), AuthzError> {
    let perms: HashSet<&Permission> = principal.permissions.iter().collect();

    if perms.iter().any(|p| p.is_wildcard()) || perms.contains(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(roles: Vec<Role>) -> Principal {
        Principal::from_roles(UserId::new(), "someone", roles)
    }

    #[test]
    fn admin_holds_wildcard() {
        let admin = principal(vec![Role::ADMIN]);
        assert!(admin.is_admin());
        assert!(authorize(&admin, &Permission::PRODUCTS_WRITE).is_ok());
        assert!(authorize(&admin, &Permission::USERS_MANAGE).is_ok());
    }

    #[test]
    fn shopper_is_forbidden() {
        let shopper = principal(vec![Role::new("shopper")]);
        assert!(!shopper.is_admin());
        assert_eq!(
            authorize(&shopper, &Permission::USERS_MANAGE),
            Err(AuthzError::Forbidden("users.manage".to_string()))
        );
    }

    #[test]
    fn explicit_permission_is_enough() {
        let mut clerk = principal(vec![]);
        clerk.permissions.push(Permission::PRODUCTS_WRITE);
        assert!(authorize(&clerk, &Permission::PRODUCTS_WRITE).is_ok());
        assert!(authorize(&clerk, &Permission::USERS_MANAGE).is_err());
    }
}
