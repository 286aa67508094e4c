//! API-side authorization guard.
//!
//! Every mutating handler calls [`authorize_admin`] first, before touching a
//! store, and answers 403 when it fails.

use webshop_auth::{authorize, AuthzError, Permission, Principal};

use crate::context::PrincipalContext;

/// Check that the request's principal holds `required`.
pub fn authorize_admin(principal: &PrincipalContext, required: &Permission) -> Result<(), AuthzError> {
    let resolved = Principal::from_roles(
        principal.principal_id(),
        principal.user_name(),
        principal.roles().to_vec(),
    );

    authorize(&resolved, required).inspect_err(|e| {
        tracing::warn!(
            principal_id = %principal.principal_id(),
            error = %e,
            "authorization denied"
        );
    })
}
