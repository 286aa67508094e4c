use webshop_auth::Role;
use webshop_core::UserId;

/// Principal context for a request (authenticated identity + roles).
///
/// Inserted by the auth middleware; present on every bearer-protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: UserId,
    user_name: String,
    roles: Vec<Role>,
}

impl PrincipalContext {
    pub fn new(principal_id: UserId, user_name: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            principal_id,
            user_name: user_name.into(),
            roles,
        }
    }

    pub fn principal_id(&self) -> UserId {
        self.principal_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}
