use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are opaque strings (e.g. "products.write"). The wildcard
/// permission `"*"` grants everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const WILDCARD: Permission = Permission(Cow::Borrowed("*"));
    /// Create, edit and delete catalog products.
    pub const PRODUCTS_WRITE: Permission = Permission(Cow::Borrowed("products.write"));
    /// Every user-account operation (including reads).
    pub const USERS_MANAGE: Permission = Permission(Cow::Borrowed("users.manage"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Self::WILDCARD
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_star_is_the_wildcard() {
        assert!(Permission::WILDCARD.is_wildcard());
        assert!(Permission::new("*").is_wildcard());
        assert!(!Permission::PRODUCTS_WRITE.is_wildcard());
        assert!(!Permission::new("users.*").is_wildcard());
    }
}
