use std::sync::Arc;

use webshop_core::UserId;

use crate::user::{AccountEdit, AccountError, NewAccount, PasswordChange, ShopUser};

/// Identity service contract: the user-credential manager handed to the HTTP
/// layer.
///
/// Implementations own uniqueness, password policy and hashing; callers pass
/// plaintext only through the command structs.
pub trait IdentityService: Send + Sync {
    /// All users, ordered by user name.
    fn users(&self) -> Vec<ShopUser>;

    fn find_by_id(&self, id: UserId) -> Option<ShopUser>;

    /// Case-insensitive lookup.
    fn find_by_name(&self, user_name: &str) -> Option<ShopUser>;

    fn create(&self, account: NewAccount) -> Result<ShopUser, AccountError>;

    fn update(&self, edit: AccountEdit) -> Result<ShopUser, AccountError>;

    fn delete(&self, id: UserId) -> Result<(), AccountError>;

    fn change_password(&self, change: PasswordChange) -> Result<ShopUser, AccountError>;

    /// Verify a login. Unknown user and wrong password are indistinguishable.
    fn check_password(&self, user_name: &str, password: &str) -> Result<ShopUser, AccountError>;
}

impl<S> IdentityService for Arc<S>
where
    S: IdentityService + ?Sized,
{
    fn users(&self) -> Vec<ShopUser> {
        (**self).users()
    }

    fn find_by_id(&self, id: UserId) -> Option<ShopUser> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, user_name: &str) -> Option<ShopUser> {
        (**self).find_by_name(user_name)
    }

    fn create(&self, account: NewAccount) -> Result<ShopUser, AccountError> {
        (**self).create(account)
    }

    fn update(&self, edit: AccountEdit) -> Result<ShopUser, AccountError> {
        (**self).update(edit)
    }

    fn delete(&self, id: UserId) -> Result<(), AccountError> {
        (**self).delete(id)
    }

    fn change_password(&self, change: PasswordChange) -> Result<ShopUser, AccountError> {
        (**self).change_password(change)
    }

    fn check_password(&self, user_name: &str, password: &str) -> Result<ShopUser, AccountError> {
        (**self).check_password(user_name, password)
    }
}
