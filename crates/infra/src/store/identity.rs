use std::collections::BTreeMap;
use std::sync::RwLock;

use webshop_auth::user::normalize_user_name;
use webshop_auth::{
    AccountEdit, AccountError, IdentityService, NewAccount, PasswordChange, PasswordHasher,
    PasswordPolicy, ShopUser,
};
use webshop_core::{ExpectedVersion, UserId, Versioned};

use super::{read, write};

/// In-memory user accounts with bcrypt password hashes.
///
/// User names are unique ignoring case. Hashing runs outside the write lock;
/// uniqueness is re-checked before insert, and a password change only lands
/// if the account is still at the version its old password was checked against.
#[derive(Debug)]
pub struct InMemoryIdentityStore {
    inner: RwLock<BTreeMap<UserId, ShopUser>>,
    hasher: PasswordHasher,
    policy: PasswordPolicy,
}

impl Default for InMemoryIdentityStore {
    fn default() -> Self {
        Self::new(PasswordHasher::default(), PasswordPolicy::default())
    }
}

impl InMemoryIdentityStore {
    pub fn new(hasher: PasswordHasher, policy: PasswordPolicy) -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            hasher,
            policy,
        }
    }
}

fn name_taken(users: &BTreeMap<UserId, ShopUser>, user_name: &str, except: Option<UserId>) -> bool {
    let key = normalize_user_name(user_name);
    users
        .values()
        .any(|u| Some(u.id_typed()) != except && normalize_user_name(u.user_name()) == key)
}

fn taken_message(user_name: &str) -> String {
    format!("User name '{}' is already taken.", user_name.trim())
}

fn rejected(errors: Vec<String>) -> Result<(), AccountError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AccountError::Rejected(errors))
    }
}

impl IdentityService for InMemoryIdentityStore {
    fn users(&self) -> Vec<ShopUser> {
        let mut users: Vec<ShopUser> = read(&self.inner).values().cloned().collect();
        users.sort_by_key(|u| normalize_user_name(u.user_name()));
        users
    }

    fn find_by_id(&self, id: UserId) -> Option<ShopUser> {
        read(&self.inner).get(&id).cloned()
    }

    fn find_by_name(&self, user_name: &str) -> Option<ShopUser> {
        let key = normalize_user_name(user_name);
        read(&self.inner)
            .values()
            .find(|u| normalize_user_name(u.user_name()) == key)
            .cloned()
    }

    fn create(&self, account: NewAccount) -> Result<ShopUser, AccountError> {
        let mut errors = account.validate(&self.policy);
        if name_taken(&read(&self.inner), &account.user_name, None) {
            errors.push(taken_message(&account.user_name));
        }
        rejected(errors)?;

        let hash = self.hasher.hash(&account.password)?;

        let mut users = write(&self.inner);
        if name_taken(&users, &account.user_name, None) {
            return Err(AccountError::rejected(taken_message(&account.user_name)));
        }

        let user = ShopUser::new(
            UserId::new(),
            account.user_name.trim(),
            account.email.trim(),
            hash,
            account.roles,
        );
        users.insert(user.id_typed(), user.clone());

        tracing::info!(user_id = %user.id_typed(), user_name = user.user_name(), "user created");
        Ok(user)
    }

    fn update(&self, edit: AccountEdit) -> Result<ShopUser, AccountError> {
        let mut users = write(&self.inner);
        if !users.contains_key(&edit.id) {
            return Err(AccountError::NotFound);
        }

        let mut errors = edit.validate();
        if name_taken(&users, &edit.user_name, Some(edit.id)) {
            errors.push(taken_message(&edit.user_name));
        }
        rejected(errors)?;

        let user = users.get_mut(&edit.id).ok_or(AccountError::NotFound)?;
        user.apply_edit(&edit);

        tracing::info!(user_id = %edit.id, "user updated");
        Ok(user.clone())
    }

    fn delete(&self, id: UserId) -> Result<(), AccountError> {
        match write(&self.inner).remove(&id) {
            Some(user) => {
                tracing::info!(user_id = %id, user_name = user.user_name(), "user deleted");
                Ok(())
            }
            None => Err(AccountError::NotFound),
        }
    }

    fn change_password(&self, change: PasswordChange) -> Result<ShopUser, AccountError> {
        let current = self.find_by_id(change.id).ok_or(AccountError::NotFound)?;

        let mut errors = Vec::new();
        if !self.hasher.verify(&change.old_password, current.password_hash())? {
            errors.push("Incorrect password.".to_string());
        }
        errors.extend(self.policy.violations(&change.new_password));
        rejected(errors)?;

        let hash = self.hasher.hash(&change.new_password)?;

        let mut users = write(&self.inner);
        let user = users.get_mut(&change.id).ok_or(AccountError::NotFound)?;
        ExpectedVersion::Exact(current.version())
            .check(user.version())
            .map_err(|_| AccountError::Conflict("account was modified concurrently".to_string()))?;
        user.set_password_hash(hash);

        tracing::info!(user_id = %change.id, "password changed");
        Ok(user.clone())
    }

    fn check_password(&self, user_name: &str, password: &str) -> Result<ShopUser, AccountError> {
        let user = self
            .find_by_name(user_name)
            .ok_or(AccountError::InvalidCredentials)?;

        if self.hasher.verify(password, user.password_hash())? {
            Ok(user)
        } else {
            tracing::warn!(user_name, "failed login");
            Err(AccountError::InvalidCredentials)
        }
    }
}
