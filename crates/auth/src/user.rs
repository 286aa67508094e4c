//! Shop user accounts and the commands that change them.

use serde::Serialize;
use thiserror::Error;

use webshop_core::{UserId, Versioned};

use crate::{PasswordPolicy, Role};

const USER_NAME_EXTRA_CHARS: &str = "-._@+";

/// A stored user account.
///
/// `password_hash` is a bcrypt hash; plaintext never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopUser {
    id: UserId,
    user_name: String,
    email: String,
    password_hash: String,
    roles: Vec<Role>,
    version: u64,
}

impl ShopUser {
    pub fn new(
        id: UserId,
        user_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            roles,
            version: 1,
        }
    }

    pub fn id_typed(&self) -> UserId {
        self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(Role::is_admin)
    }

    /// Apply an already validated profile edit.
    pub fn apply_edit(&mut self, edit: &AccountEdit) {
        self.user_name = edit.user_name.trim().to_string();
        self.email = edit.email.trim().to_string();
        self.version += 1;
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.version += 1;
    }
}

impl Versioned for ShopUser {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Listing projection: everything except the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub version: u64,
}

impl From<&ShopUser> for UserView {
    fn from(u: &ShopUser) -> Self {
        Self {
            id: u.id,
            user_name: u.user_name.clone(),
            email: u.email.clone(),
            roles: u.roles.clone(),
            version: u.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl NewAccount {
    /// Shape checks that need no store access. Uniqueness is the store's job.
    pub fn validate(&self, policy: &PasswordPolicy) -> Vec<String> {
        let mut errors = profile_errors(&self.user_name, &self.email);
        errors.extend(policy.violations(&self.password));
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEdit {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
}

impl AccountEdit {
    pub fn validate(&self) -> Vec<String> {
        profile_errors(&self.user_name, &self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub id: UserId,
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("user not found")]
    NotFound,

    #[error("{}", .0.join(" "))]
    Rejected(Vec<String>),

    /// The account changed between the check and the write.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid user name or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl AccountError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(vec![message.into()])
    }
}

impl From<bcrypt::BcryptError> for AccountError {
    fn from(e: bcrypt::BcryptError) -> Self {
        Self::Hashing(e.to_string())
    }
}

/// Case-insensitive key used for user-name lookups and uniqueness.
pub fn normalize_user_name(user_name: &str) -> String {
    user_name.trim().to_uppercase()
}

pub fn user_name_error(user_name: &str) -> Option<String> {
    let trimmed = user_name.trim();
    let valid = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || USER_NAME_EXTRA_CHARS.contains(c));

    (!valid).then(|| {
        format!("User name '{user_name}' is invalid, can only contain letters or digits.")
    })
}

pub fn email_error(email: &str) -> Option<String> {
    let trimmed = email.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    };

    (!valid).then(|| format!("Email '{email}' is invalid."))
}

fn profile_errors(user_name: &str, email: &str) -> Vec<String> {
    user_name_error(user_name)
        .into_iter()
        .chain(email_error(email))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(user_name: &str, email: &str, password: &str) -> NewAccount {
        NewAccount {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            roles: vec![],
        }
    }

    #[test]
    fn valid_account_has_no_errors() {
        let a = account("jane.doe+shop@home", "jane@example.com", "Secret1!");
        assert!(a.validate(&PasswordPolicy::default()).is_empty());
    }

    #[test]
    fn all_failures_are_collected() {
        let a = account("bad name", "nope", "x");
        let errors = a.validate(&PasswordPolicy::default());
        assert!(errors[0].starts_with("User name 'bad name' is invalid"));
        assert_eq!(errors[1], "Email 'nope' is invalid.");
        assert!(errors.len() > 2);
    }

    #[test]
    fn blank_user_name_is_invalid() {
        assert!(user_name_error("   ").is_some());
        assert!(user_name_error("bob").is_none());
    }

    #[test]
    fn email_needs_both_sides_of_at() {
        assert!(email_error("@example.com").is_some());
        assert!(email_error("bob@").is_some());
        assert!(email_error("bob@example.com").is_none());
    }

    #[test]
    fn edits_and_password_changes_bump_version() {
        let mut user = ShopUser::new(UserId::new(), "bob", "bob@example.com", "hash", vec![]);
        assert_eq!(user.version(), 1);

        user.apply_edit(&AccountEdit {
            id: user.id_typed(),
            user_name: " robert ".to_string(),
            email: "robert@example.com".to_string(),
        });
        assert_eq!(user.user_name(), "robert");
        assert_eq!(user.version(), 2);

        user.set_password_hash("other");
        assert_eq!(user.password_hash(), "other");
        assert_eq!(user.version(), 3);
    }

    #[test]
    fn view_hides_hash() {
        let user = ShopUser::new(UserId::new(), "bob", "bob@example.com", "hash", vec![Role::ADMIN]);
        let json = serde_json::to_value(UserView::from(&user)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["roles"], serde_json::json!(["admin"]));
    }

    #[test]
    fn rejected_message_joins_errors() {
        let e = AccountError::Rejected(vec!["A.".into(), "B.".into()]);
        assert_eq!(e.to_string(), "A. B.");
    }
}
