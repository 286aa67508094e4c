//! Password policy and bcrypt hashing.

use serde::{Deserialize, Serialize};

/// Complexity rules applied to every new password.
///
/// Defaults require six characters with a digit, a lowercase letter, an
/// uppercase letter and a non-alphanumeric character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_non_alphanumeric: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_non_alphanumeric: true,
        }
    }
}

impl PasswordPolicy {
    /// Every rule the password breaks, in a fixed order. Empty means accepted.
    pub fn violations(&self, password: &str) -> Vec<String> {
        let mut errors = Vec::new();

        if password.chars().count() < self.min_length {
            errors.push(format!(
                "Passwords must be at least {} characters.",
                self.min_length
            ));
        }
        if self.require_non_alphanumeric && password.chars().all(char::is_alphanumeric) {
            errors.push("Passwords must have at least one non alphanumeric character.".to_string());
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push("Passwords must have at least one digit ('0'-'9').".to_string());
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
        }

        errors
    }
}

/// bcrypt with a configurable work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(password, self.cost)
    }

    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes() {
        assert!(PasswordPolicy::default().violations("Secret1!").is_empty());
    }

    #[test]
    fn weak_password_reports_every_rule() {
        let errors = PasswordPolicy::default().violations("abc");
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("at least 6 characters"));
        assert!(errors.iter().any(|e| e.contains("digit")));
        assert!(errors.iter().any(|e| e.contains("uppercase")));
        assert!(errors.iter().any(|e| e.contains("non alphanumeric")));
    }

    #[test]
    fn relaxed_policy_only_checks_length() {
        let policy = PasswordPolicy {
            min_length: 4,
            require_digit: false,
            require_lowercase: false,
            require_uppercase: false,
            require_non_alphanumeric: false,
        };
        assert!(policy.violations("pass").is_empty());
        assert_eq!(policy.violations("abc").len(), 1);
    }

    #[test]
    fn hash_round_trip() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("Secret1!").unwrap();
        assert_ne!(hash, "Secret1!");
        assert!(hasher.verify("Secret1!", &hash).unwrap());
        assert!(!hasher.verify("secret1!", &hash).unwrap());
    }
}
