//! HS256 token signing and verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, JwtClaims, TokenValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JwtError {
    #[error("invalid token: {0}")]
    Invalid(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Verifies bearer tokens and yields their claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError>;
}

/// Shared-secret HS256 signer and validator.
#[derive(Clone)]
pub struct Hs256JwtValidator {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256JwtValidator {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();

        // Time-window checks run against our own claim names in `validate_claims`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn issue(&self, claims: &JwtClaims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| JwtError::Signing(e.to_string()))
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError> {
        let data = decode::<JwtClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| JwtError::Invalid(e.to_string()))?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use webshop_core::UserId;

    use super::*;
    use crate::Role;

    fn claims(now: DateTime<Utc>) -> JwtClaims {
        JwtClaims::new(UserId::new(), "admin", vec![Role::ADMIN], now, Duration::minutes(5))
    }

    #[test]
    fn issued_token_validates() {
        let jwt = Hs256JwtValidator::new("secret");
        let now = Utc::now();
        let c = claims(now);

        let token = jwt.issue(&c).unwrap();
        let decoded = jwt.validate(&token, now + Duration::seconds(1)).unwrap();
        assert_eq!(decoded.sub, c.sub);
        assert_eq!(decoded.roles, vec![Role::ADMIN]);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let now = Utc::now();
        let token = Hs256JwtValidator::new("one").issue(&claims(now)).unwrap();
        let err = Hs256JwtValidator::new("two").validate(&token, now).unwrap_err();
        assert!(matches!(err, JwtError::Invalid(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = Hs256JwtValidator::new("secret");
        let now = Utc::now();
        let token = jwt.issue(&claims(now)).unwrap();
        assert_eq!(
            jwt.validate(&token, now + Duration::minutes(10)),
            Err(JwtError::Claims(TokenValidationError::Expired))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        let jwt = Hs256JwtValidator::new("secret");
        assert!(matches!(jwt.validate("not-a-token", Utc::now()), Err(JwtError::Invalid(_))));
    }
}
