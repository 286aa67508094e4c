//! `webshop-auth` — authentication and authorization boundary.
//!
//! Decoupled from HTTP and storage: roles, permissions, token claims and the
//! HS256 codec, password rules, and the identity-service contract.

pub mod authorize;
pub mod claims;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod permissions;
pub mod roles;
pub mod user;

pub use authorize::{authorize, permissions_from_roles, AuthzError, Principal};
pub use claims::{validate_claims, JwtClaims, TokenValidationError};
pub use identity::IdentityService;
pub use jwt::{Hs256JwtValidator, JwtError, JwtValidator};
pub use password::{PasswordHasher, PasswordPolicy};
pub use permissions::Permission;
pub use roles::Role;
pub use user::{AccountEdit, AccountError, NewAccount, PasswordChange, ShopUser, UserView};
