//! Service container shared by all handlers.

use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};

use webshop_auth::{
    AccountError, Hs256JwtValidator, IdentityService, JwtClaims, JwtError, NewAccount,
    PasswordHasher, Role, ShopUser,
};
use webshop_catalog::ProductRepository;
use webshop_infra::{demo_catalog, InMemoryCatalogStore, InMemoryIdentityStore};

use crate::config::AppConfig;

/// Everything a handler may reach. Stores are injected, never global.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<dyn ProductRepository>,
    pub identity: Arc<dyn IdentityService>,
    pub tokens: Arc<Hs256JwtValidator>,
    pub token_ttl: Duration,
}

/// A freshly issued bearer token.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: chrono::DateTime<Utc>,
}

impl AppServices {
    /// Run an identity operation off the async executor (bcrypt is CPU-bound).
    pub async fn run_identity<T, F>(&self, op: F) -> Result<T, AccountError>
    where
        F: FnOnce(&dyn IdentityService) -> Result<T, AccountError> + Send + 'static,
        T: Send + 'static,
    {
        let identity = Arc::clone(&self.identity);
        tokio::task::spawn_blocking(move || op(identity.as_ref()))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))?
    }

    pub fn issue_token(&self, user: &ShopUser) -> Result<IssuedToken, JwtError> {
        let claims = JwtClaims::new(
            user.id_typed(),
            user.user_name(),
            user.roles().to_vec(),
            Utc::now(),
            self.token_ttl,
        );
        let access_token = self.tokens.issue(&claims)?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer",
            expires_at: claims.expires_at,
        })
    }
}

/// Wire the in-memory stores described by `config`, seeding as requested.
pub fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let catalog = if config.seed_demo_catalog {
        let drafts = demo_catalog().context("invalid demo catalog")?;
        tracing::info!(products = drafts.len(), "seeding demo catalog");
        InMemoryCatalogStore::with_products(drafts)
    } else {
        InMemoryCatalogStore::new()
    };

    let identity = InMemoryIdentityStore::new(
        PasswordHasher::new(config.bcrypt_cost),
        config.password_policy.clone(),
    );

    if let Some(admin) = &config.admin {
        let user = identity
            .create(NewAccount {
                user_name: admin.user_name.clone(),
                email: admin.email.clone(),
                password: admin.password.clone(),
                roles: vec![Role::ADMIN],
            })
            .with_context(|| format!("failed to seed admin user '{}'", admin.user_name))?;
        tracing::info!(user_id = %user.id_typed(), "admin user seeded");
    }

    Ok(AppServices {
        catalog: Arc::new(catalog),
        identity: Arc::new(identity),
        tokens: Arc::new(Hs256JwtValidator::new(config.jwt_secret.as_bytes())),
        token_ttl: config.token_ttl,
    })
}
