//! Process configuration, read from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{bail, Context};
use chrono::Duration;

use webshop_auth::PasswordPolicy;

const DEV_JWT_SECRET: &str = "dev-secret";

/// Administrator account created at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSeed {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub password_policy: PasswordPolicy,
    pub admin: Option<AdminSeed>,
    pub seed_demo_catalog: bool,
}

impl AppConfig {
    /// Defaults for everything except the signing secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            jwt_secret: jwt_secret.into(),
            token_ttl: Duration::minutes(60),
            bcrypt_cost: 10,
            password_policy: PasswordPolicy::default(),
            admin: None,
            seed_demo_catalog: false,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            DEV_JWT_SECRET.to_string()
        });
        let mut config = Self::new(jwt_secret);

        if let Some(addr) = parsed::<SocketAddr>(&lookup, "BIND_ADDR")? {
            config.bind_addr = addr;
        }
        if let Some(minutes) = parsed::<i64>(&lookup, "TOKEN_TTL_MINUTES")? {
            if minutes <= 0 {
                bail!("TOKEN_TTL_MINUTES must be positive, got {minutes}");
            }
            config.token_ttl = Duration::minutes(minutes);
        }
        if let Some(cost) = parsed::<u32>(&lookup, "BCRYPT_COST")? {
            if !(4..=31).contains(&cost) {
                bail!("BCRYPT_COST must be between 4 and 31, got {cost}");
            }
            config.bcrypt_cost = cost;
        }
        if let Some(seed) = parsed::<bool>(&lookup, "SEED_DEMO_CATALOG")? {
            config.seed_demo_catalog = seed;
        }

        let policy = &mut config.password_policy;
        if let Some(len) = parsed::<usize>(&lookup, "PASSWORD_MIN_LENGTH")? {
            policy.min_length = len;
        }
        if let Some(v) = parsed::<bool>(&lookup, "PASSWORD_REQUIRE_DIGIT")? {
            policy.require_digit = v;
        }
        if let Some(v) = parsed::<bool>(&lookup, "PASSWORD_REQUIRE_LOWERCASE")? {
            policy.require_lowercase = v;
        }
        if let Some(v) = parsed::<bool>(&lookup, "PASSWORD_REQUIRE_UPPERCASE")? {
            policy.require_uppercase = v;
        }
        if let Some(v) = parsed::<bool>(&lookup, "PASSWORD_REQUIRE_NON_ALPHANUMERIC")? {
            policy.require_non_alphanumeric = v;
        }

        config.admin = match (lookup("ADMIN_USER"), lookup("ADMIN_PASSWORD")) {
            (Some(user_name), Some(password)) => Some(AdminSeed {
                email: lookup("ADMIN_EMAIL").unwrap_or_else(|| format!("{user_name}@localhost")),
                user_name,
                password,
            }),
            (None, None) => None,
            _ => bail!("ADMIN_USER and ADMIN_PASSWORD must be set together"),
        };

        Ok(config)
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        _ => Ok(None),
    }
}
