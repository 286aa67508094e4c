use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use webshop_auth::{AccountEdit, NewAccount, PasswordChange, ShopUser};
use webshop_catalog::{CatalogQuery, ProductDraft, SortOrder};
use webshop_core::{DomainResult, UserId};

/// Query-string fields submitted empty (`?id=&page=`) count as absent.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

// -------------------------
// Catalog
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort: Option<SortOrder>,
}

impl ListingParams {
    pub fn into_query(self) -> CatalogQuery {
        CatalogQuery {
            id: self.id,
            name: self.name,
            page: self.page.unwrap_or(1),
            sort: self.sort.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub version: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Decimal,
}

impl CreateProductRequest {
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        ProductDraft::new(self.name, self.description, self.image_url, self.price)
    }
}

/// Edit form. `id`, when sent, must match the route; `version` enables the
/// stale-write check.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    pub id: Option<u64>,
    pub version: Option<u64>,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Decimal,
}

impl UpdateProductRequest {
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        ProductDraft::new(self.name, self.description, self.image_url, self.price)
    }
}

// -------------------------
// Accounts
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    /// New accounts never carry roles from the request.
    pub fn into_account(self) -> NewAccount {
        NewAccount {
            user_name: self.user_name,
            email: self.email,
            password: self.password,
            roles: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditUserRequest {
    pub user_name: String,
    pub email: String,
}

impl EditUserRequest {
    pub fn into_edit(self, id: UserId) -> AccountEdit {
        AccountEdit {
            id,
            user_name: self.user_name,
            email: self.email,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn into_change(self, id: UserId) -> PasswordChange {
        PasswordChange {
            id,
            old_password: self.old_password,
            new_password: self.new_password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditUserView {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<&ShopUser> for EditUserView {
    fn from(u: &ShopUser) -> Self {
        Self {
            id: u.id_typed(),
            user_name: u.user_name().to_string(),
            email: u.email().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordView {
    pub id: UserId,
    pub user_name: String,
}

impl From<&ShopUser> for ChangePasswordView {
    fn from(u: &ShopUser) -> Self {
        Self {
            id: u.id_typed(),
            user_name: u.user_name().to_string(),
        }
    }
}
