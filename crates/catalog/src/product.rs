//! Product record, its price value object, and the allowlisted write payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use webshop_core::{DomainError, DomainResult, ProductId, ValueObject, Versioned};

/// Non-negative decimal price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Validated write payload for a product.
///
/// This is the only shape the store accepts for create/update: callers map
/// request fields onto it explicitly, so identity and version can never be
/// overwritten from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    name: String,
    description: Option<String>,
    image_url: Option<String>,
    price: Price,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        image_url: Option<String>,
        price: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            name,
            description: non_blank(description),
            image_url: non_blank(image_url),
            price: Price::new(price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Stored product record (store-owned snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: Option<String>,
    image_url: Option<String>,
    price: Price,
    version: u64,
}

impl Product {
    /// Materialize a freshly created record (version 1).
    pub fn create(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            image_url: draft.image_url,
            price: draft.price,
            version: 1,
        }
    }

    /// Overwrite the allowlisted fields and bump the version.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.image_url = draft.image_url;
        self.price = draft.price;
        self.version += 1;
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Versioned for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Listing projection of a product (one row of a catalog page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Price,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            description: p.description.clone(),
            image_url: p.image_url.clone(),
            price: p.price,
        }
    }
}

/// Detail view of a product, including the version needed to edit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Price,
    pub version: u64,
}

impl From<&Product> for ProductDetail {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            description: p.description.clone(),
            image_url: p.image_url.clone(),
            price: p.price,
            version: p.version,
        }
    }
}
