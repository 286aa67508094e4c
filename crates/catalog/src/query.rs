//! Catalog request model.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use webshop_core::DomainError;

/// Requested ordering of a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name_asc",
            SortOrder::NameDesc => "name_desc",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name_asc" => Ok(SortOrder::NameAsc),
            "name_desc" => Ok(SortOrder::NameDesc),
            "price_asc" => Ok(SortOrder::PriceAsc),
            "price_desc" => Ok(SortOrder::PriceDesc),
            other => Err(DomainError::validation(format!("unknown sort order '{other}'"))),
        }
    }
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog listing request.
///
/// `page` is kept signed so that whatever the caller sent survives until the
/// pagination stage decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub page: i64,
    pub sort: SortOrder,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            page: 1,
            sort: SortOrder::default(),
        }
    }
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_by_name() {
        let q = CatalogQuery::new();
        assert_eq!(q.page, 1);
        assert_eq!(q.sort, SortOrder::NameAsc);
        assert_eq!(q.id, None);
        assert_eq!(q.name, None);
    }

    #[test]
    fn sort_order_uses_snake_case_on_the_wire() {
        let s: SortOrder = serde_json::from_str("\"price_desc\"").unwrap();
        assert_eq!(s, SortOrder::PriceDesc);
        assert_eq!(serde_json::to_string(&SortOrder::NameAsc).unwrap(), "\"name_asc\"");
    }

    #[test]
    fn sort_order_parses_its_own_display() {
        for s in [SortOrder::NameAsc, SortOrder::NameDesc, SortOrder::PriceAsc, SortOrder::PriceDesc] {
            assert_eq!(s.to_string().parse::<SortOrder>().unwrap(), s);
        }
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
