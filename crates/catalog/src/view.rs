//! View-model assembly: everything a renderer needs for one catalog page.

use serde::{Deserialize, Serialize};

use crate::page::{Page, PageMetadata};
use crate::product::ProductSummary;
use crate::query::{CatalogQuery, SortOrder};

/// Label of the catch-all entry in the id drop-down.
pub const ALL_OPTION_LABEL: &str = "All";

/// Current ordering plus the order each column header should switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub current: SortOrder,
    pub name_sort: SortOrder,
    pub price_sort: SortOrder,
}

impl SortState {
    pub fn new(current: SortOrder) -> Self {
        Self {
            current,
            name_sort: if current == SortOrder::NameAsc {
                SortOrder::NameDesc
            } else {
                SortOrder::NameAsc
            },
            price_sort: if current == SortOrder::PriceAsc {
                SortOrder::PriceDesc
            } else {
                SortOrder::PriceAsc
            },
        }
    }
}

/// One entry of the product drop-down (`id == 0` is "All").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: u64,
    pub name: String,
}

/// Applied filters echoed back for re-display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_id: Option<u64>,
    pub selected_name: Option<String>,
    pub options: Vec<FilterOption>,
}

impl FilterState {
    /// `matches` is the filtered, ordered candidate set (all pages).
    pub fn new(query: &CatalogQuery, matches: &[ProductSummary]) -> Self {
        let mut options = Vec::with_capacity(matches.len() + 1);
        options.push(FilterOption {
            id: 0,
            name: ALL_OPTION_LABEL.to_string(),
        });
        options.extend(matches.iter().map(|p| FilterOption {
            id: p.id.get(),
            name: p.name.clone(),
        }));

        Self {
            selected_id: query.id,
            selected_name: query.name.clone(),
            options,
        }
    }
}

/// Renderer-ready catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductSummary>,
    pub page: PageMetadata,
    pub sort: SortState,
    pub filter: FilterState,
}

/// Package the stage outputs. Pure structural packaging; cannot fail.
pub fn assemble(page: Page<ProductSummary>, sort: SortOrder, filter: FilterState) -> CatalogResponse {
    CatalogResponse {
        products: page.items,
        page: page.metadata,
        sort: SortState::new(sort),
        filter,
    }
}
