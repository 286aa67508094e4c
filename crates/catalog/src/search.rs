//! Free-text search flow (unpaginated, store order).

use serde::{Deserialize, Serialize};

use crate::product::ProductSummary;
use crate::store::CatalogStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<ProductSummary>,
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing to search for; send the caller to the catalog listing.
    RedirectToListing,
    Results(SearchResponse),
}

pub fn search<S>(store: &S, text: Option<&str>) -> SearchOutcome
where
    S: CatalogStore + ?Sized,
{
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return SearchOutcome::RedirectToListing;
    };

    let products = store
        .get_all_filtered(text)
        .iter()
        .map(ProductSummary::from)
        .collect();

    SearchOutcome::Results(SearchResponse {
        products,
        search_query: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedStore;

    #[test]
    fn empty_or_missing_text_redirects() {
        let store = FixedStore::named(&["Lamp"]);
        assert_eq!(search(&store, None), SearchOutcome::RedirectToListing);
        assert_eq!(search(&store, Some("")), SearchOutcome::RedirectToListing);
    }

    #[test]
    fn whitespace_only_text_redirects() {
        let store = FixedStore::named(&["Lamp", "Chair"]);
        assert_eq!(search(&store, Some("   ")), SearchOutcome::RedirectToListing);
        assert_eq!(search(&store, Some("\t\n")), SearchOutcome::RedirectToListing);
    }

    #[test]
    fn results_echo_the_query() {
        let store = FixedStore::named(&["Desk Lamp", "Chair", "Floor Lamp"]);
        let SearchOutcome::Results(r) = search(&store, Some("Lamp")) else {
            panic!("expected results");
        };
        assert_eq!(r.search_query, "Lamp");
        let names: Vec<_> = r.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Desk Lamp", "Floor Lamp"]);
    }
}
