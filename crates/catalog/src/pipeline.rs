//! Catalog query pipeline: filter → sort → paginate → assemble.
//!
//! Pure and request-scoped: the only input is a store snapshot and the query,
//! and the same pair always produces the same [`CatalogResponse`].

use crate::filter;
use crate::page::{paginate, PAGE_SIZE};
use crate::product::{Product, ProductSummary};
use crate::query::CatalogQuery;
use crate::sort;
use crate::store::CatalogStore;
use crate::view::{assemble, CatalogResponse, FilterState};

/// Run the pipeline against a store snapshot.
pub fn run<S>(store: &S, query: &CatalogQuery) -> CatalogResponse
where
    S: CatalogStore + ?Sized,
{
    build(&store.get_all(), query)
}

/// Run the pipeline over an already materialized product list.
pub fn build(products: &[Product], query: &CatalogQuery) -> CatalogResponse {
    let candidates = products.iter().map(ProductSummary::from).collect();

    let mut matches = filter::apply(candidates, query);
    sort::apply(&mut matches, query.sort);

    let filter_state = FilterState::new(query, &matches);
    let page = paginate(matches, query.page, PAGE_SIZE);

    assemble(page, query.sort, filter_state)
}
