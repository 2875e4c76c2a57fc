use crate::models::{ListQuery, CARDS_PER_PAGE};
use crate::shaping::{self, CardListView};
use crate::upstream::{CardListRequest, CardSource};

/// One listing capability. The listing routes only differ in which page they
/// show, how many cards fit on it, and whether the client may re-sort, so
/// each route is an instantiation of this config.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub fixed_page: Option<i64>,
    pub page_size: u32,
    pub supports_sort: bool,
}

impl Listing {
    /// The index listing: page taken from the query, client sort honored.
    pub const fn paged() -> Self {
        Self {
            fixed_page: None,
            page_size: CARDS_PER_PAGE,
            supports_sort: true,
        }
    }

    /// A listing pinned to one page, e.g. the static page-2/page-3 routes.
    pub const fn fixed(page: i64) -> Self {
        Self {
            fixed_page: Some(page),
            page_size: CARDS_PER_PAGE,
            supports_sort: false,
        }
    }
}

/// Fetch and shape one listing. Upstream failures degrade into a renderable
/// view; this never errors out of the route.
pub async fn fetch_listing(
    source: &dyn CardSource,
    listing: Listing,
    query: &ListQuery,
) -> CardListView {
    let request = CardListRequest {
        page: listing.fixed_page.unwrap_or(query.page),
        per_page: listing.page_size,
        search: query.search.clone(),
    };

    match source.list_cards(&request).await {
        Ok(page) => {
            let sort = listing
                .supports_sort
                .then(|| (query.sort_key(), query.sort_order()));
            shaping::build_view(page, sort)
        }
        Err(err) => {
            tracing::error!(error = %err, "Card listing request failed");
            CardListView::degraded(format!("Unable to load cards: {err}"))
        }
    }
}
