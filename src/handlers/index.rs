use axum::extract::{Query, State};

use crate::handlers::listing::{fetch_listing, Listing};
use crate::models::{ListParams, ListQuery};
use crate::state::AppState;
use crate::utils::response::HtmlTemplate;
use crate::views::IndexTemplate;

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> HtmlTemplate<IndexTemplate> {
    let query = ListQuery::from_params(params);
    let view = fetch_listing(state.source.as_ref(), Listing::paged(), &query).await;

    HtmlTemplate(IndexTemplate { view, query })
}
