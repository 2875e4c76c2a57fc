use axum::extract::{Query, State};

use crate::handlers::listing::{fetch_listing, Listing};
use crate::models::{ListParams, ListQuery};
use crate::state::AppState;
use crate::utils::response::HtmlTemplate;
use crate::views::CardsPageTemplate;

pub async fn cards_page2(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> HtmlTemplate<CardsPageTemplate> {
    fixed_page(state, params, 2).await
}

pub async fn cards_page3(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> HtmlTemplate<CardsPageTemplate> {
    fixed_page(state, params, 3).await
}

async fn fixed_page(
    state: AppState,
    params: ListParams,
    page_number: i64,
) -> HtmlTemplate<CardsPageTemplate> {
    let query = ListQuery::from_params(params);
    let view = fetch_listing(state.source.as_ref(), Listing::fixed(page_number), &query).await;

    HtmlTemplate(CardsPageTemplate { page_number, view })
}
