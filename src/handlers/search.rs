use axum::extract::Query;
use axum::response::Redirect;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// The header search box submits here; hand the term to the index listing.
pub async fn search_redirect(Query(params): Query<SearchParams>) -> Redirect {
    let term = params.query.unwrap_or_default();
    let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
    Redirect::to(&format!("/?q={encoded}"))
}
