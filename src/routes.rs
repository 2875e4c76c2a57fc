use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/search", get(handlers::search::search_redirect))
        .route(
            "/advanced_search",
            get(handlers::advanced::form).post(handlers::advanced::search),
        )
        .route("/advanced_search/search", post(handlers::advanced::search))
        .route("/cards-page2", get(handlers::pages::cards_page2))
        .route("/cards-page3", get(handlers::pages::cards_page3))
        .route("/full_view", get(handlers::full_view::full_view))
        .route("/api/cards", get(handlers::api::list_cards))
        .route("/api/cards/stats", get(handlers::api::card_stats))
        .route("/window-size", post(handlers::api::window_size))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .with_state(state)
}
