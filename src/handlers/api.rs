use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::{ListParams, ListQuery, Pagination, CARDS_PER_PAGE};
use crate::state::AppState;
use crate::upstream::CardListRequest;
use crate::utils::response::ApiResponse;

/// JSON variant of the listing, used for in-page card loading. The upstream
/// page passes through unshaped.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    let query = ListQuery::from_params(params);
    let request = CardListRequest {
        page: query.page,
        per_page: CARDS_PER_PAGE,
        search: query.search,
    };

    match state.source.list_cards(&request).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Card listing request failed");
            let body = json!({
                "error": "Failed to fetch cards",
                "cards": [],
                "pagination": Pagination::default(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// Passthrough of the upstream collection statistics.
pub async fn card_stats(State(state): State<AppState>) -> Response {
    match state.source.card_stats().await {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Card stats request failed");
            let body = json!({ "error": err.to_string() });
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}

/// Viewport reports from the browser need nothing beyond an acknowledgment.
pub async fn window_size() -> Json<ApiResponse<()>> {
    Json(ApiResponse::success_null())
}
