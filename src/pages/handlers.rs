use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::server::AppState;
use crate::ui::{load_recommendations, DetailState, FilterState, ListState};
use super::detail::{render_detail_page, render_not_found};
use super::list::render_list_page;

pub async fn list_page(
    State(state): State<AppState>,
    Query(filters): Query<FilterState>,
) -> Html<String> {
    let list = ListState::load(state.api.as_ref(), filters, state.config.ui.result_limit).await;
    Html(render_list_page(&list, state.config.ui.eager_posters))
}

pub async fn detail_page(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> Response {
    match DetailState::load(state.api.as_ref(), &imdb_id).await {
        DetailState::Found(movie) => {
            let recommendations =
                load_recommendations(state.api.as_ref(), &movie, state.config.ui.recommendations)
                    .await;
            Html(render_detail_page(&movie, &recommendations)).into_response()
        }
        DetailState::Missing => (StatusCode::NOT_FOUND, Html(render_not_found())).into_response(),
        DetailState::Failed(_) => {
            (StatusCode::BAD_GATEWAY, Html(render_not_found())).into_response()
        }
    }
}

pub async fn placeholder_image(State(state): State<AppState>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "max-age=86400"),
        ],
        state.placeholder.clone(),
    )
        .into_response()
}
