use axum::{
    body::Bytes,
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::api::MovieApi;
use crate::config::Config;
use crate::pages;
use crate::ui::PLACEHOLDER_PATH;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: Arc<dyn MovieApi>,
    pub placeholder: Bytes,
}

impl AppState {
    pub fn new(config: Config, api: Arc<dyn MovieApi>, placeholder: Vec<u8>) -> Self {
        Self {
            config: Arc::new(config),
            api,
            placeholder: Bytes::from(placeholder),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(pages::list_page))
        .route("/movies/:imdb_id", get(pages::detail_page))
        .route("/live", get(pages::live_list))
        .route(PLACEHOLDER_PATH, get(pages::placeholder_image))
        .route("/robots.txt", get(robots_txt_handler))
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nAllow: /\n"
}

async fn fallback_handler(req: Request) -> impl IntoResponse {
    tracing::debug!(path = %req.uri().path(), "No route");
    StatusCode::NOT_FOUND
}
