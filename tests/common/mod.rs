//! Mock movie backend for integration tests.

#![allow(dead_code)]

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use cinelist::api::ApiClient;
use cinelist::config::{ApiConfig, Config};
use cinelist::server::{build_router, AppState};

pub struct MockBackend {
    pub base_url: String,
    queries: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockBackend {
    /// Raw query strings received by `/api/movies`, in arrival order.
    pub fn movie_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn shawshank_list_item() -> Value {
    json!({
        "MovieID": 1,
        "Title": "The Shawshank Redemption",
        "Year": 1994,
        "Rating": "9.3",
        "PosterURL": "https://img.example/shawshank.jpg",
        "IMDbID": "tt0111161"
    })
}

pub fn heat_list_item() -> Value {
    json!({
        "MovieID": 2,
        "Title": "Heat",
        "Year": 1995,
        "Rating": null,
        "PosterURL": null,
        "IMDbID": "tt0113277"
    })
}

fn shawshank_details() -> Value {
    let mut details = shawshank_list_item();
    let extra = json!({
        "Runtime": 142,
        "PlotSummary": "Two imprisoned men bond over a number of years.",
        "ReleaseDate": "Fri, 14 Oct 1994 00:00:00 GMT",
        "MPAARating": "R",
        "genres": ["Drama"],
        "people": [
            {"Name": "Frank Darabont", "PersonIMDbID": "nm0001104", "RoleName": "Director"},
            {"Name": "Tim Robbins", "PersonIMDbID": "nm0000209", "RoleName": "Actor"},
            {"Name": "Morgan Freeman", "PersonIMDbID": "nm0000151", "RoleName": "Actor"}
        ],
        "plot_keywords": ["prison", "escape", "friendship"]
    });
    if let (Some(base), Some(extra)) = (details.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }
    details
}

type Queries = Arc<Mutex<Vec<String>>>;

async fn genres() -> Json<Value> {
    Json(json!(["Crime", "Drama"]))
}

async fn movies(State(queries): State<Queries>, RawQuery(query): RawQuery) -> impl IntoResponse {
    let query = query.unwrap_or_default();
    queries.lock().unwrap().push(query.clone());

    if query.contains("search=fail") {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})));
    }
    if query.contains("search=nothing") {
        return (StatusCode::OK, Json(json!([])));
    }
    (StatusCode::OK, Json(json!([shawshank_list_item(), heat_list_item()])))
}

async fn movie(Path(imdb_id): Path<String>) -> impl IntoResponse {
    match imdb_id.as_str() {
        "tt0111161" => (StatusCode::OK, Json(shawshank_details())),
        "tt-error" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Movie not found"}))),
    }
}

async fn recommendations(RawQuery(query): RawQuery) -> Json<Value> {
    if query.as_deref() == Some("genre=Drama") {
        Json(json!([shawshank_list_item(), heat_list_item()]))
    } else {
        Json(json!([]))
    }
}

pub async fn start_backend() -> MockBackend {
    let queries: Queries = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/genres", get(genres))
        .route("/api/movies", get(movies))
        .route("/api/movies/:imdb_id", get(movie))
        .route("/api/recommendations", get(recommendations))
        .with_state(queries.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}/api", addr),
        queries,
        handle,
    }
}

pub fn api_config(base_url: Option<&str>) -> ApiConfig {
    ApiConfig {
        base_url: base_url.map(str::to_string),
        timeout_secs: 5,
    }
}

pub fn client(base_url: Option<&str>) -> ApiClient {
    ApiClient::new(&api_config(base_url)).unwrap()
}

pub fn app(base_url: Option<&str>) -> Router {
    let mut config = Config::default();
    config.api = api_config(base_url);
    let api = Arc::new(client(base_url));
    build_router(AppState::new(config, api, b"\x89PNG\r\n\x1a\nfake".to_vec()))
}
