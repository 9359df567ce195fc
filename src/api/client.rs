use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use super::query::MovieQuery;
use super::types::{MovieDetails, MovieListItem};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API URL not configured")]
    NotConfigured,
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Not found")]
    NotFound,
    #[error("Invalid response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Read side of the movie backend. Views depend on this rather than on
/// `ApiClient` so they can run against an in-memory source.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn genres(&self) -> ApiResult<Vec<String>>;
    async fn movies(&self, query: &MovieQuery) -> ApiResult<Vec<MovieListItem>>;
    /// `Ok(None)` when the backend answers 404.
    async fn movie(&self, imdb_id: &str) -> ApiResult<Option<MovieDetails>>;
    async fn recommendations(&self, genre: &str) -> ApiResult<Vec<MovieListItem>>;
}

pub struct ApiClient {
    base_url: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        let base_url = config
            .base_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());

        Ok(Self { base_url, http })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    fn endpoint(&self, path: &str) -> ApiResult<String> {
        let base = self.base_url.as_ref().ok_or(ApiError::NotConfigured)?;
        Ok(format!("{}{}", base, path))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, ?params, "GET");

        let response = self.http.get(&url).query(params).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound),
            s if !s.is_success() => return Err(ApiError::Status(s.as_u16())),
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MovieApi for ApiClient {
    async fn genres(&self) -> ApiResult<Vec<String>> {
        let genres: Option<Vec<String>> = self.get_json("/genres", &[]).await?;
        Ok(genres.unwrap_or_default())
    }

    async fn movies(&self, query: &MovieQuery) -> ApiResult<Vec<MovieListItem>> {
        let movies: Option<Vec<MovieListItem>> = self.get_json("/movies", &query.params()).await?;
        Ok(movies.unwrap_or_default())
    }

    async fn movie(&self, imdb_id: &str) -> ApiResult<Option<MovieDetails>> {
        let path = format!("/movies/{}", urlencoding::encode(imdb_id));
        match self.get_json(&path, &[]).await {
            Ok(movie) => Ok(Some(movie)),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn recommendations(&self, genre: &str) -> ApiResult<Vec<MovieListItem>> {
        let params = [("genre", genre.to_string())];
        let movies: Option<Vec<MovieListItem>> =
            self.get_json("/recommendations", &params).await?;
        Ok(movies.unwrap_or_default())
    }
}
