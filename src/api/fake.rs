//! In-memory `MovieApi` for view tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use super::client::{ApiError, ApiResult, MovieApi};
use super::query::MovieQuery;
use super::types::{MovieDetails, MovieListItem, MoviePerson};

pub fn movie(imdb_id: &str, title: &str) -> MovieListItem {
    MovieListItem {
        movie_id: None,
        title: title.to_string(),
        year: None,
        rating: None,
        poster_url: None,
        imdb_id: imdb_id.to_string(),
    }
}

/// Behaviour keyed on query values:
/// searches starting with "slow" answer after one second,
/// the keyword "boom" fails with a 500,
/// the id "tt-broken" fails with a 503.
pub struct FakeApi {
    entries: Vec<MovieDetails>,
    genres: Option<Vec<String>>,
    calls: Mutex<Vec<MovieQuery>>,
}

impl FakeApi {
    pub fn with_catalog() -> Self {
        let heat = MovieDetails {
            item: MovieListItem {
                movie_id: Some(1),
                year: Some(1995),
                rating: Some(8.3),
                poster_url: Some("https://img.example/heat.jpg".to_string()),
                ..movie("tt0113277", "Heat")
            },
            runtime: Some(170),
            plot_summary: Some("A group of professional bank robbers.".to_string()),
            release_date: Some("1995-12-15".to_string()),
            mpaa_rating: Some("R".to_string()),
            genres: vec!["Crime".to_string(), "Drama".to_string()],
            people: vec![
                MoviePerson {
                    name: "Michael Mann".to_string(),
                    person_imdb_id: Some("nm0000520".to_string()),
                    role_name: "Director".to_string(),
                },
                MoviePerson {
                    name: "Al Pacino".to_string(),
                    person_imdb_id: Some("nm0000199".to_string()),
                    role_name: "Actor".to_string(),
                },
            ],
            plot_keywords: vec!["heist".to_string(), "los angeles".to_string()],
        };
        let shawshank = MovieDetails {
            item: MovieListItem {
                movie_id: Some(2),
                year: Some(1994),
                rating: None,
                ..movie("tt0111161", "The Shawshank Redemption")
            },
            runtime: None,
            plot_summary: None,
            release_date: None,
            mpaa_rating: None,
            genres: vec!["Drama".to_string()],
            people: vec![MoviePerson {
                name: "Morgan Freeman".to_string(),
                person_imdb_id: None,
                role_name: "Actor".to_string(),
            }],
            plot_keywords: vec!["prison".to_string()],
        };

        Self {
            entries: vec![heat, shawshank],
            genres: Some(vec!["Crime".to_string(), "Drama".to_string()]),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_genres(mut self) -> Self {
        self.genres = None;
        self
    }

    pub fn calls(&self) -> Vec<MovieQuery> {
        self.calls.lock().unwrap().clone()
    }

    fn matches(details: &MovieDetails, query: &MovieQuery) -> bool {
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };
        query.search.as_deref().map_or(true, |s| contains(&details.item.title, s))
            && query
                .genre
                .as_deref()
                .map_or(true, |g| details.genres.iter().any(|x| x == g))
            && query
                .keyword
                .as_deref()
                .map_or(true, |k| details.plot_keywords.iter().any(|x| contains(x, k)))
            && query
                .actor
                .as_deref()
                .map_or(true, |a| details.people.iter().any(|p| contains(&p.name, a)))
    }
}

#[async_trait]
impl MovieApi for FakeApi {
    async fn genres(&self) -> ApiResult<Vec<String>> {
        self.genres.clone().ok_or(ApiError::Status(500))
    }

    async fn movies(&self, query: &MovieQuery) -> ApiResult<Vec<MovieListItem>> {
        self.calls.lock().unwrap().push(query.clone());

        if query.search.as_deref().is_some_and(|s| s.starts_with("slow")) {
            tokio::time::sleep(Duration::from_secs(1)).await;
            return Ok(Vec::new());
        }
        if query.keyword.as_deref() == Some("boom") {
            return Err(ApiError::Status(500));
        }

        Ok(self
            .entries
            .iter()
            .filter(|e| Self::matches(e, query))
            .map(|e| e.item.clone())
            .take(query.limit as usize)
            .collect())
    }

    async fn movie(&self, imdb_id: &str) -> ApiResult<Option<MovieDetails>> {
        if imdb_id == "tt-broken" {
            return Err(ApiError::Status(503));
        }
        Ok(self
            .entries
            .iter()
            .find(|e| e.item.imdb_id == imdb_id)
            .cloned())
    }

    async fn recommendations(&self, genre: &str) -> ApiResult<Vec<MovieListItem>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.genres.iter().any(|g| g == genre))
            .map(|e| e.item.clone())
            .collect())
    }
}
