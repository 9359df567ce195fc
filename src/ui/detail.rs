use tracing::{error, warn};

use crate::api::{MovieApi, MovieDetails, MovieListItem};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Found(Box<MovieDetails>),
    /// The backend has no such movie.
    Missing,
    /// Any other failure, including a missing API configuration.
    Failed(String),
}

impl DetailState {
    /// Fetches the record before anything is rendered.
    pub async fn load(api: &dyn MovieApi, imdb_id: &str) -> Self {
        match api.movie(imdb_id).await {
            Ok(Some(movie)) => DetailState::Found(Box::new(movie)),
            Ok(None) => DetailState::Missing,
            Err(e) => {
                error!("Error fetching movie {}: {}", imdb_id, e);
                DetailState::Failed(e.to_string())
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailState::Found(_))
    }
}

/// Other titles in the movie's first genre. Failures only hide the section.
pub async fn load_recommendations(
    api: &dyn MovieApi,
    movie: &MovieDetails,
    max: usize,
) -> Vec<MovieListItem> {
    let Some(genre) = movie.genres.first().filter(|_| max > 0) else {
        return Vec::new();
    };

    match api.recommendations(genre).await {
        Ok(items) => items
            .into_iter()
            .filter(|m| m.imdb_id != movie.item.imdb_id)
            .take(max)
            .collect(),
        Err(e) => {
            warn!("Recommendations for {} unavailable: {}", genre, e);
            Vec::new()
        }
    }
}
