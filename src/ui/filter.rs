use serde::{Deserialize, Serialize};

use crate::api::MovieQuery;

/// The criteria driving the movie list query. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    pub genre: String,
    pub keyword: String,
    pub actor: String,
}

/// One filter control, as addressed by the live session protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Search,
    Genre,
    Keyword,
    Actor,
}

impl FilterState {
    pub fn to_query(&self, limit: u32) -> MovieQuery {
        MovieQuery {
            limit,
            search: non_empty(&self.search),
            genre: non_empty(&self.genre),
            keyword: non_empty(&self.keyword),
            actor: non_empty(&self.actor),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_query(0) == MovieQuery::new(0)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
