use serde::{Deserialize, Deserializer, Serialize};

/// A movie as it appears in list responses (`/movies`, `/recommendations`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieListItem {
    #[serde(rename = "MovieID", default, deserialize_with = "lenient_i64")]
    pub movie_id: Option<i64>,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default, deserialize_with = "lenient_i64")]
    pub year: Option<i64>,
    #[serde(rename = "Rating", default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(rename = "PosterURL", default)]
    pub poster_url: Option<String>,
    #[serde(rename = "IMDbID")]
    pub imdb_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePerson {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "PersonIMDbID", default)]
    pub person_imdb_id: Option<String>,
    #[serde(rename = "RoleName", default)]
    pub role_name: String,
}

/// Full record from `/movies/{imdbId}`. List fields keep backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub item: MovieListItem,
    #[serde(rename = "Runtime", default, deserialize_with = "lenient_i64")]
    pub runtime: Option<i64>,
    #[serde(rename = "PlotSummary", default)]
    pub plot_summary: Option<String>,
    #[serde(rename = "ReleaseDate", default)]
    pub release_date: Option<String>,
    #[serde(rename = "MPAARating", default)]
    pub mpaa_rating: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub people: Vec<MoviePerson>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub plot_keywords: Vec<String>,
}

/// Accepts a JSON number or a numeric string. SQL DECIMAL columns come
/// through the backend as strings. Anything else is treated as missing.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
    .filter(|f| f.is_finite()))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
