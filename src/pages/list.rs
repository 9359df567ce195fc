use crate::api::MovieListItem;
use crate::ui::format::{format_list_rating, format_year};
use crate::ui::{ListState, ListStatus, MovieImage};
use super::html::{escape, page};

pub const LOADING_MESSAGE: &str = "Loading movies...";
pub const NO_MATCHES_MESSAGE: &str = "No movies match your criteria.";

/// Opens the live session and forwards every filter edit to it. Without a
/// socket the form still submits as a plain GET.
const LIVE_SCRIPT: &str = r#"
(function () {
  var proto = location.protocol === "https:" ? "wss:" : "ws:";
  var ws = new WebSocket(proto + "//" + location.host + "/live" + location.search);
  var results = document.getElementById("results");
  var genre = document.getElementById("genre");
  function send(field, value) {
    if (ws.readyState === 1) ws.send(JSON.stringify({ field: field, value: value }));
  }
  ["search", "keyword", "actor"].forEach(function (id) {
    document.getElementById(id).addEventListener("input", function (e) { send(id, e.target.value); });
  });
  genre.addEventListener("change", function (e) { send("genre", e.target.value); });
  document.getElementById("filters").addEventListener("submit", function (e) {
    if (ws.readyState === 1) e.preventDefault();
  });
  ws.onmessage = function (ev) {
    var msg = JSON.parse(ev.data);
    results.innerHTML = msg.results;
    if (msg.genres) {
      var selected = genre.value;
      genre.innerHTML = msg.genres;
      genre.value = selected;
    }
  };
})();
"#;

pub fn render_list_page(state: &ListState, eager: usize) -> String {
    let f = &state.filters;
    let body = format!(
        r#"<h1>Search &amp; Filter Movies</h1>
<form id="filters" class="filters" method="get" action="/">
<div><label for="search">Search Title/Plot:</label><input type="text" id="search" name="search" placeholder="e.g., prison, redemption" value="{search}"></div>
<div><label for="genre">Filter by Genre:</label><select id="genre" name="genre">{genres}</select></div>
<div><label for="keyword">Filter by Keyword:</label><input type="text" id="keyword" name="keyword" placeholder="e.g., escape" value="{keyword}"></div>
<div><label for="actor">Filter by Actor:</label><input type="text" id="actor" name="actor" placeholder="e.g., Morgan Freeman" value="{actor}"></div>
<noscript><button type="submit">Search</button></noscript>
</form>
<section id="results">{results}</section>"#,
        search = escape(&f.search),
        genres = render_genre_options(state),
        keyword = escape(&f.keyword),
        actor = escape(&f.actor),
        results = render_results(state, eager),
    );
    page("Movies", &body, Some(LIVE_SCRIPT))
}

pub fn render_genre_options(state: &ListState) -> String {
    let mut html = String::from(r#"<option value="">All Genres</option>"#);
    for genre in &state.genres {
        let selected = if *genre == state.filters.genre {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<option value="{0}"{1}>{0}</option>"#,
            escape(genre),
            selected
        ));
    }
    html
}

/// Everything below the filter form; this is what the live session pushes.
pub fn render_results(state: &ListState, eager: usize) -> String {
    let mut html = String::new();
    if let Some(err) = &state.genre_error {
        html.push_str(&format!(r#"<p class="error">Error: {}</p>"#, escape(err)));
    }

    match &state.status {
        ListStatus::Loading => {
            html.push_str(&format!(r#"<p class="status">{}</p>"#, LOADING_MESSAGE));
        }
        ListStatus::Failed(message) => {
            html.push_str(&format!(r#"<p class="error">Error: {}</p>"#, escape(message)));
        }
        ListStatus::Loaded(movies) if movies.is_empty() => {
            html.push_str(&format!(r#"<p class="status">{}</p>"#, NO_MATCHES_MESSAGE));
        }
        ListStatus::Loaded(movies) => {
            html.push_str(r#"<div class="grid">"#);
            for (index, movie) in movies.iter().enumerate() {
                html.push_str(&render_card(movie, index < eager));
            }
            html.push_str("</div>");
        }
    }
    html
}

pub fn render_card(movie: &MovieListItem, eager: bool) -> String {
    let poster = MovieImage::new(movie.poster_url.as_deref(), &movie.title, 200, 300)
        .priority(eager)
        .to_html();
    format!(
        r#"<div class="card"><a href="/movies/{id}">{poster}<div class="info"><h2>{title} ({year})</h2><p>Rating: {rating}</p></div></a></div>"#,
        id = urlencoding::encode(&movie.imdb_id),
        poster = poster,
        title = escape(&movie.title),
        year = format_year(movie.year),
        rating = format_list_rating(movie.rating),
    )
}
