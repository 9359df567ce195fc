use crate::api::{MovieDetails, MovieListItem};
use crate::ui::format::{
    format_rating, format_release_date, format_runtime, format_year, NOT_AVAILABLE,
};
use crate::ui::MovieImage;
use super::html::{escape, page};
use super::list::render_card;

pub const NOT_FOUND_TITLE: &str = "Movie Not Found";

pub fn render_not_found() -> String {
    let body = format!(
        r#"<div class="status"><h1>{}</h1><a class="back" href="/">Go back home</a></div>"#,
        NOT_FOUND_TITLE
    );
    page(NOT_FOUND_TITLE, &body, None)
}

pub fn render_detail_page(movie: &MovieDetails, recommendations: &[MovieListItem]) -> String {
    let item = &movie.item;
    let mut body = String::from(r#"<div class="detail">"#);

    body.push_str(
        &MovieImage::new(item.poster_url.as_deref(), &item.title, 384, 568)
            .priority(true)
            .to_html(),
    );

    body.push_str(&format!(
        r#"<div class="body"><h1>{} <small>({})</small></h1>"#,
        escape(&item.title),
        format_year(item.year)
    ));

    body.push_str(r#"<p class="meta">"#);
    if let Some(mpaa) = movie.mpaa_rating.as_deref().filter(|s| !s.is_empty()) {
        body.push_str(&format!(r#"<span class="badge">{}</span>"#, escape(mpaa)));
    }
    body.push_str(&format!(
        "<span>{}</span>",
        format_runtime(movie.runtime)
    ));
    if let Some(date) = movie.release_date.as_deref().filter(|s| !s.is_empty()) {
        body.push_str(&format!("<span>{}</span>", escape(&format_release_date(date))));
    }
    body.push_str("</p>");

    if item.rating.is_some() {
        body.push_str(&format!(
            r#"<p class="rating">&#9733; <strong>{}</strong>/10</p>"#,
            format_rating(item.rating)
        ));
    } else {
        body.push_str(&format!(r#"<p class="rating">Rating: {}</p>"#, NOT_AVAILABLE));
    }

    if !movie.genres.is_empty() {
        body.push_str("<div>");
        for genre in &movie.genres {
            body.push_str(&format!(r#"<span class="chip">{}</span>"#, escape(genre)));
        }
        body.push_str("</div>");
    }

    body.push_str(&format!(
        r#"<p class="plot">{}</p>"#,
        escape(movie.plot_summary.as_deref().unwrap_or(NOT_AVAILABLE))
    ));

    body.push_str("<h3>Cast &amp; Crew</h3><ol class=\"people\">");
    for person in &movie.people {
        body.push_str(&format!(
            "<li>{} ({})</li>",
            escape(&person.name),
            escape(&person.role_name)
        ));
    }
    body.push_str("</ol>");

    if !movie.plot_keywords.is_empty() {
        body.push_str("<h3>Keywords</h3><ol class=\"keywords\">");
        for keyword in &movie.plot_keywords {
            body.push_str(&format!(
                r#"<li class="chip keyword">{}</li>"#,
                escape(keyword)
            ));
        }
        body.push_str("</ol>");
    }

    body.push_str("</div></div>");

    if let Some(genre) = movie.genres.first().filter(|_| !recommendations.is_empty()) {
        body.push_str(&format!(
            r#"<h2>More {}</h2><div class="grid">"#,
            escape(genre)
        ));
        for rec in recommendations {
            body.push_str(&render_card(rec, false));
        }
        body.push_str("</div>");
    }

    body.push_str(r#"<a class="back" href="/">&larr; Back to movie list</a>"#);
    page(&item.title, &body, None)
}
