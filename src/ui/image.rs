use crate::util::escape;

pub const PLACEHOLDER_PATH: &str = "/placeholder-image.png";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Original(String),
    Placeholder,
}

/// A poster image that falls back to the placeholder when the source is
/// missing or fails to load. Falling back is permanent for the instance.
#[derive(Debug, Clone)]
pub struct MovieImage {
    source: Source,
    alt: String,
    width: u32,
    height: u32,
    class: Option<String>,
    priority: bool,
}

impl MovieImage {
    pub fn new(src: Option<&str>, alt: &str, width: u32, height: u32) -> Self {
        let source = match src.map(str::trim) {
            Some(s) if !s.is_empty() => Source::Original(s.to_string()),
            _ => Source::Placeholder,
        };
        let alt = if alt.trim().is_empty() {
            "Movie Poster".to_string()
        } else {
            alt.to_string()
        };

        Self {
            source,
            alt,
            width,
            height,
            class: None,
            priority: false,
        }
    }

    pub fn priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Called when the current source failed to load.
    pub fn on_error(&mut self) {
        self.source = Source::Placeholder;
    }

    pub fn src(&self) -> &str {
        match &self.source {
            Source::Original(s) => s,
            Source::Placeholder => PLACEHOLDER_PATH,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Placeholder
    }

    pub fn loading(&self) -> &'static str {
        if self.priority {
            "eager"
        } else {
            "lazy"
        }
    }

    /// The browser-side `onerror` handler clears itself before swapping in
    /// the placeholder, so the original source is never requested again.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<img src="{}" alt="{}" width="{}" height="{}" loading="{}""#,
            escape(self.src()),
            escape(&self.alt),
            self.width,
            self.height,
            self.loading(),
        );
        if self.priority {
            html.push_str(r#" fetchpriority="high""#);
        }
        if let Some(class) = &self.class {
            html.push_str(&format!(r#" class="{}""#, escape(class)));
        }
        if !self.is_fallback() {
            html.push_str(&format!(
                r#" onerror="this.onerror=null;this.src='{}'""#,
                PLACEHOLDER_PATH
            ));
        }
        html.push('>');
        html
    }
}
