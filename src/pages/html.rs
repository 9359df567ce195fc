pub use crate::util::escape;

const STYLE: &str = r#"
body { background: #0f0f0f; color: #e5e5e5; font-family: system-ui, sans-serif; margin: 0; }
main { max-width: 1400px; margin: 0 auto; padding: 2rem 1rem; }
a { color: inherit; text-decoration: none; }
h1 { text-align: center; margin-bottom: 2rem; }
.filters { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; padding: 1rem; margin-bottom: 2rem; background: #181818; border-radius: 4px; }
.filters label { display: block; font-size: 0.875rem; margin-bottom: 0.25rem; }
.filters input, .filters select { width: 100%; box-sizing: border-box; padding: 0.5rem 0.75rem; background: #181818; color: inherit; border: 1px solid #d1d5db; border-radius: 6px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1.5rem; }
.card { background: #181818; border: 1px solid #1f2937; border-radius: 8px; overflow: hidden; }
.card img { width: 100%; height: auto; aspect-ratio: 2 / 3; object-fit: cover; display: block; }
.card .info { padding: 1rem; }
.card h2 { font-size: 1.05rem; margin: 0 0 0.25rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.status { text-align: center; color: #9ca3af; }
.error { text-align: center; color: #dc2626; }
.detail { display: flex; flex-wrap: wrap; gap: 2rem; border: 1px solid #374151; border-radius: 8px; overflow: hidden; }
.detail img { width: 384px; max-width: 100%; height: auto; object-fit: cover; }
.detail .body { flex: 1; padding: 2rem; min-width: 280px; }
.meta span { margin-right: 0.75rem; }
.badge { border: 1px solid currentColor; padding: 0.1rem 0.4rem; border-radius: 4px; }
.chip { display: inline-block; border-radius: 9999px; padding: 0.25rem 0.75rem; margin: 0 0.5rem 0.5rem 0; font-size: 0.875rem; background: #e5e7eb; color: #374151; }
.chip.keyword { background: #dbeafe; color: #1e40af; }
.back { display: inline-block; margin-top: 2rem; color: #2563eb; }
"#;

/// Wraps a body fragment into a complete document.
pub fn page(title: &str, body: &str, script: Option<&str>) -> String {
    let script = script
        .map(|s| format!("<script>{}</script>", s))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}\n</main>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body,
        script
    )
}
