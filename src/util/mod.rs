mod html;
mod placeholder;

pub use html::escape;
pub use placeholder::{render_placeholder_png, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH};
