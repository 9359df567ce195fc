pub mod debounce;
pub mod detail;
pub mod filter;
pub mod format;
pub mod image;
pub mod list;

pub use debounce::Debounced;
pub use detail::{load_recommendations, DetailState};
pub use filter::{FilterField, FilterState};
pub use image::{MovieImage, PLACEHOLDER_PATH};
pub use list::{ListSettings, ListState, ListStatus, ListView};
