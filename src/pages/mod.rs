pub mod detail;
pub mod handlers;
pub mod html;
pub mod list;
pub mod live;

pub use handlers::*;
pub use live::live_list;
