pub mod client;
pub mod query;
pub mod types;

pub use client::*;
pub use query::MovieQuery;
pub use types::*;

#[cfg(test)]
pub mod fake;
