//! The two passes. Each is independent; they share only [`Config`](crate::config::Config)
//! and [`Pattern`](crate::pattern::Pattern).

pub mod contents;
pub mod paths;

pub use contents::replace_contents;
pub use paths::rename_paths;
