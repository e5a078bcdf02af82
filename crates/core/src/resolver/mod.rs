pub mod filter_resolver;

pub use filter_resolver::{resolve, resolve_base_directory, resolve_filter_patterns};
