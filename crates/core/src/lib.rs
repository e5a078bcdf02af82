//! buildrunner - resolves build_runner build filters for the file being edited
//!
//! This crate provides functionality to:
//! - Derive the base directory and build-filter glob patterns from a Dart
//!   source file's path and part declarations
//! - Locate the nearest ancestor package root (`pubspec.yaml`)
//! - Compose the `build_runner` shell command scoped to those filters
pub mod command;
pub mod config;
pub mod error;
pub mod package_root;
pub mod resolver;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::BuildCommand;
pub use config::Settings;
pub use package_root::{FsManifestProbe, ManifestProbe, PackageRootFinder};
pub use resolver::resolve;
