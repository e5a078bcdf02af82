pub mod document;
pub mod resolution;

pub use document::{Document, WorkspaceFolder};
pub use resolution::ResolutionResult;
