use serde::{Deserialize, Serialize};

/// Outcome of resolving the active document against the workspace.
///
/// Every failure mode is a variant here rather than an error: callers
/// match exhaustively instead of decoding sentinel values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// Nothing to build against: untitled document, no workspace, path
    /// outside every workspace folder, or a file sitting directly at the
    /// workspace root.
    NoTarget,
    /// A valid base directory but no filters should be applied (generated
    /// file, or no part declarations in the text).
    Unfiltered { base_directory: String },
    /// A valid base directory plus one filter pattern per part declaration,
    /// in document order, duplicates kept.
    Filtered {
        base_directory: String,
        filter_patterns: Vec<String>,
    },
}

impl ResolutionResult {
    /// The base directory, when one was resolved.
    pub fn base_directory(&self) -> Option<&str> {
        match self {
            ResolutionResult::NoTarget => None,
            ResolutionResult::Unfiltered { base_directory }
            | ResolutionResult::Filtered { base_directory, .. } => Some(base_directory),
        }
    }

    pub fn is_no_target(&self) -> bool {
        matches!(self, ResolutionResult::NoTarget)
    }
}
