use serde::{Deserialize, Serialize};

/// The active source file as supplied by the host environment.
///
/// Paths are slash-separated absolute paths, the form editors hand out
/// for document URIs. Created fresh per invocation and discarded after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub absolute_path: String,
    pub text: String,
    pub is_untitled: bool,
}

impl Document {
    pub fn new(absolute_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            text: text.into(),
            is_untitled: false,
        }
    }

    pub fn untitled(text: impl Into<String>) -> Self {
        Self {
            absolute_path: String::new(),
            text: text.into(),
            is_untitled: true,
        }
    }
}

/// A workspace folder as reported by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    pub name: String,
    pub root_path: String,
}

impl WorkspaceFolder {
    pub fn new(name: impl Into<String>, root_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_path: root_path.into(),
        }
    }
}
