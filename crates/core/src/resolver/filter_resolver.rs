//! Build-filter resolution
//!
//! Pure computation from the active document and workspace state to a
//! [`ResolutionResult`]. No filesystem access happens here; the package
//! root walk lives in [`crate::package_root`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::{Document, ResolutionResult, WorkspaceFolder};

/// File suffixes that are themselves code-generation outputs. Editing one
/// of these is never a meaningful build target, so part scanning is skipped.
const GENERATED_SUFFIXES: [&str; 2] = [".freezed.dart", ".g.dart"];

/// Full-line part declaration, e.g. `part 'user.g.dart';`
static PART_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^part '(.*)';$").unwrap());

/// Compute the directory to scope the build to.
///
/// Returns `None` when the document is untitled, when the workspace root is
/// not a prefix of the document path, or when the file sits directly at the
/// workspace root (there is no top-level folder to scope the build to).
pub fn resolve_base_directory(
    document_path: &str,
    is_untitled: bool,
    workspace_root: &str,
) -> Option<String> {
    if is_untitled {
        return None;
    }

    let workspace_root = workspace_root.trim_end_matches('/');
    let relative_path = document_path.strip_prefix(workspace_root)?;

    // The prefix must end on a path boundary: a sibling directory sharing
    // a string prefix with the workspace root is outside it.
    if !relative_path.is_empty() && !relative_path.starts_with('/') {
        return None;
    }

    let segments: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();

    // The file must be nested at least one folder below the workspace root.
    if segments.len() <= 1 {
        return None;
    }

    let without_filename = &segments[..segments.len() - 1];
    Some(format!("{}/{}", workspace_root, without_filename.join("/")))
}

/// Extract build-filter patterns from the document's part declarations.
///
/// Returns `None` when no filters should be applied: the edited file is
/// itself a generated file, or the text declares no parts. The generated
/// suffix check is on the edited file's own name only; a part declaration
/// naming a `.freezed.dart` file still produces a filter for it.
pub fn resolve_filter_patterns(document_path: &str, text: &str) -> Option<Vec<String>> {
    if GENERATED_SUFFIXES
        .iter()
        .any(|suffix| document_path.ends_with(suffix))
    {
        debug!("skipping part scan for generated file: {document_path}");
        return None;
    }

    let patterns: Vec<String> = PART_DECLARATION
        .captures_iter(text)
        .map(|captures| format!("/{}", &captures[1]))
        .collect();

    if patterns.is_empty() {
        return None;
    }
    Some(patterns)
}

/// Resolve the active document against the workspace.
///
/// Side-effect free and deterministic. "No workspace open" and "this file
/// is outside every open workspace folder" both map to
/// [`ResolutionResult::NoTarget`]; callers route that to their
/// workspace-picker fallback.
pub fn resolve(document: &Document, workspace: Option<&WorkspaceFolder>) -> ResolutionResult {
    let Some(workspace) = workspace else {
        return ResolutionResult::NoTarget;
    };

    let Some(base_directory) = resolve_base_directory(
        &document.absolute_path,
        document.is_untitled,
        &workspace.root_path,
    ) else {
        return ResolutionResult::NoTarget;
    };

    match resolve_filter_patterns(&document.absolute_path, &document.text) {
        Some(filter_patterns) => ResolutionResult::Filtered {
            base_directory,
            filter_patterns,
        },
        None => ResolutionResult::Unfiltered { base_directory },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> WorkspaceFolder {
        WorkspaceFolder::new("ws", "/ws")
    }

    #[test]
    fn test_untitled_document_has_no_base_directory() {
        assert_eq!(resolve_base_directory("/ws/lib/a.dart", true, "/ws"), None);
        assert_eq!(resolve_base_directory("", true, "/ws"), None);
    }

    #[test]
    fn test_file_at_workspace_root_has_no_base_directory() {
        assert_eq!(resolve_base_directory("/ws/main.dart", false, "/ws"), None);
        assert_eq!(resolve_base_directory("/ws", false, "/ws"), None);
    }

    #[test]
    fn test_file_outside_workspace_has_no_base_directory() {
        assert_eq!(
            resolve_base_directory("/elsewhere/lib/a.dart", false, "/ws"),
            None
        );
    }

    #[test]
    fn test_sibling_directory_sharing_a_prefix_is_outside_the_workspace() {
        assert_eq!(resolve_base_directory("/wsx/lib/a.dart", false, "/ws"), None);
        assert_eq!(
            resolve_base_directory("/ws-backup/lib/a.dart", false, "/ws"),
            None
        );
        // The workspace root itself still matches on the boundary.
        assert_eq!(
            resolve_base_directory("/ws/lib/a.dart", false, "/ws"),
            Some("/ws/lib".to_string())
        );
    }

    #[test]
    fn test_base_directory_drops_the_filename() {
        assert_eq!(
            resolve_base_directory("/ws/lib/models/foo.dart", false, "/ws"),
            Some("/ws/lib/models".to_string())
        );
        assert_eq!(
            resolve_base_directory("/ws/lib/a.dart", false, "/ws"),
            Some("/ws/lib".to_string())
        );
    }

    #[test]
    fn test_trailing_slash_on_workspace_root() {
        assert_eq!(
            resolve_base_directory("/ws/lib/a.dart", false, "/ws/"),
            Some("/ws/lib".to_string())
        );
    }

    #[test]
    fn test_generated_files_are_never_scanned() {
        let text = "part 'a.dart';\n";
        assert_eq!(resolve_filter_patterns("/ws/lib/x.freezed.dart", text), None);
        assert_eq!(resolve_filter_patterns("/ws/lib/x.g.dart", text), None);
    }

    #[test]
    fn test_no_part_declarations_means_no_filters() {
        assert_eq!(resolve_filter_patterns("/ws/lib/x.dart", ""), None);
        assert_eq!(
            resolve_filter_patterns("/ws/lib/x.dart", "class Foo {}\n// part 'a.dart';\n"),
            None
        );
    }

    #[test]
    fn test_part_declarations_must_span_the_whole_line() {
        // Indented or trailing-content lines do not match.
        let text = "  part 'a.dart';\npart 'b.dart'; // note\n";
        assert_eq!(resolve_filter_patterns("/ws/lib/x.dart", text), None);
    }

    #[test]
    fn test_filters_preserve_document_order_and_duplicates() {
        let text = "part 'b.dart';\npart 'a.dart';\npart 'b.dart';\n";
        assert_eq!(
            resolve_filter_patterns("/ws/lib/x.dart", text),
            Some(vec![
                "/b.dart".to_string(),
                "/a.dart".to_string(),
                "/b.dart".to_string(),
            ])
        );
    }

    #[test]
    fn test_resolve_without_workspace_is_no_target() {
        let document = Document::new("/ws/lib/a.dart", "part 'a.g.dart';\n");
        assert_eq!(resolve(&document, None), ResolutionResult::NoTarget);
    }

    #[test]
    fn test_resolve_untitled_is_no_target() {
        let document = Document::untitled("part 'a.g.dart';\n");
        assert_eq!(
            resolve(&document, Some(&workspace())),
            ResolutionResult::NoTarget
        );
    }

    #[test]
    fn test_resolve_without_parts_is_unfiltered() {
        let document = Document::new("/ws/lib/a/b.dart", "class B {}\n");
        assert_eq!(
            resolve(&document, Some(&workspace())),
            ResolutionResult::Unfiltered {
                base_directory: "/ws/lib/a".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_with_parts_is_filtered() {
        let document = Document::new(
            "/ws/lib/models/user.dart",
            "part 'user.freezed.dart';\npart 'user.g.dart';\n",
        );
        assert_eq!(
            resolve(&document, Some(&workspace())),
            ResolutionResult::Filtered {
                base_directory: "/ws/lib/models".to_string(),
                filter_patterns: vec![
                    "/user.freezed.dart".to_string(),
                    "/user.g.dart".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_generated_suffix_applies_to_the_edited_file_not_the_part_name() {
        // Editing foo.dart which declares a .freezed.dart part: the part
        // name carrying a generated suffix must not suppress filtering.
        let document = Document::new("/ws/lib/models/foo.dart", "part 'foo.freezed.dart';\n");
        assert_eq!(
            resolve(&document, Some(&workspace())),
            ResolutionResult::Filtered {
                base_directory: "/ws/lib/models".to_string(),
                filter_patterns: vec!["/foo.freezed.dart".to_string()],
            }
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let document = Document::new("/ws/lib/a/b.dart", "part 'b.g.dart';\n");
        let first = resolve(&document, Some(&workspace()));
        let second = resolve(&document, Some(&workspace()));
        assert_eq!(first, second);
    }
}
