//! Package root discovery
//!
//! Walks upward from the resolved base directory until a directory
//! containing the package manifest (`pubspec.yaml`) is found. The walk is
//! an explicit iterative loop over path segments: each step strictly
//! shortens the path, so it always terminates. Not finding a manifest is
//! not an error; the caller simply runs without changing directory.

use std::path::Path;

use tracing::debug;

/// The marker file anchoring a buildable Dart package.
pub const MANIFEST_FILENAME: &str = "pubspec.yaml";

/// Trait for filesystem existence checks
///
/// Abstracts the one filesystem operation the walk needs, so hosts without
/// direct filesystem access can supply their own probe.
pub trait ManifestProbe {
    /// Whether `filename` exists directly inside `directory`.
    fn file_exists(&self, directory: &str, filename: &str) -> bool;
}

/// Default implementation of ManifestProbe using std::fs
pub struct FsManifestProbe;

impl FsManifestProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsManifestProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestProbe for FsManifestProbe {
    fn file_exists(&self, directory: &str, filename: &str) -> bool {
        Path::new(directory).join(filename).is_file()
    }
}

/// Finds the nearest ancestor directory containing the package manifest.
pub struct PackageRootFinder<P: ManifestProbe> {
    probe: P,
}

impl PackageRootFinder<FsManifestProbe> {
    pub fn new() -> Self {
        Self::with_probe(FsManifestProbe::new())
    }
}

impl Default for PackageRootFinder<FsManifestProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ManifestProbe> PackageRootFinder<P> {
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Walk upward from `start_dir`, returning the first ancestor
    /// (inclusive) that contains the manifest, or `None` once the candidate
    /// reaches the filesystem root without a match. The root itself is
    /// never probed.
    pub fn find(&self, start_dir: &str) -> Option<String> {
        let mut current = start_dir.trim_end_matches('/').to_string();

        loop {
            if current.is_empty() {
                debug!("reached filesystem root without finding {MANIFEST_FILENAME}");
                return None;
            }
            if self.probe.file_exists(&current, MANIFEST_FILENAME) {
                debug!("found package root: {current}");
                return Some(current);
            }
            // Drop the last path segment.
            current = match current.rfind('/') {
                Some(index) => current[..index].to_string(),
                None => String::new(),
            };
        }
    }
}
