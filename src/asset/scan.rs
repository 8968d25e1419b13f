//! Asset scanning functions (pure, no side effects).

use jwalk::{Parallelism, WalkDir};
use std::path::{Path, PathBuf};

use super::AssetKind;

/// A file under `addons` that clients must download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub path: PathBuf,
    pub kind: AssetKind,
}

/// Result of walking the addons tree.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Matching files in traversal order
    pub files: Vec<AssetFile>,
    /// Entries that could not be read
    pub errors: Vec<String>,
}

impl ScanReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of files of one kind.
    pub fn count(&self, kind: AssetKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }
}

/// Walk `addons` recursively and collect every FastDL asset.
///
/// Traversal is depth-first with each directory's entries sorted by file
/// name, so the order is stable across runs and platforms. Hidden files are
/// included and symlinks are not followed. Unreadable entries are recorded
/// in `errors` and the walk carries on.
///
/// ```text
/// addons/
/// ├── a_addon/
/// │   ├── lua/init.lua       -> (skipped)
/// │   └── models/foo.mdl     -> addons/a_addon/models/foo.mdl
/// └── b_addon/
///     └── sound/hit.wav      -> addons/b_addon/sound/hit.wav
/// ```
pub fn scan_assets(addons: &Path) -> ScanReport {
    collect_assets(walker(addons))
}

/// Serial, sorted walk over `addons` that does not follow symlinks.
fn walker(addons: &Path) -> WalkDir {
    WalkDir::new(addons)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial)
}

fn collect_assets(walker: WalkDir) -> ScanReport {
    let mut report = ScanReport::default();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.errors.push(e.to_string());
                continue;
            }
        };

        if entry.file_type().is_dir() {
            // jwalk yields the directory itself and keeps the read failure on it
            if let Some(e) = &entry.read_children_error {
                report.errors.push(e.to_string());
            }
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if let Some(kind) = AssetKind::from_file_name(&name) {
            report.files.push(AssetFile {
                path: entry.path(),
                kind,
            });
        }
    }

    report
}
