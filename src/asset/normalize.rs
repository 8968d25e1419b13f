//! Mapping discovered files to resource paths.
//!
//! ```text
//! <root>/addons/myaddon/models/foo.mdl             -> models/foo.mdl
//! <root>/addons/myaddon/materials/ws_123456/a.vtf  -> (excluded)
//! <root>/addons/loose.mdl                          -> (dropped, no addon folder)
//! ```

use regex::Regex;
use std::path::{MAIN_SEPARATOR, Path};
use std::sync::LazyLock;

use super::scan::AssetFile;

/// A folder named `<anything>_<6+ digits>` holds workshop-delivered content.
static STAGING_DIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".*_\d{6,}/.*").unwrap());

/// Replace platform separators and backslashes with `/`.
pub fn forward_slashes(path: &str) -> String {
    path.replace(MAIN_SEPARATOR, "/").replace('\\', "/")
}

/// Forward-slash `path` and strip the `<addons>/` prefix.
///
/// Applying this to its own output returns the same string.
pub fn strip_addons_prefix(path: &str, addons_prefix: &str) -> String {
    let path = forward_slashes(path);
    match path.strip_prefix(addons_prefix) {
        Some(rest) => rest.to_string(),
        None => path,
    }
}

/// Whether the path runs through a workshop staging folder.
#[inline]
pub fn is_staging_path(relative: &str) -> bool {
    STAGING_DIR.is_match(relative)
}

/// Resource path for a file relative to `addons`, dropping the addon folder.
///
/// `None` for staging paths and for files directly under `addons`.
pub fn resource_path(relative: &str) -> Option<&str> {
    if is_staging_path(relative) {
        return None;
    }
    relative.split_once('/').map(|(_, rest)| rest)
}

/// Resource paths for every scanned file, in scan order.
pub fn resource_paths(files: &[AssetFile], addons: &Path) -> Vec<String> {
    let prefix = format!(
        "{}/",
        forward_slashes(&addons.to_string_lossy()).trim_end_matches('/')
    );

    files
        .iter()
        .filter_map(|file| {
            let relative = strip_addons_prefix(&file.path.to_string_lossy(), &prefix);
            let declared = resource_path(&relative).map(str::to_string);
            if declared.is_none() {
                crate::debug!("scan"; "skipping {}", relative);
            }
            declared
        })
        .collect()
}
