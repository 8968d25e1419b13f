//! Asset discovery and resource path mapping.

mod kind;
mod normalize;
mod scan;

// Types
pub use kind::AssetKind;

// Scanning (reads the filesystem, no side effects)
pub use scan::{ScanReport, scan_assets};

// Path mapping (pure)
pub use normalize::resource_paths;
