//! Extracting collection items from a workshop page.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Anchor wrapping one collection item: captures the item ID and title.
static ITEM_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<a href="https?://steamcommunity\.com/sharedfiles/filedetails/\?id=(\d+)"><div class="workshopItemTitle">(.*?)</div></a>"#,
    )
    .unwrap()
});

/// One item of a workshop collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopEntry {
    pub id: u64,
    /// Title as it appears in the page markup
    pub title: String,
}

impl fmt::Display for WorkshopEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource.AddFile('{}') -- {}", self.id, self.title)
    }
}

/// Extract every collection item from a page body, in page order.
pub fn parse_collection(html: &str) -> Vec<WorkshopEntry> {
    ITEM_ANCHOR
        .captures_iter(html)
        .filter_map(|caps| {
            // IDs too large for u64 cannot be real items
            let id = caps[1].parse().ok()?;
            Some(WorkshopEntry {
                id,
                title: caps[2].to_string(),
            })
        })
        .collect()
}
