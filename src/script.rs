//! Lua script generation.
//!
//! ```text
//! resource.AddFile('104691717') -- PAC3      <- one line per workshop item
//! if ( SERVER ) then
//!     resource.AddFile('models/foo.mdl')     <- one line per resource path
//! end
//! ```

use crate::workshop::WorkshopEntry;

const SERVER_OPEN: &str = "if ( SERVER ) then\n";
const SERVER_CLOSE: &str = "end";
const DECLARATION_OPEN: &str = "    resource.AddFile('";
const DECLARATION_CLOSE: &str = "')";

/// Generated `fastdl.lua` contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedScript {
    text: String,
}

impl EmittedScript {
    /// Build the script from workshop items and resource paths.
    ///
    /// Paths are emitted in the given order, duplicates included.
    pub fn new(workshop: &[WorkshopEntry], resources: &[String]) -> Self {
        let mut text = workshop_block(workshop);
        text.push_str(SERVER_OPEN);
        for path in resources {
            text.push_str(DECLARATION_OPEN);
            text.push_str(path);
            text.push_str(DECLARATION_CLOSE);
            text.push('\n');
        }
        text.push_str(SERVER_CLOSE);
        Self { text }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Resource paths declared inside the server block, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &str> {
        self.text.lines().filter_map(|line| {
            line.strip_prefix(DECLARATION_OPEN)?
                .strip_suffix(DECLARATION_CLOSE)
        })
    }
}

impl std::fmt::Display for EmittedScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Workshop lines, each newline-terminated. Empty when there are no items.
fn workshop_block(entries: &[WorkshopEntry]) -> String {
    entries.iter().map(|entry| format!("{entry}\n")).collect()
}
