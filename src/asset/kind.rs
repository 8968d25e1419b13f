//! Asset kind definitions.

/// Kind of client-downloadable asset, by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// `.mdl` model
    Model,
    /// `.vmt` material
    Material,
    /// `.vtf` texture
    Texture,
    /// `.wav` sound
    Wave,
    /// `.mp3` sound
    Mp3,
}

impl AssetKind {
    /// Every kind, in match priority order.
    pub const ALL: [Self; 5] = [
        Self::Model,
        Self::Material,
        Self::Texture,
        Self::Wave,
        Self::Mp3,
    ];

    /// File extension without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Model => "mdl",
            Self::Material => "vmt",
            Self::Texture => "vtf",
            Self::Wave => "wav",
            Self::Mp3 => "mp3",
        }
    }

    /// Match a file name against the glob `*.<ext>` for each kind.
    ///
    /// Case-sensitive; the first kind whose pattern matches wins.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            name.strip_suffix(kind.extension())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}
