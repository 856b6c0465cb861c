use serde::{Deserialize, Serialize};

/// One work item shown in the portfolio grid. Every entry is exactly one
/// kind; consumers match exhaustively instead of probing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Product {
        title: String,
        description: String,
        image_url: String,
        tools: Vec<String>,
    },
    Design {
        title: String,
        description: String,
        image_url: String,
    },
    Video {
        title: String,
        description: String,
        embed_url: String,
        external_url: String,
    },
}

impl CatalogEntry {
    pub fn title(&self) -> &str {
        match self {
            Self::Product { title, .. } | Self::Design { title, .. } | Self::Video { title, .. } => {
                title
            }
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Product { description, .. }
            | Self::Design { description, .. }
            | Self::Video { description, .. } => description,
        }
    }

    /// The image shown in the grid card and the lightbox. Videos carry an
    /// embed instead and never open the lightbox.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Product { image_url, .. } | Self::Design { image_url, .. } => Some(image_url),
            Self::Video { .. } => None,
        }
    }

    /// The media field that must be non-empty for the entry to render.
    pub fn media_url(&self) -> &str {
        match self {
            Self::Product { image_url, .. } | Self::Design { image_url, .. } => image_url,
            Self::Video { embed_url, .. } => embed_url,
        }
    }
}

/// Filter selector controlling which catalog entries are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    All,
    ThreeD,
    Design,
    Video,
}

impl CategoryTag {
    pub const ALL: [CategoryTag; 4] = [Self::All, Self::ThreeD, Self::Design, Self::Video];

    pub fn matches(self, entry: &CatalogEntry) -> bool {
        match (self, entry) {
            (Self::All, _) => true,
            (Self::ThreeD, CatalogEntry::Product { .. }) => true,
            (Self::Design, CatalogEntry::Design { .. }) => true,
            (Self::Video, CatalogEntry::Video { .. }) => true,
            (Self::ThreeD | Self::Design | Self::Video, _) => false,
        }
    }

    /// Chip caption in the filter bar. Captions stay in English
    /// regardless of locale.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Work",
            Self::ThreeD => "3D Products",
            Self::Design => "Design Works",
            Self::Video => "Video Edits",
        }
    }
}
