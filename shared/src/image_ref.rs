use serde::{Deserialize, Serialize};

/// Reference to an image shown on a wheel segment or in the winner modal.
///
/// `Local` references are created from user-selected files and must be
/// released by whoever holds them last. `Remote` references point at bundled
/// assets or remote URLs and carry no release obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    Local { url: String },
    Remote { url: String },
}

impl ImageRef {
    pub fn local(url: impl Into<String>) -> Self {
        Self::Local { url: url.into() }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Local { url } | Self::Remote { url } => url,
        }
    }

    pub fn needs_release(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}
