//! Classifying dish media and tracking what the device can show.

/// Whether this device can run an immersive AR session.
///
/// Starts `Unknown` while the async probe is in flight; only an explicit
/// `Supported` unlocks the AR path, so a probe that never answers behaves
/// like an unsupported device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArCapability {
    #[default]
    Unknown,
    Supported,
    Unsupported,
}

impl ArCapability {
    pub fn is_supported(self) -> bool {
        matches!(self, ArCapability::Supported)
    }

    /// Short status text for the viewer header.
    pub fn label(self) -> &'static str {
        match self {
            ArCapability::Unknown => "checking AR support...",
            ArCapability::Supported => "AR ready",
            ArCapability::Unsupported => "AR not available on this device",
        }
    }
}

/// How a dish asset should be presented when AR is off the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A 3D model for the in-page renderer.
    Model,
    /// Anything else renders as a plain image.
    Image,
}

impl MediaKind {
    /// Classify by the extension after the last dot, lowercased. URLs with
    /// no usable extension (or query-string noise after it) fall back to
    /// `Image`.
    pub fn from_url(url: &str) -> Self {
        let ext = url
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "glb" | "gltf" => MediaKind::Model,
            _ => MediaKind::Image,
        }
    }
}

/// The last path segment of a URL, for captions and window titles.
pub fn file_name_of(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
