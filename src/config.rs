//! Configuration lookup for media URL generation.

use std::collections::HashMap;

/// Configured prefix for media links. Takes precedence over [`DEFAULT_MEDIA_PREFIX`].
pub const MEDIA_LINK_PREFIX: &str = "Media.MediaLinkPrefix";
/// Fallback prefix used when [`MEDIA_LINK_PREFIX`] is unset or empty.
pub const DEFAULT_MEDIA_PREFIX: &str = "Media.DefaultMediaPrefix";
/// Extension forced onto dynamic media URLs.
pub const REQUEST_EXTENSION: &str = "Media.RequestExtension";

/// Key/value configuration store of the host platform.
pub trait Configuration: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl Configuration for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Media settings snapshot taken from a [`Configuration`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaSettings {
    link_prefix: String,
    request_extension: Option<String>,
}

impl MediaSettings {
    pub fn from_config(config: &dyn Configuration) -> Self {
        let non_empty = |key: &str| config.get(key).filter(|value| !value.is_empty());

        let link_prefix = non_empty(MEDIA_LINK_PREFIX)
            .or_else(|| config.get(DEFAULT_MEDIA_PREFIX))
            .unwrap_or_default();

        Self {
            link_prefix,
            request_extension: non_empty(REQUEST_EXTENSION),
        }
    }

    pub fn link_prefix(&self) -> &str {
        &self.link_prefix
    }

    /// The configured extension override, if any.
    pub fn request_extension(&self) -> Option<&str> {
        self.request_extension.as_deref()
    }
}
