//! Collaborators used to turn link elements into renderable URLs.

mod url;

use crate::config::Configuration;
use crate::model::item::{Item, ItemId, MediaItem};

pub(crate) use self::url::{attribute, resolve_dynamic_url, resolve_url};

/// Looks up content items by identifier.
pub trait ItemRepository: Send + Sync {
    fn get_item(&self, id: &ItemId) -> Option<Item>;
}

/// Produces the canonical URL of a content item.
pub trait LinkUrlGenerator: Send + Sync {
    fn item_url(&self, item: &Item) -> String;
}

/// Produces the URL of a media item.
pub trait MediaUrlResolver: Send + Sync {
    fn media_url(&self, media: &MediaItem) -> String;
}

/// Collaborators shared by every link of a field.
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub items: &'a dyn ItemRepository,
    pub links: &'a dyn LinkUrlGenerator,
    pub media: &'a dyn MediaUrlResolver,
    pub config: &'a dyn Configuration,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        items: &'a dyn ItemRepository,
        links: &'a dyn LinkUrlGenerator,
        media: &'a dyn MediaUrlResolver,
        config: &'a dyn Configuration,
    ) -> Self {
        Self {
            items,
            links,
            media,
            config,
        }
    }
}

impl std::fmt::Debug for ResolutionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext").finish_non_exhaustive()
    }
}
