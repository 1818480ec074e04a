//! In-memory item catalog backing all three resolver traits.

use crate::model::item::{Item, ItemId, MediaItem};
use crate::resolver::{ItemRepository, LinkUrlGenerator, MediaUrlResolver};
use crate::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub item: Item,
    /// URL returned by [`LinkUrlGenerator::item_url`].
    pub url: String,
    /// URL returned by [`MediaUrlResolver::media_url`]; empty for non-media items.
    pub media_url: String,
}

/// Items keyed by identifier.
///
/// The text format is one item per line, tab separated:
/// `<id>\t<url>[\t<media-url>]`. Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: HashMap<ItemId, CatalogEntry>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the tab-separated catalog format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] for a line without a URL column or with
    /// an unparsable identifier.
    pub fn parse(text: &str) -> Result<Self> {
        let mut catalog = Self::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut columns = trimmed.split('\t');
            let raw_id = columns.next().unwrap_or_default().trim();
            let id = ItemId::parse(raw_id).ok_or_else(|| Error::InvalidCatalog {
                line: line_no,
                message: format!("invalid item id {:?}", raw_id),
            })?;
            let url = columns.next().map(str::trim).ok_or_else(|| Error::InvalidCatalog {
                line: line_no,
                message: "missing url column".to_string(),
            })?;
            let media_url = columns.next().map(str::trim).unwrap_or_default();

            catalog.insert(Item::new(id, url), url, media_url);
        }

        Ok(catalog)
    }

    pub fn insert(&mut self, item: Item, url: impl Into<String>, media_url: impl Into<String>) {
        let entry = CatalogEntry {
            item,
            url: url.into(),
            media_url: media_url.into(),
        };
        self.entries.insert(entry.item.id, entry);
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ItemRepository for MemoryCatalog {
    fn get_item(&self, id: &ItemId) -> Option<Item> {
        self.entries.get(id).map(|entry| entry.item.clone())
    }
}

impl LinkUrlGenerator for MemoryCatalog {
    fn item_url(&self, item: &Item) -> String {
        self.entries
            .get(&item.id)
            .map(|entry| entry.url.clone())
            .unwrap_or_default()
    }
}

impl MediaUrlResolver for MemoryCatalog {
    fn media_url(&self, media: &MediaItem) -> String {
        self.entries
            .get(&media.id())
            .map(|entry| entry.media_url.clone())
            .unwrap_or_default()
    }
}
