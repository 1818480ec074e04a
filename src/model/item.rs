use std::fmt;
use uuid::Uuid;

/// Identifier of a content item.
///
/// Accepts the hyphenated, braced (`{...}`), simple and URN textual forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses an identifier, returning `None` for blank or unparsable text.
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Uuid::try_parse(text).ok().map(Self)
    }

    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// 32 lowercase hex digits, no dashes or braces.
    pub fn to_simple_hex(&self) -> String {
        self.0.simple().to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:X}}}", self.0)
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A content item as returned by an [`ItemRepository`](crate::ItemRepository).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Content path of the item inside the repository.
    pub path: String,
}

impl Item {
    pub fn new(id: ItemId, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }
}

/// Media view over an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem(Item);

impl MediaItem {
    pub fn id(&self) -> ItemId {
        self.0.id
    }

    pub fn item(&self) -> &Item {
        &self.0
    }
}

impl From<Item> for MediaItem {
    fn from(item: Item) -> Self {
        Self(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HYPHENATED: &str = "6f9a1c2e-0b7d-4e55-9a3c-1d2e3f405162";

    #[test]
    fn test_parse_accepts_common_forms() {
        let expected = ItemId::parse(HYPHENATED).unwrap();
        for text in [
            "{6F9A1C2E-0B7D-4E55-9A3C-1D2E3F405162}",
            "6f9a1c2e0b7d4e559a3c1d2e3f405162",
            "urn:uuid:6f9a1c2e-0b7d-4e55-9a3c-1d2e3f405162",
        ] {
            assert_eq!(ItemId::parse(text), Some(expected), "{text}");
        }
    }

    #[test]
    fn test_parse_rejects_blank_and_garbage() {
        assert_eq!(ItemId::parse(""), None);
        assert_eq!(ItemId::parse("   "), None);
        assert_eq!(ItemId::parse("not-an-id"), None);
    }

    #[test]
    fn test_simple_hex_and_display() {
        let id = ItemId::parse(HYPHENATED).unwrap();
        assert_eq!(id.to_simple_hex(), "6f9a1c2e0b7d4e559a3c1d2e3f405162");
        assert_eq!(id.to_string(), "{6F9A1C2E-0B7D-4E55-9A3C-1D2E3F405162}");
    }
}
