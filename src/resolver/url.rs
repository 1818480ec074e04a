//! URL resolution for single `<link>` elements.

use super::ResolutionContext;
use crate::config::MediaSettings;
use crate::model::item::{Item, ItemId, MediaItem};
use roxmltree::Node;
use tracing::debug;

/// Literal attribute value, or an empty string when the element or attribute is missing.
pub(crate) fn attribute(element: Option<Node<'_, '_>>, name: &str) -> String {
    element
        .and_then(|node| node.attribute(name))
        .unwrap_or_default()
        .to_string()
}

pub(crate) fn resolve_url(
    link: Node<'_, '_>,
    link_type: &str,
    ctx: &ResolutionContext<'_>,
) -> String {
    match link_type {
        "internal" => lookup_item(link, ctx)
            .map(|item| ctx.links.item_url(&item))
            .unwrap_or_default(),
        "media" => lookup_item(link, ctx)
            .map(|item| ctx.media.media_url(&MediaItem::from(item)))
            .unwrap_or_default(),
        _ => attribute(Some(link), "url"),
    }
}

pub(crate) fn resolve_dynamic_url(
    link: Node<'_, '_>,
    link_type: &str,
    ctx: &ResolutionContext<'_>,
    settings: &MediaSettings,
) -> String {
    if link_type != "media" {
        return attribute(Some(link), "url");
    }

    let Some(item) = lookup_item(link, ctx) else {
        return String::new();
    };
    let media = MediaItem::from(item);
    let path = ctx.media.media_url(&media);

    let extension = match settings.request_extension() {
        Some(ext) => ext,
        None => extension_of(&path),
    };

    dynamic_media_url(settings.link_prefix(), media.id(), extension)
}

/// `<prefix><hex>.<extension>`, or `<prefix><hex>` when there is no extension.
fn dynamic_media_url(prefix: &str, id: ItemId, extension: &str) -> String {
    if extension.is_empty() {
        format!("{}{}", prefix, id.to_simple_hex())
    } else {
        format!("{}{}.{}", prefix, id.to_simple_hex(), extension)
    }
}

/// Everything after the last `.` of a media URL.
fn extension_of(path: &str) -> &str {
    path.rfind('.').map(|idx| &path[idx + 1..]).unwrap_or("")
}

fn lookup_item(link: Node<'_, '_>, ctx: &ResolutionContext<'_>) -> Option<Item> {
    let raw_id = attribute(Some(link), "id");
    if raw_id.trim().is_empty() {
        debug!(line = link_line(link), "link has no id");
        return None;
    }

    let Some(id) = ItemId::parse(&raw_id) else {
        debug!(line = link_line(link), id = %raw_id, "link id is not a valid item identifier");
        return None;
    };

    let item = ctx.items.get_item(&id);
    if item.is_none() {
        debug!(line = link_line(link), %id, "linked item not found");
    }
    item
}

fn link_line(link: Node<'_, '_>) -> u32 {
    link.document().text_pos_at(link.range().start).row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_missing_element_or_attribute() {
        let doc = roxmltree::Document::parse(r#"<link text="Home"/>"#).unwrap();
        let link = doc.root_element();
        assert_eq!(attribute(None, "text"), "");
        assert_eq!(attribute(Some(link), "text"), "Home");
        assert_eq!(attribute(Some(link), "url"), "");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("/-/media/files/report.pdf"), "pdf");
        assert_eq!(extension_of("/media/a.b/photo.JPG"), "JPG");
        assert_eq!(extension_of("/media/photo.ashx?h=10"), "ashx?h=10");
        assert_eq!(extension_of("/media/noext"), "");
    }

    #[test]
    fn test_dynamic_media_url() {
        let id = ItemId::parse("{0A1B2C3D-4E5F-6071-8293-A4B5C6D7E8F9}").unwrap();
        assert_eq!(
            dynamic_media_url("~/media/", id, "jpg"),
            "~/media/0a1b2c3d4e5f60718293a4b5c6d7e8f9.jpg"
        );
        assert_eq!(
            dynamic_media_url("/m/", id, ""),
            "/m/0a1b2c3d4e5f60718293a4b5c6d7e8f9"
        );
    }
}
