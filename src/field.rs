//! Link-list field: lazily parsed view over an XML field value.

use crate::config::MediaSettings;
use crate::model::link::{Link, LinkFieldType};
use crate::resolver::{self, ResolutionContext};
use crate::Result;
use once_cell::sync::OnceCell;
use tracing::trace;

/// Root element name of a link-list field.
pub const LINKS_ROOT: &str = "links";

/// A raw content field: its name and stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Link-list view over a [`Field`].
///
/// The value is parsed on the first call to [`links`](Self::links) and the
/// result is kept for the lifetime of the view. Concurrent first callers
/// block until a single parse completes.
#[derive(Debug)]
pub struct LinkListField<'a> {
    field: &'a Field,
    root: String,
    runtime_value: Option<String>,
    context: ResolutionContext<'a>,
    links: OnceCell<Vec<Link>>,
}

impl<'a> LinkListField<'a> {
    pub fn new(field: &'a Field, context: ResolutionContext<'a>) -> Self {
        Self {
            field,
            root: LINKS_ROOT.to_string(),
            runtime_value: None,
            context,
            links: OnceCell::new(),
        }
    }

    /// Creates a view that parses `runtime_value` instead of the stored field value.
    pub fn with_runtime_value(
        field: &'a Field,
        root: impl Into<String>,
        runtime_value: impl Into<String>,
        context: ResolutionContext<'a>,
    ) -> Self {
        Self {
            field,
            root: root.into(),
            runtime_value: Some(runtime_value.into()),
            context,
            links: OnceCell::new(),
        }
    }

    /// Explicit conversion from an optional field; `None` stays `None`.
    pub fn from_field(field: Option<&'a Field>, context: ResolutionContext<'a>) -> Option<Self> {
        field.map(|field| Self::new(field, context))
    }

    pub fn field(&self) -> &Field {
        self.field
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// The XML text this view parses.
    pub fn value(&self) -> &str {
        self.runtime_value.as_deref().unwrap_or(&self.field.value)
    }

    /// Whether the value has already been parsed.
    pub fn is_parsed(&self) -> bool {
        self.links.get().is_some()
    }

    /// All links of the field in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDocument`](crate::Error::MalformedDocument) when
    /// the value is not well-formed XML and
    /// [`Error::UnknownLinkType`](crate::Error::UnknownLinkType) when a link has an
    /// unrecognized `linktype`. Neither leaves partial results behind.
    pub fn links(&self) -> Result<&[Link]> {
        self.links
            .get_or_try_init(|| self.parse_links())
            .map(Vec::as_slice)
    }

    fn parse_links(&self) -> Result<Vec<Link>> {
        let value = self.value();
        if value.trim().is_empty() {
            trace!(field = %self.field.name, root = %self.root, "blank link-list value");
            return Ok(Vec::new());
        }

        let document = roxmltree::Document::parse(value)?;
        let settings = MediaSettings::from_config(self.context.config);

        let links = document
            .descendants()
            .filter(|node| node.has_tag_name("link"))
            .map(|node| self.parse_link(node, &settings))
            .collect::<Result<Vec<_>>>()?;

        trace!(field = %self.field.name, count = links.len(), "parsed link-list field");
        Ok(links)
    }

    fn parse_link(&self, node: roxmltree::Node<'_, '_>, settings: &MediaSettings) -> Result<Link> {
        let element = Some(node);
        let raw_type = resolver::attribute(element, "linktype");
        let field_type: LinkFieldType = raw_type.parse()?;
        let link_type = raw_type.to_lowercase();

        Ok(Link {
            target: resolver::attribute(element, "target"),
            title: resolver::attribute(element, "text"),
            url: resolver::resolve_url(node, &link_type, &self.context),
            dynamic_url: resolver::resolve_dynamic_url(node, &link_type, &self.context, settings),
            link_type,
            field_type,
        })
    }
}
