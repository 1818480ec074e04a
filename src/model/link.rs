use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Classification of a link by its `linktype` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFieldType {
    Internal,
    Media,
    External,
}

impl LinkFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkFieldType::Internal => "internal",
            LinkFieldType::Media => "media",
            LinkFieldType::External => "external",
        }
    }
}

impl FromStr for LinkFieldType {
    type Err = Error;

    /// Case-insensitive. Anything but the three known tokens is rejected.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_lowercase().as_str() {
            "external" => Ok(LinkFieldType::External),
            "media" => Ok(LinkFieldType::Media),
            "internal" => Ok(LinkFieldType::Internal),
            _ => Err(Error::UnknownLinkType(token.to_string())),
        }
    }
}

impl fmt::Display for LinkFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One link extracted from a link-list field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub(crate) target: String,
    pub(crate) title: String,
    pub(crate) link_type: String,
    pub(crate) field_type: LinkFieldType,
    pub(crate) url: String,
    pub(crate) dynamic_url: String,
}

impl Link {
    /// Literal `target` attribute (e.g. `_blank`).
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Display text, from the `text` attribute.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The `linktype` attribute, lowercased.
    pub fn link_type(&self) -> &str {
        &self.link_type
    }

    pub fn field_type(&self) -> LinkFieldType {
        self.field_type
    }

    /// Renderable URL resolved when the field was parsed.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Prefix-based media URL for media links; the literal `url` attribute otherwise.
    pub fn dynamic_url(&self) -> &str {
        &self.dynamic_url
    }
}
