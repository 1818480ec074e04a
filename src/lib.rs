//! # linkfield
//!
//! Parses link-list field values (an XML list of `<link>` elements) into typed
//! [`Link`] descriptors, resolving URLs through injected collaborators.
//!
//! ## Example
//!
//! ```
//! use linkfield::{Field, LinkFieldType, LinkListField, MemoryCatalog, ResolutionContext};
//! use std::collections::HashMap;
//!
//! let catalog = MemoryCatalog::new();
//! let config: HashMap<String, String> = HashMap::new();
//! let context = ResolutionContext::new(&catalog, &catalog, &catalog, &config);
//!
//! let field = Field::new(
//!     "Related",
//!     r#"<links><link linktype="external" text="Rust" url="https://www.rust-lang.org" /></links>"#,
//! );
//! let view = LinkListField::new(&field, context);
//! let links = view.links().unwrap();
//!
//! assert_eq!(links[0].field_type(), LinkFieldType::External);
//! assert_eq!(links[0].url(), "https://www.rust-lang.org");
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod field;
pub mod model;
pub mod resolver;

pub use adapters::{CatalogEntry, MemoryCatalog};
pub use config::{Configuration, MediaSettings};
pub use error::{Error, Result};
pub use field::{Field, LinkListField, LINKS_ROOT};
pub use model::item::{Item, ItemId, MediaItem};
pub use model::link::{Link, LinkFieldType};
pub use resolver::{ItemRepository, LinkUrlGenerator, MediaUrlResolver, ResolutionContext};
