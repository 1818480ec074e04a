mod catalog;

pub use catalog::{CatalogEntry, MemoryCatalog};
