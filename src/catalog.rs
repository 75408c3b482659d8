//! Catalog loading and per-record field extraction.
//!
//! A catalog is the `Tracks` dictionary of an exported library plist.
//! Loading is all-or-nothing; field extraction fails per record.

pub mod extract;
mod load;
mod model;

pub use load::load_catalog;
pub use model::Catalog;
