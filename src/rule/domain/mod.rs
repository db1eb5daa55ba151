//! Domain types shared by validation rules.

mod catalog;

pub use catalog::TemplateCatalog;
