pub mod list;

pub use list::ProductCatalogList;
