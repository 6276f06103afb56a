pub mod catalog;
pub mod profile;

pub use catalog::CatalogService;
