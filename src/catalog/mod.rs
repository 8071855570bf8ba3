mod load;
mod sample;
mod types;

pub use load::load_catalog_file;
pub use sample::sample_catalog;
pub use types::{Catalog, CatalogEntry, Category, Project, ProjectStatus};
