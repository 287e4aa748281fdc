//! JSON catalog loading (`json-catalog` feature).
//!
//! The on-disk format is an array rather than an object so that category
//! order survives the round trip through `serde_json`.

use super::{Catalog, CatalogError, Category};
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Parses and validates a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Catalog, CatalogError> {
        let categories: Vec<Category> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json(Box::new(e)))?;
        Catalog::from_categories(categories)
    }

    /// Reads, parses and validates a catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Catalog::from_json_str(&json)?;
        info!(
            path = %path.display(),
            categories = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
