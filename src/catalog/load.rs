use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info};

use crate::error::CatalogError;

use super::model::Catalog;

/// Open and parse an XML or binary property list catalog.
///
/// The file handle lives only for the duration of this call.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    debug!("Opening catalog at {:?}", path);
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = plist::Value::from_reader(BufReader::new(file)).map_err(|source| {
        CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let catalog = Catalog::from_value(value, path)?;
    info!("Loaded {} track records from {:?}", catalog.len(), path);
    Ok(catalog)
}
