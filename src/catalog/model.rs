use std::path::Path;

use plist::{Dictionary, Value};

use crate::error::CatalogError;

/// An exported library catalog, reduced to its `Tracks` dictionary.
///
/// Track order is the document order of the source file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Dictionary,
}

impl Catalog {
    /// Wrap an already-extracted `Tracks` dictionary.
    pub fn from_tracks(tracks: Dictionary) -> Self {
        Self { tracks }
    }

    /// Pull the `Tracks` dictionary out of a parsed top-level plist value.
    ///
    /// `path` is only used to label errors.
    pub fn from_value(value: Value, path: &Path) -> Result<Self, CatalogError> {
        let Some(root) = value.into_dictionary() else {
            return Err(CatalogError::NotADictionary {
                path: path.to_path_buf(),
            });
        };

        root.into_iter()
            .find(|(key, _)| key == "Tracks")
            .and_then(|(_, tracks)| tracks.into_dictionary())
            .map(Self::from_tracks)
            .ok_or_else(|| CatalogError::MissingTracks {
                path: path.to_path_buf(),
            })
    }

    /// Iterate `(track id, record)` pairs in catalog order.
    pub fn tracks(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.tracks.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
