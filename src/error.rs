//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

/// Failure to turn a file on disk into a [`crate::catalog::Catalog`].
///
/// Every variant is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {} as a property list: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },
    #[error("top-level value of {} is not a dictionary", path.display())]
    NotADictionary { path: PathBuf },
    #[error("{} has no \"Tracks\" dictionary", path.display())]
    MissingTracks { path: PathBuf },
}

/// Failure to read one field from one track record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("track record is not a dictionary")]
    NotARecord,
    #[error("field {0:?} is missing")]
    Missing(&'static str),
    #[error("field {0:?} has an unexpected type")]
    WrongType(&'static str),
}

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("cannot write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
