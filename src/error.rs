// src/error.rs
use std::{io, path::PathBuf};

/// Why a board's record file could not be turned into records.
///
/// This is the only error the display layer reports; everything past a
/// successful load renders placeholders instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request to {target} failed: {source}")]
    Http {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("{target} answered HTTP {status}")]
    Status { target: String, status: u16 },

    #[error("malformed JSON in {target}: {source}")]
    Parse {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}
