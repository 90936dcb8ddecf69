use log::*;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unable to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("unable to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads a JSON document such as an [`Annotation`](crate::Annotation).
///
/// Without a path the default document is used. A named file that cannot be opened or
/// parsed is an error, never a silent fallback.
pub fn load_document<T>(path: Option<&Path>, what: &str) -> Result<T, DocumentError>
where
    T: DeserializeOwned + Default,
{
    let path = match path {
        Some(path) => path,
        None => {
            info!("used default {}", what);
            return Ok(T::default());
        }
    };
    let file = File::open(path).map_err(|source| DocumentError::Open {
        path: path.to_owned(),
        source,
    })?;
    let document = serde_json::from_reader(io::BufReader::new(file)).map_err(|source| {
        DocumentError::Parse {
            path: path.to_owned(),
            source,
        }
    })?;
    info!("loaded {} from {}", what, path.display());
    Ok(document)
}
