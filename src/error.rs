use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::entity::Product;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The index for a product could not be obtained.
    #[error("index unavailable for product `{product}`: {reason}")]
    IndexUnavailable { product: Product, reason: String },
    /// A string did not name one of the known entity kinds.
    #[error("unknown entity kind `{0}`")]
    UnknownEntityKind(String),
    /// The index directory could not be listed.
    #[error("read index dir {}: {source}", .path.display())]
    IndexDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn index_unavailable(product: &Product, reason: impl ToString) -> Self {
        Self::IndexUnavailable {
            product: product.clone(),
            reason: reason.to_string(),
        }
    }

    pub fn index_dir(path: &Path, source: std::io::Error) -> Self {
        Self::IndexDir {
            path: path.to_path_buf(),
            source,
        }
    }
}
