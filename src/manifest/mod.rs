use std::path::PathBuf;

use thiserror::Error;

pub mod loader;
pub mod nuspec;

pub use loader::{load_manifests, manifest_paths};
pub use nuspec::parse_nuspec;

#[derive(Debug, Clone)]
pub struct RawPackage {
    pub id: String,
    pub title: String,
    pub version: Option<String>,
    pub dependencies: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read manifest path: {0}")]
    Walk(#[from] glob::GlobError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
    #[error("manifest {0} has no metadata element")]
    MissingMetadata(PathBuf),
    #[error("manifest {0} has no package id")]
    MissingId(PathBuf),
    #[error("manifest {0} declares a dependency without an id")]
    MissingDependencyId(PathBuf),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
