use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use rayon::prelude::*;

use super::{nuspec, ManifestError, RawPackage, Result};

pub fn manifest_paths(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = root.join("lib").join("*").join("*.nuspec");
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        paths.push(entry?);
    }
    paths.sort();
    Ok(paths)
}

pub fn load_manifests(root: &Path, show_progress: bool) -> Result<Vec<RawPackage>> {
    let paths = manifest_paths(root)?;
    let bar = if show_progress && !paths.is_empty() {
        ProgressBar::new(paths.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let packages = paths
        .par_iter()
        .map(|path| {
            let package = load_manifest(path);
            bar.inc(1);
            package
        })
        .collect::<Result<Vec<_>>>();
    bar.finish_and_clear();
    packages
}

pub fn load_manifest(path: &Path) -> Result<RawPackage> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    nuspec::parse_nuspec(&text, path)
}
