use std::path::Path;

use roxmltree::{Document, Node};

use super::{ManifestError, RawPackage, Result};

pub fn parse_nuspec(text: &str, path: &Path) -> Result<RawPackage> {
    let doc = Document::parse(text).map_err(|source| ManifestError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = doc
        .descendants()
        .find(|node| node.has_tag_name("metadata"))
        .ok_or_else(|| ManifestError::MissingMetadata(path.to_path_buf()))?;

    let id =
        child_text(metadata, "id").ok_or_else(|| ManifestError::MissingId(path.to_path_buf()))?;
    let title = child_text(metadata, "title").unwrap_or_else(|| id.clone());
    let version = child_text(metadata, "version");

    let mut dependencies = Vec::new();
    for node in metadata
        .descendants()
        .filter(|node| node.has_tag_name("dependency"))
    {
        let dep = node
            .attribute("id")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ManifestError::MissingDependencyId(path.to_path_buf()))?;
        dependencies.push(dep.to_string());
    }

    Ok(RawPackage {
        id,
        title,
        version,
        dependencies,
    })
}

fn child_text(parent: Node<'_, '_>, name: &str) -> Option<String> {
    parent
        .children()
        .find(|node| node.has_tag_name(name))
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
