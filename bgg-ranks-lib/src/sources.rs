//! Collection files.
//!
//! Each `.yaml` file in the input directory is one collection, named after
//! the file stem:
//!
//! ```text
//! in/
//!   watchlist.yaml    # bgg-ids: [13, 822, 30549]
//!   shelf.yaml
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SourceError;

/// Key holding the identifier list in a collection file.
pub const IDS_KEY: &str = "bgg-ids";

/// A named set of catalog identifiers to report on together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub path: PathBuf,
    pub ids: Vec<u64>,
}

#[derive(Serialize)]
struct CollectionFile<'a> {
    #[serde(rename = "bgg-ids")]
    ids: &'a [u64],
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

/// Load every collection in `dir`, sorted by file name.
///
/// A missing directory is created and reported as [`SourceError::Created`].
/// Files that are not YAML, cannot be read or parsed, or hold no usable
/// identifiers are skipped with a warning.
pub fn load_collections(dir: &Path) -> Result<Vec<Collection>, SourceError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| SourceError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;
        return Err(SourceError::Created(dir.to_path_buf()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| SourceError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut collections = Vec::new();
    for entry in entries {
        let path = entry.path();
        if !is_yaml(&path) {
            log::warn!(
                "Could not process '{}' because it is not a .yaml file",
                entry.file_name().to_string_lossy()
            );
            continue;
        }
        match load_collection(&path) {
            Ok(Some(collection)) => collections.push(collection),
            Ok(None) => log::warn!(
                "Could not process '{}' because it does not contain a non-empty id list '{IDS_KEY}' at root",
                entry.file_name().to_string_lossy()
            ),
            Err(e) => log::warn!("Skipping collection file: {e}"),
        }
    }

    if collections.is_empty() {
        return Err(SourceError::NoSources(dir.to_path_buf()));
    }
    Ok(collections)
}

/// Load one collection file. Returns `None` when the file has no non-empty
/// identifier list; non-integer entries are dropped with a warning.
pub fn load_collection(path: &Path) -> Result<Option<Collection>, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let doc: serde_yml::Value = serde_yml::from_str(&contents).map_err(|e| SourceError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    let Some(list) = doc.get(IDS_KEY).and_then(|ids| ids.as_sequence()) else {
        return Ok(None);
    };

    let mut ids = Vec::with_capacity(list.len());
    for value in list {
        match value.as_u64() {
            Some(id) => ids.push(id),
            None => log::warn!(
                "{}: ignoring non-integer id {:?}",
                path.display(),
                value
            ),
        }
    }
    if ids.is_empty() {
        return Ok(None);
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Some(Collection {
        name,
        path: path.to_path_buf(),
        ids,
    }))
}

/// Write a collection file `dir/<name>.yaml`, creating `dir` if needed.
pub fn save_collection(dir: &Path, name: &str, ids: &[u64]) -> Result<PathBuf, SourceError> {
    let path = dir.join(format!("{name}.yaml"));
    std::fs::create_dir_all(dir).map_err(|e| SourceError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;
    let yaml = serde_yml::to_string(&CollectionFile { ids }).map_err(|e| SourceError::Encode {
        path: path.display().to_string(),
        source: e,
    })?;
    std::fs::write(&path, yaml).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(path)
}
