//! Locating and loading compiled artifacts.
//!
//! Hardhat writes one `<Name>.json` per contract under
//! `artifacts/<sourcePath>/<Name>.json`, next to a `<Name>.dbg.json`.
//! Lookup is by exact file name, so the debug file never matches.

use std::fs;
use std::path::{Path, PathBuf};

use abibind_core::Artifact;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Depth-first search for a file named exactly `file_name` under `root`.
///
/// Directory entries are visited in file-name order, so when several files
/// share the name the result is still deterministic: the first one in that
/// order wins. Returns `None` when `root` does not exist or nothing matches.
/// Symlinks are not followed.
pub fn find_artifact(root: &Path, file_name: &str) -> Option<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "artifacts directory does not exist");
        return None;
    }
    search(root, file_name)
}

fn search(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
            return None;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if let Some(found) = search(&entry.path(), file_name) {
                return Some(found);
            }
        } else if file_type.is_file() && entry.file_name() == file_name {
            return Some(entry.path());
        }
    }
    None
}

/// The compiled-artifact tree written by the external compiler.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the artifact file for `contract`.
    ///
    /// The conventional `contracts/<Name>.sol/<Name>.json` locations are
    /// checked before falling back to a full search of the tree.
    pub fn locate(&self, contract: &str) -> Option<PathBuf> {
        let file_name = artifact_file_name(contract);
        let conventional = [
            self.root
                .join("contracts")
                .join(format!("{contract}.sol"))
                .join(&file_name),
            self.root
                .join("contracts")
                .join(format!("{contract}.SOL"))
                .join(&file_name),
            self.root
                .join("contracts")
                .join(format!("{contract}.sol"))
                .join(format!("{contract}.sol"))
                .join(&file_name),
        ];

        if let Some(path) = conventional.into_iter().find(|p| p.is_file()) {
            debug!(path = %path.display(), "artifact found at conventional path");
            return Some(path);
        }

        debug!(root = %self.root.display(), file = %file_name, "searching artifacts tree");
        find_artifact(&self.root, &file_name)
    }

    /// Locate and parse the artifact for `contract`.
    pub fn load(&self, contract: &str) -> Result<(PathBuf, Artifact)> {
        let path = self
            .locate(contract)
            .ok_or_else(|| Error::ArtifactNotFound {
                root: self.root.clone(),
                file_name: artifact_file_name(contract),
            })?;

        let content = fs::read_to_string(&path).map_err(|source| Error::ArtifactRead {
            path: path.clone(),
            source,
        })?;
        let artifact = Artifact::from_json(&content).map_err(|source| Error::InvalidArtifact {
            path: path.clone(),
            source,
        })?;

        debug!(
            path = %path.display(),
            contract = %artifact.contract_name,
            "loaded artifact"
        );
        Ok((path, artifact))
    }
}

fn artifact_file_name(contract: &str) -> String {
    format!("{contract}.json")
}
