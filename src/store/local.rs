use std::{fs, io, path::PathBuf};

use super::ArtifactStore;
use crate::{
    error::{HappyErr, Result},
    model::ModelArtifact,
};

const ARTIFACT_SUFFIX: &str = "_model.json";

/// Keeps artifacts as JSON files inside a directory.
///
/// The artifact for `identifier` is `<identifier>_model.json`. This keeps the `_model`
/// stem of the older `<identifier>_model.pkl` pickles, but the contents are the
/// versioned JSON record, so those pickle files are never read.
///
/// Writes go to a temporary sibling first and are renamed into place, so a reader
/// never observes a half written artifact.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store rooted at the current working directory.
    pub fn cwd() -> Self {
        Self::new(".")
    }

    /// Returns the file an artifact named `identifier` lives in.
    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.dir.join(format!("{identifier}{ARTIFACT_SUFFIX}"))
    }
}

impl ArtifactStore for LocalStore {
    fn put(&self, identifier: &str, artifact: &ModelArtifact) -> Result<String> {
        let path = self.path_for(identifier);
        let tmp = path.with_extension("json.tmp");
        let json = artifact.to_json()?;

        fs::create_dir_all(&self.dir)?;
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        log::debug!("wrote artifact {}", path.display());
        Ok(path.display().to_string())
    }

    fn get(&self, identifier: &str) -> Result<ModelArtifact> {
        let path = self.path_for(identifier);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(HappyErr::ArtifactNotFound(identifier.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        log::debug!("read artifact {}", path.display());
        ModelArtifact::from_json(&json)
    }
}
