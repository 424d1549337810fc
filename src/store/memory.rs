use std::collections::HashMap;

use parking_lot::RwLock;

use super::ArtifactStore;
use crate::{
    error::{HappyErr, Result},
    model::ModelArtifact,
};

/// Keeps encoded artifacts in memory.
///
/// Artifacts go through the same JSON encoding as on disk, so anything that
/// round-trips here round-trips through a `LocalStore` too.
#[derive(Debug, Default)]
pub struct MemoryStore {
    artifacts: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.artifacts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.read().is_empty()
    }
}

impl ArtifactStore for MemoryStore {
    fn put(&self, identifier: &str, artifact: &ModelArtifact) -> Result<String> {
        let json = artifact.to_json()?;
        self.artifacts.write().insert(identifier.to_string(), json);
        Ok(format!("memory://{identifier}"))
    }

    fn get(&self, identifier: &str) -> Result<ModelArtifact> {
        let artifacts = self.artifacts.read();
        let json = artifacts
            .get(identifier)
            .ok_or_else(|| HappyErr::ArtifactNotFound(identifier.to_string()))?;

        ModelArtifact::from_json(json)
    }
}
