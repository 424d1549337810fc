use std::{env, path::PathBuf};

use crate::store::{ArtifactStore, LocalStore, MemoryStore};

/// Environment variable naming the directory artifacts are kept in.
pub const MODEL_DIR_VAR: &str = "HAPPYPRED_MODEL_DIR";

const DEFAULT_MODEL_DIR: &str = ".";

/// Where trained models are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Local { dir: PathBuf },
    Memory,
}

impl StoreConfig {
    /// Builds a local store config from `HAPPYPRED_MODEL_DIR`, defaulting to the
    /// working directory.
    pub fn from_env() -> Self {
        let dir = env::var(MODEL_DIR_VAR).unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string());
        Self::Local { dir: dir.into() }
    }

    pub fn build(&self) -> Box<dyn ArtifactStore> {
        match self {
            StoreConfig::Local { dir } => Box::new(LocalStore::new(dir.clone())),
            StoreConfig::Memory => Box::new(MemoryStore::new()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::Local {
            dir: DEFAULT_MODEL_DIR.into(),
        }
    }
}
