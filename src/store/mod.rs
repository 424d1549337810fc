mod local;
mod memory;

pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::{error::Result, model::ModelArtifact};

/// The sole channel between a training run and later predictions.
///
/// Implementations decide where artifacts live. Callers only deal with model identifiers.
pub trait ArtifactStore {
    /// Stores `artifact` under `identifier`, replacing any previous one.
    ///
    /// # Returns
    /// A human readable location of the stored artifact.
    fn put(&self, identifier: &str, artifact: &ModelArtifact) -> Result<String>;

    /// Loads the artifact stored under `identifier`.
    ///
    /// # Errors
    /// `HappyErr::ArtifactNotFound` if nothing was stored under `identifier`.
    fn get(&self, identifier: &str) -> Result<ModelArtifact>;
}

impl<S: ArtifactStore + ?Sized> ArtifactStore for Box<S> {
    fn put(&self, identifier: &str, artifact: &ModelArtifact) -> Result<String> {
        (**self).put(identifier, artifact)
    }

    fn get(&self, identifier: &str) -> Result<ModelArtifact> {
        (**self).get(identifier)
    }
}
