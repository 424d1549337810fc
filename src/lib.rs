//! Fit an ordinary least squares model on tabular happiness data and predict
//! "Life Ladder" scores from it later.
//!
//! Training and prediction never share memory, a trained model is handed over through
//! an [`ArtifactStore`].

pub mod config;
pub mod data;
pub mod error;
pub mod model;
mod predictor;
pub mod store;
mod trainer;

pub use config::StoreConfig;
pub use error::{HappyErr, Result};
pub use model::{Algorithm, DEFAULT_MODEL};
pub use predictor::{predict, predict_with, HappinessFeatures};
pub use store::{ArtifactStore, LocalStore, MemoryStore};
pub use trainer::{train, train_with};
