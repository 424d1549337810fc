use std::path::{Path, PathBuf};

use crate::{
    data::Table,
    error::Result,
    model::{Algorithm, ModelArtifact},
    store::{ArtifactStore, LocalStore},
};

/// Fits a model on the given CSV tables and stores it in `store` under `model`.
///
/// # Arguments
/// * `store` - Where the fitted model is kept.
/// * `features_csv` - The feature matrix, one numeric column per feature.
/// * `labels_csv` - The label vector as a single numeric column.
/// * `model` - The model identifier, only `"lm"` is supported.
///
/// # Returns
/// The location of the stored artifact.
///
/// # Errors
/// `HappyErr::InvalidModel` before touching any file if `model` is unknown, otherwise
/// whatever reading, fitting or storing fails with.
pub fn train_with<S: ArtifactStore + ?Sized>(
    store: &S,
    features_csv: impl AsRef<Path>,
    labels_csv: impl AsRef<Path>,
    model: &str,
) -> Result<String> {
    let algorithm: Algorithm = model.parse()?;

    let features = Table::read(features_csv)?;
    let labels = Table::read(labels_csv)?;
    let n_samples = features.nrows();

    log::info!(
        "fitting {algorithm} on {n_samples} sample(s) of {} feature(s)",
        features.ncols()
    );
    let (feature_names, records) = features.into_parts();
    let estimator = algorithm.fit(records, labels.into_labels()?)?;
    if let Some(r2) = estimator.training_r2() {
        log::info!("training r2: {r2:.4}");
    }

    let artifact = ModelArtifact::new(feature_names, n_samples, estimator);
    let location = store.put(algorithm.identifier(), &artifact)?;
    log::info!("saved model to {location}");

    Ok(location)
}

/// Fits a model and saves it as `<model>_model.json` in the working directory.
///
/// # Returns
/// The path of the written artifact.
pub fn train(
    features_csv: impl AsRef<Path>,
    labels_csv: impl AsRef<Path>,
    model: &str,
) -> Result<PathBuf> {
    let store = LocalStore::cwd();
    train_with(&store, features_csv, labels_csv, model)?;
    Ok(store.path_for(model))
}
