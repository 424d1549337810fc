use crate::{
    error::Result,
    store::{ArtifactStore, LocalStore},
};

/// The inputs of a happiness prediction, in the order the model was trained on.
///
/// The model only sees positions, the caller must keep this order in sync with the
/// columns of the feature table used for training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HappinessFeatures {
    /// Log GDP per capita.
    pub log_gdp: f64,
    pub social_support: f64,
    /// Healthy life expectancy at birth.
    pub life_expectancy: f64,
    /// Freedom to make life choices.
    pub freedom: f64,
    pub generosity: f64,
    /// Perceptions of corruption.
    pub corruption: f64,
}

impl HappinessFeatures {
    pub fn to_row(&self) -> [f64; 6] {
        [
            self.log_gdp,
            self.social_support,
            self.life_expectancy,
            self.freedom,
            self.generosity,
            self.corruption,
        ]
    }
}

impl From<[f64; 6]> for HappinessFeatures {
    fn from(row: [f64; 6]) -> Self {
        let [log_gdp, social_support, life_expectancy, freedom, generosity, corruption] = row;
        Self {
            log_gdp,
            social_support,
            life_expectancy,
            freedom,
            generosity,
            corruption,
        }
    }
}

/// Predicts a happiness score with the model stored in `store` under `model`.
///
/// # Returns
/// The unclamped "Life Ladder" score.
///
/// # Errors
/// `HappyErr::ArtifactNotFound` if no model was trained under `model`, and
/// `HappyErr::SizeMismatch` if it wasn't trained on six features.
pub fn predict_with<S: ArtifactStore + ?Sized>(
    store: &S,
    features: &HappinessFeatures,
    model: &str,
) -> Result<f64> {
    let artifact = store.get(model)?;
    let score = artifact.estimator.predict(&features.to_row())?;
    log::debug!("{model} predicted {score} for {features:?}");
    Ok(score)
}

/// Predicts a happiness score with the `<model>_model.json` artifact in the working
/// directory.
pub fn predict(
    log_gdp: f64,
    social_support: f64,
    life_expectancy: f64,
    freedom: f64,
    generosity: f64,
    corruption: f64,
    model: &str,
) -> Result<f64> {
    let features = HappinessFeatures {
        log_gdp,
        social_support,
        life_expectancy,
        freedom,
        generosity,
        corruption,
    };
    predict_with(&LocalStore::cwd(), &features, model)
}
