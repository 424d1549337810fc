use std::{fmt, str::FromStr};

use linfa::{metrics::SingleTargetRegression, prelude::*, DatasetBase};
use linfa_linear::{LinearError, LinearRegression};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{HappyErr, Result};

/// The version of the on-disk artifact format written by this crate.
pub const ARTIFACT_VERSION: u32 = 1;

/// The identifier used when none is given.
pub const DEFAULT_MODEL: &str = "lm";

/// The supported fitting algorithms, keyed by their model identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Ordinary least squares linear regression with an intercept.
    Linear,
}

impl Algorithm {
    /// Returns the identifier this algorithm is stored under.
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::Linear => DEFAULT_MODEL,
        }
    }

    /// Fits the algorithm against the full training data.
    ///
    /// # Arguments
    /// * `records` - The feature matrix, one row per sample.
    /// * `targets` - The label vector, row aligned with `records`.
    ///
    /// # Returns
    /// The fitted estimator or an error if the shapes disagree or the fit fails.
    pub fn fit(&self, records: Array2<f64>, targets: Array1<f64>) -> Result<Estimator> {
        if records.nrows() != targets.len() {
            return Err(HappyErr::SizeMismatch {
                a: "feature rows",
                b: "label rows",
                got: records.nrows(),
                expected: targets.len(),
            });
        }

        match self {
            Algorithm::Linear => {
                let dataset = DatasetBase::new(records, targets);
                let model = match LinearRegression::new().fit(&dataset) {
                    Ok(fitted) => LinearModel {
                        coefficients: fitted.params().to_vec(),
                        intercept: fitted.intercept(),
                    },
                    Err(LinearError::LinalgError(e)) => {
                        log::warn!("features are rank deficient ({e}), using a minimum norm fit");
                        LinearModel::least_squares(dataset.records(), dataset.targets())?
                    }
                    Err(e) => return Err(e.into()),
                };

                let fitted_values = model.predict_rows(dataset.records());
                let training_r2 = training_r2(&fitted_values, dataset.targets());

                Ok(Estimator::Linear { model, training_r2 })
            }
        }
    }
}

/// R² of `fitted` against `targets`, undefined when the targets have no variance.
fn training_r2(fitted: &Array1<f64>, targets: &Array1<f64>) -> Option<f64> {
    let constant = match targets.first() {
        Some(&first) => targets.iter().all(|&y| y == first),
        None => true,
    };

    let r2 = (!constant)
        .then(|| fitted.r2(targets).ok())
        .flatten()
        .filter(|r2| r2.is_finite());
    if r2.is_none() {
        log::warn!("the training r2 is undefined for these labels");
    }

    r2
}

impl FromStr for Algorithm {
    type Err = HappyErr;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            DEFAULT_MODEL => Ok(Algorithm::Linear),
            other => Err(HappyErr::InvalidModel(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Learned coefficients and intercept of a linear model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Evaluates the model on a single feature row.
    ///
    /// # Returns
    /// The prediction, or a `SizeMismatch` if `row` doesn't have one value per coefficient.
    pub fn predict(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(HappyErr::SizeMismatch {
                a: "feature vector",
                b: "model coefficients",
                got: row.len(),
                expected: self.coefficients.len(),
            });
        }

        let dot: f64 = self.coefficients.iter().zip(row).map(|(w, x)| w * x).sum();
        Ok(self.intercept + dot)
    }

    /// Evaluates the model on every row of `records`, which must have one column per
    /// coefficient.
    fn predict_rows(&self, records: &Array2<f64>) -> Array1<f64> {
        records.dot(&ArrayView1::from(self.coefficients.as_slice())) + self.intercept
    }

    /// Fits the minimum norm least squares solution through an SVD of the centered
    /// records.
    ///
    /// Unlike the normal equations this also solves rank deficient problems, such as
    /// tables with duplicated or linearly dependent columns.
    fn least_squares(records: &Array2<f64>, targets: &Array1<f64>) -> Result<Self> {
        let (Some(x_mean), Some(y_mean)) = (records.mean_axis(Axis(0)), targets.mean()) else {
            return Err(HappyErr::LeastSquares("no samples to fit"));
        };

        let centered = records - &x_mean;
        let (nrows, ncols) = centered.dim();
        let x = DMatrix::from_fn(nrows, ncols, |i, j| centered[[i, j]]);
        let y = DVector::from_iterator(nrows, targets.iter().map(|t| t - y_mean));

        let svd = x.svd(true, true);
        let tol = svd.singular_values.max() * nrows.max(ncols) as f64 * f64::EPSILON;
        let solution = svd.solve(&y, tol).map_err(HappyErr::LeastSquares)?;

        let coefficients: Vec<f64> = solution.iter().copied().collect();
        let intercept = y_mean - x_mean.dot(&ArrayView1::from(coefficients.as_slice()));

        Ok(Self {
            coefficients,
            intercept,
        })
    }
}

/// A fitted estimator, tagged by the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Estimator {
    Linear {
        #[serde(flatten)]
        model: LinearModel,
        training_r2: Option<f64>,
    },
}

impl Estimator {
    /// The amount of features the estimator expects per row.
    pub fn num_features(&self) -> usize {
        match self {
            Estimator::Linear { model, .. } => model.coefficients.len(),
        }
    }

    pub fn predict(&self, row: &[f64]) -> Result<f64> {
        match self {
            Estimator::Linear { model, .. } => model.predict(row),
        }
    }

    /// The coefficient of determination over the training data, if it could be computed.
    pub fn training_r2(&self) -> Option<f64> {
        match self {
            Estimator::Linear { training_r2, .. } => *training_r2,
        }
    }
}

/// The persisted form of a trained model.
///
/// This is the only thing shared between a training run and later predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: u32,
    pub feature_names: Vec<String>,
    pub n_samples: usize,
    pub estimator: Estimator,
}

impl ModelArtifact {
    pub fn new(feature_names: Vec<String>, n_samples: usize, estimator: Estimator) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            feature_names,
            n_samples,
            estimator,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses an artifact, rejecting formats written by another version.
    pub fn from_json(s: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(s)?;
        if artifact.version != ARTIFACT_VERSION {
            return Err(HappyErr::UnsupportedVersion {
                got: artifact.version,
                expected: ARTIFACT_VERSION,
            });
        }

        Ok(artifact)
    }
}
