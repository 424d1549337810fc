use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

use linfa_linear::LinearError;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, HappyErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum HappyErr {
    /// The model identifier doesn't name a supported algorithm.
    InvalidModel(String),
    /// A malformed command line or configuration value.
    InvalidArgument(String),
    Io(io::Error),
    /// A table couldn't be parsed as numeric CSV.
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    EmptyTable(PathBuf),
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    Fit(LinearError<f64>),
    /// The least squares fallback couldn't solve the system.
    LeastSquares(&'static str),
    Serde(serde_json::Error),
    UnsupportedVersion {
        got: u32,
        expected: u32,
    },
    /// Nothing has been stored under the identifier yet.
    ArtifactNotFound(String),
}

impl Display for HappyErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HappyErr::InvalidModel(got) => {
                write!(f, "unknown model {got:?}, the only available model is \"lm\"")
            }
            HappyErr::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            HappyErr::Io(e) => write!(f, "io error: {e}"),
            HappyErr::Csv { path, source } => {
                write!(f, "failed to read table {}: {source}", path.display())
            }
            HappyErr::EmptyTable(path) => write!(f, "table {} has no rows", path.display()),
            HappyErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            HappyErr::Fit(e) => write!(f, "failed to fit model: {e}"),
            HappyErr::LeastSquares(msg) => write!(f, "least squares fit failed: {msg}"),
            HappyErr::Serde(e) => write!(f, "malformed model artifact: {e}"),
            HappyErr::UnsupportedVersion { got, expected } => write!(
                f,
                "unsupported model artifact version {got}, expected {expected}"
            ),
            HappyErr::ArtifactNotFound(identifier) => {
                write!(f, "no trained model found for {identifier:?}")
            }
        }
    }
}

impl Error for HappyErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HappyErr::Io(e) => Some(e),
            HappyErr::Csv { source, .. } => Some(source),
            HappyErr::Fit(e) => Some(e),
            HappyErr::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HappyErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<LinearError<f64>> for HappyErr {
    fn from(value: LinearError<f64>) -> Self {
        Self::Fit(value)
    }
}

impl From<serde_json::Error> for HappyErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
