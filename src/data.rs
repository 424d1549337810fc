use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Trim};
use ndarray::{Array1, Array2};

use crate::error::{HappyErr, Result};

/// A numeric CSV table loaded fully into memory.
///
/// Column order is kept exactly as it appears in the file, it defines the feature
/// order of any model fitted on the table.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    values: Array2<f64>,
}

impl Table {
    /// Reads a comma-delimited table with a header row.
    ///
    /// # Arguments
    /// * `path` - The path to the CSV file.
    ///
    /// # Returns
    /// The parsed table or an error if the file is missing, malformed, non-numeric or empty.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let csv_err = |source| HappyErr::Csv {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(String::from)
            .collect();
        let ncols = headers.len();

        let mut data = Vec::new();
        for row in reader.deserialize::<Vec<f64>>() {
            data.extend(row.map_err(csv_err)?);
        }

        let nrows = data.len() / ncols.max(1);
        if nrows == 0 {
            return Err(HappyErr::EmptyTable(PathBuf::from(path)));
        }

        let values = Array2::from_shape_vec((nrows, ncols), data).map_err(|_| {
            HappyErr::SizeMismatch {
                a: "table cells",
                b: "header columns",
                got: nrows,
                expected: ncols,
            }
        })?;

        log::debug!(
            "read {} with {} row(s) and {} column(s)",
            path.display(),
            values.nrows(),
            values.ncols()
        );

        Ok(Self { headers, values })
    }

    #[cfg(test)]
    fn new(headers: Vec<String>, values: Array2<f64>) -> Self {
        Self { headers, values }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn into_parts(self) -> (Vec<String>, Array2<f64>) {
        (self.headers, self.values)
    }

    /// Consumes a single-column table and returns it as a label vector.
    pub fn into_labels(self) -> Result<Array1<f64>> {
        if self.ncols() != 1 {
            return Err(HappyErr::SizeMismatch {
                a: "label table",
                b: "label vector",
                got: self.ncols(),
                expected: 1,
            });
        }

        Ok(self.values.column(0).to_owned())
    }
}
