//! World-happiness style fixtures shared by the integration tests.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

pub const EPS: f64 = 1e-6;

pub const HEADERS: [&str; 6] = [
    "Log GDP per capita",
    "Social support",
    "Healthy life expectancy at birth",
    "Freedom to make life choices",
    "Generosity",
    "Perceptions of corruption",
];

pub const COUNTRIES: [[f64; 6]; 9] = [
    [9.5, 0.80, 65.0, 0.70, 0.10, 0.75],
    [10.2, 0.90, 70.5, 0.85, -0.05, 0.40],
    [7.8, 0.60, 55.2, 0.55, 0.20, 0.85],
    [8.9, 0.75, 62.0, 0.60, 0.05, 0.80],
    [11.0, 0.95, 73.0, 0.90, 0.15, 0.30],
    [7.2, 0.55, 50.5, 0.65, -0.10, 0.70],
    [9.9, 0.85, 68.3, 0.75, 0.00, 0.65],
    [8.4, 0.70, 58.8, 0.80, 0.25, 0.90],
    [10.6, 0.88, 71.2, 0.72, -0.15, 0.55],
];

pub fn life_ladder(row: &[f64; 6]) -> f64 {
    let [log_gdp, social, life_exp, freedom, generosity, corruption] = *row;
    0.3 * log_gdp + 2.0 * social + 0.03 * life_exp + 1.2 * freedom + 0.5 * generosity
        - 0.8 * corruption
        - 1.5
}

pub fn write_table(path: &Path, headers: &[&str], rows: &[Vec<f64>]) {
    let mut csv = headers.join(",");
    csv.push('\n');
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }
    fs::write(path, csv).unwrap();
}

/// Writes a feature and a label table to `dir`.
pub fn write_fixture(
    dir: &Path,
    rows: &[[f64; 6]],
    label: impl Fn(&[f64; 6]) -> f64,
) -> (PathBuf, PathBuf) {
    let x_path = dir.join("X_train.csv");
    let y_path = dir.join("y_train.csv");

    let features: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
    let labels: Vec<Vec<f64>> = rows.iter().map(|r| vec![label(r)]).collect();
    write_table(&x_path, &HEADERS, &features);
    write_table(&y_path, &["Life Ladder"], &labels);

    (x_path, y_path)
}
