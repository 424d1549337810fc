mod common;

use std::fs;

use happypred::{
    predict_with, train_with, ArtifactStore, HappinessFeatures, HappyErr, LocalStore,
    MemoryStore,
};

use common::{life_ladder, write_fixture, write_table, COUNTRIES, EPS, HEADERS};

#[test]
fn predicts_a_plausible_happiness_score() {
    let dir = tempfile::tempdir().unwrap();
    let (x, y) = write_fixture(dir.path(), &COUNTRIES, life_ladder);
    let store = MemoryStore::new();

    train_with(&store, &x, &y, "lm").unwrap();

    let features = HappinessFeatures::from([5., 0.5, 50., 0.5, 0.5, 0.5]);
    let score = predict_with(&store, &features, "lm").unwrap();
    assert!((0.0..=10.0).contains(&score), "score {score} out of range");
    assert!((score - 2.95).abs() < EPS);
}

#[test]
fn training_rows_reproduce_their_fitted_values() {
    let dir = tempfile::tempdir().unwrap();
    let (x, y) = write_fixture(dir.path(), &COUNTRIES, life_ladder);
    let store = LocalStore::new(dir.path());

    train_with(&store, &x, &y, "lm").unwrap();

    for row in &COUNTRIES {
        let score = predict_with(&store, &HappinessFeatures::from(*row), "lm").unwrap();
        assert!(score.is_finite());
        assert!((score - life_ladder(row)).abs() < EPS);
    }
}

#[test]
fn recovers_known_coefficients() {
    let dir = tempfile::tempdir().unwrap();
    let rows = [
        [1., 2., 0., 5., 1., 3.],
        [2., 0., 1., 3., 4., 1.],
        [3., 1., 4., 0., 2., 2.],
        [4., 3., 2., 1., 0., 5.],
        [5., 5., 1., 2., 3., 0.],
        [6., 1., 3., 4., 5., 4.],
        [7., 4., 5., 2., 1., 1.],
        [8., 2., 0., 3., 2., 6.],
    ];
    let (x, y) = write_fixture(dir.path(), &rows, |r| r[0]);
    let store = MemoryStore::new();

    train_with(&store, &x, &y, "lm").unwrap();

    let artifact = store.get("lm").unwrap();
    assert_eq!(artifact.feature_names, HEADERS);
    assert_eq!(artifact.n_samples, rows.len());
    assert_eq!(artifact.estimator.num_features(), 6);

    let features = HappinessFeatures::from([3., 0., 0., 0., 0., 0.]);
    let score = predict_with(&store, &features, "lm").unwrap();
    assert!((score - 3.).abs() < EPS);
}

#[test]
fn retraining_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let (x, y) = write_fixture(dir.path(), &COUNTRIES, life_ladder);
    let store = LocalStore::new(dir.path());
    let features = HappinessFeatures::from([9., 0.8, 64., 0.7, 0.1, 0.6]);

    train_with(&store, &x, &y, "lm").unwrap();
    let first = predict_with(&store, &features, "lm").unwrap();
    train_with(&store, &x, &y, "lm").unwrap();
    let second = predict_with(&store, &features, "lm").unwrap();

    assert_eq!(first, second);
}

#[test]
fn unknown_model_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let (x, y) = write_fixture(dir.path(), &COUNTRIES, life_ladder);
    let store = LocalStore::new(dir.path());

    let err = train_with(&store, &x, &y, "xyz").unwrap_err();
    assert!(matches!(err, HappyErr::InvalidModel(_)));
    assert!(err.to_string().contains("the only available model is \"lm\""));

    assert!(!store.path_for("xyz").exists());
    assert!(!store.path_for("lm").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn predicting_before_training_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());
    let features = HappinessFeatures::from([5., 0.5, 50., 0.5, 0.5, 0.5]);

    assert!(matches!(
        predict_with(&store, &features, "lm"),
        Err(HappyErr::ArtifactNotFound(_))
    ));
}

#[test]
fn misaligned_tables_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (x, _) = write_fixture(dir.path(), &COUNTRIES, life_ladder);
    let y = dir.path().join("short.csv");
    write_table(&y, &["Life Ladder"], &[vec![1.], vec![2.]]);
    let store = MemoryStore::new();

    assert!(matches!(
        train_with(&store, &x, &y, "lm"),
        Err(HappyErr::SizeMismatch {
            got: 9,
            expected: 2,
            ..
        })
    ));
    assert!(store.is_empty());
}

#[test]
fn missing_input_table_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();

    let err = train_with(&store, dir.path().join("X.csv"), dir.path().join("y.csv"), "lm")
        .unwrap_err();
    assert!(matches!(err, HappyErr::Io(_)));
}
