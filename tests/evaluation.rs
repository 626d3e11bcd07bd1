use std::io::Write;

use tabula::classifiers::{Classifier, DecisionTree, IBk, NaiveBayes};
use tabula::core::{Dataset, Example};
use tabula::evaluation::{Evaluator, FoldPerformance, Performance, PerformanceReport, RunPerformance};
use tabula::io::{TrainTestSets, parse_dataset};
use tabula::{LearnError, Result};
use tempfile::NamedTempFile;

fn iris_like() -> Dataset {
    let mut text = String::from(
        "@dataset blobs\n@attribute x numeric\n@attribute y numeric\n@attribute class a b c\n@examples\n",
    );
    for i in 0..10 {
        let d = i as f64 * 0.1;
        text.push_str(&format!("{} {} a\n", 0.0 + d, 0.0 + d));
        text.push_str(&format!("{} {} b\n", 5.0 + d, 0.0 + d));
        text.push_str(&format!("{} {} c\n", 0.0 + d, 5.0 + d));
    }
    parse_dataset(&text).unwrap()
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

/// Every training attempt fails.
struct Broken;

impl Classifier for Broken {
    fn train(&mut self, _dataset: &Dataset) -> Result<()> {
        Err(LearnError::InvalidArgument("broken".into()))
    }

    fn predict_distribution(&self, _example: &Example) -> Result<Vec<f64>> {
        Ok(vec![1.0])
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Broken)
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}

#[test]
fn fold_sizes_reconstruct_the_dataset() {
    let ds = iris_like();
    let knn = IBk::with_k(1).unwrap();
    for folds in [2, 3, 5, 10, 30] {
        let perf = Evaluator::new()
            .with_folds(folds)
            .cross_validate(&knn, &ds)
            .unwrap();
        assert_eq!(perf.n(), ds.len(), "folds={folds}");
        assert_eq!(perf.m(), folds);
    }
}

#[test]
fn separable_data_scores_perfectly_for_every_classifier() {
    let ds = iris_like();
    let sets = TrainTestSets::new(ds.clone(), None);
    let mut learners: Vec<Box<dyn Classifier>> = vec![
        Box::new(NaiveBayes::new()),
        Box::new(IBk::new()),
        Box::new(DecisionTree::new().with_pruning(true)),
    ];
    for learner in learners.iter_mut() {
        let perf = Evaluator::new().evaluate(learner.as_mut(), &sets).unwrap();
        assert!(matches!(perf, Performance::CrossValidation(_)));
        assert_eq!(perf.corrects(), ds.len(), "{}", learner.name());
        assert_eq!(perf.stddev().unwrap(), 0.0);
    }
}

#[test]
fn evaluation_is_reproducible_for_a_seed() {
    let ds = iris_like();
    let sets = TrainTestSets::new(ds, None);
    let evaluator = Evaluator::new().with_folds(5).with_seed(123);
    let a = evaluator.evaluate(&mut IBk::with_k(1).unwrap(), &sets).unwrap();
    let b = evaluator.evaluate(&mut IBk::with_k(1).unwrap(), &sets).unwrap();
    assert_eq!(a, b);
}

#[test]
fn failing_fold_fails_the_evaluation() {
    let ds = iris_like();
    let err = Evaluator::new().cross_validate(&Broken, &ds).unwrap_err();
    assert!(matches!(err, LearnError::InvalidArgument(_)));
}

#[test]
fn run_and_fold_modes_measure_different_populations() {
    let mut perfect = RunPerformance::new();
    perfect.add(0, &[1.0, 0.0]);
    let mut half = RunPerformance::new();
    half.add(0, &[1.0, 0.0]);
    half.add(0, &[0.0, 1.0]);
    half.add(1, &[0.0, 1.0]);
    half.add(1, &[1.0, 0.0]);

    let mut folds = FoldPerformance::new();
    folds.add(&perfect);
    folds.add(&half);

    // Pooled counts would give 3/5; fold mode averages 1.0 and 0.5.
    assert_eq!(folds.corrects(), 3);
    assert_eq!(folds.n(), 5);
    assert!((folds.accuracy() - 0.75).abs() < 1e-12);

    // 0/1 outcomes of `half`: two ones in four, sample variance 1/3.
    assert!((half.stddev().unwrap() - (1.0f64 / 3.0).sqrt()).abs() < 1e-12);
    // Fold accuracies 1.0 and 0.5, sample variance 0.125.
    assert!((folds.stddev().unwrap() - 0.125f64.sqrt()).abs() < 1e-12);
}

#[test]
fn holdout_from_files() {
    let train = write_temp(
        "@dataset w\n@attribute o sunny rain\n@attribute p yes no\n@examples\n\
         sunny no\nsunny no\nsunny yes\nrain yes\nrain yes\nrain no\n",
    );
    let test = write_temp(
        "@dataset w-test\n@attribute o sunny rain\n@attribute p yes no\n@examples\n\
         sunny no\nrain yes\nrain no\n",
    );
    let sets = TrainTestSets::from_paths(train.path(), Some(test.path())).unwrap();
    let perf = Evaluator::new()
        .evaluate(&mut DecisionTree::new(), &sets)
        .unwrap();
    assert!(matches!(perf, Performance::Holdout(_)));
    assert_eq!(perf.n(), 3);
    assert_eq!(perf.corrects(), 2);

    let report = PerformanceReport::new("w", "decision-tree", &perf);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["corrects"], 2);
    assert_eq!(json["mode"], "holdout");
}

#[test]
fn written_dataset_reads_back_identically() {
    let ds = iris_like();
    let file = write_temp(&ds.to_string());
    let again = Dataset::load(file.path()).unwrap();
    assert_eq!(again.len(), ds.len());
    assert_eq!(again.name(), ds.name());
    for (a, b) in ds.examples().iter().zip(again.examples()) {
        assert_eq!(a, b);
    }
}
