use crate::classifiers::Classifier;
use crate::core::dataset::{DEFAULT_FOLDS, Dataset};
use crate::error::{LearnError, Result};
use crate::evaluation::performance::{FoldPerformance, Performance, RunPerformance};
use crate::io::TrainTestSets;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

/// Seed of the fold-assignment generator unless configured otherwise.
pub const DEFAULT_SEED: u64 = 2026875034;

/// Runs holdout evaluation when a testing set is present and seeded k-fold
/// cross-validation otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluator {
    folds: usize,
    seed: u64,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            folds: DEFAULT_FOLDS,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_folds(mut self, folds: usize) -> Self {
        self.folds = folds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn evaluate(
        &self,
        classifier: &mut dyn Classifier,
        sets: &TrainTestSets,
    ) -> Result<Performance> {
        let training = sets.training_set();
        match sets.testing_set() {
            Some(testing) => {
                info!(
                    classifier = classifier.name(),
                    train = training.len(),
                    test = testing.len(),
                    "holdout evaluation"
                );
                let run = self.holdout(classifier, training, testing)?;
                info!(accuracy = run.accuracy(), "evaluation finished");
                Ok(Performance::Holdout(run))
            }
            None => {
                info!(
                    classifier = classifier.name(),
                    examples = training.len(),
                    folds = self.folds,
                    seed = self.seed,
                    "cross-validation"
                );
                let folds = self.cross_validate(&*classifier, training)?;
                info!(accuracy = folds.accuracy(), "evaluation finished");
                Ok(Performance::CrossValidation(folds))
            }
        }
    }

    /// Trains `classifier` once on `training` and scores it on `testing`.
    pub fn holdout(
        &self,
        classifier: &mut dyn Classifier,
        training: &Dataset,
        testing: &Dataset,
    ) -> Result<RunPerformance> {
        if training.attributes().len() != testing.attributes().len() {
            return Err(LearnError::InvalidArgument(format!(
                "training set has {} attributes, testing set has {}",
                training.attributes().len(),
                testing.attributes().len()
            )));
        }
        classifier.train(training)?;
        classifier.classify_dataset(testing)
    }

    /// Partitions a copy of `dataset` into folds with a generator seeded from
    /// this evaluator, then trains a fresh copy of `classifier` per fold.
    /// The first failing fold aborts the whole evaluation.
    pub fn cross_validate(
        &self,
        classifier: &dyn Classifier,
        dataset: &Dataset,
    ) -> Result<FoldPerformance> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut partitioned = dataset.clone();
        partitioned.set_folds(self.folds, &mut rng)?;

        let mut aggregate = FoldPerformance::new();
        for fold in 0..self.folds {
            let (train, test) = partitioned.cv_split(fold)?;
            if test.is_empty() {
                warn!(fold, "fold received no examples, skipping");
                continue;
            }
            let mut learner = classifier.fresh();
            learner.train(&train)?;
            let run = learner.classify_dataset(&test)?;
            debug!(
                fold,
                train = train.len(),
                test = test.len(),
                corrects = run.corrects(),
                accuracy = run.accuracy(),
                "fold evaluated"
            );
            aggregate.add(&run);
        }
        Ok(aggregate)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
