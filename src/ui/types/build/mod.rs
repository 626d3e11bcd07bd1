use crate::classifiers::{Classifier, DecisionTree, IBk, NaiveBayes};
use crate::error::Result;
use crate::evaluation::Evaluator;
use crate::ui::types::choices::{ClassifierChoice, EvaluationConfig};

pub fn build_classifier(choice: &ClassifierChoice) -> Result<Box<dyn Classifier>> {
    Ok(match choice {
        ClassifierChoice::NaiveBayes(p) => Box::new(NaiveBayes::with_smoothing(p.smoothing)?),
        ClassifierChoice::IBk(p) => Box::new(IBk::with_k(p.k)?),
        ClassifierChoice::DecisionTree(p) => Box::new(DecisionTree::new().with_pruning(p.prune)),
    })
}

pub fn build_evaluator(config: &EvaluationConfig) -> Evaluator {
    Evaluator::new()
        .with_folds(config.folds)
        .with_seed(config.seed)
}
