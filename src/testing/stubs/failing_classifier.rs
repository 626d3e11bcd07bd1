use crate::classifiers::Classifier;
use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::error::{LearnError, Result};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Fails the `n`-th call to `train`, counted across all fresh copies.
pub struct FailingClassifier {
    calls: Arc<AtomicUsize>,
    fail_on: usize,
    num_classes: usize,
}

impl FailingClassifier {
    pub fn failing_on_call(fail_on: usize) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail_on,
            num_classes: 2,
        }
    }
}

impl Classifier for FailingClassifier {
    fn train(&mut self, dataset: &Dataset) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if call == self.fail_on {
            return Err(LearnError::InvalidArgument(format!(
                "training call {call} failed on purpose"
            )));
        }
        self.num_classes = dataset.num_classes()?;
        Ok(())
    }

    fn predict_distribution(&self, _example: &Example) -> Result<Vec<f64>> {
        let mut v = vec![0.0; self.num_classes.max(1)];
        v[0] = 1.0;
        Ok(v)
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Self {
            calls: Arc::clone(&self.calls),
            fail_on: self.fail_on,
            num_classes: 2,
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
