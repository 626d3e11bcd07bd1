use crate::classifiers::Classifier;
use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::error::Result;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Counts `train` calls made on it and on every fresh copy.
pub struct TrainSpyHandle(Arc<AtomicU64>);
impl TrainSpyHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Predicts the majority class of its last training set.
pub struct TrainSpyClassifier {
    count: Arc<AtomicU64>,
    num_classes: usize,
    majority: usize,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, TrainSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (
            Self {
                count: counter.clone(),
                num_classes: 2,
                majority: 0,
            },
            TrainSpyHandle(counter),
        )
    }
}

impl Classifier for TrainSpyClassifier {
    fn train(&mut self, dataset: &Dataset) -> Result<()> {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.num_classes = dataset.num_classes()?;
        self.majority = dataset.majority_class()?;
        Ok(())
    }

    fn predict_distribution(&self, _example: &Example) -> Result<Vec<f64>> {
        let mut v = vec![0.0; self.num_classes.max(2)];
        if self.majority < v.len() {
            v[self.majority] = 1.0;
        }
        Ok(v)
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Self {
            count: self.count.clone(),
            num_classes: 2,
            majority: 0,
        })
    }

    fn name(&self) -> &'static str {
        "train-spy"
    }
}
