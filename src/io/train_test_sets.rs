use crate::core::dataset::Dataset;
use crate::error::Result;
use crate::io::load_dataset;
use std::path::Path;

/// A training set and, for holdout evaluation, a testing set.
#[derive(Clone, Debug)]
pub struct TrainTestSets {
    train: Dataset,
    test: Option<Dataset>,
}

impl TrainTestSets {
    pub fn new(train: Dataset, test: Option<Dataset>) -> Self {
        Self { train, test }
    }

    pub fn from_paths<P: AsRef<Path>>(train: P, test: Option<P>) -> Result<Self> {
        let train = load_dataset(train)?;
        let test = test.map(load_dataset).transpose()?;
        Ok(Self { train, test })
    }

    pub fn training_set(&self) -> &Dataset {
        &self.train
    }

    pub fn testing_set(&self) -> Option<&Dataset> {
        self.test.as_ref()
    }
}
