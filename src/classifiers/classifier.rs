use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::error::{LearnError, Result};
use crate::evaluation::RunPerformance;
use crate::utils::math::max_index;

/// Batch classifier over a dataset with a nominal class.
pub trait Classifier {
    /// Fits the model to `dataset`, discarding any previous fit.
    fn train(&mut self, dataset: &Dataset) -> Result<()>;

    /// Per-class scores for `example`; the predicted class is the arg-max.
    fn predict_distribution(&self, example: &Example) -> Result<Vec<f64>>;

    /// An untrained classifier with the same configuration.
    fn fresh(&self) -> Box<dyn Classifier>;

    fn name(&self) -> &'static str;

    /// Predicted class, lowest class position on ties.
    fn classify(&self, example: &Example) -> Result<usize> {
        Ok(max_index(&self.predict_distribution(example)?))
    }

    /// Scores every example of `dataset` against its recorded class.
    fn classify_dataset(&self, dataset: &Dataset) -> Result<RunPerformance> {
        let mut performance = RunPerformance::new();
        for example in dataset.examples() {
            let actual = dataset.class_of(example)?;
            let distribution = self.predict_distribution(example)?;
            performance.add(actual, &distribution);
        }
        Ok(performance)
    }
}

pub(crate) fn not_trained(name: &str) -> LearnError {
    LearnError::InvalidArgument(format!("{name} has not been trained"))
}
