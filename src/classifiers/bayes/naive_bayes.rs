use crate::classifiers::classifier::{Classifier, not_trained};
use crate::core::attribute_set::AttributeSetRef;
use crate::core::attributes::Attribute;
use crate::core::dataset::Dataset;
use crate::core::estimators::{
    CategoricalEstimator, DEFAULT_SMOOTHING, Estimator, GaussianEstimator,
};
use crate::core::instances::Example;
use crate::error::{LearnError, Result};
use std::sync::Arc;
use tracing::debug;

/// Naive Bayes with a Gaussian estimator per numeric attribute and a
/// smoothed categorical estimator per nominal attribute, for every class.
pub struct NaiveBayes {
    smoothing: f64,
    model: Option<NaiveBayesModel>,
}

struct NaiveBayesModel {
    attributes: AttributeSetRef,
    class_distribution: CategoricalEstimator,
    /// `[class][attribute]`; `None` at the class column.
    conditionals: Vec<Vec<Option<Box<dyn Estimator>>>>,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            model: None,
        }
    }

    pub fn with_smoothing(smoothing: f64) -> Result<Self> {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(LearnError::InvalidArgument(format!(
                "smoothing constant must be positive, got {smoothing}"
            )));
        }
        Ok(Self {
            smoothing,
            model: None,
        })
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    #[inline]
    fn new_estimator(&self, attribute: &Attribute) -> Result<Box<dyn Estimator>> {
        Ok(match attribute {
            Attribute::Numeric(_) => Box::new(GaussianEstimator::new()),
            Attribute::Nominal(nominal) => Box::new(CategoricalEstimator::with_smoothing(
                nominal.len(),
                self.smoothing,
            )?),
        })
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for NaiveBayes {
    fn train(&mut self, dataset: &Dataset) -> Result<()> {
        let attributes = Arc::clone(dataset.attributes());
        let num_classes = attributes.num_classes()?;
        let class_index = attributes.class_index();

        let mut class_distribution =
            CategoricalEstimator::with_smoothing(num_classes, self.smoothing)?;
        let mut conditionals = Vec::with_capacity(num_classes);
        for _ in 0..num_classes {
            let mut row: Vec<Option<Box<dyn Estimator>>> = Vec::with_capacity(attributes.len());
            for (j, attribute) in attributes.iter().enumerate() {
                row.push(if j == class_index {
                    None
                } else {
                    Some(self.new_estimator(attribute)?)
                });
            }
            conditionals.push(row);
        }

        for example in dataset.examples() {
            let class = dataset.class_of(example)?;
            class_distribution.add(class as f64)?;
            for (j, slot) in conditionals[class].iter_mut().enumerate() {
                if let Some(estimator) = slot {
                    estimator.add(example.value(j)?)?;
                }
            }
        }

        debug!(
            examples = dataset.len(),
            classes = num_classes,
            "naive bayes trained"
        );
        self.model = Some(NaiveBayesModel {
            attributes,
            class_distribution,
            conditionals,
        });
        Ok(())
    }

    /// `prior(c) * prod_j p(x_j | c)` over the predictor columns. A class
    /// never seen during training scores 0.
    fn predict_distribution(&self, example: &Example) -> Result<Vec<f64>> {
        let model = self.model.as_ref().ok_or_else(|| not_trained(self.name()))?;
        if example.len() != model.attributes.len() {
            return Err(LearnError::InvalidArgument(format!(
                "example has {} values, model expects {}",
                example.len(),
                model.attributes.len()
            )));
        }

        let mut scores = vec![0.0; model.conditionals.len()];
        for (class, row) in model.conditionals.iter().enumerate() {
            if model.class_distribution.count(class) == 0 {
                continue;
            }
            let mut score = model.class_distribution.probability(class as f64)?;
            for (j, slot) in row.iter().enumerate() {
                if let Some(estimator) = slot {
                    score *= estimator.probability(example.value(j)?)?;
                }
            }
            scores[class] = score;
        }
        Ok(scores)
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Self {
            smoothing: self.smoothing,
            model: None,
        })
    }

    fn name(&self) -> &'static str {
        "naive-bayes"
    }
}
