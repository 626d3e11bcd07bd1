use super::neighbors::NearestNeighbors;
use crate::classifiers::classifier::{Classifier, not_trained};
use crate::core::attributes::Attribute;
use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::core::scaler::Scaler;
use crate::error::{LearnError, Result};
use tracing::debug;

pub const DEFAULT_K: usize = 3;

/// k-nearest-neighbors over the stored training set.
pub struct IBk {
    k: usize,
    model: Option<IBkModel>,
}

struct IBkModel {
    scaler: Option<Scaler>,
    training: Dataset,
}

impl IBk {
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            model: None,
        }
    }

    pub fn with_k(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(LearnError::InvalidArgument(
                "k must be at least 1".to_string(),
            ));
        }
        Ok(Self { k, model: None })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Euclidean distance over the non-class columns; a nominal mismatch
    /// counts as 1.
    pub fn distance(dataset: &Dataset, a: &Example, b: &Example) -> Result<f64> {
        let class_index = dataset.class_index();
        let mut sum = 0.0;
        for (j, attribute) in dataset.attributes().iter().enumerate() {
            if j == class_index {
                continue;
            }
            let (x, y) = (a.value(j)?, b.value(j)?);
            sum += match attribute {
                Attribute::Numeric(_) => (x - y) * (x - y),
                Attribute::Nominal(_) => {
                    if x != y {
                        1.0
                    } else {
                        0.0
                    }
                }
            };
        }
        Ok(sum.sqrt())
    }
}

impl Default for IBk {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for IBk {
    fn train(&mut self, dataset: &Dataset) -> Result<()> {
        dataset.num_classes()?;
        let (scaler, training) = if dataset.has_numeric_attributes() {
            let mut scaler = Scaler::new();
            scaler.configure(dataset)?;
            let scaled = scaler.scale_dataset(dataset)?;
            (Some(scaler), scaled)
        } else {
            (None, dataset.clone())
        };
        debug!(k = self.k, stored = training.len(), scaled = scaler.is_some(), "ibk trained");
        self.model = Some(IBkModel { scaler, training });
        Ok(())
    }

    fn predict_distribution(&self, example: &Example) -> Result<Vec<f64>> {
        let model = self.model.as_ref().ok_or_else(|| not_trained(self.name()))?;
        let training = &model.training;
        if example.len() != training.num_attributes() {
            return Err(LearnError::InvalidArgument(format!(
                "example has {} values, model expects {}",
                example.len(),
                training.num_attributes()
            )));
        }

        let scaled;
        let query = match &model.scaler {
            Some(scaler) => {
                scaled = scaler.scale(example)?;
                &scaled
            }
            None => example,
        };

        let mut neighbors = NearestNeighbors::new(self.k);
        for stored in training.examples() {
            let distance = Self::distance(training, query, stored)?;
            neighbors.offer(distance, training.class_of(stored)?);
        }
        Ok(neighbors.votes(training.num_classes()?))
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Self {
            k: self.k,
            model: None,
        })
    }

    fn name(&self) -> &'static str {
        "ibk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attribute_set::AttributeSet;
    use crate::testing::dummies::datasets::{sunny_query, weather_nominal};

    fn numeric_dataset() -> Dataset {
        let attrs = AttributeSet::with_attributes(vec![
            Attribute::numeric("x"),
            Attribute::numeric("y"),
            Attribute::nominal("class", ["a", "b"]),
        ]);
        let rows = vec![
            Example::new(vec![0.0, 0.0, 0.0]),
            Example::new(vec![1.0, 10.0, 0.0]),
            Example::new(vec![0.5, 5.0, 0.0]),
            Example::new(vec![9.0, 90.0, 1.0]),
            Example::new(vec![10.0, 100.0, 1.0]),
        ];
        Dataset::from_parts("num", attrs, rows).unwrap()
    }

    #[test]
    fn rejects_zero_k() {
        assert!(matches!(IBk::with_k(0), Err(LearnError::InvalidArgument(_))));
        assert_eq!(IBk::new().k(), DEFAULT_K);
    }

    #[test]
    fn untrained_model_fails() {
        assert!(IBk::new().predict_distribution(&sunny_query()).is_err());
    }

    #[test]
    fn one_neighbor_returns_duplicate_class() {
        let ds = numeric_dataset();
        let mut knn = IBk::with_k(1).unwrap();
        knn.train(&ds).unwrap();
        for example in ds.examples() {
            let expected = ds.class_of(example).unwrap();
            assert_eq!(knn.classify(example).unwrap(), expected);
        }
    }

    #[test]
    fn votes_form_histogram_of_k_neighbors() {
        let ds = numeric_dataset();
        let mut knn = IBk::new();
        knn.train(&ds).unwrap();
        let votes = knn
            .predict_distribution(&Example::new(vec![0.2, 2.0, 0.0]))
            .unwrap();
        assert_eq!(votes, vec![3.0, 0.0]);
        let votes = knn
            .predict_distribution(&Example::new(vec![9.5, 95.0, 0.0]))
            .unwrap();
        assert_eq!(votes.iter().sum::<f64>(), 3.0);
        assert_eq!(knn.classify(&Example::new(vec![9.5, 95.0, 0.0])).unwrap(), 1);
    }

    #[test]
    fn fewer_examples_than_k_vote_with_what_exists() {
        let attrs = AttributeSet::with_attributes(vec![
            Attribute::numeric("x"),
            Attribute::nominal("class", ["a", "b"]),
        ]);
        let rows = vec![Example::new(vec![1.0, 1.0]), Example::new(vec![2.0, 1.0])];
        let ds = Dataset::from_parts("small", attrs, rows).unwrap();
        let mut knn = IBk::with_k(5).unwrap();
        knn.train(&ds).unwrap();
        let votes = knn.predict_distribution(&Example::new(vec![0.0, 0.0])).unwrap();
        assert_eq!(votes, vec![0.0, 2.0]);
    }

    #[test]
    fn nominal_distance_counts_mismatches() {
        let ds = weather_nominal();
        let a = Example::new(vec![0.0, 0.0]);
        let b = Example::new(vec![1.0, 1.0]);
        assert_eq!(IBk::distance(&ds, &a, &b).unwrap(), 1.0);
        assert_eq!(IBk::distance(&ds, &a, &a).unwrap(), 0.0);
    }

    #[test]
    fn equidistant_candidates_keep_first_seen() {
        // Every stored example has the same outlook as the query, so all
        // distances are zero and the first k rows win.
        let attrs = AttributeSet::with_attributes(vec![
            Attribute::nominal("o", ["s"]),
            Attribute::nominal("class", ["a", "b"]),
        ]);
        let rows = vec![
            Example::new(vec![0.0, 1.0]),
            Example::new(vec![0.0, 0.0]),
            Example::new(vec![0.0, 0.0]),
        ];
        let ds = Dataset::from_parts("tie", attrs, rows).unwrap();
        let mut knn = IBk::with_k(1).unwrap();
        knn.train(&ds).unwrap();
        assert_eq!(knn.classify(&Example::new(vec![0.0, 0.0])).unwrap(), 1);
    }
}
