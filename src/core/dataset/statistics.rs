//! Class statistics and split search used by decision-tree induction.

use crate::core::attributes::Attribute;
use crate::core::dataset::{Dataset, Split, SplitTest};
use crate::error::{LearnError, Result};
use crate::utils::math::{self, GAIN_EPSILON};

/// Best binary cut found on a numeric column.
#[derive(Clone, Copy, Debug)]
struct ThresholdCandidate {
    threshold: f64,
    gain_ratio: f64,
}

impl Dataset {
    /// Histogram of class positions over the examples.
    pub fn class_counts(&self) -> Result<Vec<usize>> {
        let num_classes = self.num_classes()?;
        let mut counts = vec![0usize; num_classes];
        for example in self.examples() {
            let c = self.class_of(example)?;
            let slot = counts.get_mut(c).ok_or(LearnError::IndexOutOfRange {
                index: c,
                len: num_classes,
            })?;
            *slot += 1;
        }
        Ok(counts)
    }

    /// True when at most one class occurs among the examples.
    pub fn is_homogeneous(&self) -> Result<bool> {
        let counts = self.class_counts()?;
        Ok(counts.iter().filter(|&&c| c > 0).count() <= 1)
    }

    /// Most frequent class, lowest class position on ties.
    pub fn majority_class(&self) -> Result<usize> {
        Ok(math::max_count_index(&self.class_counts()?))
    }

    /// Gain ratio of splitting on `attribute`. Numeric attributes are scored
    /// by their best binary threshold.
    pub fn gain_ratio(&self, attribute: usize) -> Result<f64> {
        self.check_predictor(attribute)?;
        if self.is_empty() {
            return Ok(0.0);
        }
        match self.attribute(attribute)? {
            Attribute::Nominal(nominal) => {
                let parent = self.class_counts()?;
                let children = self.nominal_child_counts(attribute, nominal.len())?;
                Ok(math::gain_ratio(&parent, &children))
            }
            Attribute::Numeric(_) => Ok(self
                .best_threshold(attribute)?
                .map_or(0.0, |c| c.gain_ratio)),
        }
    }

    /// Predictor with the highest gain ratio, lowest index on ties. Fails
    /// with `NoValidSplit` when the dataset is empty or no predictor has a
    /// positive gain ratio.
    pub fn best_splitting_attribute(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(LearnError::NoValidSplit);
        }
        let mut best: Option<(usize, f64)> = None;
        for attribute in self.attributes().predictor_indices() {
            let ratio = self.gain_ratio(attribute)?;
            if ratio <= GAIN_EPSILON {
                continue;
            }
            if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
                best = Some((attribute, ratio));
            }
        }
        best.map(|(attribute, _)| attribute)
            .ok_or(LearnError::NoValidSplit)
    }

    /// Partitions the examples on `attribute`: one child per nominal value,
    /// or two children around the best threshold of a numeric attribute.
    /// A numeric column without any cut point yields no children.
    pub fn split_on(&self, attribute: usize) -> Result<Split> {
        self.check_predictor(attribute)?;
        let test = match self.attribute(attribute)? {
            Attribute::Nominal(nominal) => SplitTest::Multiway {
                attribute,
                arity: nominal.len(),
            },
            Attribute::Numeric(_) => match self.best_threshold(attribute)? {
                Some(candidate) => SplitTest::Threshold {
                    attribute,
                    threshold: candidate.threshold,
                },
                None => {
                    return Ok(Split {
                        test: SplitTest::Threshold {
                            attribute,
                            threshold: f64::NAN,
                        },
                        children: Vec::new(),
                    });
                }
            },
        };

        let mut children: Vec<Dataset> =
            (0..test.max_branches()).map(|_| self.empty_like()).collect();
        for example in self.examples() {
            let branch = test.branch_for(example).ok_or_else(|| {
                LearnError::InvalidArgument(format!(
                    "value at column {attribute} has no branch in its split"
                ))
            })?;
            children[branch].push_unchecked(example.clone());
        }
        Ok(Split { test, children })
    }

    fn check_predictor(&self, attribute: usize) -> Result<()> {
        if attribute >= self.num_attributes() {
            return Err(LearnError::IndexOutOfRange {
                index: attribute,
                len: self.num_attributes(),
            });
        }
        if attribute == self.class_index() {
            return Err(LearnError::InvalidArgument(
                "cannot split on the class attribute".into(),
            ));
        }
        Ok(())
    }

    fn nominal_child_counts(&self, attribute: usize, arity: usize) -> Result<Vec<Vec<usize>>> {
        let num_classes = self.num_classes()?;
        let mut children = vec![vec![0usize; num_classes]; arity];
        for example in self.examples() {
            let value = example.label(attribute)?;
            let class = self.class_of(example)?;
            if value >= arity {
                return Err(LearnError::IndexOutOfRange {
                    index: value,
                    len: arity,
                });
            }
            if class >= num_classes {
                return Err(LearnError::IndexOutOfRange {
                    index: class,
                    len: num_classes,
                });
            }
            children[value][class] += 1;
        }
        Ok(children)
    }

    /// Scans midpoints between consecutive distinct values and keeps the
    /// one with the highest gain ratio (lowest threshold on ties).
    fn best_threshold(&self, attribute: usize) -> Result<Option<ThresholdCandidate>> {
        let num_classes = self.num_classes()?;
        let mut pairs = Vec::with_capacity(self.len());
        for example in self.examples() {
            let value = example.value(attribute)?;
            let class = self.class_of(example)?;
            if class >= num_classes {
                return Err(LearnError::IndexOutOfRange {
                    index: class,
                    len: num_classes,
                });
            }
            pairs.push((value, class));
        }
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let parent = self.class_counts()?;
        let mut left = vec![0usize; num_classes];
        let mut best: Option<ThresholdCandidate> = None;

        for i in 0..pairs.len().saturating_sub(1) {
            let (value, class) = pairs[i];
            left[class] += 1;
            let next = pairs[i + 1].0;
            if next <= value {
                continue;
            }
            let right: Vec<usize> = parent.iter().zip(&left).map(|(p, l)| p - l).collect();
            let ratio = math::gain_ratio(&parent, &[left.clone(), right]);
            if best.is_none_or(|b| ratio > b.gain_ratio) {
                best = Some(ThresholdCandidate {
                    threshold: value + (next - value) / 2.0,
                    gain_ratio: ratio,
                });
            }
        }
        Ok(best)
    }
}
