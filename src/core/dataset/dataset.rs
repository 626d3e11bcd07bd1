use crate::core::attribute_set::{AttributeSet, AttributeSetRef};
use crate::core::attributes::Attribute;
use crate::core::instances::{Example, ExampleSet};
use crate::error::{LearnError, Result};
use rand::Rng;
use std::sync::Arc;

pub const DEFAULT_FOLDS: usize = 10;

/// A named attribute set paired with its examples, plus the fold assignment
/// used by cross-validation.
#[derive(Clone, Debug)]
pub struct Dataset {
    name: String,
    attributes: AttributeSetRef,
    examples: ExampleSet,
    folds: usize,
    partitions: Option<Vec<usize>>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, attributes: AttributeSetRef) -> Dataset {
        Dataset {
            name: name.into(),
            attributes,
            examples: ExampleSet::new(),
            folds: DEFAULT_FOLDS,
            partitions: None,
        }
    }

    pub fn from_parts(
        name: impl Into<String>,
        attributes: AttributeSet,
        examples: Vec<Example>,
    ) -> Result<Dataset> {
        let mut dataset = Dataset::new(name, Arc::new(attributes));
        for example in examples {
            dataset.add(example)?;
        }
        Ok(dataset)
    }

    /// Empty dataset sharing this one's name and attribute set.
    pub fn empty_like(&self) -> Dataset {
        Dataset::new(self.name.clone(), Arc::clone(&self.attributes))
    }

    pub fn add(&mut self, example: Example) -> Result<()> {
        if example.len() != self.attributes.len() {
            return Err(LearnError::InvalidArgument(format!(
                "example has {} values but the dataset has {} attributes",
                example.len(),
                self.attributes.len()
            )));
        }
        for (index, attribute) in self.attributes.iter().enumerate() {
            if let Some(nominal) = attribute.as_nominal() {
                let value = example.label(index)?;
                if value >= nominal.len() {
                    return Err(LearnError::IndexOutOfRange {
                        index: value,
                        len: nominal.len(),
                    });
                }
            }
        }
        self.examples.push(example);
        Ok(())
    }

    pub(crate) fn push_unchecked(&mut self, example: Example) {
        self.examples.push(example);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &AttributeSetRef {
        &self.attributes
    }

    pub fn examples(&self) -> &ExampleSet {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn class_index(&self) -> usize {
        self.attributes.class_index()
    }

    pub fn attribute(&self, index: usize) -> Result<&Attribute> {
        self.attributes.attribute(index)
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn num_classes(&self) -> Result<usize> {
        self.attributes.num_classes()
    }

    pub fn has_numeric_attributes(&self) -> bool {
        self.attributes.has_numeric_attributes()
    }

    /// Class position of `example` under this dataset's attribute set.
    pub fn class_of(&self, example: &Example) -> Result<usize> {
        example.label(self.attributes.class_index())
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    pub fn partitions(&self) -> Option<&[usize]> {
        self.partitions.as_deref()
    }

    /// Assigns every example a fold in `[0, folds)` at random, no fold
    /// receiving more than `ceil(n / folds)` examples. Replaces any previous
    /// assignment.
    pub fn set_folds<R: Rng + ?Sized>(&mut self, folds: usize, rng: &mut R) -> Result<()> {
        let n = self.examples.len();
        if folds == 0 {
            return Err(LearnError::InvalidArgument(
                "fold count must be at least 1".into(),
            ));
        }
        if folds > n {
            return Err(LearnError::InvalidArgument(format!(
                "fold count {folds} exceeds the number of examples ({n})"
            )));
        }

        let capacity = n.div_ceil(folds);
        let mut filled = vec![0usize; folds];
        let mut available: Vec<usize> = (0..folds).collect();
        let mut partitions = Vec::with_capacity(n);

        for _ in 0..n {
            let slot = rng.random_range(0..available.len());
            let fold = available[slot];
            partitions.push(fold);
            filled[fold] += 1;
            if filled[fold] >= capacity {
                available.remove(slot);
            }
        }

        self.folds = folds;
        self.partitions = Some(partitions);
        Ok(())
    }

    /// Splits on the current fold assignment: `test` holds the examples of
    /// fold `p`, `train` holds the rest. Both share this attribute set.
    pub fn cv_split(&self, p: usize) -> Result<(Dataset, Dataset)> {
        let partitions = self.partitions.as_ref().ok_or_else(|| {
            LearnError::InvalidArgument("no fold assignment; call set_folds first".into())
        })?;
        if p >= self.folds {
            return Err(LearnError::InvalidArgument(format!(
                "partition {p} is out of range for {} folds",
                self.folds
            )));
        }

        let mut train = self.empty_like();
        let mut test = self.empty_like();
        for (example, &fold) in self.examples.iter().zip(partitions) {
            if fold == p {
                test.push_unchecked(example.clone());
            } else {
                train.push_unchecked(example.clone());
            }
        }
        Ok((train, test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::datasets::weather_nominal;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn add_rejects_wrong_arity() {
        let mut ds = weather_nominal();
        let err = ds.add(Example::new(vec![0.0])).unwrap_err();
        assert!(matches!(err, LearnError::InvalidArgument(_)));
    }

    #[test]
    fn add_rejects_values_outside_nominal_domains() {
        let mut ds = weather_nominal();
        let n = ds.len();
        assert!(matches!(
            ds.add(Example::new(vec![0.7, 0.0])),
            Err(LearnError::InvalidArgument(_))
        ));
        assert!(matches!(
            ds.add(Example::new(vec![0.0, 1.9])),
            Err(LearnError::InvalidArgument(_))
        ));
        assert!(matches!(
            ds.add(Example::new(vec![5.0, 0.0])),
            Err(LearnError::IndexOutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(ds.len(), n);
        ds.add(Example::new(vec![1.0, 1.0])).unwrap();
        assert_eq!(ds.len(), n + 1);
    }

    #[test]
    fn partitions_respect_fold_capacity() {
        let mut ds = weather_nominal();
        let mut rng = StdRng::seed_from_u64(7);
        ds.set_folds(3, &mut rng).unwrap();

        let parts = ds.partitions().unwrap();
        assert_eq!(parts.len(), ds.len());
        let cap = ds.len().div_ceil(3);
        for fold in 0..3 {
            let count = parts.iter().filter(|&&f| f == fold).count();
            assert!(count <= cap, "fold {fold} has {count} > {cap}");
        }
    }

    #[test]
    fn same_seed_reproduces_partition() {
        let mut a = weather_nominal();
        let mut b = weather_nominal();
        a.set_folds(4, &mut StdRng::seed_from_u64(99)).unwrap();
        b.set_folds(4, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.partitions(), b.partitions());
    }

    #[test]
    fn too_many_folds_is_invalid() {
        let mut ds = weather_nominal();
        let n = ds.len();
        let err = ds
            .set_folds(n + 1, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, LearnError::InvalidArgument(_)));

        let mut empty = ds.empty_like();
        let err = empty
            .set_folds(1, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, LearnError::InvalidArgument(_)));
    }

    #[test]
    fn cv_split_sizes_reconstruct_dataset() {
        let mut ds = weather_nominal();
        ds.set_folds(5, &mut StdRng::seed_from_u64(3)).unwrap();

        let mut tested = 0;
        for p in 0..5 {
            let (train, test) = ds.cv_split(p).unwrap();
            assert_eq!(train.len() + test.len(), ds.len());
            assert!(Arc::ptr_eq(train.attributes(), ds.attributes()));
            assert!(Arc::ptr_eq(test.attributes(), ds.attributes()));
            tested += test.len();
        }
        assert_eq!(tested, ds.len());
    }

    #[test]
    fn cv_split_requires_assignment() {
        let ds = weather_nominal();
        assert!(matches!(
            ds.cv_split(0),
            Err(LearnError::InvalidArgument(_))
        ));
    }

    #[test]
    fn single_fold_puts_everything_in_test() {
        let mut ds = weather_nominal();
        ds.set_folds(1, &mut StdRng::seed_from_u64(5)).unwrap();
        let (train, test) = ds.cv_split(0).unwrap();
        assert!(train.is_empty());
        assert_eq!(test.len(), ds.len());
    }
}
