use crate::core::dataset::Dataset;
use crate::core::instances::Example;

/// Routing rule of a split: which branch an example takes.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitTest {
    /// One branch per value of a nominal attribute.
    Multiway { attribute: usize, arity: usize },
    /// Branch 0 for values `<= threshold`, branch 1 otherwise.
    Threshold { attribute: usize, threshold: f64 },
}

impl SplitTest {
    pub fn attribute(&self) -> usize {
        match self {
            SplitTest::Multiway { attribute, .. } | SplitTest::Threshold { attribute, .. } => {
                *attribute
            }
        }
    }

    pub fn max_branches(&self) -> usize {
        match self {
            SplitTest::Multiway { arity, .. } => *arity,
            SplitTest::Threshold { .. } => 2,
        }
    }

    /// `None` when the example's value has no branch (a label outside the
    /// domain seen at training time, or a non-finite value).
    pub fn branch_for(&self, example: &Example) -> Option<usize> {
        let value = example.value(self.attribute()).ok()?;
        if !value.is_finite() {
            return None;
        }
        match self {
            SplitTest::Multiway { arity, .. } => {
                if value < 0.0 {
                    return None;
                }
                let branch = value as usize;
                (branch < *arity).then_some(branch)
            }
            SplitTest::Threshold { threshold, .. } => Some(if value <= *threshold { 0 } else { 1 }),
        }
    }
}

/// Result of partitioning a dataset on one attribute.
#[derive(Clone, Debug)]
pub struct Split {
    pub test: SplitTest,
    pub children: Vec<Dataset>,
}
