use crate::error::{LearnError, Result};

/// One row: a value per attribute. Nominal values are stored as the index of
/// their label in the attribute's domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Example {
    values: Vec<f64>,
}

impl Example {
    pub fn new(values: Vec<f64>) -> Example {
        Example { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .copied()
            .ok_or(LearnError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Reads the value at `index` as a category position.
    pub fn label(&self, index: usize) -> Result<usize> {
        let v = self.value(index)?;
        if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
            return Err(LearnError::InvalidArgument(format!(
                "value {v} at column {index} is not a category index"
            )));
        }
        Ok(v as usize)
    }

    pub(crate) fn set_value(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(LearnError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }
}

impl From<Vec<f64>> for Example {
    fn from(values: Vec<f64>) -> Self {
        Example::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_reads_category_positions() {
        let e = Example::new(vec![2.0, 0.5, 1.0]);
        assert_eq!(e.label(0).unwrap(), 2);
        assert_eq!(e.label(2).unwrap(), 1);
        assert!(matches!(
            e.label(5),
            Err(LearnError::IndexOutOfRange { index: 5, len: 3 })
        ));
    }

    #[test]
    fn negative_value_is_not_a_label() {
        let e = Example::new(vec![-1.0]);
        assert!(matches!(e.label(0), Err(LearnError::InvalidArgument(_))));
    }

    #[test]
    fn fractional_value_is_not_a_label() {
        let e = Example::new(vec![1.9, 1.0]);
        assert!(matches!(e.label(0), Err(LearnError::InvalidArgument(_))));
        assert_eq!(e.label(1).unwrap(), 1);
    }
}
