use crate::core::estimators::Estimator;
use crate::error::{LearnError, Result};

pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Multinomial estimator over `k` categories with additive smoothing:
/// `p(x) = (count[x] + alpha) / (n + alpha * k)`.
#[derive(Clone, Debug)]
pub struct CategoricalEstimator {
    counts: Vec<usize>,
    n: usize,
    alpha: f64,
}

impl CategoricalEstimator {
    pub fn new(k: usize) -> Self {
        Self {
            counts: vec![0; k],
            n: 0,
            alpha: DEFAULT_SMOOTHING,
        }
    }

    pub fn with_smoothing(k: usize, alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(LearnError::InvalidArgument(format!(
                "smoothing constant must be positive, got {alpha}"
            )));
        }
        Ok(Self {
            counts: vec![0; k],
            n: 0,
            alpha,
        })
    }

    pub fn num_categories(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, category: usize) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    fn category_of(&self, x: f64) -> Result<usize> {
        let len = self.counts.len();
        if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
            return Err(LearnError::InvalidArgument(format!(
                "{x} is not a category index"
            )));
        }
        let index = x as usize;
        if index >= len {
            return Err(LearnError::IndexOutOfRange { index, len });
        }
        Ok(index)
    }
}

impl Estimator for CategoricalEstimator {
    fn add(&mut self, x: f64) -> Result<()> {
        let index = self.category_of(x)?;
        self.counts[index] += 1;
        self.n += 1;
        Ok(())
    }

    fn probability(&self, x: f64) -> Result<f64> {
        let index = self.category_of(x)?;
        let k = self.counts.len() as f64;
        Ok((self.counts[index] as f64 + self.alpha) / (self.n as f64 + self.alpha * k))
    }

    fn n(&self) -> usize {
        self.n
    }
}
