use crate::core::estimators::Estimator;
use crate::error::{LearnError, Result};

/// Normal density estimator from running sums.
///
/// `mean = sum / n`, `variance = (sum_sq - sum^2 / n) / (n - 1)`. With zero
/// variance the density collapses to a unit spike at the mean.
#[derive(Clone, Debug, Default)]
pub struct GaussianEstimator {
    n: usize,
    sum: f64,
    sum_sq: f64,
    min: f64,
    max: f64,
}

impl GaussianEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mean(&self) -> Result<f64> {
        if self.n == 0 {
            return Err(LearnError::UndefinedStatistic(
                "mean of an empty sample".into(),
            ));
        }
        if self.min == self.max {
            return Ok(self.min);
        }
        Ok(self.sum / self.n as f64)
    }

    pub fn variance(&self) -> Result<f64> {
        if self.n < 2 {
            return Err(LearnError::UndefinedStatistic(format!(
                "variance needs at least 2 observations, got {}",
                self.n
            )));
        }
        if self.min == self.max {
            return Ok(0.0);
        }
        let n = self.n as f64;
        let variance = (self.sum_sq - self.sum * self.sum / n) / (n - 1.0);
        Ok(variance.max(0.0))
    }

    pub fn std_dev(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }
}

impl Estimator for GaussianEstimator {
    fn add(&mut self, x: f64) -> Result<()> {
        if !x.is_finite() {
            return Err(LearnError::InvalidArgument(format!(
                "cannot observe non-finite value {x}"
            )));
        }
        if self.n == 0 {
            self.min = x;
            self.max = x;
        } else {
            self.min = self.min.min(x);
            self.max = self.max.max(x);
        }
        self.n += 1;
        self.sum += x;
        self.sum_sq += x * x;
        Ok(())
    }

    fn probability(&self, x: f64) -> Result<f64> {
        let variance = self.variance()?;
        let mean = self.mean()?;
        if variance == 0.0 {
            return Ok(if x == mean { 1.0 } else { 0.0 });
        }
        let normal_const = (2.0 * std::f64::consts::PI * variance).sqrt();
        let diff = x - mean;
        Ok((-(diff * diff) / (2.0 * variance)).exp() / normal_const)
    }

    fn n(&self) -> usize {
        self.n
    }
}
