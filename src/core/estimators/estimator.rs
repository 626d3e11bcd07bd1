use crate::error::Result;

/// Incremental probability estimator.
///
/// Implementations accept observations one at a time via [`add`] and expose
/// the estimated density (or mass) of a value given everything added so far
/// via [`probability`].
///
/// [`add`]: Estimator::add
/// [`probability`]: Estimator::probability
pub trait Estimator {
    /// Incorporates one observation.
    fn add(&mut self, x: f64) -> Result<()>;

    /// Estimated density or mass at `x`.
    fn probability(&self, x: f64) -> Result<f64>;

    /// Number of observations added.
    fn n(&self) -> usize;
}
