mod categorical_estimator;
mod estimator;
mod gaussian_estimator;

pub use categorical_estimator::{CategoricalEstimator, DEFAULT_SMOOTHING};
pub use estimator::Estimator;
pub use gaussian_estimator::GaussianEstimator;
