mod evaluator;
mod performance;
mod report;

pub use evaluator::{DEFAULT_SEED, Evaluator};
pub use performance::{FoldPerformance, Performance, RunPerformance};
pub use report::{EvaluationMode, PerformanceReport};
