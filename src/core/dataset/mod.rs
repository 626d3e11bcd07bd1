mod dataset;
mod split;
mod statistics;

pub use dataset::{DEFAULT_FOLDS, Dataset};
pub use split::{Split, SplitTest};
