pub mod attribute_set;
pub mod attributes;
pub mod dataset;
pub mod estimators;
pub mod instances;
pub mod scaler;

pub use attribute_set::{AttributeSet, AttributeSetRef};
pub use dataset::Dataset;
pub use instances::{Example, ExampleSet};
pub use scaler::Scaler;
