mod example;
mod example_set;

pub use example::Example;
pub use example_set::ExampleSet;
