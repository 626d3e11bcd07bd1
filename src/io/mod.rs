mod parser;
mod train_test_sets;
mod writer;

pub use parser::{load_dataset, parse_dataset};
pub use train_test_sets::TrainTestSets;
