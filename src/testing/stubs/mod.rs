mod failing_classifier;
mod oracle_classifier;

pub use failing_classifier::FailingClassifier;
pub use oracle_classifier::OracleClassifier;
