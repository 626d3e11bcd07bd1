pub mod bayes;
mod classifier;
pub mod decision_tree;
pub mod lazy;

pub use bayes::NaiveBayes;
pub use classifier::Classifier;
pub use decision_tree::DecisionTree;
pub use lazy::IBk;
