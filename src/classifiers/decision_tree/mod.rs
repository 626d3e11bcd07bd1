mod decision_tree;
mod node;

pub use decision_tree::DecisionTree;
pub use node::{Node, NodeId, NodeKind};
