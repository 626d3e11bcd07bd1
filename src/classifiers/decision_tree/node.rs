use crate::core::dataset::SplitTest;
use crate::utils::math::max_index;

/// Position of a node in the tree arena.
pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Leaf,
    Internal {
        test: SplitTest,
        children: Vec<NodeId>,
    },
}

/// Tree node. Every node keeps the class distribution of the training
/// examples that reached it: a leaf predicts from it, and an internal node
/// falls back on it when an example has no branch.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub class_distribution: Vec<f64>,
}

impl Node {
    pub fn leaf(class_distribution: Vec<f64>) -> Self {
        Self {
            kind: NodeKind::Leaf,
            class_distribution,
        }
    }

    /// Leaf that predicts `class` with certainty.
    pub fn certain_leaf(class: usize, num_classes: usize) -> Self {
        let mut class_distribution = vec![0.0; num_classes];
        if let Some(slot) = class_distribution.get_mut(class) {
            *slot = 1.0;
        }
        Self::leaf(class_distribution)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    pub fn majority_class(&self) -> usize {
        max_index(&self.class_distribution)
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf => &[],
            NodeKind::Internal { children, .. } => children,
        }
    }

    /// Turns the node into a leaf predicting its own majority class.
    pub fn collapse(&mut self) {
        self.kind = NodeKind::Leaf;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_leaf_is_one_hot() {
        let n = Node::certain_leaf(2, 3);
        assert!(n.is_leaf());
        assert_eq!(n.class_distribution, vec![0.0, 0.0, 1.0]);
        assert_eq!(n.majority_class(), 2);
    }

    #[test]
    fn collapse_keeps_distribution() {
        let mut n = Node {
            kind: NodeKind::Internal {
                test: SplitTest::Multiway {
                    attribute: 0,
                    arity: 2,
                },
                children: vec![1, 2],
            },
            class_distribution: vec![3.0, 4.0],
        };
        assert_eq!(n.children(), &[1, 2]);
        n.collapse();
        assert!(n.is_leaf());
        assert!(n.children().is_empty());
        assert_eq!(n.majority_class(), 1);
    }
}
