use super::node::{Node, NodeId, NodeKind};
use crate::classifiers::classifier::{Classifier, not_trained};
use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::error::{LearnError, Result};
use crate::utils::math::max_count_index;
use tracing::debug;

const ROOT: NodeId = 0;

/// Decision tree grown by gain ratio, stored as an arena of nodes with the
/// root at position 0.
pub struct DecisionTree {
    prune: bool,
    model: Option<TreeModel>,
}

#[derive(Clone, Debug)]
struct TreeModel {
    nodes: Vec<Node>,
    num_classes: usize,
    num_attributes: usize,
}

impl DecisionTree {
    pub fn new() -> Self {
        Self {
            prune: false,
            model: None,
        }
    }

    /// Prune against the training data right after induction.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn prunes_after_training(&self) -> bool {
        self.prune
    }

    /// Collapses, bottom-up, every internal node whose majority class is at
    /// least as accurate on `dataset` as its subtree. Returns the pruned
    /// tree's accuracy on `dataset`.
    pub fn prune(&mut self, dataset: &Dataset) -> Result<f64> {
        let name = self.name();
        let model = self.model.as_mut().ok_or_else(|| not_trained(name))?;
        if dataset.is_empty() {
            return Err(LearnError::InvalidArgument(
                "cannot prune against an empty dataset".into(),
            ));
        }
        let before = model.nodes.len();
        let examples: Vec<&Example> = dataset.examples().iter().collect();
        let correct = model.prune_node(ROOT, dataset, examples)?;
        model.compact();
        debug!(
            nodes_before = before,
            nodes_after = model.nodes.len(),
            correct,
            "decision tree pruned"
        );
        Ok(correct as f64 / dataset.len() as f64)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.model.as_ref()?.nodes.get(id)
    }

    pub fn root(&self) -> Option<&Node> {
        self.node(ROOT)
    }

    /// Zero when untrained.
    pub fn node_count(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.nodes.len())
    }

    pub fn leaf_count(&self) -> usize {
        self.model
            .as_ref()
            .map_or(0, |m| m.nodes.iter().filter(|n| n.is_leaf()).count())
    }

    /// Edges on the longest root-to-leaf path; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.depth(ROOT))
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeModel {
    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn grow(&mut self, dataset: &Dataset, parent_majority: usize) -> Result<NodeId> {
        if dataset.is_empty() {
            return Ok(self.push(Node::certain_leaf(parent_majority, self.num_classes)));
        }

        let counts = dataset.class_counts()?;
        let distribution: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
        if counts.iter().filter(|&&c| c > 0).count() <= 1 {
            return Ok(self.push(Node::leaf(distribution)));
        }

        let attribute = match dataset.best_splitting_attribute() {
            Ok(attribute) => attribute,
            Err(LearnError::NoValidSplit) => return Ok(self.push(Node::leaf(distribution))),
            Err(e) => return Err(e),
        };
        let split = dataset.split_on(attribute)?;
        if split.children.is_empty() {
            return Ok(self.push(Node::leaf(distribution)));
        }

        let majority = max_count_index(&counts);
        let id = self.push(Node::leaf(distribution));
        let mut children = Vec::with_capacity(split.children.len());
        for child in &split.children {
            children.push(self.grow(child, majority)?);
        }
        self.nodes[id].kind = NodeKind::Internal {
            test: split.test,
            children,
        };
        Ok(id)
    }

    /// Leaf reached by `example`, or the internal node where it has no
    /// branch.
    fn route(&self, example: &Example) -> &Node {
        let mut id = ROOT;
        loop {
            let node = &self.nodes[id];
            match &node.kind {
                NodeKind::Leaf => return node,
                NodeKind::Internal { test, children } => {
                    match test.branch_for(example).and_then(|b| children.get(b)) {
                        Some(&child) => id = child,
                        None => return node,
                    }
                }
            }
        }
    }

    /// Number of `examples` classified correctly by the subtree at `id`
    /// after pruning it.
    fn prune_node<'a>(
        &mut self,
        id: NodeId,
        dataset: &Dataset,
        examples: Vec<&'a Example>,
    ) -> Result<usize> {
        let majority = self.nodes[id].majority_class();
        let collapsed = count_correct(dataset, &examples, majority)?;
        let (test, children) = match &self.nodes[id].kind {
            NodeKind::Leaf => return Ok(collapsed),
            NodeKind::Internal { test, children } => (test.clone(), children.clone()),
        };

        let mut routed: Vec<Vec<&'a Example>> = vec![Vec::new(); children.len()];
        let mut stranded = Vec::new();
        for example in examples {
            match test.branch_for(example).filter(|&b| b < children.len()) {
                Some(branch) => routed[branch].push(example),
                None => stranded.push(example),
            }
        }

        let mut subtree = count_correct(dataset, &stranded, majority)?;
        for (child, subset) in children.into_iter().zip(routed) {
            subtree += self.prune_node(child, dataset, subset)?;
        }

        if collapsed >= subtree {
            self.nodes[id].collapse();
            Ok(collapsed)
        } else {
            Ok(subtree)
        }
    }

    /// Drops nodes no longer reachable from the root.
    fn compact(&mut self) {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        self.copy_reachable(ROOT, &mut nodes);
        self.nodes = nodes;
    }

    fn copy_reachable(&self, id: NodeId, out: &mut Vec<Node>) -> NodeId {
        let new_id = out.len();
        out.push(self.nodes[id].clone());
        if let NodeKind::Internal { children, .. } = &self.nodes[id].kind {
            let remapped: Vec<NodeId> = children
                .iter()
                .map(|&child| self.copy_reachable(child, out))
                .collect();
            if let NodeKind::Internal { children, .. } = &mut out[new_id].kind {
                *children = remapped;
            }
        }
        new_id
    }

    fn depth(&self, id: NodeId) -> usize {
        self.nodes[id]
            .children()
            .iter()
            .map(|&child| 1 + self.depth(child))
            .max()
            .unwrap_or(0)
    }
}

fn count_correct(dataset: &Dataset, examples: &[&Example], class: usize) -> Result<usize> {
    let mut correct = 0;
    for example in examples {
        if dataset.class_of(example)? == class {
            correct += 1;
        }
    }
    Ok(correct)
}

impl Classifier for DecisionTree {
    fn train(&mut self, dataset: &Dataset) -> Result<()> {
        let mut model = TreeModel {
            nodes: Vec::new(),
            num_classes: dataset.num_classes()?,
            num_attributes: dataset.num_attributes(),
        };
        model.grow(dataset, 0)?;
        self.model = Some(model);
        debug!(
            examples = dataset.len(),
            nodes = self.node_count(),
            leaves = self.leaf_count(),
            depth = self.depth(),
            "decision tree grown"
        );

        if self.prune && !dataset.is_empty() {
            self.prune(dataset)?;
        }
        Ok(())
    }

    fn predict_distribution(&self, example: &Example) -> Result<Vec<f64>> {
        let model = self.model.as_ref().ok_or_else(|| not_trained(self.name()))?;
        if example.len() != model.num_attributes {
            return Err(LearnError::InvalidArgument(format!(
                "example has {} values, model expects {}",
                example.len(),
                model.num_attributes
            )));
        }
        Ok(model.route(example).class_distribution.clone())
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(DecisionTree::new().with_pruning(self.prune))
    }

    fn name(&self) -> &'static str {
        "decision-tree"
    }
}
