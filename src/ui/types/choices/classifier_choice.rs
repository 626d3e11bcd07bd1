use crate::classifiers::lazy::DEFAULT_K;
use crate::core::estimators::DEFAULT_SMOOTHING;
use crate::ui::types::choices::UIChoice;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_smoothing() -> f64 {
    DEFAULT_SMOOTHING
}

fn default_k() -> usize {
    DEFAULT_K
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NaiveBayesParams {
    /// Additive smoothing of the categorical estimators.
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
}

impl Default for NaiveBayesParams {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IBkParams {
    /// Number of neighbors.
    #[serde(default = "default_k")]
    pub k: usize,
}

impl Default for IBkParams {
    fn default() -> Self {
        Self { k: DEFAULT_K }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DecisionTreeParams {
    /// Prune against the training data after induction.
    #[serde(default)]
    pub prune: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ClassifierKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ClassifierChoice {
    #[strum_discriminants(strum(
        message = "Naive Bayes",
        detailed_message = "Gaussian and Laplace-smoothed categorical likelihoods per class."
    ))]
    NaiveBayes(NaiveBayesParams),

    #[serde(rename = "ibk")]
    #[strum_discriminants(strum(
        to_string = "ibk",
        message = "k-Nearest Neighbors",
        detailed_message = "Majority vote of the k closest training examples."
    ))]
    IBk(IBkParams),

    #[strum_discriminants(strum(
        message = "Decision Tree",
        detailed_message = "Gain-ratio tree with optional reduced-error pruning."
    ))]
    DecisionTree(DecisionTreeParams),
}

impl Default for ClassifierChoice {
    fn default() -> Self {
        ClassifierChoice::NaiveBayes(NaiveBayesParams::default())
    }
}

impl UIChoice for ClassifierChoice {
    type Kind = ClassifierKind;

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            ClassifierKind::NaiveBayes => json!({ "smoothing": DEFAULT_SMOOTHING }),
            ClassifierKind::IBk => json!({ "k": DEFAULT_K }),
            ClassifierKind::DecisionTree => json!({ "prune": false }),
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        Ok(match kind {
            ClassifierKind::NaiveBayes => ClassifierChoice::NaiveBayes(serde_json::from_value(params)?),
            ClassifierKind::IBk => ClassifierChoice::IBk(serde_json::from_value(params)?),
            ClassifierKind::DecisionTree => {
                ClassifierChoice::DecisionTree(serde_json::from_value(params)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn kinds_parse_from_kebab_case() {
        assert_eq!(
            ClassifierKind::from_str("naive-bayes").unwrap(),
            ClassifierKind::NaiveBayes
        );
        assert_eq!(ClassifierKind::from_str("ibk").unwrap(), ClassifierKind::IBk);
        assert_eq!(
            ClassifierKind::from_str("decision-tree").unwrap(),
            ClassifierKind::DecisionTree
        );
        assert_eq!(ClassifierKind::IBk.to_string(), "ibk");
    }

    #[test]
    fn every_kind_builds_from_default_params() {
        for kind in ClassifierKind::iter() {
            let choice =
                ClassifierChoice::from_parts(kind, ClassifierChoice::default_params(kind)).unwrap();
            assert_eq!(ClassifierKind::from(&choice), kind);
            assert!(kind.get_message().is_some());
        }
    }

    #[test]
    fn serializes_as_tagged_enum() {
        let v = serde_json::to_value(ClassifierChoice::IBk(IBkParams { k: 5 })).unwrap();
        assert_eq!(v, json!({ "type": "ibk", "params": { "k": 5 } }));

        let back: ClassifierChoice =
            serde_json::from_value(json!({ "type": "decision-tree", "params": {} })).unwrap();
        assert_eq!(back, ClassifierChoice::DecisionTree(DecisionTreeParams { prune: false }));
    }

    #[test]
    fn wrong_param_type_is_rejected() {
        let err = ClassifierChoice::from_parts(ClassifierKind::IBk, json!({ "k": "three" }));
        assert!(err.is_err());
    }
}
