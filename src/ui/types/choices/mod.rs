mod classifier_choice;
mod evaluation_config;

pub use classifier_choice::{
    ClassifierChoice, ClassifierKind, DecisionTreeParams, IBkParams, NaiveBayesParams,
};
pub use evaluation_config::EvaluationConfig;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tagged choice assembled from a kind name and a JSON parameter object.
pub trait UIChoice: Sized {
    type Kind: Copy;

    fn default_params(kind: Self::Kind) -> Value;

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self>;
}

/// How the run summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
