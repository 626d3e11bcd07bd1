use crate::core::dataset::DEFAULT_FOLDS;
use crate::evaluation::DEFAULT_SEED;
use crate::ui::types::choices::ClassifierChoice;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_folds() -> usize {
    DEFAULT_FOLDS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Everything an evaluation run needs apart from the data itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub classifier: ClassifierChoice,

    /// Cross-validation folds, used when no testing set is given.
    #[serde(default = "default_folds")]
    pub folds: usize,

    /// Seed of the fold assignment.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierChoice::default(),
            folds: DEFAULT_FOLDS,
            seed: DEFAULT_SEED,
        }
    }
}

impl EvaluationConfig {
    /// Reads a JSON config file; missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}
