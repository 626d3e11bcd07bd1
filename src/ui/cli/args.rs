use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueHint};
use serde_json::{Map, Value};

use crate::ui::types::choices::{
    ClassifierChoice, ClassifierKind, EvaluationConfig, OutputFormat, UIChoice,
};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Train and evaluate classifiers on tabular datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a classifier by holdout (with a testing set) or cross-validation
    Run(RunArgs),
    /// Parse a dataset file and print it back
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Dataset file
    #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Training set
    #[arg(short = 't', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub train: PathBuf,

    /// Testing set; omit to cross-validate on the training set
    #[arg(short = 'T', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub test: Option<PathBuf>,

    /// JSON file with an evaluation config; flags below override it
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Classifier to use (naive-bayes, ibk, decision-tree)
    #[arg(long, value_name = "CLASSIFIER")]
    pub classifier: Option<String>,

    /// Override classifier parameters (key=value)
    #[arg(long = "classifier-param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub classifier_params: Vec<KeyValue>,

    /// Number of neighbors for ibk
    #[arg(short = 'k', value_name = "K", value_parser = clap::value_parser!(u64).range(1..))]
    pub k: Option<u64>,

    /// Prune the decision tree after training
    #[arg(long)]
    pub prune: bool,

    /// Cross-validation folds
    #[arg(
        short = 'x',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub folds: Option<u64>,

    /// Seed of the fold assignment
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format of the summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// File to write the JSON report to after completion
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct KeyValue {
    key: String,
    value: Value,
}

impl RunArgs {
    /// Config file (or defaults) with the command-line overrides applied.
    pub fn resolve_config(&self) -> Result<EvaluationConfig> {
        let mut config = match &self.config {
            Some(path) => EvaluationConfig::load(path)?,
            None => EvaluationConfig::default(),
        };

        if let Some(raw) = &self.classifier {
            let kind = parse_kind::<ClassifierKind>(raw)
                .with_context(|| format!("invalid classifier '{raw}'"))?;
            let mut params = ClassifierChoice::default_params(kind);
            apply_overrides(&mut params, &self.classifier_params)?;
            config.classifier = ClassifierChoice::from_parts(kind, params)?;
        } else if !self.classifier_params.is_empty() {
            config.classifier = override_choice(&config.classifier, &self.classifier_params)?;
        }

        if let Some(k) = self.k {
            match &mut config.classifier {
                ClassifierChoice::IBk(p) => p.k = usize::try_from(k)?,
                other => bail!("-k only applies to ibk, not {}", ClassifierKind::from(&*other)),
            }
        }
        if self.prune {
            match &mut config.classifier {
                ClassifierChoice::DecisionTree(p) => p.prune = true,
                other => bail!(
                    "--prune only applies to decision-tree, not {}",
                    ClassifierKind::from(&*other)
                ),
            }
        }
        if let Some(folds) = self.folds {
            config.folds = usize::try_from(folds)?;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn override_choice(choice: &ClassifierChoice, overrides: &[KeyValue]) -> Result<ClassifierChoice> {
    let kind = ClassifierKind::from(choice);
    let mut params = serde_json::to_value(choice)?
        .get_mut("params")
        .map(Value::take)
        .unwrap_or(Value::Null);
    apply_overrides(&mut params, overrides)?;
    ClassifierChoice::from_parts(kind, params)
}

fn parse_kind<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    for cand in candidate_spellings(raw) {
        if let Ok(parsed) = cand.parse::<T>() {
            return Ok(parsed);
        }
    }
    Err(anyhow!("could not parse value '{raw}'"))
}

/// `NaiveBayes`, `naive_bayes` and `IBK` all resolve to their kebab-case
/// kind names.
fn candidate_spellings(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let mut out = vec![
        trimmed.to_string(),
        trimmed.to_lowercase(),
        kebab_from_token(trimmed),
        trimmed.replace('_', "-").to_lowercase(),
    ];
    out.sort();
    out.dedup();
    out
}

fn kebab_from_token(token: &str) -> String {
    let mut buf = String::new();
    let mut prev_lower = false;
    for ch in token.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                buf.push('-');
            }
            buf.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch == '_' {
            buf.push('-');
            prev_lower = false;
        } else {
            buf.push(ch);
            prev_lower = ch.is_lowercase();
        }
    }
    buf
}

fn apply_overrides(target: &mut Value, overrides: &[KeyValue]) -> Result<()> {
    if target.is_null() {
        *target = Value::Object(Map::new());
    }
    let Value::Object(map) = target else {
        bail!("classifier parameters are not a JSON object");
    };
    for kv in overrides {
        map.insert(kv.key.clone(), kv.value.clone());
    }
    Ok(())
}

fn parse_key_value(raw: &str) -> Result<KeyValue, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| "expected KEY=VALUE".to_string())?;
    let key = key.trim();
    if key.is_empty() {
        return Err("key cannot be empty".to_string());
    }

    let value = value.trim();
    // Bare words that are not JSON stay strings.
    let parsed = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    Ok(KeyValue {
        key: key.to_string(),
        value: parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{DecisionTreeParams, IBkParams, NaiveBayesParams};

    fn parse(args: &[&str]) -> RunArgs {
        let mut argv = vec!["tabula", "run"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Command::Run(run) => run,
            Command::Show(_) => panic!("expected run"),
        }
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse(&["-t", "train.mla"]);
        assert!(args.test.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.resolve_config().unwrap(), EvaluationConfig::default());
    }

    #[test]
    fn short_flags_set_everything() {
        let args = parse(&[
            "-t", "a.mla", "-T", "b.mla", "--classifier", "IBk", "-k", "5", "-x", "3",
            "--seed", "11",
        ]);
        assert_eq!(args.test.as_deref(), Some(std::path::Path::new("b.mla")));
        let cfg = args.resolve_config().unwrap();
        assert_eq!(cfg.classifier, ClassifierChoice::IBk(IBkParams { k: 5 }));
        assert_eq!(cfg.folds, 3);
        assert_eq!(cfg.seed, 11);
    }

    #[test]
    fn classifier_names_accept_several_spellings() {
        for name in ["decision-tree", "DecisionTree", "decision_tree"] {
            let cfg = parse(&["-t", "a", "--classifier", name, "--prune"])
                .resolve_config()
                .unwrap();
            assert_eq!(
                cfg.classifier,
                ClassifierChoice::DecisionTree(DecisionTreeParams { prune: true })
            );
        }
        assert!(
            parse(&["-t", "a", "--classifier", "svm"])
                .resolve_config()
                .is_err()
        );
    }

    #[test]
    fn params_override_default_classifier() {
        let cfg = parse(&["-t", "a", "--classifier-param", "smoothing=0.5"])
            .resolve_config()
            .unwrap();
        assert_eq!(
            cfg.classifier,
            ClassifierChoice::NaiveBayes(NaiveBayesParams { smoothing: 0.5 })
        );
    }

    #[test]
    fn flags_for_other_classifiers_are_rejected() {
        assert!(parse(&["-t", "a", "-k", "3"]).resolve_config().is_err());
        assert!(parse(&["-t", "a", "--prune"]).resolve_config().is_err());
    }

    #[test]
    fn key_value_parsing() {
        let kv = parse_key_value("k=3").unwrap();
        assert_eq!(kv.key, "k");
        assert_eq!(kv.value, Value::from(3));
        let kv = parse_key_value("name=abc").unwrap();
        assert_eq!(kv.value, Value::String("abc".into()));
        assert!(parse_key_value("=1").is_err());
        assert!(parse_key_value("novalue").is_err());
    }

    #[test]
    fn show_takes_a_path() {
        match Cli::parse_from(["tabula", "show", "d.mla"]).command {
            Command::Show(args) => assert_eq!(args.path, PathBuf::from("d.mla")),
            Command::Run(_) => panic!("expected show"),
        }
    }
}
