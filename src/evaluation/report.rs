use crate::evaluation::performance::Performance;
use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Serializable summary of one evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub dataset: String,
    pub classifier: String,
    pub mode: EvaluationMode,
    pub folds: usize,
    pub corrects: usize,
    pub total: usize,
    pub accuracy: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stddev: Option<f64>,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationMode {
    Holdout,
    CrossValidation,
}

impl PerformanceReport {
    pub fn new(
        dataset: impl Into<String>,
        classifier: impl Into<String>,
        performance: &Performance,
    ) -> Self {
        let mode = match performance {
            Performance::Holdout(_) => EvaluationMode::Holdout,
            Performance::CrossValidation(_) => EvaluationMode::CrossValidation,
        };
        Self {
            dataset: dataset.into(),
            classifier: classifier.into(),
            mode,
            folds: performance.m(),
            corrects: performance.corrects(),
            total: performance.n(),
            accuracy: performance.accuracy(),
            stddev: performance.stddev().ok(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    #[inline]
    fn fmtv(v: f64) -> String {
        if v.is_nan() {
            "NaN".into()
        } else {
            format!("{:.6}", v)
        }
    }
}

impl Display for PerformanceReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} on {}: acc={}",
            self.classifier,
            self.dataset,
            Self::fmtv(self.accuracy)
        )?;
        if let Some(sd) = self.stddev {
            write!(f, " (+-{})", Self::fmtv(sd))?;
        }
        write!(f, ", corrects={}/{}", self.corrects, self.total)?;
        if self.mode == EvaluationMode::CrossValidation {
            write!(f, ", folds={}", self.folds)?;
        }
        write!(f, ", at {}", self.timestamp)
    }
}
