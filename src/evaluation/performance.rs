//! Accuracy accumulators.
//!
//! Two accumulation modes exist and never mix: [`RunPerformance`] counts
//! individual predictions, [`FoldPerformance`] merges whole runs (one per
//! fold) and keeps the spread of their accuracies.

use crate::error::{LearnError, Result};
use crate::utils::math::max_index;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Prediction-level tally of one train/test run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunPerformance {
    corrects: usize,
    n: usize,
}

impl RunPerformance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one prediction: correct when the arg-max of `distribution`
    /// (lowest class on ties) equals `actual`.
    pub fn add(&mut self, actual: usize, distribution: &[f64]) {
        if max_index(distribution) == actual {
            self.corrects += 1;
        }
        self.n += 1;
    }

    pub fn corrects(&self) -> usize {
        self.corrects
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// NaN before any prediction.
    pub fn accuracy(&self) -> f64 {
        if self.n == 0 {
            return f64::NAN;
        }
        self.corrects as f64 / self.n as f64
    }

    /// Sample standard deviation of the 0/1 outcomes.
    pub fn stddev(&self) -> Result<f64> {
        if self.n < 2 {
            return Err(LearnError::UndefinedStatistic(format!(
                "standard deviation needs at least 2 predictions, got {}",
                self.n
            )));
        }
        let c = self.corrects as f64;
        let n = self.n as f64;
        let variance = (c - c * c / n) / (n - 1.0);
        Ok(variance.max(0.0).sqrt())
    }
}

/// Run-level aggregate over cross-validation folds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoldPerformance {
    corrects: usize,
    n: usize,
    sum: f64,
    sum_sqr: f64,
    m: usize,
}

impl FoldPerformance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a finished run. An empty run is ignored.
    pub fn add(&mut self, run: &RunPerformance) {
        if run.n() == 0 {
            return;
        }
        let accuracy = run.accuracy();
        self.corrects += run.corrects();
        self.n += run.n();
        self.sum += accuracy;
        self.sum_sqr += accuracy * accuracy;
        self.m += 1;
    }

    pub fn corrects(&self) -> usize {
        self.corrects
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of runs merged.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Mean of the per-run accuracies; with fewer than two runs, the pooled
    /// `corrects / n`.
    pub fn accuracy(&self) -> f64 {
        if self.m < 2 {
            if self.n == 0 {
                return f64::NAN;
            }
            return self.corrects as f64 / self.n as f64;
        }
        self.sum / self.m as f64
    }

    /// Sample standard deviation of the per-run accuracies.
    pub fn stddev(&self) -> Result<f64> {
        if self.m < 2 {
            return Err(LearnError::UndefinedStatistic(format!(
                "standard deviation needs at least 2 folds, got {}",
                self.m
            )));
        }
        let m = self.m as f64;
        let variance = (self.sum_sqr - self.sum * self.sum / m) / (m - 1.0);
        Ok(variance.max(0.0).sqrt())
    }
}

/// Outcome of an evaluation, in whichever mode produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum Performance {
    Holdout(RunPerformance),
    CrossValidation(FoldPerformance),
}

impl Performance {
    pub fn accuracy(&self) -> f64 {
        match self {
            Performance::Holdout(p) => p.accuracy(),
            Performance::CrossValidation(p) => p.accuracy(),
        }
    }

    pub fn stddev(&self) -> Result<f64> {
        match self {
            Performance::Holdout(p) => p.stddev(),
            Performance::CrossValidation(p) => p.stddev(),
        }
    }

    pub fn corrects(&self) -> usize {
        match self {
            Performance::Holdout(p) => p.corrects(),
            Performance::CrossValidation(p) => p.corrects(),
        }
    }

    pub fn n(&self) -> usize {
        match self {
            Performance::Holdout(p) => p.n(),
            Performance::CrossValidation(p) => p.n(),
        }
    }

    /// Folds merged; 0 for a holdout run.
    pub fn m(&self) -> usize {
        match self {
            Performance::Holdout(_) => 0,
            Performance::CrossValidation(p) => p.m(),
        }
    }
}

impl Display for Performance {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Performance::CrossValidation(p) = self {
            writeln!(f, "Number of folds: {}", p.m())?;
        }
        writeln!(f, "Corrects: {}", self.corrects())?;
        writeln!(f, "Total examples: {}", self.n())?;
        let accuracy = self.accuracy();
        if accuracy.is_nan() {
            return write!(f, "Accuracy: n/a");
        }
        write!(f, "Accuracy: {accuracy:.4}")?;
        if let Ok(sd) = self.stddev() {
            write!(f, " (+-{sd:.4})")?;
        }
        Ok(())
    }
}
