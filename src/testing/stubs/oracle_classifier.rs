use crate::classifiers::Classifier;
use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::error::Result;

/// Reads the answer off the example's own class column.
#[derive(Default)]
pub struct OracleClassifier {
    num_classes: usize,
    class_index: usize,
}

impl OracleClassifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Classifier for OracleClassifier {
    fn train(&mut self, dataset: &Dataset) -> Result<()> {
        self.num_classes = dataset.num_classes()?;
        self.class_index = dataset.class_index();
        Ok(())
    }

    fn predict_distribution(&self, example: &Example) -> Result<Vec<f64>> {
        let y = example.label(self.class_index)?;
        let mut v = vec![0.0; self.num_classes.max(2)];
        if y < v.len() {
            v[y] = 1.0;
        }
        Ok(v)
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Self::new())
    }

    fn name(&self) -> &'static str {
        "oracle"
    }
}
