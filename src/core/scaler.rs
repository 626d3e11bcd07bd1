use crate::core::attribute_set::AttributeSetRef;
use crate::core::attributes::Attribute;
use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::error::{LearnError, Result};
use std::sync::Arc;

/// Min-max normalizer for numeric columns. Nominal columns pass through.
#[derive(Clone, Debug, Default)]
pub struct Scaler {
    attributes: Option<AttributeSetRef>,
    ranges: Vec<(f64, f64)>,
}

impl Scaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `(min, max)` of every numeric column of `dataset`; nominal
    /// columns record `(0, 0)`. Replaces any previous configuration.
    pub fn configure(&mut self, dataset: &Dataset) -> Result<()> {
        let attributes = dataset.attributes();
        let mut ranges = Vec::with_capacity(attributes.len());
        for (i, attribute) in attributes.iter().enumerate() {
            match attribute {
                Attribute::Nominal(_) => ranges.push((0.0, 0.0)),
                Attribute::Numeric(_) => {
                    let mut min = f64::INFINITY;
                    let mut max = f64::NEG_INFINITY;
                    for example in dataset.examples() {
                        let v = example.value(i)?;
                        min = min.min(v);
                        max = max.max(v);
                    }
                    ranges.push((min, max));
                }
            }
        }
        self.attributes = Some(Arc::clone(attributes));
        self.ranges = ranges;
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.attributes.is_some()
    }

    pub fn range(&self, attribute: usize) -> Option<(f64, f64)> {
        self.ranges.get(attribute).copied()
    }

    /// Maps every numeric value into `[0, 1]`, clamping values outside the
    /// configured range. A column that was constant maps to `0`.
    pub fn scale(&self, example: &Example) -> Result<Example> {
        let attributes = self.attributes.as_ref().ok_or_else(|| {
            LearnError::InvalidArgument("scaler used before configure".into())
        })?;
        if example.len() != attributes.len() {
            return Err(LearnError::InvalidArgument(format!(
                "example has {} values but the scaler was configured for {}",
                example.len(),
                attributes.len()
            )));
        }

        let mut scaled = example.clone();
        for (i, attribute) in attributes.iter().enumerate() {
            if !attribute.is_numeric() {
                continue;
            }
            let (min, max) = self.ranges[i];
            let v = example.value(i)?;
            let s = if v <= min {
                0.0
            } else if v >= max {
                1.0
            } else {
                (v - min) / (max - min)
            };
            scaled.set_value(i, s)?;
        }
        Ok(scaled)
    }

    /// Scaled copy of `dataset`; the input is left untouched.
    pub fn scale_dataset(&self, dataset: &Dataset) -> Result<Dataset> {
        let mut scaled = dataset.empty_like();
        for example in dataset.examples() {
            scaled.push_unchecked(self.scale(example)?);
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attribute_set::AttributeSet;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn mixed() -> Dataset {
        let attrs = AttributeSet::with_attributes(vec![
            Attribute::numeric("x"),
            Attribute::nominal("color", ["red", "green", "blue"]),
            Attribute::nominal("class", ["a", "b"]),
        ]);
        Dataset::from_parts(
            "mixed",
            attrs,
            vec![
                Example::new(vec![10.0, 2.0, 0.0]),
                Example::new(vec![20.0, 1.0, 1.0]),
                Example::new(vec![30.0, 0.0, 0.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn min_max_mid_map_to_unit_interval() {
        let ds = mixed();
        let mut scaler = Scaler::new();
        scaler.configure(&ds).unwrap();

        let at = |x: f64| {
            scaler
                .scale(&Example::new(vec![x, 1.0, 0.0]))
                .unwrap()
                .value(0)
                .unwrap()
        };
        assert!(approx_eq(at(10.0), 0.0, 1e-12));
        assert!(approx_eq(at(30.0), 1.0, 1e-12));
        assert!(approx_eq(at(20.0), 0.5, 1e-12));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let ds = mixed();
        let mut scaler = Scaler::new();
        scaler.configure(&ds).unwrap();
        let low = scaler.scale(&Example::new(vec![-5.0, 0.0, 0.0])).unwrap();
        let high = scaler.scale(&Example::new(vec![99.0, 0.0, 0.0])).unwrap();
        assert_eq!(low.value(0).unwrap(), 0.0);
        assert_eq!(high.value(0).unwrap(), 1.0);
    }

    #[test]
    fn scaling_is_idempotent_on_boundaries() {
        let ds = mixed();
        let mut scaler = Scaler::new();
        scaler.configure(&ds).unwrap();
        for x in [10.0, 20.0, 30.0] {
            let once = scaler.scale(&Example::new(vec![x, 0.0, 0.0])).unwrap();
            let mut rescaler = Scaler::new();
            rescaler.configure(&scaler.scale_dataset(&ds).unwrap()).unwrap();
            let twice = rescaler.scale(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn nominal_values_pass_through() {
        let ds = mixed();
        let mut scaler = Scaler::new();
        scaler.configure(&ds).unwrap();
        assert_eq!(scaler.range(1), Some((0.0, 0.0)));
        let scaled = scaler.scale_dataset(&ds).unwrap();
        for (orig, s) in ds.examples().iter().zip(scaled.examples()) {
            assert_eq!(orig.value(1).unwrap(), s.value(1).unwrap());
            assert_eq!(orig.value(2).unwrap(), s.value(2).unwrap());
        }
        assert_eq!(ds.examples().get(0).unwrap().value(0).unwrap(), 10.0);
        assert!(Arc::ptr_eq(scaled.attributes(), ds.attributes()));
    }

    #[test]
    fn constant_column_scales_to_zero() {
        let attrs = AttributeSet::with_attributes(vec![
            Attribute::numeric("x"),
            Attribute::nominal("class", ["a"]),
        ]);
        let ds = Dataset::from_parts(
            "flat",
            attrs,
            vec![Example::new(vec![4.0, 0.0]), Example::new(vec![4.0, 0.0])],
        )
        .unwrap();
        let mut scaler = Scaler::new();
        scaler.configure(&ds).unwrap();
        let s = scaler.scale(&Example::new(vec![4.0, 0.0])).unwrap();
        assert_eq!(s.value(0).unwrap(), 0.0);
    }

    #[test]
    fn unconfigured_scaler_fails_fast() {
        let scaler = Scaler::new();
        assert!(matches!(
            scaler.scale(&Example::new(vec![1.0])),
            Err(LearnError::InvalidArgument(_))
        ));
    }
}
