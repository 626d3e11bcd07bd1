use crate::core::attribute_set::AttributeSet;
use crate::core::attributes::Attribute;
use crate::core::dataset::Dataset;
use crate::core::instances::Example;

const SUNNY: f64 = 0.0;
const RAIN: f64 = 1.0;
const YES: f64 = 0.0;
const NO: f64 = 1.0;

/// `outlook {sunny, rain}` and class `play {yes, no}`, 10 rows:
/// sunny/yes x2, sunny/no x3, rain/yes x4, rain/no x1.
pub fn weather_nominal() -> Dataset {
    let attrs = AttributeSet::with_attributes(vec![
        Attribute::nominal("outlook", ["sunny", "rain"]),
        Attribute::nominal("play", ["yes", "no"]),
    ]);
    let mut rows = Vec::with_capacity(10);
    for (outlook, play, times) in [(SUNNY, YES, 2), (SUNNY, NO, 3), (RAIN, YES, 4), (RAIN, NO, 1)] {
        for _ in 0..times {
            rows.push(Example::new(vec![outlook, play]));
        }
    }
    build("weather", attrs, rows)
}

/// `outlook = sunny` with a placeholder class value.
pub fn sunny_query() -> Example {
    Example::new(vec![SUNNY, YES])
}

/// `n` rows, all of class `A`, over `outlook {sunny, rain}`,
/// `temperature numeric` and class `{A, B}`.
pub fn homogeneous(n: usize) -> Dataset {
    let attrs = AttributeSet::with_attributes(vec![
        Attribute::nominal("outlook", ["sunny", "rain"]),
        Attribute::numeric("temperature"),
        Attribute::nominal("class", ["A", "B"]),
    ]);
    let rows = (0..n)
        .map(|i| {
            let outlook = if i % 2 == 0 { SUNNY } else { RAIN };
            Example::new(vec![outlook, 60.0 + i as f64, 0.0])
        })
        .collect();
    build("homogeneous", attrs, rows)
}

fn build(name: &str, attrs: AttributeSet, rows: Vec<Example>) -> Dataset {
    match Dataset::from_parts(name, attrs, rows) {
        Ok(ds) => ds,
        Err(e) => panic!("fixture '{name}' is malformed: {e}"),
    }
}
