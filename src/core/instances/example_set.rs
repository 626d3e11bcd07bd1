use crate::core::instances::Example;

/// Ordered rows. Interpretation of the values is left to the attribute set
/// of the owning dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExampleSet {
    examples: Vec<Example>,
}

impl ExampleSet {
    pub fn new() -> ExampleSet {
        ExampleSet::default()
    }

    pub fn with_capacity(capacity: usize) -> ExampleSet {
        ExampleSet {
            examples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, example: Example) {
        self.examples.push(example);
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }
}

impl FromIterator<Example> for ExampleSet {
    fn from_iter<I: IntoIterator<Item = Example>>(iter: I) -> Self {
        ExampleSet {
            examples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExampleSet {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
