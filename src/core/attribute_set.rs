use crate::core::attributes::{Attribute, NominalAttribute};
use crate::error::{LearnError, Result};
use std::fmt;
use std::sync::Arc;

/// Shared, read-only handle to an attribute set. Every dataset derived from
/// one source (splits, folds, scaled copies) holds a clone of the same handle.
pub type AttributeSetRef = Arc<AttributeSet>;

/// Ordered column descriptions plus the designated class column.
#[derive(Clone, PartialEq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
    class_index: usize,
}

impl AttributeSet {
    pub fn new() -> AttributeSet {
        AttributeSet {
            attributes: Vec::new(),
            class_index: 0,
        }
    }

    /// Builds a set whose class is the last attribute.
    pub fn with_attributes(attributes: Vec<Attribute>) -> AttributeSet {
        let class_index = attributes.len().saturating_sub(1);
        AttributeSet {
            attributes,
            class_index,
        }
    }

    pub fn add(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn attribute(&self, index: usize) -> Result<&Attribute> {
        self.attributes
            .get(index)
            .ok_or(LearnError::IndexOutOfRange {
                index,
                len: self.attributes.len(),
            })
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.attributes
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| LearnError::NotFound(format!("attribute '{name}' does not exist")))
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn set_class_index(&mut self, class_index: usize) -> Result<()> {
        if class_index >= self.attributes.len() {
            return Err(LearnError::InvalidArgument(format!(
                "class index {class_index} is out of bounds for {} attributes",
                self.attributes.len()
            )));
        }
        self.class_index = class_index;
        Ok(())
    }

    pub fn class_attribute(&self) -> Result<&Attribute> {
        self.attribute(self.class_index)
    }

    pub fn class_domain(&self) -> Result<&NominalAttribute> {
        let class = self.class_attribute()?;
        class.as_nominal().ok_or_else(|| {
            LearnError::InvalidArgument(format!(
                "class attribute '{}' must be nominal",
                class.name()
            ))
        })
    }

    pub fn num_classes(&self) -> Result<usize> {
        Ok(self.class_domain()?.len())
    }

    pub fn has_numeric_attributes(&self) -> bool {
        self.attributes.iter().any(Attribute::is_numeric)
    }

    /// Indices of every attribute except the class, in column order.
    pub fn predictor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.attributes.len()).filter(move |&i| i != self.class_index)
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attribute in &self.attributes {
            writeln!(f, "{attribute}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeSet")
            .field("class_index", &self.class_index)
            .field("n_attributes", &self.attributes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> AttributeSet {
        AttributeSet::with_attributes(vec![
            Attribute::nominal("outlook", ["sunny", "rain"]),
            Attribute::numeric("temperature"),
            Attribute::nominal("play", ["yes", "no"]),
        ])
    }

    #[test]
    fn class_defaults_to_last_attribute() {
        let attrs = weather();
        assert_eq!(attrs.class_index(), 2);
        assert_eq!(attrs.num_classes().unwrap(), 2);
        assert!(attrs.has_numeric_attributes());
        assert_eq!(attrs.predictor_indices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn set_class_index_checks_bounds() {
        let mut attrs = weather();
        assert!(matches!(
            attrs.set_class_index(3),
            Err(LearnError::InvalidArgument(_))
        ));
        attrs.set_class_index(0).unwrap();
        assert_eq!(attrs.predictor_indices().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn numeric_class_is_rejected() {
        let mut attrs = weather();
        attrs.set_class_index(1).unwrap();
        assert!(matches!(
            attrs.num_classes(),
            Err(LearnError::InvalidArgument(_))
        ));
    }

    #[test]
    fn lookup_by_name() {
        let attrs = weather();
        assert_eq!(attrs.index_of("temperature").unwrap(), 1);
        assert!(matches!(
            attrs.index_of("wind"),
            Err(LearnError::NotFound(_))
        ));
    }
}
