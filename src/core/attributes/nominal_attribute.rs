use crate::error::{LearnError, Result};
use std::collections::HashMap;

/// Categorical column. The position of a value in `values` is the number
/// stored for it in every example.
#[derive(Clone, Debug, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    /// Duplicate labels keep their first position.
    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let mut attribute = NominalAttribute::new(name);
        for value in values {
            attribute.add_value(value);
        }
        attribute
    }

    /// Appends a value to the domain. Only the parser grows a domain, before
    /// any example refers to it.
    pub fn add_value(&mut self, value: String) {
        if self.label_to_index.contains_key(&value) {
            return;
        }
        self.label_to_index.insert(value.clone(), self.values.len());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn index_of(&self, value: &str) -> Result<usize> {
        self.label_to_index.get(value).copied().ok_or_else(|| {
            LearnError::NotFound(format!(
                "value '{value}' is not in the domain of attribute '{}'",
                self.name
            ))
        })
    }

    pub fn value_at(&self, index: usize) -> Result<&str> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or(LearnError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    pub fn is_valid_value(&self, value: &str) -> bool {
        self.label_to_index.contains_key(value)
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook() -> NominalAttribute {
        NominalAttribute::with_values(
            "outlook".into(),
            vec!["sunny".into(), "overcast".into(), "rain".into()],
        )
    }

    #[test]
    fn index_and_value_are_inverse() {
        let a = outlook();
        for (i, v) in a.enumerate_values() {
            assert_eq!(a.index_of(v).unwrap(), i);
            assert_eq!(a.value_at(i).unwrap(), v);
        }
    }

    #[test]
    fn unknown_value_is_not_found() {
        let err = outlook().index_of("snow").unwrap_err();
        assert!(matches!(err, LearnError::NotFound(_)));
        assert!(!outlook().is_valid_value("snow"));
    }

    #[test]
    fn duplicates_keep_first_position() {
        let mut a = outlook();
        a.add_value("sunny".into());
        assert_eq!(a.len(), 3);
        assert_eq!(a.index_of("sunny").unwrap(), 0);
    }

    #[test]
    fn value_at_out_of_range() {
        let err = outlook().value_at(7).unwrap_err();
        assert!(matches!(err, LearnError::IndexOutOfRange { index: 7, len: 3 }));
    }
}
