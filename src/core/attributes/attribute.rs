use super::{NominalAttribute, NumericAttribute};
use std::fmt;

/// Column description: either a real-valued column or a categorical one
/// with a fixed, ordered domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    Numeric(NumericAttribute),
    Nominal(NominalAttribute),
}

/// Number of distinct values an attribute can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainSize {
    Unbounded,
    Finite(usize),
}

impl Attribute {
    pub fn numeric(name: impl Into<String>) -> Attribute {
        Attribute::Numeric(NumericAttribute::new(name.into()))
    }

    pub fn nominal<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Attribute {
        Attribute::Nominal(NominalAttribute::with_values(
            name.into(),
            values.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn name(&self) -> &str {
        match self {
            Attribute::Numeric(a) => &a.name,
            Attribute::Nominal(a) => &a.name,
        }
    }

    pub fn size(&self) -> DomainSize {
        match self {
            Attribute::Numeric(_) => DomainSize::Unbounded,
            Attribute::Nominal(a) => DomainSize::Finite(a.len()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Attribute::Numeric(_))
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self, Attribute::Nominal(_))
    }

    pub fn as_nominal(&self) -> Option<&NominalAttribute> {
        match self {
            Attribute::Nominal(a) => Some(a),
            Attribute::Numeric(_) => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Numeric(a) => write!(f, "@attribute {} numeric", a.name),
            Attribute::Nominal(a) => {
                write!(f, "@attribute {}", a.name)?;
                for value in a.values() {
                    write!(f, " {value}")?;
                }
                Ok(())
            }
        }
    }
}
