use crate::core::attributes::Attribute;
use crate::core::dataset::Dataset;
use std::fmt;

/// Writes the dataset in the same text format the parser reads.
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@dataset {}", self.name())?;
        writeln!(f)?;
        write!(f, "{}", self.attributes())?;
        writeln!(f)?;
        writeln!(f, "@examples")?;
        writeln!(f)?;

        for example in self.examples() {
            for (i, (value, attribute)) in example
                .values()
                .iter()
                .zip(self.attributes().iter())
                .enumerate()
            {
                if i > 0 {
                    write!(f, " ")?;
                }
                match attribute {
                    Attribute::Numeric(_) => write!(f, "{value}")?,
                    Attribute::Nominal(nominal) => {
                        let label = nominal.value_at(*value as usize).map_err(|_| fmt::Error)?;
                        write!(f, "{label}")?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
