use crate::core::attribute_set::AttributeSet;
use crate::core::attributes::{Attribute, NominalAttribute};
use crate::core::dataset::Dataset;
use crate::core::instances::Example;
use crate::error::{LearnError, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;

const DATASET: &str = "@dataset";
const ATTRIBUTE: &str = "@attribute";
const EXAMPLES: &str = "@examples";
const NUMERIC: &str = "numeric";

fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('%')
}

fn parse_error(line: usize, message: impl Into<String>) -> LearnError {
    LearnError::Parse {
        line,
        message: message.into(),
    }
}

/// Reads and parses a dataset file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let text = fs::read_to_string(path)?;
    parse_dataset(&text)
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        load_dataset(path)
    }
}

/// Parses the `@dataset` / `@attribute` / `@examples` text format. The class
/// is the last attribute.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut header_tokens: Vec<(usize, &str)> = Vec::new();
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let mut data_found = false;

    for (line_no, line) in lines.by_ref() {
        if is_comment_or_empty(line) {
            continue;
        }
        let mut tokens = line.split_whitespace().peekable();
        while let Some(token) = tokens.next() {
            if token == EXAMPLES {
                if tokens.peek().is_some() {
                    return Err(parse_error(line_no, "unexpected tokens after @examples"));
                }
                data_found = true;
                break;
            }
            header_tokens.push((line_no, token));
        }
        if data_found {
            break;
        }
    }

    if !data_found {
        let last = text.lines().count();
        return Err(parse_error(last, "file ended before @examples"));
    }

    let (name, attributes) = parse_header(&header_tokens)?;
    let mut dataset = Dataset::new(name, Arc::new(attributes));

    for (line_no, line) in lines {
        if is_comment_or_empty(line) {
            continue;
        }
        let example = parse_example_line(dataset.attributes(), line, line_no)?;
        dataset.add(example)?;
    }

    Ok(dataset)
}

fn parse_header(tokens: &[(usize, &str)]) -> Result<(String, AttributeSet)> {
    let mut it = tokens.iter().copied().peekable();

    match it.next() {
        Some((_, DATASET)) => {}
        Some((line, other)) => {
            return Err(parse_error(
                line,
                format!("expected {DATASET}, found '{other}'"),
            ));
        }
        None => return Err(parse_error(1, format!("missing {DATASET} header"))),
    }
    let name = match it.next() {
        Some((_, t)) if !t.starts_with('@') => t.to_string(),
        _ => {
            let line = tokens.first().map_or(1, |&(l, _)| l);
            return Err(parse_error(line, "dataset name is missing"));
        }
    };

    let mut attributes = AttributeSet::new();
    while let Some((line, token)) = it.next() {
        if token != ATTRIBUTE {
            return Err(parse_error(
                line,
                format!("unsupported header directive '{token}'"),
            ));
        }
        let attr_name = match it.next() {
            Some((_, t)) if !t.starts_with('@') => t.to_string(),
            _ => return Err(parse_error(line, "attribute name is missing")),
        };

        if let Some(&(_, NUMERIC)) = it.peek() {
            it.next();
            attributes.add(Attribute::numeric(attr_name));
            continue;
        }

        let mut nominal = NominalAttribute::new(attr_name);
        while let Some(&(_, value)) = it.peek() {
            if value == ATTRIBUTE {
                break;
            }
            nominal.add_value(value.to_string());
            it.next();
        }
        if nominal.is_empty() {
            return Err(parse_error(
                line,
                format!("attribute '{}' has an empty domain", nominal.name),
            ));
        }
        attributes.add(Attribute::Nominal(nominal));
    }

    if attributes.is_empty() {
        return Err(parse_error(
            tokens.last().map_or(1, |&(l, _)| l),
            "dataset declares no attributes",
        ));
    }
    attributes.set_class_index(attributes.len() - 1)?;
    Ok((name, attributes))
}

fn parse_example_line(
    attributes: &AttributeSet,
    line: &str,
    line_no: usize,
) -> Result<Example> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != attributes.len() {
        return Err(parse_error(
            line_no,
            format!(
                "number of values ({}) differs from number of attributes ({})",
                tokens.len(),
                attributes.len()
            ),
        ));
    }

    let mut values = Vec::with_capacity(tokens.len());
    for (idx, (raw, attribute)) in tokens.iter().zip(attributes.iter()).enumerate() {
        match attribute {
            Attribute::Numeric(_) => {
                let v: f64 = raw.parse().map_err(|_| {
                    parse_error(
                        line_no,
                        format!("invalid numeric value '{raw}' for attribute #{idx}"),
                    )
                })?;
                if !v.is_finite() {
                    return Err(parse_error(
                        line_no,
                        format!("non-finite value '{raw}' for attribute #{idx}"),
                    ));
                }
                values.push(v);
            }
            Attribute::Nominal(nominal) => {
                let pos = nominal.index_of(raw).map_err(|e| match e {
                    LearnError::NotFound(msg) => {
                        LearnError::NotFound(format!("line {line_no}: {msg}"))
                    }
                    other => other,
                })?;
                values.push(pos as f64);
            }
        }
    }
    Ok(Example::new(values))
}
