//! Readers for model files.
//!
//! Two formats are understood. The comma separated format lays a model out as
//!
//! ```text
//! n_dof, n_node, n_unused, n_elem, n_force, n_load
//! E, nu
//! id, x, y, flag                              (n_node lines)
//! id, node1, node2, unused, unused, thickness (n_elem lines)
//! element, unused, unused, force              (every remaining line)
//! ```
//!
//! and a `.json` file holds a serialised [`Model`].

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::errors::InputError;
use crate::model::{Element, Load, Material, Model, Node, Point};

/// Read a model, choosing the format from the file extension.
///
/// # Errors
///
/// Returns [`InputError`] when the file cannot be read or parsed.
pub fn read_model<P: AsRef<Path>>(path: P) -> Result<Model, InputError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    if is_json {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    } else {
        parse_model(&fs::read_to_string(path)?)
    }
}

/// One non-blank input line with its one based line number.
struct Record<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl Record<'_> {
    fn error(&self, message: impl Into<String>) -> InputError {
        InputError::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    fn expect_len(&self, what: &str, len: usize) -> Result<(), InputError> {
        if self.fields.len() == len {
            Ok(())
        } else {
            Err(self.error(format!(
                "{what} needs {len} fields, found {}",
                self.fields.len()
            )))
        }
    }

    fn number<T: FromStr>(&self, index: usize) -> Result<T, InputError> {
        let field = self.fields[index];
        field
            .parse()
            .map_err(|_| self.error(format!("field {} is not a number: {field:?}", index + 1)))
    }

    /// Counts and ids may be written as `3` or `3.0`.
    fn index(&self, index: usize) -> Result<usize, InputError> {
        let value: f64 = self.number(index)?;
        if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Ok(value as usize)
        } else {
            Err(self.error(format!(
                "field {} is not a non-negative integer: {value}",
                index + 1
            )))
        }
    }
}

/// Section counts from the header line.
struct Header {
    nodes: usize,
    elements: usize,
    loads: usize,
}

fn take_section<'a>(
    records: &mut impl Iterator<Item = Record<'a>>,
    section: &'static str,
    declared: usize,
) -> Result<Vec<Record<'a>>, InputError> {
    let taken: Vec<Record<'a>> = records.take(declared).collect();
    if taken.len() == declared {
        Ok(taken)
    } else {
        Err(InputError::CountMismatch {
            section,
            declared,
            found: taken.len(),
        })
    }
}

fn missing(what: &str) -> InputError {
    InputError::Parse {
        line: 0,
        message: format!("missing {what} line"),
    }
}

/// Parse the comma separated model format.
///
/// # Errors
///
/// Returns [`InputError::Parse`] for malformed lines and
/// [`InputError::CountMismatch`] when the node or element sections are
/// shorter than declared, or when the number of load lines differs from
/// `n_load`.
///
/// # Examples
/// ```
/// use barchain::input::parse_model;
///
/// let text = "1, 3, 0, 2, 0, 1\n100, 0.3\n1, 0, 0, 0\n2, 1, 0, 0\n3, 2, 0, 0\n\
///             1, 1, 2, 0, 0, 1\n2, 2, 3, 0, 0, 1\n2, 0, 0, 10\n";
/// let model = parse_model(text).unwrap();
/// assert_eq!(model.nodes.len(), 3);
/// assert_eq!(model.loads[0].force, 10.0);
/// ```
pub fn parse_model(text: &str) -> Result<Model, InputError> {
    let mut records = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Record {
            line: index + 1,
            fields: line.split(',').map(str::trim).collect(),
        });

    let header = records.next().ok_or_else(|| missing("header"))?;
    header.expect_len("header", 6)?;
    let counts = Header {
        nodes: header.index(1)?,
        elements: header.index(3)?,
        loads: header.index(5)?,
    };

    let material = records.next().ok_or_else(|| missing("material"))?;
    material.expect_len("material", 2)?;
    let material = Material::new(material.number(0)?, material.number(1)?);

    let nodes = take_section(&mut records, "nodes", counts.nodes)?
        .iter()
        .map(|record| {
            record.expect_len("node", 4)?;
            Ok(Node::new(
                record.index(0)?,
                Point::new(record.number(1)?, record.number(2)?),
                record.number(3)?,
            ))
        })
        .collect::<Result<Vec<_>, InputError>>()?;

    let elements = take_section(&mut records, "elements", counts.elements)?
        .iter()
        .map(|record| {
            record.expect_len("element", 6)?;
            Ok(Element {
                id: record.index(0)?,
                node1: record.index(1)?,
                node2: record.index(2)?,
                unused: [record.number(3)?, record.number(4)?],
                thickness: record.number(5)?,
            })
        })
        .collect::<Result<Vec<_>, InputError>>()?;

    let loads = records
        .map(|record| {
            record.expect_len("load", 4)?;
            Ok(Load {
                element: record.index(0)?,
                unused: [record.number(1)?, record.number(2)?],
                force: record.number(3)?,
            })
        })
        .collect::<Result<Vec<_>, InputError>>()?;
    if counts.loads != loads.len() {
        return Err(InputError::CountMismatch {
            section: "loads",
            declared: counts.loads,
            found: loads.len(),
        });
    }

    debug!(
        "parsed {} nodes, {} elements, {} loads",
        nodes.len(),
        elements.len(),
        loads.len()
    );
    Ok(Model {
        material,
        nodes,
        elements,
        loads,
    })
}
