//! Options that steer an analysis without changing the model.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::solver::SolverKind;

/// How several load entries addressing the same element are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadAggregation {
    /// The entry read last replaces earlier ones.
    #[default]
    LastWins,
    /// All entries are added together.
    Sum,
}

/// Analysis options.
///
/// # Examples
/// ```
/// use barchain::{AnalysisOptions, LoadAggregation, SolverKind};
///
/// let options: AnalysisOptions = serde_json::from_str(r#"{ "load_aggregation": "sum" }"#).unwrap();
/// assert_eq!(options.load_aggregation, LoadAggregation::Sum);
/// assert_eq!(options.solver, SolverKind::Lu);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Policy for duplicate load entries.
    pub load_aggregation: LoadAggregation,
    /// Back-end used for the reduced linear solve.
    pub solver: SolverKind,
}

impl AnalysisOptions {
    /// Read options from a JSON file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] when the file cannot be opened and
    /// [`InputError::Json`] when it does not decode.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
