//! Mapping the reduced solution back onto full displacement fields.
//!
//! Two fields are produced from the reduced solution `u_r`:
//!
//! * the chain field, `u_r` with the two fixed ends re-inserted as zeros, which
//!   is what stress recovery differentiates;
//! * the flag-expanded field of `2 * (nodes - 1)` entries, where nodes with a
//!   nonzero constraint flag take consecutive pairs of `u_r`.
//!
//! The per-node table used for reporting reads the flag-expanded field back
//! with the opposite flag test. Both tests are kept exactly as the input
//! format defines them; which of the two conventions means "free" is an open
//! question for the model owner.

use nalgebra::DVector;

use crate::errors::AnalysisError;
use crate::model::Node;

/// Re-insert the fixed chain ends around the reduced solution.
///
/// # Examples
/// ```
/// use barchain::expand::chain_field;
/// use nalgebra::DVector;
///
/// let field = chain_field(&DVector::from_column_slice(&[0.025]));
/// assert_eq!(field.as_slice(), &[0.0, 0.025, 0.0]);
/// ```
#[must_use]
pub fn chain_field(reduced: &DVector<f64>) -> DVector<f64> {
    let mut field = DVector::zeros(reduced.len() + 2);
    field.rows_mut(1, reduced.len()).copy_from(reduced);
    field
}

/// Scatter the reduced solution over nodes `1..nodes.len()` with a nonzero
/// constraint flag, two values per node, in node order.
///
/// Nodes with a zero flag keep zero and consume nothing. Node 0 never receives
/// values.
///
/// # Errors
///
/// Returns [`AnalysisError::ExhaustedDisplacements`] when flagged nodes need
/// more values than `reduced` holds.
pub fn expand(reduced: &DVector<f64>, nodes: &[Node]) -> Result<DVector<f64>, AnalysisError> {
    let mut full = DVector::zeros(2 * nodes.len().saturating_sub(1));
    let mut cursor = 0;
    for (index, node) in nodes.iter().enumerate().skip(1) {
        if !node.is_flagged() {
            continue;
        }
        if cursor + 2 > reduced.len() {
            return Err(AnalysisError::ExhaustedDisplacements {
                node: index,
                needed: cursor + 2,
                available: reduced.len(),
            });
        }
        let base = 2 * (index - 1);
        full[base] = reduced[cursor];
        full[base + 1] = reduced[cursor + 1];
        cursor += 2;
    }
    Ok(full)
}

/// Per-node `(x, y)` displacement pairs for reporting.
///
/// The first node is always zero. Each later node with a zero constraint
/// flag takes the next pair of `full`; flagged nodes stay at zero.
#[must_use]
pub fn nodal_pairs(full: &DVector<f64>, nodes: &[Node]) -> Vec<[f64; 2]> {
    let mut pairs = vec![[0.0; 2]; nodes.len()];
    let mut cursor = 0;
    for (index, node) in nodes.iter().enumerate().skip(1) {
        if node.is_flagged() {
            continue;
        }
        // Zero-flag nodes never outnumber the pairs in `full`.
        if let (Some(&x), Some(&y)) = (full.get(cursor), full.get(cursor + 1)) {
            pairs[index] = [x, y];
        }
        cursor += 2;
    }
    pairs
}
