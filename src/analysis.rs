//! End-to-end analysis of a bar chain.

use log::info;
use nalgebra::DVector;
use serde::Serialize;

use crate::assembly::assemble;
use crate::boundary::reduce;
use crate::config::AnalysisOptions;
use crate::errors::AnalysisError;
use crate::expand::{chain_field, expand, nodal_pairs};
use crate::model::Model;
use crate::solver::LinearSolver;
use crate::stress::{recover, StressRecord};

/// Results of one analysis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Solution of the reduced system, one value per interior chain position.
    pub reduced: Vec<f64>,
    /// Reduced solution with zeros at both fixed ends.
    pub chain: Vec<f64>,
    /// Flag-expanded field of `2 * (nodes - 1)` entries.
    pub expanded: Vec<f64>,
    /// Per-node `(x, y)` displacements in node order.
    pub nodal: Vec<[f64; 2]>,
    /// One record per element except the last.
    pub stresses: Vec<StressRecord>,
}

/// Analyse `model` with the solver named in `options`.
///
/// # Errors
///
/// Returns [`AnalysisError`] when the mesh is malformed, an element is
/// degenerate, the reduced system cannot be solved or the constraint flags
/// ask for more values than were solved.
pub fn analyse(model: &Model, options: &AnalysisOptions) -> Result<AnalysisResult, AnalysisError> {
    let solver = options.solver.build();
    analyse_with(model, options, solver.as_ref())
}

/// Analyse `model` with an explicit solver back-end.
///
/// # Errors
///
/// See [`analyse`].
pub fn analyse_with(
    model: &Model,
    options: &AnalysisOptions,
    solver: &dyn LinearSolver,
) -> Result<AnalysisResult, AnalysisError> {
    let youngs_modulus = model.material.youngs_modulus;
    let system = assemble(
        youngs_modulus,
        &model.nodes,
        &model.elements,
        &model.loads,
        options.load_aggregation,
    )?;
    let reduced_system = reduce(&system, &model.nodes)?;

    info!(
        "solving {} unknowns with {}",
        reduced_system.order(),
        solver.name()
    );
    let reduced = solver.solve(&reduced_system.stiffness, &reduced_system.force)?;

    let chain = chain_field(&reduced);
    let expanded = expand(&reduced, &model.nodes)?;
    let nodal = nodal_pairs(&expanded, &model.nodes);
    let stresses = recover(&chain, youngs_modulus, &model.nodes, &model.elements)?;
    info!("recovered {} stress records", stresses.len());

    Ok(AnalysisResult {
        reduced: into_vec(reduced),
        chain: into_vec(chain),
        expanded: into_vec(expanded),
        nodal,
        stresses,
    })
}

/// Copy a column vector into a plain `Vec` for the serialisable result.
fn into_vec(vector: DVector<f64>) -> Vec<f64> {
    vector.as_slice().to_vec()
}
