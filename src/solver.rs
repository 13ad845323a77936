//! Linear solve of the reduced system `K_r u = F_r`.
//!
//! The analysis only needs "solve a symmetric system", so the back-end sits
//! behind [`LinearSolver`]. Both implementations here factorise a dense
//! nalgebra matrix, which is adequate for the chain sizes this crate targets.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::errors::SolveError;

/// Linear solver interface.
pub trait LinearSolver {
    /// Solve `matrix * x = rhs` for `x`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] when the system is empty, badly shaped or cannot
    /// be factorised.
    fn solve(&self, matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError>;

    /// Solver name for diagnostics.
    fn name(&self) -> &str;
}

/// Shape checks shared by every back-end.
fn check_system(matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<(), SolveError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(SolveError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(SolveError::Empty);
    }
    if rhs.len() != rows {
        return Err(SolveError::DimensionMismatch {
            order: rows,
            rhs: rhs.len(),
        });
    }
    Ok(())
}

/// A vanishing pivot that slips through factorisation shows up as inf or NaN.
fn finite(solution: DVector<f64>) -> Result<DVector<f64>, SolveError> {
    if solution.iter().all(|value| value.is_finite()) {
        Ok(solution)
    } else {
        Err(SolveError::Singular)
    }
}

/// Dense LU factorisation with partial pivoting.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenseLu;

impl LinearSolver for DenseLu {
    fn solve(&self, matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        check_system(matrix, rhs)?;
        matrix
            .clone()
            .lu()
            .solve(rhs)
            .ok_or(SolveError::Singular)
            .and_then(finite)
    }

    fn name(&self) -> &str {
        "dense LU"
    }
}

/// Dense Cholesky factorisation for symmetric positive definite systems.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenseCholesky;

impl LinearSolver for DenseCholesky {
    fn solve(&self, matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        check_system(matrix, rhs)?;
        let factor = matrix
            .clone()
            .cholesky()
            .ok_or(SolveError::NotPositiveDefinite)?;
        finite(factor.solve(rhs))
    }

    fn name(&self) -> &str {
        "dense Cholesky"
    }
}

/// Solver selection for [`AnalysisOptions`](crate::AnalysisOptions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// [`DenseLu`].
    #[default]
    Lu,
    /// [`DenseCholesky`].
    Cholesky,
}

impl SolverKind {
    /// Instantiate the selected back-end.
    #[must_use]
    pub fn build(self) -> Box<dyn LinearSolver> {
        match self {
            SolverKind::Lu => Box::new(DenseLu),
            SolverKind::Cholesky => Box::new(DenseCholesky),
        }
    }
}
