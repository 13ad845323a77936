//! Fixed-fixed boundary reduction.
//!
//! The two chain ends are held at zero displacement, so their rows, columns
//! and load entries are dropped. No other support pattern is expressed here.

use log::info;
use nalgebra::{DMatrix, DVector};

use crate::assembly::GlobalSystem;
use crate::errors::MeshError;
use crate::model::Node;

/// Interior part of a [`GlobalSystem`].
#[derive(Clone, Debug, PartialEq)]
pub struct ReducedSystem {
    /// Stiffness restricted to the free positions.
    pub stiffness: DMatrix<f64>,
    /// Loads at the free positions.
    pub force: DVector<f64>,
}

impl ReducedSystem {
    /// Number of free degrees of freedom.
    #[must_use]
    pub fn order(&self) -> usize {
        self.force.len()
    }
}

/// Drop the first and last row, column and load entry of `system`.
///
/// The interior range is `[1, nodes.len() - 1)`. The global system is copied,
/// never modified.
///
/// # Errors
///
/// Returns [`MeshError::NodeCountMismatch`] when the node count differs from
/// the system order and [`MeshError::TooFewElements`] when no interior
/// position remains.
pub fn reduce(system: &GlobalSystem, nodes: &[Node]) -> Result<ReducedSystem, MeshError> {
    let order = system.order();
    if nodes.len() != order || system.stiffness.shape() != (order, order) {
        return Err(MeshError::NodeCountMismatch {
            nodes: nodes.len(),
            dofs: order,
        });
    }
    if order < 3 {
        return Err(MeshError::TooFewElements(order.saturating_sub(1)));
    }

    let free = nodes.len() - 2;
    let stiffness = system.stiffness.view((1, 1), (free, free)).into_owned();
    let force = system.force.rows(1, free).into_owned();
    info!("reduced system to {free} free degrees of freedom");
    Ok(ReducedSystem { stiffness, force })
}
