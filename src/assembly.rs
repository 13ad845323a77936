//! Global stiffness and load assembly.
//!
//! Degrees of freedom are numbered by element position: the element at
//! position `i` contributes to global rows and columns `i` and `i + 1`. This
//! only describes a structure when the elements form one connected chain in
//! input order, so [`assemble`] checks that before scattering anything.

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};
use nalgebra::{DMatrix, DVector};

use crate::config::LoadAggregation;
use crate::element;
use crate::errors::{AnalysisError, MeshError};
use crate::model::{Element, Load, Node};

/// Assembled global system.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalSystem {
    /// Symmetric stiffness matrix of order `elements + 1`.
    pub stiffness: DMatrix<f64>,
    /// Load vector of length `elements + 1`.
    pub force: DVector<f64>,
}

impl GlobalSystem {
    /// Number of chain positions (rows of the system).
    #[must_use]
    pub fn order(&self) -> usize {
        self.force.len()
    }
}

/// Length of the element found at `position`.
///
/// # Errors
///
/// Returns [`MeshError::UnknownNode`] for unresolved node ids and
/// [`AnalysisError::ZeroLengthElement`] when both ends coincide.
pub fn element_length(
    position: usize,
    element: &Element,
    nodes: &[Node],
) -> Result<f64, AnalysisError> {
    let (start, end) = element.endpoints(position, nodes)?;
    element::length(start.position, end.position).map_err(|source| {
        AnalysisError::ZeroLengthElement {
            element: position,
            source,
        }
    })
}

/// Check that `elements` form a single chain over `nodes`.
///
/// The chain is walked in input order. The first element starts at the node it
/// does not share with the second one, and every later element must touch the
/// node the previous element ended on. Element direction is ignored.
///
/// # Errors
///
/// Returns [`MeshError::TooFewElements`] for fewer than two elements,
/// [`MeshError::NodeCountMismatch`] unless there is exactly one node more than
/// elements, [`MeshError::UnknownNode`] for unresolved node ids,
/// [`MeshError::BrokenChain`] when an element does not continue from the
/// current end and [`MeshError::RevisitedNode`] when the walk reaches a node
/// twice.
pub fn check_chain(nodes: &[Node], elements: &[Element]) -> Result<(), MeshError> {
    if elements.len() < 2 {
        return Err(MeshError::TooFewElements(elements.len()));
    }
    if nodes.len() != elements.len() + 1 {
        return Err(MeshError::NodeCountMismatch {
            nodes: nodes.len(),
            dofs: elements.len() + 1,
        });
    }
    for (position, element) in elements.iter().enumerate() {
        element.endpoints(position, nodes)?;
    }

    let (first, second) = (&elements[0], &elements[1]);
    let (start, mut end) = if second.other_end(first.node2).is_some() {
        (first.node1, first.node2)
    } else if second.other_end(first.node1).is_some() {
        (first.node2, first.node1)
    } else {
        return Err(MeshError::BrokenChain {
            element: 0,
            next: 1,
        });
    };
    let mut visited = HashSet::from([start]);
    if !visited.insert(end) {
        return Err(MeshError::RevisitedNode {
            element: 0,
            node: end,
        });
    }

    for (position, element) in elements.iter().enumerate().skip(1) {
        let next = element
            .other_end(end)
            .ok_or(MeshError::BrokenChain {
                element: position - 1,
                next: position,
            })?;
        if !visited.insert(next) {
            return Err(MeshError::RevisitedNode {
                element: position,
                node: next,
            });
        }
        end = next;
    }
    Ok(())
}

/// Load intensity per element key under the given aggregation policy.
#[must_use]
pub fn load_table(loads: &[Load], aggregation: LoadAggregation) -> HashMap<usize, f64> {
    let mut table = HashMap::with_capacity(loads.len());
    for load in loads {
        match aggregation {
            LoadAggregation::LastWins => {
                if let Some(previous) = table.insert(load.element, load.force) {
                    warn!(
                        "load {} on element {} replaced by {}",
                        previous, load.element, load.force
                    );
                }
            }
            LoadAggregation::Sum => {
                *table.entry(load.element).or_insert(0.0) += load.force;
            }
        }
    }
    table
}

/// Assemble the global stiffness matrix and load vector.
///
/// Each element at position `i` picks up the load whose key equals `i + 1`,
/// or zero when there is none.
///
/// # Errors
///
/// Returns [`AnalysisError::Mesh`] when the elements do not form a chain and
/// [`AnalysisError::ZeroLengthElement`] for coincident end nodes.
///
/// # Examples
/// ```
/// use barchain::{assemble, point, Element, LoadAggregation, Node};
///
/// let nodes = [
///     Node::new(1, point(0.0, 0.0), 0.0),
///     Node::new(2, point(1.0, 0.0), 0.0),
///     Node::new(3, point(2.0, 0.0), 0.0),
/// ];
/// let elements = [Element::new(1, 1, 2, 1.0), Element::new(2, 2, 3, 1.0)];
/// let system = assemble(100.0, &nodes, &elements, &[], LoadAggregation::LastWins).unwrap();
/// assert_eq!(system.stiffness[(1, 1)], 200.0);
/// ```
pub fn assemble(
    youngs_modulus: f64,
    nodes: &[Node],
    elements: &[Element],
    loads: &[Load],
    aggregation: LoadAggregation,
) -> Result<GlobalSystem, AnalysisError> {
    check_chain(nodes, elements)?;

    let order = elements.len() + 1;
    let mut stiffness = DMatrix::zeros(order, order);
    let mut force = DVector::zeros(order);
    let loads = load_table(loads, aggregation);

    for (position, element) in elements.iter().enumerate() {
        let length = element_length(position, element, nodes)?;
        let intensity = loads.get(&(position + 1)).copied().unwrap_or(0.0);
        let into_error = |source| AnalysisError::ZeroLengthElement {
            element: position,
            source,
        };
        let k_local = element::stiffness(youngs_modulus, element.area(), length).map_err(into_error)?;
        let f_local = element::equivalent_load(intensity, length).map_err(into_error)?;
        debug!(
            "element {} at position {}: length {}, load {}",
            element.id, position, length, intensity
        );

        let mut block = stiffness.fixed_view_mut::<2, 2>(position, position);
        block += k_local;
        let mut segment = force.fixed_rows_mut::<2>(position);
        segment += f_local;
    }

    info!("assembled {order}x{order} system from {} elements", elements.len());
    Ok(GlobalSystem { stiffness, force })
}
