//! Axial stress recovery.

use nalgebra::DVector;
use serde::Serialize;

use crate::assembly::element_length;
use crate::errors::AnalysisError;
use crate::model::{Element, Node};

/// Stress state of one bar.
///
/// Only the axial component is computed. The transverse and shear components
/// are always zero for a bar and exist so the record lines up with plane
/// stress reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StressRecord {
    /// Axial normal stress.
    pub axial: f64,
    /// Transverse normal stress, always zero.
    pub transverse: f64,
    /// Shear stress, always zero.
    pub shear: f64,
}

impl StressRecord {
    /// Record for a bar carrying `axial` stress.
    #[must_use]
    pub const fn axial(axial: f64) -> Self {
        Self {
            axial,
            transverse: 0.0,
            shear: 0.0,
        }
    }
}

/// Recover `E * (d[i+1] - d[i]) / L` for every element position `i` below
/// `elements.len() - 1`.
///
/// The last element produces no record, so the result holds one record fewer
/// than there are elements and must not be zipped with the element list.
///
/// # Errors
///
/// Returns [`AnalysisError::ShortDisplacementField`] when `displacements` has
/// fewer than `elements.len()` entries, and another [`AnalysisError`] when an
/// element references an unknown node or has zero length.
pub fn recover(
    displacements: &DVector<f64>,
    youngs_modulus: f64,
    nodes: &[Node],
    elements: &[Element],
) -> Result<Vec<StressRecord>, AnalysisError> {
    if displacements.len() < elements.len() {
        return Err(AnalysisError::ShortDisplacementField {
            needed: elements.len(),
            available: displacements.len(),
        });
    }
    let count = elements.len().saturating_sub(1);
    elements
        .iter()
        .take(count)
        .enumerate()
        .map(|(position, element)| {
            let length = element_length(position, element, nodes)?;
            let elongation = displacements[position + 1] - displacements[position];
            Ok(StressRecord::axial(youngs_modulus * elongation / length))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::point;

    fn line(count: usize, spacing: f64) -> (Vec<Node>, Vec<Element>) {
        let nodes = (0..=count)
            .map(|i| Node::new(i + 1, point(spacing * i as f64, 0.0), 0.0))
            .collect();
        let elements = (0..count)
            .map(|i| Element::new(i + 1, i + 1, i + 2, 1.0))
            .collect();
        (nodes, elements)
    }

    #[test]
    fn last_element_is_excluded() {
        let (nodes, elements) = line(4, 1.0);
        let d = DVector::from_column_slice(&[0.0, 1.0, 3.0, 6.0, 10.0]);
        let stresses = recover(&d, 2.0, &nodes, &elements).expect("valid chain");
        assert_eq!(stresses.len(), 3);
        assert_eq!(
            stresses,
            vec![
                StressRecord::axial(2.0),
                StressRecord::axial(4.0),
                StressRecord::axial(6.0)
            ]
        );
    }

    #[test]
    fn stress_divides_by_length() {
        let (nodes, elements) = line(2, 0.5);
        let d = DVector::from_column_slice(&[0.0, 0.025, 0.0]);
        let stresses = recover(&d, 100.0, &nodes, &elements).expect("valid chain");
        assert_relative_eq!(stresses[0].axial, 5.0, epsilon = 1.0e-12);
        assert_eq!(stresses[0].transverse, 0.0);
        assert_eq!(stresses[0].shear, 0.0);
    }

    #[test]
    fn stress_scales_with_displacement() {
        let (nodes, elements) = line(5, 1.0);
        let d = DVector::from_column_slice(&[0.0, 0.3, -0.1, 0.7, 0.2, 0.0]);
        let base = recover(&d, 210.0, &nodes, &elements).expect("valid chain");
        let scaled = recover(&(&d * -3.5), 210.0, &nodes, &elements).expect("valid chain");
        for (a, b) in base.iter().zip(&scaled) {
            assert_relative_eq!(b.axial, -3.5 * a.axial, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn short_field_is_an_error() {
        let (nodes, elements) = line(4, 1.0);
        let reduced = DVector::from_column_slice(&[0.1, 0.2, 0.1]);
        assert_eq!(
            recover(&reduced, 1.0, &nodes, &elements),
            Err(AnalysisError::ShortDisplacementField {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn zero_length_is_an_error() {
        let (mut nodes, elements) = line(2, 1.0);
        nodes[1].position = nodes[0].position;
        let d = DVector::zeros(3);
        assert!(matches!(
            recover(&d, 1.0, &nodes, &elements),
            Err(AnalysisError::ZeroLengthElement { element: 0, .. })
        ));
    }
}
