//! Plain data describing a bar chain: material, nodes, elements and loads.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::errors::MeshError;

/// Position in the plane measured in model length units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Linear elastic material shared by every element of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Young's modulus.
    pub youngs_modulus: f64,
    /// Poisson's ratio. Carried through for completeness, the axial
    /// formulation does not use it.
    #[serde(default)]
    pub poisson_ratio: f64,
}

impl Material {
    /// Create a [`Material`] from its two elastic constants.
    #[must_use]
    pub const fn new(youngs_modulus: f64, poisson_ratio: f64) -> Self {
        Self {
            youngs_modulus,
            poisson_ratio,
        }
    }
}

/// A node of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// One based identifier.
    pub id: usize,
    /// Position of the node.
    pub position: Point,
    /// Constraint flag as read from the input. Only its comparison against
    /// zero is meaningful.
    #[serde(default)]
    pub constraint: f64,
}

impl Node {
    /// Create a [`Node`].
    #[must_use]
    pub const fn new(id: usize, position: Point, constraint: f64) -> Self {
        Self {
            id,
            position,
            constraint,
        }
    }

    /// True when the constraint flag is nonzero.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.constraint != 0.0
    }
}

/// A two-node bar element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Identifier from the input. Assembly uses the element position instead.
    pub id: usize,
    /// One based id of the first end node.
    pub node1: usize,
    /// One based id of the second end node.
    pub node2: usize,
    /// Two fields of the input record that the bar formulation ignores.
    #[serde(default)]
    pub unused: [f64; 2],
    /// Thickness, used directly as the cross-sectional area.
    pub thickness: f64,
}

impl Element {
    /// Create an [`Element`] joining `node1` to `node2`.
    #[must_use]
    pub const fn new(id: usize, node1: usize, node2: usize, thickness: f64) -> Self {
        Self {
            id,
            node1,
            node2,
            unused: [0.0; 2],
            thickness,
        }
    }

    /// Effective cross-sectional area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.thickness
    }

    /// Resolve both end nodes of the element found at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownNode`] when either id is zero or larger than
    /// the node count.
    pub fn endpoints<'a>(
        &self,
        position: usize,
        nodes: &'a [Node],
    ) -> Result<(&'a Node, &'a Node), MeshError> {
        let lookup = move |id: usize| {
            id.checked_sub(1)
                .and_then(|index| nodes.get(index))
                .ok_or(MeshError::UnknownNode {
                    element: position,
                    node: id,
                })
        };
        Ok((lookup(self.node1)?, lookup(self.node2)?))
    }

    /// The end opposite `node`, or `None` when the element does not touch it.
    #[must_use]
    pub fn other_end(&self, node: usize) -> Option<usize> {
        if self.node1 == node {
            Some(self.node2)
        } else if self.node2 == node {
            Some(self.node1)
        } else {
            None
        }
    }
}

/// A distributed load attached to an element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// One based element key. It is matched against the element position plus
    /// one, not against [`Element::id`].
    pub element: usize,
    /// Two fields of the input record that the bar formulation ignores.
    #[serde(default)]
    pub unused: [f64; 2],
    /// Load intensity, split equally between the element ends.
    pub force: f64,
}

impl Load {
    /// Create a [`Load`] on the element with key `element`.
    #[must_use]
    pub const fn new(element: usize, force: f64) -> Self {
        Self {
            element,
            unused: [0.0; 2],
            force,
        }
    }
}

/// Complete description of a bar chain analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Material shared by every element.
    pub material: Material,
    /// Nodes in input order.
    pub nodes: Vec<Node>,
    /// Elements in chain order.
    pub elements: Vec<Element>,
    /// Loads in input order.
    #[serde(default)]
    pub loads: Vec<Load>,
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use barchain::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance_is_euclidean() {
        let a = point(0.0, 0.0);
        let b = point(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_from_vector() {
        let vector = Vector2::new(0.1, -0.2);
        assert_eq!(Point::from(vector), Point::new(0.1, -0.2));
    }

    #[test]
    fn endpoints_translate_one_based_ids() {
        let nodes = [
            Node::new(1, point(0.0, 0.0), 0.0),
            Node::new(2, point(1.0, 0.0), 0.0),
        ];
        let element = Element::new(7, 2, 1, 1.0);
        let (first, second) = element.endpoints(0, &nodes).expect("ids resolve");
        assert_eq!(first.id, 2);
        assert_eq!(second.id, 1);
    }

    #[test]
    fn endpoints_reject_zero_and_out_of_range_ids() {
        let nodes = [Node::new(1, point(0.0, 0.0), 0.0)];
        let zero = Element::new(1, 0, 1, 1.0);
        assert_eq!(
            zero.endpoints(3, &nodes),
            Err(MeshError::UnknownNode {
                element: 3,
                node: 0
            })
        );
        let past_end = Element::new(1, 1, 2, 1.0);
        assert_eq!(
            past_end.endpoints(0, &nodes),
            Err(MeshError::UnknownNode {
                element: 0,
                node: 2
            })
        );
    }

    #[test]
    fn other_end_ignores_direction() {
        let element = Element::new(1, 4, 7, 1.0);
        assert_eq!(element.other_end(4), Some(7));
        assert_eq!(element.other_end(7), Some(4));
        assert_eq!(element.other_end(5), None);
    }

    #[test]
    fn model_reads_from_json_with_defaults() {
        let json = r#"{
            "material": { "youngs_modulus": 100.0 },
            "nodes": [ { "id": 1, "position": { "x": 0.0, "y": 0.0 } } ],
            "elements": [ { "id": 1, "node1": 1, "node2": 1, "thickness": 2.0 } ]
        }"#;
        let model: Model = serde_json::from_str(json).expect("valid model");
        assert_eq!(model.material.poisson_ratio, 0.0);
        assert!(!model.nodes[0].is_flagged());
        assert_eq!(model.elements[0].area(), 2.0);
        assert!(model.loads.is_empty());
    }
}
