//! Two-node axial bar formulation.
//!
//! The bar carries a single axial degree of freedom at each end. Its stiffness
//! follows Hooke's law for a prismatic member,
//!
//! ```text
//! k_local = (E*A/L) * [ 1  -1]
//!                     [-1   1]
//! ```
//!
//! and a uniform load of intensity `q` is lumped as `q*L/2` at each end.

use nalgebra::{Matrix2, Vector2};

use crate::errors::ElementError;
use crate::model::Point;

/// Reject lengths that would produce infinities in `E*A/L`.
fn check_length(length: f64) -> Result<f64, ElementError> {
    if length.is_finite() && length > 0.0 {
        Ok(length)
    } else {
        Err(ElementError::NonPositiveLength { length })
    }
}

/// Length of the bar joining `start` to `end`.
///
/// # Errors
///
/// Returns [`ElementError::NonPositiveLength`] when the two points coincide.
pub fn length(start: Point, end: Point) -> Result<f64, ElementError> {
    check_length(start.distance_to(end))
}

/// Local 2x2 stiffness matrix of a bar.
///
/// # Errors
///
/// Returns [`ElementError::NonPositiveLength`] when `length` is not strictly
/// positive.
///
/// # Examples
/// ```
/// use barchain::element::stiffness;
///
/// let k = stiffness(100.0, 1.0, 2.0).unwrap();
/// assert_eq!(k[(0, 0)], 50.0);
/// assert_eq!(k[(0, 1)], -50.0);
/// ```
pub fn stiffness(youngs_modulus: f64, area: f64, length: f64) -> Result<Matrix2<f64>, ElementError> {
    let k = youngs_modulus * area / check_length(length)?;
    Ok(Matrix2::new(k, -k, -k, k))
}

/// Equivalent nodal loads of a uniform load split equally to both ends.
///
/// # Errors
///
/// Returns [`ElementError::NonPositiveLength`] when `length` is not strictly
/// positive.
pub fn equivalent_load(force: f64, length: f64) -> Result<Vector2<f64>, ElementError> {
    let half = force * check_length(length)? / 2.0;
    Ok(Vector2::new(half, half))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::point;

    #[test]
    fn stiffness_is_symmetric_and_singular() {
        let k = stiffness(200.0e9, 0.01, 2.0).expect("valid bar");
        assert_relative_eq!(k[(0, 0)], 1.0e9);
        assert_eq!(k, k.transpose());
        assert_relative_eq!(k.determinant(), 0.0);
    }

    #[test]
    fn load_is_split_equally() {
        let f = equivalent_load(10.0, 1.0).expect("valid bar");
        assert_eq!(f, Vector2::new(5.0, 5.0));
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(
            stiffness(100.0, 1.0, 0.0),
            Err(ElementError::NonPositiveLength { length: 0.0 })
        );
        assert!(equivalent_load(1.0, -1.0).is_err());
        assert!(length(point(1.0, 1.0), point(1.0, 1.0)).is_err());
        assert!(stiffness(100.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn length_of_inclined_bar() {
        let l = length(point(0.0, 0.0), point(3.0, 4.0)).expect("distinct points");
        assert_relative_eq!(l, 5.0);
    }
}
