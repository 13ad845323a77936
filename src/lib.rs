#![warn(clippy::all)]
#![warn(missing_docs)]
//! Linear static analysis of chains of two-node axial bars.
//!
//! A model is a list of nodes, a list of elements joined end to end and a
//! list of uniform element loads. The analysis assembles a global stiffness
//! system numbered by element position, holds both chain ends fixed, solves
//! the interior system and recovers the axial stress in each bar.
//!
//! ```
//! use barchain::{analyse, point, AnalysisOptions, Element, Load, Material, Model, Node};
//!
//! let model = Model {
//!     material: Material::new(100.0, 0.3),
//!     nodes: vec![
//!         Node::new(1, point(0.0, 0.0), 0.0),
//!         Node::new(2, point(1.0, 0.0), 0.0),
//!         Node::new(3, point(2.0, 0.0), 0.0),
//!     ],
//!     elements: vec![Element::new(1, 1, 2, 1.0), Element::new(2, 2, 3, 1.0)],
//!     loads: vec![Load::new(2, 10.0)],
//! };
//! let result = analyse(&model, &AnalysisOptions::default()).unwrap();
//! assert!((result.reduced[0] - 0.025).abs() < 1.0e-12);
//! assert!((result.stresses[0].axial - 2.5).abs() < 1.0e-12);
//! ```

pub mod analysis;
pub mod assembly;
pub mod boundary;
pub mod config;
pub mod element;
mod errors;
pub mod expand;
pub mod input;
mod model;
pub mod report;
pub mod solver;
pub mod stress;

pub use analysis::{analyse, analyse_with, AnalysisResult};
pub use assembly::{assemble, GlobalSystem};
pub use boundary::{reduce, ReducedSystem};
pub use config::{AnalysisOptions, LoadAggregation};
pub use errors::{AnalysisError, ElementError, InputError, MeshError, SolveError};
pub use model::{point, Element, Load, Material, Model, Node, Point};
pub use solver::{DenseCholesky, DenseLu, LinearSolver, SolverKind};
pub use stress::StressRecord;
