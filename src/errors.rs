//! Error types produced while reading, assembling or solving a bar chain.

use thiserror::Error;

/// Error returned by the element formulation.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ElementError {
    /// Returned when an element length is zero, negative or not finite.
    #[error("element length must be positive (received {length})")]
    NonPositiveLength {
        /// Rejected length in model units.
        length: f64,
    },
}

/// Error returned when the mesh does not describe a single ordered chain.
///
/// Element positions reported by the variants are zero based, node ids are the
/// one based identifiers used in the input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MeshError {
    /// Returned when fewer than two elements are supplied.
    #[error("at least two elements are required for a fixed-fixed chain (received {0})")]
    TooFewElements(usize),
    /// Returned when an element references a node id that does not exist.
    #[error("element at position {element} references unknown node {node}")]
    UnknownNode {
        /// Position of the offending element.
        element: usize,
        /// Node id as given in the input.
        node: usize,
    },
    /// Returned when an element does not start at the node the chain reached
    /// with the element before it.
    #[error("elements at positions {element} and {next} are not connected")]
    BrokenChain {
        /// Position of the first element.
        element: usize,
        /// Position of the element that follows it.
        next: usize,
    },
    /// Returned when the chain returns to a node it has already passed.
    #[error("element at position {element} returns to node {node}")]
    RevisitedNode {
        /// Position of the offending element.
        element: usize,
        /// Node id reached for the second time.
        node: usize,
    },
    /// Returned when the node count is not one more than the element count.
    #[error("{nodes} nodes supplied for a system with {dofs} chain positions")]
    NodeCountMismatch {
        /// Number of nodes supplied.
        nodes: usize,
        /// Number of rows in the assembled system.
        dofs: usize,
    },
}

/// Error returned by a [`LinearSolver`](crate::LinearSolver).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SolveError {
    /// Returned when the reduced system has no unknowns.
    #[error("reduced system has no free degrees of freedom")]
    Empty,
    /// Returned when the matrix is not square.
    #[error("matrix must be square (received {rows}x{cols})")]
    NotSquare {
        /// Number of matrix rows.
        rows: usize,
        /// Number of matrix columns.
        cols: usize,
    },
    /// Returned when the right-hand side does not match the matrix.
    #[error("right-hand side has {rhs} entries for a matrix of order {order}")]
    DimensionMismatch {
        /// Order of the matrix.
        order: usize,
        /// Length of the right-hand side.
        rhs: usize,
    },
    /// Returned when the factorisation finds a zero pivot.
    #[error("stiffness matrix is singular; check supports and connectivity")]
    Singular,
    /// Returned when a Cholesky factorisation is requested for a matrix that is
    /// not symmetric positive definite.
    #[error("stiffness matrix is not positive definite")]
    NotPositiveDefinite,
}

/// Error returned when an analysis fails.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when the mesh is malformed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
    /// Returned when an element spans zero distance.
    #[error("element at position {element} has invalid geometry: {source}")]
    ZeroLengthElement {
        /// Position of the offending element.
        element: usize,
        /// Description of the geometric problem.
        #[source]
        source: ElementError,
    },
    /// Returned when the linear solve fails.
    #[error("solve failed: {0}")]
    Solve(#[from] SolveError),
    /// Returned when the constraint flags ask for more solved values than the
    /// reduced solution holds.
    #[error("node at index {node} needs displacements {needed} but only {available} were solved")]
    ExhaustedDisplacements {
        /// Zero based index of the node being expanded.
        node: usize,
        /// Index one past the last value the node would consume.
        needed: usize,
        /// Length of the reduced solution.
        available: usize,
    },
    /// Returned when stress recovery is handed fewer displacements than the
    /// chain has elements.
    #[error("stress recovery needs {needed} chain displacements but received {available}")]
    ShortDisplacementField {
        /// Number of displacements the element list requires.
        needed: usize,
        /// Length of the field supplied.
        available: usize,
    },
}

/// Error returned while reading a model from disk.
#[derive(Debug, Error)]
pub enum InputError {
    /// Returned when the input file cannot be read.
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when a line cannot be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// One based line number in the input file.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// Returned when a section holds a different number of records than the
    /// header declares.
    #[error("header declares {declared} {section} but {found} were read")]
    CountMismatch {
        /// Name of the section.
        section: &'static str,
        /// Count from the header line.
        declared: usize,
        /// Count actually read.
        found: usize,
    },
    /// Returned when a JSON model or options file cannot be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
