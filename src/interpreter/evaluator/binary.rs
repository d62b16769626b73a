/// Dispatch over operand kinds.
///
/// Routes a binary operation to the handler for its pair of operand kinds
/// and rejects combinations outside the dispatch table.
pub mod core;
/// Scalar with scalar arithmetic.
///
/// Implements the four operators between two scalar numbers.
pub mod scalar;
/// Vector with vector and vector with scalar arithmetic.
///
/// Implements the componentwise operators between two vectors and the
/// broadcast operators between a vector and a scalar.
pub mod vector;
