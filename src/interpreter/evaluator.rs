/// Binary operator evaluation logic.
///
/// Handles the execution of binary operations, split by the kinds of the
/// two operands, including the division-by-zero checks.
pub mod binary;

/// Core evaluation logic and session state.
///
/// Contains the main evaluation engine, the binding environment, and error
/// propagation.
pub mod core;
