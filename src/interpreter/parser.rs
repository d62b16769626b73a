/// Core parsing logic for terms and groups.
///
/// Contains the parser state, the shared result alias, and the rules for
/// the atomic units of the grammar.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels, sums and
/// products, and the mapping from operator characters to operators.
pub mod binary;

/// Statement parsing.
///
/// Implements the statement entry point and the speculative assignment
/// rule, including the parse-time evaluation of assignment values.
pub mod statement;
