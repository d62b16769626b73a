/// The backtracking cursor and its character classes.
///
/// Declares the `Scanner` type: a position over one whitespace-stripped
/// input line, with single-character lookahead, mark/reset bookmarking, and
/// predicates for the character classes the language defines.
pub mod core;
/// Lexical recognition built on the cursor.
///
/// Implements the recognizers for numbers, vectors, and variable names.
/// Each recognizer either consumes a whole construct, reports that nothing
/// matched without moving the position, or raises a hard error once it has
/// committed.
pub mod recognize;
