/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs scalar and vector arithmetic, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Records and resolves variables in the session environment.
/// - Reports evaluation errors such as division by zero or unknown
///   variables.
pub mod evaluator;
/// The parser module builds the abstract syntax tree (AST) from input.
///
/// The parser reads one line through the scanner and constructs an AST that
/// represents the syntactic structure of the statement. Assignments also
/// record their value into the environment as part of parsing.
///
/// # Responsibilities
/// - Converts an input line into structured AST nodes.
/// - Validates the grammar, reporting errors with offset information.
/// - Evaluates and records assignment values at parse time.
pub mod parser;
/// The scanner module drives character-level recognition of input lines.
///
/// The scanner strips the whitespace from one line and exposes a movable
/// position over the remaining characters, with classification predicates,
/// mark/reset bookmarking, and recognizers for the language's literal
/// forms. There is no token stream; the parser reads through the scanner
/// directly.
///
/// # Responsibilities
/// - Tracks the current position and the characters around it.
/// - Classifies characters into the language's character classes.
/// - Recognizes numbers, vectors, and variable names, reporting lexical
///   errors for malformed input.
pub mod scanner;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during evaluation: scalar
/// numbers and 2-dimensional vectors. It also provides the kind
/// classification used by arithmetic dispatch and error reporting.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two variants.
/// - Implements the arithmetic operators on vectors.
/// - Formats results for display.
pub mod value;
