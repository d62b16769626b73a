/// Syntax errors.
///
/// Defines all error types that can occur while scanning and parsing an input
/// line. Syntax errors include malformed numbers, unmatched brackets, missing
/// operands, and any other issues detected before evaluation.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// statement. Evaluation errors include division by zero, unknown variables,
/// and operations that are not defined between the operand kinds involved.
pub mod eval_error;
/// The combined error type.
///
/// Wraps syntax and evaluation errors into a single type for entry points
/// that can fail either way.
pub mod lang_error;

pub use eval_error::EvalError;
pub use lang_error::LangError;
pub use syntax_error::SyntaxError;
