//! # lineal
//!
//! lineal is a line-oriented expression interpreter written in Rust.
//! It parses and evaluates arithmetic over scalar numbers and 2-dimensional
//! vectors, with named variables that persist across the lines of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::LangError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Defines the binary operators and their display forms.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// parsing, or evaluating a line. It standardizes error reporting and
/// carries detailed information about failures, including what was expected,
/// what was found, and where.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches input offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of line execution.
///
/// This module ties together scanning, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for the language. It exposes the components
/// behind the crate's entry points.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, parser, evaluator, and value
///   types.
/// - Maintains the session environment that lines read and update.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses one line into a statement.
///
/// The environment is part of parsing, not just evaluation: a successfully
/// parsed assignment evaluates its right-hand side and records the result
/// immediately. Parsing a bare expression never touches the environment.
///
/// # Errors
/// Returns a syntax error if the line breaks the grammar, or an evaluation
/// error if an assignment's right-hand side fails to evaluate.
///
/// # Examples
/// ```
/// use lineal::{interpreter::evaluator::core::Environment, parse};
///
/// let mut env = Environment::new();
///
/// // A bare expression parses without touching the environment.
/// let statement = parse("1 + 2 * 3", &mut env);
/// assert!(statement.is_ok());
///
/// // An assignment records its value while parsing.
/// let statement = parse("x = 4", &mut env);
/// assert!(statement.is_ok());
/// assert!(env.lookup("x").is_some());
/// ```
pub fn parse(line: &str, env: &mut Environment) -> Result<Statement, LangError> {
    let mut parser = Parser::new(line, env);
    parser.parse_statement()
}

/// Evaluates a parsed statement against a session environment.
///
/// # Errors
/// Returns an error if evaluation fails, for example on an unknown variable
/// or a division by zero.
///
/// # Examples
/// ```
/// use lineal::{evaluate,
///              interpreter::{evaluator::core::Environment, value::core::Value},
///              parse};
///
/// let mut env = Environment::new();
/// let statement = parse("2 * 3", &mut env).unwrap();
///
/// assert_eq!(evaluate(&statement, &mut env).unwrap(), Value::Scalar(6.0));
/// ```
pub fn evaluate(statement: &Statement, env: &mut Environment) -> EvalResult<Value> {
    env.eval_statement(statement)
}

/// Parses and evaluates one line, returning its value.
///
/// This is the convenience entry point behind the interactive session and
/// script running: each line of input goes through [`parse`] and then
/// [`evaluate`] against the same environment.
///
/// # Errors
/// Returns an error if the line fails to parse or to evaluate.
///
/// # Examples
/// ```
/// use lineal::{interpreter::{evaluator::core::Environment, value::core::Value},
///              run_line};
///
/// let mut env = Environment::new();
///
/// let value = run_line("x = 3 + 4", &mut env).unwrap();
/// assert_eq!(value, Value::Scalar(7.0));
///
/// let value = run_line("x * 2", &mut env).unwrap();
/// assert_eq!(value, Value::Scalar(14.0));
/// ```
pub fn run_line(line: &str, env: &mut Environment) -> Result<Value, LangError> {
    let statement = parse(line, env)?;
    let value = evaluate(&statement, env)?;

    Ok(value)
}

/// Removes every variable recorded in a session environment.
///
/// # Examples
/// ```
/// use lineal::{clear_bindings, interpreter::evaluator::core::Environment, run_line};
///
/// let mut env = Environment::new();
/// run_line("x = 1", &mut env).unwrap();
///
/// clear_bindings(&mut env);
/// assert!(run_line("x", &mut env).is_err());
/// ```
pub fn clear_bindings(env: &mut Environment) {
    env.clear();
}
