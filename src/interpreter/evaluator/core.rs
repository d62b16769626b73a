use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::EvalError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the bindings of one interpreter session.
///
/// This struct holds every variable the session has assigned, mapped to the
/// value most recently recorded for it. Later assignments overwrite earlier
/// ones; entries are never removed individually, though
/// [`Environment::clear`] wipes the whole table.
///
/// ## Usage
///
/// An `Environment` is created once per session and passed to both parsing
/// and evaluation. Sessions are independent: two environments never share
/// state, so several interpreters can run side by side.
pub struct Environment {
    bindings: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment with no recorded variables.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Looks up the value last recorded for a variable.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// The recorded value if one exists, otherwise `None`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    /// Records a value for a variable, overwriting any previous one.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: The value to store.
    pub fn record(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Removes every recorded variable.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches on the expression variant: a literal
    /// returns its stored value, a variable reference resolves against the
    /// recorded bindings, and a binary operation evaluates its left operand
    /// fully, then its right, then combines the two results. Evaluating an
    /// expression never mutates the environment.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if a referenced variable has no recorded
    /// value, and propagates errors from binary dispatch.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(*value),
            Expr::Variable { name } => {
                self.lookup(name)
                    .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand expression, records the
    /// result under the target name, and yields that value. A bare
    /// expression is evaluated without touching the bindings.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// Propagates every evaluation error; a failed assignment records
    /// nothing.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.record(name, value);
                Ok(value)
            },
            Statement::Expression { expr } => self.eval(expr),
        }
    }
}
