use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to the specialized handler for
    /// the pair of operand kinds: scalar with scalar, vector with vector,
    /// or vector with scalar. Mixed operands require the vector on the
    /// left; a scalar on the left of a vector is outside the dispatch table
    /// and fails with `UnsupportedOperation` for every operator.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let left = Value::Scalar(3.0);
    /// let right = Value::Scalar(4.0);
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Add, left, right);
    /// assert_eq!(result.unwrap(), Value::Scalar(7.0));
    /// ```
    ///
    /// # Errors
    /// Returns `UnsupportedOperation` for a scalar on the left of a vector,
    /// and propagates errors from the specialized handlers.
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use Value::{Scalar, Vector};

        match (left, right) {
            (Scalar(a), Scalar(b)) => Self::eval_scalar_op(op, a, b),
            (Vector(a), Vector(b)) => Self::eval_vector_op(op, a, b),
            (Vector(a), Scalar(b)) => Self::eval_vector_scalar_op(op, a, b),
            (Scalar(_), Vector(_)) => {
                Err(EvalError::UnsupportedOperation { op,
                                                      left: left.kind(),
                                                      right: right.kind() })
            },
        }
    }
}
