use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates an arithmetic operation between two scalars.
    ///
    /// Division by zero is checked explicitly before the arithmetic runs;
    /// all other results follow IEEE 754 double precision.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let result = Environment::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0).unwrap();
    /// assert_eq!(result, Value::Scalar(3.0));
    /// ```
    ///
    /// # Errors
    /// Returns `DivisionByZero` when dividing by a zero scalar.
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(Value::Scalar(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => {
                                 if right == 0.0 {
                                     return Err(EvalError::DivisionByZero);
                                 }
                                 left / right
                             },
                         }))
    }
}
