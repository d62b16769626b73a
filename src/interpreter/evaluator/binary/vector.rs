use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::{core::Value, vec2::Vec2},
    },
};

impl Environment {
    /// Evaluates an arithmetic operation between two vectors.
    ///
    /// All four operators apply componentwise, pairing x with x and y with
    /// y. Division requires both components of the right operand to be
    /// non-zero.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed vector.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment,
    ///                   value::{core::Value, vec2::Vec2}},
    /// };
    ///
    /// let left = Vec2::new(1.0, 2.0);
    /// let right = Vec2::new(3.0, 4.0);
    ///
    /// let result = Environment::eval_vector_op(BinaryOperator::Add, left, right).unwrap();
    /// assert_eq!(result, Value::Vector(Vec2::new(4.0, 6.0)));
    /// ```
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the divisor has a zero component.
    pub fn eval_vector_op(op: BinaryOperator, left: Vec2, right: Vec2) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(Value::Vector(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => {
                                 if right.x == 0.0 || right.y == 0.0 {
                                     return Err(EvalError::DivisionByZero);
                                 }
                                 left / right
                             },
                         }))
    }

    /// Evaluates an arithmetic operation between a vector and a scalar.
    ///
    /// The scalar on the right is broadcast across both components. The
    /// commuted form, a scalar on the left of a vector, is not defined and
    /// never reaches this handler.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand, applied to both components.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed vector.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment,
    ///                   value::{core::Value, vec2::Vec2}},
    /// };
    ///
    /// let left = Vec2::new(8.0, 4.0);
    ///
    /// let result = Environment::eval_vector_scalar_op(BinaryOperator::Div, left, 2.0).unwrap();
    /// assert_eq!(result, Value::Vector(Vec2::new(4.0, 2.0)));
    /// ```
    ///
    /// # Errors
    /// Returns `DivisionByZero` when dividing by a zero scalar.
    pub fn eval_vector_scalar_op(op: BinaryOperator, left: Vec2, right: f64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(Value::Vector(match op {
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
