use crate::{
    ast::{BinaryOperator, Expr},
    error::SyntaxError,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `sum := product (("+" | "-") product)*`
    ///
    /// Once an operator has been consumed the rule is committed: a missing
    /// right-hand operand is a hard error, never a silent partial result.
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression, or
    /// `None` when no product begins here.
    ///
    /// # Errors
    /// Returns `MissingOperand` if a consumed operator is not followed by a
    /// product, and propagates errors from the operands.
    pub fn parse_sum(&mut self) -> ParseResult<Option<Expr>> {
        let Some(mut left) = self.parse_product()? else {
            return Ok(None);
        };

        loop {
            let Some(op) = self.peek_operator() else { break };
            if !matches!(op, BinaryOperator::Add | BinaryOperator::Sub) {
                break;
            }
            self.scanner.advance();

            let position = self.scanner.position();
            let Some(right) = self.parse_product()? else {
                return Err(SyntaxError::MissingOperand { operator: op,
                                                         position });
            };

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
        }

        Ok(Some(left))
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `product := term (("*" | "/") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression, or
    /// `None` when no term begins here.
    ///
    /// # Errors
    /// Returns `MissingOperand` if a consumed operator is not followed by a
    /// term, and propagates errors from the operands.
    pub fn parse_product(&mut self) -> ParseResult<Option<Expr>> {
        let Some(mut left) = self.parse_term()? else {
            return Ok(None);
        };

        loop {
            let Some(op) = self.peek_operator() else { break };
            if !matches!(op, BinaryOperator::Mul | BinaryOperator::Div) {
                break;
            }
            self.scanner.advance();

            let position = self.scanner.position();
            let Some(right) = self.parse_term()? else {
                return Err(SyntaxError::MissingOperand { operator: op,
                                                         position });
            };

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right) };
        }

        Ok(Some(left))
    }

    fn peek_operator(&self) -> Option<BinaryOperator> {
        char_to_binary_operator(self.scanner.current()?)
    }
}

/// Maps an operator character to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for the four arithmetic operator
/// characters and `None` for every other character; in particular the
/// assignment sign is not a binary operator.
///
/// # Parameters
/// - `c`: Character to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the character corresponds to a binary
/// operator, otherwise `None`.
///
/// # Example
/// ```
/// use lineal::{ast::BinaryOperator, interpreter::parser::binary::char_to_binary_operator};
///
/// assert_eq!(char_to_binary_operator('+'), Some(BinaryOperator::Add));
/// assert_eq!(char_to_binary_operator('='), None);
/// ```
#[must_use]
pub const fn char_to_binary_operator(c: char) -> Option<BinaryOperator> {
    match c {
        '+' => Some(BinaryOperator::Add),
        '-' => Some(BinaryOperator::Sub),
        '*' => Some(BinaryOperator::Mul),
        '/' => Some(BinaryOperator::Div),
        _ => None,
    }
}
