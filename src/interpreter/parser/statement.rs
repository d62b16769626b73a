use crate::{
    ast::Statement,
    error::{LangError, SyntaxError},
    interpreter::{
        parser::core::{ParseResult, Parser},
        scanner::core::ASSIGNMENT_SIGN,
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - an assignment.
    /// - an expression used as a statement.
    ///
    /// Parsing is attempted in that order; the first matching construct is
    /// returned. If neither matches, the input is rejected as
    /// `InvalidStatement`. A matching construct must consume the entire
    /// line; leftover characters are a `TrailingInput` error.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    ///
    /// # Errors
    /// Returns a [`LangError`] because an assignment evaluates its
    /// right-hand side while parsing: besides syntax errors, parsing can
    /// fail with an evaluation error such as an unknown variable on the
    /// right-hand side of an assignment.
    pub fn parse_statement(&mut self) -> Result<Statement, LangError> {
        if let Some(statement) = self.parse_assignment()? {
            return Ok(statement);
        }

        if let Some(expr) = self.parse_sum()? {
            self.require_consumed()?;
            return Ok(Statement::Expression { expr });
        }

        Err(SyntaxError::InvalidStatement.into())
    }

    /// Parses an assignment statement.
    ///
    /// Grammar: `assignment := identifier "=" sum`
    ///
    /// The rule speculates with a mark: if the name or the assignment sign
    /// is missing, the position is restored and `Ok(None)` is returned so
    /// the caller can try an expression instead. Once the assignment sign
    /// has been consumed the rule is committed, and the sum must parse and
    /// consume the rest of the line.
    ///
    /// On success the right-hand sum is evaluated immediately and its value
    /// recorded in the environment under the left-hand name. Recording only
    /// happens after the whole statement has parsed and the evaluation has
    /// succeeded; a failed assignment never touches the environment.
    fn parse_assignment(&mut self) -> Result<Option<Statement>, LangError> {
        let mark = self.scanner.mark();

        let Some(name) = self.scanner.scan_identifier()? else {
            return Ok(None);
        };

        if !self.scanner.match_char(ASSIGNMENT_SIGN) {
            self.scanner.reset(mark)?;
            return Ok(None);
        }

        let position = self.scanner.position();
        let Some(value) = self.parse_sum()? else {
            return Err(SyntaxError::ExpectedExpression { found: self.scanner.current(),
                                                         position }.into());
        };
        self.require_consumed()?;

        let result = self.env.eval(&value)?;
        self.env.record(&name, result);

        Ok(Some(Statement::Assignment { name, value }))
    }

    /// Requires that the scanner has consumed the entire line.
    fn require_consumed(&self) -> ParseResult<()> {
        if self.scanner.at_end() {
            return Ok(());
        }

        Err(SyntaxError::TrailingInput { found:    self.scanner.current_char()?,
                                         position: self.scanner.position(), })
    }
}
