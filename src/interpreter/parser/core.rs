use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{evaluator::core::Environment, scanner::core::Scanner},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Recursive-descent parser for one input line.
///
/// The parser owns a backtracking [`Scanner`] and borrows the session's
/// [`Environment`]: a successfully parsed assignment evaluates its
/// right-hand side and records the result while parsing, so the bindings
/// must be reachable before evaluation proper.
///
/// There is no separate token stream. Recognition and position management
/// are unified in the scanner, and lookahead comes from mark/reset
/// backtracking.
///
/// Grammar rules that can speculate return `Ok(None)` when their construct
/// does not begin at the current position, `Ok(Some(_))` on success, and
/// `Err` once a committed construct fails.
pub struct Parser<'a> {
    /// The cursor over the line being parsed.
    pub scanner: Scanner,
    /// The session's bindings, updated by assignment parsing.
    pub env:     &'a mut Environment,
}

impl<'a> Parser<'a> {
    /// Creates a parser for one input line against a session environment.
    #[must_use]
    pub fn new(line: &str, env: &'a mut Environment) -> Self {
        Self { scanner: Scanner::new(line),
               env }
    }

    /// Parses a term, the atomic unit of the grammar.
    ///
    /// Tries, in order: a number, a vector, a variable reference, and a
    /// parenthesized sum. The first recognizer that matches wins; if none
    /// begins here, `Ok(None)` is returned with the position unchanged.
    ///
    /// Grammar: `term := number | vector | identifier | "(" sum ")"`
    ///
    /// # Returns
    /// The parsed term, or `None` if no term begins here.
    ///
    /// # Errors
    /// Propagates hard errors from the recognizers and from a committed
    /// group.
    pub fn parse_term(&mut self) -> ParseResult<Option<Expr>> {
        if let Some(number) = self.scanner.recognize_number()? {
            return Ok(Some(number));
        }

        if let Some(vector) = self.scanner.recognize_vector()? {
            return Ok(Some(vector));
        }

        if let Some(variable) = self.scanner.recognize_identifier()? {
            return Ok(Some(variable));
        }

        self.parse_group()
    }

    /// Parses a parenthesized sum.
    ///
    /// If the current character is not `(` this is a no-match. After the
    /// opening parenthesis the rule is committed: an empty group is an
    /// `ExpectedExpression` error, and a missing closing parenthesis is an
    /// `ExpectedCharacter` error naming `)`.
    ///
    /// Grammar: `group := "(" sum ")"`
    ///
    /// # Returns
    /// The inner expression, or `None` if no `(` begins here.
    ///
    /// # Errors
    /// Returns `ExpectedExpression` or `ExpectedCharacter` for a committed
    /// group that is empty or unclosed.
    pub fn parse_group(&mut self) -> ParseResult<Option<Expr>> {
        if !self.scanner.match_char('(') {
            return Ok(None);
        }

        let Some(sum) = self.parse_sum()? else {
            return Err(SyntaxError::ExpectedExpression { found:    self.scanner.current(),
                                                         position: self.scanner.position(), });
        };

        if !self.scanner.match_char(')') {
            return Err(SyntaxError::ExpectedCharacter { expected: ')',
                                                        found:    self.scanner.current(),
                                                        position: self.scanner.position(), });
        }

        Ok(Some(sum))
    }
}
