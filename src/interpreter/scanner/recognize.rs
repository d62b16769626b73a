use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        scanner::core::{Scanner, CLOSING_DELIMITERS, DECIMAL_POINT, NEGATIVE_SIGN},
        value::vec2::Vec2,
    },
};

impl Scanner {
    /// Attempts to consume a numeric literal at the current position.
    ///
    /// The number grammar is an optional negative sign, one or more digits,
    /// and an optional fractional part, with two extra constraints: a
    /// leading zero may not be followed by another digit, and at most one
    /// decimal point may appear.
    ///
    /// If the current character cannot begin a number, the position is left
    /// unchanged and `Ok(None)` is returned. Once a sign or digit has been
    /// consumed the scanner is committed: any constraint violation is a
    /// `MalformedNumber` error, never a silent no-match.
    ///
    /// # Returns
    /// The parsed number, or `None` if no number begins here.
    ///
    /// # Errors
    /// Returns `MalformedNumber` when a committed literal breaks the number
    /// grammar.
    pub fn scan_number(&mut self) -> Result<Option<f64>, SyntaxError> {
        if !self.at_digit() && !self.at_negative_sign() {
            return Ok(None);
        }

        let mut text = String::new();

        if self.at_negative_sign() {
            text.push(NEGATIVE_SIGN);
            self.advance();

            if !self.at_digit() {
                return Err(SyntaxError::MalformedNumber { details:  "expected a digit after '-'".to_string(),
                                                          position: self.position(), });
            }
        }

        if self.current() == Some('0') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(SyntaxError::MalformedNumber { details:  "a leading zero cannot be followed by another digit".to_string(),
                                                      position: self.position(), });
        }

        while self.at_digit() {
            text.push(self.current_char()?);
            self.advance();
        }

        if self.at_decimal_point() {
            text.push(DECIMAL_POINT);
            self.advance();

            if !self.at_digit() {
                return Err(SyntaxError::MalformedNumber { details:  "expected a digit after the decimal point".to_string(),
                                                          position: self.position(), });
            }

            while self.at_digit() {
                text.push(self.current_char()?);
                self.advance();
            }

            if self.at_decimal_point() {
                return Err(SyntaxError::MalformedNumber { details:  "a number may contain only one decimal point".to_string(),
                                                          position: self.position(), });
            }
        }

        match text.parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(SyntaxError::MalformedNumber { details:  format!("'{text}' is not a number"),
                                                         position: self.position(), }),
        }
    }

    /// Attempts to consume a variable name at the current position.
    ///
    /// A name is a maximal run of one or more lowercase letters. The
    /// character after the run must be the end of the input, an operator, or
    /// a closing delimiter; anything else is a hard error, so input such as
    /// `ab3` is rejected instead of being silently split in two.
    ///
    /// # Returns
    /// The scanned name, or `None` if no letter begins here.
    ///
    /// # Errors
    /// Returns `InvalidVariableTermination` when the character after the
    /// run may not follow a name.
    pub fn scan_identifier(&mut self) -> Result<Option<String>, SyntaxError> {
        if !self.at_letter() {
            return Ok(None);
        }

        let mut name = String::new();
        while self.at_letter() {
            name.push(self.current_char()?);
            self.advance();
        }

        if !self.at_end() && !self.at_operator() {
            let found = self.current_char()?;
            if !CLOSING_DELIMITERS.contains(&found) {
                return Err(SyntaxError::InvalidVariableTermination { name,
                                                                     found,
                                                                     position: self.position() });
            }
        }

        Ok(Some(name))
    }

    /// Attempts to consume a numeric literal and wrap it as a literal node.
    ///
    /// # Errors
    /// Propagates errors from [`Scanner::scan_number`].
    pub fn recognize_number(&mut self) -> Result<Option<Expr>, SyntaxError> {
        Ok(self.scan_number()?
               .map(|value| Expr::Literal { value: value.into() }))
    }

    /// Attempts to consume a variable name and wrap it as a variable
    /// reference. The reference is not resolved here.
    ///
    /// # Errors
    /// Propagates errors from [`Scanner::scan_identifier`].
    pub fn recognize_identifier(&mut self) -> Result<Option<Expr>, SyntaxError> {
        Ok(self.scan_identifier()?.map(|name| Expr::Variable { name }))
    }

    /// Attempts to consume a vector literal at the current position.
    ///
    /// A vector literal is `[`, a number, `,`, a number, and `]`. The
    /// components must be numeric literals; expressions and variable
    /// references are not accepted inside the brackets.
    ///
    /// If the current character is not `[`, the position is left unchanged
    /// and `Ok(None)` is returned. Once the bracket has been consumed the
    /// scanner is committed: a missing component, comma, or closing bracket
    /// is a hard error naming the expected and found characters.
    ///
    /// # Returns
    /// A literal node holding the vector, or `None` if no `[` begins here.
    ///
    /// # Errors
    /// Returns `ExpectedNumber` or `ExpectedCharacter` when a committed
    /// vector literal is incomplete, and propagates component errors from
    /// [`Scanner::scan_number`].
    pub fn recognize_vector(&mut self) -> Result<Option<Expr>, SyntaxError> {
        if !self.match_char('[') {
            return Ok(None);
        }

        let x = self.require_component()?;

        if !self.match_char(',') {
            return Err(SyntaxError::ExpectedCharacter { expected: ',',
                                                        found:    self.current(),
                                                        position: self.position(), });
        }

        let y = self.require_component()?;

        if !self.match_char(']') {
            return Err(SyntaxError::ExpectedCharacter { expected: ']',
                                                        found:    self.current(),
                                                        position: self.position(), });
        }

        Ok(Some(Expr::Literal { value: Vec2::new(x, y).into() }))
    }

    fn require_component(&mut self) -> Result<f64, SyntaxError> {
        match self.scan_number()? {
            Some(value) => Ok(value),
            None => Err(SyntaxError::ExpectedNumber { found:    self.current(),
                                                      position: self.position(), }),
        }
    }
}
