use crate::error::SyntaxError;

/// A saved scanner position, used to roll back a speculative parse.
pub type Mark = usize;

/// The character separating an assignment target from its value.
pub const ASSIGNMENT_SIGN: char = '=';
/// The character beginning a negative number.
pub const NEGATIVE_SIGN: char = '-';
/// The character separating the integer and fractional digits of a number.
pub const DECIMAL_POINT: char = '.';
/// Every operator character the language recognizes.
pub const OPERATORS: [char; 5] = ['+', NEGATIVE_SIGN, '*', '/', ASSIGNMENT_SIGN];
/// Characters that may legally follow a variable name, besides operators and
/// the end of the input.
pub const CLOSING_DELIMITERS: [char; 3] = [')', ']', ','];

/// A backtracking cursor over one line of input.
///
/// All whitespace is removed before scanning begins, so positions (and the
/// offsets reported in errors) count non-whitespace characters only.
/// Whitespace carries no syntactic meaning anywhere in the grammar.
///
/// ## Usage
///
/// The parser owns one `Scanner` per input line. It reads through
/// [`Scanner::current_char`] and the classification predicates, consumes
/// with [`Scanner::advance`] and [`Scanner::match_char`], and speculates
/// with [`Scanner::mark`] and [`Scanner::reset`]. The predicates never
/// fail: at the end of the input they simply answer `false`, while
/// `current_char` reports the end as an error.
pub struct Scanner {
    chars:    Vec<char>,
    position: usize,
}

impl Scanner {
    /// Creates a scanner over one line with all whitespace stripped.
    #[must_use]
    pub fn new(line: &str) -> Self {
        Self { chars:    line.chars().filter(|c| !c.is_whitespace()).collect(),
               position: 0, }
    }

    /// Returns the character at the current position.
    ///
    /// # Errors
    /// Returns `UnexpectedEndOfInput` when the position is at or past the
    /// end of the input.
    pub fn current_char(&self) -> Result<char, SyntaxError> {
        self.current()
            .ok_or(SyntaxError::UnexpectedEndOfInput { position: self.position })
    }

    /// Consumes the current character by moving the position forward by one.
    ///
    /// Advancing past the end of the input is a contract violation by the
    /// caller.
    pub fn advance(&mut self) {
        debug_assert!(self.position < self.chars.len());
        self.position += 1;
    }

    /// Returns the character one past the current position without moving,
    /// or `None` if that would be past the end of the input.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    /// Captures the current position for a later [`Scanner::reset`].
    #[must_use]
    pub const fn mark(&self) -> Mark {
        self.position
    }

    /// Restores a position captured by [`Scanner::mark`].
    ///
    /// # Errors
    /// Returns `InvalidMark` if the mark lies outside the scanned input.
    ///
    /// # Example
    /// ```
    /// use lineal::interpreter::scanner::core::Scanner;
    ///
    /// let mut scanner = Scanner::new("ab");
    /// let mark = scanner.mark();
    /// scanner.advance();
    /// scanner.reset(mark).unwrap();
    /// assert_eq!(scanner.current_char().unwrap(), 'a');
    /// ```
    pub fn reset(&mut self, mark: Mark) -> Result<(), SyntaxError> {
        if mark > self.chars.len() {
            return Err(SyntaxError::InvalidMark { mark,
                                                  length: self.chars.len() });
        }

        self.position = mark;
        Ok(())
    }

    /// Reports whether the whole input has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns the current offset into the whitespace-stripped input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// On a mismatch, or at the end of the input, nothing is consumed and
    /// the position does not move.
    ///
    /// # Example
    /// ```
    /// use lineal::interpreter::scanner::core::Scanner;
    ///
    /// let mut scanner = Scanner::new("(1)");
    /// assert!(scanner.match_char('('));
    /// assert!(!scanner.match_char(')'));
    /// assert_eq!(scanner.current_char().unwrap(), '1');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            return true;
        }

        false
    }

    /// Reports whether the current character is a lowercase letter.
    #[must_use]
    pub fn at_letter(&self) -> bool {
        self.current().is_some_and(|c| c.is_ascii_lowercase())
    }

    /// Reports whether the current character is a digit.
    #[must_use]
    pub fn at_digit(&self) -> bool {
        self.current().is_some_and(|c| c.is_ascii_digit())
    }

    /// Reports whether the current character begins a negative number.
    #[must_use]
    pub fn at_negative_sign(&self) -> bool {
        self.current() == Some(NEGATIVE_SIGN)
    }

    /// Reports whether the current character is the decimal point.
    #[must_use]
    pub fn at_decimal_point(&self) -> bool {
        self.current() == Some(DECIMAL_POINT)
    }

    /// Reports whether the current character is an operator.
    #[must_use]
    pub fn at_operator(&self) -> bool {
        self.current().is_some_and(|c| OPERATORS.contains(&c))
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }
}
