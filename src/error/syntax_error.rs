use crate::ast::BinaryOperator;

#[derive(Debug)]
/// Represents all errors that can occur during scanning or parsing.
///
/// Offsets count characters in the whitespace-stripped input, starting at
/// zero.
pub enum SyntaxError {
    /// A numeric literal broke the number grammar after scanning had
    /// committed to one.
    MalformedNumber {
        /// Details about what is wrong with the literal.
        details:  String,
        /// The offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The offset where the error occurred.
        position: usize,
    },
    /// A specific character was expected but not found.
    ExpectedCharacter {
        /// The character the parser required.
        expected: char,
        /// The character actually found, or `None` at the end of input.
        found:    Option<char>,
        /// The offset where the error occurred.
        position: usize,
    },
    /// A numeric literal was expected but not found.
    ExpectedNumber {
        /// The character actually found, or `None` at the end of input.
        found:    Option<char>,
        /// The offset where the error occurred.
        position: usize,
    },
    /// An expression was expected but nothing parseable begins here.
    ExpectedExpression {
        /// The character actually found, or `None` at the end of input.
        found:    Option<char>,
        /// The offset where the error occurred.
        position: usize,
    },
    /// An operator was consumed but its right-hand operand is missing.
    MissingOperand {
        /// The operator missing an operand.
        operator: BinaryOperator,
        /// The offset where the error occurred.
        position: usize,
    },
    /// A variable name ran into a character that may not follow one.
    InvalidVariableTermination {
        /// The variable name that was scanned.
        name:     String,
        /// The character that followed it.
        found:    char,
        /// The offset where the error occurred.
        position: usize,
    },
    /// Found extra characters after parsing should have consumed everything.
    TrailingInput {
        /// The first unconsumed character.
        found:    char,
        /// The offset where the error occurred.
        position: usize,
    },
    /// The input is neither an assignment nor an expression.
    InvalidStatement,
    /// Tried to reset the scanner to a position outside the input.
    InvalidMark {
        /// The mark that was rejected.
        mark:   usize,
        /// The length of the scanned input.
        length: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { details, position } => {
                write!(f, "Syntax error at offset {position}: Malformed number: {details}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Syntax error at offset {position}: Unexpected end of input.")
            },

            Self::ExpectedCharacter { expected, found, position } => match found {
                Some(c) => write!(f,
                                  "Syntax error at offset {position}: Expected '{expected}' but found '{c}'."),
                None => write!(f,
                               "Syntax error at offset {position}: Expected '{expected}' but the input ended."),
            },

            Self::ExpectedNumber { found, position } => match found {
                Some(c) => write!(f,
                                  "Syntax error at offset {position}: Expected a number but found '{c}'."),
                None => write!(f,
                               "Syntax error at offset {position}: Expected a number but the input ended."),
            },

            Self::ExpectedExpression { found, position } => match found {
                Some(c) => write!(f,
                                  "Syntax error at offset {position}: Expected an expression but found '{c}'."),
                None => write!(f,
                               "Syntax error at offset {position}: Expected an expression but the input ended."),
            },

            Self::MissingOperand { operator, position } => write!(f,
                                                                  "Syntax error at offset {position}: Missing right-hand operand after '{operator}'."),

            Self::InvalidVariableTermination { name, found, position } => write!(f,
                                                                                 "Syntax error at offset {position}: Variable '{name}' may not be followed by '{found}'."),

            Self::TrailingInput { found, position } => write!(f,
                                                              "Syntax error at offset {position}: Extra characters after a complete statement: '{found}'."),

            Self::InvalidStatement => {
                write!(f, "Syntax error: Input is neither an assignment nor an expression.")
            },
            Self::InvalidMark { mark, length } => {
                write!(f, "Syntax error: Mark {mark} is out of range for input of length {length}.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
