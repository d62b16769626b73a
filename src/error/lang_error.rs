use crate::error::{EvalError, SyntaxError};

#[derive(Debug)]
/// Represents any error an input line can produce.
///
/// Parsing can raise both kinds: an assignment evaluates its right-hand side
/// as part of parsing, so an evaluation failure can surface before a
/// statement exists.
pub enum LangError {
    /// The line broke the grammar while being scanned or parsed.
    Syntax(SyntaxError),
    /// The line parsed but could not be evaluated.
    Eval(EvalError),
}

impl std::fmt::Display for LangError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for LangError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}

impl From<SyntaxError> for LangError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<EvalError> for LangError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
