use crate::interpreter::value::vec2::Vec2;

/// Represents a runtime value in the interpreter.
///
/// This enum models the two kinds a computed result can have. Exactly one
/// variant is populated, and a value never changes once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A scalar number (double precision floating-point).
    Scalar(f64),
    /// A 2-dimensional vector of scalars.
    Vector(Vec2),
}

/// The kind of a [`Value`], without its contents.
///
/// Used by arithmetic dispatch and for reporting which operand kinds an
/// operation was attempted between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The value is a scalar number.
    Scalar,
    /// The value is a 2-dimensional vector.
    Vector,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Self::Vector(v)
    }
}

impl Value {
    /// Reports the kind of the value.
    ///
    /// # Example
    /// ```
    /// use lineal::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Scalar(1.0).kind(), ValueKind::Scalar);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Vector(_) => ValueKind::Vector,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(n) => write!(f, "{n}"),
            Self::Vector(v) => write!(f, "{v}"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => write!(f, "Scalar"),
            Self::Vector => write!(f, "Vector"),
        }
    }
}
