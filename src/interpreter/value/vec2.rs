use std::{fmt::Display, ops};

/// Represents a 2-dimensional vector with an x and a y component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f64,
    /// The y component of the vector.
    pub y: f64,
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl Vec2 {
    /// Constructs a new vector from its two components.
    ///
    /// # Parameters
    /// - `x`: The x component.
    /// - `y`: The y component.
    ///
    /// # Returns
    /// The new `Vec2`.
    ///
    /// # Example
    /// ```
    /// use lineal::interpreter::value::vec2::Vec2;
    /// let v = Vec2::new(5.0, -1.0);
    /// assert_eq!(v.x, 5.0);
    /// assert_eq!(v.y, -1.0);
    /// ```
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x,
               y: self.y + rhs.y, }
    }
}

impl ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x,
               y: self.y - rhs.y, }
    }
}

impl ops::Mul for Vec2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { x: self.x * rhs.x,
               y: self.y * rhs.y, }
    }
}

impl ops::Div for Vec2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self { x: self.x / rhs.x,
               y: self.y / rhs.y, }
    }
}

impl ops::Add<f64> for Vec2 {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        Self { x: self.x + rhs,
               y: self.y + rhs, }
    }
}

impl ops::Sub<f64> for Vec2 {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        Self { x: self.x - rhs,
               y: self.y - rhs, }
    }
}

impl ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self { x: self.x * rhs,
               y: self.y * rhs, }
    }
}

impl ops::Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self { x: self.x / rhs,
               y: self.y / rhs, }
    }
}
