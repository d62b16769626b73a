/// 2-dimensional vector support.
///
/// Defines the `Vec2` type used for vector arithmetic, including the
/// componentwise operations between two vectors and the broadcast operations
/// between a vector and a scalar.
pub mod vec2;

pub mod core;
