//! Free vectors and affine points in the plane.
//!
//! [`Vector`] is a displacement: it can be added, negated and scaled.
//! [`Position`] is a point: the only arithmetic it supports is
//! `Position + Vector = Position` and `Position − Position = Vector`,
//! so adding two points or taking the norm of a point does not compile.

use algebra_core::{AbelianGroup, CommutativeMonoid, Group, Monoid, Semigroup};
use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A free displacement `(x, y)`.
///
/// Vectors form an abelian group under addition; the `algebra_core`
/// implementations are derived field by field.
///
/// # Examples
///
/// ```
/// use se2::Vector;
///
/// let v = Vector::new(3.0, 4.0);
/// assert_eq!(v.norm(), 5.0);
/// assert_eq!(v * 2.0 - v, v);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[derive(Semigroup, Monoid, CommutativeMonoid, Group, AbelianGroup)]
pub struct Vector<T = f64> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

impl<T: Float> Vector<T> {
    /// Create a vector from its components.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean norm, `dot(self, self)`.
    pub fn sqr_norm(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> T {
        self.sqr_norm().sqrt()
    }
}

impl<T: Float> Add for Vector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Scaling by a scalar.
impl<T: Float> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, k: T) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl<T: Float> Div<T> for Vector<T> {
    type Output = Self;

    fn div(self, k: T) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

/// A point `(x, y)` in the plane.
///
/// # Examples
///
/// ```
/// use se2::{Position, Vector};
///
/// let a = Position::new(1.0, 1.0);
/// let b = a + Vector::new(2.0, 0.0);
/// assert_eq!(b - a, Vector::new(2.0, 0.0));
/// ```
///
/// Points cannot be added:
///
/// ```compile_fail
/// use se2::Position;
///
/// let _ = Position::new(1.0, 1.0) + Position::new(2.0, 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position<T = f64> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

impl<T: Float> Position<T> {
    /// Create a point from its coordinates.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin of the frame.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Displacement of this point from the origin.
    pub fn to_vector(&self) -> Vector<T> {
        *self - Self::origin()
    }
}

impl<T: Float> Add<Vector<T>> for Position<T> {
    type Output = Self;

    fn add(self, rhs: Vector<T>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub<Vector<T>> for Position<T> {
    type Output = Self;

    fn sub(self, rhs: Vector<T>) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Sub for Position<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: Self) -> Vector<T> {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn norm_and_dot() {
        let v = Vector::new(3.0, -4.0);
        assert_eq!(v.sqr_norm(), 25.0);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.dot(&Vector::new(1.0, 1.0)), -1.0);
        assert_eq!(Vector::new(1.0, 0.0).dot(&Vector::new(0.0, 1.0)), 0.0);
    }

    #[test]
    fn vector_space_operations() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(-0.5, 4.0);
        assert_eq!(a + b, Vector::new(0.5, 6.0));
        assert_eq!(a - b, Vector::new(1.5, -2.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0));
        assert_eq!(b * 2.0, Vector::new(-1.0, 8.0));
        assert_eq!(b / 2.0, Vector::new(-0.25, 2.0));
    }

    #[test]
    fn derived_group_matches_operators() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -1.0);
        assert_eq!(a.combine(&b), a + b);
        assert_eq!(a.inverse(), -a);
        assert_eq!(Vector::<f64>::empty(), Vector::zero());
        assert_eq!(Vector::concat([a, b, -a]), b);
    }

    #[test]
    fn works_in_single_precision() {
        let v = Vector::new(0.6_f32, 0.8_f32);
        assert_relative_eq!(v.norm(), 1.0_f32);
    }

    #[test]
    fn affine_point_arithmetic() {
        let p = Position::new(2.0, 3.0);
        let q = Position::new(-1.0, 1.0);
        let d = p - q;
        assert_eq!(d, Vector::new(3.0, 2.0));
        assert_eq!(q + d, p);
        assert_eq!(p - d, q);
        assert_eq!(p.to_vector(), Vector::new(2.0, 3.0));
        assert_eq!(Position::<f64>::origin().to_vector(), Vector::zero());
    }
}
