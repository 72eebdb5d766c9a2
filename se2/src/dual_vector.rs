//! Vectors and points whose coordinates carry derivatives.

use crate::vector::{Position, Vector};
use autodiff::DualNum;
use num_traits::Float;
use std::ops::{Add, Mul, Neg, Sub};

/// A [`Vector`] whose components are functions of the parameter `P`.
pub struct DualVector<P, T = f64> {
    /// X component.
    pub x: DualNum<P, T>,
    /// Y component.
    pub y: DualNum<P, T>,
}

impl_dual_traits!(DualVector { x, y });

impl<P, T: Float> DualVector<P, T> {
    /// Create a dual vector from its components.
    pub fn new(x: DualNum<P, T>, y: DualNum<P, T>) -> Self {
        Self { x, y }
    }

    /// Lift a plain vector with `order` terms, all derivatives zero.
    pub fn constant(v: Vector<T>, order: usize) -> Self {
        Self::new(DualNum::constant(v.x, order), DualNum::constant(v.y, order))
    }

    /// The plain vector at the current parameter value.
    pub fn value(&self) -> Vector<T> {
        Vector::new(self.x.value(), self.y.value())
    }

    /// Discard the `n` lowest orders of both components.
    pub fn drop(&self, n: usize) -> Self {
        Self::new(self.x.drop(n), self.y.drop(n))
    }

    /// Re-express as a function of `Q`, given `P` as a function of `Q`.
    pub fn reparam<Q>(&self, old_param: DualNum<Q, T>) -> DualVector<Q, T> {
        DualVector::new(self.x.reparam(old_param), self.y.reparam(old_param))
    }

    /// Multiply both components by the plain scalar `k`.
    pub fn scale(&self, k: T) -> Self {
        Self::new(self.x.scale(k), self.y.scale(k))
    }

    /// Dot product, with the product rule applied.
    pub fn dot(&self, other: &Self) -> DualNum<P, T> {
        self.x * other.x + self.y * other.y
    }

    /// Squared length.
    pub fn sqr_norm(&self) -> DualNum<P, T> {
        self.dot(self)
    }

    /// Length. Its derivatives are undefined at the zero vector.
    pub fn norm(&self) -> DualNum<P, T> {
        self.sqr_norm().sqrt()
    }
}

impl<P, T: Float> Add for DualVector<P, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<P, T: Float> Sub for DualVector<P, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<P, T: Float> Neg for DualVector<P, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Scaling by a dual scalar.
impl<P, T: Float> Mul<DualNum<P, T>> for DualVector<P, T> {
    type Output = Self;

    fn mul(self, k: DualNum<P, T>) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

/// A [`Position`] moving with the parameter `P`.
///
/// Its derivatives are vectors, so [`DualPosition::drop`] returns a
/// [`DualVector`].
pub struct DualPosition<P, T = f64> {
    /// X coordinate.
    pub x: DualNum<P, T>,
    /// Y coordinate.
    pub y: DualNum<P, T>,
}

impl_dual_traits!(DualPosition { x, y });

impl<P, T: Float> DualPosition<P, T> {
    /// Create a dual point from its coordinates.
    pub fn new(x: DualNum<P, T>, y: DualNum<P, T>) -> Self {
        Self { x, y }
    }

    /// Lift a fixed point with `order` terms.
    pub fn constant(p: Position<T>, order: usize) -> Self {
        Self::new(DualNum::constant(p.x, order), DualNum::constant(p.y, order))
    }

    /// The plain point at the current parameter value.
    pub fn value(&self) -> Position<T> {
        Position::new(self.x.value(), self.y.value())
    }

    /// Displacement from the origin.
    pub fn to_vector(&self) -> DualVector<P, T> {
        DualVector::new(self.x, self.y)
    }

    /// Discard the `n` lowest orders; `drop(1)` is the velocity.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    /// use se2::DualPosition;
    ///
    /// enum Time {}
    ///
    /// // p(t) = (t, t²) at t = 1
    /// let t = DualNum::<Time>::variable(1.0, 3);
    /// let p = DualPosition::new(t, t * t);
    /// let v = p.drop(1);
    /// assert_eq!(v.x.terms(), &[1.0, 0.0]);
    /// assert_eq!(v.y.terms(), &[2.0, 2.0]);
    /// ```
    pub fn drop(&self, n: usize) -> DualVector<P, T> {
        DualVector::new(self.x.drop(n), self.y.drop(n))
    }

    /// Re-express as a function of `Q`, given `P` as a function of `Q`.
    pub fn reparam<Q>(&self, old_param: DualNum<Q, T>) -> DualPosition<Q, T> {
        DualPosition::new(self.x.reparam(old_param), self.y.reparam(old_param))
    }
}

impl<P, T: Float> Add<DualVector<P, T>> for DualPosition<P, T> {
    type Output = Self;

    fn add(self, rhs: DualVector<P, T>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<P, T: Float> Sub<DualVector<P, T>> for DualPosition<P, T> {
    type Output = Self;

    fn sub(self, rhs: DualVector<P, T>) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<P, T: Float> Sub for DualPosition<P, T> {
    type Output = DualVector<P, T>;

    fn sub(self, rhs: Self) -> DualVector<P, T> {
        DualVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}
