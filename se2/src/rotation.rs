//! Planar rotations, SO(2), as unit complex numbers.

use crate::vector::Vector;
use algebra_core::{Group, LieGroup, Monoid, Semigroup};
use num_traits::Float;
use std::ops::{Mul, Sub};

/// `atan2(imag, real)` folded into `(-π, π]`: a half turn is always `+π`.
pub(crate) fn wrapped_atan2<T: Float>(imag: T, real: T) -> T {
    let angle = imag.atan2(real);
    let half_turn = T::zero().atan2(-T::one());
    if angle <= -half_turn {
        half_turn
    } else {
        angle
    }
}

/// A rotation stored as the unit complex number `real + i·imag`.
///
/// `real² + imag² = 1` is assumed by every operation and never
/// renormalized; build rotations with [`Rotation::exp`] or by composing
/// other rotations to keep it.
///
/// # Examples
///
/// ```
/// use se2::{Rotation, Vector};
/// use std::f64::consts::FRAC_PI_2;
///
/// let quarter = Rotation::exp(FRAC_PI_2);
/// let v = quarter * Vector::new(1.0, 0.0);
/// assert!((v.x - 0.0).abs() < 1e-12);
/// assert!((v.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation<T = f64> {
    /// Cosine of the angle.
    pub real: T,
    /// Sine of the angle.
    pub imag: T,
}

impl<T: Float> Rotation<T> {
    /// Create a rotation from its complex components.
    pub fn new(real: T, imag: T) -> Self {
        Self { real, imag }
    }

    /// The identity rotation `(1, 0)`.
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The rotation by `theta` radians: `(cos θ, sin θ)`.
    pub fn exp(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    /// The angle of this rotation, `atan2(imag, real)`, in `(-π, π]`.
    pub fn log(&self) -> T {
        wrapped_atan2(self.imag, self.real)
    }

    /// The inverse rotation (complex conjugate).
    pub fn inverse(&self) -> Self {
        Self::new(self.real, -self.imag)
    }

    /// The unit heading vector `(real, imag)`.
    pub fn vec(&self) -> Vector<T> {
        Vector::new(self.real, self.imag)
    }

    /// `self * other`: rotate by `other`, then by `self`.
    pub fn compose(&self, other: &Self) -> Self {
        *self * *other
    }

    /// `self * v`: rotate a vector.
    pub fn act(&self, v: &Vector<T>) -> Vector<T> {
        *self * *v
    }

    /// Signed angle from `other` to `self`, wrapped to `(-π, π]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use se2::Rotation;
    ///
    /// let a = Rotation::exp(3.0);
    /// let b = Rotation::exp(-3.0);
    /// // The short way round crosses ±π.
    /// assert!((a.minus(&b) - (6.0 - 2.0 * std::f64::consts::PI)).abs() < 1e-12);
    /// ```
    pub fn minus(&self, other: &Self) -> T {
        <Self as LieGroup>::minus(self, other)
    }
}

/// Composition: complex multiplication.
impl<T: Float> Mul for Rotation<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

/// Action on a vector: the same complex multiplication.
impl<T: Float> Mul<Vector<T>> for Rotation<T> {
    type Output = Vector<T>;

    fn mul(self, v: Vector<T>) -> Vector<T> {
        Vector::new(
            self.real * v.x - self.imag * v.y,
            self.imag * v.x + self.real * v.y,
        )
    }
}

/// `a - b` is [`Rotation::minus`].
impl<T: Float> Sub for Rotation<T> {
    type Output = T;

    fn sub(self, rhs: Self) -> T {
        self.minus(&rhs)
    }
}

impl<T: Float> Semigroup for Rotation<T> {
    fn combine(&self, other: &Self) -> Self {
        self.compose(other)
    }
}

impl<T: Float> Monoid for Rotation<T> {
    fn empty() -> Self {
        Self::identity()
    }
}

impl<T: Float> Group for Rotation<T> {
    fn inverse(&self) -> Self {
        Self::inverse(self)
    }
}

impl<T: Float> LieGroup for Rotation<T> {
    type Tangent = T;

    fn exp(theta: &T) -> Self {
        Self::exp(*theta)
    }

    fn log(&self) -> T {
        Self::log(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn exp_of_zero_is_identity() {
        assert_eq!(Rotation::exp(0.0), Rotation::identity());
        assert_eq!(Rotation::exp(0.0).log(), 0.0);
    }

    #[test]
    fn exp_of_quarter_turn() {
        let r = Rotation::exp(FRAC_PI_2);
        assert_abs_diff_eq!(r.real, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.imag, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn log_inverts_exp() {
        for i in -19..=20 {
            let theta = PI * f64::from(i) / 20.0;
            assert_abs_diff_eq!(Rotation::exp(theta).log(), theta, epsilon = 1e-12);
        }
    }

    #[test]
    fn inverse_composes_to_identity() {
        for theta in [-2.5, -0.3, 0.0, 1.1, 3.0] {
            let r = Rotation::exp(theta);
            let id = r * r.inverse();
            assert_relative_eq!(id.real, 1.0, epsilon = 1e-15);
            assert_abs_diff_eq!(id.imag, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn composition_adds_angles() {
        let r = Rotation::exp(0.4) * Rotation::exp(0.9);
        assert_abs_diff_eq!(r.log(), 1.3, epsilon = 1e-12);
    }

    #[test]
    fn action_preserves_norm() {
        let v = Vector::new(-2.0, 7.5);
        for theta in [-3.0, -1.0, 0.25, 2.0] {
            let rotated = Rotation::exp(theta) * v;
            assert_relative_eq!(rotated.norm(), v.norm(), epsilon = 1e-12);
        }
    }

    #[test]
    fn minus_is_wrapped_relative_angle() {
        let a = Rotation::exp(0.5);
        let b = Rotation::exp(0.2);
        assert_abs_diff_eq!(a - b, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(b - a, -0.3, epsilon = 1e-12);

        let c = Rotation::exp(PI - 0.1);
        let d = Rotation::exp(-PI + 0.1);
        assert_abs_diff_eq!(d - c, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(c - d, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn heading_vector_is_unit() {
        let r = Rotation::exp(1.2);
        assert_relative_eq!(r.vec().norm(), 1.0, epsilon = 1e-15);
        assert_eq!(r.vec(), r * Vector::new(1.0, 0.0));
    }

    #[test]
    fn half_turn_logs_to_positive_pi() {
        assert_eq!(Rotation::exp(PI).inverse().log(), PI);
        assert_eq!(Rotation::new(-1.0, -0.0).log(), PI);
        assert_eq!(Rotation::new(-1.0, 0.0).log(), PI);
        assert_eq!(Rotation::identity().minus(&Rotation::exp(PI)), PI);
        assert_abs_diff_eq!(Rotation::exp(PI).minus(&Rotation::identity()), PI, epsilon = 1e-15);
    }

    #[test]
    fn lie_group_plus_rotates_by_increment() {
        let r = Rotation::exp(1.0);
        let moved = r.plus(&0.5);
        assert_abs_diff_eq!(moved.log(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Rotation::concat([r, r.inverse()]).imag, 0.0, epsilon = 1e-15);
    }
}
