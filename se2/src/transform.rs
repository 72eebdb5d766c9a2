//! Rigid motions, SE(2), and their exponential and logarithm maps.
//!
//! # Exponential map
//!
//! A constant body twist `(v, θ)` applied for unit time moves the frame by
//!
//! ```text
//! R = exp(θ)
//! t = [A  −B] v      A = sin θ / θ
//!     [B   A]        B = (1 − cos θ) / θ
//! ```
//!
//! Both coefficients have a removable singularity at θ = 0. Instead of a
//! special case, θ is nudged away from zero by [`regularization`] in the
//! direction of its sign, `u = θ + ε·sign(θ)` with `sign(0) = +1`, so the
//! same smooth formula is evaluated everywhere. `1 − cos u` is computed as
//! `2·sin²(u/2)`.

use crate::rotation::Rotation;
use crate::twist::TwistIncrement;
use crate::vector::{Position, Vector};
use algebra_core::{Group, LieGroup, Monoid, Semigroup};
use num_traits::Float;
use std::ops::{Add, Mul, Sub};

/// The nudge `ε` applied to the rotation angle in [`Transform::exp`] and
/// [`Transform::log`]: the square root of the machine epsilon of `T`.
///
/// ```
/// assert!((se2::regularization::<f64>() - 1.49e-8).abs() < 1e-10);
/// ```
pub fn regularization<T: Float>() -> T {
    T::epsilon().sqrt()
}

/// `(A, B)` for the angle `theta`, regularized.
fn exp_coefficients<T: Float>(theta: T) -> (T, T) {
    let eps = regularization::<T>();
    let u = if theta >= T::zero() {
        theta + eps
    } else {
        theta - eps
    };
    let two = T::one() + T::one();
    let half = (u / two).sin();
    (u.sin() / u, two * half * half / u)
}

/// A rigid motion: rotate by `rotation`, then translate by `translation`.
///
/// As a pose, it is the frame whose origin sits at `translation` and
/// whose heading is `rotation`.
///
/// # Examples
///
/// ```
/// use se2::{Position, Rotation, Transform, Vector};
/// use std::f64::consts::FRAC_PI_2;
///
/// let pose = Transform::new(Vector::new(1.0, 0.0), Rotation::exp(FRAC_PI_2));
/// let p = pose * Position::new(1.0, 0.0);
/// assert!((p.x - 1.0).abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform<T = f64> {
    /// Where the moved frame's origin lands.
    pub translation: Vector<T>,
    /// Heading of the moved frame.
    pub rotation: Rotation<T>,
}

impl<T: Float> Transform<T> {
    /// Create a transform from its parts.
    pub fn new(translation: Vector<T>, rotation: Rotation<T>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// The identity motion.
    pub fn identity() -> Self {
        Self::new(Vector::zero(), Rotation::identity())
    }

    /// The inverse motion, `(R⁻¹·(−t), R⁻¹)`.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self::new(rotation * -self.translation, rotation)
    }

    /// `self * other`: `other` expressed in `self`'s frame.
    pub fn compose(&self, other: &Self) -> Self {
        *self * *other
    }

    /// `self * p`: map a point from this frame to the parent frame.
    pub fn act(&self, p: &Position<T>) -> Position<T> {
        *self * *p
    }

    /// The motion produced by following `incr` for unit time.
    ///
    /// # Examples
    ///
    /// ```
    /// use se2::{Transform, TwistIncrement, Vector};
    /// use std::f64::consts::PI;
    ///
    /// // Half a circle of radius 1, driving forwards.
    /// let t = Transform::exp(TwistIncrement::new(Vector::new(PI, 0.0), PI));
    /// assert!((t.translation.x - 0.0).abs() < 1e-6);
    /// assert!((t.translation.y - 2.0).abs() < 1e-6);
    /// ```
    pub fn exp(incr: TwistIncrement<T>) -> Self {
        let (a, b) = exp_coefficients(incr.rot_incr);
        let v = incr.trans_incr;
        Self::new(
            Vector::new(a * v.x - b * v.y, b * v.x + a * v.y),
            Rotation::exp(incr.rot_incr),
        )
    }

    /// The increment whose exponential is this motion, with the angle in
    /// `(-π, π]`.
    pub fn log(&self) -> TwistIncrement<T> {
        let theta = self.rotation.log();
        let (a, b) = exp_coefficients(theta);
        let denom = a * a + b * b;
        let t = self.translation;
        TwistIncrement::new(
            Vector::new((a * t.x + b * t.y) / denom, (a * t.y - b * t.x) / denom),
            theta,
        )
    }

    /// `self * exp(incr)`: move by `incr` in this frame.
    pub fn plus(&self, incr: &TwistIncrement<T>) -> Self {
        <Self as LieGroup>::plus(self, incr)
    }

    /// `(other⁻¹ * self).log()`: the increment that takes `other` to `self`.
    pub fn minus(&self, other: &Self) -> TwistIncrement<T> {
        <Self as LieGroup>::minus(self, other)
    }
}

/// Composition.
impl<T: Float> Mul for Transform<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.rotation * rhs.translation + self.translation,
            self.rotation * rhs.rotation,
        )
    }
}

impl<T: Float> Mul<Position<T>> for Transform<T> {
    type Output = Position<T>;

    fn mul(self, p: Position<T>) -> Position<T> {
        Position::origin() + (self.rotation * p.to_vector() + self.translation)
    }
}

/// `pose + incr` is [`Transform::plus`].
impl<T: Float> Add<TwistIncrement<T>> for Transform<T> {
    type Output = Self;

    fn add(self, incr: TwistIncrement<T>) -> Self {
        self.plus(&incr)
    }
}

/// `a - b` is [`Transform::minus`].
impl<T: Float> Sub for Transform<T> {
    type Output = TwistIncrement<T>;

    fn sub(self, rhs: Self) -> TwistIncrement<T> {
        self.minus(&rhs)
    }
}

impl<T: Float> Semigroup for Transform<T> {
    fn combine(&self, other: &Self) -> Self {
        self.compose(other)
    }
}

impl<T: Float> Monoid for Transform<T> {
    fn empty() -> Self {
        Self::identity()
    }
}

impl<T: Float> Group for Transform<T> {
    fn inverse(&self) -> Self {
        Self::inverse(self)
    }
}

impl<T: Float> LieGroup for Transform<T> {
    type Tangent = TwistIncrement<T>;

    fn exp(incr: &TwistIncrement<T>) -> Self {
        Self::exp(*incr)
    }

    fn log(&self) -> TwistIncrement<T> {
        Self::log(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_transform_eq(a: Transform, b: Transform, eps: f64) {
        assert_abs_diff_eq!(a.translation.x, b.translation.x, epsilon = eps);
        assert_abs_diff_eq!(a.translation.y, b.translation.y, epsilon = eps);
        assert_abs_diff_eq!(a.rotation.real, b.rotation.real, epsilon = eps);
        assert_abs_diff_eq!(a.rotation.imag, b.rotation.imag, epsilon = eps);
    }

    fn assert_incr_eq(a: TwistIncrement, b: TwistIncrement, eps: f64) {
        assert_abs_diff_eq!(a.trans_incr.x, b.trans_incr.x, epsilon = eps);
        assert_abs_diff_eq!(a.trans_incr.y, b.trans_incr.y, epsilon = eps);
        assert_abs_diff_eq!(a.rot_incr, b.rot_incr, epsilon = eps);
    }

    fn sample() -> Transform {
        Transform::new(Vector::new(1.5, -0.5), Rotation::exp(2.0))
    }

    #[test]
    fn composition_of_translations() {
        let a = Transform::new(Vector::new(1.0, 0.0), Rotation::identity());
        let b = Transform::new(Vector::new(0.0, 1.0), Rotation::identity());
        assert_eq!(a * b, Transform::new(Vector::new(1.0, 1.0), Rotation::identity()));
    }

    #[test]
    fn left_rotation_acts_on_right_translation() {
        let turn = Transform::new(Vector::new(1.0, 0.0), Rotation::exp(FRAC_PI_2));
        let step = Transform::new(Vector::new(2.0, 0.0), Rotation::identity());
        let moved = turn * step;
        assert_abs_diff_eq!(moved.translation.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.translation.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_composes_to_identity() {
        let t = sample();
        assert_transform_eq(t * t.inverse(), Transform::identity(), 1e-12);
        assert_transform_eq(t.inverse() * t, Transform::identity(), 1e-12);
    }

    #[test]
    fn action_on_points_matches_composition() {
        let t = sample();
        let p = Position::new(0.3, 0.7);
        let via_transform = t * Transform::new(p.to_vector(), Rotation::identity());
        let q = t * p;
        assert_abs_diff_eq!(q.x, via_transform.translation.x, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, via_transform.translation.y, epsilon = 1e-12);
    }

    #[test]
    fn log_inverts_exp() {
        for theta in [-3.0, -1.0, -1e-9, 0.0, 1e-9, 0.5, 3.0] {
            let incr = TwistIncrement::new(Vector::new(0.8, -0.3), theta);
            assert_incr_eq(Transform::exp(incr).log(), incr, 1e-12);
        }
    }

    #[test]
    fn exp_inverts_log() {
        let t = sample();
        assert_transform_eq(Transform::exp(t.log()), t, 1e-12);
    }

    #[test]
    fn exp_follows_a_circle() {
        let incr = TwistIncrement::new(Vector::new(FRAC_PI_2, 0.0), FRAC_PI_2);
        let t = Transform::exp(incr);
        assert_abs_diff_eq!(t.translation.x, 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(t.translation.y, 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(t.rotation.log(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn exp_without_rotation_is_nearly_a_translation() {
        let t = Transform::exp(TwistIncrement::new(Vector::new(1.0, 2.0), 0.0));
        assert_eq!(t.rotation, Rotation::identity());
        assert_abs_diff_eq!(t.translation.x, 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(t.translation.y, 2.0, epsilon = 1e-7);
    }

    #[test]
    fn exp_near_zero_rotation_agrees_on_both_sides() {
        let v = Vector::new(1.0, 0.0);
        let below = Transform::exp(TwistIncrement::new(v, -1e-12));
        let above = Transform::exp(TwistIncrement::new(v, 1e-12));
        assert_transform_eq(below, above, 1e-7);
    }

    #[test]
    fn plus_then_minus_recovers_increment() {
        let t = sample();
        let d = TwistIncrement::new(Vector::new(0.4, 0.1), -0.7);
        assert_incr_eq((t + d) - t, d, 1e-12);
        assert_transform_eq(t + ((t + d) - t), t + d, 1e-12);
    }

    #[test]
    fn minus_across_the_branch_cut() {
        let a = Transform::new(Vector::zero(), Rotation::exp(PI - 0.1));
        let b = Transform::new(Vector::zero(), Rotation::exp(-PI + 0.1));
        assert_abs_diff_eq!((b - a).rot_incr, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn lie_group_impl_agrees_with_inherent_methods() {
        let t = sample();
        let d = TwistIncrement::new(Vector::new(-0.2, 0.9), 1.1);
        assert_eq!(<Transform as LieGroup>::exp(&d), Transform::exp(d));
        assert_eq!(t.combine(&t.inverse()), t * t.inverse());
        assert_eq!(Transform::<f64>::empty(), Transform::identity());
    }
}
