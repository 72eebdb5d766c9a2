//! Poses that depend on a parameter, and their velocities.

use crate::dual_rotation::DualRotation;
use crate::dual_twist::{DualTwist, DualTwistIncrement};
use crate::dual_vector::{DualPosition, DualVector};
use crate::transform::{regularization, Transform};
use autodiff::DualNum;
use num_traits::Float;
use std::ops::{Add, Mul, Sub};

/// The regularized `(A, B)` of [`Transform::exp`] for a dual angle.
fn exp_coefficients<P, T: Float>(theta: DualNum<P, T>) -> (DualNum<P, T>, DualNum<P, T>) {
    let eps = regularization::<T>();
    let u = if theta.value() >= T::zero() {
        theta.offset(eps)
    } else {
        theta.offset(-eps)
    };
    let two = T::one() + T::one();
    let half = u.scale(two.recip()).sin();
    (u.sin() / u, (half * half).scale(two) / u)
}

/// A rigid motion whose translation and rotation are functions of `P`.
///
/// # Examples
///
/// ```
/// use autodiff::DualNum;
/// use se2::{DualTransform, DualVector, DualRotation};
///
/// enum Time {}
///
/// // Driving along x at 3 m/s while turning at 1 rad/s, at t = 0
/// let t = DualNum::<Time>::variable(0.0, 3);
/// let pose = DualTransform::new(
///     DualVector::new(t.scale(3.0), DualNum::constant(0.0, 3)),
///     DualRotation::exp(t),
/// );
/// let twist = pose.velocity();
/// assert_eq!(twist.trans_vel.x.value(), 3.0);
/// assert_eq!(twist.rot_vel.value(), 1.0);
/// ```
pub struct DualTransform<P, T = f64> {
    /// Where the moved frame's origin lands.
    pub translation: DualVector<P, T>,
    /// Heading of the moved frame.
    pub rotation: DualRotation<P, T>,
}

impl_dual_traits!(DualTransform { translation, rotation });

impl<P, T: Float> DualTransform<P, T> {
    /// Create a dual transform from its parts.
    pub fn new(translation: DualVector<P, T>, rotation: DualRotation<P, T>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Lift a fixed transform with `order` terms.
    pub fn constant(t: Transform<T>, order: usize) -> Self {
        Self::new(
            DualVector::constant(t.translation, order),
            DualRotation::constant(t.rotation, order),
        )
    }

    /// The plain transform at the current parameter value.
    pub fn value(&self) -> Transform<T> {
        Transform::new(self.translation.value(), self.rotation.value())
    }

    /// Number of terms carried by the rotation.
    pub fn size(&self) -> usize {
        self.rotation.size()
    }

    /// The inverse motion, see [`Transform::inverse`].
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self::new(rotation * -self.translation, rotation)
    }

    /// Composition, see [`Transform::compose`].
    pub fn compose(&self, other: &Self) -> Self {
        *self * *other
    }

    /// [`Transform::exp`] with dual arithmetic throughout.
    pub fn exp(incr: DualTwistIncrement<P, T>) -> Self {
        let (a, b) = exp_coefficients(incr.rot_incr);
        let v = incr.trans_incr;
        Self::new(
            DualVector::new(a * v.x - b * v.y, b * v.x + a * v.y),
            DualRotation::exp(incr.rot_incr),
        )
    }

    /// [`Transform::log`] with dual arithmetic, the angle taken from
    /// [`DualRotation::log`].
    pub fn log(&self) -> DualTwistIncrement<P, T> {
        let theta = self.rotation.log();
        let (a, b) = exp_coefficients(theta);
        let denom = a * a + b * b;
        let t = self.translation;
        DualTwistIncrement::new(
            DualVector::new((a * t.x + b * t.y) / denom, (a * t.y - b * t.x) / denom),
            theta,
        )
    }

    /// `self * exp(incr)`.
    pub fn plus(&self, incr: &DualTwistIncrement<P, T>) -> Self {
        *self * Self::exp(*incr)
    }

    /// `(other⁻¹ * self).log()`.
    pub fn minus(&self, other: &Self) -> DualTwistIncrement<P, T> {
        (other.inverse() * *self).log()
    }

    /// First derivative of the pose: the world-frame velocity of the
    /// origin and the angular rate, each one order shorter than `self`.
    ///
    /// # Panics
    ///
    /// Panics if the pose carries no terms.
    pub fn velocity(&self) -> DualTwist<P, T> {
        DualTwist::new(self.translation.drop(1), self.rotation.velocity())
    }

    /// Re-express as a function of `Q`, given `P` as a function of `Q`.
    pub fn reparam<Q>(&self, old_param: DualNum<Q, T>) -> DualTransform<Q, T> {
        DualTransform::new(
            self.translation.reparam(old_param),
            self.rotation.reparam(old_param),
        )
    }
}

impl<P, T: Float> Mul for DualTransform<P, T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.rotation * rhs.translation + self.translation,
            self.rotation * rhs.rotation,
        )
    }
}

/// Composition with a fixed transform, e.g. a sensor mounted on a
/// moving body.
impl<P, T: Float> Mul<Transform<T>> for DualTransform<P, T> {
    type Output = Self;

    fn mul(self, rhs: Transform<T>) -> Self {
        self * Self::constant(rhs, self.size())
    }
}

impl<P, T: Float> Mul<DualPosition<P, T>> for DualTransform<P, T> {
    type Output = DualPosition<P, T>;

    fn mul(self, p: DualPosition<P, T>) -> DualPosition<P, T> {
        let moved = self.rotation * p.to_vector() + self.translation;
        DualPosition::new(moved.x, moved.y)
    }
}

impl<P, T: Float> Add<DualTwistIncrement<P, T>> for DualTransform<P, T> {
    type Output = Self;

    fn add(self, incr: DualTwistIncrement<P, T>) -> Self {
        self.plus(&incr)
    }
}

impl<P, T: Float> Sub for DualTransform<P, T> {
    type Output = DualTwistIncrement<P, T>;

    fn sub(self, rhs: Self) -> DualTwistIncrement<P, T> {
        self.minus(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Rotation;
    use crate::vector::{Position, Vector};
    use approx::assert_abs_diff_eq;

    enum ArcLength {}
    enum Time {}

    type S = DualNum<ArcLength>;

    fn assert_terms<P>(d: DualNum<P>, expected: &[f64], eps: f64) {
        assert_eq!(d.size(), expected.len(), "size of {:?}", d);
        for (got, want) in d.terms().iter().zip(expected) {
            assert_abs_diff_eq!(*got, *want, epsilon = eps);
        }
    }

    /// Unit-speed arc of curvature `kappa`, as a function of arc length.
    fn arc(s: f64, kappa: f64) -> DualTransform<ArcLength> {
        let s = S::variable(s, 3);
        DualTransform::exp(DualTwistIncrement::new(
            DualVector::new(s, S::constant(0.0, 3)),
            s.scale(kappa),
        ))
    }

    #[test]
    fn arc_at_start_has_unit_tangent_and_curvature() {
        let kappa = 0.8;
        let pose = arc(0.0, kappa);
        assert_terms(pose.translation.x, &[0.0, 1.0, 0.0], 1e-6);
        assert_terms(pose.translation.y, &[0.0, 0.0, kappa], 1e-6);

        let twist = pose.velocity();
        assert_terms(twist.trans_vel.x, &[1.0, 0.0], 1e-6);
        assert_terms(twist.trans_vel.y, &[0.0, kappa], 1e-6);
        assert_terms(twist.rot_vel, &[kappa, 0.0], 1e-12);
    }

    #[test]
    fn arc_matches_closed_form_circle() {
        let kappa = 0.5;
        let s = 1.0;
        let heading = kappa * s;
        let pose = arc(s, kappa);
        assert_terms(
            pose.translation.x,
            &[heading.sin() / kappa, heading.cos(), -kappa * heading.sin()],
            1e-6,
        );
        assert_terms(
            pose.translation.y,
            &[(1.0 - heading.cos()) / kappa, heading.sin(), kappa * heading.cos()],
            1e-6,
        );
        assert_terms(pose.rotation.log(), &[heading, kappa, 0.0], 1e-12);
    }

    #[test]
    fn straight_line_has_no_lateral_motion() {
        let pose = arc(2.0, 0.0);
        assert_terms(pose.translation.x, &[2.0, 1.0, 0.0], 1e-6);
        assert_terms(pose.translation.y, &[0.0, 0.0, 0.0], 1e-6);
        assert_terms(pose.velocity().rot_vel, &[0.0, 0.0], 1e-15);
    }

    #[test]
    fn value_projection_matches_plain_exp() {
        let s = S::variable(0.7, 3);
        let incr = DualTwistIncrement::new(
            DualVector::new(s.scale(2.0), s * s),
            s.offset(-1.2),
        );
        let dual = DualTransform::exp(incr);
        let plain = Transform::exp(incr.value());
        assert_abs_diff_eq!(dual.value().translation.x, plain.translation.x, epsilon = 1e-12);
        assert_abs_diff_eq!(dual.value().translation.y, plain.translation.y, epsilon = 1e-12);
        assert_eq!(dual.value().rotation, plain.rotation);
    }

    #[test]
    fn log_inverts_exp_in_every_term() {
        let s = S::variable(0.3, 3);
        let incr = DualTwistIncrement::new(
            DualVector::new(s.scale(1.5), s.sin()),
            s.scale(2.0).offset(0.4),
        );
        let back = DualTransform::exp(incr).log();
        for (got, want) in [
            (back.trans_incr.x, incr.trans_incr.x),
            (back.trans_incr.y, incr.trans_incr.y),
            (back.rot_incr, incr.rot_incr),
        ] {
            assert_terms(got, want.terms(), 1e-9);
        }
    }

    #[test]
    fn constant_lift_has_zero_velocity() {
        let t = Transform::new(Vector::new(1.0, 2.0), Rotation::exp(0.3));
        let dual = DualTransform::<Time>::constant(t, 3);
        assert_eq!(dual.value(), t);
        let twist = dual.velocity();
        assert_eq!(twist.trans_vel.x.terms(), &[0.0, 0.0]);
        assert_eq!(twist.trans_vel.y.terms(), &[0.0, 0.0]);
        assert_eq!(twist.rot_vel.terms(), &[0.0, 0.0]);
    }

    #[test]
    fn inverse_composes_to_constant_identity() {
        let pose = arc(1.3, -0.6);
        let id = pose * pose.inverse();
        assert_terms(id.translation.x, &[0.0, 0.0, 0.0], 1e-9);
        assert_terms(id.translation.y, &[0.0, 0.0, 0.0], 1e-9);
        assert_terms(id.rotation.log(), &[0.0, 0.0, 0.0], 1e-12);
    }

    #[test]
    fn plus_then_minus_recovers_increment() {
        let base = arc(0.5, 0.4);
        let t = S::variable(0.5, 3);
        let d = DualTwistIncrement::new(DualVector::new(t, t.scale(-0.5)), t.scale(0.3));
        let back = (base + d) - base;
        assert_terms(back.trans_incr.x, d.trans_incr.x.terms(), 1e-9);
        assert_terms(back.trans_incr.y, d.trans_incr.y.terms(), 1e-9);
        assert_terms(back.rot_incr, d.rot_incr.terms(), 1e-9);
    }

    #[test]
    fn mounted_sensor_moves_with_body() {
        // A sensor one unit ahead of a body turning in place at 1 rad/s
        let t = DualNum::<Time>::variable(0.0, 3);
        let body = DualTransform::new(
            DualVector::constant(Vector::zero(), 3),
            DualRotation::exp(t),
        );
        let mount = Transform::new(Vector::new(1.0, 0.0), Rotation::identity());
        let sensor = body * mount;
        assert_terms(sensor.translation.x, &[1.0, 0.0, -1.0], 1e-12);
        assert_terms(sensor.translation.y, &[0.0, 1.0, 0.0], 1e-12);

        let tip = body * DualPosition::constant(Position::new(1.0, 0.0), 3);
        assert_eq!(tip.value(), Position::new(1.0, 0.0));
        assert_terms(tip.drop(1).y, &[1.0, 0.0], 1e-12);
    }

    #[test]
    fn reparam_scales_velocity_by_speed() {
        // Arc of curvature 0.5 driven at ds/dt = 2 from s = 1
        let pose = arc(1.0, 0.5);
        let s_of_t = DualNum::<Time>::new(&[1.0, 2.0, 0.0]);
        let twist = pose.reparam(s_of_t).velocity();
        assert_terms(twist.rot_vel, &[1.0, 0.0], 1e-12);
        assert_abs_diff_eq!(twist.trans_vel.value().norm(), 2.0, epsilon = 1e-6);
    }
}
