//! Twists and increments carrying derivatives.

use crate::dual_vector::DualVector;
use crate::twist::{Twist, TwistIncrement};
use autodiff::DualNum;
use num_traits::Float;
use std::ops::Add;

/// A [`Twist`] as a function of the parameter `P`.
///
/// Produced by [`DualTransform::velocity`]; its value is the velocity and
/// its remaining terms the acceleration.
///
/// [`DualTransform::velocity`]: crate::DualTransform::velocity
pub struct DualTwist<P, T = f64> {
    /// Linear velocity.
    pub trans_vel: DualVector<P, T>,
    /// Angular velocity.
    pub rot_vel: DualNum<P, T>,
}

impl_dual_traits!(DualTwist { trans_vel, rot_vel });

impl<P, T: Float> DualTwist<P, T> {
    /// Create a dual twist from its parts.
    pub fn new(trans_vel: DualVector<P, T>, rot_vel: DualNum<P, T>) -> Self {
        Self { trans_vel, rot_vel }
    }

    /// Lift a fixed twist with `order` terms.
    pub fn constant(twist: Twist<T>, order: usize) -> Self {
        Self::new(
            DualVector::constant(twist.trans_vel, order),
            DualNum::constant(twist.rot_vel, order),
        )
    }

    /// The plain twist at the current parameter value.
    pub fn value(&self) -> Twist<T> {
        Twist::new(self.trans_vel.value(), self.rot_vel.value())
    }

    /// Discard the `n` lowest orders of every component.
    pub fn drop(&self, n: usize) -> Self {
        Self::new(self.trans_vel.drop(n), self.rot_vel.drop(n))
    }

    /// Re-express as a function of `Q`.
    ///
    /// Only the components are re-expressed: a rate with respect to `P`
    /// stays a rate with respect to `P`. To turn a velocity per unit arc
    /// length into one per unit time, reparametrize the pose first and
    /// take its velocity afterwards.
    pub fn reparam<Q>(&self, old_param: DualNum<Q, T>) -> DualTwist<Q, T> {
        DualTwist::new(
            self.trans_vel.reparam(old_param),
            self.rot_vel.reparam(old_param),
        )
    }
}

impl<P, T: Float> Add for DualTwist<P, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.trans_vel + rhs.trans_vel, self.rot_vel + rhs.rot_vel)
    }
}

/// A [`TwistIncrement`] as a function of the parameter `P`.
pub struct DualTwistIncrement<P, T = f64> {
    /// Translational part.
    pub trans_incr: DualVector<P, T>,
    /// Rotation angle.
    pub rot_incr: DualNum<P, T>,
}

impl_dual_traits!(DualTwistIncrement { trans_incr, rot_incr });

impl<P, T: Float> DualTwistIncrement<P, T> {
    /// Create a dual increment from its parts.
    pub fn new(trans_incr: DualVector<P, T>, rot_incr: DualNum<P, T>) -> Self {
        Self {
            trans_incr,
            rot_incr,
        }
    }

    /// Lift a fixed increment with `order` terms.
    pub fn constant(incr: TwistIncrement<T>, order: usize) -> Self {
        Self::new(
            DualVector::constant(incr.trans_incr, order),
            DualNum::constant(incr.rot_incr, order),
        )
    }

    /// The plain increment at the current parameter value.
    pub fn value(&self) -> TwistIncrement<T> {
        TwistIncrement::new(self.trans_incr.value(), self.rot_incr.value())
    }

    /// Discard the `n` lowest orders of every component.
    pub fn drop(&self, n: usize) -> Self {
        Self::new(self.trans_incr.drop(n), self.rot_incr.drop(n))
    }

    /// Re-express as a function of `Q`, given `P` as a function of `Q`.
    pub fn reparam<Q>(&self, old_param: DualNum<Q, T>) -> DualTwistIncrement<Q, T> {
        DualTwistIncrement::new(
            self.trans_incr.reparam(old_param),
            self.rot_incr.reparam(old_param),
        )
    }
}

impl<P, T: Float> Add for DualTwistIncrement<P, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.trans_incr + rhs.trans_incr, self.rot_incr + rhs.rot_incr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    enum Time {}
    enum ArcLength {}

    #[test]
    fn constant_lift_round_trips_and_has_no_acceleration() {
        let twist = Twist::new(Vector::new(1.0, -0.5), 0.25);
        let dual = DualTwist::<Time>::constant(twist, 2);
        assert_eq!(dual.value(), twist);
        let accel = dual.drop(1);
        assert_eq!(accel.trans_vel.x.terms(), &[0.0]);
        assert_eq!(accel.trans_vel.y.terms(), &[0.0]);
        assert_eq!(accel.rot_vel.terms(), &[0.0]);
    }

    #[test]
    fn addition_is_componentwise() {
        let t = DualNum::<Time>::variable(1.0, 3);
        let a = DualTwist::new(DualVector::new(t, t), t);
        let b = DualTwist::constant(Twist::new(Vector::new(2.0, 0.0), -1.0), 3);
        let sum = a + b;
        assert_eq!(sum.value(), Twist::new(Vector::new(3.0, 1.0), 0.0));
        assert_eq!(sum.rot_vel.terms(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn twist_reparam_applies_chain_rule() {
        // Components linear in s; s(t) = 2t + t² at t = 0
        let s = DualNum::<ArcLength>::variable(0.0, 3);
        let twist = DualTwist::new(DualVector::new(s.scale(3.0), s), s.offset(1.0));
        let s_of_t = DualNum::<Time>::new(&[0.0, 2.0, 2.0]);
        let q = twist.reparam(s_of_t);
        assert_eq!(q.trans_vel.x.terms(), &[0.0, 6.0, 6.0]);
        assert_eq!(q.trans_vel.y.terms(), &[0.0, 2.0, 2.0]);
        assert_eq!(q.rot_vel.terms(), &[1.0, 2.0, 2.0]);
    }

    #[test]
    fn increment_reparam_scales_rates() {
        // θ(s) = s²/2 at s = 1; s(t) = 1 + 4t at t = 0
        let s = DualNum::<ArcLength>::variable(1.0, 3);
        let incr = DualTwistIncrement::new(DualVector::new(s, s.scale(-1.0)), (s * s).scale(0.5));
        let s_of_t = DualNum::<Time>::new(&[1.0, 4.0, 0.0]);
        let q = incr.reparam(s_of_t);
        assert_eq!(q.trans_incr.x.terms(), &[1.0, 4.0, 0.0]);
        assert_eq!(q.trans_incr.y.terms(), &[-1.0, -4.0, 0.0]);
        assert_eq!(q.rot_incr.terms(), &[0.5, 4.0, 16.0]);
        assert_eq!(q.drop(1).rot_incr.terms(), &[4.0, 16.0]);
    }

    #[test]
    fn increments_lift_and_add() {
        let incr = TwistIncrement::new(Vector::new(0.5, 0.5), 1.0);
        let a = DualTwistIncrement::<Time>::constant(incr, 3);
        assert_eq!((a + a).value(), incr + incr);
        assert_eq!(a.drop(1).rot_incr.terms(), &[0.0, 0.0]);
    }
}
