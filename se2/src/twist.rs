//! Lie-algebra elements of SE(2): rates and finite increments.

use crate::vector::Vector;
use algebra_core::{AbelianGroup, CommutativeMonoid, Group, Monoid, Semigroup};
use num_traits::Float;
use std::ops::Add;

/// A body velocity: linear velocity and yaw rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[derive(Semigroup, Monoid, CommutativeMonoid, Group, AbelianGroup)]
pub struct Twist<T = f64> {
    /// Linear velocity.
    pub trans_vel: Vector<T>,
    /// Angular velocity, radians per unit parameter.
    pub rot_vel: T,
}

impl<T: Float> Twist<T> {
    /// Create a twist from its parts.
    pub fn new(trans_vel: Vector<T>, rot_vel: T) -> Self {
        Self { trans_vel, rot_vel }
    }
}

impl<T: Float> Add for Twist<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.trans_vel + rhs.trans_vel, self.rot_vel + rhs.rot_vel)
    }
}

/// A finite motion in body coordinates: what [`Transform::exp`]
/// consumes and [`Transform::log`] produces.
///
/// [`Transform::exp`]: crate::Transform::exp
/// [`Transform::log`]: crate::Transform::log
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[derive(Semigroup, Monoid, CommutativeMonoid, Group, AbelianGroup)]
pub struct TwistIncrement<T = f64> {
    /// Translational part.
    pub trans_incr: Vector<T>,
    /// Rotation angle in radians.
    pub rot_incr: T,
}

impl<T: Float> TwistIncrement<T> {
    /// Create an increment from its parts.
    pub fn new(trans_incr: Vector<T>, rot_incr: T) -> Self {
        Self {
            trans_incr,
            rot_incr,
        }
    }
}

impl<T: Float> Add for TwistIncrement<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.trans_incr + rhs.trans_incr, self.rot_incr + rhs.rot_incr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twists_add_componentwise() {
        let a = Twist::new(Vector::new(1.0, 0.5), 0.25);
        let b = Twist::new(Vector::new(-2.0, 1.5), 0.5);
        assert_eq!(a + b, Twist::new(Vector::new(-1.0, 2.0), 0.75));
        assert_eq!(a.combine(&b), a + b);
    }

    #[test]
    fn derived_group_structure() {
        let a = TwistIncrement::new(Vector::new(3.0, -1.0), 2.0);
        assert_eq!(TwistIncrement::<f64>::empty(), TwistIncrement::default());
        assert_eq!(a.inverse(), TwistIncrement::new(Vector::new(-3.0, 1.0), -2.0));
        assert_eq!(a + a.inverse(), TwistIncrement::empty());
    }
}
