//! Tracking error between a target pose and the pose actually reached.

use crate::transform::Transform;
use crate::vector::Vector;
use num_traits::Float;

/// How far `actual` is from `target`, seen from `actual`'s own frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseError<T = f64> {
    /// Position error in the body frame of the actual pose.
    pub trans_error: Vector<T>,
    /// Heading error, wrapped to `(-π, π]`.
    pub rot_error: T,
}

impl<T: Float> PoseError<T> {
    /// Create a pose error from its parts.
    pub fn new(trans_error: Vector<T>, rot_error: T) -> Self {
        Self {
            trans_error,
            rot_error,
        }
    }
}

/// Body-frame error of `actual` with respect to `target`.
///
/// The translational error is the world-frame offset rotated into
/// `actual`'s frame, so `x` is the along-track error and `y` the
/// cross-track error of a vehicle at `actual`.
///
/// # Examples
///
/// ```
/// use se2::{local_error, Rotation, Transform, Vector};
/// use std::f64::consts::FRAC_PI_2;
///
/// // Facing +y, with the target one unit to the right (world +x).
/// let actual = Transform::new(Vector::zero(), Rotation::exp(FRAC_PI_2));
/// let target = Transform::new(Vector::new(1.0, 0.0), Rotation::exp(FRAC_PI_2));
/// let e = local_error(&target, &actual);
/// assert!((e.trans_error.x - 0.0).abs() < 1e-12);
/// assert!((e.trans_error.y + 1.0).abs() < 1e-12);
/// ```
pub fn local_error<T: Float>(target: &Transform<T>, actual: &Transform<T>) -> PoseError<T> {
    PoseError::new(
        actual.rotation.inverse() * (target.translation - actual.translation),
        target.rotation - actual.rotation,
    )
}
