#![deny(missing_docs)]
//! Differentiable rigid-body algebra in the plane.
//!
//! **Part of the [se2 workspace](../index.html)**
//!
//! Plain types describe a pose, a motion or an error at one instant:
//!
//! - [`Vector`] and [`Position`]: displacements and points
//! - [`Rotation`]: SO(2) as a unit complex number
//! - [`Transform`]: SE(2), with [`Transform::exp`] and [`Transform::log`]
//!   mapping to and from [`TwistIncrement`]
//! - [`Twist`]: a body velocity
//! - [`PoseError`] and [`local_error`]: tracking error in the body frame
//!
//! Each has a dual counterpart ([`DualVector`], [`DualRotation`],
//! [`DualTransform`], ...) whose scalars are [`autodiff::DualNum`]s, so
//! the first and second derivatives with respect to a parameter `P` flow
//! through the same algebra. `.value()` projects a dual type back to its
//! plain type and `.velocity()` extracts the derivative twist.
//!
//! # Velocity along a circular arc
//!
//! ```
//! use autodiff::DualNum;
//! use se2::{DualTransform, DualTwistIncrement, DualVector};
//!
//! enum ArcLength {}
//!
//! // Unit speed along an arc of curvature 0.5, evaluated at s = 1
//! let s = DualNum::<ArcLength>::variable(1.0, 3);
//! let incr = DualTwistIncrement::new(
//!     DualVector::new(s, DualNum::constant(0.0, 3)),
//!     s.scale(0.5),
//! );
//! let pose = DualTransform::exp(incr);
//! let twist = pose.velocity();
//!
//! assert!((twist.rot_vel.value() - 0.5).abs() < 1e-9);
//! assert!((twist.trans_vel.value().norm() - 1.0).abs() < 1e-6);
//! ```

/// `Clone`, `Copy`, `Debug` and `PartialEq` for a struct generic over a
/// parameter tag `P`, without requiring anything of `P`.
macro_rules! impl_dual_traits {
    ($name:ident { $($field:ident),+ $(,)? }) => {
        impl<P, T: Copy> Clone for $name<P, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<P, T: Copy> Copy for $name<P, T> {}

        impl<P, T: std::fmt::Debug> std::fmt::Debug for $name<P, T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }

        impl<P, T: PartialEq> PartialEq for $name<P, T> {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)+
            }
        }
    };
}

pub mod dual_rotation;
pub mod dual_transform;
pub mod dual_twist;
pub mod dual_vector;
pub mod error;
pub mod pose_error;
pub mod rotation;
pub mod transform;
pub mod twist;
pub mod vector;

pub use dual_rotation::DualRotation;
pub use dual_transform::DualTransform;
pub use dual_twist::{DualTwist, DualTwistIncrement};
pub use dual_vector::{DualPosition, DualVector};
pub use error::{Error, Result};
pub use pose_error::{local_error, PoseError};
pub use rotation::Rotation;
pub use transform::{regularization, Transform};
pub use twist::{Twist, TwistIncrement};
pub use vector::{Position, Vector};
