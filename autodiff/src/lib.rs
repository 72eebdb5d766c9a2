//! Automatic differentiation for Rust.
//!
//! **Part of the [se2 workspace](../index.html)**
//!
//! This crate provides [`DualNum`], a forward-mode dual number that
//! carries a value and up to two derivatives with respect to a named
//! parameter:
//!
//! - Arithmetic (`+`, `-`, `*`, `/`, negation) follows the truncated
//!   Leibniz rules
//! - Transcendentals (`sin`, `cos`, `sqrt`, `exp`, `ln`) follow the
//!   second-order chain rule
//! - [`DualNum::drop`] shifts derivative orders down (position to
//!   velocity)
//! - [`DualNum::reparam`] re-expresses a quantity with respect to a
//!   different parameter
//!
//! # Derivatives along a path
//!
//! ```
//! use autodiff::DualNum;
//!
//! enum ArcLength {}
//! enum Time {}
//!
//! // Heading along a circle of curvature 0.5, at arc length s = 1
//! let s = DualNum::<ArcLength>::variable(1.0, 3);
//! let heading = s.scale(0.5);
//! assert_eq!(heading.terms(), &[0.5, 0.5, 0.0]);
//!
//! // Driven with s(t) = 2t from t = 0.5: heading rate is 1 rad/s
//! let s_of_t = DualNum::<Time>::new(&[1.0, 2.0, 0.0]);
//! assert_eq!(heading.reparam(s_of_t).terms(), &[0.5, 1.0, 0.0]);
//! ```

pub mod dual_num;

pub use dual_num::{DualNum, MAX_TERMS};
