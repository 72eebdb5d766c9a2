#![deny(missing_docs)]
//! # algebra-core: group-hierarchy traits
//!
//! This crate provides the algebraic structures that rigid-body
//! geometry is built from, as Rust traits:
//!
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: adds the neutral element `empty`
//! - [`CommutativeMonoid`]: `combine` ignores operand order
//! - [`Group`]: adds `inverse`
//! - [`AbelianGroup`]: a group with commutative `combine`
//! - [`LieGroup`]: group with exponential/logarithm maps to a tangent
//!   space, and the `plus`/`minus` operators derived from them
//!
//! ## Quick start
//!
//! ```rust
//! use algebra_core::{Group, Monoid, Semigroup};
//!
//! // Planar rotations by quarter turns, under composition
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct QuarterTurns(u8);
//!
//! impl Semigroup for QuarterTurns {
//!     fn combine(&self, other: &Self) -> Self {
//!         QuarterTurns((self.0 + other.0) % 4)
//!     }
//! }
//!
//! impl Monoid for QuarterTurns {
//!     fn empty() -> Self {
//!         QuarterTurns(0)
//!     }
//! }
//!
//! impl Group for QuarterTurns {
//!     fn inverse(&self) -> Self {
//!         QuarterTurns((4 - self.0) % 4)
//!     }
//! }
//!
//! let r = QuarterTurns(3);
//! assert_eq!(r.combine(&r.inverse()), QuarterTurns::empty());
//! ```
//!
//! ## Scalar implementations
//!
//! `f32` and `f64` form an [`AbelianGroup`] under addition (`empty` is
//! `0`, `inverse` is negation). This is what lets coordinate
//! aggregates such as vectors and twists derive their additive group
//! structure field by field.
//!
//! ## Derive macros
//!
//! With the `derive` feature (on by default) the traits of the group
//! hierarchy can be derived for structs with named fields; each
//! operation is applied componentwise:
//!
//! ```rust
//! use algebra_core::{AbelianGroup, CommutativeMonoid, Group, Monoid, Semigroup};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! #[derive(Semigroup, Monoid, CommutativeMonoid, Group, AbelianGroup)]
//! struct Offset {
//!     dx: f64,
//!     dy: f64,
//! }
//!
//! let a = Offset { dx: 1.0, dy: 2.0 };
//! assert_eq!(a.combine(&a.inverse()), Offset::empty());
//! ```

// Make the current crate visible as `algebra_core` so derived impls
// resolve inside this crate too.
extern crate self as algebra_core;

#[cfg(feature = "derive")]
pub use algebra_core_derive::{AbelianGroup, CommutativeMonoid, Group, Monoid, Semigroup};

/// Values with an associative `combine`: vector addition, rotation
/// composition, transform chaining.
///
/// Law, assumed and not checked: `a.combine(b).combine(c)` equals
/// `a.combine(b.combine(c))` (up to rounding for floats).
pub trait Semigroup: Sized {
    /// `self` followed by `other`.
    fn combine(&self, other: &Self) -> Self;

    /// `*self = self.combine(other)`.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

/// A [`Semigroup`] with a neutral element: the zero vector, the
/// identity rotation.
///
/// Law: `empty()` combined with `a` on either side is `a`.
pub trait Monoid: Semigroup {
    /// The neutral element.
    fn empty() -> Self;

    /// Combine every element of `iter` into `empty()`.
    ///
    /// For non-commutative groups the fold is left to right, so a
    /// chain of relative transforms concatenates in the order given.
    ///
    /// ```rust
    /// use algebra_core::Monoid;
    ///
    /// assert_eq!(f64::concat([1.0, 2.0, 3.5]), 6.5);
    /// assert_eq!(f64::concat(Vec::new()), 0.0);
    /// ```
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

/// A [`Monoid`] whose `combine` does not depend on operand order.
///
/// Vectors and twists are; rigid transforms are not.
pub trait CommutativeMonoid: Monoid {}

/// A [`Monoid`] in which every element can be undone.
///
/// Law: `a.combine(&a.inverse())` and `a.inverse().combine(&a)` are
/// both `empty()`.
///
/// Rotations and rigid transforms are groups under composition;
/// free vectors are groups under addition.
pub trait Group: Monoid {
    /// The element that undoes `self`.
    fn inverse(&self) -> Self;
}

/// A [`Group`] with commutative `combine`; the tangent spaces of
/// Lie groups are abelian groups under addition.
pub trait AbelianGroup: Group + CommutativeMonoid {}

/// A **Lie group**: a group whose elements are reached from the
/// identity through an exponential map on a tangent space.
///
/// `exp` takes a tangent increment to a group element and `log` is
/// its inverse near the identity. The two derived operators express
/// the difference of two elements as a tangent increment in the
/// frame of the right operand:
///
/// - `a.plus(d) = a ∘ exp(d)`
/// - `a.minus(b) = log(b⁻¹ ∘ a)`
///
/// Laws (not enforced by type system, hold up to rounding):
///
/// - **Retraction**: `a.plus(&d).minus(&a) == d` for increments inside
///   the injectivity radius of `exp`
/// - **Identity**: `a.minus(&a) == log(empty())`
///
/// # Example
///
/// ```rust
/// use algebra_core::{Group, LieGroup, Monoid, Semigroup};
///
/// // Translations of the real line: exp and log are the identity map
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Shift(f64);
///
/// impl Semigroup for Shift {
///     fn combine(&self, other: &Self) -> Self {
///         Shift(self.0 + other.0)
///     }
/// }
///
/// impl Monoid for Shift {
///     fn empty() -> Self {
///         Shift(0.0)
///     }
/// }
///
/// impl Group for Shift {
///     fn inverse(&self) -> Self {
///         Shift(-self.0)
///     }
/// }
///
/// impl LieGroup for Shift {
///     type Tangent = f64;
///
///     fn exp(delta: &f64) -> Self {
///         Shift(*delta)
///     }
///
///     fn log(&self) -> f64 {
///         self.0
///     }
/// }
///
/// let a = Shift(2.0);
/// assert_eq!(a.plus(&3.0), Shift(5.0));
/// assert_eq!(Shift(5.0).minus(&a), 3.0);
/// ```
pub trait LieGroup: Group {
    /// Tangent-space coordinates (the Lie algebra).
    type Tangent;

    /// Exponential map: tangent increment to group element.
    fn exp(delta: &Self::Tangent) -> Self;

    /// Logarithm map: group element to tangent increment.
    fn log(&self) -> Self::Tangent;

    /// Move along `delta`, expressed in this element's frame.
    fn plus(&self, delta: &Self::Tangent) -> Self {
        self.combine(&Self::exp(delta))
    }

    /// The increment that carries `other` to `self`, expressed in
    /// `other`'s frame.
    fn minus(&self, other: &Self) -> Self::Tangent {
        other.inverse().combine(self).log()
    }
}

// Scalars: the additive group of the reals

macro_rules! impl_additive_scalar {
    ( $( $t:ty ),+ ) => {
        $(
            impl Semigroup for $t {
                fn combine(&self, other: &Self) -> Self {
                    self + other
                }
            }

            impl Monoid for $t {
                fn empty() -> Self {
                    0.0
                }
            }

            impl CommutativeMonoid for $t {}

            impl Group for $t {
                fn inverse(&self) -> Self {
                    -self
                }
            }

            impl AbelianGroup for $t {}
        )+
    };
}

impl_additive_scalar!(f32, f64);
