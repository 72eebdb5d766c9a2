//! Rotations whose angle depends on a parameter.

use crate::dual_vector::DualVector;
use crate::error::{Error, Result};
use crate::rotation::{wrapped_atan2, Rotation};
use autodiff::{DualNum, MAX_TERMS};
use num_traits::Float;
use std::ops::{Mul, Sub};

/// A unit complex number whose components are dual numbers in `P`.
///
/// Both components always carry the same number of terms, at most
/// [`MAX_TERMS`].
///
/// # Examples
///
/// ```
/// use autodiff::DualNum;
/// use se2::DualRotation;
///
/// enum Time {}
///
/// // Turning at 2 rad/s, at t = 0
/// let t = DualNum::<Time>::variable(0.0, 3);
/// let r = DualRotation::exp(t.scale(2.0));
/// assert_eq!(r.log().terms(), &[0.0, 2.0, 0.0]);
/// assert_eq!(r.velocity().terms(), &[2.0, 0.0]);
/// ```
pub struct DualRotation<P, T = f64> {
    real: DualNum<P, T>,
    imag: DualNum<P, T>,
}

impl_dual_traits!(DualRotation { real, imag });

impl<P, T: Float> DualRotation<P, T> {
    /// Build a dual rotation from its components, checking that they
    /// have the same order and no more than [`MAX_TERMS`] terms.
    pub fn try_new(real: DualNum<P, T>, imag: DualNum<P, T>) -> Result<Self> {
        if real.size() != imag.size() {
            tracing::debug!(
                real = real.size(),
                imag = imag.size(),
                "rejecting dual rotation with mismatched orders"
            );
            return Err(Error::MismatchedOrder {
                real: real.size(),
                imag: imag.size(),
            });
        }
        if real.size() > MAX_TERMS {
            tracing::debug!(size = real.size(), "rejecting dual rotation of too high an order");
            return Err(Error::OrderTooHigh {
                size: real.size(),
                max: MAX_TERMS,
            });
        }
        Ok(Self { real, imag })
    }

    /// Build a dual rotation from its components.
    ///
    /// # Panics
    ///
    /// Panics if [`DualRotation::try_new`] would fail.
    pub fn new(real: DualNum<P, T>, imag: DualNum<P, T>) -> Self {
        match Self::try_new(real, imag) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }

    /// Lift a fixed rotation with `order` terms.
    pub fn constant(r: Rotation<T>, order: usize) -> Self {
        Self {
            real: DualNum::constant(r.real, order),
            imag: DualNum::constant(r.imag, order),
        }
    }

    /// The rotation by the dual angle `theta`.
    pub fn exp(theta: DualNum<P, T>) -> Self {
        Self {
            real: theta.cos(),
            imag: theta.sin(),
        }
    }

    /// The plain rotation at the current parameter value.
    pub fn value(&self) -> Rotation<T> {
        Rotation::new(self.real.value(), self.imag.value())
    }

    /// Number of terms carried by each component.
    pub fn size(&self) -> usize {
        self.real.size()
    }

    /// The cosine component.
    pub fn real(&self) -> DualNum<P, T> {
        self.real
    }

    /// The sine component.
    pub fn imag(&self) -> DualNum<P, T> {
        self.imag
    }

    /// Complex conjugate.
    pub fn inverse(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// The angle and its derivatives.
    ///
    /// Term 0 is `atan2(imag, real)` in `(-π, π]`. Higher terms are
    /// `real₀·imagᵢ − imag₀·realᵢ`, which is exact as long as the
    /// rotation stays on the unit circle.
    pub fn log(&self) -> DualNum<P, T> {
        let (re, im) = (self.real.terms(), self.imag.terms());
        DualNum::from_fn(self.size(), |i| match i {
            0 => wrapped_atan2(im[0], re[0]),
            1 | 2 => re[0] * im[i] - im[0] * re[i],
            _ => unreachable!("dual rotation with more than {} terms", MAX_TERMS),
        })
    }

    /// Angular rate, one order shorter than `self`:
    /// `real·imag′ − imag·real′`.
    ///
    /// # Panics
    ///
    /// Panics if `size() == 0`.
    pub fn velocity(&self) -> DualNum<P, T> {
        self.real * self.imag.drop(1) - self.imag * self.real.drop(1)
    }

    /// Signed angle from `other` to `self`, with derivatives.
    pub fn minus(&self, other: &Self) -> DualNum<P, T> {
        (other.inverse() * *self).log()
    }

    /// Re-express as a function of `Q`, given `P` as a function of `Q`.
    pub fn reparam<Q>(&self, old_param: DualNum<Q, T>) -> DualRotation<Q, T> {
        DualRotation {
            real: self.real.reparam(old_param),
            imag: self.imag.reparam(old_param),
        }
    }
}

impl<P, T: Float> Mul for DualRotation<P, T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            real: self.real * rhs.real - self.imag * rhs.imag,
            imag: self.real * rhs.imag + self.imag * rhs.real,
        }
    }
}

/// Composition with a fixed rotation.
impl<P, T: Float> Mul<Rotation<T>> for DualRotation<P, T> {
    type Output = Self;

    fn mul(self, rhs: Rotation<T>) -> Self {
        self * Self::constant(rhs, self.size())
    }
}

impl<P, T: Float> Mul<DualVector<P, T>> for DualRotation<P, T> {
    type Output = DualVector<P, T>;

    fn mul(self, v: DualVector<P, T>) -> DualVector<P, T> {
        DualVector::new(
            self.real * v.x - self.imag * v.y,
            self.imag * v.x + self.real * v.y,
        )
    }
}

impl<P, T: Float> Sub for DualRotation<P, T> {
    type Output = DualNum<P, T>;

    fn sub(self, rhs: Self) -> DualNum<P, T> {
        self.minus(&rhs)
    }
}
