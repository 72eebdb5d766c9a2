//! Truncated Taylor dual numbers for forward-mode differentiation up to
//! second order.
//!
//! A `DualNum<P, T>` carries a value together with its first and second
//! derivatives with respect to a single parameter `P`:
//!
//! ```text
//! terms = [f, df/dP, d²f/dP²]
//! ```
//!
//! Fewer terms may be retained (`size()` is 0 to 3). Every operation
//! keeps only the orders both operands know about, so a binary
//! operation on a size-3 and a size-2 number yields size 2.
//!
//! # Mathematical Background
//!
//! Terms are derivatives, not Taylor coefficients, so the product
//! follows Leibniz' rule:
//!
//! - `(fg)′ = f′g + fg′`
//! - `(fg)″ = f″g + 2f′g′ + fg″`
//!
//! and composition with a scalar function `h` follows Faà di Bruno's
//! formula truncated at second order:
//!
//! - `h(f)′ = h′(f)·f′`
//! - `h(f)″ = h′(f)·f″ + h″(f)·f′²`
//!
//! The same formula re-expresses a quantity differentiated with respect
//! to `P` as one differentiated with respect to another parameter `Q`
//! (see [`DualNum::reparam`]).
//!
//! # Parameter tags
//!
//! `P` is a type with no runtime representation. Numbers differentiated
//! with respect to different parameters have different types and cannot
//! be combined:
//!
//! ```compile_fail
//! use autodiff::DualNum;
//!
//! enum Time {}
//! enum ArcLength {}
//!
//! let t = DualNum::<Time>::variable(1.0, 3);
//! let s = DualNum::<ArcLength>::variable(2.0, 3);
//! let _ = t + s;
//! ```
//!
//! # Example
//!
//! ```
//! use autodiff::DualNum;
//!
//! enum Time {}
//!
//! // f(t) = t³ at t = 2
//! let t = DualNum::<Time>::variable(2.0, 3);
//! let f = t * t * t;
//!
//! assert_eq!(f.terms(), &[8.0, 12.0, 12.0]);
//! ```

use algebra_core::Semigroup;
use num_traits::Float;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Largest number of retained terms: value, first and second derivative.
pub const MAX_TERMS: usize = 3;

/// A value and up to two derivatives with respect to the parameter `P`.
///
/// Slots at or beyond `size()` are always zero.
pub struct DualNum<P, T = f64> {
    terms: [T; MAX_TERMS],
    size: usize,
    param: PhantomData<fn() -> P>,
}

impl<P, T: Copy> Clone for DualNum<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, T: Copy> Copy for DualNum<P, T> {}

impl<P, T: fmt::Debug> fmt::Debug for DualNum<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualNum")
            .field("terms", &&self.terms[..self.size])
            .finish()
    }
}

impl<P, T: PartialEq> PartialEq for DualNum<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.terms[..self.size] == other.terms[..other.size]
    }
}

impl<P, T: Float> DualNum<P, T> {
    /// Build a dual number from its terms `[f, f′, f″]` (any prefix).
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_TERMS`] terms are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    ///
    /// enum Time {}
    ///
    /// let d = DualNum::<Time>::new(&[1.0, 2.0]);
    /// assert_eq!(d.size(), 2);
    /// assert_eq!(d.value(), 1.0);
    /// ```
    pub fn new(terms: &[T]) -> Self {
        assert!(
            terms.len() <= MAX_TERMS,
            "dual number with {} terms exceeds the maximum of {}",
            terms.len(),
            MAX_TERMS
        );
        let mut out = [T::zero(); MAX_TERMS];
        out[..terms.len()].copy_from_slice(terms);
        Self::truncated(out, terms.len())
    }

    /// Build a dual number of `size` terms, term `i` given by `f(i)`.
    ///
    /// # Panics
    ///
    /// Panics if `size > MAX_TERMS`.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        assert!(
            size <= MAX_TERMS,
            "dual number with {} terms exceeds the maximum of {}",
            size,
            MAX_TERMS
        );
        let mut terms = [T::zero(); MAX_TERMS];
        for (i, term) in terms.iter_mut().enumerate().take(size) {
            *term = f(i);
        }
        Self::truncated(terms, size)
    }

    /// A constant: `size` terms, every derivative zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    ///
    /// enum Time {}
    ///
    /// let c = DualNum::<Time>::constant(5.0, 3);
    /// assert_eq!(c.terms(), &[5.0, 0.0, 0.0]);
    /// ```
    pub fn constant(value: T, size: usize) -> Self {
        Self::from_fn(size, |i| if i == 0 { value } else { T::zero() })
    }

    /// The parameter itself, evaluated at `value` (`dP/dP = 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    ///
    /// enum Time {}
    ///
    /// let t = DualNum::<Time>::variable(3.0, 3);
    /// assert_eq!(t.terms(), &[3.0, 1.0, 0.0]);
    /// ```
    pub fn variable(value: T, size: usize) -> Self {
        Self::from_fn(size, |i| match i {
            0 => value,
            1 => T::one(),
            _ => T::zero(),
        })
    }

    /// Zero every slot at or beyond `size`.
    fn truncated(mut terms: [T; MAX_TERMS], size: usize) -> Self {
        for term in terms.iter_mut().skip(size) {
            *term = T::zero();
        }
        Self {
            terms,
            size,
            param: PhantomData,
        }
    }

    /// The value (term 0).
    pub fn value(&self) -> T {
        self.terms[0]
    }

    /// Number of retained terms.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The retained terms `[f, f′, f″][..size]`.
    pub fn terms(&self) -> &[T] {
        &self.terms[..self.size]
    }

    /// Term `i`: the `i`-th derivative.
    ///
    /// # Panics
    ///
    /// Panics if `i >= size()`.
    pub fn term(&self, i: usize) -> T {
        self.terms()[i]
    }

    /// Discard the `n` lowest orders: term `i` of the result is term
    /// `i + n` of `self`.
    ///
    /// `drop(1)` of a position is the velocity, as a dual number one
    /// order shorter.
    ///
    /// # Panics
    ///
    /// Panics if `n > size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    ///
    /// enum Time {}
    ///
    /// let x = DualNum::<Time>::new(&[4.0, 3.0, 2.0]);
    /// assert_eq!(x.drop(1).terms(), &[3.0, 2.0]);
    /// ```
    pub fn drop(&self, n: usize) -> Self {
        assert!(
            n <= self.size,
            "cannot drop {} terms from a dual number of size {}",
            n,
            self.size
        );
        Self::from_fn(self.size - n, |i| self.terms[i + n])
    }

    /// Re-express this number, a function of `P`, as a function of `Q`.
    ///
    /// `old_param` is `P` itself written as a dual number in `Q`. The
    /// result is truncated to the shorter of the two sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    ///
    /// enum ArcLength {}
    /// enum Time {}
    ///
    /// // f(s) = s² at s = 1, and s(t) = t² at t = 1
    /// let f = DualNum::<ArcLength>::new(&[1.0, 2.0, 2.0]);
    /// let s = DualNum::<Time>::new(&[1.0, 2.0, 2.0]);
    ///
    /// // f(s(t)) = t⁴
    /// assert_eq!(f.reparam(s).terms(), &[1.0, 4.0, 12.0]);
    /// ```
    pub fn reparam<Q>(&self, old_param: DualNum<Q, T>) -> DualNum<Q, T> {
        let size = self.size.min(old_param.size);
        old_param.compose(self.terms, size)
    }

    /// `h(self)` given `[h(a₀), h′(a₀), h″(a₀)]`.
    fn compose<R>(&self, outer: [T; MAX_TERMS], size: usize) -> DualNum<R, T> {
        let [h0, h1, h2] = outer;
        let a = self.terms;
        DualNum::truncated([h0, h1 * a[1], h1 * a[2] + h2 * a[1] * a[1]], size)
    }

    /// Scalar function of this number from its first two derivatives.
    fn apply(&self, outer: [T; MAX_TERMS]) -> Self {
        self.compose(outer, self.size)
    }

    /// Multiply every term by the plain scalar `k`.
    pub fn scale(&self, k: T) -> Self {
        Self::truncated(self.terms.map(|t| t * k), self.size)
    }

    /// Add the plain scalar `k` to the value; derivatives are unchanged.
    pub fn offset(&self, k: T) -> Self {
        let mut terms = self.terms;
        terms[0] = terms[0] + k;
        Self::truncated(terms, self.size)
    }

    /// Reciprocal: `(1/f)′ = −f′/f²`, `(1/f)″ = 2f′²/f³ − f″/f²`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    ///
    /// enum Time {}
    ///
    /// let x = DualNum::<Time>::variable(2.0, 3);
    /// assert_eq!(x.recip().terms(), &[0.5, -0.25, 0.25]);
    /// ```
    pub fn recip(&self) -> Self {
        let r = self.value().recip();
        let r2 = r * r;
        self.apply([r, -r2, (r2 * r) + (r2 * r)])
    }

    /// Sine.
    pub fn sin(&self) -> Self {
        let (s, c) = self.value().sin_cos();
        self.apply([s, c, -s])
    }

    /// Cosine.
    pub fn cos(&self) -> Self {
        let (s, c) = self.value().sin_cos();
        self.apply([c, -s, -c])
    }

    /// Square root: `(√f)′ = f′/(2√f)`, `(√f)″ = f″/(2√f) − f′²/(4f√f)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodiff::DualNum;
    ///
    /// enum Time {}
    ///
    /// let x = DualNum::<Time>::variable(4.0, 3);
    /// assert_eq!(x.sqrt().terms(), &[2.0, 0.25, -0.03125]);
    /// ```
    pub fn sqrt(&self) -> Self {
        let root = self.value().sqrt();
        let half_inv = (root + root).recip();
        self.apply([root, half_inv, -half_inv / (self.value() + self.value())])
    }

    /// Exponential.
    pub fn exp(&self) -> Self {
        let e = self.value().exp();
        self.apply([e, e, e])
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Self {
        let r = self.value().recip();
        self.apply([self.value().ln(), r, -(r * r)])
    }
}

/// Addition, term by term.
impl<P, T: Float> Add for DualNum<P, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut terms = self.terms;
        for (t, r) in terms.iter_mut().zip(rhs.terms.iter()) {
            *t = *t + *r;
        }
        Self::truncated(terms, self.size.min(rhs.size))
    }
}

/// Subtraction, term by term.
impl<P, T: Float> Sub for DualNum<P, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut terms = self.terms;
        for (t, r) in terms.iter_mut().zip(rhs.terms.iter()) {
            *t = *t - *r;
        }
        Self::truncated(terms, self.size.min(rhs.size))
    }
}

/// Multiplication by Leibniz' rule.
///
/// # Examples
///
/// ```
/// use autodiff::DualNum;
///
/// enum Time {}
///
/// // f(t) = t² at t = 3
/// let t = DualNum::<Time>::variable(3.0, 3);
/// assert_eq!((t * t).terms(), &[9.0, 6.0, 2.0]);
/// ```
impl<P, T: Float> Mul for DualNum<P, T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = self.terms;
        let b = rhs.terms;
        let cross = a[1] * b[1];
        Self::truncated(
            [
                a[0] * b[0],
                a[0] * b[1] + a[1] * b[0],
                a[0] * b[2] + cross + cross + a[2] * b[0],
            ],
            self.size.min(rhs.size),
        )
    }
}

/// Division: `f / g = f * (1/g)`.
#[allow(clippy::suspicious_arithmetic_impl)]
impl<P, T: Float> Div for DualNum<P, T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.recip()
    }
}

impl<P, T: Float> Neg for DualNum<P, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::truncated(self.terms.map(|t| -t), self.size)
    }
}

/// Dual numbers add as a semigroup; there is no size-agnostic zero, so
/// they are not a monoid.
impl<P, T: Float> Semigroup for DualNum<P, T> {
    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }
}
