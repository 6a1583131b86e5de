//! Dimension-tagged floating-point quantities.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::dim::{DimDiv, DimMul, Dimension, Dimensionless, Prod, Quot};
use crate::exponents::Exponents;

/// A floating-point magnitude tagged with a static dimension.
///
/// The dimension exists only at the type level; at runtime a `Quantity` is
/// exactly an `f64`. Multiplication and division re-type their result to
/// the derived dimension, while addition, subtraction, and comparisons are
/// only defined between quantities of the same dimension. A mismatch is a
/// compile error with no runtime counterpart:
///
/// ```compile_fail
/// use mensura_si::{Current, Quantity, Time};
///
/// let elapsed = Quantity::<Time>::new(1.0);
/// let current = Quantity::<Current>::new(1.0);
/// let _ = elapsed + current;
/// ```
///
/// ```compile_fail
/// use mensura_si::{Length, Quantity, Time};
///
/// let _ = Quantity::<Length>::new(1.0) < Quantity::<Time>::new(1.0);
/// ```
///
/// Arithmetic that derives a new dimension is re-typed automatically:
///
/// ```
/// use mensura_si::{Length, Quantity, Time, Velocity};
///
/// let distance = Quantity::<Length>::new(3.523);
/// let elapsed = Quantity::<Time>::new(2.132);
/// let velocity: Quantity<Velocity> = distance / elapsed;
/// assert_eq!(velocity.to_string(), "1.6524390243902438 m/s");
/// ```
pub struct Quantity<D: Dimension>(f64, PhantomData<D>);

/// Tags a plain magnitude with the target dimension `D`.
///
/// The sole entry point for introducing a dimension onto raw data;
/// equivalent to [`Quantity::new`] with the dimension spelled at the call
/// site: `tag::<Time>(2.132)`.
#[must_use]
pub const fn tag<D: Dimension>(magnitude: f64) -> Quantity<D> {
    Quantity::new(magnitude)
}

impl<D: Dimension> Quantity<D> {
    /// Tags `magnitude` with the dimension `D`.
    #[must_use]
    pub const fn new(magnitude: f64) -> Self {
        Self(magnitude, PhantomData)
    }

    /// Returns the plain floating-point magnitude.
    #[must_use]
    pub const fn magnitude(self) -> f64 {
        self.0
    }

    /// Returns the value-level image of the dimension `D`.
    #[must_use]
    pub const fn exponents() -> Exponents {
        D::EXPONENTS
    }
}

// Manual impls keep `Quantity<D>` copyable without demanding anything of
// the marker type `D`.
impl<D: Dimension> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.0)
    }
}

impl<D1, D2> Mul<Quantity<D2>> for Quantity<D1>
where
    D1: DimMul<D2>,
    D2: Dimension,
{
    type Output = Quantity<Prod<D1, D2>>;

    fn mul(self, rhs: Quantity<D2>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<D1, D2> Div<Quantity<D2>> for Quantity<D1>
where
    D1: DimDiv<D2>,
    D2: Dimension,
{
    type Output = Quantity<Quot<D1, D2>>;

    // Division by a zero magnitude follows IEEE-754: the result is an
    // infinity or NaN carrying the algebraically-derived dimension.
    fn div(self, rhs: Quantity<D2>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    // IEEE-754 equality, NaN non-reflexivity included.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<D: Dimension> Zero for Quantity<D> {
    fn zero() -> Self {
        Self::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

// Only the dimensionless quantity is closed under multiplication, so it
// alone carries a multiplicative identity.
impl One for Quantity<Dimensionless> {
    fn one() -> Self {
        Self::new(1.0)
    }
}

impl From<f64> for Quantity<Dimensionless> {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity<Dimensionless>> for f64 {
    fn from(quantity: Quantity<Dimensionless>) -> Self {
        quantity.0
    }
}

// Dimensionless quantities convert to and from every standard numeric
// type; integer targets truncate toward zero, exactly as `as` does.
macro_rules! dimensionless_interop {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Quantity<Dimensionless> {
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn from(value: $ty) -> Self {
                Self::new(value as f64)
            }
        }

        impl From<Quantity<Dimensionless>> for $ty {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            fn from(quantity: Quantity<Dimensionless>) -> Self {
                quantity.0 as $ty
            }
        }
    )*};
}

dimensionless_interop!(f32, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

impl<D: Dimension> fmt::Display for Quantity<D> {
    /// Renders `"<magnitude> <unit-string>"`, e.g. `"3.0 s"` or
    /// `"5.060594512195122 kg‧m/s^2"`. The magnitude uses shortest
    /// round-trip formatting, so integral values keep their `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.0, D::EXPONENTS)
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.0, D::EXPONENTS)
    }
}
