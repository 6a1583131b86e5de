//! # mensura-si
//!
//! SI dimension vectors and dimension-checked quantities.
//!
//! A physical dimension is a 7-tuple of type-level integer exponents over
//! the SI base units (kg, m, s, A, K, mol, cd), encoded as the [`Si`]
//! marker type. The dimension algebra ([`DimMul`], [`DimInv`], [`DimDiv`])
//! is computed by the trait solver, so a [`Quantity`] is a plain `f64` at
//! runtime with its dimension living purely in the type: mixing
//! incompatible dimensions in `+`, `-`, or a comparison is a compile
//! error, while `*` and `/` re-type their result to the derived dimension.
//!
//! The one place dimensions surface at runtime is rendering: an
//! [`Exponents`] value recovers the seven ordinals so a quantity can be
//! displayed as `"3.0 s"` or `"5.060594512195122 kg‧m/s^2"`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dim;
pub mod exponents;
pub mod quantity;

#[cfg(test)]
mod proptests;

pub use dim::{
    Acceleration, Amount, Area, Current, DimDiv, DimInv, DimMul, Dimension, Dimensionless, Energy,
    Force, Frequency, Inverse, Length, LuminousIntensity, Mass, Power, Prod, Quot, Si, Temperature,
    Time, Velocity, Volume,
};
pub use exponents::Exponents;
pub use quantity::{tag, Quantity};
