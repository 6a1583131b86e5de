//! # Mensura
//!
//! Compile-time dimensional analysis for physical quantities.
//!
//! Every value carries its physical dimension, a vector of the seven SI
//! base-unit exponents, in its type. Arithmetic that would mix
//! incompatible dimensions is rejected by the compiler, while arithmetic
//! that derives a new dimension is re-typed automatically; at runtime a
//! quantity is nothing but a plain `f64`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mensura::prelude::*;
//!
//! let distance = Quantity::<Length>::new(3.523);
//! let elapsed = Quantity::<Time>::new(2.132);
//!
//! let velocity: Quantity<Velocity> = distance / elapsed;
//! let acceleration: Quantity<Acceleration> = velocity / Quantity::<Time>::new(2.0);
//! let force: Quantity<Force> = Quantity::<Mass>::new(6.125) * acceleration;
//!
//! assert_eq!(force.to_string(), "5.060594512195122 kg\u{2027}m/s^2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use mensura_peano as peano;
pub use mensura_si as si;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use mensura_peano::{Diff, DiffOf, Negate, NegateOf, Sum, SumOf, TypedInt};
    pub use mensura_si::{
        tag, Acceleration, Amount, Area, Current, DimDiv, DimInv, DimMul, Dimension,
        Dimensionless, Energy, Exponents, Force, Frequency, Inverse, Length, LuminousIntensity,
        Mass, Power, Prod, Quantity, Quot, Si, Temperature, Time, Velocity, Volume,
    };
}
