//! # mensura-peano
//!
//! Type-level signed integers for the Mensura dimension system.
//!
//! Every integer in this crate is a distinct zero-sized *type*. The
//! positive naturals are built from [`Zero`] by repeated [`Succ`], and a
//! negative wraps a strictly positive natural in [`Negative`]. Arithmetic
//! over these types ([`Negate`], [`Sum`], [`Diff`]) is carried out entirely
//! by the trait solver, so downstream code pays no runtime cost for it; the
//! only bridge back to the value level is [`TypedInt::ORDINAL`].
//!
//! The family is closed: the arithmetic traits are sealed and only the
//! canonical shapes implement them, so a non-canonical spelling such as
//! `Negative<Zero>` is inert and unusable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod int;

pub use arith::{Diff, DiffOf, Sum, SumOf};
pub use int::{
    Natural, Negate, NegateOf, Negative, Positive, Succ, TypedInt, Zero, N1, N2, N3, N4, N5, N6,
    N7, N8, N9, P1, P2, P3, P4, P5, P6, P7, P8, P9,
};
