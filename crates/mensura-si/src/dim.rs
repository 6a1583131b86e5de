//! Dimension vectors and the algebra that combines them.
//!
//! A dimension is the zero-sized marker [`Si`] carrying seven type-level
//! integer exponents, one per SI base unit, in the fixed order kg, m, s,
//! A, K, mol, cd. Two dimensions are the same dimension exactly when they
//! are the same type, which is what lets the quantity operators enforce
//! compatibility with no runtime check at all.

use std::marker::PhantomData;

use mensura_peano::{Negate, NegateOf, Sum, SumOf, TypedInt, Zero, P1};

use crate::exponents::Exponents;

/// A physical dimension: seven type-level exponents over the SI base
/// units, in the fixed order kg, m, s, A, K, mol, cd.
pub struct Si<Kg, M, S, A, K, Mol, Cd>(PhantomData<(Kg, M, S, A, K, Mol, Cd)>);

mod sealed {
    use mensura_peano::TypedInt;

    use super::Si;

    pub trait Sealed {}

    impl<Kg, M, S, A, K, Mol, Cd> Sealed for Si<Kg, M, S, A, K, Mol, Cd>
    where
        Kg: TypedInt,
        M: TypedInt,
        S: TypedInt,
        A: TypedInt,
        K: TypedInt,
        Mol: TypedInt,
        Cd: TypedInt,
    {
    }
}

/// A well-formed dimension vector.
///
/// Sealed; implemented for every [`Si`] whose seven components are typed
/// integers. The only runtime artifact is [`Dimension::EXPONENTS`], used
/// when a dimension has to be rendered or inspected.
pub trait Dimension: sealed::Sealed {
    /// The value-level image of the seven exponents.
    const EXPONENTS: Exponents;
}

impl<Kg, M, S, A, K, Mol, Cd> Dimension for Si<Kg, M, S, A, K, Mol, Cd>
where
    Kg: TypedInt,
    M: TypedInt,
    S: TypedInt,
    A: TypedInt,
    K: TypedInt,
    Mol: TypedInt,
    Cd: TypedInt,
{
    const EXPONENTS: Exponents = Exponents::new([
        Kg::ORDINAL,
        M::ORDINAL,
        S::ORDINAL,
        A::ORDINAL,
        K::ORDINAL,
        Mol::ORDINAL,
        Cd::ORDINAL,
    ]);
}

/// The dimension of a product: component-wise sum of exponents.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// The combined dimension.
    type Output: Dimension;
}

impl<Kg1, M1, S1, A1, K1, Mol1, Cd1, Kg2, M2, S2, A2, K2, Mol2, Cd2>
    DimMul<Si<Kg2, M2, S2, A2, K2, Mol2, Cd2>> for Si<Kg1, M1, S1, A1, K1, Mol1, Cd1>
where
    Kg1: Sum<Kg2>,
    M1: Sum<M2>,
    S1: Sum<S2>,
    A1: Sum<A2>,
    K1: Sum<K2>,
    Mol1: Sum<Mol2>,
    Cd1: Sum<Cd2>,
    Kg2: TypedInt,
    M2: TypedInt,
    S2: TypedInt,
    A2: TypedInt,
    K2: TypedInt,
    Mol2: TypedInt,
    Cd2: TypedInt,
{
    type Output = Si<
        SumOf<Kg1, Kg2>,
        SumOf<M1, M2>,
        SumOf<S1, S2>,
        SumOf<A1, A2>,
        SumOf<K1, K2>,
        SumOf<Mol1, Mol2>,
        SumOf<Cd1, Cd2>,
    >;
}

/// The dimension of an inverse: component-wise negation of exponents.
pub trait DimInv: Dimension {
    /// The inverted dimension.
    type Output: Dimension;
}

impl<Kg, M, S, A, K, Mol, Cd> DimInv for Si<Kg, M, S, A, K, Mol, Cd>
where
    Kg: Negate,
    M: Negate,
    S: Negate,
    A: Negate,
    K: Negate,
    Mol: Negate,
    Cd: Negate,
{
    type Output = Si<
        NegateOf<Kg>,
        NegateOf<M>,
        NegateOf<S>,
        NegateOf<A>,
        NegateOf<K>,
        NegateOf<Mol>,
        NegateOf<Cd>,
    >;
}

/// The dimension of a quotient, defined as multiplication by the inverse.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// The quotient dimension.
    type Output: Dimension;
}

impl<D1, D2> DimDiv<D2> for D1
where
    D2: DimInv,
    D1: DimMul<<D2 as DimInv>::Output>,
{
    type Output = <D1 as DimMul<<D2 as DimInv>::Output>>::Output;
}

/// Shorthand for the dimension of a product.
pub type Prod<D1, D2> = <D1 as DimMul<D2>>::Output;

/// Shorthand for the dimension of an inverse.
pub type Inverse<D> = <D as DimInv>::Output;

/// Shorthand for the dimension of a quotient.
pub type Quot<D1, D2> = <D1 as DimDiv<D2>>::Output;

/// The dimension of pure numbers: every exponent zero.
pub type Dimensionless = Si<Zero, Zero, Zero, Zero, Zero, Zero, Zero>;

/// Mass (kilogram).
pub type Mass = Si<P1, Zero, Zero, Zero, Zero, Zero, Zero>;

/// Length (metre).
pub type Length = Si<Zero, P1, Zero, Zero, Zero, Zero, Zero>;

/// Time (second).
pub type Time = Si<Zero, Zero, P1, Zero, Zero, Zero, Zero>;

/// Electric current (ampere).
pub type Current = Si<Zero, Zero, Zero, P1, Zero, Zero, Zero>;

/// Thermodynamic temperature (kelvin).
pub type Temperature = Si<Zero, Zero, Zero, Zero, P1, Zero, Zero>;

/// Amount of substance (mole).
pub type Amount = Si<Zero, Zero, Zero, Zero, Zero, P1, Zero>;

/// Luminous intensity (candela).
pub type LuminousIntensity = Si<Zero, Zero, Zero, Zero, Zero, Zero, P1>;

/// Area, m².
pub type Area = Prod<Length, Length>;

/// Volume, m³.
pub type Volume = Prod<Area, Length>;

/// Frequency, 1/s.
pub type Frequency = Inverse<Time>;

/// Velocity, m/s.
pub type Velocity = Quot<Length, Time>;

/// Acceleration, m/s².
pub type Acceleration = Quot<Velocity, Time>;

/// Force, kg‧m/s².
pub type Force = Prod<Mass, Acceleration>;

/// Energy, kg‧m²/s².
pub type Energy = Prod<Force, Length>;

/// Power, kg‧m²/s³.
pub type Power = Quot<Energy, Time>;
