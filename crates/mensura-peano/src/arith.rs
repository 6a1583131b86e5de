//! Type-level addition and subtraction.
//!
//! Both operations are defined by structural case analysis over the three
//! shapes of the family. Same-sign cases recurse on the magnitudes, while
//! the mixed-sign cases of addition reduce to subtraction and vice versa.
//! Every case produces the canonical spelling of its result.

use crate::int::{Natural, Negate, NegateOf, Negative, Positive, Succ, TypedInt, Zero};

/// Type-level addition: `Self + Rhs`.
pub trait Sum<Rhs: TypedInt>: TypedInt {
    /// The sum of `Self` and `Rhs`.
    type Output: TypedInt;
}

/// Shorthand for the sum of `A` and `B`.
pub type SumOf<A, B> = <A as Sum<B>>::Output;

/// Type-level subtraction: `Self - Rhs`.
pub trait Diff<Rhs: TypedInt>: TypedInt {
    /// The difference of `Self` and `Rhs`.
    type Output: TypedInt;
}

/// Shorthand for the difference of `A` and `B`.
pub type DiffOf<A, B> = <A as Diff<B>>::Output;

// Addition: zero cases.

impl Sum<Zero> for Zero {
    type Output = Zero;
}

impl<B: Natural> Sum<Succ<B>> for Zero {
    type Output = Succ<B>;
}

impl<B: Positive> Sum<Negative<B>> for Zero {
    type Output = Negative<B>;
}

impl<A: Natural> Sum<Zero> for Succ<A> {
    type Output = Succ<A>;
}

impl<A: Positive> Sum<Zero> for Negative<A> {
    type Output = Negative<A>;
}

// Two positives: peel one successor off each side, re-wrap twice.
impl<A: Natural, B: Natural> Sum<Succ<B>> for Succ<A>
where
    A: Sum<B>,
    SumOf<A, B>: Natural,
{
    type Output = Succ<Succ<SumOf<A, B>>>;
}

// Two negatives: negate the sum of the magnitudes.
impl<A: Positive, B: Positive> Sum<Negative<B>> for Negative<A>
where
    A: Sum<B>,
    SumOf<A, B>: Positive,
{
    type Output = Negative<SumOf<A, B>>;
}

// Mixed sign reduces to subtraction.
impl<A: Natural, B: Positive> Sum<Negative<B>> for Succ<A>
where
    Succ<A>: Diff<B>,
{
    type Output = DiffOf<Succ<A>, B>;
}

impl<A: Positive, B: Natural> Sum<Succ<B>> for Negative<A>
where
    Succ<B>: Diff<A>,
{
    type Output = DiffOf<Succ<B>, A>;
}

// Subtraction: zero cases.

impl Diff<Zero> for Zero {
    type Output = Zero;
}

impl<A: Natural> Diff<Zero> for Succ<A> {
    type Output = Succ<A>;
}

impl<A: Positive> Diff<Zero> for Negative<A> {
    type Output = Negative<A>;
}

impl<B: Natural> Diff<Succ<B>> for Zero {
    type Output = Negative<Succ<B>>;
}

impl<B: Positive> Diff<Negative<B>> for Zero {
    type Output = B;
}

// Two positives: peel one successor off each side until a zero case hits.
impl<A: Natural, B: Natural> Diff<Succ<B>> for Succ<A>
where
    A: Diff<B>,
{
    type Output = DiffOf<A, B>;
}

// Two negatives: -a - (-b) = b - a.
impl<A: Positive, B: Positive> Diff<Negative<B>> for Negative<A>
where
    B: Diff<A>,
{
    type Output = DiffOf<B, A>;
}

// Positive minus negative: add the magnitudes.
impl<A: Natural, B: Positive> Diff<Negative<B>> for Succ<A>
where
    Succ<A>: Sum<B>,
{
    type Output = SumOf<Succ<A>, B>;
}

// Negative minus positive: negate the sum of the magnitudes.
impl<A: Positive, B: Natural> Diff<Succ<B>> for Negative<A>
where
    A: Sum<Succ<B>>,
    SumOf<A, Succ<B>>: Negate,
{
    type Output = NegateOf<SumOf<A, Succ<B>>>;
}
