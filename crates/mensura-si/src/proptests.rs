//! Property-based tests for quantity arithmetic and rendering.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Dimensionless, Length, Mass, Prod, Quantity, Time};

    // Strategy for generating finite magnitudes whose products stay finite.
    fn magnitude() -> impl Strategy<Value = f64> {
        -1.0e6..1.0e6
    }

    proptest! {
        #[test]
        fn product_magnitude_matches_float_multiply(x in magnitude(), y in magnitude()) {
            let product = Quantity::<Mass>::new(x) * Quantity::<Length>::new(y);
            prop_assert_eq!(product.magnitude().to_bits(), (x * y).to_bits());
        }

        #[test]
        fn product_dimension_is_derived(x in magnitude(), y in magnitude()) {
            let product = Quantity::<Mass>::new(x) * Quantity::<Length>::new(y);
            prop_assert_eq!(
                Quantity::<Prod<Mass, Length>>::new(product.magnitude()).to_string(),
                product.to_string()
            );
        }

        #[test]
        fn quotient_magnitude_matches_float_divide(x in magnitude(), y in magnitude()) {
            // Bit-compare so a zero divisor (infinity or NaN result) still agrees.
            let quotient = Quantity::<Length>::new(x) / Quantity::<Time>::new(y);
            prop_assert_eq!(quotient.magnitude().to_bits(), (x / y).to_bits());
        }

        #[test]
        fn sum_and_difference_match_float_arithmetic(x in magnitude(), y in magnitude()) {
            let a = Quantity::<Time>::new(x);
            let b = Quantity::<Time>::new(y);
            prop_assert_eq!((a + b).magnitude().to_bits(), (x + y).to_bits());
            prop_assert_eq!((a - b).magnitude().to_bits(), (x - y).to_bits());
        }

        #[test]
        fn addition_commutes(x in magnitude(), y in magnitude()) {
            let a = Quantity::<Time>::new(x);
            let b = Quantity::<Time>::new(y);
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn multiplying_by_an_inverse_cancels_the_dimension(x in magnitude(), y in magnitude()) {
            prop_assume!(y != 0.0);
            let rate = Quantity::<Length>::new(x) / Quantity::<Length>::new(y);
            prop_assert!(Quantity::<Dimensionless>::exponents().is_dimensionless());
            prop_assert_eq!(rate.magnitude().to_bits(), (x / y).to_bits());
            let _: Quantity<Dimensionless> = rate;
        }

        #[test]
        fn comparisons_match_float_ordering(x in magnitude(), y in magnitude()) {
            let a = Quantity::<Mass>::new(x);
            let b = Quantity::<Mass>::new(y);
            prop_assert_eq!(a < b, x < y);
            prop_assert_eq!(a > b, x > y);
            prop_assert_eq!(a <= b, x <= y);
            prop_assert_eq!(a >= b, x >= y);
            prop_assert_eq!(a == b, x == y);
        }

        #[test]
        fn dimensionless_round_trips_through_f64(x in magnitude()) {
            let tagged = Quantity::from(x);
            prop_assert_eq!(f64::from(tagged).to_bits(), x.to_bits());
        }

        #[test]
        fn dimensionless_renders_with_the_unity_marker(x in magnitude()) {
            let rendered = Quantity::<Dimensionless>::new(x).to_string();
            prop_assert_eq!(rendered, format!("{x:?} <1>"));
        }
    }
}
