//! The value-level image of a dimension vector, and unit-string rendering.

use std::fmt;

use smallvec::SmallVec;

/// Base-unit symbols, in the fixed component order.
const SYMBOLS: [&str; 7] = ["kg", "m", "s", "A", "K", "mol", "cd"];

/// Separator between unit terms: U+2027, the hyphenation point.
const SEPARATOR: &str = "\u{2027}";

/// The seven exponents of a dimension vector, recovered at the rendering
/// and diagnostic boundary. Order is kg, m, s, A, K, mol, cd.
///
/// Two dimension vectors denote the same dimension exactly when their
/// `Exponents` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exponents([i64; 7]);

impl Exponents {
    /// Wraps seven exponents, given in component order.
    #[must_use]
    pub const fn new(exponents: [i64; 7]) -> Self {
        Self(exponents)
    }

    /// Returns the exponents as a plain array, in component order.
    #[must_use]
    pub const fn as_array(self) -> [i64; 7] {
        self.0
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub const fn is_dimensionless(self) -> bool {
        let mut i = 0;
        while i < 7 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Renders the canonical unit string.
    ///
    /// Components with exponent zero are dropped; positive exponents form
    /// the numerator and negative ones the denominator, each term printed
    /// as its bare symbol when the magnitude is 1 and as `symbol^n`
    /// otherwise, joined with `‧`. A dimension with no terms at all
    /// renders as `<1>`; a denominator-only dimension keeps a literal `1`
    /// numerator (so an inverse second is `1/s`, never `/s`).
    #[must_use]
    pub fn unit_string(&self) -> String {
        let mut numerator: SmallVec<[String; 7]> = SmallVec::new();
        let mut denominator: SmallVec<[String; 7]> = SmallVec::new();

        for (symbol, exponent) in SYMBOLS.iter().zip(self.0) {
            let term = match exponent.abs() {
                0 => continue,
                1 => (*symbol).to_string(),
                power => format!("{symbol}^{power}"),
            };
            if exponent > 0 {
                numerator.push(term);
            } else {
                denominator.push(term);
            }
        }

        if numerator.is_empty() && denominator.is_empty() {
            return "<1>".to_string();
        }

        let numerator = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join(SEPARATOR)
        };

        if denominator.is_empty() {
            numerator
        } else {
            format!("{numerator}/{}", denominator.join(SEPARATOR))
        }
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unit_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless_marker() {
        let e = Exponents::new([0, 0, 0, 0, 0, 0, 0]);
        assert!(e.is_dimensionless());
        assert_eq!(e.unit_string(), "<1>");
    }

    #[test]
    fn test_single_base_units() {
        assert_eq!(Exponents::new([1, 0, 0, 0, 0, 0, 0]).unit_string(), "kg");
        assert_eq!(Exponents::new([0, 0, 1, 0, 0, 0, 0]).unit_string(), "s");
        assert_eq!(Exponents::new([0, 0, 0, 0, 0, 0, 1]).unit_string(), "cd");
    }

    #[test]
    fn test_exponent_powers() {
        assert_eq!(Exponents::new([0, 2, 0, 0, 0, 0, 0]).unit_string(), "m^2");
        assert_eq!(
            Exponents::new([0, 3, -1, 0, 0, 0, 0]).unit_string(),
            "m^3/s"
        );
    }

    #[test]
    fn test_numerator_and_denominator() {
        assert_eq!(Exponents::new([0, 1, -1, 0, 0, 0, 0]).unit_string(), "m/s");
        assert_eq!(
            Exponents::new([1, 1, -2, 0, 0, 0, 0]).unit_string(),
            "kg\u{2027}m/s^2"
        );
        assert_eq!(
            Exponents::new([1, -3, 0, 0, 0, 0, 0]).unit_string(),
            "kg/m^3"
        );
    }

    #[test]
    fn test_denominator_only_keeps_literal_one() {
        assert_eq!(Exponents::new([0, 0, -1, 0, 0, 0, 0]).unit_string(), "1/s");
        assert_eq!(
            Exponents::new([0, 0, -2, 0, -1, 0, 0]).unit_string(),
            "1/s^2\u{2027}K"
        );
    }

    #[test]
    fn test_terms_follow_component_order() {
        assert_eq!(
            Exponents::new([1, 1, 1, 1, 1, 1, 1]).unit_string(),
            "kg\u{2027}m\u{2027}s\u{2027}A\u{2027}K\u{2027}mol\u{2027}cd"
        );
    }

    #[test]
    fn test_display_matches_unit_string() {
        let e = Exponents::new([0, 1, -1, 0, 0, 0, 0]);
        assert_eq!(e.to_string(), e.unit_string());
    }
}
