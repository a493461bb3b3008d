//! Monomials: products of variable powers.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Mul;

use crate::error::PolyError;
use crate::variable::Variable;

/// A monomial, stored as a sorted map from variable to exponent.
///
/// Zero exponents are never stored; the identity monomial is the empty
/// map and renders as "1". The total degree is maintained alongside the
/// map so comparisons do not re-sum exponents.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    exponents: BTreeMap<Variable, u32>,
    degree: u32,
}

impl Monomial {
    /// Creates a monomial from raw (variable, exponent) pairs.
    ///
    /// Zero exponents are dropped; repeated variables accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidExponent`] if any exponent is
    /// negative.
    pub fn new(pairs: impl IntoIterator<Item = (Variable, i64)>) -> Result<Self, PolyError> {
        let mut exponents: BTreeMap<Variable, u32> = BTreeMap::new();
        for (variable, exponent) in pairs {
            match exponent.cmp(&0) {
                Ordering::Less => {
                    return Err(PolyError::InvalidExponent { variable, exponent });
                }
                Ordering::Equal => {}
                Ordering::Greater => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let exp = exponent as u32;
                    *exponents.entry(variable).or_insert(0) += exp;
                }
            }
        }
        let degree = exponents.values().sum();
        Ok(Self { exponents, degree })
    }

    /// The identity monomial (degree 0).
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// The monomial consisting of a single variable to the first power.
    #[must_use]
    pub fn var(variable: Variable) -> Self {
        Self::var_pow(variable, 1)
    }

    /// The monomial `variable^exponent`.
    #[must_use]
    pub fn var_pow(variable: Variable, exponent: u32) -> Self {
        let mut exponents = BTreeMap::new();
        if exponent > 0 {
            exponents.insert(variable, exponent);
        }
        Self {
            exponents,
            degree: exponent,
        }
    }

    /// Returns the exponent of a variable, 0 if absent.
    #[must_use]
    pub fn exponent(&self, variable: Variable) -> u32 {
        self.exponents.get(&variable).copied().unwrap_or(0)
    }

    /// Returns the total degree (sum of exponents).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns the number of distinct variables.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.exponents.len()
    }

    /// Returns true for the identity monomial.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Returns the variables in canonical order.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        self.exponents.keys().copied().collect()
    }

    /// Iterates over (variable, exponent) entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, u32)> + '_ {
        self.exponents.iter().map(|(&v, &e)| (v, e))
    }

    /// Divides by another monomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotDivisible`] if any exponent would go
    /// negative.
    pub fn div(&self, other: &Self) -> Result<Self, PolyError> {
        let mut exponents = self.exponents.clone();
        for (&variable, &exp) in &other.exponents {
            let own = self.exponent(variable);
            if own < exp {
                return Err(PolyError::NotDivisible { variable });
            }
            if own == exp {
                exponents.remove(&variable);
            } else {
                exponents.insert(variable, own - exp);
            }
        }
        let degree = self.degree - other.degree;
        Ok(Self { exponents, degree })
    }

    /// Returns true iff `other` divides `self`, i.e. `self / other`
    /// would succeed.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        other
            .exponents
            .iter()
            .all(|(&variable, &exp)| self.exponent(variable) >= exp)
    }

    /// Computes the least common multiple: the entry-wise maximum of
    /// exponents.
    #[must_use]
    pub fn lcm(a: &Self, b: &Self) -> Self {
        let mut exponents = a.exponents.clone();
        for (&variable, &exp) in &b.exponents {
            let entry = exponents.entry(variable).or_insert(0);
            *entry = (*entry).max(exp);
        }
        let degree = exponents.values().sum();
        Self { exponents, degree }
    }
}

/// The container tie-break order.
///
/// Smaller degree first; on equal degree the exponent entries are
/// walked in canonical variable order, comparing exponents where the
/// variables agree and deeming the monomial holding the later variable
/// smaller where they do not. A strict entry prefix is smaller than its
/// extension. This order keeps term maps deterministic; it is not one
/// of the algebraic monomial orders.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.degree.cmp(&other.degree) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let mut left = self.exponents.iter();
        let mut right = other.exponents.iter();

        loop {
            match (left.next(), right.next()) {
                (Some((lv, le)), Some((rv, re))) => {
                    if lv == rv {
                        match le.cmp(re) {
                            Ordering::Equal => {}
                            ord => return ord,
                        }
                    } else if lv > rv {
                        return Ordering::Less;
                    } else {
                        return Ordering::Greater;
                    }
                }
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (None, None) => return Ordering::Equal,
            }
        }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Mul for &Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut exponents = self.exponents.clone();
        for (&variable, &exp) in &rhs.exponents {
            *exponents.entry(variable).or_insert(0) += exp;
        }
        Monomial {
            exponents,
            degree: self.degree + rhs.degree,
        }
    }
}

impl Mul for Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

fn superscript(exp: u32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    exp.to_string()
        .bytes()
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "1");
        }
        for (&variable, &exp) in &self.exponents {
            write!(f, "{variable}")?;
            if exp > 1 {
                write!(f, "{}", superscript(exp))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Variable {
        Variable::user('x')
    }

    fn y() -> Variable {
        Variable::user('y')
    }

    #[test]
    fn test_new_drops_zero_exponents() {
        let m = Monomial::new([(x(), 2), (y(), 0)]).unwrap();
        assert_eq!(m.exponent(x()), 2);
        assert_eq!(m.num_variables(), 1);
        assert_eq!(m.degree(), 2);
    }

    #[test]
    fn test_new_rejects_negative() {
        let err = Monomial::new([(x(), -1)]).unwrap_err();
        assert!(matches!(err, PolyError::InvalidExponent { .. }));
    }

    #[test]
    fn test_mul_div() {
        let x2y = Monomial::new([(x(), 2), (y(), 1)]).unwrap();
        let xy = Monomial::new([(x(), 1), (y(), 1)]).unwrap();

        assert_eq!(&x2y * &xy, Monomial::new([(x(), 3), (y(), 2)]).unwrap());
        assert_eq!(x2y.div(&xy).unwrap(), Monomial::var(x()));
        assert!(xy.div(&x2y).is_err());
    }

    #[test]
    fn test_divides_matches_div() {
        let x2y = Monomial::new([(x(), 2), (y(), 1)]).unwrap();
        let xy = Monomial::new([(x(), 1), (y(), 1)]).unwrap();
        let y2 = Monomial::var_pow(y(), 2);

        assert!(x2y.is_divisible_by(&xy));
        assert!(!x2y.is_divisible_by(&y2));
        assert!(x2y.div(&y2).is_err());
        // Everything is divisible by the identity
        assert!(x2y.is_divisible_by(&Monomial::one()));
    }

    #[test]
    fn test_lcm() {
        let x2 = Monomial::var_pow(x(), 2);
        let xy = Monomial::new([(x(), 1), (y(), 1)]).unwrap();
        assert_eq!(
            Monomial::lcm(&x2, &xy),
            Monomial::new([(x(), 2), (y(), 1)]).unwrap()
        );
    }

    #[test]
    fn test_tie_break_order() {
        let one = Monomial::one();
        let xm = Monomial::var(x());
        let ym = Monomial::var(y());
        let x2 = Monomial::var_pow(x(), 2);
        let xy = Monomial::new([(x(), 1), (y(), 1)]).unwrap();

        // Degree dominates
        assert!(one < xm);
        assert!(xm < x2);
        // Same degree: the later variable loses
        assert!(ym < xm);
        assert!(xy < x2);
    }

    #[test]
    fn test_display() {
        let m = Monomial::new([(x(), 3), (y(), 1)]).unwrap();
        assert_eq!(m.to_string(), "x³y");
        assert_eq!(Monomial::one().to_string(), "1");
    }
}
