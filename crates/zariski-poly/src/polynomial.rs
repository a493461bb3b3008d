//! Sparse multivariate polynomials over a coefficient field.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use zariski_rings::{Field, Ring};

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::variable::Variable;

/// A sparse multivariate polynomial.
///
/// Terms live in a sorted map from monomial to nonzero coefficient;
/// the zero polynomial is the empty map. Every operation returns a new
/// value and purges coefficients the field's zero predicate rejects,
/// so the no-zero-coefficient invariant holds by construction.
///
/// The last leading-term lookup is memoized per value, keyed on the
/// *content* of the order it was computed under. Operations never
/// mutate a polynomial in place, so a populated cache is always valid
/// for its value; cloning carries the cache along.
#[derive(Clone, Debug)]
pub struct Polynomial<F: Ring> {
    terms: BTreeMap<Monomial, F>,
    leading: RefCell<Option<LeadingTerm<F>>>,
}

#[derive(Clone, Debug)]
struct LeadingTerm<F> {
    order: MonomialOrder,
    monomial: Monomial,
    coefficient: F,
}

impl<F: Ring> Polynomial<F> {
    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
            leading: RefCell::new(None),
        }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(F::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: F) -> Self {
        Self::from_terms([(Monomial::one(), c)])
    }

    /// The polynomial consisting of a single variable.
    #[must_use]
    pub fn variable(variable: Variable) -> Self {
        Self::from_terms([(Monomial::var(variable), F::one())])
    }

    /// A single-term polynomial `c * m`.
    #[must_use]
    pub fn from_monomial(monomial: Monomial, coefficient: F) -> Self {
        Self::from_terms([(monomial, coefficient)])
    }

    /// Builds a polynomial from (monomial, coefficient) pairs.
    ///
    /// Repeated monomials accumulate; zero coefficients are dropped.
    pub fn from_terms(pairs: impl IntoIterator<Item = (Monomial, F)>) -> Self {
        let mut terms: BTreeMap<Monomial, F> = BTreeMap::new();
        for (monomial, coefficient) in pairs {
            accumulate(&mut terms, monomial, coefficient);
        }
        Self {
            terms,
            leading: RefCell::new(None),
        }
    }

    /// Iterates over terms in ascending tie-break order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &F)> {
        self.terms.iter()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the coefficient of a monomial, zero if absent.
    #[must_use]
    pub fn coefficient(&self, monomial: &Monomial) -> F {
        self.terms
            .get(monomial)
            .cloned()
            .unwrap_or_else(F::zero)
    }

    /// Returns the variables occurring in the polynomial, in canonical
    /// order.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut set = BTreeSet::new();
        for monomial in self.terms.keys() {
            set.extend(monomial.variables());
        }
        set.into_iter().collect()
    }

    /// Returns the maximum monomial degree, 0 for the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Evaluates the polynomial at the given point.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UnknownVariable`] if a variable occurring
    /// in the polynomial is missing from `env`.
    pub fn evaluate(&self, env: &BTreeMap<Variable, F>) -> Result<F, PolyError> {
        let mut result = F::zero();
        for (monomial, coefficient) in &self.terms {
            let mut term = coefficient.clone();
            for (variable, exp) in monomial.iter() {
                let value = env
                    .get(&variable)
                    .ok_or(PolyError::UnknownVariable(variable))?;
                term = term * value.pow(exp);
            }
            result = result + term;
        }
        Ok(result)
    }

    /// Substitutes a value for a variable, removing it from the
    /// polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UnknownVariable`] if the variable does not
    /// occur.
    pub fn substitute(&self, variable: Variable, value: &F) -> Result<Self, PolyError> {
        if !self.variables().contains(&variable) {
            return Err(PolyError::UnknownVariable(variable));
        }

        let mut terms: BTreeMap<Monomial, F> = BTreeMap::new();
        for (monomial, coefficient) in &self.terms {
            let exp = monomial.exponent(variable);
            let coefficient = coefficient.clone() * value.pow(exp);
            let monomial = Monomial::new(
                monomial
                    .iter()
                    .filter(|&(v, _)| v != variable)
                    .map(|(v, e)| (v, i64::from(e))),
            )
            .expect("exponents of an existing monomial are non-negative");
            accumulate(&mut terms, monomial, coefficient);
        }
        Ok(Self {
            terms,
            leading: RefCell::new(None),
        })
    }

    /// Raises the polynomial to an integer power by binary
    /// exponentiation.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] if `exp < 0`.
    pub fn pow(&self, exp: i32) -> Result<Self, PolyError> {
        if exp < 0 {
            return Err(PolyError::NegativeExponent(exp));
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp % 2 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp /= 2;
        }
        Ok(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
            .filter(|(_, x)| !x.is_zero())
            .collect();
        Self {
            terms,
            leading: RefCell::new(None),
        }
    }

    /// Multiplies by a single term `c * m`.
    #[must_use]
    pub fn mul_term(&self, monomial: &Monomial, c: &F) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(m, x)| (monomial * m, x.clone() * c.clone()))
            .filter(|(_, x)| !x.is_zero())
            .collect();
        Self {
            terms,
            leading: RefCell::new(None),
        }
    }

    /// Returns the leading monomial under the given order, the identity
    /// monomial for the zero polynomial.
    #[must_use]
    pub fn leading_monomial(&self, order: &MonomialOrder) -> Monomial {
        self.cache_leading(order);
        self.leading
            .borrow()
            .as_ref()
            .map(|lt| lt.monomial.clone())
            .expect("cache populated above")
    }

    /// Returns the leading coefficient under the given order, zero for
    /// the zero polynomial.
    #[must_use]
    pub fn leading_coefficient(&self, order: &MonomialOrder) -> F {
        self.cache_leading(order);
        self.leading
            .borrow()
            .as_ref()
            .map(|lt| lt.coefficient.clone())
            .expect("cache populated above")
    }

    fn cache_leading(&self, order: &MonomialOrder) {
        {
            let cached = self.leading.borrow();
            if let Some(lt) = cached.as_ref() {
                if lt.order == *order {
                    return;
                }
            }
        }

        let mut best: Option<(&Monomial, &F)> = None;
        for (monomial, coefficient) in &self.terms {
            best = match best {
                None => Some((monomial, coefficient)),
                Some((bm, _)) if order.less(bm, monomial) => Some((monomial, coefficient)),
                keep => keep,
            };
        }

        let (monomial, coefficient) = best
            .map(|(m, c)| (m.clone(), c.clone()))
            .unwrap_or_else(|| (Monomial::one(), F::zero()));

        *self.leading.borrow_mut() = Some(LeadingTerm {
            order: order.clone(),
            monomial,
            coefficient,
        });
    }
}

impl<F: Field> Polynomial<F> {
    /// Scales the polynomial so its leading coefficient under `order`
    /// is 1.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] for the zero polynomial.
    pub fn monic(&self, order: &MonomialOrder) -> Result<Self, PolyError> {
        let lc = self.leading_coefficient(order);
        let inv = lc.inv().ok_or(PolyError::DivisionByZero)?;
        Ok(self.scale(&inv))
    }
}

fn accumulate<F: Ring>(terms: &mut BTreeMap<Monomial, F>, monomial: Monomial, coefficient: F) {
    if coefficient.is_zero() {
        return;
    }
    match terms.remove(&monomial) {
        None => {
            terms.insert(monomial, coefficient);
        }
        Some(existing) => {
            let sum = existing + coefficient;
            if !sum.is_zero() {
                terms.insert(monomial, sum);
            }
        }
    }
}

/// Semantic equality: `a == b` iff `a - b` is the zero polynomial.
impl<F: Ring> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        (self - other).is_zero()
    }
}

/// Scalar equality: true iff the polynomial is the constant `other`.
impl<F: Ring> PartialEq<F> for Polynomial<F> {
    fn eq(&self, other: &F) -> bool {
        match self.terms.len() {
            0 => other.is_zero(),
            1 => {
                let (monomial, coefficient) = self.terms.iter().next().expect("one term");
                monomial.is_identity() && (coefficient.clone() - other.clone()).is_zero()
            }
            _ => false,
        }
    }
}

impl<F: Ring> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut terms = self.terms.clone();
        for (monomial, coefficient) in &rhs.terms {
            accumulate(&mut terms, monomial.clone(), coefficient.clone());
        }
        Polynomial {
            terms,
            leading: RefCell::new(None),
        }
    }
}

impl<F: Ring> Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut terms = self.terms.clone();
        for (monomial, coefficient) in &rhs.terms {
            accumulate(&mut terms, monomial.clone(), -coefficient.clone());
        }
        Polynomial {
            terms,
            leading: RefCell::new(None),
        }
    }
}

impl<F: Ring> Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut terms: BTreeMap<Monomial, F> = BTreeMap::new();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &rhs.terms {
                accumulate(&mut terms, m1 * m2, c1.clone() * c2.clone());
            }
        }
        Polynomial {
            terms,
            leading: RefCell::new(None),
        }
    }
}

impl<F: Ring> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Self::Output {
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| (m.clone(), -c.clone()))
            .collect();
        Polynomial {
            terms,
            leading: RefCell::new(None),
        }
    }
}

impl<F: Ring> Add for Polynomial<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<F: Ring> Sub for Polynomial<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<F: Ring> Mul for Polynomial<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<F: Ring> Neg for Polynomial<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<F: Ring> Add<F> for Polynomial<F> {
    type Output = Self;

    fn add(self, rhs: F) -> Self::Output {
        &self + &Self::constant(rhs)
    }
}

impl<F: Ring> Sub<F> for Polynomial<F> {
    type Output = Self;

    fn sub(self, rhs: F) -> Self::Output {
        &self - &Self::constant(rhs)
    }
}

impl<F: Ring> Mul<F> for Polynomial<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self::Output {
        self.scale(&rhs)
    }
}

/// Renders in descending monomial order with Unicode superscripts.
///
/// A coefficient of 1 is suppressed except at the constant term; a
/// middle dot separates non-unit coefficients from their monomial; the
/// zero polynomial renders as "0".
impl<F: Ring> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let mut first = true;
        for (monomial, coefficient) in self.terms.iter().rev() {
            let mut coeff_str = coefficient.to_string();
            let monom_str = monomial.to_string();

            if first {
                if let Some(stripped) = coeff_str.strip_prefix('-') {
                    write!(f, "-")?;
                    coeff_str = stripped.to_string();
                }
                first = false;
            } else if let Some(stripped) = coeff_str.strip_prefix('-') {
                write!(f, " - ")?;
                coeff_str = stripped.to_string();
            } else {
                write!(f, " + ")?;
            }

            if monom_str == "1" {
                write!(f, "{coeff_str}")?;
            } else if coeff_str == "1" {
                write!(f, "{monom_str}")?;
            } else {
                write!(f, "{coeff_str}·{monom_str}")?;
            }
        }
        Ok(())
    }
}
