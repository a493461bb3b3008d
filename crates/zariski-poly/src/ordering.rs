//! Admissible monomial orders.
//!
//! An order is a strict total well-order on monomials compatible with
//! multiplication. The kernel dispatches on a small enum instead of a
//! trait object: the payloads (a variable permutation, optionally a
//! weight vector) are cheap values, and content equality is what keys
//! the polynomial's leading-term cache.

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::variable::Variable;

/// A monomial order, parameterized by a variable permutation listing
/// priority from highest to lowest.
#[derive(Clone, Debug)]
pub enum MonomialOrder {
    /// Lexicographic: the first differing exponent along the
    /// permutation decides.
    Lex {
        /// Variables from highest to lowest priority.
        permutation: Vec<Variable>,
    },

    /// Graded lexicographic: total degree first, lex as tie-break.
    GradedLex {
        /// Variables from highest to lowest priority.
        permutation: Vec<Variable>,
    },

    /// Graded reverse lexicographic: total degree first, then the first
    /// differing exponent along the permutation decides with the
    /// comparison reversed.
    GradedRevLex {
        /// Variables from highest to lowest priority.
        permutation: Vec<Variable>,
    },

    /// Weighted: compare the weight vector dotted with the exponent
    /// difference against zero (with an epsilon tolerance), lex as
    /// tie-break.
    Weighted {
        /// Non-negative weights, one per permutation entry.
        weights: Vec<f64>,
        /// Variables from highest to lowest priority.
        permutation: Vec<Variable>,
    },
}

impl MonomialOrder {
    /// Creates a lexicographic order.
    #[must_use]
    pub fn lex(permutation: Vec<Variable>) -> Self {
        Self::Lex { permutation }
    }

    /// Creates a graded lexicographic order.
    #[must_use]
    pub fn graded_lex(permutation: Vec<Variable>) -> Self {
        Self::GradedLex { permutation }
    }

    /// Creates a graded reverse lexicographic order.
    #[must_use]
    pub fn graded_rev_lex(permutation: Vec<Variable>) -> Self {
        Self::GradedRevLex { permutation }
    }

    /// Creates a weighted order.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidOrder`] if any weight is negative or
    /// the weight and permutation lengths differ.
    pub fn weighted(weights: Vec<f64>, permutation: Vec<Variable>) -> Result<Self, PolyError> {
        if weights.len() != permutation.len() {
            return Err(PolyError::InvalidOrder(format!(
                "{} weights for {} variables",
                weights.len(),
                permutation.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| **w < 0.0) {
            return Err(PolyError::InvalidOrder(format!("negative weight {w}")));
        }
        Ok(Self::Weighted {
            weights,
            permutation,
        })
    }

    /// Returns true if `a` precedes `b` under this order.
    ///
    /// The graded reverse lex variant returns true on equal monomials;
    /// distinct monomials are always ordered strictly, which is what
    /// the leading-term selector relies on.
    #[must_use]
    pub fn less(&self, a: &Monomial, b: &Monomial) -> bool {
        match self {
            Self::Lex { permutation } => lex_less(permutation, a, b),
            Self::GradedLex { permutation } => match a.degree().cmp(&b.degree()) {
                std::cmp::Ordering::Equal => lex_less(permutation, a, b),
                ord => ord == std::cmp::Ordering::Less,
            },
            Self::GradedRevLex { permutation } => match a.degree().cmp(&b.degree()) {
                std::cmp::Ordering::Equal => {
                    for &variable in permutation {
                        let exp_a = a.exponent(variable);
                        let exp_b = b.exponent(variable);
                        if exp_a != exp_b {
                            return exp_a > exp_b;
                        }
                    }
                    true
                }
                ord => ord == std::cmp::Ordering::Less,
            },
            Self::Weighted {
                weights,
                permutation,
            } => {
                let mut dot = 0.0;
                for (weight, &variable) in weights.iter().zip(permutation) {
                    dot += weight * (f64::from(a.exponent(variable)) - f64::from(b.exponent(variable)));
                }
                if dot.abs() > f64::EPSILON {
                    return dot < 0.0;
                }
                lex_less(permutation, a, b)
            }
        }
    }

    /// Returns a short name for the order variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lex { .. } => "lex",
            Self::GradedLex { .. } => "grlex",
            Self::GradedRevLex { .. } => "grevlex",
            Self::Weighted { .. } => "weighted",
        }
    }
}

fn lex_less(permutation: &[Variable], a: &Monomial, b: &Monomial) -> bool {
    for &variable in permutation {
        let exp_a = a.exponent(variable);
        let exp_b = b.exponent(variable);
        if exp_a != exp_b {
            return exp_a < exp_b;
        }
    }
    false
}

/// Content equality: same variant, same permutation, and (for weighted
/// orders) bitwise-identical weights. This is the key the leading-term
/// cache compares against.
impl PartialEq for MonomialOrder {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Lex { permutation: p }, Self::Lex { permutation: q })
            | (Self::GradedLex { permutation: p }, Self::GradedLex { permutation: q })
            | (Self::GradedRevLex { permutation: p }, Self::GradedRevLex { permutation: q }) => {
                p == q
            }
            (
                Self::Weighted {
                    weights: v,
                    permutation: p,
                },
                Self::Weighted {
                    weights: w,
                    permutation: q,
                },
            ) => {
                p == q
                    && v.len() == w.len()
                    && v.iter().zip(w).all(|(a, b)| a.to_bits() == b.to_bits())
            }
            _ => false,
        }
    }
}

impl Eq for MonomialOrder {}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
