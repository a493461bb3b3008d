//! Polynomial ideals with a memoized Gröbner basis.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Mul};

use zariski_groebner::{groebner_basis, reduce};
use zariski_poly::{MonomialOrder, PolyError, Polynomial, Variable};
use zariski_rings::Field;

/// An ideal of a polynomial ring, held as a list of generators.
///
/// The reduced Gröbner basis of the generators is computed lazily and
/// memoized together with the order it was computed under; membership
/// and equality queries force the computation. The memo is owned by the
/// value and replaced wholesale whenever a query asks for a different
/// order, so a populated cache is always the reduced basis under its
/// recorded order.
#[derive(Clone, Debug)]
pub struct Ideal<F: Field> {
    generators: Vec<Polynomial<F>>,
    variables: Vec<Variable>,
    basis: RefCell<Option<CachedBasis<F>>>,
}

#[derive(Clone, Debug)]
struct CachedBasis<F: Field> {
    order: MonomialOrder,
    basis: Vec<Polynomial<F>>,
}

impl<F: Field> Ideal<F> {
    /// Creates an ideal from its generators.
    ///
    /// An empty generator list denotes the zero ideal.
    #[must_use]
    pub fn new(generators: Vec<Polynomial<F>>) -> Self {
        let mut set = BTreeSet::new();
        for generator in &generators {
            set.extend(generator.variables());
        }
        Self {
            generators,
            variables: set.into_iter().collect(),
            basis: RefCell::new(None),
        }
    }

    /// Returns the generators.
    #[must_use]
    pub fn generators(&self) -> &[Polynomial<F>] {
        &self.generators
    }

    /// Returns the union of the generators' variables, in canonical
    /// order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn default_order(&self) -> MonomialOrder {
        MonomialOrder::graded_rev_lex(self.variables.clone())
    }

    /// Returns the reduced Gröbner basis under graded reverse lex over
    /// the ideal's variables, memoizing the result. A basis cached by
    /// an earlier [`Ideal::groebner_basis_lex`] call is replaced.
    ///
    /// # Errors
    ///
    /// Propagates errors from the basis computation.
    pub fn groebner_basis(&self) -> Result<Vec<Polynomial<F>>, PolyError> {
        let order = self.default_order();
        self.basis_under(&order)
    }

    /// Computes the reduced Gröbner basis under the lexicographic order
    /// given by `permutation` and replaces the memoized basis with it.
    ///
    /// # Errors
    ///
    /// Propagates errors from the basis computation.
    pub fn groebner_basis_lex(
        &self,
        permutation: Vec<Variable>,
    ) -> Result<Vec<Polynomial<F>>, PolyError> {
        let order = MonomialOrder::lex(permutation);
        self.basis_under(&order)
    }

    fn basis_under(&self, order: &MonomialOrder) -> Result<Vec<Polynomial<F>>, PolyError> {
        {
            let cached = self.basis.borrow();
            if let Some(cache) = cached.as_ref() {
                if cache.order == *order {
                    return Ok(cache.basis.clone());
                }
            }
        }

        let basis = groebner_basis(&self.generators, order)?;
        *self.basis.borrow_mut() = Some(CachedBasis {
            order: order.clone(),
            basis: basis.clone(),
        });
        Ok(basis)
    }

    /// Returns true if `f` lies in the ideal.
    ///
    /// Reduces `f` by the memoized basis (computing one under graded
    /// reverse lex if absent) and tests the remainder for zero. The
    /// reduction runs under the same order the cached basis was
    /// computed with.
    ///
    /// # Errors
    ///
    /// Propagates errors from the basis computation or reduction.
    pub fn contains(&self, f: &Polynomial<F>) -> Result<bool, PolyError> {
        let needs_basis = self.basis.borrow().is_none();
        if needs_basis {
            self.groebner_basis()?;
        }

        let cached = self.basis.borrow();
        let cache = cached.as_ref().expect("basis computed above");
        let (_, r) = reduce(f, &cache.basis, &cache.order)?;
        Ok(r.is_zero())
    }

    /// Returns true if every generator of this ideal lies in `other`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the membership tests.
    pub fn is_subset_of(&self, other: &Self) -> Result<bool, PolyError> {
        for generator in &self.generators {
            if !other.contains(generator)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns true if the two ideals are equal.
    ///
    /// Both reduced monic bases are computed under graded reverse lex
    /// over the union of the two variable sets and compared as sets;
    /// uniqueness of the reduced basis makes this a complete test.
    ///
    /// # Errors
    ///
    /// Propagates errors from the basis computations.
    pub fn equals(&self, other: &Self) -> Result<bool, PolyError> {
        let mut set: BTreeSet<Variable> = self.variables.iter().copied().collect();
        set.extend(other.variables.iter().copied());
        let order = MonomialOrder::graded_rev_lex(set.into_iter().collect());

        let ours = groebner_basis(&self.generators, &order)?;
        let theirs = groebner_basis(&other.generators, &order)?;

        if ours.len() != theirs.len() {
            return Ok(false);
        }
        Ok(ours.iter().all(|g| theirs.iter().any(|h| g == h)))
    }

    /// Computes the intersection of two ideals.
    ///
    /// Uses the elimination construction: with a fresh auxiliary
    /// variable `t` ordered before every user variable, the basis of
    /// `{t·fᵢ} ∪ {(1−t)·gⱼ}` under lex is computed and the elements not
    /// involving `t` generate the intersection.
    ///
    /// # Errors
    ///
    /// Propagates errors from the basis computation.
    pub fn intersect(&self, other: &Self) -> Result<Self, PolyError> {
        let t = Variable::Aux(0);
        let t_poly = Polynomial::variable(t);
        let s_poly = Polynomial::one() - t_poly.clone();

        let mut generators: Vec<Polynomial<F>> = Vec::new();
        for generator in &self.generators {
            generators.push(generator * &t_poly);
        }
        for generator in &other.generators {
            generators.push(generator * &s_poly);
        }

        let mut set: BTreeSet<Variable> = self.variables.iter().copied().collect();
        set.extend(other.variables.iter().copied());
        let variables: Vec<Variable> = set.into_iter().collect();

        let mut permutation = vec![t];
        permutation.extend(&variables);

        let basis = groebner_basis(&generators, &MonomialOrder::lex(permutation))?;
        Ok(Self::elimination_ideal(&basis, &variables))
    }

    /// Extracts the elimination ideal from an already computed Gröbner
    /// basis: the elements whose variables all lie in `keep`.
    ///
    /// The basis must have been computed under a lex order in which the
    /// eliminated variables precede the kept ones.
    #[must_use]
    pub fn elimination_ideal(basis: &[Polynomial<F>], keep: &[Variable]) -> Self {
        let keep: BTreeSet<Variable> = keep.iter().copied().collect();
        let retained = basis
            .iter()
            .filter(|f| f.variables().iter().all(|v| keep.contains(v)))
            .cloned()
            .collect();
        Self::new(retained)
    }
}

/// The sum `I + J`: generated by the union of the generators.
impl<F: Field> Add for &Ideal<F> {
    type Output = Ideal<F>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut generators = self.generators.clone();
        generators.extend(rhs.generators.iter().cloned());
        Ideal::new(generators)
    }
}

/// The product `I · J`: generated by all pairwise generator products.
impl<F: Field> Mul for &Ideal<F> {
    type Output = Ideal<F>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut generators = Vec::with_capacity(self.generators.len() * rhs.generators.len());
        for f in &self.generators {
            for g in &rhs.generators {
                generators.push(f * g);
            }
        }
        Ideal::new(generators)
    }
}

impl<F: Field> Add for Ideal<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<F: Field> Mul for Ideal<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<F: Field> fmt::Display for Ideal<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, generator) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{generator}")?;
        }
        write!(f, ">")
    }
}
