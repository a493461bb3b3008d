//! Variables of the polynomial ring.

use std::fmt;

/// A variable symbol.
///
/// User-facing variables carry a printable symbol. The `Aux` namespace
/// is reserved for the kernel itself: the ideal-intersection and
/// saturation constructions introduce fresh variables that must never
/// collide with user input, so they live in a separate case rather
/// than squatting on an unprintable code point.
///
/// The derived order places every auxiliary variable before every user
/// variable; within each case, variables compare by their tag. This is
/// the canonical variable order used for rendering, for `variables()`
/// listings and for the monomial tie-break comparison.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variable {
    /// A kernel-reserved auxiliary variable.
    Aux(u32),
    /// A user variable, identified by its printable symbol.
    User(char),
}

impl Variable {
    /// Creates a user variable from its symbol.
    #[must_use]
    pub const fn user(symbol: char) -> Self {
        Self::User(symbol)
    }

    /// Returns true for kernel-reserved auxiliary variables.
    #[must_use]
    pub const fn is_aux(&self) -> bool {
        matches!(self, Self::Aux(_))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(symbol) => write!(f, "{symbol}"),
            Self::Aux(index) => write!(f, "#{index}"),
        }
    }
}

impl From<char> for Variable {
    fn from(symbol: char) -> Self {
        Self::User(symbol)
    }
}
