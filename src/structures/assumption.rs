//! Assumptions, as drawn from an atom pool.

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
///
/// The integer representation of an assumption is the atom if the polarity is `true`, and the negation of the atom otherwise.
/// As atoms may be negative, an atom of `-5` with `false` polarity is represented as `5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Assumption {
    atom: Atom,
    polarity: bool,
}

impl Assumption {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    pub fn atom(&self) -> Atom {
        self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The integer representation of the assumption.
    ///
    /// Widened, as the negation of [Atom::MIN] is not an [Atom].
    pub fn as_int(&self) -> i128 {
        match self.polarity {
            true => self.atom as i128,
            false => -(self.atom as i128),
        }
    }
}

impl std::ops::Neg for Assumption {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }
}

impl std::fmt::Display for Assumption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod assumption_tests {
    use super::*;

    #[test]
    fn representation() {
        assert_eq!(Assumption::new(5, true).to_string(), "5");
        assert_eq!(Assumption::new(5, false).to_string(), "-5");
        assert_eq!(Assumption::new(-5, false).to_string(), "5");
        assert_eq!(Assumption::new(0, false).to_string(), "0");
        assert_eq!(
            Assumption::new(Atom::MIN, false).to_string(),
            "9223372036854775808"
        );
    }

    #[test]
    fn negation() {
        let p = Assumption::new(7, true);
        assert_eq!((-p).as_int(), -7);
        assert_eq!(-(-p), p);
    }
}
