//! Reflector: an involutive wiring.
//!
//! The reflector turns the forward signal path back on itself; its table
//! must be self-inverse so that the whole machine stays reciprocal.

use std::fmt;

use crate::alphabet::Letter;
use crate::error::EnigmaError;
use crate::wiring::Wiring;

/// An involutive substitution: `substitute(substitute(x)) == x` for every
/// letter. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Builds a reflector from a substitution alphabet.
    ///
    /// # Errors
    /// The wiring errors of [`Wiring::from_alphabet`], plus
    /// [`EnigmaError::InvalidInvolution`] when any letter fails the
    /// self-inverse check. The table is rejected outright, never repaired.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Reflector;
    ///
    /// // UKW-B
    /// let ukw_b = Reflector::from_alphabet("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// # let _ = ukw_b;
    ///
    /// // A cyclic shift is a valid permutation but not an involution.
    /// assert!(Reflector::from_alphabet("BCDEFGHIJKLMNOPQRSTUVWXYZA").is_err());
    /// ```
    pub fn from_alphabet(alphabet: &str) -> Result<Self, EnigmaError> {
        Self::new(Wiring::from_alphabet(alphabet)?)
    }

    /// Builds a reflector from an existing wiring, verifying the
    /// involution invariant.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidInvolution`] if the wiring is not
    /// self-inverse.
    pub fn new(wiring: Wiring) -> Result<Self, EnigmaError> {
        if !wiring.is_involution() {
            return Err(EnigmaError::InvalidInvolution);
        }
        Ok(Reflector { wiring })
    }

    /// Substitutes a letter through the reflector table.
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.wiring.substitute(letter)
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wiring)
    }
}
