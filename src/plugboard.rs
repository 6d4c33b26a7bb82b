//! Plugboard: an involutive wiring built from disjoint letter swaps.
//!
//! Up to 13 cables, each swapping one pair of letters; unplugged letters
//! map to themselves. The swap construction makes the involution
//! invariant hold without a separate check.

use std::fmt;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::EnigmaError;
use crate::wiring::Wiring;

/// Maximum number of plug pairs (each cable uses two of the 26 sockets).
const MAX_PAIRS: usize = 13;

/// A reconfigurable involutive substitution built from letter pairs.
///
/// Mutable only by full replacement: [`Enigma::replug`](crate::Enigma::replug)
/// constructs a fresh `Plugboard` and swaps it in, there is no partial
/// edit of an existing board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Wiring,
}

impl Plugboard {
    /// Builds a plugboard from 0–13 disjoint letter pairs.
    ///
    /// Starts from the identity table; for each pair `(a, b)` sets
    /// `table[a] = b` and `table[b] = a`.
    ///
    /// # Errors
    /// - [`EnigmaError::TooManyPairs`] for more than 13 pairs.
    /// - [`EnigmaError::ConflictingPair`] when a letter appears in more
    ///   than one pair (including a pair plugging a letter to itself
    ///   twice, e.g. `('A', 'A')`).
    /// - [`EnigmaError::UnknownSymbol`] for non-alphabet letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let plugboard = Plugboard::new(&[('A', 'G'), ('T', 'F'), ('H', 'K')]).unwrap();
    /// # let _ = plugboard;
    ///
    /// assert!(Plugboard::new(&[('A', 'B'), ('B', 'C')]).is_err());
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        if pairs.len() > MAX_PAIRS {
            return Err(EnigmaError::TooManyPairs(pairs.len()));
        }

        let mut table = [0u8; ALPHABET_LEN as usize];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }

        let mut plugged = [false; ALPHABET_LEN as usize];
        for &(a, b) in pairs {
            let a = Letter::from_char(a)?;
            let b = Letter::from_char(b)?;
            if plugged[a.index() as usize] {
                return Err(EnigmaError::ConflictingPair(a.to_char()));
            }
            plugged[a.index() as usize] = true;
            if plugged[b.index() as usize] {
                return Err(EnigmaError::ConflictingPair(b.to_char()));
            }
            plugged[b.index() as usize] = true;
            table[a.index() as usize] = b.index();
            table[b.index() as usize] = a.index();
        }

        Ok(Plugboard {
            wiring: Wiring::from_table(table)?,
        })
    }

    /// Substitutes a letter through the board. Unplugged letters pass
    /// through unchanged.
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.wiring.substitute(letter)
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wiring)
    }
}
