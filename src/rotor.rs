//! Rotor: a wiring with notch positions, substituted relative to an offset.
//!
//! Rotors themselves are immutable; the machine owns the rotational
//! offsets and passes the current one into [`Rotor::forward`] and
//! [`Rotor::inverse`]. The two are exact algebraic inverses for the same
//! offset, which is what makes the overall signal path reciprocal.

use std::fmt;

use crate::alphabet::{Letter, Setting};
use crate::error::EnigmaError;
use crate::wiring::Wiring;

/// A permutation combined with notch positions.
///
/// Notches are given as [`Setting`]s (letters or 1-based numerals) and
/// stored as 0–25 indices. A rotor sitting on a notch position makes the
/// next rotor in the stack advance during the stepping transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    notches: Vec<u8>,
}

impl Rotor {
    /// Builds a rotor from a substitution alphabet and at least one notch.
    ///
    /// # Errors
    /// The wiring errors of [`Wiring::from_alphabet`], the setting errors
    /// of notch normalization, and [`EnigmaError::EmptyNotches`] when the
    /// notch list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Rotor, Setting};
    ///
    /// // Rotor I: notch at Q, given as a 1-based numeral as the archives do.
    /// let rotor = Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", &[Setting::Numeral(17)]).unwrap();
    /// assert!(rotor.has_notch_at(16));
    /// ```
    pub fn new(alphabet: &str, notches: &[Setting]) -> Result<Self, EnigmaError> {
        if notches.is_empty() {
            return Err(EnigmaError::EmptyNotches);
        }
        let wiring = Wiring::from_alphabet(alphabet)?;
        let notches = notches
            .iter()
            .map(|setting| setting.normalize())
            .collect::<Result<Vec<u8>, EnigmaError>>()?;
        Ok(Rotor { wiring, notches })
    }

    /// Substitutes a letter entering the rotor at the given offset:
    /// `table[(index + offset) mod 26]`.
    pub fn forward(&self, letter: Letter, offset: u8) -> Letter {
        self.wiring.substitute(letter.shifted_by(offset))
    }

    /// Substitutes a letter travelling back through the rotor at the given
    /// offset: `(position_of(letter) − offset) mod 26`.
    ///
    /// For every letter `x` and offset `p`,
    /// `inverse(forward(x, p), p) == x`.
    pub fn inverse(&self, letter: Letter, offset: u8) -> Letter {
        self.wiring.position_of(letter).shifted_back(offset)
    }

    /// True when `offset` is one of this rotor's notch positions.
    pub fn has_notch_at(&self, offset: u8) -> bool {
        self.notches.contains(&offset)
    }

    /// The notch positions as letters, in the order they were given.
    pub fn notches(&self) -> Vec<char> {
        self.notches
            .iter()
            .map(|&n| Letter::from_index(n).to_char())
            .collect()
    }
}

impl fmt::Display for Rotor {
    /// Renders the wiring rows followed by the notch letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.wiring)?;
        write!(f, "Notches: ")?;
        for notch in self.notches() {
            write!(f, "{}", notch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_forward_at_offset_zero() {
        let rotor = Rotor::new(ROTOR_I, &[Setting::Letter('Q')]).unwrap();
        assert_eq!(rotor.forward(letter('A'), 0), letter('E'));
        assert_eq!(rotor.forward(letter('B'), 0), letter('K'));
    }

    #[test]
    fn test_forward_shifts_entry_point() {
        let rotor = Rotor::new(ROTOR_I, &[Setting::Letter('Q')]).unwrap();
        // Offset 1: 'A' enters at position 1 → table['B'] = 'K'.
        assert_eq!(rotor.forward(letter('A'), 1), letter('K'));
        // Wraps: 'Z' at offset 1 enters at position 0 → 'E'.
        assert_eq!(rotor.forward(letter('Z'), 1), letter('E'));
    }

    #[test]
    fn test_inverse_at_offset_zero() {
        let rotor = Rotor::new(ROTOR_I, &[Setting::Letter('Q')]).unwrap();
        assert_eq!(rotor.inverse(letter('E'), 0), letter('A'));
        assert_eq!(rotor.inverse(letter('K'), 0), letter('B'));
    }

    #[test]
    fn test_forward_inverse_reciprocity_all_offsets() {
        let rotor = Rotor::new(ROTOR_I, &[Setting::Letter('Q')]).unwrap();
        for offset in 0..26 {
            for i in 0..26 {
                let input = Letter::from_index(i);
                assert_eq!(
                    rotor.inverse(rotor.forward(input, offset), offset),
                    input,
                    "reciprocity broken at offset {} input {}",
                    offset,
                    input.to_char()
                );
            }
        }
    }

    #[test]
    fn test_notch_from_letter_and_numeral() {
        // Rotor I's notch written both ways: letter Q and numeral 17.
        let by_letter = Rotor::new(ROTOR_I, &[Setting::Letter('Q')]).unwrap();
        let by_numeral = Rotor::new(ROTOR_I, &[Setting::Numeral(17)]).unwrap();
        assert_eq!(by_letter, by_numeral);
        assert!(by_letter.has_notch_at(16));
        assert!(!by_letter.has_notch_at(17));
    }

    #[test]
    fn test_multiple_notches() {
        let rotor = Rotor::new(
            "JPGVOUMFYQBENHZRDKASXLICTW",
            &[Setting::Letter('Z'), Setting::Letter('M')],
        )
        .unwrap();
        assert!(rotor.has_notch_at(25));
        assert!(rotor.has_notch_at(12));
        assert!(!rotor.has_notch_at(0));
        assert_eq!(rotor.notches(), vec!['Z', 'M']);
    }

    #[test]
    fn test_empty_notches_rejected() {
        assert_eq!(
            Rotor::new(ROTOR_I, &[]),
            Err(EnigmaError::EmptyNotches)
        );
    }

    #[test]
    fn test_bad_wiring_rejected() {
        assert_eq!(
            Rotor::new("AACDEFGHIJKLMNOPQRSTUVWXYZ", &[Setting::Letter('Q')]),
            Err(EnigmaError::NotAPermutation)
        );
    }

    #[test]
    fn test_bad_notch_rejected() {
        assert_eq!(
            Rotor::new(ROTOR_I, &[Setting::Numeral(27)]),
            Err(EnigmaError::NumeralOutOfRange(27))
        );
    }

    #[test]
    fn test_display_includes_notches() {
        let rotor = Rotor::new(ROTOR_I, &[Setting::Letter('Q')]).unwrap();
        let text = format!("{}", rotor);
        assert!(text.contains(ROTOR_I));
        assert!(text.ends_with("Notches: Q"));
    }
}
