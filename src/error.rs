//! Error types for the enigma library.

use thiserror::Error;

/// Errors produced by the enigma library.
///
/// All variants are deterministic configuration errors raised at
/// construction time or at the text boundary; once a machine is built and
/// fed alphabet-valid input, per-symbol processing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A character outside the fixed A–Z alphabet was supplied.
    #[error("symbol {0:?} is not in the machine alphabet")]
    UnknownSymbol(char),
    /// A wiring string does not contain exactly 26 symbols.
    #[error("wiring must contain exactly 26 letters, got {0}")]
    InvalidWiringLength(usize),
    /// A wiring table is not a bijection on the alphabet.
    #[error("wiring is not a permutation of the alphabet")]
    NotAPermutation,
    /// A reflector table is not its own inverse.
    #[error("reflector wiring is not an involution")]
    InvalidInvolution,
    /// More than 13 plugboard pairs were supplied.
    #[error("a plugboard takes at most 13 pairs, got {0}")]
    TooManyPairs(usize),
    /// A letter appears in more than one plugboard pair.
    #[error("letter {0:?} appears in more than one plugboard pair")]
    ConflictingPair(char),
    /// A rotor was built without any notch.
    #[error("a rotor needs at least one notch")]
    EmptyNotches,
    /// A numeral setting is outside the 1-based range 1..=26.
    #[error("numeral setting must be in 1..=26, got {0}")]
    NumeralOutOfRange(u8),
    /// The rotor position vector does not match the rotor stack.
    #[error("expected {expected} rotor positions, got {actual}")]
    PositionCountMismatch {
        /// Number of rotors in the stack.
        expected: usize,
        /// Number of positions supplied.
        actual: usize,
    },
}
