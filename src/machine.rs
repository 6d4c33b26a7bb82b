//! Enigma: the machine orchestrator.
//!
//! Owns the reflector, the plugboard, the rotor stack and the rotor
//! position vector; drives the odometer stepping and the reciprocal
//! signal path plugboard → rotors → reflector → rotors → plugboard.

use std::fmt;

use crate::alphabet::{Letter, Setting, ALPHABET_LEN};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Ciphertext symbols per output group.
const GROUP_LEN: usize = 5;

/// A rotor cipher machine with 3 or 4 rotors.
///
/// Rotor index 0 is the fastest rotor: it advances before every symbol,
/// and a rotor sitting on one of its notches advances its neighbor.
/// Because the signal path is reciprocal, a machine decrypts its own
/// output when started from the same rotor positions.
///
/// All operations take `&mut self`; exclusive access is the borrow
/// checker's job, the machine holds no internal synchronization.
///
/// # Examples
///
/// ```
/// use enigma::{catalog, Enigma, Plugboard, Setting};
///
/// let plugboard = Plugboard::new(&[('A', 'G'), ('T', 'F'), ('H', 'K')]).unwrap();
/// let mut machine = Enigma::new(
///     catalog::ukw_b(),
///     plugboard,
///     [catalog::rotor_i(), catalog::rotor_ii(), catalog::rotor_iii()],
///     &[Setting::Letter('D'), Setting::Letter('A'), Setting::Letter('Z')],
/// )
/// .unwrap();
///
/// let ciphertext = machine.encrypt("This is a string").unwrap();
/// assert_eq!(machine.decrypt(&ciphertext).unwrap(), "THISISASTRING");
/// ```
pub struct Enigma {
    reflector: Reflector,
    plugboard: Plugboard,
    rotors: Vec<Rotor>,
    start_positions: Vec<u8>,
    positions: Vec<u8>,
}

impl Enigma {
    /// Builds a three-rotor machine.
    ///
    /// `rotors[0]` is the fastest rotor. `positions` must hold one setting
    /// per rotor; both the start vector and the current vector are set
    /// from it.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PositionCountMismatch`] when `positions`
    /// does not hold exactly 3 settings, or a setting error when one of
    /// them fails to normalize.
    pub fn new(
        reflector: Reflector,
        plugboard: Plugboard,
        rotors: [Rotor; 3],
        positions: &[Setting],
    ) -> Result<Self, EnigmaError> {
        Self::build(reflector, plugboard, Vec::from(rotors), positions)
    }

    /// Builds a four-rotor machine.
    ///
    /// The fourth rotor joins the slow end of the stack: it can be
    /// advanced by `rotors[2]`'s notches but never advances anything
    /// itself. `positions` must hold 4 settings.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), with 4 expected positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{catalog, Enigma, Plugboard, Setting};
    ///
    /// let mut machine = Enigma::with_fourth_rotor(
    ///     catalog::ukw_b(),
    ///     Plugboard::new(&[]).unwrap(),
    ///     [catalog::rotor_i(), catalog::rotor_ii(), catalog::rotor_iii()],
    ///     catalog::rotor_iv(),
    ///     &[Setting::Numeral(1); 4],
    /// )
    /// .unwrap();
    ///
    /// let ciphertext = machine.encrypt("RENDEZVOUS AT DAWN").unwrap();
    /// assert_eq!(machine.decrypt(&ciphertext).unwrap(), "RENDEZVOUSATDAWN");
    /// ```
    pub fn with_fourth_rotor(
        reflector: Reflector,
        plugboard: Plugboard,
        rotors: [Rotor; 3],
        fourth: Rotor,
        positions: &[Setting],
    ) -> Result<Self, EnigmaError> {
        let mut stack = Vec::from(rotors);
        stack.push(fourth);
        Self::build(reflector, plugboard, stack, positions)
    }

    /// Internal constructor shared by [`new`](Self::new) and
    /// [`with_fourth_rotor`](Self::with_fourth_rotor).
    fn build(
        reflector: Reflector,
        plugboard: Plugboard,
        rotors: Vec<Rotor>,
        positions: &[Setting],
    ) -> Result<Self, EnigmaError> {
        let start_positions = Self::normalize_positions(positions, rotors.len())?;
        let positions = start_positions.clone();
        Ok(Enigma {
            reflector,
            plugboard,
            rotors,
            start_positions,
            positions,
        })
    }

    /// Normalizes a position vector, checking it matches the rotor count.
    fn normalize_positions(
        positions: &[Setting],
        expected: usize,
    ) -> Result<Vec<u8>, EnigmaError> {
        if positions.len() != expected {
            return Err(EnigmaError::PositionCountMismatch {
                expected,
                actual: positions.len(),
            });
        }
        positions.iter().map(|setting| setting.normalize()).collect()
    }

    /// Runs one stepping transition.
    ///
    /// Rotor 0 always advances. The scan then walks the stack in order,
    /// re-reading each position as updated within this same pass: a rotor
    /// standing on one of its notches advances its neighbor, so an
    /// advance can cascade across several rotors in a single transition.
    /// The last rotor never advances anything.
    fn step(&mut self) {
        self.positions[0] = (self.positions[0] + 1) % ALPHABET_LEN;
        for i in 0..self.rotors.len() - 1 {
            if self.rotors[i].has_notch_at(self.positions[i]) {
                self.positions[i + 1] = (self.positions[i + 1] + 1) % ALPHABET_LEN;
            }
        }
    }

    /// Pushes one letter through the signal path, stepping first.
    ///
    /// The only side effect is the one-step advance of the position
    /// vector.
    fn process_letter(&mut self, letter: Letter) -> Letter {
        self.step();
        let mut letter = self.plugboard.substitute(letter);
        for (rotor, &position) in self.rotors.iter().zip(self.positions.iter()) {
            letter = rotor.forward(letter, position);
        }
        letter = self.reflector.substitute(letter);
        for (rotor, &position) in self.rotors.iter().zip(self.positions.iter()).rev() {
            letter = rotor.inverse(letter, position);
        }
        self.plugboard.substitute(letter)
    }

    /// Processes a single symbol, resembling one key press.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownSymbol`] for input outside A–Z/a–z.
    pub fn process(&mut self, symbol: char) -> Result<char, EnigmaError> {
        let letter = Letter::from_char(symbol)?;
        Ok(self.process_letter(letter).to_char())
    }

    /// Encrypts a text: uppercases it, drops spaces, pushes every symbol
    /// through the machine and groups the output in blocks of 5.
    ///
    /// Encryption does not reset the machine; it consumes whatever
    /// position state the machine currently holds.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownSymbol`] for any symbol that is
    /// neither a letter nor a space.
    pub fn encrypt(&mut self, text: &str) -> Result<String, EnigmaError> {
        let stream = self.transform(text)?;
        Ok(Self::group_output(&stream))
    }

    /// Decrypts a text: resets to the start positions, then runs the same
    /// transform as [`encrypt`](Self::encrypt) and returns the output
    /// ungrouped.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownSymbol`] for any symbol that is
    /// neither a letter nor a space.
    pub fn decrypt(&mut self, text: &str) -> Result<String, EnigmaError> {
        self.reset();
        self.transform(text)
    }

    /// The shared encrypt/decrypt pipeline: normalize, process, concat.
    fn transform(&mut self, text: &str) -> Result<String, EnigmaError> {
        let mut output = String::with_capacity(text.len());
        for symbol in text.chars() {
            if symbol == ' ' {
                continue;
            }
            let letter = Letter::from_char(symbol)?;
            output.push(self.process_letter(letter).to_char());
        }
        Ok(output)
    }

    /// Reformats a symbol stream into groups of 5 separated by spaces.
    fn group_output(stream: &str) -> String {
        let mut grouped = String::with_capacity(stream.len() + stream.len() / GROUP_LEN);
        for (i, symbol) in stream.chars().enumerate() {
            if i != 0 && i % GROUP_LEN == 0 {
                grouped.push(' ');
            }
            grouped.push(symbol);
        }
        grouped
    }

    /// Restores the current positions to the start positions. Nothing
    /// else changes.
    pub fn reset(&mut self) {
        self.positions.copy_from_slice(&self.start_positions);
    }

    /// Stores a new start position vector and resets to it.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PositionCountMismatch`] for a wrong-length
    /// vector, or a setting error when one element fails to normalize.
    /// The machine is untouched on error.
    pub fn set_position(&mut self, positions: &[Setting]) -> Result<(), EnigmaError> {
        self.start_positions = Self::normalize_positions(positions, self.rotors.len())?;
        self.reset();
        Ok(())
    }

    /// Replaces the plugboard with one freshly built from `pairs` and
    /// resets the rotor positions.
    ///
    /// # Errors
    /// The construction errors of [`Plugboard::new`]. The machine is
    /// untouched on error.
    pub fn replug(&mut self, pairs: &[(char, char)]) -> Result<(), EnigmaError> {
        let plugboard = Plugboard::new(pairs)?;
        self.reset();
        self.plugboard = plugboard;
        Ok(())
    }

    /// The current rotor positions as letters, fastest rotor first.
    pub fn positions(&self) -> Vec<char> {
        self.positions
            .iter()
            .map(|&position| Letter::from_index(position).to_char())
            .collect()
    }

    /// Number of rotors in the stack (3 or 4).
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }
}

impl fmt::Display for Enigma {
    /// Human-readable dump of the full configuration: reflector table,
    /// plugboard table, each rotor's table, notches and current position.
    /// Meant for diagnostics, not machine parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enigma:\n\nReflector:\n{}\n\nPlugboard:\n{}",
            self.reflector, self.plugboard
        )?;
        for (i, rotor) in self.rotors.iter().enumerate() {
            let position = self.positions[i];
            write!(
                f,
                "\n\nRotor {}:\n{}\nPosition: {} ({})",
                i,
                rotor,
                position + 1,
                Letter::from_index(position).to_char()
            )?;
        }
        Ok(())
    }
}
