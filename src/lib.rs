//! Enigma rotor cipher machine.
//!
//! Simulates an electromechanical rotor cipher machine over a fixed
//! alphabet of 26 symbols. Each symbol travels a reciprocal signal path
//! (plugboard → rotor stack → reflector → rotor stack reversed →
//! plugboard) whose rotor positions advance like an odometer before every
//! symbol, so the same machine decrypts its own output when started from
//! the same positions.
//!
//! # Architecture
//!
//! ```text
//! Wiring     (atomic unit — validated 26-letter substitution table)
//!     ↕ specialized
//! Reflector  (involutive wiring)   Plugboard (involution from swap pairs)
//! Rotor      (wiring + notches, substituted relative to an offset)
//!     ↕ stacked, 3–4 rotors
//! Enigma     (orchestrator — odometer stepping + reciprocal signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a sentence:
//!
//! ```
//! use enigma::{catalog, Enigma, Plugboard, Setting};
//!
//! let plugboard = Plugboard::new(&[('A', 'G'), ('T', 'F'), ('H', 'K')]).unwrap();
//! let mut machine = Enigma::new(
//!     catalog::ukw_b(),
//!     plugboard,
//!     [catalog::rotor_i(), catalog::rotor_ii(), catalog::rotor_iii()],
//!     &[Setting::Letter('D'), Setting::Letter('A'), Setting::Letter('Z')],
//! )
//! .unwrap();
//!
//! let ciphertext = machine.encrypt("This is a string").unwrap();
//! assert_eq!(machine.decrypt(&ciphertext).unwrap(), "THISISASTRING");
//! ```
//!
//! Rewire the plugboard and move the rotors at runtime:
//!
//! ```
//! use enigma::{catalog, Enigma, Plugboard, Setting};
//!
//! let mut machine = Enigma::new(
//!     catalog::ukw_b(),
//!     Plugboard::new(&[]).unwrap(),
//!     [catalog::rotor_i(), catalog::rotor_ii(), catalog::rotor_iii()],
//!     &[Setting::Numeral(1), Setting::Numeral(4), Setting::Numeral(22)],
//! )
//! .unwrap();
//!
//! machine.replug(&[('A', 'N'), ('H', 'P'), ('O', 'L'), ('R', 'M')]).unwrap();
//! let ciphertext = machine.encrypt("Attack at dawn").unwrap();
//! assert_eq!(machine.decrypt(&ciphertext).unwrap(), "ATTACKATDAWN");
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod error;

mod alphabet;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod wiring;

pub use alphabet::{Letter, Setting};
pub use machine::Enigma;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wiring::Wiring;
