//! Catalog of historical component wirings.
//!
//! The rotor and reflector definitions of the service machines, ready to
//! assemble into an [`Enigma`](crate::Enigma). The wiring constants are
//! known-valid, so the constructors here cannot fail.

use crate::alphabet::Setting;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

fn rotor(alphabet: &str, notches: &[char]) -> Rotor {
    let notches: Vec<Setting> = notches.iter().copied().map(Setting::Letter).collect();
    Rotor::new(alphabet, &notches).expect("catalog rotor wiring is valid")
}

fn reflector(alphabet: &str) -> Reflector {
    Reflector::from_alphabet(alphabet).expect("catalog reflector wiring is an involution")
}

/// Rotor I, notch at Q.
pub fn rotor_i() -> Rotor {
    rotor("EKMFLGDQVZNTOWYHXUSPAIBRCJ", &['Q'])
}

/// Rotor II, notch at E.
pub fn rotor_ii() -> Rotor {
    rotor("AJDKSIRUXBLHWTMCQGZNPYFVOE", &['E'])
}

/// Rotor III, notch at V.
pub fn rotor_iii() -> Rotor {
    rotor("BDFHJLCPRTXVZNYEIWGAKMUSQO", &['V'])
}

/// Rotor IV, notch at J.
pub fn rotor_iv() -> Rotor {
    rotor("ESOVPZJAYQUIRHXLNFTGKDCMWB", &['J'])
}

/// Rotor V, notch at V.
pub fn rotor_v() -> Rotor {
    rotor("VZBRGITYUPSDNHLXAWMJQOFECK", &['V'])
}

/// Rotor VI, notches at Z and M.
pub fn rotor_vi() -> Rotor {
    rotor("JPGVOUMFYQBENHZRDKASXLICTW", &['Z', 'M'])
}

/// Rotor VII, notches at Z and M.
pub fn rotor_vii() -> Rotor {
    rotor("NZJHGRCXMYSWBOUFAIVLPEKQDT", &['Z', 'M'])
}

/// Rotor VIII, notches at M and Z.
pub fn rotor_viii() -> Rotor {
    rotor("FKQHTLXOCBJSPDZRAMEWNIUYGV", &['M', 'Z'])
}

/// Reflector UKW-A.
pub fn ukw_a() -> Reflector {
    reflector("EJMZALYXVBWFCRQUONTSPIKHGD")
}

/// Reflector UKW-B.
pub fn ukw_b() -> Reflector {
    reflector("YRUHQSLDPXNGOKMIEBFZCWVJAT")
}

/// Reflector UKW-C.
pub fn ukw_c() -> Reflector {
    reflector("FVPJIAOYEDRZXWGCTKUQSBNMHL")
}

/// Builds every catalog rotor. Handy for sweeping tests and benches.
pub fn all_rotors() -> Vec<Rotor> {
    vec![
        rotor_i(),
        rotor_ii(),
        rotor_iii(),
        rotor_iv(),
        rotor_v(),
        rotor_vi(),
        rotor_vii(),
        rotor_viii(),
    ]
}

/// Builds every catalog reflector.
pub fn all_reflectors() -> Vec<Reflector> {
    vec![ukw_a(), ukw_b(), ukw_c()]
}
