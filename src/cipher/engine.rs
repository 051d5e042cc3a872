use super::error::CipherError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Number of letters in the cipher alphabet
pub const ALPHABET_LEN: usize = 26;

/// The cipher alphabet in canonical order (A-Z)
pub fn alphabet() -> impl Iterator<Item = char> {
    (b'A'..=b'Z').map(char::from)
}

/// Position of `c` in the alphabet, or `None` for anything that is not `A`-`Z`
fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize)
}

/// One row of an exported cipher: ciphertext letter and the letter it currently maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CipherPair {
    pub source: char,
    pub target: char,
}

impl CipherPair {
    /// True when the pair differs from the identity mapping
    pub fn is_changed(&self) -> bool {
        self.source != self.target
    }
}

/// Letter-substitution table for a single solving session
///
/// The domain is always the full alphabet and every stored value is itself an
/// alphabet letter. A fresh engine maps every letter to itself.
///
/// # Example
/// ```
/// use cryptogram::cipher::CipherEngine;
///
/// let mut engine = CipherEngine::new();
/// engine.substitute("XQ", "TH").unwrap();
/// assert_eq!(engine.apply_cipher("XQE, X!"), "THE, T!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherEngine {
    /// mapping[i] is the target byte for letter `b'A' + i`
    mapping: [u8; ALPHABET_LEN],
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherEngine {
    /// Create an engine with the identity mapping
    pub fn new() -> Self {
        Self {
            mapping: std::array::from_fn(|i| b'A' + i as u8),
        }
    }

    /// Current target for `letter`, or `None` if `letter` is outside the alphabet
    pub fn get(&self, letter: char) -> Option<char> {
        letter_index(letter).map(|i| char::from(self.mapping[i]))
    }

    /// Map each letter of `from` onto the letter at the same position in `to`
    ///
    /// The whole batch is validated before anything is written. Pairs are then
    /// applied left to right, so a repeated source letter ends up with the
    /// last target given for it.
    ///
    /// # Errors
    /// * `NotEnoughArgs` if either side is empty
    /// * `LengthMismatch` if the two sides differ in length
    /// * `BadSubstitution` if any character on either side is not `A`-`Z`
    pub fn substitute(&mut self, from: &str, to: &str) -> Result<(), CipherError> {
        if from.is_empty() || to.is_empty() {
            return Err(CipherError::NotEnoughArgs {
                command: "Substitute",
            });
        }

        let from_len = from.chars().count();
        let to_len = to.chars().count();
        if from_len != to_len {
            return Err(CipherError::LengthMismatch {
                from: from_len,
                to: to_len,
            });
        }

        let pairs = from
            .chars()
            .zip(to.chars())
            .map(|(f, t)| match (letter_index(f), letter_index(t)) {
                (Some(index), Some(_)) => Ok((index, t as u8)),
                _ => Err(CipherError::BadSubstitution { from: f, to: t }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (index, target) in pairs {
            self.mapping[index] = target;
        }

        debug!(from, to, "applied substitution");
        Ok(())
    }

    /// Restore the identity mapping for every letter in `letters`
    ///
    /// # Errors
    /// `NothingToRevert` naming the first character that is not `A`-`Z`; in
    /// that case no letter is reverted.
    pub fn revert(&mut self, letters: &str) -> Result<(), CipherError> {
        let indices = letters
            .chars()
            .map(|c| letter_index(c).ok_or(CipherError::NothingToRevert(c)))
            .collect::<Result<Vec<_>, _>>()?;

        for index in indices {
            self.mapping[index] = b'A' + index as u8;
        }

        debug!(letters, "reverted letters");
        Ok(())
    }

    /// Replace every alphabet letter in `text` with its mapped value
    ///
    /// Anything outside `A`-`Z` (lowercase, digits, punctuation, whitespace)
    /// passes through unchanged.
    pub fn apply_cipher(&self, text: &str) -> String {
        text.chars()
            .map(|c| match letter_index(c) {
                Some(index) => char::from(self.mapping[index]),
                None => c,
            })
            .collect()
    }

    /// Snapshot of all 26 pairs in A-Z order
    pub fn export(&self) -> Vec<CipherPair> {
        alphabet()
            .zip(self.mapping.iter())
            .map(|(source, &target)| CipherPair {
                source,
                target: char::from(target),
            })
            .collect()
    }

    /// True when no letter has been remapped
    pub fn is_identity(&self) -> bool {
        self.export().iter().all(|pair| !pair.is_changed())
    }

    /// Target letter -> every source letter currently mapped onto it
    pub fn inverse(&self) -> BTreeMap<char, Vec<char>> {
        let mut inverse: BTreeMap<char, Vec<char>> = BTreeMap::new();
        for pair in self.export() {
            inverse.entry(pair.target).or_default().push(pair.source);
        }
        inverse
    }

    /// Targets shared by more than one source letter
    ///
    /// Empty while the mapping is a bijection.
    pub fn collisions(&self) -> BTreeMap<char, Vec<char>> {
        self.inverse()
            .into_iter()
            .filter(|(_, sources)| sources.len() > 1)
            .collect()
    }
}
