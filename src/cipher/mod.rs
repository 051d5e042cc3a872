// Substitution cipher state for interactive cryptogram solving
//
// The engine holds a total mapping over the 26 uppercase Latin letters. Every
// edit is validated as a whole batch before any key is written, so a rejected
// command never leaves the table half-updated.
//
// Bijectivity is not enforced: a solver commonly tries a hypothesis (two
// ciphertext letters pointing at the same plaintext letter) before settling it.

mod command;
mod engine;
mod error;

pub use command::{Command, ExportFormat};
pub use engine::{alphabet, CipherEngine, CipherPair, ALPHABET_LEN};
pub use error::CipherError;
