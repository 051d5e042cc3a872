use thiserror::Error;

/// Validation failures raised while parsing or applying a cipher command.
///
/// All variants are recoverable: the engine is left exactly as it was before
/// the failing call, and the session is expected to report the message and
/// keep going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("No command provided")]
    EmptyCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: Not enough args!")]
    NotEnoughArgs { command: &'static str },

    #[error("Substitute: Not the same length for substitution ({from} vs {to})")]
    LengthMismatch { from: usize, to: usize },

    #[error("Substitute: Bad substitution {from} -> {to}")]
    BadSubstitution { from: char, to: char },

    #[error("Revert: Nothing valid to revert ({0:?} is not a cipher letter)")]
    NothingToRevert(char),

    #[error("Export: Unknown format {0:?} (expected \"json\")")]
    UnknownExportFormat(String),
}
