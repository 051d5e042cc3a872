//! Cryptogram - interactive substitution-cipher workbench
//!
//! This library provides the pieces behind the `cryptogram` binary: a
//! validated, revertible letter-substitution table for solving cryptograms by
//! hand, and letter N-gram log-probability estimation over a reference corpus.

pub mod cipher;
pub mod cli;
pub mod config;
pub mod ngram;
pub mod render;
pub mod repl;
