//! regrev: generate strings that match a regular expression
//!
//! ```
//! use regrev::Reverser;
//!
//! let reverser = Reverser::default();
//! let s = reverser.reverse(r"\d{3}-[A-F]{2}").unwrap();
//! assert_eq!(s.len(), 6);
//! ```
//!
//! Randomness is always explicit. [`Reverser::reverse`] uses the thread-local
//! generator; [`Reverser::reverse_with`] takes any [`Entropy`], including a seeded
//! `rand` generator or a [`ScriptedEntropy`] for reproducible output.

mod charset;
mod config;
mod entropy;
mod reverse;

#[cfg(test)]
mod samples;

pub use charset::{all_characters, ALPHA_LOWER, ALPHA_UPPER, DIGITS, SANE_WHITESPACE, WHITESPACE};
pub use config::{Config, ConfigBuilder, DEFAULT_MAX_REPEATS};
pub use entropy::{Entropy, ScriptedEntropy, SharedEntropy};
pub use reverse::{
    simplify_rune_range, CharacterClass, ClassItem, Component, Compound, Piece, Quantifier,
    Reverser, RunePair, RuneRange, Selection, Special,
};

use thiserror::Error;

/// Errors that can occur while configuring or reversing.
///
/// Offsets count characters from the start of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegrevError {
    /// Invalid construction options.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A quantifier token that is not `?`, `*`, `+` or a well-formed brace expression.
    #[error("invalid modifier '{modifier}' at offset {offset}: {reason}")]
    ModifierSyntax {
        modifier: String,
        reason: String,
        offset: usize,
    },
    /// Syntax with no generation rule (anchors, alternation, unknown escapes).
    #[error("unsupported feature '{feature}' at offset {offset}")]
    UnsupportedFeature { feature: String, offset: usize },
    /// A class or special whose effective selection set is empty.
    #[error("'{class}' at offset {offset} has nothing to select from")]
    EmptySelection { class: String, offset: usize },
    /// Unbalanced delimiters or a dangling escape.
    #[error("{message} at offset {offset}")]
    Structural { message: String, offset: usize },
}
