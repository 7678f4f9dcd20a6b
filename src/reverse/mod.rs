//! Pattern reversal: produce a string that a regexp matches.
//!
//! The pattern text is split into a tree of components and each one is materialized
//! with random choices. Supported syntax:
//! - literal characters and escaped literals (`\.`, `\(`, `\{`, `\n`, ...)
//! - `.` any character of the configured alphabet
//! - `\d` digits, `\s` configured whitespace
//! - `[...]` character classes with ranges, `\d`/`\s`, nested classes and POSIX names
//! - `[^...]` negated classes, relative to the configured alphabet
//! - `(...)`, `(?:...)`, `(?P<name>...)` groups
//! - `?`, `*`, `+`, `{n}`, `{n,m}`, `{n,}` quantifiers, optionally lazy
//!
//! Anchors, alternation, lookaround and back-references are rejected with
//! [`RegrevError::UnsupportedFeature`].

mod class;
mod component;
mod quantifier;
mod splitter;

pub use class::{simplify_rune_range, CharacterClass, ClassItem, RunePair, RuneRange, Selection};
pub use component::{Component, Compound, Piece, Special};
pub use quantifier::Quantifier;

use log::debug;
use regex::Regex;

use crate::config::Config;
use crate::entropy::Entropy;
use crate::RegrevError;

/// Generates strings matching regexp patterns.
///
/// The configuration is fixed at construction, so a `Reverser` can be shared across
/// threads; each call brings its own randomness.
#[derive(Debug, Clone, Default)]
pub struct Reverser {
    config: Config,
}

impl Reverser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `pattern` into a component tree without generating anything.
    ///
    /// All errors a pattern can produce are reported here, so a compiled
    /// [`Compound`] can be solved any number of times.
    pub fn compile(&self, pattern: &str) -> Result<Compound, RegrevError> {
        splitter::split(pattern, &self.config).map_err(|err| {
            debug!("cannot reverse {:?}: {}", pattern, err);
            err
        })
    }

    /// Generate a string matching `pattern` using the thread-local generator.
    pub fn reverse(&self, pattern: &str) -> Result<String, RegrevError> {
        self.reverse_with(pattern, &mut rand::thread_rng())
    }

    /// Generate a string matching `pattern`, drawing from `entropy`.
    pub fn reverse_with<E: Entropy>(
        &self,
        pattern: &str,
        entropy: &mut E,
    ) -> Result<String, RegrevError> {
        let compound = self.compile(pattern)?;
        debug!(
            "reversing {:?}: {} top-level components",
            pattern,
            compound.len()
        );
        Ok(compound.solve(&self.config, entropy))
    }

    /// Generate a string matching an already compiled `regex::Regex`.
    pub fn reverse_regex(&self, re: &Regex) -> Result<String, RegrevError> {
        self.reverse(re.as_str())
    }
}
