//! The component tree and its solving.
//!
//! A [`Compound`] is an ordered list of [`Piece`]s; each piece is a [`Component`]
//! with its [`Quantifier`]. Solving resolves the quantifier to a repeat count and
//! materializes the component that many times, recursing into groups.

use log::trace;

use crate::charset::DIGITS;
use crate::config::Config;
use crate::entropy::Entropy;
use crate::RegrevError;

use super::class::{CharacterClass, Selection};
use super::quantifier::Quantifier;

/// Built-in generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    /// `.`: any character of the configured alphabet
    AnyCharacter,
    /// `\d`
    Digit,
    /// `\s`: any character of the configured whitespace set
    Whitespace,
}

impl Special {
    /// Resolve a special code (`.`, `\d`, `\s`) against `config`.
    pub(crate) fn from_code(
        code: &str,
        offset: usize,
        config: &Config,
    ) -> Result<(Special, Selection), RegrevError> {
        let (special, set) = match code {
            "." => (Special::AnyCharacter, config.all_characters()),
            "\\d" => (Special::Digit, DIGITS),
            "\\s" => (Special::Whitespace, config.whitespace()),
            _ => {
                return Err(RegrevError::UnsupportedFeature {
                    feature: code.to_string(),
                    offset,
                })
            }
        };

        let selection = Selection::from_bytes(set);
        if selection.is_empty() {
            return Err(RegrevError::EmptySelection {
                class: code.to_string(),
                offset,
            });
        }
        Ok((special, selection))
    }
}

/// One syntactic unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// Text emitted verbatim, already un-escaped.
    Literal(String),
    /// A built-in generator with the set it draws from.
    Special(Special, Selection),
    CharacterClass(CharacterClass),
    Group(Compound),
}

impl Component {
    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Literal(_) => "literal",
            Component::Special(..) => "special",
            Component::CharacterClass(_) => "class",
            Component::Group(_) => "group",
        }
    }
}

/// A component paired with its quantifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub component: Component,
    pub quantifier: Quantifier,
}

impl Piece {
    fn solve_into(&self, config: &Config, entropy: &mut dyn Entropy, out: &mut String) {
        let repeats = self.quantifier.resolve(config.max_repeats(), entropy);
        trace!("solving {} x{}", self.component.kind(), repeats);

        match &self.component {
            Component::Literal(text) => {
                for _ in 0..repeats {
                    out.push_str(text);
                }
            }
            Component::Special(_, selection) => {
                for _ in 0..repeats {
                    out.push(selection.draw(entropy));
                }
            }
            Component::CharacterClass(class) => {
                for _ in 0..repeats {
                    out.push(class.selection().draw(entropy));
                }
            }
            Component::Group(compound) => {
                for _ in 0..repeats {
                    compound.solve_into(config, entropy, out);
                }
            }
        }
    }
}

/// An ordered sequence of pieces parsed from one span of pattern text.
///
/// Parsing validates everything up front (quantifiers, escapes, class selections),
/// so solving cannot fail and the same compound can be solved repeatedly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pieces: Vec<Piece>,
}

impl Compound {
    pub(crate) fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Generate one string. `config` should be the configuration the compound was
    /// parsed with; it supplies the repeat bound for unbounded quantifiers.
    pub fn solve(&self, config: &Config, entropy: &mut dyn Entropy) -> String {
        let mut out = String::new();
        self.solve_into(config, entropy, &mut out);
        out
    }

    fn solve_into(&self, config: &Config, entropy: &mut dyn Entropy, out: &mut String) {
        for piece in &self.pieces {
            piece.solve_into(config, entropy, out);
        }
    }
}
