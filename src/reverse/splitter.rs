//! Splits compound text into quantified components.
//!
//! The scan is left to right with an escape flag. Characters outside the reserved set
//! are literals; `[` and `(` consume up to their matching delimiter, tracking nesting;
//! the remaining reserved characters become specials. Every component is followed by
//! an optional quantifier token, which the scan consumes so it is never re-read as a
//! literal; a second token directly after it repeats the quantified piece.

use log::trace;

use crate::config::Config;
use crate::RegrevError;

use super::class::{find_class_end, CharacterClass};
use super::component::{Component, Compound, Piece, Special};
use super::quantifier::{brace_token_end, Quantifier};

/// Characters with syntactic meaning outside a class.
const RESERVED: &[char] = &['[', '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')'];

pub(crate) fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// The literal an escape sequence stands for, if it is one.
///
/// Reserved characters and other ASCII punctuation escape to themselves (except `<`
/// and `>`, which are word-boundary assertions); `\n`, `\t`, `\r`, `\f`, `\v` are
/// control characters.
pub(crate) fn escaped_literal(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'f' => Some('\x0c'),
        'v' => Some('\x0b'),
        '<' | '>' => None,
        c if is_reserved(c) || c.is_ascii_punctuation() || c == ' ' => Some(c),
        _ => None,
    }
}

/// Split `pattern` into its top-level compound.
pub(crate) fn split(pattern: &str, config: &Config) -> Result<Compound, RegrevError> {
    let chars: Vec<char> = pattern.chars().collect();
    Splitter::new(&chars, 0, config).split()
}

/// Scanner state over one compound's characters.
struct Splitter<'a> {
    chars: &'a [char],
    index: usize,
    /// Character offset of `chars[0]` within the whole pattern.
    offset: usize,
    config: &'a Config,
}

impl<'a> Splitter<'a> {
    fn new(chars: &'a [char], offset: usize, config: &'a Config) -> Self {
        Self {
            chars,
            index: 0,
            offset,
            config,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn split(mut self) -> Result<Compound, RegrevError> {
        let mut pieces = Vec::new();

        while let Some(c) = self.next_char() {
            let start = self.index - 1;
            let component = match c {
                '\\' => self.read_escape(start)?,
                '[' => self.read_class(start)?,
                '(' => self.read_group(start)?,
                c if !is_reserved(c) => Component::Literal(c.to_string()),
                c => {
                    let (special, selection) =
                        Special::from_code(&c.to_string(), self.offset + start, self.config)?;
                    Component::Special(special, selection)
                }
            };
            let quantifier = self.read_quantifier()?.unwrap_or_default();
            trace!("split {} with quantifier '{}'", component.kind(), quantifier);
            let mut piece = Piece {
                component,
                quantifier,
            };
            // `a{2}{3}` repeats the already quantified piece: (a{2}){3}
            while let Some(outer) = self.read_quantifier()? {
                piece = Piece {
                    component: Component::Group(Compound::new(vec![piece])),
                    quantifier: outer,
                };
            }
            pieces.push(piece);
        }

        Ok(Compound::new(pieces))
    }

    fn read_escape(&mut self, start: usize) -> Result<Component, RegrevError> {
        let next = self.next_char().ok_or_else(|| RegrevError::Structural {
            message: "'\\' at end of pattern".into(),
            offset: self.offset + start,
        })?;

        if let Some(lit) = escaped_literal(next) {
            return Ok(Component::Literal(lit.to_string()));
        }
        let (special, selection) =
            Special::from_code(&format!("\\{}", next), self.offset + start, self.config)?;
        Ok(Component::Special(special, selection))
    }

    fn read_class(&mut self, start: usize) -> Result<Component, RegrevError> {
        let close = find_class_end(self.chars, start).ok_or_else(|| RegrevError::Structural {
            message: "unclosed character class".into(),
            offset: self.offset + start,
        })?;
        let body = &self.chars[start + 1..close];
        let class = CharacterClass::parse(body, self.offset + start + 1, self.config)?;
        self.index = close + 1;
        Ok(Component::CharacterClass(class))
    }

    fn read_group(&mut self, start: usize) -> Result<Component, RegrevError> {
        let close = find_group_end(self.chars, start).ok_or_else(|| RegrevError::Structural {
            message: "unclosed '('".into(),
            offset: self.offset + start,
        })?;
        let body = &self.chars[start + 1..close];
        let skip = group_prefix_len(body).ok_or_else(|| RegrevError::UnsupportedFeature {
            feature: format!("({}", body.iter().take(3).collect::<String>()),
            offset: self.offset + start,
        })?;
        let inner =
            Splitter::new(&body[skip..], self.offset + start + 1 + skip, self.config).split()?;
        self.index = close + 1;
        Ok(Component::Group(inner))
    }

    /// Consume the quantifier token after a component, if any, plus a lazy `?` suffix.
    fn read_quantifier(&mut self) -> Result<Option<Quantifier>, RegrevError> {
        let start = self.index;
        let end = match self.peek() {
            Some('?' | '*' | '+') => start + 1,
            Some('{') => match brace_token_end(self.chars, start) {
                Some(close) => close + 1,
                None => return Ok(None),
            },
            _ => return Ok(None),
        };

        let token: String = self.chars[start..end].iter().collect();
        let quantifier = Quantifier::parse_at(&token, self.offset + start)?;
        self.index = end;

        // laziness does not change what matches
        if self.peek() == Some('?') {
            self.index += 1;
        }
        Ok(Some(quantifier))
    }
}

/// Find the `)` closing the group opened at `open`, tracking nesting depth. Escaped
/// parentheses and anything inside a character class are ignored.
pub(crate) fn find_group_end(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' => i = find_class_end(chars, i)?,
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    None
}

/// Length of a `?:`, `?P<name>` or `?<name>` prefix at the start of a group body.
/// Returns `None` for other `(?` extensions (flags, lookaround).
fn group_prefix_len(body: &[char]) -> Option<usize> {
    let name_end = |from: usize| -> Option<usize> {
        let len = body[from..].iter().position(|&c| c == '>')?;
        let name = &body[from..from + len];
        let valid = !name.is_empty() && name.iter().all(|&c| c.is_alphanumeric() || c == '_');
        valid.then_some(from + len + 1)
    };

    match body {
        ['?', ':', ..] => Some(2),
        ['?', 'P', '<', ..] => name_end(3),
        ['?', '<', '=' | '!', ..] => None,
        ['?', '<', ..] => name_end(2),
        ['?', ..] => None,
        _ => Some(0),
    }
}
