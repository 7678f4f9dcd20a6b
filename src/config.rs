//! Engine configuration.
//!
//! A [`Config`] is validated once at construction and is read-only afterwards, so a
//! single instance can back any number of concurrent `reverse` calls.

use serde::Deserialize;

use crate::charset::{all_characters, SANE_WHITESPACE, WHITESPACE};
use crate::RegrevError;

/// Default upper bound for `*`, `+` and `{n,}`.
pub const DEFAULT_MAX_REPEATS: usize = 64;

/// Validated engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    max_repeats: usize,
    all_characters: Vec<u8>,
    whitespace: Vec<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_repeats: DEFAULT_MAX_REPEATS,
            all_characters: all_characters(),
            whitespace: WHITESPACE.to_vec(),
        }
    }
}

impl Config {
    /// Build a configuration, rejecting a zero repeat bound, an empty alphabet or a
    /// non-ASCII byte in either set.
    pub fn new(
        max_repeats: usize,
        all_characters: impl Into<Vec<u8>>,
        whitespace: impl Into<Vec<u8>>,
    ) -> Result<Self, RegrevError> {
        ConfigBuilder::default()
            .max_repeats(max_repeats)
            .all_characters(all_characters)
            .whitespace(whitespace)
            .build()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML document such as:
    ///
    /// ```toml
    /// max_repeats = 5
    /// all_characters = "abc123"
    /// whitespace_preset = "sane"
    /// ```
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, RegrevError> {
        let file: ConfigFile = toml::from_str(source)
            .map_err(|e| RegrevError::Config(format!("malformed config: {}", e.message())))?;
        file.into_builder()?.build()
    }

    /// Upper bound used by unbounded quantifiers.
    pub fn max_repeats(&self) -> usize {
        self.max_repeats
    }

    /// The alphabet for `.` and for negated character classes.
    pub fn all_characters(&self) -> &[u8] {
        &self.all_characters
    }

    /// The set drawn from by `\s`.
    pub fn whitespace(&self) -> &[u8] {
        &self.whitespace
    }
}

/// Step-by-step construction of a [`Config`]; validation happens in [`ConfigBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    max_repeats: Option<usize>,
    all_characters: Option<Vec<u8>>,
    whitespace: Option<Vec<u8>>,
}

impl ConfigBuilder {
    pub fn max_repeats(mut self, n: usize) -> Self {
        self.max_repeats = Some(n);
        self
    }

    pub fn all_characters(mut self, set: impl Into<Vec<u8>>) -> Self {
        self.all_characters = Some(set.into());
        self
    }

    pub fn whitespace(mut self, set: impl Into<Vec<u8>>) -> Self {
        self.whitespace = Some(set.into());
        self
    }

    /// Restrict whitespace to space, tab and newline.
    pub fn sane_whitespace(self) -> Self {
        self.whitespace(SANE_WHITESPACE)
    }

    pub fn build(self) -> Result<Config, RegrevError> {
        let defaults = Config::default();

        let max_repeats = self.max_repeats.unwrap_or(defaults.max_repeats);
        if max_repeats == 0 {
            return Err(RegrevError::Config(
                "max_repeats must allow at least one repeat".into(),
            ));
        }

        let all_characters = self.all_characters.unwrap_or(defaults.all_characters);
        if all_characters.is_empty() {
            return Err(RegrevError::Config(
                "all_characters must not be empty".into(),
            ));
        }

        Ok(Config {
            max_repeats,
            all_characters: ascii_set("all_characters", all_characters)?,
            whitespace: ascii_set("whitespace", self.whitespace.unwrap_or(defaults.whitespace))?,
        })
    }
}

/// Each byte of a set stands for one character, which only holds for ASCII.
fn ascii_set(name: &str, set: Vec<u8>) -> Result<Vec<u8>, RegrevError> {
    if let Some(b) = set.iter().find(|b| !b.is_ascii()) {
        return Err(RegrevError::Config(format!(
            "{} must be ASCII, found byte 0x{:02x}",
            name, b
        )));
    }
    Ok(dedup(set))
}

/// Drop repeated bytes so draws stay uniform over the set, keeping first-seen order.
fn dedup(set: Vec<u8>) -> Vec<u8> {
    let mut seen = [false; 256];
    set.into_iter()
        .filter(|&b| !std::mem::replace(&mut seen[b as usize], true))
        .collect()
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum WhitespacePreset {
    Full,
    Sane,
}

/// On-disk shape of a configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    max_repeats: Option<i64>,
    all_characters: Option<String>,
    whitespace: Option<String>,
    whitespace_preset: Option<WhitespacePreset>,
}

impl ConfigFile {
    fn into_builder(self) -> Result<ConfigBuilder, RegrevError> {
        let mut builder = ConfigBuilder::default();

        if let Some(n) = self.max_repeats {
            let n = usize::try_from(n).map_err(|_| {
                RegrevError::Config(format!("max_repeats must be positive, got {}", n))
            })?;
            builder = builder.max_repeats(n);
        }
        if let Some(chars) = self.all_characters {
            builder = builder.all_characters(chars.into_bytes());
        }

        match (self.whitespace, self.whitespace_preset) {
            (Some(_), Some(_)) => {
                return Err(RegrevError::Config(
                    "whitespace and whitespace_preset are mutually exclusive".into(),
                ))
            }
            (Some(ws), None) => builder = builder.whitespace(ws.into_bytes()),
            (None, Some(WhitespacePreset::Sane)) => builder = builder.sane_whitespace(),
            (None, Some(WhitespacePreset::Full)) => builder = builder.whitespace(WHITESPACE),
            (None, None) => {}
        }

        Ok(builder)
    }
}
