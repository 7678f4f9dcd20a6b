//! Quantifier parsing and resolution.

use std::fmt;

use crate::entropy::Entropy;
use crate::RegrevError;

/// How many times a component repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantifier {
    /// No quantifier: exactly once.
    #[default]
    None,
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `{n}`
    Exact(usize),
    /// `{n,m}`, both bounds inclusive.
    Range(usize, usize),
    /// `{n,}`
    AtLeast(usize),
}

impl Quantifier {
    /// Parse a quantifier token: empty, `?`, `*`, `+`, `{n}`, `{n,m}` or `{n,}`.
    pub fn parse(token: &str) -> Result<Self, RegrevError> {
        Self::parse_at(token, 0)
    }

    pub(crate) fn parse_at(token: &str, offset: usize) -> Result<Self, RegrevError> {
        let error = |reason: &str| RegrevError::ModifierSyntax {
            modifier: token.to_string(),
            reason: reason.to_string(),
            offset,
        };

        match token {
            "" => return Ok(Quantifier::None),
            "?" => return Ok(Quantifier::Optional),
            "*" => return Ok(Quantifier::ZeroOrMore),
            "+" => return Ok(Quantifier::OneOrMore),
            _ => {}
        }

        let inner = token
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .ok_or_else(|| error("unsupported modifier"))?;

        let bound = |field: &str| -> Result<usize, RegrevError> {
            let field = field.trim();
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(error("expecting a non-negative integer"));
            }
            field.parse().map_err(|_| error("repeat count overflow"))
        };

        let fields: Vec<&str> = inner.split(',').collect();
        match fields[..] {
            [n] => Ok(Quantifier::Exact(bound(n)?)),
            [lo, hi] if hi.trim().is_empty() => Ok(Quantifier::AtLeast(bound(lo)?)),
            [lo, hi] => {
                let (lo, hi) = (bound(lo)?, bound(hi)?);
                if lo > hi {
                    return Err(error("lower bound exceeds upper bound"));
                }
                Ok(Quantifier::Range(lo, hi))
            }
            _ => Err(error("too many fields")),
        }
    }

    /// Inclusive repeat bounds, with `max_repeats` standing in for "unbounded".
    pub fn bounds(&self, max_repeats: usize) -> (usize, usize) {
        match *self {
            Quantifier::None => (1, 1),
            Quantifier::Optional => (0, 1),
            Quantifier::ZeroOrMore => (0, max_repeats),
            Quantifier::OneOrMore => (1, max_repeats.max(1)),
            Quantifier::Exact(n) => (n, n),
            Quantifier::Range(lo, hi) => (lo, hi),
            Quantifier::AtLeast(n) => (n, max_repeats.max(n)),
        }
    }

    /// Pick a concrete repeat count. Fixed counts do not consume entropy.
    pub fn resolve(&self, max_repeats: usize, entropy: &mut dyn Entropy) -> usize {
        let (lo, hi) = self.bounds(max_repeats);
        if lo == hi {
            lo
        } else {
            entropy.draw(lo, hi)
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::None => Ok(()),
            Quantifier::Optional => write!(f, "?"),
            Quantifier::ZeroOrMore => write!(f, "*"),
            Quantifier::OneOrMore => write!(f, "+"),
            Quantifier::Exact(n) => write!(f, "{{{}}}", n),
            Quantifier::Range(lo, hi) => write!(f, "{{{},{}}}", lo, hi),
            Quantifier::AtLeast(n) => write!(f, "{{{},}}", n),
        }
    }
}

/// Find the end of a brace token starting at `open`. A `{` before the closing `}`
/// means the brace is not a quantifier.
pub(crate) fn brace_token_end(chars: &[char], open: usize) -> Option<usize> {
    for (i, &c) in chars.iter().enumerate().skip(open + 1) {
        match c {
            '}' => return Some(i),
            '{' => return None,
            _ => {}
        }
    }
    None
}
