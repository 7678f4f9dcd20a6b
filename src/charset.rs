//! Character-set catalog.
//!
//! Constant byte sets used as the default alphabet for `.` and negated classes,
//! and as the sources for `\d` and `\s`. Callers get shared slices and never
//! mutate them.

/// `A` through `Z`.
pub const ALPHA_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `a` through `z`.
pub const ALPHA_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// `0` through `9`.
pub const DIGITS: &[u8] = b"0123456789";

/// Space, tab, CR, LF, form feed and vertical tab.
pub const WHITESPACE: &[u8] = b" \t\r\n\x0c\x0b";

/// Whitespace without carriage returns, form feeds or vertical tabs.
pub const SANE_WHITESPACE: &[u8] = b" \t\n";

/// Upper and lower case letters followed by digits.
pub fn all_characters() -> Vec<u8> {
    let mut result = Vec::with_capacity(ALPHA_UPPER.len() + ALPHA_LOWER.len() + DIGITS.len());
    result.extend_from_slice(ALPHA_UPPER);
    result.extend_from_slice(ALPHA_LOWER);
    result.extend_from_slice(DIGITS);
    result
}

/// Look up a POSIX bracket class name (`alpha` in `[[:alpha:]]`).
pub(crate) fn posix_class(name: &str) -> Option<Vec<u8>> {
    let set = match name {
        "alpha" => [ALPHA_UPPER, ALPHA_LOWER].concat(),
        "alnum" => all_characters(),
        "digit" => DIGITS.to_vec(),
        "upper" => ALPHA_UPPER.to_vec(),
        "lower" => ALPHA_LOWER.to_vec(),
        "space" => WHITESPACE.to_vec(),
        _ => return None,
    };
    Some(set)
}
