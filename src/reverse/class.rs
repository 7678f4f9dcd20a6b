//! Bracket character classes and the selection sets characters are drawn from.

use smallvec::SmallVec;

use crate::charset::{posix_class, DIGITS};
use crate::config::Config;
use crate::entropy::Entropy;
use crate::RegrevError;

use super::splitter::escaped_literal;

/// A pair of runes representing an inclusive range [lo, hi].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunePair {
    pub lo: char,
    pub hi: char,
}

impl RunePair {
    fn width(&self) -> usize {
        (self.hi as u32 - self.lo as u32) as usize + 1
    }
}

/// A collection of rune pairs.
pub type RuneRange = Vec<RunePair>;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// Sort and merge overlapping or adjacent rune pairs.
///
/// A selection sizes itself from the merged pairs, so a character listed twice in a
/// class (`[aa-c]`) is still drawn with the same weight as every other member.
pub fn simplify_rune_range(mut rranges: RuneRange) -> RuneRange {
    rranges.sort_unstable_by_key(|rp| (rp.lo, rp.hi));

    let mut merged: RuneRange = Vec::with_capacity(rranges.len());
    for pair in rranges {
        match merged.last_mut() {
            Some(last) if pair.lo as u32 <= last.hi as u32 + 1 => last.hi = last.hi.max(pair.hi),
            _ => merged.push(pair),
        }
    }
    merged
}

/// A set of characters with uniform draws.
///
/// Ranges are kept merged and never straddle the surrogate block, so every index in
/// `0..len()` maps to exactly one valid `char`. Selections are only built by the
/// compiler, which rejects empty ones, so every selection a caller sees can be drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ranges: RuneRange,
    size: usize,
}

impl Selection {
    pub(crate) fn from_ranges(ranges: RuneRange) -> Self {
        let mut split = Vec::with_capacity(ranges.len());
        for pair in ranges {
            let (lo, hi) = (pair.lo as u32, pair.hi as u32);
            if lo < SURROGATE_START && hi > SURROGATE_END {
                // char ranges can only straddle the block, never start inside it
                split.push(RunePair {
                    lo: pair.lo,
                    hi: char::from_u32(SURROGATE_START - 1).unwrap_or(pair.lo),
                });
                split.push(RunePair {
                    lo: char::from_u32(SURROGATE_END + 1).unwrap_or(pair.hi),
                    hi: pair.hi,
                });
            } else {
                split.push(pair);
            }
        }
        let ranges = simplify_rune_range(split);
        let size = ranges.iter().map(RunePair::width).sum();
        Self { ranges, size }
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_ranges(
            bytes
                .iter()
                .map(|&b| {
                    let c = char::from(b);
                    RunePair { lo: c, hi: c }
                })
                .collect(),
        )
    }

    pub fn ranges(&self) -> &[RunePair] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|rp| rp.lo <= c && c <= rp.hi)
    }

    /// Draw one member uniformly. The selection must not be empty.
    pub(crate) fn draw(&self, entropy: &mut dyn Entropy) -> char {
        debug_assert!(!self.is_empty(), "draw from an empty selection");
        let mut index = entropy.draw(0, self.size - 1);
        for pair in &self.ranges {
            let width = pair.width();
            if index < width {
                return char::from_u32(pair.lo as u32 + index as u32).unwrap_or(pair.lo);
            }
            index -= width;
        }
        self.ranges[self.ranges.len() - 1].hi
    }
}

/// One member of a bracket class body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    Single(char),
    Range(char, char),
}

impl ClassItem {
    fn pair(&self) -> Option<RunePair> {
        match *self {
            ClassItem::Single(c) => Some(RunePair { lo: c, hi: c }),
            ClassItem::Range(lo, hi) if lo <= hi => Some(RunePair { lo, hi }),
            // a reversed range contributes nothing
            ClassItem::Range(..) => None,
        }
    }
}

impl From<RunePair> for ClassItem {
    fn from(rp: RunePair) -> Self {
        if rp.lo == rp.hi {
            ClassItem::Single(rp.lo)
        } else {
            ClassItem::Range(rp.lo, rp.hi)
        }
    }
}

/// A parsed `[...]` class with its effective selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    pub negated: bool,
    pub items: SmallVec<[ClassItem; 4]>,
    selection: Selection,
}

impl CharacterClass {
    /// Parse a class body (the text between the brackets). `offset` is the character
    /// offset of the body within the whole pattern.
    pub(crate) fn parse(body: &[char], offset: usize, config: &Config) -> Result<Self, RegrevError> {
        let (negated, rest, rest_offset) = match body.first() {
            Some('^') => (true, &body[1..], offset + 1),
            _ => (false, body, offset),
        };

        let items = read_items(rest, rest_offset, config)?;
        let members = Selection::from_ranges(items.iter().filter_map(ClassItem::pair).collect());

        let selection = if negated {
            let remaining: Vec<u8> = config
                .all_characters()
                .iter()
                .copied()
                .filter(|&b| !members.contains(char::from(b)))
                .collect();
            Selection::from_bytes(&remaining)
        } else {
            members
        };

        if selection.is_empty() {
            return Err(RegrevError::EmptySelection {
                class: format!("[{}]", body.iter().collect::<String>()),
                offset: offset.saturating_sub(1),
            });
        }

        Ok(Self {
            negated,
            items,
            selection,
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

enum Member {
    Char(char),
    Set(RuneRange),
}

fn read_items(
    chars: &[char],
    offset: usize,
    config: &Config,
) -> Result<SmallVec<[ClassItem; 4]>, RegrevError> {
    let mut items = SmallVec::new();
    let mut i = 0;

    while i < chars.len() {
        set_operation(chars, i, offset)?;
        let (member, next) = read_member(chars, i, offset, config)?;
        let lo = match member {
            Member::Char(c) => c,
            Member::Set(pairs) => {
                items.extend(pairs.into_iter().map(ClassItem::from));
                i = next;
                continue;
            }
        };

        // A '-' is a range operator only between two members; a trailing one is literal.
        if chars.get(next) == Some(&'-') && next + 1 < chars.len() {
            set_operation(chars, next, offset)?;
            if let (Member::Char(hi), after) = read_member(chars, next + 1, offset, config)? {
                items.push(ClassItem::Range(lo, hi));
                i = after;
                continue;
            }
            // `a-\d`: the dash cannot form a range, so it is a literal member
            items.push(ClassItem::Single(lo));
            items.push(ClassItem::Single('-'));
            i = next + 1;
            continue;
        }

        items.push(ClassItem::Single(lo));
        i = next;
    }

    Ok(items)
}

/// Reject the set operators `&&`, `--` and `~~` starting at `i`. A leading `--` is a
/// run of literal dashes.
fn set_operation(chars: &[char], i: usize, offset: usize) -> Result<(), RegrevError> {
    match (chars[i], chars.get(i + 1)) {
        (op @ ('&' | '~'), Some(&next)) if next == op => {}
        ('-', Some(&'-')) if i > 0 => {}
        _ => return Ok(()),
    }
    Err(RegrevError::UnsupportedFeature {
        feature: chars[i..i + 2].iter().collect(),
        offset: offset + i,
    })
}

/// Read one member at `i`, returning it and the index just past it.
fn read_member(
    chars: &[char],
    i: usize,
    offset: usize,
    config: &Config,
) -> Result<(Member, usize), RegrevError> {
    match chars[i] {
        '\\' => {
            let Some(&next) = chars.get(i + 1) else {
                return Err(RegrevError::Structural {
                    message: "'\\' at end of character class".into(),
                    offset: offset + i,
                });
            };
            let member = match next {
                'd' => Member::Set(vec![RunePair {
                    lo: char::from(DIGITS[0]),
                    hi: char::from(DIGITS[DIGITS.len() - 1]),
                }]),
                's' => Member::Set(Selection::from_bytes(config.whitespace()).ranges().to_vec()),
                c => match escaped_literal(c) {
                    Some(lit) => Member::Char(lit),
                    None => {
                        return Err(RegrevError::UnsupportedFeature {
                            feature: format!("\\{}", c),
                            offset: offset + i,
                        })
                    }
                },
            };
            Ok((member, i + 2))
        }
        '[' => {
            let close = find_class_end(chars, i).ok_or_else(|| RegrevError::Structural {
                message: "unclosed character class".into(),
                offset: offset + i,
            })?;
            let inner = &chars[i + 1..close];
            let member = match posix_name(inner) {
                Some(name) => {
                    let set = posix_class(&name).ok_or_else(|| RegrevError::UnsupportedFeature {
                        feature: format!("[:{}:]", name),
                        offset: offset + i,
                    })?;
                    Member::Set(Selection::from_bytes(&set).ranges().to_vec())
                }
                None => {
                    let nested = CharacterClass::parse(inner, offset + i + 1, config)?;
                    Member::Set(nested.selection.ranges.clone())
                }
            };
            Ok((member, close + 1))
        }
        c => Ok((Member::Char(c), i + 1)),
    }
}

fn posix_name(inner: &[char]) -> Option<String> {
    match inner {
        [':', name @ .., ':'] => Some(name.iter().collect()),
        _ => None,
    }
}

/// Find the `]` closing the class opened at `open`. Escaped characters never close
/// a class, a `]` right after the opening `[` or `[^` is a member, and nested
/// classes are skipped as a unit.
pub(crate) fn find_class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if chars.get(i) == Some(&'^') {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' => i = find_class_end(chars, i)?,
            ']' => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;

    fn parse(body: &str) -> Result<CharacterClass, RegrevError> {
        let chars: Vec<char> = body.chars().collect();
        CharacterClass::parse(&chars, 1, &Config::default())
    }

    fn members(class: &CharacterClass) -> String {
        let mut out = String::new();
        for rp in class.selection().ranges() {
            for c in rp.lo..=rp.hi {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_simplify_rune_range() {
        let rr = vec![
            RunePair { lo: 'c', hi: 'e' },
            RunePair { lo: 'a', hi: 'b' },
            RunePair { lo: 'd', hi: 'd' },
            RunePair { lo: 'x', hi: 'z' },
        ];
        assert_eq!(
            simplify_rune_range(rr),
            vec![RunePair { lo: 'a', hi: 'e' }, RunePair { lo: 'x', hi: 'z' }]
        );
        // contained and repeated pairs fold into the enclosing one
        let rr = vec![
            RunePair { lo: 'b', hi: 'c' },
            RunePair { lo: 'a', hi: 'f' },
            RunePair { lo: 'b', hi: 'c' },
        ];
        assert_eq!(simplify_rune_range(rr), vec![RunePair { lo: 'a', hi: 'f' }]);
        assert!(simplify_rune_range(Vec::new()).is_empty());
    }

    #[test]
    fn test_plain_members() {
        let class = parse("123ABC").unwrap();
        assert!(!class.negated);
        assert_eq!(class.items.len(), 6);
        assert_eq!(members(&class), "123ABC");
    }

    #[test]
    fn test_ranges_expand_inclusively() {
        let class = parse("A-D").unwrap();
        assert_eq!(class.items.as_slice(), &[ClassItem::Range('A', 'D')]);
        assert_eq!(members(&class), "ABCD");
        assert_eq!(class.selection().len(), 4);
    }

    #[test]
    fn test_duplicates_do_not_skew_selection() {
        let class = parse("aaab").unwrap();
        assert_eq!(class.selection().len(), 2);
    }

    #[test]
    fn test_negation_uses_alphabet() {
        let class = parse("^123ABC").unwrap();
        assert!(class.negated);
        assert_eq!(class.selection().len(), 62 - 6);
        for c in "123ABC".chars() {
            assert!(!class.selection().contains(c), "{} should be excluded", c);
        }
        assert!(class.selection().contains('z'));
    }

    #[test]
    fn test_dash_edge_cases() {
        assert_eq!(members(&parse("a-").unwrap()), "-a");
        assert_eq!(members(&parse("-a").unwrap()), "-a");
        assert_eq!(members(&parse(r"*\-\\").unwrap()), r"*-\");
        // `*-\\` is the range '*' through '\'
        let class = parse(r"*-\\").unwrap();
        assert_eq!(class.items.as_slice(), &[ClassItem::Range('*', '\\')]);
        assert_eq!(class.selection().len(), ('\\' as usize) - ('*' as usize) + 1);
    }

    #[test]
    fn test_set_operations_unsupported() {
        let cases = vec![
            ("a&&b", "&&", 2),
            ("a-z--b", "--", 4),
            ("a--b", "--", 2),
            ("x~~y", "~~", 2),
            (r"\d&&[0-4]", "&&", 3),
        ];
        for (body, feature, offset) in cases {
            assert_eq!(
                parse(body).unwrap_err(),
                RegrevError::UnsupportedFeature {
                    feature: feature.into(),
                    offset,
                },
                "class body '{}'",
                body
            );
        }
        // single operator characters and escaped pairs are plain members
        assert_eq!(members(&parse("&~").unwrap()), "&~");
        assert_eq!(members(&parse(r"a\&&").unwrap()), "&a");
        assert_eq!(members(&parse("--").unwrap()), "-");
    }

    #[test]
    fn test_escapes_in_class() {
        assert_eq!(members(&parse(r"\d").unwrap()), "0123456789");
        assert_eq!(members(&parse(r"\]\[").unwrap()), "[]");
        assert_eq!(members(&parse(r"\n").unwrap()), "\n");
        assert!(matches!(
            parse(r"\w"),
            Err(RegrevError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn test_nested_and_posix_classes() {
        assert_eq!(members(&parse("a[bc]").unwrap()), "abc");
        assert_eq!(members(&parse("[:digit:]_").unwrap()), "0123456789_");
        assert!(matches!(
            parse("[:punct:]"),
            Err(RegrevError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn test_empty_selection() {
        let config = Config::builder().all_characters(*b"ab").build().unwrap();
        let chars: Vec<char> = "^ab".chars().collect();
        let err = CharacterClass::parse(&chars, 1, &config).unwrap_err();
        assert_eq!(
            err,
            RegrevError::EmptySelection {
                class: "[^ab]".into(),
                offset: 0
            }
        );

        // a reversed range contributes nothing
        assert!(matches!(
            parse("z-a"),
            Err(RegrevError::EmptySelection { .. })
        ));
    }

    #[test]
    fn test_selection_draw_walks_ranges() {
        let selection = Selection::from_ranges(vec![
            RunePair { lo: 'a', hi: 'c' },
            RunePair { lo: 'x', hi: 'y' },
        ]);
        assert_eq!(selection.len(), 5);
        let mut e = ScriptedEntropy::new(vec![0, 2, 3, 4]);
        let drawn: String = (0..4).map(|_| selection.draw(&mut e)).collect();
        assert_eq!(drawn, "acxy");
    }

    #[test]
    fn test_selection_skips_surrogates() {
        let selection = Selection::from_ranges(vec![RunePair {
            lo: '\u{D7FF}',
            hi: '\u{E000}',
        }]);
        assert_eq!(selection.len(), 2);
        let mut e = ScriptedEntropy::new(vec![1]);
        assert_eq!(selection.draw(&mut e), '\u{E000}');
    }

    #[test]
    fn test_find_class_end() {
        let chars: Vec<char> = r"[ab]c".chars().collect();
        assert_eq!(find_class_end(&chars, 0), Some(3));

        let chars: Vec<char> = r"[a\]b]".chars().collect();
        assert_eq!(find_class_end(&chars, 0), Some(5));

        let chars: Vec<char> = "[]a]".chars().collect();
        assert_eq!(find_class_end(&chars, 0), Some(3));

        let chars: Vec<char> = "[^]a]".chars().collect();
        assert_eq!(find_class_end(&chars, 0), Some(4));

        let chars: Vec<char> = "[a[bc]d]".chars().collect();
        assert_eq!(find_class_end(&chars, 0), Some(7));

        let chars: Vec<char> = "[abc".chars().collect();
        assert_eq!(find_class_end(&chars, 0), None);
    }
}
