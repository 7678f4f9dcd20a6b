//! Round-trip samples.
//!
//! Every `regex` here compiles with the `regex` crate. Samples marked `valid` must
//! reverse to a string that the anchored regex accepts; the others use syntax the
//! reverser rejects.

#[derive(Debug)]
pub struct ReverseSample {
    pub regex: &'static str,
    pub valid: bool,
}

pub static REVERSE_SAMPLES: &[ReverseSample] = &[
    // Literals
    ReverseSample {
        regex: "a",
        valid: true,
    },
    ReverseSample {
        regex: "hello",
        valid: true,
    },
    ReverseSample {
        regex: "héllo wörld",
        valid: true,
    },
    ReverseSample {
        regex: r"a\.b\*c\+d\?",
        valid: true,
    },
    ReverseSample {
        regex: r"\(\)\[\]\{\}\|\^\$\\",
        valid: true,
    },
    ReverseSample {
        regex: r"x\ty\nz",
        valid: true,
    },
    ReverseSample {
        regex: "-_,:;=!@#%&'\"~/",
        valid: true,
    },
    // Quantifiers
    ReverseSample {
        regex: "a+b+",
        valid: true,
    },
    ReverseSample {
        regex: "abc{2,5}d?e*f+",
        valid: true,
    },
    ReverseSample {
        regex: "x{3}y{0}z{0,1}",
        valid: true,
    },
    ReverseSample {
        regex: "a{2,}b{1,}",
        valid: true,
    },
    ReverseSample {
        regex: "a*?b+?c??d{2,4}?",
        valid: true,
    },
    ReverseSample {
        regex: "é+ü{2}",
        valid: true,
    },
    // Specials
    ReverseSample {
        regex: "a.+b",
        valid: true,
    },
    ReverseSample {
        regex: r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
        valid: true,
    },
    ReverseSample {
        regex: r"\d+\s\d*",
        valid: true,
    },
    ReverseSample {
        regex: r"...\s?",
        valid: true,
    },
    // Classes
    ReverseSample {
        regex: "[123ABC]",
        valid: true,
    },
    ReverseSample {
        regex: "[^123ABC]",
        valid: true,
    },
    ReverseSample {
        regex: "[A-D][EFG]b",
        valid: true,
    },
    ReverseSample {
        regex: r"[*\-\\]",
        valid: true,
    },
    ReverseSample {
        regex: r"[*-\\]",
        valid: true,
    },
    ReverseSample {
        regex: "[ABC]?[DEF]{4,5}[GHI]+",
        valid: true,
    },
    ReverseSample {
        regex: "[a-zA-Z_][a-zA-Z0-9_]*",
        valid: true,
    },
    ReverseSample {
        regex: "[-a][a-][^-]",
        valid: true,
    },
    ReverseSample {
        regex: r"[\d.][\s]",
        valid: true,
    },
    ReverseSample {
        regex: "[]a]x[^]a]",
        valid: true,
    },
    ReverseSample {
        regex: "[a[xyz]][[:digit:]]+[[:upper:][:lower:]]",
        valid: true,
    },
    ReverseSample {
        regex: "[(][)][|][$][.][*]",
        valid: true,
    },
    ReverseSample {
        regex: "[а-я]{3}",
        valid: true,
    },
    // Groups
    ReverseSample {
        regex: "(ab){2,3}",
        valid: true,
    },
    ReverseSample {
        regex: "(a+b+)?(abc{2,5}){2,4}",
        valid: true,
    },
    ReverseSample {
        regex: "((a)(b(c)))+",
        valid: true,
    },
    ReverseSample {
        regex: "((ab)+c){2}d",
        valid: true,
    },
    ReverseSample {
        regex: "([)(]x)+",
        valid: true,
    },
    ReverseSample {
        regex: r"(\(\))*",
        valid: true,
    },
    ReverseSample {
        regex: "()a(b)",
        valid: true,
    },
    ReverseSample {
        regex: "(?:ab)+c",
        valid: true,
    },
    ReverseSample {
        regex: r"(?P<year>\d{4})-(?P<month>[01]\d)-(?<day>[0-3]\d)",
        valid: true,
    },
    ReverseSample {
        regex: r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}",
        valid: true,
    },
    ReverseSample {
        regex: "a{2}{3}",
        valid: true,
    },
    ReverseSample {
        regex: "(ab)+{2}c?*",
        valid: true,
    },
    // Rejected syntax
    ReverseSample {
        regex: "a|b",
        valid: false,
    },
    ReverseSample {
        regex: "(a|b)c",
        valid: false,
    },
    ReverseSample {
        regex: "^abc",
        valid: false,
    },
    ReverseSample {
        regex: "abc$",
        valid: false,
    },
    ReverseSample {
        regex: r"\w+",
        valid: false,
    },
    ReverseSample {
        regex: r"\bword\b",
        valid: false,
    },
    ReverseSample {
        regex: r"\p{Greek}",
        valid: false,
    },
    ReverseSample {
        regex: "(?i)abc",
        valid: false,
    },
    ReverseSample {
        regex: "[^a-zA-Z0-9]",
        valid: false,
    },
    ReverseSample {
        regex: "[[:punct:]]",
        valid: false,
    },
    ReverseSample {
        regex: "[a-z&&[^aeiou]]",
        valid: false,
    },
    ReverseSample {
        regex: "[0-9--4]",
        valid: false,
    },
];
