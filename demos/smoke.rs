//! Smoke test for regrev: reverse a handful of patterns and check each result
//! against the `regex` crate.

use regex::Regex;
use regrev::{Config, RegrevError, Reverser};

fn main() {
    println!("Running regrev smoke tests...\n");

    let reverser = Reverser::new(
        Config::builder()
            .max_repeats(5)
            .build()
            .expect("valid config"),
    );

    test_round_trip(&reverser, "a");
    test_round_trip(&reverser, "a+b+");
    test_round_trip(&reverser, "abc{2,5}d?e*f+");
    test_round_trip(&reverser, "[A-D][EFG]b");
    test_round_trip(&reverser, "[^123ABC]");
    test_round_trip(&reverser, "(a+b+)?(abc{2,5}){2,4}");
    test_round_trip(&reverser, r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}");
    test_round_trip(&reverser, r"(?P<year>\d{4})-(?P<month>[01]\d)");
    test_rejected(&reverser, "cat|dog");
    test_rejected(&reverser, r"\w+");

    println!("\n✅ All smoke tests passed!");
}

fn test_round_trip(reverser: &Reverser, pattern: &str) {
    let re = Regex::new(&format!("^(?:{})$", pattern)).unwrap();
    let got = reverser.reverse(pattern).unwrap();
    assert!(re.is_match(&got), "{:?} should match {}", got, pattern);
    println!("✓ {:<40} => {:?}", pattern, got);
}

fn test_rejected(reverser: &Reverser, pattern: &str) {
    match reverser.reverse(pattern) {
        Err(err @ RegrevError::UnsupportedFeature { .. }) => {
            println!("✓ {:<40} => rejected: {}", pattern, err)
        }
        other => panic!("{} should be rejected, got {:?}", pattern, other),
    }
}
