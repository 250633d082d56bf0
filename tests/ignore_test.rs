use instantiate::{
    error::Error,
    ignore::{should_skip, SkipPatterns},
};

#[test]
fn test_empty_patterns_never_skip() {
    let patterns = SkipPatterns::empty();
    assert!(patterns.is_empty());
    assert!(!patterns.should_skip("anything.pdf"));
    assert!(!should_skip::<&str>("a.pdf", &[]).unwrap());
}

#[test]
fn test_glob_syntax() {
    let patterns = SkipPatterns::new(["*.pdf", "data?.csv", "[ab].png"]).unwrap();

    assert!(patterns.should_skip("a.pdf"));
    assert!(patterns.should_skip("data1.csv"));
    assert!(patterns.should_skip("b.png"));

    assert!(!patterns.should_skip("c.tex"));
    assert!(!patterns.should_skip("data10.csv"));
    assert!(!patterns.should_skip("c.png"));
}

#[test]
fn test_matching_is_case_sensitive() {
    let patterns = SkipPatterns::new(["*.pdf"]).unwrap();
    assert!(!patterns.should_skip("A.PDF"));
}

#[test]
fn test_any_pattern_matches() {
    assert!(should_skip("figure.png", &["*.pdf", "*.png"]).unwrap());
    assert!(!should_skip("main.tex", &["*.pdf", "*.png"]).unwrap());
}

#[test]
fn test_invalid_pattern() {
    match SkipPatterns::new(["[unclosed"]) {
        Err(Error::PatternError(_)) => (),
        other => panic!("Expected PatternError, got {other:?}"),
    }
}
