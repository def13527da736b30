use packslip::domain::PostalCode;

#[test]
fn given_lowercase_compact_code_when_parsing_then_normalizes_to_canonical_form() {
    let code = PostalCode::parse("h2x1y4").unwrap();
    assert_eq!(code.as_str(), "H2X 1Y4");
}

#[test]
fn given_spaced_uppercase_code_when_parsing_then_yields_same_canonical_form() {
    let spaced = PostalCode::parse("H2X 1Y4").unwrap();
    let compact = PostalCode::parse("h2x1y4").unwrap();
    assert_eq!(spaced, compact);
}

#[test]
fn given_canonical_form_when_reparsing_then_is_idempotent() {
    let first = PostalCode::parse("r2c 3t5").unwrap();
    let second = PostalCode::parse(first.as_str()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn given_extra_internal_whitespace_when_parsing_then_still_accepts() {
    let code = PostalCode::parse("  K1A  0B1 ").unwrap();
    assert_eq!(code.as_str(), "K1A 0B1");
}

#[test]
fn given_non_conforming_strings_when_parsing_then_all_are_rejected() {
    // Wrong alternation, wrong length, wrong characters, embedded punctuation.
    let bad = [
        "",
        "H2X",
        "H2X 1Y",
        "H2X 1Y44",
        "123456",
        "ABCDEF",
        "1H2X1Y",
        "H22 1Y4",
        "H2X 1YY",
        "H2X-1Y4",
        "H2X_1Y4",
        "HH2X1Y4",
        "h2x1y",
        "é2x1y4",
    ];
    for input in bad {
        assert!(
            PostalCode::parse(input).is_err(),
            "expected rejection for {:?}",
            input
        );
    }
}
