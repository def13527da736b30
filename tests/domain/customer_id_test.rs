use packslip::domain::CustomerId;

#[test]
fn given_ten_digits_when_parsing_then_accepts() {
    let id = CustomerId::parse("1214327946").unwrap();
    assert_eq!(id.as_str(), "1214327946");
}

#[test]
fn given_formatting_characters_when_parsing_then_strips_them() {
    let id = CustomerId::parse(" 121-432-7946 ").unwrap();
    assert_eq!(id.as_str(), "1214327946");
}

#[test]
fn given_wrong_digit_count_when_parsing_then_rejects() {
    assert!(CustomerId::parse("123456789").is_err());
    assert!(CustomerId::parse("12345678901").is_err());
    assert!(CustomerId::parse("").is_err());
}
