use crate::LanguageCode;

use googletest::prelude::*;

#[test]
fn given_known_code_when_parsed_then_ok() {
    assert_that!(LanguageCode::parse("nl").unwrap().as_str(), eq("nl"));
    assert_that!(LanguageCode::parse("en").unwrap().as_str(), eq("en"));
}

#[test]
fn given_uppercase_code_when_parsed_then_normalized_to_lowercase() {
    assert_that!(LanguageCode::parse("NL").unwrap().as_str(), eq("nl"));
}

#[test]
fn given_unknown_or_malformed_code_when_parsed_then_err() {
    assert_that!(LanguageCode::parse("xx"), err(anything()));
    assert_that!(LanguageCode::parse("nld"), err(anything()));
    assert_that!(LanguageCode::parse(""), err(anything()));
    assert_that!(LanguageCode::parse("n"), err(anything()));
}

#[test]
fn test_default_language_is_dutch() {
    assert_eq!(LanguageCode::default().as_str(), "nl");
}
