#![cfg(feature = "try_trait")]
#![feature(try_trait_v2)]

use manganese::{FaultKind, Optional, Outcome};

#[test]
fn test_outcome_question_mark() {
    fn double_parsed(input: &str) -> Outcome<i32> {
        let parsed: i32 = input.parse()?;
        Outcome::from_value(parsed * 2)
    }

    assert_eq!(double_parsed("21"), Outcome::Value(42));
    assert_eq!(double_parsed("x").fault().unwrap().kind(), FaultKind::Raised);
}

#[test]
fn test_outcome_question_mark_forwards_empty_and_fault() {
    fn add_one(input: Outcome<i32>) -> Outcome<i32> {
        let value = input?;
        Outcome::from_value(value + 1)
    }

    assert_eq!(add_one(Outcome::from_value(1)), Outcome::Value(2));
    assert_eq!(add_one(Outcome::empty()), Outcome::Empty);
    assert_eq!(
        add_one(Outcome::from_fault("upstream")).fault().unwrap().message(),
        "upstream"
    );
}

#[test]
fn test_optional_question_mark() {
    fn first_char_code(input: Optional<&str>) -> Optional<u32> {
        let text = input?;
        let first = Optional::from_nullable(text.chars().next())?;
        Optional::from_value(first as u32)
    }

    assert_eq!(first_char_code(Optional::from_value("A")), Optional::Value(65));
    assert_eq!(first_char_code(Optional::from_value("")), Optional::Empty);
    assert_eq!(first_char_code(Optional::empty()), Optional::Empty);
}
