#![cfg(feature = "serde")]
//! Serialization format tests for the containers.

use forkable::control::{List, Maybe, Outcome};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Maybe::present(1), json!({ "Present": 1 }))]
#[case(Maybe::absent(), json!("Absent"))]
fn maybe_is_externally_tagged(#[case] maybe: Maybe<i32>, #[case] expected: serde_json::Value) {
    assert_eq!(serde_json::to_value(maybe).unwrap(), expected);
    assert_eq!(serde_json::from_value::<Maybe<i32>>(expected).unwrap(), maybe);
}

#[rstest]
fn outcome_keeps_the_error_payload() {
    let failed: Outcome<i32, String> = Outcome::failure("timeout".to_string());
    let value = serde_json::to_value(&failed).unwrap();
    assert_eq!(value, json!({ "Failure": "timeout" }));
    assert_eq!(serde_json::from_value::<Outcome<i32, String>>(value).unwrap(), failed);
}

#[rstest]
fn list_serializes_as_a_plain_array() {
    let list = List::from_vec(vec![3, 1, 2]);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[3,1,2]");
    assert_eq!(serde_json::from_str::<List<i32>>("[3,1,2]").unwrap(), list);
}
