//! Behaviour tests for `Outcome`.

use forkable::control::{Error, Outcome};
use forkable::typeclass::{Applicative, Functor};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rejected {
    code: u16,
}

#[rstest]
fn combine_all_returns_the_first_error_untouched() {
    let error = Rejected { code: 409 };
    let combined = Outcome::combine_all(vec![
        Outcome::success(3),
        Outcome::success(4),
        Outcome::failure(error.clone()),
        Outcome::success(6),
    ]);
    assert_eq!(combined, Outcome::failure(error));
}

#[rstest]
fn combine_all_reports_the_earliest_of_several_failures() {
    let combined: Outcome<Vec<i32>, &str> = Outcome::combine_all(vec![
        Outcome::success(1),
        Outcome::failure("first"),
        Outcome::failure("second"),
    ]);
    assert_eq!(combined, Outcome::failure("first"));
}

#[rstest]
#[case(Some(2), Outcome::success(2))]
#[case(None, Outcome::failure(Error::Missing))]
fn from_nullable_fails_with_missing(#[case] input: Option<i32>, #[case] expected: Outcome<i32>) {
    assert_eq!(Outcome::from_nullable(input), expected);
}

#[rstest]
fn missing_error_has_a_stable_message() {
    let missing: Outcome<i32> = Outcome::from_nullable(None);
    let message = missing.fold(|error| error.to_string(), |value| value.to_string());
    assert_eq!(message, "value was null");
}

#[rstest]
fn attempt_wraps_the_panic_message() {
    let caught: Outcome<i32> = Outcome::attempt(|| panic!("disk full"));
    assert_eq!(caught, Outcome::failure(Error::Panicked("disk full".to_string())));
}

#[rstest]
fn try_catch_keeps_the_callers_error() {
    let parsed: Outcome<u8, std::num::ParseIntError> = Outcome::try_catch(|| "300".parse::<u8>());
    assert!(parsed.is_failure());
    let rendered = parsed.map_err(|error| error.to_string());
    assert_eq!(
        rendered,
        Outcome::failure("number too large to fit in target type".to_string())
    );
}

#[rstest]
fn alt_and_fallbacks() {
    let failed: Outcome<i32, &str> = Outcome::failure("down");
    assert_eq!(failed.alt(Outcome::success(2)), Outcome::success(2));
    assert_eq!(failed.get_or_else(|error| error.len() as i32), 4);
    assert_eq!(Outcome::<i32, &str>::success(1).with_default(7), 1);
}

#[rstest]
fn result_conversions_round_trip() {
    let outcome: Outcome<i32, &str> = Err("no").into();
    assert_eq!(outcome.into_result(), Err("no"));
    let result: Result<i32, &str> = Outcome::success(5).into();
    assert_eq!(result, Ok(5));
}

#[rstest]
fn traverse_stops_at_first_failure() {
    let checked = Outcome::traverse([10_u8, 200, 100], |n| {
        n.checked_mul(2).map_or(Outcome::failure(n), Outcome::success)
    });
    assert_eq!(checked, Outcome::failure(200));
}

#[rstest]
fn product_left_and_right_report_the_first_failure() {
    let first: Outcome<i32, Rejected> = Outcome::success(1);
    let second: Outcome<&str, Rejected> = Outcome::success("two");
    assert_eq!(first.clone().product_left(second.clone()), Outcome::success(1));
    assert_eq!(first.clone().product_right(second), Outcome::success("two"));

    let refused: Outcome<&str, Rejected> = Outcome::failure(Rejected { code: 403 });
    assert_eq!(
        first.product_left(refused.clone()),
        Outcome::failure(Rejected { code: 403 })
    );
    let broken: Outcome<i32, Rejected> = Outcome::failure(Rejected { code: 500 });
    assert_eq!(
        broken.product_right(refused),
        Outcome::failure(Rejected { code: 500 })
    );
}

#[rstest]
fn fmap_ref_borrows_success_and_clones_failure() {
    let words: Outcome<Vec<&str>, Rejected> = Outcome::success(vec!["a", "b"]);
    assert_eq!(words.fmap_ref(Vec::len), Outcome::success(2));
    assert_eq!(words, Outcome::success(vec!["a", "b"]));

    let refused: Outcome<Vec<&str>, Rejected> = Outcome::failure(Rejected { code: 401 });
    assert_eq!(refused.fmap_ref(Vec::len), Outcome::failure(Rejected { code: 401 }));
}
