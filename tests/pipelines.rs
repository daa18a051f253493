//! Facade-level tests: everything here goes through `vista`'s re-exports
//! and the prelude, the way downstream code uses the library.

use expect_test::expect;
use pretty_assertions::assert_eq;
use vista::prelude::*;

#[test]
fn test_prelude_covers_a_full_pipeline() {
    let numbers = [2, 3, 5, 6, 7, 8, 9];
    let view = seq(&numbers) | filter(|&&n| n % 2 == 1) | map(|&n| n * 10) | take(2);
    assert_eq!(view.to_vec(), [30, 50]);
}

#[test]
fn test_deferred_and_immediate_reexports_agree() {
    let source = "sequence".chars();
    assert_eq!(seq(source.clone()) | take(3), counted(source, 3));
}

#[test]
fn test_split_and_rejoin() {
    let record = "city,street,17";
    let fields: Vec<String> = (seq(record.chars()) | split(','))
        .map(|field| field.into_iter().collect())
        .collect();
    expect![[r#"["city", "street", "17"]"#]].assert_eq(&format!("{fields:?}"));
}

#[test]
fn test_snapshot_of_realized_prefixes() {
    let taken = (seq(0..) | take_while(|&n| n < 10) | skip(4)).to_vec();
    expect![["[4, 5, 6, 7, 8, 9]"]].assert_eq(&format!("{taken:?}"));

    let bounded_view = bounded([1, 2, 3], 10).to_vec();
    expect![["[1, 2, 3]"]].assert_eq(&format!("{bounded_view:?}"));
}

#[test]
fn test_checked_construction_reports() {
    let err = vista::exactly("ab".chars(), 5).unwrap_err();
    assert_eq!(
        err,
        vista::LengthError {
            requested: 5,
            available: 2,
        }
    );
    expect![["expected at least 5 element(s), found 2"]].assert_eq(&err.to_string());
}
