//! Throw-if checks exercised the way call sites use them.

use expectant::throw_if::*;
use expectant::{assert_expect_err, assert_expect_ok, Validatable};

struct ValidModel;

impl Validatable for ValidModel {
    fn is_valid(&self) -> bool {
        true
    }
}

struct NotValidModel;

impl Validatable for NotValidModel {
    fn is_valid(&self) -> bool {
        false
    }
}

enum AnyModel {
    Valid(ValidModel),
    NotValid(NotValidModel),
}

impl Validatable for AnyModel {
    fn is_valid(&self) -> bool {
        match self {
            AnyModel::Valid(m) => m.is_valid(),
            AnyModel::NotValid(m) => m.is_valid(),
        }
    }
}

#[test]
fn test_throw_if_true() {
    assert_expect_err!(throw_if_true(2 > 1));
    assert_expect_ok!(throw_if_true(1 > 2));
}

#[test]
fn test_throw_if_false() {
    assert_expect_err!(throw_if_false(1 > 2));
    assert_expect_ok!(throw_if_false(2 > 1));
}

#[test]
fn test_throw_if_equal() {
    let string = Some("value");
    let nil_string: Option<&str> = None;

    assert_expect_err!(throw_if_equal(&2, &2));
    assert_expect_err!(throw_if_equal(&string, &string));

    assert_expect_ok!(throw_if_equal(&1, &2));
    assert_expect_ok!(throw_if_equal(&string, &nil_string));
}

#[test]
fn test_throw_if_not_equal() {
    let string = Some("value");
    let nil_string: Option<&str> = None;

    assert_expect_err!(throw_if_not_equal(&1, &2));
    assert_expect_err!(throw_if_not_equal(&string, &nil_string));

    assert_expect_ok!(throw_if_not_equal(&2, &2));
    assert_expect_ok!(throw_if_not_equal(&string, &string));
}

#[test]
fn test_throw_if_null() {
    assert_expect_err!(throw_if_null(&None::<i32>));
    assert_expect_ok!(throw_if_null(&Some(2)));
}

#[test]
fn test_throw_if_not_null() {
    assert_expect_err!(throw_if_not_null(&Some(2)));
    assert_expect_ok!(throw_if_not_null(&None::<i32>));
}

#[test]
fn test_throw_if_empty() {
    let nil_string: Option<&str> = None;

    assert_expect_err!(throw_if_empty(&nil_string));
    assert_expect_err!(throw_if_empty(""));

    assert_expect_ok!(throw_if_empty("value"));
}

#[test]
fn test_throw_if_any_empty() {
    let array = [Some("value"), Some("otherValue")];

    assert_expect_err!(throw_if_any_empty(&[Some("")]));
    assert_expect_err!(throw_if_any_empty(&[Some("value"), None]));
    assert_expect_err!(throw_if_any_empty(&[Some("value"), Some("")]));

    assert_expect_ok!(throw_if_any_empty(&array));
    assert_expect_ok!(throw_if_any_empty(&Vec::<Option<&str>>::new()));
}

#[test]
fn test_throw_if_blank() {
    let nil_string: Option<&str> = None;

    assert_expect_err!(throw_if_blank(&nil_string));
    assert_expect_err!(throw_if_blank(""));
    assert_expect_err!(throw_if_blank(" \t\r\n"));

    assert_expect_ok!(throw_if_blank("value"));
}

#[test]
fn test_throw_if_any_blank() {
    assert_expect_err!(throw_if_any_blank(&[" \t\r\n"]));
    assert_expect_err!(throw_if_any_blank(&[Some("value"), None]));
    assert_expect_err!(throw_if_any_blank(&["value", ""]));
    assert_expect_err!(
        throw_if_any_blank(&["value", " \t\r\n"]),
        r#"element [1]: expected non-blank text, but was:<" \t\r\n">"#
    );

    assert_expect_ok!(throw_if_any_blank(&["value", "otherValue"]));
}

#[test]
fn test_throw_if_some_not_valid() {
    assert_expect_err!(throw_if_some_not_valid(&Some(NotValidModel)));

    assert_expect_ok!(throw_if_some_not_valid(&Some(ValidModel)));
    assert_expect_ok!(throw_if_some_not_valid(&None::<ValidModel>));
}

#[test]
fn test_throw_if_any_some_not_valid() {
    let array = [Some(AnyModel::Valid(ValidModel)), None];

    assert_expect_err!(throw_if_any_some_not_valid(&[Some(NotValidModel)]));

    assert_expect_ok!(throw_if_any_some_not_valid(&array));
    assert_expect_ok!(throw_if_any_some_not_valid(&Vec::<Option<AnyModel>>::new()));
}

#[test]
fn test_throw_if_null_or_not_valid() {
    assert_expect_err!(throw_if_null_or_not_valid(&None::<ValidModel>));
    assert_expect_err!(throw_if_null_or_not_valid(&Some(NotValidModel)));

    assert_expect_ok!(throw_if_null_or_not_valid(&Some(ValidModel)));
}

#[test]
fn test_throw_if_any_null_or_not_valid() {
    assert_expect_err!(throw_if_any_null_or_not_valid(&[Some(NotValidModel)]));
    assert_expect_err!(throw_if_any_null_or_not_valid(&[
        Some(AnyModel::Valid(ValidModel)),
        None
    ]));
    assert_expect_err!(throw_if_any_null_or_not_valid(&[
        Some(AnyModel::Valid(ValidModel)),
        Some(AnyModel::NotValid(NotValidModel)),
    ]));

    assert_expect_ok!(throw_if_any_null_or_not_valid(&[Some(ValidModel)]));
    assert_expect_ok!(throw_if_any_null_or_not_valid(
        &Vec::<Option<ValidModel>>::new()
    ));
}

#[test]
fn test_throw_if_identity() {
    let shared = String::from("shared");
    let copy = shared.clone();

    assert_expect_err!(throw_if_same(&shared, &shared), "expected not same");
    assert_expect_ok!(throw_if_same(&shared, &copy));
    assert_expect_err!(throw_if_not_same(&shared, &copy));
}

#[test]
fn test_throw_if_not_empty() {
    assert_expect_err!(throw_if_not_empty("value"));
    assert_expect_err!(throw_if_not_empty(&vec![1]), "expected empty value, but was:<[1]>");

    assert_expect_ok!(throw_if_not_empty(""));
    assert_expect_ok!(throw_if_not_empty(&None::<String>));
}

#[test]
fn test_throw_if_any_not_null() {
    assert_expect_err!(
        throw_if_any_not_null(&[None, Some(2)]),
        "element [1]: expected null, but was:<Some(2)>"
    );

    assert_expect_ok!(throw_if_any_not_null(&[None::<i32>, None]));
    assert_expect_ok!(throw_if_any_not_null(&Vec::<Option<i32>>::new()));
}

#[test]
fn test_throw_if_any_not_empty() {
    assert_expect_err!(throw_if_any_not_empty(&["", "value"]));
    assert_expect_err!(throw_if_any_not_empty(&vec![vec![], vec![1]]));

    assert_expect_ok!(throw_if_any_not_empty(&[Some(""), None]));
    assert_expect_ok!(throw_if_any_not_empty(&Vec::<String>::new()));
}

#[test]
fn test_throw_if_any_not_blank() {
    assert_expect_err!(throw_if_any_not_blank(&[" ", "value"]));
    assert_expect_err!(
        throw_if_any_not_blank(&[None, Some("x")]),
        r#"element [1]: expected blank text, but was:<Some("x")>"#
    );

    assert_expect_ok!(throw_if_any_not_blank(&[" \t", ""]));
    assert_expect_ok!(throw_if_any_not_blank(&Vec::<&str>::new()));
}

