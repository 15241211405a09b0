//! Assertion functions for [`Fixture::so`](crate::Fixture::so).
//!
//! Each function takes `(actual, expected)` and returns a failure description, or an empty string on success.
//! Descriptions are multi-line; `so` nests every line after the first one level deeper in the transcript.

use std::fmt::Debug;

/// Successful assertion result.
const PASS: String = String::new();

pub fn equal<T: PartialEq + Debug + ?Sized>(actual: &T, expected: &T) -> String {
    if actual == expected {
        return PASS;
    }
    format!("Expected: {expected:?}\nActual: {actual:?}\n(Should be equal)")
}

pub fn not_equal<T: PartialEq + Debug + ?Sized>(actual: &T, expected: &T) -> String {
    if actual != expected {
        return PASS;
    }
    format!("Expected: anything but {expected:?}\nActual: {actual:?}\n(Should not be equal)")
}

/// `expected` is ignored; pass `&()`.
pub fn be_true(actual: &bool, _expected: &()) -> String {
    if *actual {
        return PASS;
    }
    "Expected: true\nActual: false".to_string()
}

/// `expected` is ignored; pass `&()`.
pub fn be_false(actual: &bool, _expected: &()) -> String {
    if !*actual {
        return PASS;
    }
    "Expected: false\nActual: true".to_string()
}

/// Substring containment.
pub fn contain(actual: &str, expected: &str) -> String {
    if actual.contains(expected) {
        return PASS;
    }
    format!("Expected: {actual:?}\nto contain: {expected:?}\n(but it didn't)")
}

/// `expected` is ignored; pass `&()`.
pub fn be_empty<T: Debug>(actual: &[T], _expected: &()) -> String {
    if actual.is_empty() {
        return PASS;
    }
    format!("Expected: empty\nActual: {actual:?} (length {})", actual.len())
}

pub fn have_length<T: Debug>(actual: &[T], expected: &usize) -> String {
    if actual.len() == *expected {
        return PASS;
    }
    format!("Expected length: {expected}\nActual length: {}\n{actual:?}", actual.len())
}
