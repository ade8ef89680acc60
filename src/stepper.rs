/// Quantity stepper: +/- buttons next to a numeric input, never below 1

use regex::Regex;
use std::sync::LazyLock;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

/// Leading integer the way `parseInt(value, 10)` reads it: ASCII digits only
static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\u{FEFF}]*([+-]?[0-9]+)").expect("valid regex"));

pub const MIN_QUANTITY: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

impl Step {
    pub fn apply(self, current: i64) -> i64 {
        match self {
            Step::Increment => current.saturating_add(1),
            Step::Decrement => current.saturating_sub(1).max(MIN_QUANTITY),
        }
    }
}

/// Read an input value as an integer; empty or non-numeric gives `baseline`.
///
/// Examples:
/// - "5" → 5
/// - " 12abc" → 12
/// - "" / "abc" → baseline
/// - "99999999999999999999" → i64::MAX
pub fn parse_quantity(raw: &str, baseline: i64) -> i64 {
    LEADING_INT
        .captures(raw)
        .map(|caps| {
            let digits = &caps[1];
            digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            })
        })
        .unwrap_or(baseline)
}

/// Compute the next value shown for `raw`.
pub fn next_quantity(raw: &str, step: Step, baseline: i64) -> i64 {
    step.apply(parse_quantity(raw, baseline))
}

/// The single input sharing a parent with `button`.
pub fn input_beside(button: &Element) -> Option<HtmlInputElement> {
    button
        .parent_element()?
        .query_selector("input")
        .ok()
        .flatten()?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Apply `step` to the input beside `button`. Returns the value written,
/// or `None` when the button has no input next to it.
pub fn step_input(button: &Element, step: Step, baseline: i64) -> Option<i64> {
    let Some(input) = input_beside(button) else {
        log::debug!("Stepper button has no input beside it");
        return None;
    };

    let value = next_quantity(&input.value(), step, baseline);
    input.set_value(&value.to_string());
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5", 0), 5);
        assert_eq!(parse_quantity("  42", 0), 42);
        assert_eq!(parse_quantity("12abc", 0), 12);
        assert_eq!(parse_quantity("-3", 0), -3);
        assert_eq!(parse_quantity("+7", 0), 7);
        assert_eq!(parse_quantity("3.9", 0), 3);
        // Only ASCII digits count; a trailing ARABIC-INDIC THREE ends the number
        assert_eq!(parse_quantity("5\u{663}", 0), 5);
        assert_eq!(next_quantity("5\u{663}", Step::Increment, 0), 6);
        assert_eq!(parse_quantity("\u{663}", 0), 0);
        assert_eq!(parse_quantity("\u{FEFF} 8", 0), 8);
    }

    #[test]
    fn test_parse_quantity_falls_back_to_baseline() {
        assert_eq!(parse_quantity("", 0), 0);
        assert_eq!(parse_quantity("abc", 0), 0);
        assert_eq!(parse_quantity("-", 1), 1);
        assert_eq!(parse_quantity("x12", 1), 1);
    }

    #[test]
    fn test_parse_quantity_saturates() {
        assert_eq!(parse_quantity("99999999999999999999", 0), i64::MAX);
        assert_eq!(parse_quantity("-99999999999999999999", 0), i64::MIN);
        assert_eq!(next_quantity("99999999999999999999", Step::Increment, 0), i64::MAX);
        assert_eq!(next_quantity("99999999999999999999", Step::Decrement, 0), i64::MAX - 1);
    }

    #[test]
    fn test_decrement_floor() {
        assert_eq!(next_quantity("1", Step::Decrement, 0), 1);
        assert_eq!(next_quantity("5", Step::Decrement, 0), 4);
        assert_eq!(next_quantity("2", Step::Decrement, 0), 1);
        assert_eq!(next_quantity("-10", Step::Decrement, 0), 1);
        assert_eq!(next_quantity("", Step::Decrement, 0), 1);
    }

    #[test]
    fn test_increment() {
        assert_eq!(next_quantity("1", Step::Increment, 0), 2);
        assert_eq!(next_quantity("41", Step::Increment, 0), 42);
    }

    #[test]
    fn test_increment_baseline() {
        assert_eq!(next_quantity("", Step::Increment, 0), 1);
        assert_eq!(next_quantity("abc", Step::Increment, 0), 1);
        // Variant that treats an empty field as 1
        assert_eq!(next_quantity("", Step::Increment, 1), 2);
    }

    #[test]
    fn test_no_overflow() {
        assert_eq!(Step::Increment.apply(i64::MAX), i64::MAX);
        assert_eq!(Step::Decrement.apply(i64::MIN), MIN_QUANTITY);
    }
}
