//! Ordered interval tables for numeric CSS values
//!
//! A ladder is a list of `(upper_bound, token)` pairs checked in order; the
//! first bound that is `>=` the magnitude wins and anything above the last
//! bound maps to the ladder's top token.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").expect("leading number pattern is valid");
    static ref FIRST_INTEGER: Regex = Regex::new(r"\d+").expect("integer pattern is valid");
}

/// Closed-upper interval table mapping a magnitude to a token
#[derive(Debug, Clone, Copy)]
pub struct Ladder {
    steps: &'static [(f64, &'static str)],
    top: &'static str,
}

impl Ladder {
    pub const fn new(steps: &'static [(f64, &'static str)], top: &'static str) -> Self {
        Self { steps, top }
    }

    /// Token for a magnitude: the first step with `magnitude <= bound`, else the top token
    pub fn bucket(&self, magnitude: f64) -> &'static str {
        self.steps
            .iter()
            .find(|(bound, _)| magnitude <= *bound)
            .map(|(_, token)| *token)
            .unwrap_or(self.top)
    }
}

#[cfg(test)]
impl Ladder {
    /// Every token this ladder can produce, lowest first
    pub(crate) fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps
            .iter()
            .map(|(_, token)| *token)
            .chain(std::iter::once(self.top))
    }

    /// Upper bounds in order
    pub(crate) fn bounds(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().map(|(bound, _)| *bound)
    }
}

/// Leading numeric magnitude of `value`, provided `unit` directly follows it
pub fn magnitude(value: &str, unit: &str) -> Option<f64> {
    let value = value.trim();
    let number = LEADING_NUMBER.find(value)?;
    if !value[number.end()..].starts_with(unit) {
        return None;
    }

    number.as_str().parse().ok()
}

/// First run of digits anywhere in `value`
pub fn first_integer(value: &str) -> Option<f64> {
    let digits = FIRST_INTEGER.find(value)?;
    digits.as_str().parse().ok()
}
