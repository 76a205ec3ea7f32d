//! Numeric range rules and the helpers behind them.
//!
//! A range is a slice of bounds interpreted by a [`RangeKind`]: the two-bound
//! kinds take `[min, max]`, the others take a single bound. Bounds are checked
//! when the rule is built, so a malformed range never reaches evaluation.

use crate::error::{ConfigError, ConfigResult};
use crate::rule::{Evaluation, Rule, make_rule};
use crate::value::{Value, format_number, inspect_arguments, is_integer, is_number};
use std::fmt;

/// The six ways a range can constrain a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// `min ≤ n ≤ max`
    Inclusive,
    /// `min < n < max`
    Exclusive,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl RangeKind {
    pub const ALL: [RangeKind; 6] = [
        RangeKind::Inclusive,
        RangeKind::Exclusive,
        RangeKind::GreaterThan,
        RangeKind::GreaterThanOrEqual,
        RangeKind::LessThan,
        RangeKind::LessThanOrEqual,
    ];

    /// Number of bounds this kind takes
    pub fn bound_count(self) -> usize {
        match self {
            Self::Inclusive | Self::Exclusive => 2,
            _ => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inclusive => "inclusive",
            Self::Exclusive => "exclusive",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanOrEqual => "greaterThanOrEqual",
            Self::LessThan => "lessThan",
            Self::LessThanOrEqual => "lessThanOrEqual",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that `bounds` fit `kind`.
///
/// `combinator` only names the caller in the error.
pub fn check_range(combinator: &str, bounds: &[f64], kind: RangeKind) -> ConfigResult<()> {
    let received = || {
        let values: Vec<Value> = bounds.iter().copied().map(Value::from).collect();
        inspect_arguments(&values)
    };

    if bounds.len() != kind.bound_count() {
        let reason = if kind.bound_count() == 2 {
            "takes exactly two bounds, min and max"
        } else {
            "takes exactly one bound"
        };
        return Err(ConfigError::invalid_range(combinator, kind, reason, received()));
    }
    if bounds.iter().any(|bound| bound.is_nan()) {
        return Err(ConfigError::invalid_range(
            combinator,
            kind,
            "does not accept NaN as a bound",
            received(),
        ));
    }
    if let [min, max] = bounds {
        if min > max {
            return Err(ConfigError::invalid_range(
                combinator,
                kind,
                "requires min to be less than or equal to max",
                received(),
            ));
        }
    }
    Ok(())
}

/// Whether `n` falls within the range. Bounds that do not fit `kind` contain
/// nothing.
pub fn in_range(bounds: &[f64], kind: RangeKind, n: f64) -> bool {
    match (kind, bounds) {
        (RangeKind::Inclusive, [min, max]) => *min <= n && n <= *max,
        (RangeKind::Exclusive, [min, max]) => *min < n && n < *max,
        (RangeKind::GreaterThan, [bound]) => n > *bound,
        (RangeKind::GreaterThanOrEqual, [bound]) => n >= *bound,
        (RangeKind::LessThan, [bound]) => n < *bound,
        (RangeKind::LessThanOrEqual, [bound]) => n <= *bound,
        _ => false,
    }
}

/// Renders the range as a comparison, e.g. `1 ≤ n ≤ 3` or `n > 1`.
pub fn format_range(bounds: &[f64], kind: RangeKind) -> String {
    let bound = |index: usize| bounds.get(index).copied().map(format_number).unwrap_or_default();
    match kind {
        RangeKind::Inclusive => format!("{} ≤ n ≤ {}", bound(0), bound(1)),
        RangeKind::Exclusive => format!("{} < n < {}", bound(0), bound(1)),
        RangeKind::GreaterThan => format!("n > {}", bound(0)),
        RangeKind::GreaterThanOrEqual => format!("n ≥ {}", bound(0)),
        RangeKind::LessThan => format!("n < {}", bound(0)),
        RangeKind::LessThanOrEqual => format!("n ≤ {}", bound(0)),
    }
}

/// Which numbers a range rule admits before looking at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFamily {
    /// Any number except NaN
    Number,
    /// Finite whole numbers
    Integer,
}

impl RangeFamily {
    /// Combinator name used in configuration errors
    pub fn combinator(self) -> &'static str {
        match self {
            Self::Number => "numberRange",
            Self::Integer => "integerRange",
        }
    }

    fn admits(self, value: &Value) -> bool {
        match self {
            Self::Number => is_number(value),
            Self::Integer => is_integer(value),
        }
    }

    fn label(self, bounds: &[f64], kind: RangeKind) -> String {
        let range = format_range(bounds, kind);
        match self {
            Self::Number => format!("number: {range}"),
            Self::Integer => format!("number: integer, {range}"),
        }
    }

    /// Builds a range rule of the given kind.
    pub fn rule(self, kind: RangeKind, bounds: &[f64]) -> ConfigResult<Rule> {
        check_range(self.combinator(), bounds, kind)?;

        let label = self.label(bounds, kind);
        let bounds = bounds.to_vec();
        Ok(make_rule(
            move |value: &Value, _: &Evaluation<'_>| {
                Ok(self.admits(value)
                    && value
                        .as_f64()
                        .is_some_and(|n| in_range(&bounds, kind, n)))
            },
            label,
            true,
            false,
        ))
    }

    pub fn inclusive(self, bounds: &[f64]) -> ConfigResult<Rule> {
        self.rule(RangeKind::Inclusive, bounds)
    }

    pub fn exclusive(self, bounds: &[f64]) -> ConfigResult<Rule> {
        self.rule(RangeKind::Exclusive, bounds)
    }

    pub fn greater_than(self, bounds: &[f64]) -> ConfigResult<Rule> {
        self.rule(RangeKind::GreaterThan, bounds)
    }

    pub fn greater_than_or_equal(self, bounds: &[f64]) -> ConfigResult<Rule> {
        self.rule(RangeKind::GreaterThanOrEqual, bounds)
    }

    pub fn less_than(self, bounds: &[f64]) -> ConfigResult<Rule> {
        self.rule(RangeKind::LessThan, bounds)
    }

    pub fn less_than_or_equal(self, bounds: &[f64]) -> ConfigResult<Rule> {
        self.rule(RangeKind::LessThanOrEqual, bounds)
    }
}

/// Inclusive number range, `min ≤ n ≤ max`.
pub fn number_range(min: f64, max: f64) -> ConfigResult<Rule> {
    RangeFamily::Number.inclusive(&[min, max])
}

/// Inclusive integer range, `min ≤ n ≤ max`.
pub fn integer_range(min: f64, max: f64) -> ConfigResult<Rule> {
    RangeFamily::Integer.inclusive(&[min, max])
}
