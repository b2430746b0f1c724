//! Numeric progression extraction.
//!
//! Tooltips scale numbers across tiers inside one parenthesized group:
//! `"Deal (8 » 12 » 16 » 20) damage."` or the older `"Burn (1/2/3)."` form.
//! This module pulls that group apart into a [`Progression`]: one [`Step`]
//! per unlocked tier, in tier order.
//!
//! Classification happens per token:
//!
//! - trailing `x` marks a multiplier (`1x`, `2x`),
//! - trailing `%` marks a percentage (`+30%`),
//! - `N-M` becomes a [`Value::Range`],
//! - a plain signed decimal becomes a [`Value::Fixed`].
//!
//! Tokens that fit none of these are skipped; the surviving steps keep their
//! order. A text without a parenthesized group yields an empty progression
//! and the caller decides the default (the heuristic path falls back to
//! `Value::fixed(1.0)`). Bare numbers outside parentheses are a separate,
//! single-value lookup ([`bare_value`]) used by the modifier classifier.

use crate::schema::Value;

/// How a token was spelled, beyond its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Plain,
    Multiplier,
    Percent,
}

/// One tier's worth of a scaling number.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub value: Value,
    pub unit: Unit,
}

impl Step {
    pub fn fixed(n: f64, unit: Unit) -> Self {
        Step { value: Value::fixed(n), unit }
    }

    /// Collapse the step to a single number for tier-attribute routing.
    /// Ranges collapse to their minimum.
    pub fn scalar(&self) -> f64 {
        match &self.value {
            Value::Fixed { value } => *value,
            Value::Range { min_value, .. } => *min_value,
            Value::CardAttribute { default_value, .. } => *default_value,
        }
    }
}

/// An ordered sequence of per-tier steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Progression {
    steps: Vec<Step>,
}

impl Progression {
    pub fn empty() -> Self {
        Progression { steps: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// True if every step is a multiplier (the "( 1x » 2x )" shape).
    pub fn all_multipliers(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|s| s.unit == Unit::Multiplier)
    }
}

/// Classify one trimmed token from a progression group.
fn classify(token: &str) -> Option<Step> {
    // Signed decimal, anchored.
    let number = regex!(r"^[+-]?\d+(?:\.\d+)?$");
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(stripped) = token.strip_suffix('x') {
        if number.is_match(stripped.trim()) {
            let n: f64 = stripped.trim().parse().ok()?;
            return Some(Step::fixed(n, Unit::Multiplier));
        }
    }

    if let Some(stripped) = token.strip_suffix('%') {
        if number.is_match(stripped.trim()) {
            let n: f64 = stripped.trim().parse().ok()?;
            return Some(Step::fixed(n, Unit::Percent));
        }
    }

    // Unsigned N-M; signed decimals are plain values, not ranges.
    if let Some(caps) = regex!(r"^(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)$").captures(token) {
        let min: f64 = caps[1].parse().ok()?;
        let max: f64 = caps[2].parse().ok()?;
        return Some(Step { value: Value::range(min, max), unit: Unit::Plain });
    }

    if number.is_match(token) {
        let n: f64 = token.parse().ok()?;
        return Some(Step::fixed(n, Unit::Plain));
    }

    None
}

/// Pull the tier progression out of a tooltip line.
///
/// Only the first parenthesized group counts; separators are `»` or `/`.
/// Malformed tokens are dropped silently, so `"( 5 » ??? » 7 )"` still
/// yields two steps.
pub fn extract(text: &str) -> Progression {
    let Some(caps) = regex!(r"\(([^)]*)\)").captures(text) else {
        return Progression::empty();
    };

    let body = &caps[1];
    let steps = body.split(['»', '/']).filter_map(classify).collect();
    Progression { steps }
}

/// A single value spelled outside parentheses ("for 2-3 seconds", "50").
/// Ranges are tried first; a plain-number search would read `1-3` as `1`.
pub fn bare_value(text: &str) -> Option<Step> {
    if let Some(caps) = regex!(r"(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)").captures(text) {
        let min: f64 = caps[1].parse().ok()?;
        let max: f64 = caps[2].parse().ok()?;
        return Some(Step { value: Value::range(min, max), unit: Unit::Plain });
    }

    let caps = regex!(r"([+-]?\d+(?:\.\d+)?)(x|%)?").captures(text)?;
    let n: f64 = caps[1].parse().ok()?;
    let unit = match caps.get(2).map(|m| m.as_str()) {
        Some("x") => Unit::Multiplier,
        Some("%") => Unit::Percent,
        _ => Unit::Plain,
    };
    Some(Step::fixed(n, unit))
}
