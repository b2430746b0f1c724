//! Run metrics: what a compile touched and what it dropped.

use std::time::Duration;

use crate::{CompileError, Fragment, FragmentParts};

/// Counters for one assembly run, returned alongside the card. Nothing in
/// here feeds back into compilation; the card is the same with or without
/// anyone reading these.
#[derive(Debug, Clone, Default)]
pub struct CompileMetrics {
    /// Tooltip lines fed to the strategy, enchantment lines included.
    pub lines: usize,
    /// Lines that produced at least one ability.
    pub ability_lines: usize,
    /// Lines that produced at least one aura.
    pub aura_lines: usize,
    /// Lines that wrote per-tier attributes.
    pub tier_attribute_lines: usize,
    /// Lines the strategy rejected, in input order.
    pub skipped: Vec<Skipped>,
    pub elapsed: Duration,
}

/// One rejected line and why.
#[derive(Debug, Clone)]
pub struct Skipped {
    pub line: String,
    pub error: CompileError,
}

impl CompileMetrics {
    pub(crate) fn record(&mut self, fragment: &Fragment) {
        if fragment.parts.contains(FragmentParts::ABILITIES) {
            self.ability_lines += 1;
        }
        if fragment.parts.contains(FragmentParts::AURAS) {
            self.aura_lines += 1;
        }
        if fragment.parts.contains(FragmentParts::TIER_ATTRIBUTES) {
            self.tier_attribute_lines += 1;
        }
    }

    pub(crate) fn skip(&mut self, line: &str, error: CompileError) {
        self.skipped.push(Skipped { line: line.to_string(), error });
    }
}
