extern crate self as cardwright;

use std::collections::BTreeMap;

use thiserror::Error;

#[macro_use]
mod macros;
mod api;
mod compiler;
mod diff;
mod grammar;
mod heuristic;
mod lexicon;
mod progression;

pub mod item;
pub mod schema;

pub use api::{
    CompileMetrics, CompileResult, Divergence, GrammarCompiler, HeuristicCompiler, Options,
    Skipped, Strategy, compile_item, compile_item_with, compile_tooltip, corpus_intersection,
    deep_intersection, derive_tiers, diff, parse_cooldown, scrub, tier_range,
};

use crate::item::Item;
use crate::schema::{Ability, AttributeType, Aura, Tier};

// --- Errors -----------------------------------------------------------------

/// Everything that can stop a line, a tier, or a whole item from compiling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// None of the heuristic clause templates matched.
    #[error("unrecognized tooltip clause: {clause:?}")]
    UnrecognizedClause { clause: String },

    /// The grammar rejected the line.
    #[error("cannot parse {line:?}: {reason}")]
    StructuralParseFailure { line: String, reason: String },

    /// A cooldown lookup on text without the literal word `Cooldown`.
    #[error("no cooldown in {line:?}")]
    MissingCooldown { line: String },

    /// A cooldown line that carries no number.
    #[error("no number in cooldown line {line:?}")]
    MissingNumber { line: String },
}

// --- Compiler currency ------------------------------------------------------

bitflags::bitflags! {
    /// Which kinds of output a compiled line produced.
    ///
    /// Drives tooltip placeholder selection during assembly: a line that
    /// produced abilities renders as `{ability.N}`, an aura line as
    /// `{aura.N}`, and a line with neither bit keeps its text verbatim.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FragmentParts: u8 {
        const ABILITIES       = 1 << 0;
        const AURAS           = 1 << 1;
        const TIER_ATTRIBUTES = 1 << 2;
    }
}

/// One compiled tooltip line, not yet merged into the card.
///
/// Ability and aura keys are the ids the card maps will hold, assigned from
/// the running indices in [`LineContext`].
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub parts: FragmentParts,
    pub abilities: BTreeMap<String, Ability>,
    pub auras: BTreeMap<String, Aura>,
    /// Attribute deltas per unlocked tier, merged into that tier's
    /// `TierInfo` attributes.
    pub tier_attributes: BTreeMap<Tier, BTreeMap<AttributeType, f64>>,
}

/// Everything a strategy may read while compiling one line.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub item: &'a Item,
    /// Tiers the item actually has, lowest first. Progressions index into
    /// this to spread per-tier values.
    pub unlocked: &'a [Tier],
    /// Id the next ability will be keyed under.
    pub ability_index: usize,
    /// Id the next aura will be keyed under.
    pub aura_index: usize,
}

/// A tooltip compilation strategy. One line in, one [`Fragment`] out.
///
/// Strategies are deterministic and offline; the only state they see is the
/// [`LineContext`]. Failures are per-line, so the caller decides whether a
/// bad line skips or aborts the item.
pub trait TooltipCompiler {
    /// Short stable name for metrics and debug output.
    fn name(&self) -> &'static str;

    fn compile_line(&self, line: &str, cx: &LineContext<'_>) -> Result<Fragment, CompileError>;
}
