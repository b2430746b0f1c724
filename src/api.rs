//! Public facade.
//!
//! Everything callers touch funnels through here: the two strategies behind
//! the [`TooltipCompiler`] interface, card assembly, tier and cooldown
//! derivation, and the diff oracle. [`compile_item`] is the one-call path;
//! [`compile_item_with`] picks the strategy.

use crate::compiler;
use crate::item::Item;
use crate::schema::Card;
use crate::{CompileError, Fragment, LineContext, TooltipCompiler};

pub use crate::compiler::{CompileMetrics, Skipped, derive_tiers, parse_cooldown, tier_range};
pub use crate::diff::{Divergence, corpus_intersection, deep_intersection, diff, scrub};
pub use crate::grammar::GrammarCompiler;
pub use crate::heuristic::HeuristicCompiler;

/// Which strategy compiles tooltip lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// The PEG grammar, the default: per-tier attribute routing, aura
    /// emission, recoverable per-line failures.
    #[default]
    Grammar,
    /// The regex cascade kept as a cross-check: one ability per line,
    /// literal values, rejections abort the item.
    Heuristic,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grammar" => Ok(Strategy::Grammar),
            "heuristic" => Ok(Strategy::Heuristic),
            other => Err(format!("unknown strategy {other:?} (grammar|heuristic)")),
        }
    }
}

/// Compilation behavior knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub strategy: Strategy,
}

/// Result from [`compile_item`] and [`compile_item_with`].
#[derive(Debug, Clone)]
pub struct CompileResult {
    pub card: Card,
    pub metrics: CompileMetrics,
}

/// Compile an item with the default options.
///
/// # Example
/// ```
/// use cardwright::item::Item;
///
/// let item: Item = serde_json::from_value(serde_json::json!({
///     "id": "itm_pet_rock",
///     "name": "Pet Rock",
///     "startingTier": "Bronze",
///     "size": "Small",
///     "tiers": {"Bronze": {"tooltips": ["Cooldown 6 seconds"]}},
///     "unifiedTooltips": ["Deal 10 damage."],
/// }))
/// .unwrap();
///
/// let out = cardwright::compile_item(&item).unwrap();
/// assert_eq!(out.card.abilities.len(), 1);
/// ```
pub fn compile_item(item: &Item) -> Result<CompileResult, CompileError> {
    compile_item_with(item, &Options::default())
}

/// Compile an item with an explicit strategy.
pub fn compile_item_with(item: &Item, options: &Options) -> Result<CompileResult, CompileError> {
    let (card, metrics) = match options.strategy {
        Strategy::Grammar => compiler::assemble(item, &GrammarCompiler)?,
        Strategy::Heuristic => compiler::assemble(item, &HeuristicCompiler)?,
    };
    Ok(CompileResult { card, metrics })
}

/// Compile one tooltip line against `item`'s context without assembling a
/// card. Counters start at zero, so output keys are `"0"`.
pub fn compile_tooltip(
    line: &str,
    item: &Item,
    options: &Options,
) -> Result<Fragment, CompileError> {
    let unlocked = tier_range(item);
    let cx = LineContext { item, unlocked: &unlocked, ability_index: 0, aura_index: 0 };
    match options.strategy {
        Strategy::Grammar => GrammarCompiler.compile_line(line, &cx),
        Strategy::Heuristic => HeuristicCompiler.compile_line(line, &cx),
    }
}
