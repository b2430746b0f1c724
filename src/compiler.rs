//! Card assembly pipeline.
//!
//! ```text
//! Item ── tier_range / derive_tiers (tiers.rs)
//!           - unlocked tier list
//!           - per-tier CooldownMax seeds
//!                  │
//!                  v
//!         fold unifiedTooltips (assemble.rs)
//!           - one Fragment per line via the TooltipCompiler
//!           - typed deep-merge into the Card accumulator
//!           - placeholder-rewrite the display tooltips
//!           - fold enchantment tooltips the same way
//!                  │
//!                  v
//!         Card + CompileMetrics (metrics.rs)
//! ```
//!
//! Line counters are recomputed from the accumulator's map sizes before
//! every line, never incremented blindly, so placeholder indices always
//! point at real keys. Skipped grammar lines are logged to stderr when
//! `CARDWRIGHT_DEBUG_RULES` is set and recorded in the metrics either way.

#[path = "compiler/assemble.rs"]
mod assemble;
#[path = "compiler/metrics.rs"]
mod metrics;
#[path = "compiler/tiers.rs"]
mod tiers;

#[cfg(test)]
#[path = "compiler/tests.rs"]
mod tests;

pub(crate) use assemble::assemble;
pub use metrics::{CompileMetrics, Skipped};
pub use tiers::{derive_tiers, parse_cooldown, tier_range};
