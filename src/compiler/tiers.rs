//! Tier-range and cooldown derivation.

use std::collections::BTreeMap;

use crate::CompileError;
use crate::item::Item;
use crate::schema::{AttributeType, Tier, TierInfo};

/// Tiers the item actually has: from `startingTier` up, in fixed tier
/// order, keeping every tier whose tooltip list is non-empty. Holes are
/// assumed absent, never checked; the output just skips them.
pub fn tier_range(item: &Item) -> Vec<Tier> {
    Tier::ALL
        .iter()
        .copied()
        .skip_while(|t| *t != item.starting_tier)
        .filter(|t| !item.tier_tooltips(*t).is_empty())
        .collect()
}

/// Milliseconds from a cooldown stat line.
///
/// The literal word `Cooldown` must appear, and the first decimal number in
/// the text is the seconds value: `"Cooldown 6 seconds"` is 6000,
/// `"Cooldown 7.5 seconds"` is 7500. A missing word and a missing number
/// are distinct, visible errors, never silent defaults.
pub fn parse_cooldown(text: &str) -> Result<u64, CompileError> {
    if !text.contains("Cooldown") {
        return Err(CompileError::MissingCooldown { line: text.to_string() });
    }
    let number = regex!(r"\d+(?:\.\d+)?")
        .find(text)
        .ok_or_else(|| CompileError::MissingNumber { line: text.to_string() })?;
    let seconds: f64 = number
        .as_str()
        .parse()
        .map_err(|_| CompileError::MissingNumber { line: text.to_string() })?;
    Ok((seconds * 1000.0).round() as u64)
}

/// Seed each unlocked tier's `TierInfo` with `CooldownMax` from that tier's
/// own cooldown line. Passive items carry no cooldown line at any tier and
/// get bare infos, which is fine; a cooldown line that lost its number is
/// an error.
pub fn derive_tiers(item: &Item) -> Result<BTreeMap<Tier, TierInfo>, CompileError> {
    let mut tiers = BTreeMap::new();
    for tier in tier_range(item) {
        let mut info = TierInfo::default();
        if let Some(line) = item.tier_tooltips(tier).iter().find(|l| l.contains("Cooldown")) {
            let ms = parse_cooldown(line)?;
            info.attributes.insert(AttributeType::CooldownMax, ms as f64);
        }
        tiers.insert(tier, info);
    }
    Ok(tiers)
}
