//! Input records: items as the public item API serves them.
//!
//! This is the compiler's only input shape. Field names are camelCase on the
//! wire; everything the API might omit gets a `#[serde(default)]` so partial
//! fixtures stay cheap to write. `remarks` and `combatEncounters` ride along
//! for completeness but nothing here reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{EnchantmentType, Hero, Size, Tag, Tier};

/// A whole item dump: `{ "data": [...], "version": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items {
    pub data: Vec<Item>,
    #[serde(default)]
    pub version: String,
}

/// One item as fetched, tooltips still free-form English.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub starting_tier: Tier,
    /// Per-tier tooltip lists. Used for tier-range and cooldown derivation;
    /// the canonical compile input is `unified_tooltips`.
    #[serde(default)]
    pub tiers: BTreeMap<Tier, TierTooltips>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub hidden_tags: Vec<String>,
    pub size: Size,
    #[serde(default)]
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub enchantments: Vec<ItemEnchantment>,
    #[serde(default)]
    pub unified_tooltips: Vec<String>,
    #[serde(default)]
    pub remarks: Vec<String>,
    #[serde(default)]
    pub combat_encounters: Vec<CombatEncounter>,
}

impl Item {
    /// Tooltip list for one tier, empty when the tier is absent or locked.
    pub fn tier_tooltips(&self, tier: Tier) -> &[String] {
        self.tiers.get(&tier).map(|t| t.tooltips.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TierTooltips {
    #[serde(default)]
    pub tooltips: Vec<String>,
}

/// An enchantment roll the item can take, with its own tooltip lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEnchantment {
    #[serde(rename = "type")]
    pub kind: EnchantmentType,
    #[serde(default)]
    pub tooltips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatEncounter {
    pub card_id: String,
    pub card_name: String,
}
