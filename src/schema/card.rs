use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ability::{Ability, Aura};
use super::enums::{AttributeType, EnchantmentType, Hero, Size, Tag, Tier};

/// Schema version stamped on every produced card.
pub const CARD_VERSION: &str = "1.0.0";

/// A fully assembled card, shaped like one entry of the reference dump.
///
/// Maps use `BTreeMap` so serialization order is stable; ability and aura
/// keys are decimal strings ("0", "1", ...) because that is what the dump
/// uses and what `{ability.N}` placeholders index into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Card {
    #[serde(rename = "$type")]
    pub card_type: CardType,
    pub id: String,
    #[serde(rename = "Type")]
    pub kind: CardKind,
    pub version: String,
    pub audio_key: String,
    pub size: Size,
    pub starting_tier: Tier,
    pub tags: Vec<Tag>,
    pub hidden_tags: Vec<String>,
    pub heroes: Vec<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<AttributeType, f64>>,
    pub tiers: BTreeMap<Tier, TierInfo>,
    pub abilities: BTreeMap<String, Ability>,
    pub auras: BTreeMap<String, Aura>,
    pub enchantments: BTreeMap<EnchantmentType, Enchantment>,
    pub localization: Localization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    TCardItem,
    TCardSkill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Item,
    Skill,
}

/// Per-tier numbers and the ids live at that tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TierInfo {
    #[serde(default)]
    pub attributes: BTreeMap<AttributeType, f64>,
    #[serde(default)]
    pub ability_ids: Vec<String>,
    #[serde(default)]
    pub aura_ids: Vec<String>,
    #[serde(default)]
    pub tooltip_ids: Vec<u32>,
}

/// One enchantment's compiled fragment. Present for every enchantment the
/// item lists, even when its tooltip list was empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Enchantment {
    #[serde(default)]
    pub attributes: BTreeMap<AttributeType, f64>,
    #[serde(default)]
    pub abilities: BTreeMap<String, Ability>,
    #[serde(default)]
    pub auras: BTreeMap<String, Aura>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub hidden_tags: Vec<String>,
    #[serde(default)]
    pub localization: Localization,
    pub has_abilities: bool,
    pub has_auras: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Localization {
    pub title: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub flavor_text: Option<LocalizedText>,
    #[serde(default)]
    pub tooltips: Vec<Tooltip>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub text: String,
}

impl LocalizedText {
    pub fn new(text: impl Into<String>) -> Self {
        LocalizedText { key: None, text: text.into() }
    }
}

/// A display tooltip line, with numeric clauses replaced by placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tooltip {
    pub content: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_type: Option<String>,
    pub prerequisites: Option<serde_json::Value>,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Tooltip { content: LocalizedText::new(text), tooltip_type: None, prerequisites: None }
    }
}
