use serde::{Deserialize, Serialize};

use super::action::Action;
use super::enums::{ActiveIn, Priority};
use super::trigger::Trigger;

/// A triggered effect on a card.
///
/// `InternalDescription` keeps the tooltip text the ability was compiled
/// from; `Prerequisites` and `VFXConfig` are carried as opaque nulls since
/// nothing this compiler produces fills them (the dump spells them out, so
/// they serialize even when empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ability {
    pub id: String,
    pub trigger: Trigger,
    pub active_in: ActiveIn,
    pub action: Action,
    pub prerequisites: Option<serde_json::Value>,
    pub priority: Priority,
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub internal_description: Option<String>,
    #[serde(default)]
    pub migration_data: String,
    #[serde(rename = "VFXConfig")]
    pub vfx_config: Option<serde_json::Value>,
    #[serde(default)]
    pub translation_key: String,
}

/// An always-on effect: no cooldown, no trigger. Enchantment stat bonuses
/// and passive "you have ..." lines compile to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Aura {
    pub id: String,
    pub active_in: ActiveIn,
    pub action: Action,
    pub prerequisites: Option<serde_json::Value>,
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub internal_description: Option<String>,
    #[serde(default)]
    pub migration_data: String,
    #[serde(rename = "VFXConfig")]
    pub vfx_config: Option<serde_json::Value>,
    #[serde(default)]
    pub translation_key: String,
}
