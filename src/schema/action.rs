use serde::{Deserialize, Serialize};

use super::enums::{AttributeType, Operation};
use super::target::Target;
use super::value::Value;

/// What an ability or aura does when it fires.
///
/// Player-status variants apply a stack of something to a player; card-tempo
/// variants act on other cards' cooldowns; the modify-attribute pair is the
/// general arithmetic form. The `Aura*` variants are the always-on flavors
/// used inside `Aura`, never inside `Ability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Action {
    #[serde(rename = "TActionPlayerDamage", rename_all = "PascalCase")]
    PlayerDamage {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionPlayerHeal", rename_all = "PascalCase")]
    PlayerHeal {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionPlayerShieldApply", rename_all = "PascalCase")]
    PlayerShieldApply {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionPlayerBurnApply", rename_all = "PascalCase")]
    PlayerBurnApply {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionPlayerPoisonApply", rename_all = "PascalCase")]
    PlayerPoisonApply {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionCardCharge", rename_all = "PascalCase")]
    CardCharge {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionCardFreeze", rename_all = "PascalCase")]
    CardFreeze {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionCardSlow", rename_all = "PascalCase")]
    CardSlow {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionCardHaste", rename_all = "PascalCase")]
    CardHaste {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TActionCardReload", rename_all = "PascalCase")]
    CardReload {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    /// Arithmetic on a player attribute ("gain 1 Income").
    #[serde(rename = "TActionPlayerModifyAttribute", rename_all = "PascalCase")]
    PlayerModifyAttribute {
        #[serde(skip_serializing_if = "Option::is_none")]
        attribute_type: Option<AttributeType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        operation: Option<Operation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<Duration>,
    },

    /// Arithmetic on a card attribute ("this gains 5 damage"). Skeleton
    /// default for the heuristic path.
    #[serde(rename = "TActionCardModifyAttribute", rename_all = "PascalCase")]
    CardModifyAttribute {
        #[serde(skip_serializing_if = "Option::is_none")]
        attribute_type: Option<AttributeType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        operation: Option<Operation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<Duration>,
    },

    #[serde(rename = "TAuraActionPlayerModifyAttribute", rename_all = "PascalCase")]
    AuraPlayerModifyAttribute {
        #[serde(skip_serializing_if = "Option::is_none")]
        attribute_type: Option<AttributeType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        operation: Option<Operation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    #[serde(rename = "TAuraActionCardModifyAttribute", rename_all = "PascalCase")]
    AuraCardModifyAttribute {
        #[serde(skip_serializing_if = "Option::is_none")]
        attribute_type: Option<AttributeType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        operation: Option<Operation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },
}

impl Action {
    pub fn player_damage() -> Self {
        Action::PlayerDamage { value: None, target: None }
    }

    pub fn player_heal() -> Self {
        Action::PlayerHeal { value: None, target: None }
    }

    pub fn player_shield_apply() -> Self {
        Action::PlayerShieldApply { value: None, target: None }
    }

    pub fn player_burn_apply() -> Self {
        Action::PlayerBurnApply { value: None, target: None }
    }

    pub fn player_poison_apply() -> Self {
        Action::PlayerPoisonApply { value: None, target: None }
    }

    pub fn card_charge() -> Self {
        Action::CardCharge { value: None, target: None }
    }

    pub fn card_freeze() -> Self {
        Action::CardFreeze { value: None, target: None }
    }

    pub fn card_slow() -> Self {
        Action::CardSlow { value: None, target: None }
    }

    pub fn card_haste() -> Self {
        Action::CardHaste { value: None, target: None }
    }

    pub fn card_reload() -> Self {
        Action::CardReload { value: None, target: None }
    }

    pub fn player_modify_attribute() -> Self {
        Action::PlayerModifyAttribute {
            attribute_type: None,
            operation: None,
            value: None,
            target: None,
            duration: None,
        }
    }

    pub fn card_modify_attribute() -> Self {
        Action::CardModifyAttribute {
            attribute_type: None,
            operation: None,
            value: None,
            target: None,
            duration: None,
        }
    }

    /// Every variant carries an amount slot.
    pub fn set_value(&mut self, v: Value) {
        match self {
            Action::PlayerDamage { value, .. }
            | Action::PlayerHeal { value, .. }
            | Action::PlayerShieldApply { value, .. }
            | Action::PlayerBurnApply { value, .. }
            | Action::PlayerPoisonApply { value, .. }
            | Action::CardCharge { value, .. }
            | Action::CardFreeze { value, .. }
            | Action::CardSlow { value, .. }
            | Action::CardHaste { value, .. }
            | Action::CardReload { value, .. }
            | Action::PlayerModifyAttribute { value, .. }
            | Action::CardModifyAttribute { value, .. }
            | Action::AuraPlayerModifyAttribute { value, .. }
            | Action::AuraCardModifyAttribute { value, .. } => *value = Some(v),
        }
    }

    /// Likewise for the target slot.
    pub fn set_target(&mut self, t: Target) {
        match self {
            Action::PlayerDamage { target, .. }
            | Action::PlayerHeal { target, .. }
            | Action::PlayerShieldApply { target, .. }
            | Action::PlayerBurnApply { target, .. }
            | Action::PlayerPoisonApply { target, .. }
            | Action::CardCharge { target, .. }
            | Action::CardFreeze { target, .. }
            | Action::CardSlow { target, .. }
            | Action::CardHaste { target, .. }
            | Action::CardReload { target, .. }
            | Action::PlayerModifyAttribute { target, .. }
            | Action::CardModifyAttribute { target, .. }
            | Action::AuraPlayerModifyAttribute { target, .. }
            | Action::AuraCardModifyAttribute { target, .. } => *target = Some(t),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Action::PlayerDamage { value, .. }
            | Action::PlayerHeal { value, .. }
            | Action::PlayerShieldApply { value, .. }
            | Action::PlayerBurnApply { value, .. }
            | Action::PlayerPoisonApply { value, .. }
            | Action::CardCharge { value, .. }
            | Action::CardFreeze { value, .. }
            | Action::CardSlow { value, .. }
            | Action::CardHaste { value, .. }
            | Action::CardReload { value, .. }
            | Action::PlayerModifyAttribute { value, .. }
            | Action::CardModifyAttribute { value, .. }
            | Action::AuraPlayerModifyAttribute { value, .. }
            | Action::AuraCardModifyAttribute { value, .. } => value.as_ref(),
        }
    }

    pub fn target(&self) -> Option<&Target> {
        match self {
            Action::PlayerDamage { target, .. }
            | Action::PlayerHeal { target, .. }
            | Action::PlayerShieldApply { target, .. }
            | Action::PlayerBurnApply { target, .. }
            | Action::PlayerPoisonApply { target, .. }
            | Action::CardCharge { target, .. }
            | Action::CardFreeze { target, .. }
            | Action::CardSlow { target, .. }
            | Action::CardHaste { target, .. }
            | Action::CardReload { target, .. }
            | Action::PlayerModifyAttribute { target, .. }
            | Action::CardModifyAttribute { target, .. }
            | Action::AuraPlayerModifyAttribute { target, .. }
            | Action::AuraCardModifyAttribute { target, .. } => target.as_ref(),
        }
    }

    /// Replace this action with `next`, keeping any value/target that was
    /// already routed here and that `next` has not set itself.
    pub fn replace_with(&mut self, mut next: Action) {
        if next.value().is_none() {
            if let Some(v) = self.value().cloned() {
                next.set_value(v);
            }
        }
        if next.target().is_none() {
            if let Some(t) = self.target().cloned() {
                next.set_target(t);
            }
        }
        *self = next;
    }

    /// The tier attribute this action's amount is read from, when progressions
    /// are routed to per-tier attributes instead of inline values.
    pub fn amount_attribute(&self) -> Option<AttributeType> {
        match self {
            Action::PlayerDamage { .. } => Some(AttributeType::DamageAmount),
            Action::PlayerHeal { .. } => Some(AttributeType::HealAmount),
            Action::PlayerShieldApply { .. } => Some(AttributeType::ShieldApplyAmount),
            Action::PlayerBurnApply { .. } => Some(AttributeType::BurnApplyAmount),
            Action::PlayerPoisonApply { .. } => Some(AttributeType::PoisonApplyAmount),
            Action::CardCharge { .. } => Some(AttributeType::ChargeAmount),
            Action::CardFreeze { .. } => Some(AttributeType::FreezeAmount),
            Action::CardSlow { .. } => Some(AttributeType::SlowAmount),
            Action::CardHaste { .. } => Some(AttributeType::HasteAmount),
            Action::CardReload { .. } => Some(AttributeType::ReloadAmount),
            Action::PlayerModifyAttribute { attribute_type, .. }
            | Action::CardModifyAttribute { attribute_type, .. }
            | Action::AuraPlayerModifyAttribute { attribute_type, .. }
            | Action::AuraCardModifyAttribute { attribute_type, .. } => *attribute_type,
        }
    }
}

/// How long a temporary attribute change lasts ("for the fight").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Duration {
    #[serde(rename = "TDeterminantDuration", rename_all = "PascalCase")]
    Determinant { duration_type: DurationKind },
}

impl Duration {
    pub fn until_end_of_combat() -> Self {
        Duration::Determinant { duration_type: DurationKind::UntilEndOfCombat }
    }

    pub fn until_end_of_day() -> Self {
        Duration::Determinant { duration_type: DurationKind::UntilEndOfDay }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationKind {
    UntilEndOfCombat,
    UntilEndOfDay,
}
