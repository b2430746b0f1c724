use serde::{Deserialize, Serialize};

use super::enums::{AttributeType, ChangeType};
use super::target::Target;

/// Events that fire an ability.
///
/// Fieldless variants are pure events; the attribute-change and performed-x
/// variants can narrow themselves with a subject and attribute filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Trigger {
    /// The card's own cooldown fired. Default for bare action lines.
    #[serde(rename = "TTriggerOnCardFired")]
    OnCardFired,

    /// The card was picked during selection. Skeleton default.
    #[serde(rename = "TTriggerOnCardSelected")]
    OnCardSelected,

    #[serde(rename = "TTriggerOnDayStarted")]
    OnDayStarted,

    #[serde(rename = "TTriggerOnFightStarted")]
    OnFightStarted,

    #[serde(rename = "TTriggerOnCardPurchased")]
    OnCardPurchased,

    #[serde(rename = "TTriggerOnCardPerformedHaste", rename_all = "PascalCase")]
    OnCardPerformedHaste {
        #[serde(skip_serializing_if = "Option::is_none")]
        subject: Option<Target>,
    },

    #[serde(rename = "TTriggerOnCardPerformedSlow", rename_all = "PascalCase")]
    OnCardPerformedSlow {
        #[serde(skip_serializing_if = "Option::is_none")]
        subject: Option<Target>,
    },

    /// A player-level attribute moved ("When you Heal", "While you have
    /// Shield").
    #[serde(rename = "TTriggerOnPlayerAttributeChanged", rename_all = "PascalCase")]
    OnPlayerAttributeChanged {
        #[serde(skip_serializing_if = "Option::is_none")]
        subject: Option<Target>,
        #[serde(skip_serializing_if = "Option::is_none")]
        attribute_changed: Option<AttributeType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        change_type: Option<ChangeType>,
    },

    /// A card-level attribute moved ("When your items gain Haste").
    #[serde(rename = "TTriggerOnCardAttributeChanged", rename_all = "PascalCase")]
    OnCardAttributeChanged {
        #[serde(skip_serializing_if = "Option::is_none")]
        subject: Option<Target>,
        #[serde(skip_serializing_if = "Option::is_none")]
        attribute_changed: Option<AttributeType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        change_type: Option<ChangeType>,
    },
}

impl Trigger {
    pub fn on_player_attribute_changed() -> Self {
        Trigger::OnPlayerAttributeChanged {
            subject: None,
            attribute_changed: None,
            change_type: None,
        }
    }

    pub fn on_card_attribute_changed() -> Self {
        Trigger::OnCardAttributeChanged { subject: None, attribute_changed: None, change_type: None }
    }

    /// Mutable access to the subject slot, for variants that have one.
    /// Routing a trigger-subject component into a subjectless variant is a
    /// no-op at the caller.
    pub fn subject_slot(&mut self) -> Option<&mut Option<Target>> {
        match self {
            Trigger::OnCardPerformedHaste { subject }
            | Trigger::OnCardPerformedSlow { subject }
            | Trigger::OnPlayerAttributeChanged { subject, .. }
            | Trigger::OnCardAttributeChanged { subject, .. } => Some(subject),
            _ => None,
        }
    }
}
