use serde::{Deserialize, Serialize};

use super::enums::{Tag, TargetMode, TargetPlayer, TargetSection};

/// Card/player selectors. The same union serves as an action's `Target` and
/// as a trigger's `Subject`; which of those a lexicon row feeds is decided by
/// the row's binding tag, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Target {
    /// The card the ability lives on.
    #[serde(rename = "TTargetCardSelf", rename_all = "PascalCase")]
    CardSelf {
        #[serde(skip_serializing_if = "Option::is_none")]
        conditions: Option<Conditions>,
    },

    /// Cards picked by board position relative to this one.
    #[serde(rename = "TTargetCardPositional", rename_all = "PascalCase")]
    CardPositional {
        target_mode: TargetMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        include_origin: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        conditions: Option<Conditions>,
    },

    /// Every card in a board/hand section.
    #[serde(rename = "TTargetCardSection", rename_all = "PascalCase")]
    CardSection {
        target_section: TargetSection,
        #[serde(skip_serializing_if = "Option::is_none")]
        exclude_self: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        conditions: Option<Conditions>,
    },

    /// A player rather than a card.
    #[serde(rename = "TTargetPlayer", rename_all = "PascalCase")]
    Player {
        target_mode: TargetPlayer,
        #[serde(skip_serializing_if = "Option::is_none")]
        conditions: Option<Conditions>,
    },
}

impl Target {
    pub fn card_self() -> Self {
        Target::CardSelf { conditions: None }
    }

    pub fn positional(target_mode: TargetMode) -> Self {
        Target::CardPositional { target_mode, include_origin: None, conditions: None }
    }

    pub fn section(target_section: TargetSection) -> Self {
        Target::CardSection { target_section, exclude_self: None, conditions: None }
    }

    pub fn player(target_mode: TargetPlayer) -> Self {
        Target::Player { target_mode, conditions: None }
    }

    /// Attach a condition, replacing any existing one.
    pub fn with_conditions(mut self, c: Conditions) -> Self {
        match &mut self {
            Target::CardSelf { conditions }
            | Target::CardPositional { conditions, .. }
            | Target::CardSection { conditions, .. }
            | Target::Player { conditions, .. } => *conditions = Some(c),
        }
        self
    }
}

/// Target filters. Only the tag conditional is produced today ("the Core"
/// resolves to a tag filter on Dooley items).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Conditions {
    #[serde(rename = "TCardConditionalTag", rename_all = "PascalCase")]
    HasTag { tags: Vec<Tag>, operator: ConditionsOperator },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionsOperator {
    Any,
    None,
}
