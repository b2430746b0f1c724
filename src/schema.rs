//! Typed card schema.
//!
//! This module defines the output object graph: `Card` and everything hanging
//! off it (`Ability`, `Aura`, `Trigger`, `Action`, `Target`, `Value`, tier
//! data, localization). The shapes mirror the reference JSON dump the compiler
//! is diffed against, so serde attributes matter as much as the Rust types:
//!
//! - tagged unions carry a `$type` discriminator (`#[serde(tag = "$type")]`),
//! - field names are PascalCase on the wire,
//! - optional fields are omitted when `None`, except the handful the dump
//!   always spells out as `null` (`Prerequisites`, `FlavorText`).
//!
//! The unions are real sum types: a variant only declares the fields that are
//! legal for it, so e.g. a `CardCharge` action cannot carry an attribute
//! operation. Where the heuristic tables need to know how a component merges
//! (action target vs trigger subject) that is an explicit tag on the table
//! row, not something derived from the discriminator string.

#[path = "schema/ability.rs"]
mod ability;
#[path = "schema/action.rs"]
mod action;
#[path = "schema/card.rs"]
mod card;
#[path = "schema/enums.rs"]
mod enums;
#[path = "schema/target.rs"]
mod target;
#[path = "schema/trigger.rs"]
mod trigger;
#[path = "schema/value.rs"]
mod value;

pub use ability::{Ability, Aura};
pub use action::{Action, Duration, DurationKind};
pub use card::{
    CARD_VERSION, Card, CardKind, CardType, Enchantment, Localization, LocalizedText, TierInfo,
    Tooltip,
};
pub use enums::{
    ActiveIn, AttributeType, ChangeType, EnchantmentType, Hero, Operation, Priority, Size, Tag,
    TargetMode, TargetPlayer, TargetSection, Tier,
};
pub use target::{Conditions, ConditionsOperator, Target};
pub use trigger::Trigger;
pub use value::{Modifier, Value};
