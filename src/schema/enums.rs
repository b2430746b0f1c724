//! Closed vocabularies shared across the schema.
//!
//! Every enum here serializes to the exact string the reference dump uses.
//! `Tier` additionally derives `Ord` in upgrade order, which is what makes
//! tier-range derivation and `BTreeMap<Tier, _>` iteration come out in
//! Bronze-to-Legendary order without extra sorting.

use serde::{Deserialize, Serialize};

/// Item upgrade tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Diamond,
    Legendary,
}

impl Tier {
    /// All tiers in upgrade order.
    pub const ALL: [Tier; 5] =
        [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Diamond, Tier::Legendary];
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Diamond => "Diamond",
            Tier::Legendary => "Legendary",
        };
        f.write_str(name)
    }
}

/// Board footprint of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Hero {
    Common,
    Dooley,
    Jules,
    Mak,
    Pygmalien,
    Stelle,
    Vanessa,
}

/// Visible item tags. The hidden-tag vocabulary is open (plain strings);
/// this one is closed by the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    Apparel,
    Aquatic,
    Burn,
    Core,
    Damage,
    Dinosaur,
    Dragon,
    Food,
    Freeze,
    Friend,
    Haste,
    Heal,
    Joy,
    Loot,
    Merchant,
    Poison,
    Potion,
    Property,
    Ray,
    Shield,
    Slow,
    Tech,
    Tool,
    Toy,
    Unsellable,
    Vehicle,
    Weapon,
}

/// The twelve enchantment flavors an item can roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnchantmentType {
    Deadly,
    Fiery,
    Golden,
    Heavy,
    Icy,
    Obsidian,
    Radiant,
    Restorative,
    Shielded,
    Shiny,
    Toxic,
    Turbo,
}

/// Numeric attribute slots on cards and tiers.
///
/// Subset of the dump's full vocabulary: the attributes this compiler emits
/// plus the ones its inputs and fixtures mention. `Custom_*` slots hold
/// card-specific scalars (multiplier progressions land in `Custom_0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    Ammo,
    AmmoMax,
    Burn,
    BurnApplyAmount,
    BuyPrice,
    ChargeAmount,
    CooldownMax,
    CritChance,
    #[serde(rename = "Custom_0")]
    Custom0,
    #[serde(rename = "Custom_1")]
    Custom1,
    DamageAmount,
    DamageCrit,
    Freeze,
    FreezeAmount,
    Gold,
    Haste,
    HasteAmount,
    HealAmount,
    Health,
    HealthMax,
    HealthRegen,
    Income,
    Joy,
    JoyApplyAmount,
    Lifesteal,
    Multicast,
    Poison,
    PoisonApplyAmount,
    ReloadAmount,
    SellPrice,
    Shield,
    ShieldApplyAmount,
    Slow,
    SlowAmount,
}

/// Where an ability is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveIn {
    HandAndStash,
    HandOnly,
}

/// Ability dispatch priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Immediate,
    Highest,
    High,
    Medium,
    Low,
    Lowest,
}

/// Arithmetic applied by attribute-modifying actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Multiply,
    Subtract,
}

/// Positional selector for card targets ("the item to the left", neighbors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetMode {
    AllLeftCards,
    AllRightCards,
    Both,
    LeftCard,
    LeftMostCard,
    Neighbor,
    RightCard,
    RightMostCard,
    TriggerSource,
}

/// Which player a player-target resolves to. `Own` is spelled `Self` on the
/// wire; that name is not legal as a Rust variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetPlayer {
    Opponent,
    Player,
    #[serde(rename = "Self")]
    Own,
    Both,
}

/// Board/hand sections a section target can sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSection {
    AbsolutePlayerHand,
    AllHands,
    OpponentBoard,
    OpponentHand,
    SelfBoard,
    SelfHand,
    SelfHandAndStash,
    SelfNeighbors,
}

/// Direction of an attribute change, for change triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    Gain,
    Loss,
}
