use crate::schema::{Target, TargetMode, TargetPlayer, TargetSection};

/// Where a subject component merges once resolved.
///
/// This used to be inferred from the target's discriminator string; it is
/// now declared per row. Every current row binds to the action target, and
/// `tests.rs` pins that down, but the trigger-subject arm stays because
/// conditional subjects would need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    ActionTarget,
    TriggerSubject,
}

fn self_card() -> Target {
    Target::card_self()
}

fn neighbors() -> Target {
    Target::positional(TargetMode::Neighbor)
}

fn own_hand() -> Target {
    Target::section(TargetSection::SelfHand)
}

fn opponent() -> Target {
    Target::player(TargetPlayer::Opponent)
}

/// Subject phrases, longest first.
static SUBJECTS: &[(&str, fn() -> Target, Binding)] = &[
    ("adjacent items", neighbors, Binding::ActionTarget),
    ("weapons", own_hand, Binding::ActionTarget),
    ("enemy", opponent, Binding::ActionTarget),
    ("items", own_hand, Binding::ActionTarget),
    ("this", self_card, Binding::ActionTarget),
];

/// Map subject text to a target and its binding: exact match, then
/// substring containment, in table order. The containment pass is knowingly
/// loose ("the items to the left" hits the `items` row). Unmatched text
/// defaults to the self card bound to the action target.
pub fn subject_for(text: &str) -> (Target, Binding) {
    for (key, make, binding) in SUBJECTS {
        if text == *key || text.contains(key) {
            return (make(), *binding);
        }
    }
    (self_card(), Binding::ActionTarget)
}
