use crate::schema::Action;

/// Action verbs, longest first. Keys are spelled the way tooltips spell
/// them: game verbs capitalized, "gain" lowercase because it only ever
/// appears mid-sentence.
static ACTIONS: &[(&str, fn() -> Action)] = &[
    ("Deal damage", Action::player_damage),
    ("Charge", Action::card_charge),
    ("Freeze", Action::card_freeze),
    ("Shield", Action::player_shield_apply),
    ("Haste", Action::card_haste),
    ("Burn", Action::player_burn_apply),
    ("Heal", Action::player_heal),
    ("Slow", Action::card_slow),
    ("gain", Action::player_modify_attribute),
];

/// Map action text to its action: exact match, then substring containment,
/// both case-sensitive. Unmatched text defaults to `PlayerDamage`.
pub fn action_for(text: &str) -> Action {
    for (key, make) in ACTIONS {
        if text == *key || text.contains(key) {
            return make();
        }
    }
    Action::player_damage()
}
