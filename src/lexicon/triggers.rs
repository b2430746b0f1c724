use crate::schema::Trigger;

/// Trigger-phrase prefixes, longest first. "When your" has to outrank
/// "When you" or card-attribute triggers would never be reachable.
static TRIGGERS: &[(&str, fn() -> Trigger)] = &[
    ("The first time", Trigger::on_player_attribute_changed),
    ("At the start", || Trigger::OnDayStarted),
    ("When your", Trigger::on_card_attribute_changed),
    ("While you", Trigger::on_player_attribute_changed),
    ("When you", Trigger::on_player_attribute_changed),
];

/// True when the text opens with a known trigger phrase. The analyzer uses
/// this to decide whether a line splits into trigger + clause at all.
pub fn has_trigger_prefix(text: &str) -> bool {
    TRIGGERS.iter().any(|(prefix, _)| text.starts_with(prefix))
}

/// Map trigger text to its trigger, first matching prefix wins.
/// Unrecognized text (including the analyzer's literal "On cooldown"
/// default) becomes `OnCardFired`.
pub fn trigger_for(text: &str) -> Trigger {
    for (prefix, make) in TRIGGERS {
        if text.starts_with(prefix) {
            return make();
        }
    }
    Trigger::OnCardFired
}
