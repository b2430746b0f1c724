use super::*;
use crate::item::Item;
use crate::schema::{Action, Size, Target, Tier, Trigger, Value};
use crate::{LineContext, TooltipCompiler};

#[test]
fn analyzes_bare_action_clauses() {
    let cases: Vec<((&str, &str, &str, &str), &str)> = vec![
        (("On cooldown", "Burn", "target", "(2/3)."), "Burn (2/3)."),
        (("On cooldown", "Heal", "target", "10."), "Heal 10."),
        (("On cooldown", "Shield", "target", "equal to nothing"), "Shield equal to nothing"),
        (("On cooldown", "slow", "enemies", "2 seconds"), "slow enemies for 2 seconds"),
        (("On cooldown", "haste", "weapons", "(1 » 2)."), "weapons haste (1 » 2)."),
    ];
    for ((trigger, action, subject, modifier), input) in cases {
        let got = analyze(input).unwrap();
        assert_eq!(got.trigger, trigger, "input: {input}");
        assert_eq!(got.action, action, "input: {input}");
        assert_eq!(got.subject, subject, "input: {input}");
        assert_eq!(got.modifiers, vec![modifier.to_string()], "input: {input}");
    }
}

#[test]
fn splits_trigger_phrases_at_the_first_comma() {
    let got = analyze("When you Heal, heal target for 5.").unwrap();
    assert_eq!(got.trigger, "When you Heal");
    assert_eq!(got.action, "heal");
    assert_eq!(got.subject, "target");
    assert_eq!(got.modifiers, vec!["5.".to_string()]);
}

#[test]
fn trigger_without_comma_does_not_panic() {
    // The whole line becomes the trigger and the leftover clause is empty,
    // which no template matches. An error, never a crash.
    let err = analyze("While you have Shield burn 5").unwrap_err();
    assert!(matches!(err, crate::CompileError::UnrecognizedClause { .. }));
}

#[test]
fn unknown_clauses_are_rejected_with_their_text() {
    let err = analyze("Sells for gold at dawn.").unwrap_err();
    match err {
        crate::CompileError::UnrecognizedClause { clause } => {
            assert_eq!(clause, "Sells for gold at dawn.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn builds_the_default_shape_for_a_bare_burn_line() {
    let analyzed = analyze("Burn (2/3).").unwrap();
    let ability = build_ability(&analyzed, "Burn (2/3).", "0");

    assert_eq!(ability.id, "0");
    assert!(matches!(ability.trigger, Trigger::OnCardFired));
    assert!(matches!(ability.action, Action::PlayerBurnApply { .. }));
    assert_eq!(ability.action.value(), Some(&Value::fixed(2.0)));
    assert_eq!(ability.action.target(), Some(&Target::card_self()));
    assert_eq!(ability.internal_description.as_deref(), Some("Burn (2/3)."));
    assert!(ability.prerequisites.is_none());
}

#[test]
fn trigger_phrase_replaces_the_skeleton_trigger() {
    let analyzed = analyze("When you Heal, heal target for 5.").unwrap();
    let ability = build_ability(&analyzed, "When you Heal, heal target for 5.", "0");

    assert!(matches!(ability.trigger, Trigger::OnPlayerAttributeChanged { .. }));
    assert!(matches!(ability.action, Action::PlayerHeal { .. }));
    assert_eq!(ability.action.value(), Some(&Value::fixed(5.0)));
}

/// "enemies" is in the clause vocabulary but has no subject row ("enemy"
/// is not a substring of it), so it resolves to the self card. Pinned, not
/// endorsed.
#[test]
fn enemies_subject_falls_back_to_self() {
    let analyzed = analyze("slow enemies for 2 seconds").unwrap();
    let ability = build_ability(&analyzed, "slow enemies for 2 seconds", "0");

    assert!(matches!(ability.action, Action::CardSlow { .. }));
    assert_eq!(ability.action.target(), Some(&Target::card_self()));
    assert_eq!(ability.action.value(), Some(&Value::fixed(2.0)));
}

#[test]
fn numberless_modifier_defaults_to_one() {
    let analyzed = analyze("freeze everything").unwrap();
    let ability = build_ability(&analyzed, "freeze everything", "0");
    assert_eq!(ability.action.value(), Some(&Value::fixed(1.0)));
}

fn fixture_item() -> Item {
    Item {
        id: "itm_test".into(),
        name: "Test Kettle".into(),
        starting_tier: Tier::Bronze,
        tiers: Default::default(),
        tags: vec![],
        hidden_tags: vec![],
        size: Size::Small,
        heroes: vec![],
        enchantments: vec![],
        unified_tooltips: vec![],
        remarks: vec![],
        combat_encounters: vec![],
    }
}

#[test]
fn compiler_interface_keys_the_ability_at_the_current_index() {
    let item = fixture_item();
    let unlocked = [Tier::Bronze, Tier::Silver];
    let cx = LineContext { item: &item, unlocked: &unlocked, ability_index: 2, aura_index: 0 };

    let fragment = HeuristicCompiler.compile_line("Burn (2/3).", &cx).unwrap();
    assert_eq!(fragment.parts, crate::FragmentParts::ABILITIES);
    assert_eq!(fragment.abilities.len(), 1);
    let ability = &fragment.abilities["2"];
    assert_eq!(ability.id, "2");
    assert_eq!(ability.internal_name, "Test Kettle Ability 2");
    assert!(fragment.auras.is_empty());
    assert!(fragment.tier_attributes.is_empty());
}
