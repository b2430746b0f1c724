use super::*;
use crate::item::Item;
use crate::schema::{
    Action, AttributeType, Duration, Operation, Size, Target, TargetMode, TargetPlayer,
    TargetSection, Tier, Trigger, Value,
};
use crate::{Fragment, FragmentParts, LineContext, TooltipCompiler};

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

fn compile(line: &str, unlocked: &[Tier]) -> Fragment {
    let item = fixture_item();
    let cx = LineContext { item: &item, unlocked, ability_index: 0, aura_index: 0 };
    GrammarCompiler.compile_line(line, &cx).unwrap()
}

#[test]
fn spreads_a_four_step_damage_progression() {
    let unlocked = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Diamond];
    let fragment = compile("Deal (8 » 12 » 16 » 20) damage.", &unlocked);

    assert_eq!(fragment.parts, FragmentParts::ABILITIES | FragmentParts::TIER_ATTRIBUTES);
    let ability = &fragment.abilities["0"];
    assert!(matches!(ability.action, Action::PlayerDamage { .. }));
    assert_eq!(ability.action.target(), Some(&Target::player(TargetPlayer::Opponent)));
    assert_eq!(
        ability.action.value(),
        Some(&Value::CardAttribute {
            target: Target::card_self(),
            attribute_type: AttributeType::DamageAmount,
            default_value: 0.0,
            modifier: None,
        })
    );
    assert_eq!(ability.internal_description.as_deref(), Some("Deal (8 » 12 » 16 » 20) damage."));

    let per_tier: Vec<f64> = unlocked
        .iter()
        .map(|t| fragment.tier_attributes[t][&AttributeType::DamageAmount])
        .collect();
    assert_eq!(per_tier, vec![8.0, 12.0, 16.0, 20.0]);
}

#[test]
fn trigger_phrase_sets_the_ability_trigger() {
    let unlocked = [Tier::Bronze, Tier::Silver];
    let fragment =
        compile("When you Heal, this gains ( +5 » +10 ) damage for the fight.", &unlocked);

    let ability = &fragment.abilities["0"];
    assert!(matches!(ability.trigger, Trigger::OnPlayerAttributeChanged { .. }));
    let Action::CardModifyAttribute { attribute_type, operation, target, duration, .. } =
        &ability.action
    else {
        panic!("unexpected action: {:?}", ability.action);
    };
    assert_eq!(*attribute_type, Some(AttributeType::DamageAmount));
    assert_eq!(*operation, Some(Operation::Add));
    assert_eq!(target.as_ref(), Some(&Target::card_self()));
    assert_eq!(*duration, Some(Duration::until_end_of_combat()));

    assert_eq!(fragment.tier_attributes[&Tier::Bronze][&AttributeType::Custom0], 5.0);
    assert_eq!(fragment.tier_attributes[&Tier::Silver][&AttributeType::Custom0], 10.0);
}

#[test]
fn cooldown_lines_become_per_tier_milliseconds() {
    let unlocked = [Tier::Bronze, Tier::Silver, Tier::Gold];
    let fragment = compile("Cooldown (10/9/8) seconds", &unlocked);

    assert_eq!(fragment.parts, FragmentParts::TIER_ATTRIBUTES);
    assert!(fragment.abilities.is_empty());
    assert!(fragment.auras.is_empty());
    assert_eq!(fragment.tier_attributes[&Tier::Bronze][&AttributeType::CooldownMax], 10000.0);
    assert_eq!(fragment.tier_attributes[&Tier::Silver][&AttributeType::CooldownMax], 9000.0);
    assert_eq!(fragment.tier_attributes[&Tier::Gold][&AttributeType::CooldownMax], 8000.0);
}

#[test]
fn multiplier_references_read_the_source_value() {
    let unlocked = [Tier::Bronze, Tier::Silver];
    let fragment =
        compile("Shield equal to ( 1x » 2x ) the value of the adjacent items.", &unlocked);

    let ability = &fragment.abilities["0"];
    assert!(matches!(ability.action, Action::PlayerShieldApply { .. }));
    let Some(Value::CardAttribute { target, attribute_type, modifier, .. }) =
        ability.action.value()
    else {
        panic!("unexpected value: {:?}", ability.action.value());
    };
    assert_eq!(target, &Target::positional(TargetMode::Neighbor));
    assert_eq!(*attribute_type, AttributeType::SellPrice);
    let modifier = modifier.as_deref().unwrap();
    assert_eq!(modifier.modify_mode, Operation::Multiply);

    // The per-tier multiplier parks in Custom_0 for the modifier to read.
    assert_eq!(fragment.tier_attributes[&Tier::Bronze][&AttributeType::Custom0], 1.0);
    assert_eq!(fragment.tier_attributes[&Tier::Silver][&AttributeType::Custom0], 2.0);
}

#[test]
fn count_phrases_freeze_the_opponents_board() {
    let unlocked = [Tier::Bronze, Tier::Silver];
    let fragment = compile("Freeze 1 item for (1 » 2) second(s).", &unlocked);

    let ability = &fragment.abilities["0"];
    assert!(matches!(ability.action, Action::CardFreeze { .. }));
    assert_eq!(ability.action.target(), Some(&Target::section(TargetSection::OpponentHand)));
    assert_eq!(fragment.tier_attributes[&Tier::Bronze][&AttributeType::FreezeAmount], 1000.0);
    assert_eq!(fragment.tier_attributes[&Tier::Silver][&AttributeType::FreezeAmount], 2000.0);
}

#[test]
fn bare_numbers_repeat_across_unlocked_tiers() {
    let unlocked = [Tier::Silver, Tier::Gold, Tier::Diamond];
    let fragment = compile("Burn 5.", &unlocked);

    let ability = &fragment.abilities["0"];
    assert!(matches!(ability.action, Action::PlayerBurnApply { .. }));
    assert_eq!(ability.action.target(), Some(&Target::player(TargetPlayer::Opponent)));
    for tier in &unlocked {
        assert_eq!(fragment.tier_attributes[tier][&AttributeType::BurnApplyAmount], 5.0);
    }
}

#[test]
fn player_auras_spread_their_numbers() {
    let unlocked = [Tier::Bronze, Tier::Silver];
    let fragment = compile("You have ( +20 » +40 ) Max Health.", &unlocked);

    assert_eq!(fragment.parts, FragmentParts::AURAS | FragmentParts::TIER_ATTRIBUTES);
    assert!(fragment.abilities.is_empty());
    let aura = &fragment.auras["0"];
    let Action::AuraPlayerModifyAttribute { attribute_type, operation, target, .. } = &aura.action
    else {
        panic!("unexpected action: {:?}", aura.action);
    };
    assert_eq!(*attribute_type, Some(AttributeType::HealthMax));
    assert_eq!(*operation, Some(Operation::Add));
    assert_eq!(target.as_ref(), Some(&Target::player(TargetPlayer::Own)));
    assert_eq!(fragment.tier_attributes[&Tier::Bronze][&AttributeType::Custom0], 20.0);
    assert_eq!(fragment.tier_attributes[&Tier::Silver][&AttributeType::Custom0], 40.0);
}

#[test]
fn group_auras_target_the_named_section() {
    let unlocked = [Tier::Bronze, Tier::Silver];
    let fragment = compile("Your weapons have (+20% » +30%) Crit Chance.", &unlocked);

    let aura = &fragment.auras["0"];
    let Action::AuraCardModifyAttribute { attribute_type, target, .. } = &aura.action else {
        panic!("unexpected action: {:?}", aura.action);
    };
    assert_eq!(*attribute_type, Some(AttributeType::CritChance));
    assert_eq!(target.as_ref(), Some(&Target::section(TargetSection::SelfHand)));
    assert_eq!(fragment.tier_attributes[&Tier::Bronze][&AttributeType::Custom0], 20.0);
    assert_eq!(fragment.tier_attributes[&Tier::Silver][&AttributeType::Custom0], 30.0);
}

#[test]
fn aura_lines_key_at_the_current_aura_index() {
    let item = fixture_item();
    let unlocked = [Tier::Bronze, Tier::Silver];
    let cx = LineContext { item: &item, unlocked: &unlocked, ability_index: 1, aura_index: 3 };

    let fragment =
        GrammarCompiler.compile_line("You have ( +20 » +40 ) Max Health.", &cx).unwrap();
    let aura = &fragment.auras["3"];
    assert_eq!(aura.id, "3");
    assert_eq!(aura.internal_name, "Test Kettle Aura 3");
}

#[test]
fn lines_outside_the_grammar_are_structural_failures() {
    let item = fixture_item();
    let unlocked = [Tier::Bronze];
    let cx = LineContext { item: &item, unlocked: &unlocked, ability_index: 0, aura_index: 0 };

    let err = GrammarCompiler.compile_line("Sells for gold at dawn.", &cx).unwrap_err();
    match err {
        crate::CompileError::StructuralParseFailure { line, .. } => {
            assert_eq!(line, "Sells for gold at dawn.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
