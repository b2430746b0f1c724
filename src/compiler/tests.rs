use std::collections::BTreeMap;

use super::*;
use crate::CompileError;
use crate::grammar::GrammarCompiler;
use crate::heuristic::HeuristicCompiler;
use crate::item::{Item, ItemEnchantment, TierTooltips};
use crate::schema::{AttributeType, EnchantmentType, Size, Tier, Value};

fn tier(tooltips: &[&str]) -> TierTooltips {
    TierTooltips { tooltips: tooltips.iter().map(|s| s.to_string()).collect() }
}

fn fixture_item() -> Item {
    let mut tiers = BTreeMap::new();
    tiers.insert(Tier::Bronze, tier(&["Cooldown 10 seconds", "Deal 8 damage."]));
    tiers.insert(Tier::Silver, tier(&["Cooldown 9 seconds", "Deal 12 damage."]));
    Item {
        id: "itm_kettle".into(),
        name: "Test Kettle".into(),
        starting_tier: Tier::Bronze,
        tiers,
        tags: vec![],
        hidden_tags: vec![],
        size: Size::Small,
        heroes: vec![],
        enchantments: vec![],
        unified_tooltips: vec!["Deal (8 » 12) damage.".into(), "Burn (1/2).".into()],
        remarks: vec![],
        combat_encounters: vec![],
    }
}

#[test]
fn tier_range_runs_from_starting_tier_over_nonempty_lists() {
    let item = fixture_item();
    assert_eq!(tier_range(&item), vec![Tier::Bronze, Tier::Silver]);

    let mut item = fixture_item();
    item.starting_tier = Tier::Silver;
    assert_eq!(tier_range(&item), vec![Tier::Silver]);

    item.tiers.clear();
    assert!(tier_range(&item).is_empty());
}

#[test]
fn parses_cooldown_seconds_into_milliseconds() {
    let cases: Vec<(u64, &str)> = vec![
        (6000, "Cooldown 6 seconds"),
        (7500, "Cooldown 7.5 seconds"),
        (10000, "Cooldown (10/9/8) seconds"),
    ];
    for (expected, input) in cases {
        assert_eq!(parse_cooldown(input).unwrap(), expected, "input: {input}");
    }
}

#[test]
fn cooldown_errors_are_distinct_and_carry_the_line() {
    let err = parse_cooldown("Reload 2 ammo").unwrap_err();
    assert!(matches!(err, CompileError::MissingCooldown { .. }));

    let err = parse_cooldown("Cooldown ? seconds").unwrap_err();
    match err {
        CompileError::MissingNumber { line } => assert_eq!(line, "Cooldown ? seconds"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn derives_cooldown_seeds_per_tier() {
    let item = fixture_item();
    let tiers = derive_tiers(&item).unwrap();
    assert_eq!(tiers[&Tier::Bronze].attributes[&AttributeType::CooldownMax], 10000.0);
    assert_eq!(tiers[&Tier::Silver].attributes[&AttributeType::CooldownMax], 9000.0);
}

#[test]
fn passive_items_derive_bare_tier_infos() {
    let mut item = fixture_item();
    for t in item.tiers.values_mut() {
        t.tooltips.retain(|l| !l.contains("Cooldown"));
    }
    let tiers = derive_tiers(&item).unwrap();
    assert!(tiers[&Tier::Bronze].attributes.is_empty());
    assert!(tiers[&Tier::Silver].attributes.is_empty());
}

#[test]
fn assembles_a_card_with_the_grammar_strategy() {
    let item = fixture_item();
    let (card, metrics) = assemble(&item, &GrammarCompiler).unwrap();

    assert_eq!(card.id, "itm_kettle");
    assert_eq!(card.localization.title.as_ref().unwrap().text, "Test Kettle");
    assert_eq!(card.abilities.len(), 2);
    assert!(card.auras.is_empty());

    // Cooldown seeds survive the fold; progression values land beside them.
    let bronze = &card.tiers[&Tier::Bronze];
    assert_eq!(bronze.attributes[&AttributeType::CooldownMax], 10000.0);
    assert_eq!(bronze.attributes[&AttributeType::DamageAmount], 8.0);
    assert_eq!(bronze.attributes[&AttributeType::BurnApplyAmount], 1.0);
    let silver = &card.tiers[&Tier::Silver];
    assert_eq!(silver.attributes[&AttributeType::DamageAmount], 12.0);
    assert_eq!(silver.attributes[&AttributeType::BurnApplyAmount], 2.0);

    assert_eq!(bronze.ability_ids, ["0", "1"]);
    assert_eq!(bronze.tooltip_ids, [0u32, 1]);

    let texts: Vec<&str> =
        card.localization.tooltips.iter().map(|t| t.content.text.as_str()).collect();
    assert_eq!(texts, ["Deal {ability.0} damage.", "Burn {ability.1}."]);

    assert_eq!(metrics.lines, 2);
    assert_eq!(metrics.ability_lines, 2);
    assert!(metrics.skipped.is_empty());
}

#[test]
fn grammar_rejections_skip_the_line_and_land_in_metrics() {
    let mut item = fixture_item();
    item.unified_tooltips.push("Sells for gold at dawn.".into());
    let (card, metrics) = assemble(&item, &GrammarCompiler).unwrap();

    assert_eq!(card.abilities.len(), 2);
    assert_eq!(card.localization.tooltips.len(), 2);
    assert_eq!(metrics.skipped.len(), 1);
    assert_eq!(metrics.skipped[0].line, "Sells for gold at dawn.");
}

#[test]
fn heuristic_rejections_abort_the_item() {
    let mut item = fixture_item();
    item.unified_tooltips = vec!["Sells for gold at dawn.".into()];
    let err = assemble(&item, &HeuristicCompiler).unwrap_err();
    assert!(matches!(err, CompileError::UnrecognizedClause { .. }));
}

#[test]
fn heuristic_path_writes_literal_values_and_no_tier_attributes() {
    let mut item = fixture_item();
    item.unified_tooltips = vec!["Burn (2/3).".into()];
    let (card, _) = assemble(&item, &HeuristicCompiler).unwrap();

    let ability = &card.abilities["0"];
    assert_eq!(ability.action.value(), Some(&Value::fixed(2.0)));
    // Only the cooldown seed remains at each tier.
    assert_eq!(card.tiers[&Tier::Bronze].attributes.len(), 1);
    assert_eq!(card.localization.tooltips[0].content.text, "Burn {ability.0}.");
}

#[test]
fn empty_enchantments_still_appear() {
    let mut item = fixture_item();
    item.enchantments = vec![
        ItemEnchantment { kind: EnchantmentType::Shielded, tooltips: vec!["Shield 10.".into()] },
        ItemEnchantment { kind: EnchantmentType::Toxic, tooltips: vec![] },
    ];
    let (card, _) = assemble(&item, &GrammarCompiler).unwrap();

    let shielded = &card.enchantments[&EnchantmentType::Shielded];
    assert!(shielded.has_abilities);
    assert_eq!(shielded.abilities.len(), 1);
    assert_eq!(shielded.attributes[&AttributeType::ShieldApplyAmount], 10.0);

    let toxic = &card.enchantments[&EnchantmentType::Toxic];
    assert!(!toxic.has_abilities);
    assert!(toxic.abilities.is_empty());
}

#[test]
fn placeholders_resolve_to_existing_keys() {
    let mut item = fixture_item();
    item.unified_tooltips.push("You have ( +20 » +40 ) Max Health.".into());
    let (card, _) = assemble(&item, &GrammarCompiler).unwrap();

    for tooltip in &card.localization.tooltips {
        for caps in regex!(r"\{(ability|aura)\.(\d+)\}").captures_iter(&tooltip.content.text) {
            let key = caps[2].to_string();
            match &caps[1] {
                "ability" => {
                    assert!(card.abilities.contains_key(&key), "dangling {}", &caps[0]);
                }
                _ => assert!(card.auras.contains_key(&key), "dangling {}", &caps[0]),
            }
        }
    }
}

#[test]
fn one_display_tooltip_per_noncooldown_line() {
    let mut item = fixture_item();
    item.unified_tooltips.insert(0, "Cooldown (10/9) seconds".into());
    let (card, _) = assemble(&item, &GrammarCompiler).unwrap();

    let noncooldown =
        item.unified_tooltips.iter().filter(|l| !l.contains("Cooldown")).count();
    assert_eq!(card.localization.tooltips.len(), noncooldown);
}
