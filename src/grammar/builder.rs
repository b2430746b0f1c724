//! Parse-tree lowering: one `tooltip` pair in, one [`Fragment`] out.
//!
//! Verbs and subject phrases map through the same lexicon tables the
//! heuristic path uses; what this path adds is progression spreading over
//! unlocked tiers and the ability/aura/attribute split per line family.

use pest::iterators::Pair;

use crate::lexicon;
use crate::progression::{self, Step};
use crate::schema::{
    Ability, Action, ActiveIn, AttributeType, Aura, Conditions, ConditionsOperator, Duration,
    Modifier, Operation, Priority, Tag, Target, TargetMode, TargetPlayer, TargetSection, Trigger,
    Value,
};
use crate::{CompileError, Fragment, FragmentParts, LineContext};

use super::parse::Rule;

const SECONDS_TO_MS: f64 = 1000.0;

pub(super) fn build(
    line: &str,
    top: Pair<'_, Rule>,
    cx: &LineContext<'_>,
) -> Result<Fragment, CompileError> {
    let Some(head) = top.into_inner().find(|p| !matches!(p.as_rule(), Rule::EOI)) else {
        return Err(shape(line));
    };

    let mut fragment = match head.as_rule() {
        Rule::cooldown => cooldown(head, cx),
        Rule::statement => statement(line, head, cx)?,
        _ => return Err(shape(line)),
    };

    for ability in fragment.abilities.values_mut() {
        ability.internal_description = Some(line.to_string());
    }
    for aura in fragment.auras.values_mut() {
        aura.internal_description = Some(line.to_string());
    }
    Ok(fragment)
}

fn shape(line: &str) -> CompileError {
    CompileError::StructuralParseFailure {
        line: line.to_string(),
        reason: "unexpected parse shape".to_string(),
    }
}

fn statement(
    line: &str,
    pair: Pair<'_, Rule>,
    cx: &LineContext<'_>,
) -> Result<Fragment, CompileError> {
    let mut trigger_text = None;
    let mut family = None;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::trigger_part => {
                trigger_text = child(&p, Rule::trigger_text).map(|t| t.as_str().to_string());
            }
            Rule::clause => family = p.into_inner().next(),
            _ => {}
        }
    }
    let Some(family) = family else { return Err(shape(line)) };

    let mut fragment = match family.as_rule() {
        Rule::deal => deal(family, cx),
        Rule::status => status(family, cx),
        Rule::tempo => tempo(family, cx),
        Rule::gains => gains(family, cx),
        Rule::reference => reference(family, cx),
        Rule::have_aura => have_aura(family, cx),
        Rule::group_aura => group_aura(family, cx),
        _ => return Err(shape(line)),
    };

    if let Some(text) = trigger_text {
        let trigger = lexicon::trigger_for(&text);
        for ability in fragment.abilities.values_mut() {
            ability.trigger = trigger.clone();
        }
    }
    Ok(fragment)
}

// --- Line families ----------------------------------------------------------

/// "Cooldown (10/9/8) seconds": per-tier `CooldownMax`, nothing else.
fn cooldown(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let amount = parse_amount(child(&pair, Rule::amount));
    let mut fragment = Fragment::default();
    spread(&amount, AttributeType::CooldownMax, SECONDS_TO_MS, cx, &mut fragment);
    fragment
}

/// "Deal (8 » 12 » 16 » 20) damage."
fn deal(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let amount = parse_amount(child(&pair, Rule::amount));
    let mut fragment = Fragment::default();
    let mut action = Action::player_damage();
    action.set_target(Target::player(TargetPlayer::Opponent));
    route_amount(&mut fragment, &mut action, &amount, 1.0, cx);
    push_ability(&mut fragment, action, cx);
    fragment
}

/// "Burn (1/2/3).", "Heal 10.": status stacks on a player.
fn status(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let verb = verb_text(&pair, Rule::status_verb);
    let amount = parse_amount(child(&pair, Rule::amount));

    // The grammar admits exactly burn/poison/heal/shield here.
    let (mut action, side) = match verb.as_str() {
        "burn" => (Action::player_burn_apply(), TargetPlayer::Opponent),
        "poison" => (Action::player_poison_apply(), TargetPlayer::Opponent),
        "heal" => (Action::player_heal(), TargetPlayer::Own),
        _ => (Action::player_shield_apply(), TargetPlayer::Own),
    };
    action.set_target(Target::player(side));

    let mut fragment = Fragment::default();
    route_amount(&mut fragment, &mut action, &amount, 1.0, cx);
    push_ability(&mut fragment, action, cx);
    fragment
}

/// "Freeze 1 item for (1 » 2) second(s).": cooldown tempo on other cards.
/// Durations are stored in milliseconds, like `CooldownMax`.
fn tempo(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let verb = verb_text(&pair, Rule::tempo_verb);
    let amount = parse_amount(child(&pair, Rule::amount));
    let target = child(&pair, Rule::target_phrase)
        .map(|p| tempo_target(&p, &verb))
        .unwrap_or_else(Target::card_self);

    let mut action = match verb.as_str() {
        "charge" => Action::card_charge(),
        "freeze" => Action::card_freeze(),
        "slow" => Action::card_slow(),
        "reload" => Action::card_reload(),
        _ => Action::card_haste(),
    };
    action.set_target(target);

    let scale = if verb == "reload" { 1.0 } else { SECONDS_TO_MS };
    let mut fragment = Fragment::default();
    route_amount(&mut fragment, &mut action, &amount, scale, cx);
    push_ability(&mut fragment, action, cx);
    fragment
}

/// "this gains ( +5 » +10 ) damage for the fight.": attribute arithmetic on
/// cards. The per-tier numbers live in `Custom_0`; the buffed attribute is
/// whatever the line names.
fn gains(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let subject = child(&pair, Rule::gains_subject)
        .map(|p| lexicon::subject_for(&p.as_str().to_ascii_lowercase()).0)
        .unwrap_or_else(Target::card_self);
    let amount = parse_amount(child(&pair, Rule::amount));
    let attr = child(&pair, Rule::attribute)
        .map(|p| attribute_for(p.as_str()))
        .unwrap_or(AttributeType::Custom0);
    let duration = child(&pair, Rule::scope).map(|p| scope_duration(p.as_str()));

    let mut fragment = Fragment::default();
    spread(&amount, AttributeType::Custom0, 1.0, cx, &mut fragment);
    let action = Action::CardModifyAttribute {
        attribute_type: Some(attr),
        operation: Some(Operation::Add),
        value: Some(attribute_ref(Target::card_self(), AttributeType::Custom0)),
        target: Some(subject),
        duration,
    };
    push_ability(&mut fragment, action, cx);
    fragment
}

/// "Shield equal to ( 1x » 2x ) the value of the adjacent items.": the
/// amount reads another card's sell price, scaled by a per-tier multiplier
/// parked in `Custom_0`.
fn reference(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let verb = verb_text(&pair, Rule::ref_verb);
    let amount = parse_amount(child(&pair, Rule::amount));
    let source = child(&pair, Rule::ref_target)
        .map(|p| reference_target(p.as_str()))
        .unwrap_or_else(Target::card_self);

    let (mut action, side) = match verb.as_str() {
        "deal" => (Action::player_damage(), TargetPlayer::Opponent),
        "heal" => (Action::player_heal(), TargetPlayer::Own),
        _ => (Action::player_shield_apply(), TargetPlayer::Own),
    };
    action.set_target(Target::player(side));

    let mut fragment = Fragment::default();
    let modifier = if amount.steps.is_empty() {
        None
    } else {
        spread(&amount, AttributeType::Custom0, 1.0, cx, &mut fragment);
        Some(Box::new(Modifier {
            modify_mode: Operation::Multiply,
            value: attribute_ref(Target::card_self(), AttributeType::Custom0),
        }))
    };
    action.set_value(Value::CardAttribute {
        target: source,
        attribute_type: AttributeType::SellPrice,
        default_value: 0.0,
        modifier,
    });
    push_ability(&mut fragment, action, cx);
    fragment
}

/// "You have ( +20 » +40 ) Max Health.": passive player aura.
fn have_aura(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let amount = parse_amount(child(&pair, Rule::amount));
    let attr = child(&pair, Rule::attribute)
        .map(|p| attribute_for(p.as_str()))
        .unwrap_or(AttributeType::Custom0);

    let mut fragment = Fragment::default();
    spread(&amount, AttributeType::Custom0, 1.0, cx, &mut fragment);
    let action = Action::AuraPlayerModifyAttribute {
        attribute_type: Some(attr),
        operation: Some(Operation::Add),
        value: Some(attribute_ref(Target::card_self(), AttributeType::Custom0)),
        target: Some(Target::player(TargetPlayer::Own)),
    };
    push_aura(&mut fragment, action, cx);
    fragment
}

/// "Your weapons have (+20% » +30%) Crit Chance.": passive card-group aura.
fn group_aura(pair: Pair<'_, Rule>, cx: &LineContext<'_>) -> Fragment {
    let group = child(&pair, Rule::group_subject)
        .map(|p| lexicon::subject_for(&p.as_str().to_ascii_lowercase()).0)
        .unwrap_or_else(|| Target::section(TargetSection::SelfHand));
    let amount = parse_amount(child(&pair, Rule::amount));
    let attr = child(&pair, Rule::attribute)
        .map(|p| attribute_for(p.as_str()))
        .unwrap_or(AttributeType::Custom0);

    let mut fragment = Fragment::default();
    spread(&amount, AttributeType::Custom0, 1.0, cx, &mut fragment);
    let action = Action::AuraCardModifyAttribute {
        attribute_type: Some(attr),
        operation: Some(Operation::Add),
        value: Some(attribute_ref(Target::card_self(), AttributeType::Custom0)),
        target: Some(group),
    };
    push_aura(&mut fragment, action, cx);
    fragment
}

// --- Amount routing ---------------------------------------------------------

/// A parsed amount. `grouped` distinguishes a parenthesized progression
/// (positional per tier) from a bare number (same value at every tier).
struct Amount {
    steps: Vec<Step>,
    grouped: bool,
}

fn parse_amount(pair: Option<Pair<'_, Rule>>) -> Amount {
    let Some(pair) = pair else {
        return Amount { steps: Vec::new(), grouped: false };
    };
    match pair.clone().into_inner().next().map(|p| p.as_rule()) {
        Some(Rule::progression) => Amount {
            steps: progression::extract(pair.as_str()).steps().to_vec(),
            grouped: true,
        },
        _ => Amount {
            steps: progression::bare_value(pair.as_str()).into_iter().collect(),
            grouped: false,
        },
    }
}

/// One number per unlocked tier. Progressions attach positionally and a
/// length mismatch drops the surplus side; bare numbers repeat across every
/// unlocked tier.
fn spread(
    amount: &Amount,
    attr: AttributeType,
    scale: f64,
    cx: &LineContext<'_>,
    fragment: &mut Fragment,
) {
    let Some(first) = amount.steps.first() else { return };
    if cx.unlocked.is_empty() {
        return;
    }
    fragment.parts |= FragmentParts::TIER_ATTRIBUTES;

    if amount.grouped {
        if amount.steps.len() != cx.unlocked.len()
            && std::env::var_os("CARDWRIGHT_DEBUG_RULES").is_some()
        {
            eprintln!(
                "[spread] {} values for {} unlocked tiers ({attr:?})",
                amount.steps.len(),
                cx.unlocked.len()
            );
        }
        for (tier, step) in cx.unlocked.iter().zip(&amount.steps) {
            fragment.tier_attributes.entry(*tier).or_default().insert(attr, step.scalar() * scale);
        }
    } else {
        let value = first.scalar() * scale;
        for tier in cx.unlocked {
            fragment.tier_attributes.entry(*tier).or_default().insert(attr, value);
        }
    }
}

/// Numbers land on the action's per-tier amount attribute, with the action
/// value reading it back; an amountless action falls back to a literal 1.
fn route_amount(
    fragment: &mut Fragment,
    action: &mut Action,
    amount: &Amount,
    scale: f64,
    cx: &LineContext<'_>,
) {
    match action.amount_attribute() {
        Some(attr) if !amount.steps.is_empty() => {
            spread(amount, attr, scale, cx, fragment);
            action.set_value(attribute_ref(Target::card_self(), attr));
        }
        _ => {
            let value =
                amount.steps.first().map(|s| s.value.clone()).unwrap_or_else(|| Value::fixed(1.0));
            action.set_value(value);
        }
    }
}

fn attribute_ref(target: Target, attribute_type: AttributeType) -> Value {
    Value::CardAttribute { target, attribute_type, default_value: 0.0, modifier: None }
}

// --- Vocabulary mappings ----------------------------------------------------

/// Count-prefixed phrases pick a whole section: freeze and slow sweep the
/// opponent's board, the friendly tempo verbs stay on our own (excluding the
/// origin card). Named phrases reuse the lexicon subject rows.
fn tempo_target(pair: &Pair<'_, Rule>, verb: &str) -> Target {
    if child(pair, Rule::count_items).is_some() {
        return match verb {
            "freeze" | "slow" => Target::section(TargetSection::OpponentHand),
            _ => Target::CardSection {
                target_section: TargetSection::SelfHand,
                exclude_self: Some(true),
                conditions: None,
            },
        };
    }
    lexicon::subject_for(&pair.as_str().to_ascii_lowercase()).0
}

/// "the value of X": where the referenced sell price is read from. "the
/// Core" narrows a section sweep with a tag filter.
fn reference_target(text: &str) -> Target {
    let t = text.to_ascii_lowercase();
    if t.contains("adjacent") {
        Target::positional(TargetMode::Neighbor)
    } else if t.contains("left") {
        Target::positional(TargetMode::LeftCard)
    } else if t.contains("right") {
        Target::positional(TargetMode::RightCard)
    } else if t.contains("core") {
        Target::section(TargetSection::SelfHand)
            .with_conditions(Conditions::HasTag { tags: vec![Tag::Core], operator: ConditionsOperator::Any })
    } else if t.contains("items") {
        Target::section(TargetSection::SelfHand)
    } else {
        Target::card_self()
    }
}

/// Attribute vocabulary shared by the gains and aura families.
fn attribute_for(text: &str) -> AttributeType {
    match text.to_ascii_lowercase().as_str() {
        "max health" => AttributeType::HealthMax,
        "crit chance" => AttributeType::CritChance,
        "regeneration" => AttributeType::HealthRegen,
        "damage" => AttributeType::DamageAmount,
        "shield" => AttributeType::ShieldApplyAmount,
        "burn" => AttributeType::BurnApplyAmount,
        "poison" => AttributeType::PoisonApplyAmount,
        "heal" => AttributeType::HealAmount,
        "value" => AttributeType::SellPrice,
        "income" => AttributeType::Income,
        "ammo" => AttributeType::AmmoMax,
        _ => AttributeType::Custom0,
    }
}

fn scope_duration(text: &str) -> Duration {
    if text.to_ascii_lowercase().contains("fight") {
        Duration::until_end_of_combat()
    } else {
        Duration::until_end_of_day()
    }
}

// --- Fragment plumbing ------------------------------------------------------

fn push_ability(fragment: &mut Fragment, action: Action, cx: &LineContext<'_>) {
    let id = cx.ability_index.to_string();
    let ability = Ability {
        id: id.clone(),
        trigger: Trigger::OnCardFired,
        active_in: ActiveIn::HandOnly,
        action,
        prerequisites: None,
        priority: Priority::Medium,
        internal_name: format!("{} Ability {}", cx.item.name, cx.ability_index),
        internal_description: None,
        migration_data: String::new(),
        vfx_config: None,
        translation_key: String::new(),
    };
    fragment.parts |= FragmentParts::ABILITIES;
    fragment.abilities.insert(id, ability);
}

fn push_aura(fragment: &mut Fragment, action: Action, cx: &LineContext<'_>) {
    let id = cx.aura_index.to_string();
    let aura = Aura {
        id: id.clone(),
        active_in: ActiveIn::HandOnly,
        action,
        prerequisites: None,
        internal_name: format!("{} Aura {}", cx.item.name, cx.aura_index),
        internal_description: None,
        migration_data: String::new(),
        vfx_config: None,
        translation_key: String::new(),
    };
    fragment.parts |= FragmentParts::AURAS;
    fragment.auras.insert(id, aura);
}

fn verb_text(pair: &Pair<'_, Rule>, rule: Rule) -> String {
    child(pair, rule).map(|p| p.as_str().to_ascii_lowercase()).unwrap_or_default()
}

fn child<'i>(pair: &Pair<'i, Rule>, rule: Rule) -> Option<Pair<'i, Rule>> {
    pair.clone().into_inner().find(|p| p.as_rule() == rule)
}
