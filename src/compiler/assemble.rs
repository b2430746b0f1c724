//! Card assembly: fold compiled tooltip lines into one card.

use std::collections::BTreeMap;

use crate::item::{Item, ItemEnchantment};
use crate::schema::{
    CARD_VERSION, Card, CardKind, CardType, Enchantment, Localization, LocalizedText, Tier,
    Tooltip,
};
use crate::{CompileError, Fragment, FragmentParts, LineContext, TooltipCompiler};

use super::metrics::CompileMetrics;
use super::tiers;

/// Compile every tooltip line of `item` through `compiler` and fold the
/// fragments into a card.
///
/// Grammar rejections are recoverable: the line is skipped and recorded in
/// the metrics. Heuristic rejections and cooldown derivation failures abort
/// the whole item, per each side's contract.
pub fn assemble(
    item: &Item,
    compiler: &dyn TooltipCompiler,
) -> Result<(Card, CompileMetrics), CompileError> {
    let start = std::time::Instant::now();
    let unlocked = tiers::tier_range(item);
    let mut metrics = CompileMetrics::default();

    let mut card = skeleton(item);
    card.tiers = tiers::derive_tiers(item)?;

    for line in &item.unified_tooltips {
        metrics.lines += 1;
        let cx = LineContext {
            item,
            unlocked: &unlocked,
            ability_index: card.abilities.len(),
            aura_index: card.auras.len(),
        };
        let fragment = match compiler.compile_line(line, &cx) {
            Ok(fragment) => fragment,
            Err(err @ CompileError::StructuralParseFailure { .. }) => {
                if std::env::var_os("CARDWRIGHT_DEBUG_RULES").is_some() {
                    eprintln!("[assemble] {}: skipping line: {err}", compiler.name());
                }
                metrics.skip(line, err);
                continue;
            }
            Err(err) => return Err(err),
        };
        metrics.record(&fragment);

        let display = display_line(line, &fragment, &cx);
        merge_fragment(&mut card, fragment);
        if !line.contains("Cooldown") {
            card.localization.tooltips.push(Tooltip::new(display));
        }
    }

    for ench in &item.enchantments {
        let entry = fold_enchantment(item, &unlocked, ench, compiler, &mut metrics)?;
        card.enchantments.insert(ench.kind, entry);
    }

    apply_metadata(&mut card, item);
    stamp_tier_ids(&mut card, &unlocked);

    metrics.elapsed = start.elapsed();
    Ok((card, metrics))
}

/// The default card before any line lands. `FlavorText` stays a spelled-out
/// null; `AudioKey` has no source in the item record and stays empty.
fn skeleton(item: &Item) -> Card {
    Card {
        card_type: CardType::TCardItem,
        id: item.id.clone(),
        kind: CardKind::Item,
        version: CARD_VERSION.to_string(),
        audio_key: String::new(),
        size: item.size,
        starting_tier: item.starting_tier,
        tags: Vec::new(),
        hidden_tags: Vec::new(),
        heroes: Vec::new(),
        attributes: None,
        tiers: BTreeMap::new(),
        abilities: BTreeMap::new(),
        auras: BTreeMap::new(),
        enchantments: BTreeMap::new(),
        localization: Localization::default(),
    }
}

/// Typed deep-merge of one fragment: maps key-merge, per-tier attribute
/// scalars later-wins.
fn merge_fragment(card: &mut Card, fragment: Fragment) {
    card.abilities.extend(fragment.abilities);
    card.auras.extend(fragment.auras);
    for (tier, attrs) in fragment.tier_attributes {
        card.tiers.entry(tier).or_default().attributes.extend(attrs);
    }
}

/// Rewrite a line for display: parenthesized clauses become `{ability.N}`
/// or `{aura.N}` keyed at the index the line's output landed on. A line
/// that produced neither keeps its text verbatim.
fn display_line(line: &str, fragment: &Fragment, cx: &LineContext<'_>) -> String {
    let token = if fragment.parts.contains(FragmentParts::ABILITIES) {
        format!("{{ability.{}}}", cx.ability_index)
    } else if fragment.parts.contains(FragmentParts::AURAS) {
        format!("{{aura.{}}}", cx.aura_index)
    } else {
        return line.to_string();
    };
    regex!(r"\([^)]*\)").replace_all(line, token.as_str()).into_owned()
}

/// Enchantment tooltips run through the same per-line path, keyed by their
/// own counters. An empty tooltip list still yields an entry: present, just
/// empty.
fn fold_enchantment(
    item: &Item,
    unlocked: &[Tier],
    ench: &ItemEnchantment,
    compiler: &dyn TooltipCompiler,
    metrics: &mut CompileMetrics,
) -> Result<Enchantment, CompileError> {
    let mut entry = Enchantment::default();
    for line in &ench.tooltips {
        metrics.lines += 1;
        let cx = LineContext {
            item,
            unlocked,
            ability_index: entry.abilities.len(),
            aura_index: entry.auras.len(),
        };
        let fragment = match compiler.compile_line(line, &cx) {
            Ok(fragment) => fragment,
            Err(err @ CompileError::StructuralParseFailure { .. }) => {
                metrics.skip(line, err);
                continue;
            }
            Err(err) => return Err(err),
        };
        metrics.record(&fragment);

        let display = display_line(line, &fragment, &cx);
        entry.abilities.extend(fragment.abilities);
        entry.auras.extend(fragment.auras);
        // Enchantment attributes are flat, not per tier; spreads collapse
        // in tier order with later tiers winning.
        for attrs in fragment.tier_attributes.into_values() {
            entry.attributes.extend(attrs);
        }
        entry.localization.tooltips.push(Tooltip::new(display));
    }
    entry.has_abilities = !entry.abilities.is_empty();
    entry.has_auras = !entry.auras.is_empty();
    Ok(entry)
}

/// Item metadata wins over anything a compiled line may have touched.
fn apply_metadata(card: &mut Card, item: &Item) {
    card.id = item.id.clone();
    card.size = item.size;
    card.starting_tier = item.starting_tier;
    card.tags = item.tags.clone();
    card.hidden_tags = item.hidden_tags.clone();
    card.heroes = item.heroes.clone();
    card.version = CARD_VERSION.to_string();
    card.localization.title = Some(LocalizedText::new(item.name.clone()));
}

/// After assembly every unlocked tier lists the same assembled ids.
fn stamp_tier_ids(card: &mut Card, unlocked: &[Tier]) {
    let ability_ids: Vec<String> = card.abilities.keys().cloned().collect();
    let aura_ids: Vec<String> = card.auras.keys().cloned().collect();
    let tooltip_ids: Vec<u32> = (0..card.localization.tooltips.len() as u32).collect();
    for tier in unlocked {
        let info = card.tiers.entry(*tier).or_default();
        info.ability_ids = ability_ids.clone();
        info.aura_ids = aura_ids.clone();
        info.tooltip_ids = tooltip_ids.clone();
    }
}
