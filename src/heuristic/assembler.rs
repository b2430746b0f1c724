use crate::lexicon::{self, Binding};
use crate::schema::{Ability, ActiveIn, Action, Priority, Trigger, Value};
use crate::{CompileError, Fragment, FragmentParts, LineContext, TooltipCompiler};

use super::analyzer::{AnalyzedTooltip, analyze};

/// The ability every heuristic build starts from. Only fields a component
/// actually replaces end up different.
fn skeleton(id: &str) -> Ability {
    Ability {
        id: id.to_string(),
        trigger: Trigger::OnCardSelected,
        active_in: ActiveIn::HandOnly,
        action: Action::card_modify_attribute(),
        prerequisites: None,
        priority: Priority::Medium,
        internal_name: String::new(),
        internal_description: None,
        migration_data: String::new(),
        vfx_config: None,
        translation_key: String::new(),
    }
}

/// Assemble an [`Ability`] from analyzed tooltip parts.
///
/// Components merge onto the skeleton in a fixed order: trigger, action,
/// subject, modifiers. The subject routes by its binding tag (action target
/// vs a trigger's subject slot; routing into a trigger without that slot is
/// dropped). Modifiers overwrite the action value, last one wins; a line
/// with no usable number gets `Value::fixed(1.0)`.
pub fn build_ability(analyzed: &AnalyzedTooltip, source_text: &str, id: &str) -> Ability {
    let mut ability = skeleton(id);
    ability.internal_description = Some(source_text.to_string());

    ability.trigger = lexicon::trigger_for(&analyzed.trigger);
    ability.action.replace_with(lexicon::action_for(&analyzed.action));

    let (target, binding) = lexicon::subject_for(&analyzed.subject);
    match binding {
        Binding::ActionTarget => ability.action.set_target(target),
        Binding::TriggerSubject => {
            if let Some(slot) = ability.trigger.subject_slot() {
                *slot = Some(target);
            }
        }
    }

    if analyzed.modifiers.is_empty() {
        ability.action.set_value(Value::fixed(1.0));
    } else {
        for modifier in &analyzed.modifiers {
            let value =
                lexicon::modifier_value(modifier).unwrap_or_else(|| Value::fixed(1.0));
            ability.action.set_value(value);
        }
    }

    ability
}

/// The heuristic strategy behind the common compiler interface: one
/// ability per line, keyed at the current ability index, no tier data.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicCompiler;

impl TooltipCompiler for HeuristicCompiler {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn compile_line(&self, line: &str, cx: &LineContext<'_>) -> Result<Fragment, CompileError> {
        let analyzed = analyze(line)?;
        let id = cx.ability_index.to_string();
        let mut ability = build_ability(&analyzed, line, &id);
        ability.internal_name = format!("{} Ability {}", cx.item.name, cx.ability_index);

        let mut fragment = Fragment::default();
        fragment.parts |= FragmentParts::ABILITIES;
        fragment.abilities.insert(id, ability);
        Ok(fragment)
    }
}
