//! Lexical pattern tables.
//!
//! Global, order-significant lookup tables mapping tooltip phrases to typed
//! components: trigger prefixes, action verbs, subject phrases, and the
//! modifier classifier. First match wins everywhere, so each table is an
//! explicit priority list sorted longest-phrase-first; a shorter phrase can
//! never shadow a longer one no matter how rows get added later.
//!
//! Matching discipline varies by family and is part of the contract:
//!
//! - triggers: prefix match on the trigger text,
//! - actions: exact, then substring containment, case-sensitive against the
//!   captured source text (game verbs are capitalized in tooltips, which is
//!   exactly what makes `"Burn"` hit its row while a lowercase `"burn"`
//!   falls through to the default),
//! - subjects: exact, then substring containment; containment can
//!   false-positive on compound phrases, see `tests.rs`,
//! - modifiers: range before plain decimal.
//!
//! Unmatched text falls back to a per-family default instead of failing:
//! `OnCardFired`, `PlayerDamage`, the self card, `Value::fixed(1.0)`.

#[path = "lexicon/actions.rs"]
mod actions;
#[path = "lexicon/modifiers.rs"]
mod modifiers;
#[path = "lexicon/subjects.rs"]
mod subjects;
#[path = "lexicon/triggers.rs"]
mod triggers;


pub use actions::action_for;
pub use modifiers::modifier_value;
pub use subjects::{Binding, subject_for};
pub use triggers::{has_trigger_prefix, trigger_for};
