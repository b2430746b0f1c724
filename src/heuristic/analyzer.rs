use once_cell::sync::Lazy;
use regex::Regex;

use crate::CompileError;
use crate::lexicon;

/// Template vocabulary. These lists gate what the clause templates can
/// capture at all; the lexicon tables decide what the captures mean. The
/// two sets are not the same on purpose: "poison" and "draw" are
/// recognizable verbs with no mapping row, and fall to the default action.
const CLAUSE_ACTIONS: &str = "heal|draw|slow|freeze|poison|burn|haste|charge|shield";
const CLAUSE_SUBJECTS: &str = "enemies|weapons|target";

/// The three clause templates, in match order. Anchored and
/// case-insensitive; capture order is normalized to (action, subject,
/// modifier) by `analyze`.
static TEMPLATES: Lazy<[Regex; 3]> = Lazy::new(|| {
    let build = |pattern: String| {
        Regex::new(&pattern).unwrap_or_else(|e| panic!("clause template {pattern:?}: {e}"))
    };
    [
        build(format!(r"(?i)^({CLAUSE_ACTIONS})\s+({CLAUSE_SUBJECTS})\s+for\s+(.*)$")),
        build(format!(r"(?i)^({CLAUSE_SUBJECTS})\s+({CLAUSE_ACTIONS})\s+(.*)$")),
        build(format!(r"(?i)^({CLAUSE_ACTIONS})\s+(.*)$")),
    ]
});

/// A tooltip line split into its lexical parts, all still plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedTooltip {
    pub trigger: String,
    pub action: String,
    pub subject: String,
    pub modifiers: Vec<String>,
}

/// Split a tooltip line into trigger, action, subject and modifier text.
///
/// Trigger handling: a line opening with a known trigger phrase is split at
/// the first comma; the part before it is the trigger, the rest is the
/// clause. Without a comma the clause falls back to whatever follows the
/// trigger text, which may be empty. Lines without a trigger phrase get the
/// literal `"On cooldown"` trigger and the whole line as clause.
///
/// The clause then runs through three anchored, case-insensitive templates,
/// first match wins:
///
/// 1. `<action> <subject> for <modifier>`
/// 2. `<subject> <action> <modifier>`
/// 3. `<action> <modifier>` (subject defaults to "target")
///
/// A clause none of them match is a [`CompileError::UnrecognizedClause`].
/// Captured text keeps its source casing; the lexicon tables rely on that.
pub fn analyze(text: &str) -> Result<AnalyzedTooltip, CompileError> {
    let mut trigger = String::from("On cooldown");
    let mut clause = text.trim().to_string();

    if lexicon::has_trigger_prefix(text) {
        let head = match text.split_once(',') {
            Some((head, _)) => head,
            None => text,
        };
        trigger = head.to_string();

        let after_comma = text.get(head.len() + 1..).map(str::trim).unwrap_or("");
        clause = if after_comma.is_empty() {
            text.get(head.len()..).map(str::trim).unwrap_or("").to_string()
        } else {
            after_comma.to_string()
        };
    }

    if let Some(caps) = TEMPLATES[0].captures(&clause) {
        return Ok(AnalyzedTooltip {
            trigger,
            action: caps[1].to_string(),
            subject: caps[2].to_string(),
            modifiers: vec![caps[3].to_string()],
        });
    }

    if let Some(caps) = TEMPLATES[1].captures(&clause) {
        return Ok(AnalyzedTooltip {
            trigger,
            action: caps[2].to_string(),
            subject: caps[1].to_string(),
            modifiers: vec![caps[3].to_string()],
        });
    }

    if let Some(caps) = TEMPLATES[2].captures(&clause) {
        return Ok(AnalyzedTooltip {
            trigger,
            action: caps[1].to_string(),
            subject: String::from("target"),
            modifiers: vec![caps[2].to_string()],
        });
    }

    Err(CompileError::UnrecognizedClause { clause })
}
