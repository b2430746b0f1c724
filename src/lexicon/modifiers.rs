use crate::progression;
use crate::schema::Value;

/// Classify modifier text into an action value.
///
/// A parenthesized progression wins and contributes its first step (the
/// starting tier's number); otherwise a bare range, then a bare decimal.
/// Range sits above plain decimal deliberately: an unanchored digit search
/// would split `1-3` at the `1` and the range form would be unreachable.
///
/// `None` means the text carried no number at all; the assembler supplies
/// the `Value::fixed(1.0)` default in that case.
pub fn modifier_value(text: &str) -> Option<Value> {
    let steps = progression::extract(text);
    if let Some(step) = steps.first() {
        return Some(step.value.clone());
    }

    progression::bare_value(text).map(|step| step.value)
}
