use serde::{Deserialize, Serialize};

use super::enums::{AttributeType, Operation};
use super::target::Target;

/// Action amounts.
///
/// `Fixed` and `Range` carry literal numbers; `CardAttribute` reads another
/// card's attribute at runtime ("equal to the value of the adjacent items"),
/// optionally scaled through a `Modifier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Value {
    #[serde(rename = "TFixedValue", rename_all = "PascalCase")]
    Fixed { value: f64 },

    #[serde(rename = "TRangeValue", rename_all = "PascalCase")]
    Range { min_value: f64, max_value: f64 },

    #[serde(rename = "TReferenceValueCardAttribute", rename_all = "PascalCase")]
    CardAttribute {
        target: Target,
        attribute_type: AttributeType,
        default_value: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        modifier: Option<Box<Modifier>>,
    },
}

impl Value {
    pub fn fixed(value: f64) -> Self {
        Value::Fixed { value }
    }

    pub fn range(min_value: f64, max_value: f64) -> Self {
        Value::Range { min_value, max_value }
    }
}

/// Scales a reference value (`ModifyMode` applied between the referenced
/// attribute and `Value`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Modifier {
    pub modify_mode: Operation,
    pub value: Value,
}
