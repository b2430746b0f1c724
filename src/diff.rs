//! Structural diff oracle.
//!
//! Acceptance works on JSON trees, not typed cards: the produced card and
//! the hand-authored reference both serialize, cosmetic fields get scrubbed,
//! and the comparison either intersects (what do these trees agree on?) or
//! diffs (where exactly do they part?). Folding the intersection across a
//! whole reference corpus recovers the common schema skeleton.

use serde_json::{Map, Value};

/// One divergent field between a produced and an expected tree. A `Null`
/// side marks a key present only on the other side.
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    pub path: String,
    pub produced: Value,
    pub expected: Value,
}

/// Type-aware recursive intersection.
///
/// Equal scalars survive, unequal ones vanish. Objects recurse over keys
/// present in both sides and keep a key only when its intersection came
/// back non-empty. Sequences intersect index-wise, keeping non-empty
/// entries in order. Reflexive and commutative for trees without empty
/// leaves.
pub fn deep_intersection(a: &Value, b: &Value) -> Value {
    intersect(a, b).unwrap_or(Value::Null)
}

fn intersect(a: &Value, b: &Value) -> Option<Value> {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            let mut out = Map::new();
            for (key, va) in a {
                let Some(vb) = b.get(key) else { continue };
                if let Some(v) = intersect(va, vb) {
                    if !is_empty(&v) {
                        out.insert(key.clone(), v);
                    }
                }
            }
            Some(Value::Object(out))
        }
        (Value::Array(a), Value::Array(b)) => {
            let out = a
                .iter()
                .zip(b)
                .filter_map(|(x, y)| intersect(x, y))
                .filter(|v| !is_empty(v))
                .collect();
            Some(Value::Array(out))
        }
        _ if a == b => Some(a.clone()),
        _ => None,
    }
}

fn is_empty(v: &Value) -> bool {
    match v {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Every field where the two trees disagree, with its dotted path. Keys on
/// one side only show up with `Null` on the missing side.
pub fn diff(produced: &Value, expected: &Value) -> Vec<Divergence> {
    let mut out = Vec::new();
    walk("", produced, expected, &mut out);
    out
}

fn walk(path: &str, produced: &Value, expected: &Value, out: &mut Vec<Divergence>) {
    match (produced, expected) {
        (Value::Object(p), Value::Object(e)) => {
            for (key, pv) in p {
                match e.get(key) {
                    Some(ev) => walk(&join(path, key), pv, ev, out),
                    None => out.push(Divergence {
                        path: join(path, key),
                        produced: pv.clone(),
                        expected: Value::Null,
                    }),
                }
            }
            for (key, ev) in e {
                if !p.contains_key(key) {
                    out.push(Divergence {
                        path: join(path, key),
                        produced: Value::Null,
                        expected: ev.clone(),
                    });
                }
            }
        }
        (Value::Array(p), Value::Array(e)) => {
            for i in 0..p.len().max(e.len()) {
                let path = format!("{path}[{i}]");
                match (p.get(i), e.get(i)) {
                    (Some(pv), Some(ev)) => walk(&path, pv, ev, out),
                    (Some(pv), None) => out.push(Divergence {
                        path,
                        produced: pv.clone(),
                        expected: Value::Null,
                    }),
                    (None, Some(ev)) => out.push(Divergence {
                        path,
                        produced: Value::Null,
                        expected: ev.clone(),
                    }),
                    (None, None) => {}
                }
            }
        }
        _ if produced == expected => {}
        _ => out.push(Divergence {
            path: path.to_string(),
            produced: produced.clone(),
            expected: expected.clone(),
        }),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() { key.to_string() } else { format!("{path}.{key}") }
}

/// Ability fields the acceptance comparison never looks at.
const SCRUBBED: &[&str] = &[
    "InternalDescription",
    "InternalName",
    "MigrationData",
    "Priority",
    "TranslationKey",
    "VFXConfig",
    "TooltipType",
    "Prerequisites",
];

/// Strip cosmetic fields in place before an acceptance comparison: the
/// ability bookkeeping fields anywhere, price attributes under tier
/// `Attributes` maps, and localization keys under tooltip `Content`.
pub fn scrub(value: &mut Value) {
    scrub_in(value, None);
}

fn scrub_in(value: &mut Value, parent: Option<&str>) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| !SCRUBBED.contains(&key.as_str()));
            if parent == Some("Attributes") {
                map.retain(|key, _| key != "BuyPrice" && key != "SellPrice");
            }
            if parent == Some("Content") {
                map.remove("Key");
            }
            for (key, v) in map.iter_mut() {
                scrub_in(v, Some(key.as_str()));
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                scrub_in(v, parent);
            }
        }
        _ => {}
    }
}

/// Intersect a whole corpus down to its common skeleton.
pub fn corpus_intersection(cards: &[Value]) -> Value {
    let mut cards = cards.iter();
    let Some(first) = cards.next() else { return Value::Null };
    cards.fold(first.clone(), |acc, card| deep_intersection(&acc, card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intersection_keeps_only_agreed_fields() {
        let a = json!({"a": 1, "b": {"c": 2}});
        let b = json!({"a": 1, "b": {"c": 3}});
        assert_eq!(deep_intersection(&a, &b), json!({"a": 1}));
    }

    #[test]
    fn intersection_is_reflexive_and_commutative() {
        let a = json!({
            "Id": "itm_kettle",
            "Tiers": {"Bronze": {"Attributes": {"CooldownMax": 10000.0}}},
            "Tags": ["Tool", "Vehicle"],
        });
        let b = json!({
            "Id": "itm_kettle",
            "Tiers": {"Bronze": {"Attributes": {"CooldownMax": 9000.0}}},
            "Tags": ["Tool", "Weapon"],
        });
        assert_eq!(deep_intersection(&a, &a), a);
        assert_eq!(deep_intersection(&a, &b), deep_intersection(&b, &a));
    }

    #[test]
    fn sequences_intersect_index_wise() {
        let a = json!([1, 2, 3]);
        let b = json!([9, 2, 3, 4]);
        assert_eq!(deep_intersection(&a, &b), json!([2, 3]));
    }

    #[test]
    fn diff_names_the_exact_divergent_field() {
        let produced = json!({"Tiers": {"Bronze": {"Attributes": {"DamageAmount": 8.0}}}});
        let expected = json!({"Tiers": {"Bronze": {"Attributes": {"DamageAmount": 10.0}}}});
        let got = diff(&produced, &expected);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].path, "Tiers.Bronze.Attributes.DamageAmount");
        assert_eq!(got[0].produced, json!(8.0));
        assert_eq!(got[0].expected, json!(10.0));
    }

    #[test]
    fn diff_marks_one_sided_keys_with_null() {
        let produced = json!({"Abilities": {"0": {"Id": "0"}}});
        let expected = json!({"Abilities": {"0": {"Id": "0"}, "1": {"Id": "1"}}});
        let got = diff(&produced, &expected);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].path, "Abilities.1");
        assert_eq!(got[0].produced, Value::Null);
    }

    #[test]
    fn scrub_removes_cosmetic_fields_only() {
        let mut card = json!({
            "Abilities": {"0": {
                "Id": "0",
                "InternalName": "Kettle Ability 0",
                "InternalDescription": "Burn 5.",
                "Priority": "Medium",
                "Value": {"AttributeType": "SellPrice"},
            }},
            "Tiers": {"Bronze": {"Attributes": {
                "DamageAmount": 8.0,
                "BuyPrice": 4.0,
                "SellPrice": 2.0,
            }}},
            "Localization": {"Tooltips": [{
                "Content": {"Key": "tt.0", "Text": "Burn {ability.0}."},
                "TooltipType": "Active",
                "Prerequisites": null,
            }]},
        });
        scrub(&mut card);
        assert_eq!(
            card,
            json!({
                "Abilities": {"0": {
                    "Id": "0",
                    "Value": {"AttributeType": "SellPrice"},
                }},
                "Tiers": {"Bronze": {"Attributes": {"DamageAmount": 8.0}}},
                "Localization": {"Tooltips": [{
                    "Content": {"Text": "Burn {ability.0}."},
                }]},
            })
        );
    }

    #[test]
    fn corpus_fold_recovers_the_common_skeleton() {
        let cards = vec![
            json!({"Type": "Item", "Version": "1.0.0", "Id": "a"}),
            json!({"Type": "Item", "Version": "1.0.0", "Id": "b"}),
            json!({"Type": "Item", "Version": "1.0.0", "Id": "c"}),
        ];
        assert_eq!(
            corpus_intersection(&cards),
            json!({"Type": "Item", "Version": "1.0.0"})
        );
    }
}
