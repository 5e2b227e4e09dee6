//! Hit-Result Normalizer
//!
//! Earlier data-format revisions shipped precomputed hit results under
//! inconsistent field names (snake_case from the batch scripts, camelCase
//! from the page layer) and mixed boolean encodings. This module maps any
//! such record into the canonical [`HitResult`] through a single alias
//! table, first-match-wins per field.
//!
//! Invoked only when a fresh comparison is impossible; when both the
//! prediction and the actual draw are at hand, `scoring::compare` wins.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::models::{GameType, HitResult};

/// Canonical field -> ordered accepted alias keys. The canonical name is
/// always consulted first.
static FIELD_ALIASES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    table.insert(
        "main_hit_count",
        &["main_hit_count", "mainHitCount", "red_hit_count", "redHitCount", "hit_count", "hitCount"],
    );
    table.insert("main_hits", &["main_hits", "mainHits", "red_hits", "redHits"]);
    table.insert("special_hit", &["special_hit", "specialHit", "blue_hit", "blueHit"]);
    table.insert("total_hits", &["total_hits", "totalHits"]);
    table.insert("position_hit_count", &["position_hit_count", "positionHitCount"]);
    table.insert("position_hit_indices", &["position_hit_indices", "positionHitIndices"]);
    table.insert("group_hit_count", &["group_hit_count", "groupHitCount"]);
    table.insert("exact_match", &["exact_match", "exactMatch"]);
    table.insert("win_types", &["win_types", "winTypes"]);
    table.insert("core_win_types", &["core_win_types", "coreWinTypes"]);
    table
});

/// Normalize an arbitrary precomputed hit-result record.
///
/// Numeric fields default to 0 and boolean fields to false when no alias
/// matches. For the 3D game, `exact_match` falls back to
/// `position_hit_count == 3` when not explicitly present; an explicit value
/// is never overridden.
pub fn normalize_hit_result(game: GameType, raw: &Value) -> HitResult {
    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => {
            log::debug!("[{}] hit-result record is not an object, zero result", game.code());
            return HitResult::zero();
        }
    };

    let position_hit_count = u32_field(obj, "position_hit_count");
    let exact_match = match field(obj, "exact_match") {
        Some(value) => truthy(value),
        None => game == GameType::ThreeDigit && position_hit_count == 3,
    };

    HitResult {
        main_hit_count: u32_field(obj, "main_hit_count"),
        main_hits: string_list_field(obj, "main_hits"),
        special_hit: field(obj, "special_hit").map(truthy).unwrap_or(false),
        total_hits: u32_field(obj, "total_hits"),
        position_hit_count,
        position_hit_indices: index_list_field(obj, "position_hit_indices"),
        group_hit_count: u32_field(obj, "group_hit_count"),
        exact_match,
        win_types: string_list_field(obj, "win_types"),
        core_win_types: string_list_field(obj, "core_win_types"),
    }
}

fn field<'a>(obj: &'a serde_json::Map<String, Value>, canonical: &str) -> Option<&'a Value> {
    let aliases = FIELD_ALIASES.get(canonical)?;
    aliases.iter().find_map(|key| obj.get(*key))
}

fn u32_field(obj: &serde_json::Map<String, Value>, canonical: &str) -> u32 {
    field(obj, canonical).and_then(as_u32).unwrap_or(0)
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().map(|v| v as u32),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Lenient truthiness across the boolean encodings seen in legacy records.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    }
}

fn string_list_field(obj: &serde_json::Map<String, Value>, canonical: &str) -> Vec<String> {
    match field(obj, canonical).and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        None => Vec::new(),
    }
}

fn index_list_field(obj: &serde_json::Map<String, Value>, canonical: &str) -> Vec<usize> {
    match field(obj, canonical).and_then(Value::as_array) {
        Some(items) => {
            items.iter().filter_map(|v| v.as_u64().map(|n| n as usize)).collect()
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_case_page_layer_record() {
        let raw = json!({
            "redHits": ["03", "17", "28"],
            "redHitCount": 3,
            "blueHit": true,
            "totalHits": 4
        });
        let hit = normalize_hit_result(GameType::TwoColorBall, &raw);
        assert_eq!(hit.main_hit_count, 3);
        assert_eq!(hit.main_hits, vec!["03", "17", "28"]);
        assert!(hit.special_hit);
        assert_eq!(hit.total_hits, 4);
        assert!(!hit.exact_match);
    }

    #[test]
    fn snake_case_batch_record() {
        let raw = json!({
            "position_hit_indices": [0, 2],
            "position_hit_count": 2,
            "group_hit_count": 3,
            "exact_match": false,
            "total_hits": 2,
            "win_types": ["group_3"],
            "core_win_types": ["group_3"]
        });
        let hit = normalize_hit_result(GameType::ThreeDigit, &raw);
        assert_eq!(hit.position_hit_count, 2);
        assert_eq!(hit.position_hit_indices, vec![0, 2]);
        assert_eq!(hit.group_hit_count, 3);
        assert!(!hit.exact_match);
        assert_eq!(hit.win_types, vec!["group_3"]);
    }

    #[test]
    fn canonical_name_wins_over_aliases() {
        let raw = json!({ "total_hits": 5, "totalHits": 2 });
        let hit = normalize_hit_result(GameType::TwoColorBall, &raw);
        assert_eq!(hit.total_hits, 5);
    }

    #[test]
    fn missing_fields_default_to_zero_and_false() {
        let hit = normalize_hit_result(GameType::TwoColorBall, &json!({}));
        assert_eq!(hit, HitResult::zero());
        assert_eq!(normalize_hit_result(GameType::ThreeDigit, &json!(null)), HitResult::zero());
    }

    #[test]
    fn exact_match_derived_from_position_count_for_three_digit_only() {
        let raw = json!({ "position_hit_count": 3 });
        assert!(normalize_hit_result(GameType::ThreeDigit, &raw).exact_match);
        assert!(!normalize_hit_result(GameType::TwoColorBall, &raw).exact_match);

        // Explicit value is a statement, not a fallback target.
        let explicit = json!({ "position_hit_count": 3, "exact_match": false });
        assert!(!normalize_hit_result(GameType::ThreeDigit, &explicit).exact_match);
    }

    #[test]
    fn lenient_boolean_encodings() {
        for truthy_value in [json!(1), json!("true"), json!("1"), json!(true)] {
            let raw = json!({ "blue_hit": truthy_value });
            assert!(normalize_hit_result(GameType::TwoColorBall, &raw).special_hit);
        }
        for falsy_value in [json!(0), json!("no"), json!(false), json!(null)] {
            let raw = json!({ "blue_hit": falsy_value });
            assert!(!normalize_hit_result(GameType::TwoColorBall, &raw).special_hit);
        }
    }
}
