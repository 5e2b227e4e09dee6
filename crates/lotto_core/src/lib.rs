//! # lotto_core - Lottery Prediction Scoring & Statistics Engine
//!
//! This library scores AI-generated lottery predictions against actual
//! draws and aggregates draw history into display-ready statistics, with a
//! JSON API for easy integration with presentation hosts.
//!
//! ## Features
//! - Two games behind one rule registry: two-color ball (6+1) and 3D (3 digits)
//! - Fresh hit computation plus normalization of legacy precomputed records
//! - Deterministic output (stable tie-breaks, no hidden state)
//! - Pure data out: rendering, fetching and persistence stay with the host

pub mod analysis;
pub mod api;
pub mod archive;
pub mod data;
pub mod error;
pub mod models;
pub mod rules;
pub mod scoring;

// Re-export main API functions
pub use api::{
    archive_predictions_json, compare_prediction_json, draw_statistics_json,
    model_best_hits_json, normalize_hit_result_json,
};
pub use error::{LottoError, Result};

// Re-export the core data model
pub use models::{
    Draw, GameType, HistoryDoc, HitResult, ModelPrediction, PlayType, PredictionGroup,
    PredictionsDoc, PredictionsHistoryDoc, PredictionsHistoryEntry, Shape,
};

// Re-export the scoring surface
pub use scoring::{
    compare, draw_status, normalize_hit_result, select_best_hit, select_model_best_hit, BestHit,
    DrawStatus, WinType,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_color_ball_scenario() {
        // Draw 2024001: 01 05 12 20 28 33 + 09
        // Prediction:   01 05 13 20 29 33 + 09 -> 4 main hits + special = 5
        let request = json!({
            "schema_version": 1,
            "game_type": "ssq",
            "prediction": {
                "group_id": 1,
                "strategy": "hot streak",
                "red_balls": ["01", "05", "13", "20", "29", "33"],
                "blue_ball": "09"
            },
            "actual": {
                "period": "2024001",
                "date": "2024-03-05",
                "red_balls": ["01", "05", "12", "20", "28", "33"],
                "blue_ball": "09"
            }
        });

        let result = compare_prediction_json(&request.to_string());
        assert!(result.is_ok(), "Comparison should succeed");

        let hit: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(hit["main_hits"], json!(["01", "05", "20", "33"]));
        assert_eq!(hit["main_hit_count"], 4);
        assert_eq!(hit["special_hit"], true);
        assert_eq!(hit["total_hits"], 5);
    }

    #[test]
    fn test_three_digit_scenario() {
        // Draw 3-3-7 (group-3 shape). Prediction A hits all positions,
        // prediction B only the multiset.
        let draw = json!({"period": "2024001", "digits": ["3", "3", "7"]});

        let request_a = json!({
            "schema_version": 1,
            "game_type": "fc3d",
            "prediction": {"group_id": 1, "digits": ["3", "3", "7"]},
            "actual": draw
        });
        let hit_a: serde_json::Value =
            serde_json::from_str(&compare_prediction_json(&request_a.to_string()).unwrap())
                .unwrap();
        assert_eq!(hit_a["position_hit_count"], 3);
        assert_eq!(hit_a["exact_match"], true);
        let wins_a: Vec<String> =
            serde_json::from_value(hit_a["win_types"].clone()).unwrap();
        assert!(wins_a.contains(&"direct_selection".to_string()));
        assert!(wins_a.contains(&"group_3".to_string()));

        let request_b = json!({
            "schema_version": 1,
            "game_type": "fc3d",
            "prediction": {"group_id": 2, "digits": ["7", "3", "3"]},
            "actual": draw
        });
        let hit_b: serde_json::Value =
            serde_json::from_str(&compare_prediction_json(&request_b.to_string()).unwrap())
                .unwrap();
        assert_eq!(hit_b["position_hit_count"], 0);
        assert_eq!(hit_b["group_hit_count"], 3);
        let wins_b: Vec<String> =
            serde_json::from_value(hit_b["win_types"].clone()).unwrap();
        assert!(wins_b.contains(&"group_3".to_string()));
        assert!(!wins_b.contains(&"direct_selection".to_string()));
    }

    #[test]
    fn test_determinism_across_calls() {
        let request = json!({
            "schema_version": 1,
            "game_type": "fc3d",
            "prediction": {"group_id": 1, "digits": ["5", "5", "2"]},
            "actual": {"period": "2024001", "digits": ["5", "3", "3"]}
        })
        .to_string();

        let first = compare_prediction_json(&request).unwrap();
        let second = compare_prediction_json(&request).unwrap();
        assert_eq!(first, second, "Same inputs should produce the same result");
    }

    #[test]
    fn test_typed_pipeline_end_to_end() {
        let history = data::parse_history_doc(
            r#"{
                "data": [
                    {"period": "2024002",
                     "red_balls": ["02", "08", "15", "21", "27", "30"], "blue_ball": "05"},
                    {"period": "2024001",
                     "red_balls": ["01", "05", "12", "20", "28", "33"], "blue_ball": "09"}
                ]
            }"#,
        )
        .unwrap();

        let predictions = data::parse_predictions_doc(
            r#"{
                "prediction_date": "2024-03-04",
                "target_period": "2024002",
                "models": [{
                    "model_id": "model-a",
                    "model_name": "Model A",
                    "predictions": [
                        {"group_id": 1,
                         "red_balls": ["03", "09", "16", "22", "26", "31"], "blue_ball": "04"},
                        {"group_id": 2,
                         "red_balls": ["02", "08", "15", "22", "26", "31"], "blue_ball": "05"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let model = &predictions.models[0];
        let best = select_model_best_hit(
            GameType::TwoColorBall,
            model,
            &history.data,
            &predictions.target_period,
        )
        .expect("period 2024002 is drawn");
        assert_eq!(best.group_id, 2);
        assert_eq!(best.hit_result.total_hits, 4);
    }
}
