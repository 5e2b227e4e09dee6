use serde::{Deserialize, Serialize};

use crate::models::{Draw, GameType, HistoryDoc, HitResult, PredictionGroup, PredictionsDoc};
use crate::scoring::{self, BestHit, DrawStatus};

use super::{check_schema_version, err_code, error_codes};

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub game_type: Option<String>,
    pub prediction: PredictionGroup,
    pub actual: Draw,
}

/// Compute a fresh hit result for one prediction/draw pair.
///
/// Request: `{schema_version, game_type?, prediction: {...}, actual: {...}}`.
/// Response: the canonical HitResult.
pub fn compare_prediction_json(request_json: &str) -> Result<String, String> {
    let request: CompareRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::BAD_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let game = GameType::from_code(request.game_type.as_deref());
    log::debug!("[{}] compare request for period {}", game.code(), request.actual.period);

    let hit = scoring::compare(game, &request.prediction, &request.actual);
    serde_json::to_string(&hit).map_err(|e| err_code(error_codes::SERIALIZE_FAILED, e))
}

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub game_type: Option<String>,
    /// A precomputed hit record in any legacy field naming.
    pub hit_result: serde_json::Value,
}

/// Normalize a legacy precomputed hit record into the canonical shape.
pub fn normalize_hit_result_json(request_json: &str) -> Result<String, String> {
    let request: NormalizeRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::BAD_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let game = GameType::from_code(request.game_type.as_deref());
    let hit = scoring::normalize_hit_result(game, &request.hit_result);
    serde_json::to_string(&hit).map_err(|e| err_code(error_codes::SERIALIZE_FAILED, e))
}

#[derive(Debug, Deserialize)]
pub struct BestHitsRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub game_type: Option<String>,
    pub predictions: PredictionsDoc,
    pub history: HistoryDoc,
}

#[derive(Debug, Serialize)]
struct BestHitsResponse {
    schema_version: u8,
    game_type: &'static str,
    target_period: String,
    /// False while the target period has no draw yet, an expected state.
    drawn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual_result: Option<Draw>,
    models: Vec<ModelBestHit>,
}

#[derive(Debug, Serialize)]
struct ModelBestHit {
    model_id: String,
    model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    best: Option<BestHit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_hit_result: Option<HitResult>,
}

/// Best-hit selection for every model of a predictions document.
///
/// When the target period is not in the history yet, the response reports
/// `drawn: false` with no per-model results rather than erroring.
pub fn model_best_hits_json(request_json: &str) -> Result<String, String> {
    let request: BestHitsRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::BAD_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let game = GameType::from_code(request.game_type.as_deref());
    let target = request.predictions.target_period.clone();
    let status = scoring::draw_status(&request.history.data, &target);
    log::debug!(
        "[{}] best-hit request for period {} (drawn: {})",
        game.code(),
        target,
        status.is_drawn()
    );

    let (drawn, actual_result) = match &status {
        DrawStatus::Drawn(draw) => (true, Some((*draw).clone())),
        DrawStatus::NotYetDrawn => (false, None),
    };

    let models = request
        .predictions
        .models
        .iter()
        .map(|model| {
            let best = match &status {
                DrawStatus::Drawn(draw) => {
                    scoring::select_best_hit(game, &model.predictions, draw)
                }
                DrawStatus::NotYetDrawn => None,
            };
            let best_hit_result = best.as_ref().map(|b| b.hit_result.clone());
            ModelBestHit {
                model_id: model.model_id.clone(),
                model_name: model.model_name.clone(),
                best,
                best_hit_result,
            }
        })
        .collect();

    let response = BestHitsResponse {
        schema_version: request.schema_version,
        game_type: game.code(),
        target_period: target,
        drawn,
        actual_result,
        models,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZE_FAILED, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compare_endpoint_end_to_end() {
        let request = json!({
            "schema_version": 1,
            "game_type": "ssq",
            "prediction": {
                "red_balls": ["01", "05", "13", "20", "29", "33"],
                "blue_ball": "09"
            },
            "actual": {
                "period": "2024001",
                "red_balls": ["01", "05", "12", "20", "28", "33"],
                "blue_ball": "09"
            }
        });
        let response = compare_prediction_json(&request.to_string()).unwrap();
        let hit: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(hit["main_hit_count"], 4);
        assert_eq!(hit["special_hit"], true);
        assert_eq!(hit["total_hits"], 5);
    }

    #[test]
    fn schema_version_is_enforced() {
        let request = json!({
            "schema_version": 9,
            "prediction": {},
            "actual": {}
        });
        let err = compare_prediction_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_SCHEMA_VERSION));
    }

    #[test]
    fn bad_request_reports_a_code() {
        let err = compare_prediction_json("{oops").unwrap_err();
        assert!(err.starts_with(error_codes::BAD_REQUEST));
    }

    #[test]
    fn normalize_endpoint_handles_legacy_fields() {
        let request = json!({
            "schema_version": 1,
            "game_type": "fc3d",
            "hit_result": { "positionHitCount": 3, "groupHitCount": 3 }
        });
        let response = normalize_hit_result_json(&request.to_string()).unwrap();
        let hit: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(hit["position_hit_count"], 3);
        assert_eq!(hit["exact_match"], true);
    }

    #[test]
    fn best_hits_endpoint_reports_not_yet_drawn() {
        let request = json!({
            "schema_version": 1,
            "game_type": "ssq",
            "predictions": {
                "target_period": "2024099",
                "models": [{
                    "model_id": "model-a",
                    "model_name": "Model A",
                    "predictions": [{
                        "group_id": 1,
                        "red_balls": ["01", "05", "12", "20", "28", "33"],
                        "blue_ball": "09"
                    }]
                }]
            },
            "history": {
                "data": [{
                    "period": "2024001",
                    "red_balls": ["01", "05", "12", "20", "28", "33"],
                    "blue_ball": "09"
                }]
            }
        });
        let response = model_best_hits_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["drawn"], false);
        assert!(parsed["models"][0].get("best").is_none());
    }

    #[test]
    fn best_hits_endpoint_selects_for_drawn_period() {
        let request = json!({
            "schema_version": 1,
            "game_type": "fc3d",
            "predictions": {
                "target_period": "2024001",
                "models": [{
                    "model_id": "model-a",
                    "model_name": "Model A",
                    "predictions": [
                        {"group_id": 1, "digits": ["9", "9", "9"]},
                        {"group_id": 2, "digits": ["3", "3", "1"]}
                    ]
                }]
            },
            "history": {
                "data": [{"period": "2024001", "digits": ["3", "3", "7"]}]
            }
        });
        let response = model_best_hits_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["drawn"], true);
        assert_eq!(parsed["models"][0]["best"]["group_id"], 2);
        assert_eq!(parsed["models"][0]["best_hit_result"]["position_hit_count"], 2);
    }
}
