use serde::{Deserialize, Serialize};

use crate::archive::{archive_predictions, ArchiveOutcome};
use crate::models::{GameType, HistoryDoc, PredictionsDoc, PredictionsHistoryDoc, PredictionsHistoryEntry};

use super::{check_schema_version, err_code, error_codes};

#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub game_type: Option<String>,
    pub predictions: PredictionsDoc,
    pub history: HistoryDoc,
    /// Existing prediction-history document, for duplicate detection.
    #[serde(default)]
    pub existing: PredictionsHistoryDoc,
}

#[derive(Debug, Serialize)]
struct ArchiveResponse {
    schema_version: u8,
    game_type: &'static str,
    target_period: String,
    /// "archived" | "not_yet_drawn" | "already_archived"
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry: Option<PredictionsHistoryEntry>,
}

/// Build the archive entry for a predictions document once its target
/// period has been drawn. The caller persists the entry; this endpoint
/// only computes it.
pub fn archive_predictions_json(request_json: &str) -> Result<String, String> {
    let request: ArchiveRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::BAD_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let game = GameType::from_code(request.game_type.as_deref());
    let target_period = request.predictions.target_period.clone();

    let outcome =
        archive_predictions(game, &request.predictions, &request.history.data, &request.existing);
    let (status, entry) = match outcome {
        ArchiveOutcome::NotYetDrawn => ("not_yet_drawn", None),
        ArchiveOutcome::AlreadyArchived => ("already_archived", None),
        ArchiveOutcome::Archived(entry) => ("archived", Some(entry)),
    };

    let response = ArchiveResponse {
        schema_version: request.schema_version,
        game_type: game.code(),
        target_period,
        status,
        entry,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZE_FAILED, e))
}
