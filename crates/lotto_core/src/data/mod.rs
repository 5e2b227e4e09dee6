//! Boundary document parsing.
//!
//! Fetching the raw JSON is the data-loading collaborator's job and happens
//! before anything here runs; this module only turns fetched text into the
//! typed documents. Parse failures are the one truly exceptional condition
//! of the engine and surface as [`LottoError`].

use crate::error::Result;
use crate::models::{HistoryDoc, PredictionsDoc, PredictionsHistoryDoc};

/// Parse a draw-history document (ordered newest-first).
pub fn parse_history_doc(json: &str) -> Result<HistoryDoc> {
    let doc: HistoryDoc = serde_json::from_str(json)?;
    log::debug!("parsed history document: {} draws", doc.data.len());
    Ok(doc)
}

/// Parse a current-predictions document.
pub fn parse_predictions_doc(json: &str) -> Result<PredictionsDoc> {
    let doc: PredictionsDoc = serde_json::from_str(json)?;
    log::debug!(
        "parsed predictions document: target {} with {} models",
        doc.target_period,
        doc.models.len()
    );
    Ok(doc)
}

/// Parse a prediction-history document.
pub fn parse_predictions_history_doc(json: &str) -> Result<PredictionsHistoryDoc> {
    let doc: PredictionsHistoryDoc = serde_json::from_str(json)?;
    log::debug!(
        "parsed predictions-history document: {} archived periods",
        doc.predictions_history.len()
    );
    Ok(doc)
}

/// Human-readable `last_updated` timestamp of a history document, if
/// present and well-formed.
pub fn format_last_updated(doc: &HistoryDoc) -> Option<String> {
    doc.last_updated_time().map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_doc_round_trip() {
        let doc = parse_history_doc(
            r#"{
                "last_updated": "2024-03-05T13:15:00+08:00",
                "data": [
                    {"period": "2024002", "date": "2024-03-05",
                     "red_balls": ["01","05","12","20","28","33"], "blue_ball": "09"},
                    {"period": "2024001", "date": "2024-03-03"}
                ],
                "next_draw": {"next_period": "2024003"}
            }"#,
        )
        .unwrap();
        assert_eq!(doc.data.len(), 2);
        assert_eq!(doc.latest().unwrap().period, "2024002");
        assert_eq!(doc.next_draw.as_ref().unwrap().next_period, "2024003");
        assert_eq!(format_last_updated(&doc).unwrap(), "2024-03-05 05:15:00");
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let err = parse_history_doc("{not json").unwrap_err();
        assert!(err.to_string().contains("Deserialization"));
    }

    #[test]
    fn predictions_doc_parses_real_shape() {
        let doc = parse_predictions_doc(
            r#"{
                "prediction_date": "2024-03-05",
                "target_period": "2024003",
                "models": [{
                    "model_id": "model-a",
                    "model_name": "Model A",
                    "predictions": [{
                        "group_id": 1,
                        "strategy": "hot streak",
                        "digits": ["3","3","7"],
                        "number": "337",
                        "play_type": "组三"
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.models[0].predictions[0].number.as_deref(), Some("337"));
    }
}
