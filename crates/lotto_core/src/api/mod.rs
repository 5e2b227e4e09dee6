//! JSON-string entry points for embedding hosts.
//!
//! Every function takes a request JSON string and returns either a response
//! JSON string or an error string prefixed with a stable error code.

pub mod archive_json;
pub mod scoring_json;
pub mod stats_json;

pub use archive_json::{archive_predictions_json, ArchiveRequest};
pub use scoring_json::{
    compare_prediction_json, model_best_hits_json, normalize_hit_result_json, BestHitsRequest,
    CompareRequest, NormalizeRequest,
};
pub use stats_json::{draw_statistics_json, StatisticsRequest};

/// Error codes returned across the JSON boundary.
pub mod error_codes {
    pub const INVALID_SCHEMA_VERSION: &str = "E_INVALID_SCHEMA_VERSION";
    pub const BAD_REQUEST: &str = "E_BAD_REQUEST";
    pub const SERIALIZE_FAILED: &str = "E_SERIALIZE_FAILED";
}

pub(crate) fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

pub(crate) fn check_schema_version(found: u8) -> Result<(), String> {
    if found == crate::SCHEMA_VERSION {
        Ok(())
    } else {
        Err(err_code(
            error_codes::INVALID_SCHEMA_VERSION,
            format!("expected {}, got {found}", crate::SCHEMA_VERSION),
        ))
    }
}
