use serde::{Deserialize, Serialize};

use crate::analysis::{
    hottest, main_number_frequency, odd_even_distribution, position_digit_frequency,
    shape_distribution, special_number_frequency, sum_trend, zone_distribution, FrequencyEntry,
    RatioBucket, ShapeCount, SumTrend, ZoneCount,
};
use crate::data::format_last_updated;
use crate::models::{GameType, HistoryDoc};

use super::{check_schema_version, err_code, error_codes};

#[derive(Debug, Deserialize)]
pub struct StatisticsRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub game_type: Option<String>,
    pub history: HistoryDoc,
}

#[derive(Debug, Serialize)]
struct StatisticsResponse {
    schema_version: u8,
    game_type: &'static str,
    draw_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,

    main_frequency: Vec<FrequencyEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    special_frequency: Vec<FrequencyEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    position_frequency: Vec<Vec<FrequencyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hottest_main: Option<FrequencyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hottest_special: Option<FrequencyEntry>,

    odd_even: Vec<RatioBucket>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    zones: Vec<ZoneCount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    shapes: Vec<ShapeCount>,
    sum_trend: SumTrend,
}

/// All aggregate statistics for a draw-history document in one response.
///
/// Request: `{schema_version, game_type?, history: {...}}`. Zone tables are
/// emitted for the two-color-ball game, per-position digit and shape tables
/// for the 3D game.
pub fn draw_statistics_json(request_json: &str) -> Result<String, String> {
    let request: StatisticsRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::BAD_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let game = GameType::from_code(request.game_type.as_deref());
    let draws = &request.history.data;
    log::debug!("[{}] statistics request over {} draws", game.code(), draws.len());

    let main_frequency = main_number_frequency(game, draws);
    let special_frequency = special_number_frequency(game, draws);
    let position_frequency = match game {
        GameType::ThreeDigit => position_digit_frequency(draws),
        GameType::TwoColorBall => Vec::new(),
    };
    let zones = match game {
        GameType::TwoColorBall => zone_distribution(draws),
        GameType::ThreeDigit => Vec::new(),
    };
    let shapes = match game {
        GameType::ThreeDigit => shape_distribution(draws),
        GameType::TwoColorBall => Vec::new(),
    };

    let response = StatisticsResponse {
        schema_version: request.schema_version,
        game_type: game.code(),
        draw_count: draws.len(),
        last_updated: format_last_updated(&request.history),
        hottest_main: hottest(&main_frequency).cloned(),
        hottest_special: hottest(&special_frequency).cloned(),
        main_frequency,
        special_frequency,
        position_frequency,
        odd_even: odd_even_distribution(game, draws),
        zones,
        shapes,
        sum_trend: sum_trend(game, draws),
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZE_FAILED, e))
}
