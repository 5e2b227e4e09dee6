//! Prediction-history archival.
//!
//! Once a target period has been drawn, the live predictions document is
//! turned into a history entry: every group gets its computed hit result
//! attached and every model gets its best group marked. This module only
//! builds the records; reading and writing the JSON files stays with the
//! external data collaborator.

use serde::Serialize;

use crate::models::{
    Draw, GameType, HitResult, ModelPrediction, PredictionsDoc, PredictionsHistoryDoc,
    PredictionsHistoryEntry, Shape,
};
use crate::rules::parse_values;
use crate::scoring::compare;

/// Fields derivable from a 3D digit sequence, as the history fetcher
/// attaches them to each draw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitDerivation {
    /// Concatenated digit string, e.g. "337".
    pub number: String,
    pub sum: u32,
    pub span: u32,
    /// Shape label code ("triple" / "group_3" / "group_6").
    pub shape: String,
}

/// Derive number/sum/span/shape for a 3-digit sequence; None for anything
/// that is not three numeric digits.
pub fn derive_digit_fields(digits: &[String]) -> Option<DigitDerivation> {
    let shape = Shape::classify(digits)?;
    let values = parse_values(digits)?;
    if values.iter().any(|v| *v > 9) {
        return None;
    }
    let max = values.iter().max().copied().unwrap_or(0);
    let min = values.iter().min().copied().unwrap_or(0);
    Some(DigitDerivation {
        number: digits.concat(),
        sum: values.iter().sum(),
        span: max - min,
        shape: shape.label().to_string(),
    })
}

/// Prize-aware ranking score for a 3D hit result. Direct selection
/// dominates, then triple, group-3, group-6; position and group hits break
/// remaining ties.
pub fn prize_score(hit: &HitResult) -> u32 {
    let mut score = 0u32;
    for win in &hit.core_win_types {
        score += match win.as_str() {
            "direct_selection" => 1000,
            "triple" => 500,
            "group_3" => 100,
            "group_6" => 50,
            _ => 0,
        };
    }
    score + hit.position_hit_count * 10 + hit.group_hit_count
}

/// Result of an archival pass.
#[derive(Debug, Clone)]
pub enum ArchiveOutcome {
    /// The target period has no draw yet; nothing to archive.
    NotYetDrawn,
    /// The period is already present in the history document.
    AlreadyArchived,
    /// Freshly built history entry, ready to prepend.
    Archived(PredictionsHistoryEntry),
}

/// Build the history entry for a predictions document, if its target period
/// has been drawn and is not archived yet.
pub fn archive_predictions(
    game: GameType,
    predictions: &PredictionsDoc,
    history: &[Draw],
    existing: &PredictionsHistoryDoc,
) -> ArchiveOutcome {
    let target = &predictions.target_period;
    let actual = match history.iter().find(|d| &d.period == target) {
        Some(draw) => draw,
        None => {
            log::debug!("[{}] period {} not drawn yet, skipping archive", game.code(), target);
            return ArchiveOutcome::NotYetDrawn;
        }
    };
    if existing.contains_period(target) {
        log::debug!("[{}] period {} already archived", game.code(), target);
        return ArchiveOutcome::AlreadyArchived;
    }

    let models = predictions
        .models
        .iter()
        .map(|model| archive_model(game, model, actual))
        .collect();

    log::info!("[{}] archived period {}", game.code(), target);
    ArchiveOutcome::Archived(PredictionsHistoryEntry {
        prediction_date: non_empty(&predictions.prediction_date),
        target_period: target.clone(),
        actual_result: Some(actual.clone()),
        models,
    })
}

/// Attach hit results to every group of a model and mark its best group.
fn archive_model(game: GameType, model: &ModelPrediction, actual: &Draw) -> ModelPrediction {
    let hits: Vec<HitResult> =
        model.predictions.iter().map(|group| compare(game, group, actual)).collect();

    // Best group: 3D ranks by prize score so a group win outranks a lucky
    // position count; two-color ball ranks by total hits. First max wins.
    let best_index = match game {
        GameType::ThreeDigit => index_of_max(hits.iter().map(prize_score)),
        GameType::TwoColorBall => index_of_max(hits.iter().map(|h| h.total_hits)),
    };

    let predictions = model
        .predictions
        .iter()
        .zip(hits.iter())
        .map(|(group, hit)| {
            let mut archived = group.clone();
            archived.hit_result = serde_json::to_value(hit).ok();
            archived
        })
        .collect();

    ModelPrediction {
        model_id: model.model_id.clone(),
        model_name: model.model_name.clone(),
        predictions,
        best_group: best_index.map(|i| model.predictions[i].group_id),
        // The headline count stays the game's total-hits metric (position
        // count for 3D) regardless of how the best group was ranked.
        best_hit_count: best_index.map(|i| hits[i].total_hits),
    }
}

fn index_of_max<I: IntoIterator<Item = u32>>(scores: I) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
