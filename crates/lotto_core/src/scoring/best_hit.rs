//! Best-hit selection across a model's prediction groups, and drawn-status
//! resolution for a target period.

use serde::Serialize;

use crate::models::{Draw, GameType, HitResult, ModelPrediction, PredictionGroup};

use super::compare::compare;

/// Whether a target period has been resolved by an actual draw.
///
/// "Not yet drawn" is a valid, expected state, never an error; predictions
/// routinely target a period before its draw happens.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawStatus<'a> {
    Drawn(&'a Draw),
    NotYetDrawn,
}

impl DrawStatus<'_> {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawStatus::Drawn(_))
    }
}

/// Resolve a target period against draw history (newest-first slice).
pub fn draw_status<'a>(history: &'a [Draw], target_period: &str) -> DrawStatus<'a> {
    match history.iter().find(|d| d.period == target_period) {
        Some(draw) => DrawStatus::Drawn(draw),
        None => DrawStatus::NotYetDrawn,
    }
}

/// The winning group of a best-hit selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestHit {
    /// Position of the group in the model's given order.
    pub group_index: usize,
    pub group_id: u32,
    pub hit_result: HitResult,
}

/// Select the group with the maximum `total_hits` against the draw.
///
/// Ties keep the first group in the given order; None only for an empty
/// group list.
pub fn select_best_hit(
    game: GameType,
    groups: &[PredictionGroup],
    draw: &Draw,
) -> Option<BestHit> {
    let mut best: Option<BestHit> = None;
    for (index, group) in groups.iter().enumerate() {
        let hit = compare(game, group, draw);
        let better = match &best {
            Some(current) => hit.total_hits > current.hit_result.total_hits,
            None => true,
        };
        if better {
            best = Some(BestHit { group_index: index, group_id: group.group_id, hit_result: hit });
        }
    }
    best
}

/// Best-hit selection for a whole model, or None while the period is
/// still undrawn.
pub fn select_model_best_hit(
    game: GameType,
    model: &ModelPrediction,
    history: &[Draw],
    target_period: &str,
) -> Option<BestHit> {
    match draw_status(history, target_period) {
        DrawStatus::Drawn(draw) => select_best_hit(game, &model.predictions, draw),
        DrawStatus::NotYetDrawn => None,
    }
}
