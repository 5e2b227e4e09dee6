//! Match Comparator
//!
//! Computes a fresh [`HitResult`] from a prediction and an actual draw.
//! Pure and stateless: identical inputs always yield identical output.

use std::collections::HashMap;

use crate::models::{Draw, GameType, HitResult, PredictionGroup};
use crate::rules::rules_for;

use super::wins;

/// Compare a prediction group against a draw under a game's rules.
///
/// Wrong-length payloads on either side produce the zero result instead of
/// an error; a short record is an expected historical state.
pub fn compare(game: GameType, prediction: &PredictionGroup, draw: &Draw) -> HitResult {
    let rules = rules_for(game);
    let predicted = rules.main_numbers(prediction);
    let actual = rules.main_numbers(draw);

    if !rules.is_full_length(&predicted) || !rules.is_full_length(&actual) {
        log::debug!(
            "[{}] short payload ({} vs {} values, expected {}), zero result",
            game.code(),
            predicted.len(),
            actual.len(),
            rules.main_len
        );
        return HitResult::zero();
    }

    match game {
        GameType::TwoColorBall => {
            let special_predicted = rules.special_number(prediction);
            let special_actual = rules.special_number(draw);
            compare_two_color_ball(&predicted, &actual, special_predicted, special_actual)
        }
        GameType::ThreeDigit => compare_three_digit(&predicted, &actual),
    }
}

/// Six main numbers by set membership, one special number by equality.
fn compare_two_color_ball(
    predicted: &[String],
    actual: &[String],
    special_predicted: Option<String>,
    special_actual: Option<String>,
) -> HitResult {
    let main_hits: Vec<String> =
        predicted.iter().filter(|n| actual.contains(n)).cloned().collect();

    let special_hit = match (special_predicted, special_actual) {
        (Some(p), Some(a)) => p == a,
        _ => false,
    };

    let main_hit_count = main_hits.len() as u32;
    HitResult {
        main_hit_count,
        main_hits,
        special_hit,
        total_hits: main_hit_count + special_hit as u32,
        ..HitResult::zero()
    }
}

/// Three digits under both matching semantics: index-wise position hits
/// (the headline metric) and multiset group hits (feeds win classification).
fn compare_three_digit(predicted: &[String], actual: &[String]) -> HitResult {
    let position_hit_indices: Vec<usize> = predicted
        .iter()
        .zip(actual.iter())
        .enumerate()
        .filter(|(_, (p, a))| p == a)
        .map(|(i, _)| i)
        .collect();
    let position_hit_count = position_hit_indices.len() as u32;

    // Multiset intersection: each draw digit satisfies at most one predicted
    // digit, consumed in prediction order.
    let mut remaining: HashMap<&String, u32> = HashMap::new();
    for digit in actual {
        *remaining.entry(digit).or_insert(0) += 1;
    }
    let mut group_hit_count = 0u32;
    for digit in predicted {
        if let Some(count) = remaining.get_mut(digit) {
            if *count > 0 {
                *count -= 1;
                group_hit_count += 1;
            }
        }
    }

    let win_types = wins::classify_wins(predicted, actual, position_hit_count);

    HitResult {
        position_hit_count,
        position_hit_indices,
        group_hit_count,
        exact_match: position_hit_count == 3,
        total_hits: position_hit_count,
        win_types: wins::labels(&win_types),
        core_win_types: wins::core_labels(&win_types),
        ..HitResult::zero()
    }
}
