//! Win-Condition Classifier (3D game)
//!
//! Derives every named win category a prediction satisfies against a draw,
//! independent of the group's declared play type: a prediction may win a
//! category it wasn't explicitly targeting.

use crate::models::Shape;
use crate::rules::parse_values;

/// A named win category of the 3D game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    /// All three positions match.
    DirectSelection,
    /// Same digit multiset, both sides all-identical.
    Triple,
    /// Same digit multiset, both sides with exactly one repeated digit.
    Group3,
    /// Same digit multiset, both sides all-distinct.
    Group6,
    /// Digit sums are equal (informational).
    SumMatch,
    /// max - min spans are equal (informational).
    SpanMatch,
    /// N positions matched, N > 0 (informational).
    PositionHits(u8),
}

impl WinType {
    /// Stable label code for the output boundary.
    pub fn label(&self) -> String {
        match self {
            WinType::DirectSelection => "direct_selection".to_string(),
            WinType::Triple => "triple".to_string(),
            WinType::Group3 => "group_3".to_string(),
            WinType::Group6 => "group_6".to_string(),
            WinType::SumMatch => "sum_match".to_string(),
            WinType::SpanMatch => "span_match".to_string(),
            WinType::PositionHits(n) => format!("{}_positions_hit", n),
        }
    }

    /// Prize-bearing categories; sum/span/position labels are informational.
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            WinType::DirectSelection | WinType::Triple | WinType::Group3 | WinType::Group6
        )
    }
}

/// Classify all win categories for a 3D prediction/draw digit pair.
///
/// `position_hit_count` is the already-computed index-wise match count for
/// the same pair. Anything but two full-length sequences yields no wins.
pub fn classify_wins(
    prediction: &[String],
    draw: &[String],
    position_hit_count: u32,
) -> Vec<WinType> {
    let mut wins = Vec::new();
    if prediction.len() != 3 || draw.len() != 3 {
        return wins;
    }

    if position_hit_count == 3 {
        wins.push(WinType::DirectSelection);
    }

    // A shape win requires the same digit multiset AND both sides
    // independently classifying to that shape.
    let mut pred_sorted = prediction.to_vec();
    pred_sorted.sort();
    let mut draw_sorted = draw.to_vec();
    draw_sorted.sort();
    if pred_sorted == draw_sorted {
        if let (Some(pred_shape), Some(draw_shape)) =
            (Shape::classify(prediction), Shape::classify(draw))
        {
            if pred_shape == draw_shape {
                wins.push(match pred_shape {
                    Shape::Triple => WinType::Triple,
                    Shape::Group3 => WinType::Group3,
                    Shape::Group6 => WinType::Group6,
                });
            }
        }
    }

    if let (Some(pred_values), Some(draw_values)) =
        (parse_values(prediction), parse_values(draw))
    {
        if pred_values.iter().sum::<u32>() == draw_values.iter().sum::<u32>() {
            wins.push(WinType::SumMatch);
        }
        if span(&pred_values) == span(&draw_values) {
            wins.push(WinType::SpanMatch);
        }
    }

    if position_hit_count > 0 {
        wins.push(WinType::PositionHits(position_hit_count as u8));
    }

    wins
}

fn span(values: &[u32]) -> u32 {
    let max = values.iter().max().copied().unwrap_or(0);
    let min = values.iter().min().copied().unwrap_or(0);
    max - min
}

/// Label codes for a win list.
pub fn labels(wins: &[WinType]) -> Vec<String> {
    wins.iter().map(WinType::label).collect()
}

/// Label codes of the prize-bearing subset.
pub fn core_labels(wins: &[WinType]) -> Vec<String> {
    wins.iter().filter(|w| w.is_core()).map(WinType::label).collect()
}
