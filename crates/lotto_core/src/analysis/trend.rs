//! Sum trend over the most recent draws.

use serde::Serialize;

use crate::models::{Draw, GameType};
use crate::rules::{parse_values, rules_for};

/// Trend window: the most recent 30 draws.
pub const SUM_TREND_WINDOW: usize = 30;

/// Main-number sums over a recent window, in chronological order
/// (oldest first), with the window mean as a constant reference series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SumTrend {
    pub periods: Vec<String>,
    pub sums: Vec<u32>,
    pub mean: f64,
}

/// Sum trend over the most recent [`SUM_TREND_WINDOW`] draws.
///
/// Input is newest-first as the history document orders it; the output is
/// reversed to oldest-first for charting. Malformed draws are skipped and
/// do not consume window slots.
pub fn sum_trend(game: GameType, draws: &[Draw]) -> SumTrend {
    sum_trend_window(game, draws, SUM_TREND_WINDOW)
}

/// Sum trend over an explicit window size.
pub fn sum_trend_window(game: GameType, draws: &[Draw], window: usize) -> SumTrend {
    let rules = rules_for(game);
    let mut recent: Vec<(String, u32)> = Vec::with_capacity(window);

    for draw in draws {
        if recent.len() == window {
            break;
        }
        let numbers = rules.main_numbers(draw);
        if !rules.is_full_length(&numbers) {
            continue;
        }
        if let Some(values) = parse_values(&numbers) {
            recent.push((draw.period.clone(), values.iter().sum()));
        }
    }

    // newest-first -> oldest-first
    recent.reverse();

    let mean = if recent.is_empty() {
        0.0
    } else {
        recent.iter().map(|(_, s)| *s as f64).sum::<f64>() / recent.len() as f64
    };

    SumTrend {
        periods: recent.iter().map(|(p, _)| p.clone()).collect(),
        sums: recent.iter().map(|(_, s)| *s).collect(),
        mean,
    }
}
