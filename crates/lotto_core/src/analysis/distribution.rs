//! Ratio, zone and shape distributions over draw history.

use serde::Serialize;

use crate::models::{Draw, GameType, Shape};
use crate::rules::{parse_values, rules_for};

/// One odd:even ratio bucket, e.g. "3:3".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatioBucket {
    pub ratio: String,
    pub count: u32,
}

/// Per-draw odd/even ratio of the main numbers, bucketed over the game's
/// fixed bucket set (7 buckets for six numbers, 4 for three digits).
/// Buckets with zero occurrences are omitted. Malformed draws are skipped.
pub fn odd_even_distribution(game: GameType, draws: &[Draw]) -> Vec<RatioBucket> {
    let rules = rules_for(game);
    let mut counts = vec![0u32; rules.main_len + 1];

    for draw in draws {
        let numbers = rules.main_numbers(draw);
        if !rules.is_full_length(&numbers) {
            continue;
        }
        let values = match parse_values(&numbers) {
            Some(values) => values,
            None => continue,
        };
        let odd = values.iter().filter(|v| *v % 2 == 1).count();
        counts[odd] += 1;
    }

    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(odd, &count)| RatioBucket {
            ratio: format!("{}:{}", odd, rules.main_len - odd),
            count,
        })
        .collect()
}

/// One zone of the main-number range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    /// Zone label, e.g. "01-11".
    pub zone: String,
    pub count: u32,
}

/// Occurrences of main numbers per contiguous zone (two-color ball:
/// 01-11 / 12-22 / 23-33). All zones appear, zero counts included.
pub fn zone_distribution(draws: &[Draw]) -> Vec<ZoneCount> {
    let rules = rules_for(GameType::TwoColorBall);
    let mut counts = vec![0u32; rules.zones.len()];

    for draw in draws {
        let numbers = rules.main_numbers(draw);
        if !rules.is_full_length(&numbers) {
            continue;
        }
        let values = match parse_values(&numbers) {
            Some(values) => values,
            None => continue,
        };
        for value in values {
            if let Some(zone) = rules.zone_index(value) {
                counts[zone] += 1;
            }
        }
    }

    rules
        .zones
        .iter()
        .zip(counts.iter())
        .map(|(&(lo, hi), &count)| ZoneCount {
            zone: format!("{}-{}", rules.format_value(lo), rules.format_value(hi)),
            count,
        })
        .collect()
}

/// One shape category count of the 3D game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeCount {
    pub shape: String,
    pub count: u32,
}

/// Draws per shape category (triple / group-3 / group-6). The shape is
/// derived from the digits, not trusted from the record's stored label, so
/// legacy records with missing or localized labels aggregate correctly.
/// All three categories appear, zero counts included.
pub fn shape_distribution(draws: &[Draw]) -> Vec<ShapeCount> {
    let rules = rules_for(GameType::ThreeDigit);
    let mut counts = [0u32; 3];

    for draw in draws {
        let digits = rules.main_numbers(draw);
        match Shape::classify(&digits) {
            Some(Shape::Triple) => counts[0] += 1,
            Some(Shape::Group3) => counts[1] += 1,
            Some(Shape::Group6) => counts[2] += 1,
            None => {}
        }
    }

    [Shape::Triple, Shape::Group3, Shape::Group6]
        .iter()
        .zip(counts.iter())
        .map(|(shape, &count)| ShapeCount { shape: shape.label().to_string(), count })
        .collect()
}
