//! Frequency tables over draw history.
//!
//! Tables always cover the full admissible value range in ascending order,
//! initialized to zero, so sparse history still yields a complete table and
//! the hottest-value tie-break order is visible in the data itself.

use serde::Serialize;

use crate::models::{Draw, GameType};
use crate::rules::{parse_value, rules_for};

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: u32,
}

/// Occurrence counts of every admissible main value across all draws.
///
/// Two-color ball: red numbers 01-33. 3D: digits 0-9 across all three
/// positions combined (see [`position_digit_frequency`] for per-position
/// tables). Draws with short or malformed payloads are skipped.
pub fn main_number_frequency(game: GameType, draws: &[Draw]) -> Vec<FrequencyEntry> {
    let rules = rules_for(game);
    let (lo, hi) = rules.main_range;
    let mut counts = vec![0u32; (hi - lo + 1) as usize];

    for draw in draws {
        let numbers = rules.main_numbers(draw);
        if !rules.is_full_length(&numbers) {
            continue;
        }
        for raw in &numbers {
            if let Some(value) = parse_value(raw) {
                if value >= lo && value <= hi {
                    counts[(value - lo) as usize] += 1;
                }
            }
        }
    }

    counts
        .iter()
        .enumerate()
        .map(|(offset, &count)| FrequencyEntry {
            value: rules.format_value(lo + offset as u32),
            count,
        })
        .collect()
}

/// Occurrence counts of the special number (two-color ball, 01-16).
/// Empty for games without a special number.
pub fn special_number_frequency(game: GameType, draws: &[Draw]) -> Vec<FrequencyEntry> {
    let rules = rules_for(game);
    let (lo, hi) = match rules.special_range {
        Some(range) => range,
        None => return Vec::new(),
    };
    let mut counts = vec![0u32; (hi - lo + 1) as usize];

    for draw in draws {
        if let Some(value) = rules.special_number(draw).as_deref().and_then(parse_value) {
            if value >= lo && value <= hi {
                counts[(value - lo) as usize] += 1;
            }
        }
    }

    counts
        .iter()
        .enumerate()
        .map(|(offset, &count)| FrequencyEntry {
            value: rules.format_value(lo + offset as u32),
            count,
        })
        .collect()
}

/// Per-position digit frequency tables for the 3D game: one 0-9 table for
/// each of the hundreds / tens / units positions.
pub fn position_digit_frequency(draws: &[Draw]) -> Vec<Vec<FrequencyEntry>> {
    let rules = rules_for(GameType::ThreeDigit);
    let mut counts = [[0u32; 10]; 3];

    for draw in draws {
        let digits = rules.main_numbers(draw);
        if !rules.is_full_length(&digits) {
            continue;
        }
        for (position, raw) in digits.iter().enumerate() {
            if let Some(value) = parse_value(raw) {
                if value <= 9 {
                    counts[position][value as usize] += 1;
                }
            }
        }
    }

    counts
        .iter()
        .map(|table| {
            table
                .iter()
                .enumerate()
                .map(|(digit, &count)| FrequencyEntry { value: digit.to_string(), count })
                .collect()
        })
        .collect()
}

/// The entry with the maximum count. Ties keep the first entry in table
/// order, which is ascending value order.
pub fn hottest(table: &[FrequencyEntry]) -> Option<&FrequencyEntry> {
    let mut best: Option<&FrequencyEntry> = None;
    for entry in table {
        match best {
            Some(current) if entry.count <= current.count => {}
            _ => best = Some(entry),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(s: &[&str]) -> Vec<String> {
        s.iter().map(|v| v.to_string()).collect()
    }

    fn ssq_draw(reds: &[&str], blue: &str) -> Draw {
        Draw {
            red_balls: strs(reds),
            blue_ball: Some(blue.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn table_covers_full_range_even_with_no_history() {
        let table = main_number_frequency(GameType::TwoColorBall, &[]);
        assert_eq!(table.len(), 33);
        assert_eq!(table[0].value, "01");
        assert_eq!(table[32].value, "33");
        assert!(table.iter().all(|e| e.count == 0));

        let blue = special_number_frequency(GameType::TwoColorBall, &[]);
        assert_eq!(blue.len(), 16);
        assert!(special_number_frequency(GameType::ThreeDigit, &[]).is_empty());
    }

    #[test]
    fn counts_accumulate_across_draws() {
        let draws = vec![
            ssq_draw(&["01", "05", "12", "20", "28", "33"], "09"),
            ssq_draw(&["01", "07", "14", "20", "26", "31"], "09"),
        ];
        let table = main_number_frequency(GameType::TwoColorBall, &draws);
        let count_of = |v: &str| table.iter().find(|e| e.value == v).unwrap().count;
        assert_eq!(count_of("01"), 2);
        assert_eq!(count_of("20"), 2);
        assert_eq!(count_of("05"), 1);
        assert_eq!(count_of("02"), 0);

        let blue = special_number_frequency(GameType::TwoColorBall, &draws);
        assert_eq!(blue.iter().find(|e| e.value == "09").unwrap().count, 2);
    }

    #[test]
    fn malformed_draws_are_skipped_not_fatal() {
        let draws = vec![
            ssq_draw(&["01", "05", "12"], "09"), // short payload
            ssq_draw(&["01", "05", "12", "20", "28", "33"], "09"),
        ];
        let table = main_number_frequency(GameType::TwoColorBall, &draws);
        assert_eq!(table.iter().find(|e| e.value == "01").unwrap().count, 1);
    }

    #[test]
    fn per_position_digit_tables() {
        let draws = vec![
            Draw { digits: strs(&["3", "3", "7"]), ..Default::default() },
            Draw { digits: strs(&["3", "1", "7"]), ..Default::default() },
        ];
        let tables = position_digit_frequency(&draws);
        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0][3].count, 2); // hundreds: "3" twice
        assert_eq!(tables[1][3].count, 1);
        assert_eq!(tables[1][1].count, 1);
        assert_eq!(tables[2][7].count, 2);
    }

    #[test]
    fn hottest_tie_break_is_first_in_ascending_order() {
        let draws = vec![
            ssq_draw(&["01", "05", "12", "20", "28", "33"], "09"),
            ssq_draw(&["02", "05", "13", "21", "29", "32"], "09"),
        ];
        // "05" has count 2; everything else 1 or 0
        let table = main_number_frequency(GameType::TwoColorBall, &draws);
        assert_eq!(hottest(&table).unwrap().value, "05");

        // All-equal counts: the first value of the range wins, every run.
        let uniform = main_number_frequency(GameType::TwoColorBall, &[]);
        assert_eq!(hottest(&uniform).unwrap().value, "01");
        assert!(hottest(&[]).is_none());
    }
}
