//! Game Rule Registry
//!
//! Per-game constants plus primitive payload extraction. Everything
//! downstream (comparator, classifier, statistics) goes through these
//! accessors so per-game branching lives in exactly one place.
//!
//! Accessors never fail: missing or malformed fields degrade to an empty
//! sequence or absence, since historical records vary in completeness.

use crate::models::{Draw, GameType, PredictionGroup};

/// Anything carrying a game payload. Draws and prediction groups share the
/// same payload field shape.
pub trait NumberRecord {
    fn red_balls(&self) -> &[String];
    fn blue_ball(&self) -> Option<&str>;
    fn digits(&self) -> &[String];
    fn number(&self) -> Option<&str>;
}

impl NumberRecord for Draw {
    fn red_balls(&self) -> &[String] {
        &self.red_balls
    }
    fn blue_ball(&self) -> Option<&str> {
        self.blue_ball.as_deref()
    }
    fn digits(&self) -> &[String] {
        &self.digits
    }
    fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }
}

impl NumberRecord for PredictionGroup {
    fn red_balls(&self) -> &[String] {
        &self.red_balls
    }
    fn blue_ball(&self) -> Option<&str> {
        self.blue_ball.as_deref()
    }
    fn digits(&self) -> &[String] {
        &self.digits
    }
    fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }
}

/// Static rule data for one game.
#[derive(Debug, Clone, Copy)]
pub struct GameRules {
    pub game: GameType,
    /// Expected main-sequence length (6 numbers or 3 digits).
    pub main_len: usize,
    /// Inclusive admissible range of a main value.
    pub main_range: (u32, u32),
    /// Inclusive range of the special number; None for games without one.
    pub special_range: Option<(u32, u32)>,
    /// Width used when zero-padding values back into wire strings.
    pub value_width: usize,
    /// Contiguous equal-width zones over the main range (two-color ball).
    pub zones: &'static [(u32, u32)],
}

const SSQ_RULES: GameRules = GameRules {
    game: GameType::TwoColorBall,
    main_len: 6,
    main_range: (1, 33),
    special_range: Some((1, 16)),
    value_width: 2,
    zones: &[(1, 11), (12, 22), (23, 33)],
};

const FC3D_RULES: GameRules = GameRules {
    game: GameType::ThreeDigit,
    main_len: 3,
    main_range: (0, 9),
    special_range: None,
    value_width: 1,
    zones: &[],
};

/// Look up the rules for a game.
pub fn rules_for(game: GameType) -> &'static GameRules {
    match game {
        GameType::TwoColorBall => &SSQ_RULES,
        GameType::ThreeDigit => &FC3D_RULES,
    }
}

impl GameRules {
    /// Ordered main numbers of a record.
    ///
    /// Tolerates both legacy encodings: the explicit array field, or (3D
    /// only) a 3-character number string split into single digits.
    pub fn main_numbers<R: NumberRecord + ?Sized>(&self, record: &R) -> Vec<String> {
        match self.game {
            GameType::TwoColorBall => record.red_balls().to_vec(),
            GameType::ThreeDigit => {
                if !record.digits().is_empty() {
                    return record.digits().to_vec();
                }
                match record.number() {
                    Some(number)
                        if number.chars().count() == 3
                            && number.chars().all(|c| c.is_ascii_digit()) =>
                    {
                        number.chars().map(|c| c.to_string()).collect()
                    }
                    _ => Vec::new(),
                }
            }
        }
    }

    /// Special number of a record; absent entirely for the 3D game, which
    /// has no special-number concept.
    pub fn special_number<R: NumberRecord + ?Sized>(&self, record: &R) -> Option<String> {
        match self.game {
            GameType::TwoColorBall => record.blue_ball().map(str::to_string),
            GameType::ThreeDigit => None,
        }
    }

    /// Whether a main sequence has the expected length for this game.
    pub fn is_full_length(&self, numbers: &[String]) -> bool {
        numbers.len() == self.main_len
    }

    /// Render a main value back into its wire string ("01".."33", "0".."9").
    pub fn format_value(&self, value: u32) -> String {
        format!("{:0width$}", value, width = self.value_width)
    }

    /// Zone index of a main value (two-color ball); None outside all zones.
    pub fn zone_index(&self, value: u32) -> Option<usize> {
        self.zones.iter().position(|&(lo, hi)| value >= lo && value <= hi)
    }
}

/// Parse a string-encoded number; None for anything non-numeric.
pub fn parse_value(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Parse a full digit sequence; None if any entry is non-numeric.
pub fn parse_values(raw: &[String]) -> Option<Vec<u32>> {
    raw.iter().map(|d| parse_value(d)).collect()
}
