use serde::{Deserialize, Serialize};

/// Supported lottery games.
///
/// Every entry point takes one of these; unknown or absent game codes fall
/// back to the two-color-ball game rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    /// Two-color ball (SSQ): six main numbers 01-33 plus one special 01-16.
    #[serde(rename = "ssq")]
    TwoColorBall,
    /// 3D game (FC3D): three ordered digits 0-9.
    #[serde(rename = "fc3d")]
    ThreeDigit,
}

impl GameType {
    /// Resolve a wire code, defaulting to the two-color-ball game for
    /// unknown or missing codes.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("fc3d") => GameType::ThreeDigit,
            Some("ssq") => GameType::TwoColorBall,
            other => {
                if let Some(code) = other {
                    log::debug!("unknown game code {:?}, falling back to ssq", code);
                }
                GameType::TwoColorBall
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GameType::TwoColorBall => "ssq",
            GameType::ThreeDigit => "fc3d",
        }
    }
}

impl Default for GameType {
    fn default() -> Self {
        GameType::TwoColorBall
    }
}
