use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::draw::Draw;

/// Shape category of a 3-digit sequence, derived from digit multiplicities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// All three digits identical.
    #[serde(rename = "triple")]
    Triple,
    /// Exactly two distinct values among the three digits.
    #[serde(rename = "group_3")]
    Group3,
    /// All three digits distinct.
    #[serde(rename = "group_6")]
    Group6,
}

impl Shape {
    /// Classify a digit sequence; None for anything but three digits.
    pub fn classify(digits: &[String]) -> Option<Shape> {
        if digits.len() != 3 {
            return None;
        }
        let distinct: HashSet<&String> = digits.iter().collect();
        match distinct.len() {
            1 => Some(Shape::Triple),
            2 => Some(Shape::Group3),
            3 => Some(Shape::Group6),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shape::Triple => "triple",
            Shape::Group3 => "group_3",
            Shape::Group6 => "group_6",
        }
    }
}

/// Declared play type of a 3D prediction group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayType {
    /// Direct selection: all three positions must match.
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "group_3")]
    Group3,
    #[serde(rename = "group_6")]
    Group6,
}

impl PlayType {
    /// Parse a wire label. Real prediction documents carry the Chinese
    /// play-type strings; normalized codes are accepted as well. Unknown
    /// labels yield None and get re-inferred from the digits.
    pub fn from_label(label: &str) -> Option<PlayType> {
        match label {
            "直选" | "direct" => Some(PlayType::Direct),
            "组三" | "group_3" | "group3" => Some(PlayType::Group3),
            "组六" | "group_6" | "group6" => Some(PlayType::Group6),
            _ => None,
        }
    }

    /// Play type implied by the shape of the digits themselves.
    pub fn from_shape(shape: Shape) -> Option<PlayType> {
        match shape {
            Shape::Group3 => Some(PlayType::Group3),
            Shape::Group6 => Some(PlayType::Group6),
            // A triple is not a playable group type; direct is the only
            // play that can win on it.
            Shape::Triple => None,
        }
    }
}

/// One candidate guess inside a model's prediction set.
///
/// Carries the same payload shape as a [`Draw`], plus the strategy metadata
/// and, for archived records, a precomputed hit-result blob in whatever
/// legacy field naming the revision used (see `scoring::normalize`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionGroup {
    #[serde(default)]
    pub group_id: u32,
    #[serde(default)]
    pub strategy: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    // Two-color-ball payload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub red_balls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_ball: Option<String>,

    // 3D payload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub digits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Declared play type (3D only); kept raw since legacy documents mix
    /// label languages and casings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_type: Option<String>,

    /// Precomputed hit result from an earlier data revision, field naming
    /// unspecified. Fresh comparison always takes precedence over this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_result: Option<serde_json::Value>,
}

impl PredictionGroup {
    /// Declared play type, if present and recognizable.
    pub fn declared_play_type(&self) -> Option<PlayType> {
        self.play_type.as_deref().and_then(PlayType::from_label)
    }

    /// Declared play type when consistent with the digits, otherwise the
    /// play type inferred from the digit shape. Mirrors the upstream
    /// validator, which repairs mislabeled groups instead of rejecting them.
    pub fn effective_play_type(&self) -> Option<PlayType> {
        let shape = Shape::classify(&self.digits);
        match (self.declared_play_type(), shape) {
            (Some(PlayType::Direct), _) => Some(PlayType::Direct),
            (declared, Some(shape)) => {
                let implied = PlayType::from_shape(shape);
                match declared {
                    Some(d) if implied == Some(d) => Some(d),
                    _ => implied,
                }
            }
            (declared, None) => declared,
        }
    }
}

/// A named predictor's ordered prediction groups for one target period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelPrediction {
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub predictions: Vec<PredictionGroup>,

    // Archive outputs; absent on live prediction documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_group: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_hit_count: Option<u32>,
}

/// Current-predictions boundary document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionsDoc {
    #[serde(default)]
    pub prediction_date: String,
    #[serde(default)]
    pub target_period: String,
    #[serde(default)]
    pub models: Vec<ModelPrediction>,
}

/// One archived period: the predictions as issued plus the resolved draw.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionsHistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_date: Option<String>,
    #[serde(default)]
    pub target_period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_result: Option<Draw>,
    #[serde(default)]
    pub models: Vec<ModelPrediction>,
}

/// Prediction-history boundary document, newest entries first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionsHistoryDoc {
    #[serde(default)]
    pub predictions_history: Vec<PredictionsHistoryEntry>,
}

impl PredictionsHistoryDoc {
    /// Whether a period has already been archived.
    pub fn contains_period(&self, period: &str) -> bool {
        self.predictions_history.iter().any(|h| h.target_period == period)
    }
}
