//! Boundary data model: draws, predictions, the canonical hit result and
//! the game-type selector threaded through every entry point.

pub mod draw;
pub mod game;
pub mod hit;
pub mod prediction;

pub use draw::{Draw, HistoryDoc, NextDraw};
pub use game::GameType;
pub use hit::HitResult;
pub use prediction::{
    ModelPrediction, PlayType, PredictionGroup, PredictionsDoc, PredictionsHistoryDoc,
    PredictionsHistoryEntry, Shape,
};
