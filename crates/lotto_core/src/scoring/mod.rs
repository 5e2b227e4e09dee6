//! # Scoring Module
//!
//! The algorithmic core: fresh hit computation, legacy hit-record
//! normalization, win-condition classification and best-hit selection.
//!
//! ## Submodules
//!
//! - `compare` - fresh HitResult from a prediction + draw pair
//! - `normalize` - legacy precomputed hit records -> canonical shape
//! - `wins` - 3D win-condition classifier
//! - `best_hit` - best group per model, drawn-status resolution

pub mod best_hit;
pub mod compare;
pub mod normalize;
pub mod wins;

pub use best_hit::{draw_status, select_best_hit, select_model_best_hit, BestHit, DrawStatus};
pub use compare::compare;
pub use normalize::normalize_hit_result;
pub use wins::{classify_wins, WinType};
