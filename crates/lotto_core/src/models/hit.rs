use serde::{Deserialize, Serialize};

/// Canonical hit result for one prediction measured against one draw.
///
/// The shape is uniform across both games: fields irrelevant to a game type
/// are present but zero/empty, so downstream consumers never branch on
/// schema. Hit results are derived data, recomputed per comparison, and
/// never stored authoritatively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    /// Main-number hits (two-color ball): how many predicted main numbers
    /// appear in the draw.
    pub main_hit_count: u32,
    /// The matched main-number values, in prediction order.
    pub main_hits: Vec<String>,
    /// Whether the special number matched (two-color ball only).
    pub special_hit: bool,

    /// Headline metric. Two-color ball: main hits + special hit.
    /// 3D: position-hit count (group hits are tracked separately and
    /// deliberately not folded in).
    pub total_hits: u32,

    /// Index-wise digit matches (3D only).
    pub position_hit_count: u32,
    pub position_hit_indices: Vec<usize>,
    /// Multiset digit matches ignoring position (3D only).
    pub group_hit_count: u32,
    /// All three positions matched (3D only).
    pub exact_match: bool,

    /// Every win category the prediction satisfies, as stable label codes.
    pub win_types: Vec<String>,
    /// Subset of `win_types` restricted to the prize-bearing categories
    /// (direct selection, triple, group-3, group-6).
    pub core_win_types: Vec<String>,
}

impl HitResult {
    /// The all-zero result used when a comparison cannot be made
    /// (wrong-length payloads, missing fields).
    pub fn zero() -> Self {
        HitResult::default()
    }
}
