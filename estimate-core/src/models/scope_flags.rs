use serde::{Deserialize, Serialize};

/// Independent toggles gating entire cost buckets on or off.
///
/// Flags are orthogonal (any combination is valid) and carry no state of
/// their own; they are re-evaluated on every recomputation. A disabled flag
/// drives its bucket to exactly zero.
///
/// Two pooled costs ride an adjacent flag rather than their own: rigging is
/// gated by `freight` (crane and set at delivery), and the rep fee, startup,
/// and chemical-storage costs are gated by `equipment` (commissioning of the
/// equipment they accompany).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFlags {
    pub materials: bool,
    pub labor: bool,
    pub equipment: bool,
    pub freight: bool,
    pub design_engineering: bool,
    pub design_contingency: bool,
    pub warranty: bool,
}

impl ScopeFlags {
    /// All buckets enabled, the normal full-scope estimate.
    pub fn all_enabled() -> Self {
        Self {
            materials: true,
            labor: true,
            equipment: true,
            freight: true,
            design_engineering: true,
            design_contingency: true,
            warranty: true,
        }
    }
}

impl Default for ScopeFlags {
    fn default() -> Self {
        Self::all_enabled()
    }
}
