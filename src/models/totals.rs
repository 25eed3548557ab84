use serde::{Deserialize, Serialize};

/// Net weight per substance across the whole ledger, in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateTotals {
    pub coco_total: f64,
    pub sugar_total: f64,
}

impl AggregateTotals {
    /// True when either substance has any weight.
    #[inline]
    pub fn has_any(&self) -> bool {
        self.coco_total > 0.0 || self.sugar_total > 0.0
    }
}
