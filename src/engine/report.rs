use serde::Serialize;

use crate::engine::calculations::{
    aggregate, delta_label, display_ratio_label, required_coco, required_sugar, DeltaLabel,
    RatioLabel,
};
use crate::models::{AggregateTotals, ContainerRecord};

/// Required amounts and deltas for a set of totals at a ratio.
///
/// `None` required values mean the ratio makes that side not applicable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Balance {
    pub required_coco: Option<f64>,
    pub required_sugar: Option<f64>,
    pub coco_delta: Option<DeltaLabel>,
    pub sugar_delta: Option<DeltaLabel>,
}

impl Balance {
    pub fn compute(totals: &AggregateTotals, ratio: f64) -> Self {
        let required_coco = required_coco(totals.sugar_total, ratio);
        let required_sugar = required_sugar(totals.coco_total, ratio);

        Self {
            required_coco,
            required_sugar,
            coco_delta: required_coco.and_then(|r| delta_label(r, totals.coco_total)),
            sugar_delta: required_sugar.and_then(|r| delta_label(r, totals.sugar_total)),
        }
    }
}

/// Snapshot of everything the display needs.
#[derive(Debug, Clone, Serialize)]
pub struct MixReport {
    pub ratio: f64,
    pub label: RatioLabel,
    pub totals: AggregateTotals,
    pub balance: Balance,
    pub containers: Vec<ContainerRecord>,
}

impl MixReport {
    pub fn build(records: &[ContainerRecord], ratio: f64) -> Self {
        let totals = aggregate(records);

        Self {
            ratio,
            label: display_ratio_label(ratio),
            totals,
            balance: Balance::compute(&totals, ratio),
            containers: records.to_vec(),
        }
    }
}
