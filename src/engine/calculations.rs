use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::constants::{FINE_TUNE_PRECISION, SLIDER_PRECISION};
use crate::models::{AggregateTotals, ContainerRecord, Substance};

/// Net weight of a container's contents.
///
/// Returns `None` when either input is NaN, so incomplete input never leaks
/// into the totals.
pub fn net_weight(gross_weight: f64, container_weight: f64) -> Option<f64> {
    if gross_weight.is_nan() || container_weight.is_nan() {
        return None;
    }
    Some((gross_weight - container_weight).max(0.0))
}

/// Sum net weights per substance.
///
/// Unset records and records without a finite weight are skipped.
pub fn aggregate(records: &[ContainerRecord]) -> AggregateTotals {
    records
        .iter()
        .filter(|r| r.counts())
        .fold(AggregateTotals::default(), |mut totals, record| {
            match record.substance {
                Substance::Coco => totals.coco_total += record.net_weight,
                _ => totals.sugar_total += record.net_weight,
            }
            totals
        })
}

/// Ratio expressed as a coco/sugar percentage pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioLabel {
    pub coco_percent: f64,
    pub sugar_percent: f64,
}

impl fmt::Display for RatioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Coco) {} : {} (Sugar)",
            self.coco_percent, self.sugar_percent
        )
    }
}

/// Percentages for display, coco rounded to two decimal places.
pub fn display_ratio_label(ratio: f64) -> RatioLabel {
    let coco_percent = (ratio * 10_000.0).round() / 100.0;
    RatioLabel {
        coco_percent,
        sugar_percent: 100.0 - coco_percent,
    }
}

/// Whether a ratio lies in `[0, 1]`.
#[inline]
pub fn is_ratio_in_range(ratio: f64) -> bool {
    ratio.is_finite() && (0.0..=1.0).contains(&ratio)
}

/// Coco weight that matches `sugar_total` at `ratio`.
///
/// `None` when the ratio leaves no room for sugar (ratio of 1) or is out of
/// range.
pub fn required_coco(sugar_total: f64, ratio: f64) -> Option<f64> {
    if !is_ratio_in_range(ratio) || ratio >= 1.0 {
        return None;
    }
    Some((sugar_total / (100.0 * (1.0 - ratio)) * (100.0 * ratio)).round())
}

/// Sugar weight that matches `coco_total` at `ratio`.
///
/// `None` when the ratio leaves no room for coco (ratio of 0) or is out of
/// range.
pub fn required_sugar(coco_total: f64, ratio: f64) -> Option<f64> {
    if !is_ratio_in_range(ratio) || ratio <= 0.0 {
        return None;
    }
    Some((coco_total / (100.0 * ratio) * (100.0 * (1.0 - ratio))).round())
}

/// Signed shortfall: positive means more is needed, negative means excess.
#[inline]
pub fn delta(required: f64, actual: f64) -> f64 {
    required - actual
}

/// How far an actual amount is from the required one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "grams")]
pub enum DeltaLabel {
    Needed(f64),
    Excess(f64),
}

impl DeltaLabel {
    /// Map a signed delta to a label. Zero (or NaN) has no label.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(DeltaLabel::Needed(delta))
        } else if delta < 0.0 {
            Some(DeltaLabel::Excess(-delta))
        } else {
            None
        }
    }
}

impl fmt::Display for DeltaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaLabel::Needed(g) => write!(f, "Needed: {}g", g),
            DeltaLabel::Excess(g) => write!(f, "Excess: {}g", g),
        }
    }
}

/// Label for the gap between a required and an actual amount.
pub fn delta_label(required: f64, actual: f64) -> Option<DeltaLabel> {
    DeltaLabel::from_delta(delta(required, actual))
}

/// Fine-tune direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `+1` is up, `-1` is down, anything else is not a direction.
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Direction::Up),
            -1 => Some(Direction::Down),
            _ => None,
        }
    }

    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// Step the ratio by `step`, clamped to `[0, 1]`.
///
/// The result is rounded to millionths, so finer steps are lost.
pub fn fine_tune(ratio: f64, direction: Direction, step: f64) -> f64 {
    let stepped = ratio + direction.sign() * step;
    let rounded = (stepped * FINE_TUNE_PRECISION).round() / FINE_TUNE_PRECISION;
    rounded.clamp(0.0, 1.0)
}

/// Ratio from slider percent, rounded to thousandths.
///
/// Not clamped: the slider bounds its own input. Non-finite input gives
/// `None` and the caller keeps its current ratio.
pub fn ratio_from_percent(percent: f64) -> Option<f64> {
    if !percent.is_finite() {
        return None;
    }
    Some((percent / 100.0 * SLIDER_PRECISION).round() / SLIDER_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_weight_floors_at_zero() {
        assert_eq!(net_weight(100.0, 66.0), Some(34.0));
        assert_eq!(net_weight(50.0, 66.0), Some(0.0));
    }

    #[test]
    fn test_net_weight_nan_is_none() {
        assert_eq!(net_weight(f64::NAN, 66.0), None);
        assert_eq!(net_weight(100.0, f64::NAN), None);
    }

    #[test]
    fn test_aggregate_skips_unset_and_nan() {
        let records = vec![
            ContainerRecord::new("a", Substance::Coco, 30.0),
            ContainerRecord::new("b", Substance::Sugar, 45.0),
            ContainerRecord::new("c", Substance::Unset, 100.0),
            ContainerRecord::new("d", Substance::Coco, f64::NAN),
        ];
        let totals = aggregate(&records);
        assert_eq!(totals.coco_total, 30.0);
        assert_eq!(totals.sugar_total, 45.0);
    }

    #[test]
    fn test_required_degenerate_ratios() {
        assert_eq!(required_coco(100.0, 1.0), None);
        assert_eq!(required_sugar(100.0, 0.0), None);
        assert_eq!(required_coco(100.0, 0.0), Some(0.0));
        assert_eq!(required_sugar(100.0, 1.0), Some(0.0));
        assert_eq!(required_sugar(100.0, 1.5), None);
        assert_eq!(required_coco(100.0, f64::NAN), None);
    }

    #[test]
    fn test_delta_label_sign() {
        assert_eq!(delta_label(60.0, 0.0), Some(DeltaLabel::Needed(60.0)));
        assert_eq!(delta_label(60.0, 75.0), Some(DeltaLabel::Excess(15.0)));
        assert_eq!(delta_label(60.0, 60.0), None);
        assert_eq!(DeltaLabel::Needed(60.0).to_string(), "Needed: 60g");
        assert_eq!(DeltaLabel::Excess(15.0).to_string(), "Excess: 15g");
    }

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::from_sign(1), Some(Direction::Up));
        assert_eq!(Direction::from_sign(-1), Some(Direction::Down));
        assert_eq!(Direction::from_sign(0), None);
    }

    #[test]
    fn test_fine_tune_steps_without_drift() {
        let mut ratio = 0.4;
        for _ in 0..5 {
            ratio = fine_tune(ratio, Direction::Up, 0.001);
        }
        assert_eq!(ratio, 0.405);
    }

    #[test]
    fn test_ratio_from_percent_rounds_to_thousandths() {
        assert_eq!(ratio_from_percent(40.0), Some(0.4));
        assert_eq!(ratio_from_percent(40.55), Some(0.406));
        assert_eq!(ratio_from_percent(f64::NAN), None);
    }

    #[test]
    fn test_ratio_label_display() {
        assert_eq!(display_ratio_label(0.4).to_string(), "(Coco) 40 : 60 (Sugar)");
    }
}
