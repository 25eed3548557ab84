use serde::{Deserialize, Serialize};

use crate::models::Substance;

/// One ingredient container as tracked by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: String,

    pub substance: Substance,

    /// Net weight in grams. May be NaN when upstream input was unparsable.
    pub net_weight: f64,
}

impl ContainerRecord {
    /// Create a record, flooring a negative net weight at zero.
    ///
    /// NaN is kept as-is so aggregation can skip it.
    pub fn new(id: impl Into<String>, substance: Substance, net_weight: f64) -> Self {
        let net_weight = if net_weight.is_nan() {
            net_weight
        } else {
            net_weight.max(0.0)
        };

        Self {
            id: id.into(),
            substance,
            net_weight,
        }
    }

    /// An empty, untyped container as created by "add container".
    pub fn empty(id: impl Into<String>) -> Self {
        Self::new(id, Substance::Unset, 0.0)
    }

    /// Whether this record contributes to the totals.
    #[inline]
    pub fn counts(&self) -> bool {
        self.substance.is_set() && self.net_weight.is_finite()
    }
}

/// Edit reported by a container form: the net weight for a container id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerEdit {
    pub id: String,

    pub substance: Substance,

    pub net: f64,
}

impl ContainerEdit {
    pub fn new(id: impl Into<String>, substance: Substance, net: f64) -> Self {
        Self {
            id: id.into(),
            substance,
            net,
        }
    }
}

impl From<ContainerEdit> for ContainerRecord {
    fn from(edit: ContainerEdit) -> Self {
        ContainerRecord::new(edit.id, edit.substance, edit.net)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_weight_floors_to_zero() {
        let record = ContainerRecord::new("box-1", Substance::Coco, -12.5);
        assert_eq!(record.net_weight, 0.0);
        assert!(record.counts());
    }

    #[test]
    fn test_nan_weight_does_not_count() {
        let record = ContainerRecord::new("box-1", Substance::Sugar, f64::NAN);
        assert!(record.net_weight.is_nan());
        assert!(!record.counts());
    }

    #[test]
    fn test_empty_container_is_unset() {
        let record = ContainerRecord::empty("box-3");
        assert_eq!(record.substance, Substance::Unset);
        assert_eq!(record.net_weight, 0.0);
        assert!(!record.counts());
    }
}
