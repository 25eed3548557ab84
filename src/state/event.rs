use crate::engine::Direction;
use crate::models::ContainerEdit;

/// A discrete user action applied to the mix state.
#[derive(Debug, Clone, PartialEq)]
pub enum MixEvent {
    AddContainer,

    /// Upsert a container's substance and net weight.
    Edit(ContainerEdit),

    Delete { id: String },

    /// Slider change, in percent of coco.
    SetRatio { ratio_percent: f64 },

    FineTune { direction: Direction },
}
