pub mod calculations;
pub mod constants;
pub mod report;

pub use calculations::{
    aggregate, delta, delta_label, display_ratio_label, fine_tune, is_ratio_in_range, net_weight,
    ratio_from_percent, required_coco, required_sugar, DeltaLabel, Direction, RatioLabel,
};
pub use constants::*;
pub use report::{Balance, MixReport};
