/// Coco fraction of the mixture a fresh session starts with.
pub const DEFAULT_RATIO: f64 = 0.40;

/// Ratio change applied by one fine-tune press.
pub const FINE_TUNE_STEP: f64 = 0.001;

/// Slider input is rounded to thousandths of the ratio.
pub const SLIDER_PRECISION: f64 = 1000.0;

/// Fine-tuned ratios are rounded to millionths so repeated steps do not drift.
pub const FINE_TUNE_PRECISION: f64 = 1_000_000.0;

/// Empty weight pre-filled into a new container form, in grams.
pub const DEFAULT_CONTAINER_WEIGHT: f64 = 66.0;

/// Slider bounds in percent of coco.
pub const SLIDER_MIN_PERCENT: f64 = 20.0;
pub const SLIDER_MAX_PERCENT: f64 = 80.0;

/// Weights are displayed to one decimal place, matching the 0.1 g input step.
pub const WEIGHT_DISPLAY_PRECISION: f64 = 10.0;
