pub mod batch;
pub mod prompts;
pub mod render;

pub use batch::{apply_batch, load_batch, BatchRow};
pub use prompts::{
    prompt_container, prompt_menu_action, prompt_ratio_percent, prompt_substance, prompt_weight,
    prompt_yes_no, MenuAction,
};
pub use render::{display_balance, display_forms, display_ratio, display_report, format_grams};
