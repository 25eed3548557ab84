use dialoguer::{Confirm, Input, Select};

use crate::engine::display_ratio_label;
use crate::error::{CalcError, Result};
use crate::interface::render::form_summary;
use crate::models::Substance;
use crate::state::{CalcConfig, ContainerForm};

/// Actions offered by the interactive session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddContainer,
    EditContainer,
    DeleteContainer,
    SetRatio,
    FineTuneUp,
    FineTuneDown,
    ShowReport,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::AddContainer,
        MenuAction::EditContainer,
        MenuAction::DeleteContainer,
        MenuAction::SetRatio,
        MenuAction::FineTuneUp,
        MenuAction::FineTuneDown,
        MenuAction::ShowReport,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddContainer => "Add container",
            MenuAction::EditContainer => "Edit container",
            MenuAction::DeleteContainer => "Delete container",
            MenuAction::SetRatio => "Set ratio",
            MenuAction::FineTuneUp => "Fine-tune ratio up (more coco)",
            MenuAction::FineTuneDown => "Fine-tune ratio down (more sugar)",
            MenuAction::ShowReport => "Show report",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next session action.
pub fn prompt_menu_action() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

/// Prompt for one of the existing containers. Returns its id.
pub fn prompt_container(forms: &[ContainerForm], prompt: &str) -> Result<String> {
    if forms.is_empty() {
        return Err(CalcError::InvalidInput("No containers to choose from".to_string()));
    }

    let options: Vec<String> = forms.iter().map(form_summary).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(forms[selection].id.clone())
}

/// Prompt for the ingredient in a container.
pub fn prompt_substance(current: Substance) -> Result<Substance> {
    let options: Vec<&str> = Substance::SELECTABLE.iter().map(|s| s.name()).collect();
    let default = Substance::SELECTABLE
        .iter()
        .position(|s| *s == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Ingredient")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Substance::SELECTABLE[selection])
}

/// Prompt for a weight as raw text. Parsing is left to the container form.
pub fn prompt_weight(prompt: &str, current: f64) -> Result<String> {
    let default = if current.is_finite() {
        current.to_string()
    } else {
        String::new()
    };

    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default)
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for the ratio as percent of coco, within the configured range.
pub fn prompt_ratio_percent(config: &CalcConfig, current_ratio: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Coco percent ({}-{})",
            config.slider_min_percent, config.slider_max_percent
        ))
        .default(display_ratio_label(current_ratio).coco_percent.to_string())
        .interact_text()?;

    let percent: f64 = input
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidInput("Invalid number".to_string()))?;

    if !config.accepts_percent(percent) {
        return Err(CalcError::InvalidInput(format!(
            "Ratio must be between {} and {} percent",
            config.slider_min_percent, config.slider_max_percent
        )));
    }

    Ok(percent)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
