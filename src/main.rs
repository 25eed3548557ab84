use clap::Parser;
use std::path::Path;

use drinking_chocolate_rs::cli::{Cli, Command};
use drinking_chocolate_rs::engine::{display_ratio_label, Balance, Direction};
use drinking_chocolate_rs::error::{CalcError, Result};
use drinking_chocolate_rs::interface::{
    apply_batch, display_balance, display_forms, display_ratio, display_report, load_batch,
    prompt_container, prompt_menu_action, prompt_ratio_percent, prompt_substance, prompt_weight,
    prompt_yes_no, MenuAction,
};
use drinking_chocolate_rs::logging;
use drinking_chocolate_rs::models::AggregateTotals;
use drinking_chocolate_rs::state::{load_config, save_config, CalcConfig, MixState};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let command = cli.command.unwrap_or_default();

    if let Command::Config { init } = command {
        return cmd_config(&cli.config, init);
    }

    let config = load_config(&cli.config)?;

    match command {
        Command::Mix => cmd_mix(config),
        Command::Batch { file, ratio, json } => cmd_batch(config, &file, ratio, json),
        Command::Ratio {
            percent,
            coco,
            sugar,
            tune,
        } => cmd_ratio(config, percent, coco, sugar, &tune),
        Command::Config { .. } => Ok(()),
    }
}

/// Interactive session. Nothing is kept after quitting.
fn cmd_mix(config: CalcConfig) -> Result<()> {
    let mut state = MixState::new(config);

    println!("Drinking chocolate calculator");
    println!();

    loop {
        let report = state.report();
        display_ratio(&report.label);
        display_balance(&report.totals, &report.balance);
        println!();
        display_forms(state.forms());
        println!();

        let action = prompt_menu_action()?;
        match handle_action(&mut state, action) {
            Ok(true) => {}
            Ok(false) => break,
            // Bad input is reported and the session carries on.
            Err(CalcError::InvalidInput(msg)) => eprintln!("{}", msg),
            Err(e) => return Err(e),
        }
        println!();
    }

    Ok(())
}

/// Apply one menu action. Returns false when the session should end.
fn handle_action(state: &mut MixState, action: MenuAction) -> Result<bool> {
    match action {
        MenuAction::AddContainer => {
            let id = state.add_container();
            println!("Added {}", id);
        }
        MenuAction::EditContainer => {
            let id = prompt_container(state.forms(), "Which container?")?;
            edit_container(state, &id)?;
        }
        MenuAction::DeleteContainer => {
            let id = prompt_container(state.forms(), "Delete which container?")?;
            state.delete_container(&id);
            println!("Deleted {}", id);
        }
        MenuAction::SetRatio => {
            let percent = prompt_ratio_percent(state.config(), state.ratio())?;
            state.set_ratio_percent(percent);
        }
        MenuAction::FineTuneUp => {
            state.fine_tune(Direction::Up);
        }
        MenuAction::FineTuneDown => {
            state.fine_tune(Direction::Down);
        }
        MenuAction::ShowReport => display_report(&state.report()),
        MenuAction::Quit => {
            let has_weights = state.totals().has_any();
            if !has_weights || prompt_yes_no("Discard all containers and quit?", true)? {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

fn edit_container(state: &mut MixState, id: &str) -> Result<()> {
    let form = state
        .form(id)
        .ok_or_else(|| CalcError::ContainerNotFound(id.to_string()))?;
    let (substance, container_weight, gross_weight) =
        (form.substance, form.container_weight, form.gross_weight);

    let substance = prompt_substance(substance)?;
    state.edit_substance(id, substance)?;

    let container = prompt_weight("Container weight (g)", container_weight)?;
    state.edit_container_weight(id, &container)?;

    let gross = prompt_weight("Gross weight (g)", gross_weight)?;
    state.edit_gross_weight(id, &gross)?;

    Ok(())
}

/// Report for a CSV of containers.
fn cmd_batch(config: CalcConfig, file: &str, ratio: Option<f64>, json: bool) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(CalcError::InvalidInput(format!("Batch file not found: {}", file)));
    }

    let rows = load_batch(path)?;
    let mut state = MixState::new(config);

    if let Some(percent) = ratio {
        if !state.set_ratio_percent(percent) {
            return Err(CalcError::InvalidInput(format!("Invalid ratio: {}", percent)));
        }
    }

    apply_batch(&mut state, &rows)?;

    let report = state.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}

/// Evaluate the ratio engine against given totals.
fn cmd_ratio(config: CalcConfig, percent: f64, coco: f64, sugar: f64, tune: &[i32]) -> Result<()> {
    let mut state = MixState::new(config);
    if !state.set_ratio_percent(percent) {
        return Err(CalcError::InvalidInput(format!("Invalid ratio: {}", percent)));
    }
    for &sign in tune {
        state.fine_tune_sign(sign)?;
    }

    let ratio = state.ratio();
    let totals = AggregateTotals {
        coco_total: coco,
        sugar_total: sugar,
    };

    display_ratio(&display_ratio_label(ratio));
    display_balance(&totals, &Balance::compute(&totals, ratio));
    Ok(())
}

/// Print the effective settings, optionally writing the defaults first.
fn cmd_config(file: &str, init: bool) -> Result<()> {
    if init {
        if Path::new(file).exists() && !prompt_yes_no("Overwrite existing config?", false)? {
            return Ok(());
        }
        save_config(file, &CalcConfig::default())?;
        println!("Wrote default settings to {}", file);
    }

    let config = load_config(file)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
