use clap::{ArgAction, Parser, Subcommand};

/// Drinking chocolate calculator: balance coco and sugar by weight.
#[derive(Parser, Debug)]
#[command(name = "drinking_chocolate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings JSON file.
    #[arg(short, long, default_value = "calc_config.json", global = true)]
    pub config: String,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Weigh containers interactively and see what is needed.
    #[default]
    Mix,

    /// Compute a report from a CSV of containers (id,substance,container,gross).
    Batch {
        /// CSV file to read.
        file: String,

        /// Coco percent to use instead of the configured default.
        #[arg(short, long)]
        ratio: Option<f64>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a ratio against known totals.
    Ratio {
        /// Coco percent of the mixture.
        percent: f64,

        /// Coco on hand, in grams.
        #[arg(long, default_value = "0")]
        coco: f64,

        /// Sugar on hand, in grams.
        #[arg(long, default_value = "0")]
        sugar: f64,

        /// Fine-tune steps to apply after setting the ratio (+1 or -1, repeatable).
        #[arg(long, allow_negative_numbers = true)]
        tune: Vec<i32>,
    },

    /// Show the effective settings.
    Config {
        /// Write the default settings to the config path.
        #[arg(long)]
        init: bool,
    },
}
