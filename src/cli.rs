// CLI module - command-line argument parsing for the demo binary
//
// Provides subcommands for exercising the navigators standalone:
// - browse: run the file browser and print the chosen path
// - edit:   run the grid editor and print the confirmed series
// - demo:   build scratch data and run both navigators back to back
// - config: configuration management

use crate::config::VERSION;
use clap::{Parser, Subcommand};

/// panenav - paned terminal navigation (file browser + grid editor)
#[derive(Parser)]
#[command(name = "panenav")]
#[command(version = VERSION)]
#[command(about = "Paned terminal navigation engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the filesystem and print the selected path
    Browse {
        /// Directory to start in
        #[arg(default_value = ".")]
        path: String,

        /// Only directories can be selected
        #[arg(long)]
        directories_only: bool,

        /// Prompt shown in the title bar
        #[arg(long, default_value = "Select a file")]
        prompt: String,
    },

    /// Edit a time/value series and print the confirmed rows
    Edit {
        /// Comma-separated initial time points
        #[arg(long, value_delimiter = ',')]
        times: Vec<f64>,

        /// Comma-separated initial values
        #[arg(long, value_delimiter = ',')]
        values: Vec<f64>,

        /// Prompt shown in the title bar
        #[arg(long, default_value = "Edit series")]
        prompt: String,
    },

    /// Build scratch data and showcase both navigators
    Demo,

    /// Manage configuration
    Config {
        /// Show the config file path
        #[arg(long)]
        path: bool,

        /// Show effective configuration
        #[arg(long)]
        show: bool,
    },
}
