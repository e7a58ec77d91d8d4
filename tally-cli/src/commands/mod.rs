//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod calendar;
pub mod generate_config;
pub mod reduce;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reduce text files with a built-in reducer
    Reduce(reduce::ReduceArgs),

    /// Date arithmetic
    Calendar {
        #[command(subcommand)]
        subcommand: calendar::CalendarCommands,
    },

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available reducers
    Reducers,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Reduce(args) => args.execute(),
            Commands::Calendar { subcommand } => subcommand.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Reducers => {
                println!("Available reducers:");
                print_variants(reduce::ReducerKind::value_variants());
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                print_variants(reduce::OutputFormat::value_variants());
            }
        }
    }
}

fn print_variants<V: ValueEnum>(variants: &[V]) {
    for value in variants.iter().filter_map(ValueEnum::to_possible_value) {
        match value.get_help() {
            Some(help) => println!("  {:<8} - {}", value.get_name(), help),
            None => println!("  {}", value.get_name()),
        }
    }
}
