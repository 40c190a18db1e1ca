//! FilamentDB CLI: browse and compare filament datasheets.

use clap::{Args, Parser, Subcommand};
use filamentdb::commands::{self, ViewActions};
use filamentdb::{init_logging, Config, MaterialFamily, SectionId, ViewMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filamentdb")]
#[command(version, about = "FilamentDB: 3D-printing filament datasheets and comparisons")]
struct Cli {
    /// Config file (.json or .toml). Defaults to the platform config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Selection {
    /// Material family (generic, bambu, esun).
    #[arg(short, long)]
    family: Option<MaterialFamily>,

    /// Check a material by name. Repeatable.
    #[arg(short, long = "select", value_name = "NAME")]
    select: Vec<String>,

    /// Compare the checked materials (needs at least 2).
    #[arg(long)]
    compare: bool,

    /// Print the view model as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show materials as summary cards.
    Grid {
        #[command(flatten)]
        selection: Selection,
    },

    /// Show the comparison table.
    Table {
        #[command(flatten)]
        selection: Selection,

        /// Show only this section (properties, preprinting, printing, printer, postprinting, characteristics).
        #[arg(long)]
        section: Option<SectionId>,

        /// Open the info dialog for a property.
        #[arg(long, value_name = "KEY")]
        info: Option<String>,
    },

    /// Explain a property.
    Info {
        /// Property identifier, e.g. toughness or heatDistortion.
        key: String,
    },

    /// Dump datasets as JSON.
    Export {
        /// Export only this family.
        #[arg(short, long)]
        family: Option<MaterialFamily>,

        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check datasets for duplicate names, bad ratings and missing info entries.
    Validate,
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Grid { selection } => {
            let actions = ViewActions {
                select: selection.select,
                compare: selection.compare,
                ..Default::default()
            };
            commands::show(&config, ViewMode::Grid, selection.family, &actions, selection.json)
        }
        Commands::Table {
            selection,
            section,
            info,
        } => {
            let actions = ViewActions {
                select: selection.select,
                compare: selection.compare,
                section,
                info,
            };
            commands::show(&config, ViewMode::Table, selection.family, &actions, selection.json)
        }
        Commands::Info { key } => commands::info(&key),
        Commands::Export { family, output } => commands::export(family, output.as_deref()),
        Commands::Validate => commands::validate(),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
