use std::{io::IsTerminal, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use dashterm::{
    config::{self, Layout, Overrides},
    doctor, logging,
    menu::catalog,
    shell,
};

#[derive(Parser, Debug)]
#[command(name = "dash", version, about = "Hertz DASH counter terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Opens the terminal UI (default).
    Run(RunArgs),
    /// Prints the navigation menu.
    Menu {
        /// Print JSON instead of an outline.
        #[arg(long)]
        json: bool,
        /// Open every group in the outline.
        #[arg(long)]
        expand_all: bool,
        /// Use ASCII glyphs.
        #[arg(long)]
        ascii: bool,
    },
    /// Prints the config path that would be used (if any).
    ConfigPath,
    /// Writes a config template if none exists and prints its path.
    InitConfig,
    /// Checks the terminal, config and menu catalog.
    Doctor,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Dashboard layout; overrides the config file.
    #[arg(long, value_enum)]
    layout: Option<Layout>,
    /// Use ASCII glyphs for icons and chevrons.
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => {
            let settings = config::load_settings(&Overrides {
                layout: args.layout,
                ascii_icons: args.ascii,
            })?;
            let _guard = logging::init(&settings.log_dir).context("init logging")?;
            let forest = Arc::new(catalog::forest()?);
            info!(nodes = forest.len(), "navigation catalog loaded");
            shell::run(settings, forest)?;
        }
        Command::Menu {
            json,
            expand_all,
            ascii,
        } => {
            if json {
                let forest = catalog::forest()?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&forest).context("serialize menu")?
                );
            } else {
                print!("{}", catalog::outline(expand_all, ascii)?);
            }
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
        Command::InitConfig => {
            let path = config::ensure_config_file_exists().context("write config template")?;
            println!("{}", path.display());
        }
        Command::Doctor => {
            let path = config::resolve_config_path();
            let notes = doctor::check(path.as_deref(), std::io::stdout().is_terminal());
            for line in &notes.lines {
                println!("{line}");
            }
            if !notes.ok {
                bail!("doctor found problems");
            }
        }
    }

    Ok(())
}
