//! `pagewin` - print table footers and manage the shared page-size preference.

use anyhow::Result;
use backoffice_paging::log;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod prefs;
mod render;
mod window;

#[derive(Parser)]
#[command(name = "pagewin", about = "Page windows for back-office tables", version)]
struct Cli {
    /// TOML config file (optional unless given explicitly)
    #[arg(global = true, long)]
    config: Option<PathBuf>,
    /// Print JSON on stdout instead of text; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Window(window::WindowCmd),
    Prefs(prefs::PrefsCmd),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::Config::load(cli.config.as_deref())?;
    log!(debug, "config loaded", prefs_file: cfg.paging.prefs_file.display());

    match cli.command {
        Commands::Window(args) => window::run(&cfg, args, cli.json),
        Commands::Prefs(args) => prefs::run(&cfg, args, cli.json),
    }
}
