//! `pagewin prefs ...`

use crate::config::Config;
use crate::render;
use anyhow::{Context, Result};
use backoffice_paging::log;
use clap::{Args, Subcommand};

/// Read or change the shared page size
#[derive(Args)]
pub struct PrefsCmd {
    #[command(subcommand)]
    pub cmd: PrefsSub,
}

#[derive(Subcommand)]
pub enum PrefsSub {
    /// Show the current page size
    Get,
    /// Store a new page size
    Set {
        #[arg(allow_hyphen_values = true)]
        size: i64,
    },
    /// List the page sizes offered by the selector
    Options,
}

pub fn run(cfg: &Config, args: PrefsCmd, json: bool) -> Result<()> {
    let mut pref = cfg.page_size_preference();
    match args.cmd {
        PrefsSub::Get => print_size(pref.get(), json),
        PrefsSub::Set { size } => {
            let size = pref.set(size).with_context(|| {
                format!("saving page size to {}", pref.store().path().display())
            })?;
            log!(info, "page size updated", size: size, path: pref.store().path().display());
            print_size(size, json);
        },
        PrefsSub::Options => {
            if json {
                println!("{}", render::size_options_json(pref.get()));
            } else {
                println!("{}", render::size_options(pref.get()));
            }
        },
    }
    Ok(())
}

fn print_size(size: u64, json: bool) {
    if json {
        println!("{}", render::size_json(size));
    } else {
        println!("{size}");
    }
}
