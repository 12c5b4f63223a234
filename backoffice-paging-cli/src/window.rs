//! `pagewin window ...`

use crate::config::Config;
use crate::render;
use anyhow::Result;
use backoffice_paging::{PageRequest, log, parse_lenient};
use clap::Args;

/// Print the footer for one page of a table
#[derive(Args)]
pub struct WindowCmd {
    /// Total number of rows
    #[arg(long, allow_hyphen_values = true)]
    pub total: String,
    /// Page to show (1-based)
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub page: String,
    /// Rows per page; defaults to the stored page-size preference
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,
}

pub fn run(cfg: &Config, args: WindowCmd, json: bool) -> Result<()> {
    let limit = match args.limit {
        Some(limit) => limit,
        None => cfg.page_size_preference().get().to_string(),
    };
    let req = PageRequest::from_query(&args.total, &args.page, &limit);
    if limit_recovered(&limit, req.limit) {
        log!(debug, "page size recovered", given: limit, used: req.limit);
    }

    let window = req.window();
    if json {
        println!("{}", window.to_json_string());
    } else {
        println!("{}", render::footer(&window));
    }
    Ok(())
}

/// Whether normalization replaced the page size the user gave.
fn limit_recovered(given: &str, used: u64) -> bool {
    parse_lenient(given).and_then(|v| u64::try_from(v).ok()) != Some(used)
}
