use crate::cli::{Cli, Commands};
use crate::services::config::TourConfig;
use crate::services::lessons::{self, BANNER};
use crate::services::output::{print_out, print_reports};
use tracing::info;

pub fn handle_tour_commands(cli: &Cli, config: &TourConfig) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::List => {
            let entries = lessons::catalog(config)?;
            print_out(cli.json, &entries, |e| {
                let marker = if e.skipped { "\t(skipped)" } else { "" };
                format!("{}\t{}{}", e.id, e.title, marker)
            })?;
        }
        Commands::Show { lesson } => {
            let report = lessons::run(*lesson, config)?;
            print_reports(cli.json, std::slice::from_ref(&report))?;
        }
        Commands::Tour => {
            let reports = lessons::run_all(config)?;
            info!(lessons = reports.len(), "tour complete");
            if !cli.json && config.tour.banner {
                println!("{}", BANNER.trim_matches('\n'));
                println!();
            }
            print_reports(cli.json, &reports)?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
