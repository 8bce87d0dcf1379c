use crate::cli::{BlockStyle, Cli, Commands, Transform};
use crate::domain::error::TourError;
use crate::domain::models::{AddReport, LeapReport, SumByReport};
use crate::services::config::TourConfig;
use crate::services::dynamic::Value;
use crate::services::iteration::{classify_year, describe_year};
use crate::services::my_list::MyList;
use crate::services::output::print_one;
use tracing::debug;

pub fn handle_playground_commands(cli: &Cli, config: &TourConfig) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::SumBy {
            numbers,
            style,
            transform,
            odds,
        } => {
            let total = sum_by(numbers, *style, *transform, *odds)?;
            let report = SumByReport {
                numbers: numbers.clone(),
                style: style.as_str().to_string(),
                transform: transform.as_str().to_string(),
                odds: *odds,
                total,
            };
            print_one(cli.json, report, |r| r.total.to_string())?;
        }
        Commands::Leap { year } => {
            let report = LeapReport {
                year: *year,
                kind: classify_year(*year),
                line: describe_year(*year),
            };
            print_one(cli.json, report, |r| r.line.clone())?;
        }
        Commands::Add { lhs, rhs } => {
            let (l, r) = (Value::parse(lhs), Value::parse(rhs));
            debug!(lhs = l.type_name(), rhs = r.type_name(), "adding values");
            let result = l.checked_add(&r)?;
            let report = AddReport {
                lhs: l.to_string(),
                rhs: r.to_string(),
                result: result.to_string(),
            };
            print_one(cli.json, report, |a| a.result.clone())?;
        }
        Commands::Config => {
            if cli.json {
                print_one(true, config, |_| String::new())?;
            } else {
                print!("{}", toml::to_string_pretty(config)?);
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn sum_by(
    numbers: &[i64],
    style: BlockStyle,
    transform: Transform,
    odds: bool,
) -> Result<i64, TourError> {
    let list = MyList::new(numbers.to_vec());
    let list = if odds { list.odds() } else { list };
    let f = transform.function();
    let total = match style {
        BlockStyle::Implicit => {
            let f = f.ok_or(TourError::MissingTransform(style.as_str()))?;
            list.sum_by(f)
        }
        BlockStyle::Explicit => {
            let f = f.ok_or(TourError::MissingTransform(style.as_str()))?;
            list.sum_by_block(&f)
        }
        BlockStyle::Optional => list.sum_by_optional(f),
    };
    Ok(total)
}
