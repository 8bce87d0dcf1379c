use crate::domain::models::LessonId;
use crate::services::my_list::{cube, square};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// With values capped at 100000, a cube is at most 1e15, so 1000 of them stay
/// well inside `i64`.
pub const MAX_SUM_BY_NUMBERS: usize = 1_000;

#[derive(Parser, Debug)]
#[command(
    name = "blocks",
    version,
    about = "A guided tour of closures, iterators and block-style APIs"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Extra TOML config file (applied after ./blocks.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List lessons in tour order.
    List,
    /// Run a single lesson.
    Show {
        #[arg(value_enum)]
        lesson: LessonId,
    },
    /// Run every lesson in order.
    Tour,
    /// Sum numbers through a transformation, the way `MyList::sum_by` does.
    SumBy {
        #[arg(
            required = true,
            num_args = 1..=MAX_SUM_BY_NUMBERS,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i64).range(-100_000..=100_000)
        )]
        numbers: Vec<i64>,
        #[arg(long, value_enum, default_value_t = BlockStyle::Implicit)]
        style: BlockStyle,
        #[arg(long, value_enum, default_value_t = Transform::Square)]
        transform: Transform,
        #[arg(long, default_value_t = false, help = "Only odd numbers take part")]
        odds: bool,
    },
    /// Classify a single year.
    Leap {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Add two loosely typed values.
    Add {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Print the effective configuration.
    Config,
}

/// How the transformation reaches `MyList`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    /// Generic closure parameter.
    Implicit,
    /// Closure passed as `&dyn Fn`.
    Explicit,
    /// `Option` of a closure; none sums the raw values.
    Optional,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    Identity,
    Square,
    Cube,
    None,
}

impl BlockStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockStyle::Implicit => "implicit",
            BlockStyle::Explicit => "explicit",
            BlockStyle::Optional => "optional",
        }
    }
}

impl Transform {
    pub fn as_str(self) -> &'static str {
        match self {
            Transform::Identity => "identity",
            Transform::Square => "square",
            Transform::Cube => "cube",
            Transform::None => "none",
        }
    }

    pub fn function(self) -> Option<fn(i64) -> i64> {
        match self {
            Transform::Identity => Some(|x| x),
            Transform::Square => Some(square),
            Transform::Cube => Some(cube),
            Transform::None => None,
        }
    }
}
