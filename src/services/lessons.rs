//! Lesson catalog: runs each lesson and packages what it printed into a
//! [`LessonReport`].

use crate::domain::error::TourError;
use crate::domain::models::{CatalogEntry, LessonId, LessonReport, YearKind};
use crate::services::block_given::greet;
use crate::services::config::TourConfig;
use crate::services::dynamic::Value;
use crate::services::iteration::{self, NAMES};
use crate::services::my_list::{square, MyList};
use crate::services::reduce::{self, CELSIUS};
use crate::services::sum_by_ext::SumBy;
use crate::services::template;
use crate::services::words::{self, LETTERS, WORDS};
use serde_json::json;
use tracing::{debug, info};

pub const BANNER: &str = r"
+--------------------------------------------------+
|                                                  |
|    Closures, iterators and block-style APIs      |
|                                                  |
+--------------------------------------------------+
";

const SAMPLE_LIST: [i64; 3] = [1, 4, 7];

pub fn catalog(config: &TourConfig) -> Result<Vec<CatalogEntry>, TourError> {
    let skipped = config.skipped()?;
    Ok(LessonId::ALL
        .into_iter()
        .map(|id| CatalogEntry {
            id,
            title: id.title(),
            skipped: skipped.contains(&id),
        })
        .collect())
}

pub fn run_all(config: &TourConfig) -> Result<Vec<LessonReport>, TourError> {
    let skipped = config.skipped()?;
    LessonId::ALL
        .into_iter()
        .filter(|id| {
            let skip = skipped.contains(id);
            if skip {
                info!(lesson = %id, "skipping lesson");
            }
            !skip
        })
        .map(|id| run(id, config))
        .collect()
}

pub fn run(id: LessonId, config: &TourConfig) -> Result<LessonReport, TourError> {
    debug!(lesson = %id, "running lesson");
    let report = match id {
        LessonId::ForLoop => {
            let result = words::for_loop_filter(&WORDS);
            LessonReport::new(id, vec![format!("{result:?}")], json!(result))
        }
        LessonId::Each => {
            let nums = [1, 2, 3];
            LessonReport::new(id, iteration::each_line(&nums), json!(nums))
        }
        LessonId::EachPair => {
            let pairs = iteration::sample_pairs();
            LessonReport::new(id, iteration::each_pair(&pairs), json!(pairs))
        }
        LessonId::Times => {
            let mut lines = Vec::new();
            iteration::times(config.times.count, || {
                lines.push(config.times.phrase.clone())
            });
            LessonReport::new(id, lines, json!(config.times.count))
        }
        LessonId::Reject => {
            let rejected = words::reject_leading(&WORDS, 'a');
            let sorted = words::sort_by_length(rejected.clone());
            let by_size = words::sort_by_size(&rejected);
            LessonReport::new(
                id,
                vec![
                    format!("{rejected:?}"),
                    format!("{sorted:?}"),
                    format!("{by_size:?}"),
                ],
                json!({
                    "rejected": rejected,
                    "sorted_by_length": sorted,
                    "sorted_by_size": by_size,
                }),
            )
        }
        LessonId::Sort => {
            let default = words::sort_default(&LETTERS);
            let ascending = words::sort_with(&LETTERS, |x, y| x.cmp(y));
            let descending = words::sort_with(&LETTERS, |x, y| y.cmp(x));
            LessonReport::new(
                id,
                vec![
                    format!("{default:?}"),
                    format!("{ascending:?}"),
                    format!("{descending:?}"),
                ],
                json!({
                    "default": default,
                    "ascending": ascending,
                    "descending": descending,
                }),
            )
        }
        LessonId::LeapYears => {
            let years = iteration::leap_years(config.leap.start, config.leap.end)?;
            let lines = years
                .iter()
                .map(|(y, _)| iteration::describe_year(*y))
                .collect();
            let leap = years.iter().filter(|(_, k)| *k == YearKind::Leap).count();
            LessonReport::new(
                id,
                lines,
                json!({
                    "start": config.leap.start,
                    "end": config.leap.end,
                    "leap": leap,
                    "plain": years.len() - leap,
                }),
            )
        }
        LessonId::Map => {
            let temps = reduce::to_fahrenheit(&CELSIUS);
            let shown: Vec<String> = temps.iter().map(|t| format!("{t:.1}")).collect();
            LessonReport::new(id, vec![format!("[{}]", shown.join(", "))], json!(temps))
        }
        LessonId::Inject => {
            let sum = reduce::running_sum(&[1, 5, 7]);
            let longest = reduce::longest(&["cat", "sheep", "bear"]);
            let mut lines = Vec::new();
            if let Some(s) = sum {
                lines.push(format!("sum = {s}"));
            }
            if let Some(l) = longest {
                lines.push(format!("longest = {l}"));
            }
            LessonReport::new(id, lines, json!({ "sum": sum, "longest": longest }))
        }
        LessonId::TypeError => {
            let lhs = Value::Int(4);
            let rhs = Value::Str("foo".to_string());
            match lhs.checked_add(&rhs) {
                Ok(v) => LessonReport::new(
                    id,
                    vec![format!("{lhs} + {rhs} = {v}")],
                    json!({ "result": v.to_string() }),
                ),
                Err(e) => LessonReport::new(
                    id,
                    vec![format!("{lhs} + {rhs} raised: {e}")],
                    json!({ "error": e.to_string() }),
                ),
            }
        }
        LessonId::EachWithIndex => {
            LessonReport::new(id, iteration::each_with_index(&NAMES), json!(NAMES))
        }
        LessonId::Rank => {
            let by_enumerate = iteration::rank_by_enumerate(&NAMES);
            let by_index = iteration::rank_by_map_with_index(&NAMES);
            debug_assert_eq!(by_enumerate, by_index);
            let lines = by_enumerate
                .iter()
                .map(|c| format!("{} (rank {})", c.name, c.rank))
                .collect();
            LessonReport::new(id, lines, json!(by_enumerate))
        }
        LessonId::MyList => {
            let total = MyList::new(SAMPLE_LIST.to_vec()).sum_by(|x| x * x);
            LessonReport::new(
                id,
                vec![format!("MyList({SAMPLE_LIST:?}).sum_by(square) = {total}")],
                json!(total),
            )
        }
        LessonId::SumByExt => {
            let total = SAMPLE_LIST.sum_by(|x| x * x);
            LessonReport::new(
                id,
                vec![format!("{SAMPLE_LIST:?}.sum_by(square) = {total}")],
                json!(total),
            )
        }
        LessonId::ExplicitBlock => {
            let block: &dyn Fn(i64) -> i64 = &square;
            let total = MyList::new(SAMPLE_LIST.to_vec()).sum_by_block(block);
            LessonReport::new(
                id,
                vec![format!("MyList({SAMPLE_LIST:?}).sum_by_block(&square) = {total}")],
                json!(total),
            )
        }
        LessonId::SumOdds => {
            let total = MyList::new(SAMPLE_LIST.to_vec()).sum_odds_by(square);
            LessonReport::new(
                id,
                vec![format!("MyList({SAMPLE_LIST:?}).sum_odds_by(square) = {total}")],
                json!(total),
            )
        }
        LessonId::BlockGiven => {
            let without = greet(None::<fn() -> String>);
            let with = greet(Some(|| "Hello!".to_string()));
            LessonReport::new(
                id,
                vec![without.clone(), with.clone()],
                json!([without, with]),
            )
        }
        LessonId::Template => {
            let rows = template::render_people(&template::sample_people(), template::full_name);
            let value = json!(rows);
            LessonReport::new(id, rows, value)
        }
    };
    Ok(report)
}
