use crate::domain::error::TourError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Every lesson in the tour, in tour order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LessonId {
    ForLoop,
    Each,
    EachPair,
    Times,
    Reject,
    Sort,
    LeapYears,
    Map,
    Inject,
    TypeError,
    EachWithIndex,
    Rank,
    MyList,
    SumByExt,
    ExplicitBlock,
    SumOdds,
    BlockGiven,
    Template,
}

impl LessonId {
    pub const ALL: [LessonId; 18] = [
        LessonId::ForLoop,
        LessonId::Each,
        LessonId::EachPair,
        LessonId::Times,
        LessonId::Reject,
        LessonId::Sort,
        LessonId::LeapYears,
        LessonId::Map,
        LessonId::Inject,
        LessonId::TypeError,
        LessonId::EachWithIndex,
        LessonId::Rank,
        LessonId::MyList,
        LessonId::SumByExt,
        LessonId::ExplicitBlock,
        LessonId::SumOdds,
        LessonId::BlockGiven,
        LessonId::Template,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LessonId::ForLoop => "for-loop",
            LessonId::Each => "each",
            LessonId::EachPair => "each-pair",
            LessonId::Times => "times",
            LessonId::Reject => "reject",
            LessonId::Sort => "sort",
            LessonId::LeapYears => "leap-years",
            LessonId::Map => "map",
            LessonId::Inject => "inject",
            LessonId::TypeError => "type-error",
            LessonId::EachWithIndex => "each-with-index",
            LessonId::Rank => "rank",
            LessonId::MyList => "my-list",
            LessonId::SumByExt => "sum-by-ext",
            LessonId::ExplicitBlock => "explicit-block",
            LessonId::SumOdds => "sum-odds",
            LessonId::BlockGiven => "block-given",
            LessonId::Template => "template",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LessonId::ForLoop => "Filtering with a plain for loop",
            LessonId::Each => "Iterating with each",
            LessonId::EachPair => "Closures that take two arguments",
            LessonId::Times => "Closures that take no arguments",
            LessonId::Reject => "Rejecting, then sorting by length",
            LessonId::Sort => "Optional comparator closures",
            LessonId::LeapYears => "Multi-line closures",
            LessonId::Map => "Mapping temperatures",
            LessonId::Inject => "Reducing with inject",
            LessonId::TypeError => "Adding a number and a string",
            LessonId::EachWithIndex => "Enumerating with an index",
            LessonId::Rank => "Mapping with an index into records",
            LessonId::MyList => "A method that accepts a closure",
            LessonId::SumByExt => "Extending slices with a scoped trait",
            LessonId::ExplicitBlock => "Capturing the closure as a value",
            LessonId::SumOdds => "Forwarding a captured closure",
            LessonId::BlockGiven => "Checking whether a closure was given",
            LessonId::Template => "Closures in a view template",
        }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonId {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LessonId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| TourError::UnknownLesson(wanted.to_string()))
    }
}

/// What a lesson printed, plus the value it evaluated to.
#[derive(Debug, Clone, Serialize)]
pub struct LessonReport {
    pub id: LessonId,
    pub title: String,
    pub lines: Vec<String>,
    pub value: serde_json::Value,
}

impl LessonReport {
    pub fn new(id: LessonId, lines: Vec<String>, value: serde_json::Value) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            lines,
            value,
        }
    }
}

#[derive(Serialize)]
pub struct CatalogEntry {
    pub id: LessonId,
    pub title: &'static str,
    pub skipped: bool,
}

/// A name paired with its zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comedian {
    pub name: String,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YearKind {
    Leap,
    Plain,
}

#[derive(Serialize)]
pub struct SumByReport {
    pub numbers: Vec<i64>,
    pub style: String,
    pub transform: String,
    pub odds: bool,
    pub total: i64,
}

#[derive(Serialize)]
pub struct LeapReport {
    pub year: i32,
    pub kind: YearKind,
    pub line: String,
}

#[derive(Serialize)]
pub struct AddReport {
    pub lhs: String,
    pub rhs: String,
    pub result: String,
}
