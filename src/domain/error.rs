use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TourError {
    #[error("type mismatch: cannot add {rhs} to {lhs}")]
    TypeMismatch { lhs: &'static str, rhs: &'static str },

    #[error("integer overflow adding {lhs} and {rhs}")]
    Overflow { lhs: i64, rhs: i64 },

    #[error("unknown lesson: {0}")]
    UnknownLesson(String),

    #[error("style `{0}` needs a transformation; use --transform or --style optional")]
    MissingTransform(&'static str),

    #[error("invalid year range: start {start} is after end {end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("year range {start}..={end} spans more than {max} years")]
    RangeTooWide { start: i32, end: i32, max: i64 },
}
