use crate::domain::error::TourError;
use crate::domain::models::{Comedian, YearKind};
use indexmap::IndexMap;

pub const NAMES: [&str; 6] = ["john", "michael", "eric", "graham", "terry", "terry"];

pub fn each_line(nums: &[i64]) -> Vec<String> {
    let mut out = Vec::with_capacity(nums.len());
    nums.iter().for_each(|n| out.push(format!("This is line {n}")));
    out
}

pub fn sample_pairs() -> IndexMap<&'static str, i64> {
    IndexMap::from([("a", 1), ("b", 2), ("c", 3)])
}

/// Visits entries in insertion order.
pub fn each_pair(map: &IndexMap<&str, i64>) -> Vec<String> {
    map.iter()
        .map(|(k, v)| format!("The value of {k} is {v}"))
        .collect()
}

pub fn times<F: FnMut()>(n: u32, mut f: F) {
    (0..n).for_each(|_| f());
}

pub fn classify_year(year: i32) -> YearKind {
    if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
        YearKind::Leap
    } else {
        YearKind::Plain
    }
}

pub fn describe_year(year: i32) -> String {
    match classify_year(year) {
        YearKind::Leap => format!("{year} is a leap year!"),
        YearKind::Plain => format!("{year} is a plain old year."),
    }
}

/// Widest `start..=end` span a leap-year walk will cover.
pub const MAX_YEAR_SPAN: i64 = 10_000;

pub fn check_year_range(start: i32, end: i32) -> Result<(), TourError> {
    if start > end {
        return Err(TourError::InvalidRange { start, end });
    }
    if i64::from(end) - i64::from(start) > MAX_YEAR_SPAN {
        return Err(TourError::RangeTooWide {
            start,
            end,
            max: MAX_YEAR_SPAN,
        });
    }
    Ok(())
}

/// Classifies every year in `start..=end`.
pub fn leap_years(start: i32, end: i32) -> Result<Vec<(i32, YearKind)>, TourError> {
    check_year_range(start, end)?;
    Ok((start..=end).map(|y| (y, classify_year(y))).collect())
}

pub fn each_with_index(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}. {}", i + 1, n))
        .collect()
}

pub fn rank_by_enumerate(names: &[&str]) -> Vec<Comedian> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| Comedian {
            name: n.to_string(),
            rank: i,
        })
        .collect()
}

/// Same records as `rank_by_enumerate`, with the index zipped in alongside the map.
pub fn rank_by_map_with_index(names: &[&str]) -> Vec<Comedian> {
    names
        .iter()
        .zip(0..)
        .map(|(n, rank)| Comedian {
            name: n.to_string(),
            rank,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_preserves_input_order() {
        assert_eq!(
            each_line(&[1, 2, 3]),
            vec!["This is line 1", "This is line 2", "This is line 3"]
        );
    }

    #[test]
    fn pairs_follow_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("c", 3);
        map.insert("a", 1);
        assert_eq!(
            each_pair(&map),
            vec!["The value of c is 3", "The value of a is 1"]
        );
        assert_eq!(each_pair(&sample_pairs())[0], "The value of a is 1");
    }

    #[test]
    fn times_runs_the_closure_exactly_n_times() {
        let mut lines = Vec::new();
        times(3, || lines.push("Beetlejuice!"));
        assert_eq!(lines, vec!["Beetlejuice!"; 3]);

        let mut calls = 0;
        times(0, || calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn century_rules() {
        assert_eq!(classify_year(1900), YearKind::Plain);
        assert_eq!(classify_year(2000), YearKind::Leap);
        assert_eq!(classify_year(1996), YearKind::Leap);
        assert_eq!(classify_year(1999), YearKind::Plain);
        assert_eq!(describe_year(1900), "1900 is a plain old year.");
        assert_eq!(describe_year(2000), "2000 is a leap year!");
    }

    #[test]
    fn twentieth_century_has_25_leap_years() {
        let years = leap_years(1900, 2000).unwrap();
        assert_eq!(years.len(), 101);
        let leaps = years.iter().filter(|(_, k)| *k == YearKind::Leap).count();
        assert_eq!(leaps, 25);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            leap_years(2000, 1900),
            Err(TourError::InvalidRange {
                start: 2000,
                end: 1900
            })
        );
    }

    #[test]
    fn extreme_range_is_refused_before_allocating() {
        assert_eq!(
            leap_years(i32::MIN, i32::MAX),
            Err(TourError::RangeTooWide {
                start: i32::MIN,
                end: i32::MAX,
                max: MAX_YEAR_SPAN
            })
        );
        assert!(leap_years(0, 10_000).is_ok());
        assert!(leap_years(0, 10_001).is_err());
    }

    #[test]
    fn index_helpers() {
        let lines = each_with_index(&NAMES);
        assert_eq!(lines.first().map(String::as_str), Some("1. john"));
        assert_eq!(lines.last().map(String::as_str), Some("6. terry"));

        let ranked = rank_by_enumerate(&NAMES);
        assert_eq!(ranked, rank_by_map_with_index(&NAMES));
        assert_eq!(
            ranked[4],
            Comedian {
                name: "terry".to_string(),
                rank: 4
            }
        );
    }
}
