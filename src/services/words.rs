use std::cmp::Ordering;

pub const WORDS: [&str; 5] = ["apple", "banana", "aardvark", "cumquat", "peach"];
pub const LETTERS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// The imperative version: an explicit loop and an output vector.
pub fn for_loop_filter<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut result = Vec::new();
    for word in words {
        if !word.starts_with('a') {
            result.push(*word);
        }
    }
    result
}

pub fn reject_leading<'a>(words: &[&'a str], letter: char) -> Vec<&'a str> {
    words
        .iter()
        .copied()
        .filter(|w| !w.starts_with(letter))
        .collect()
}

/// Stable, so equal-length words keep their relative order.
pub fn sort_by_length(mut words: Vec<&str>) -> Vec<&str> {
    words.sort_by_key(|w| w.chars().count());
    words
}

/// Same ordering as `sort_by_length`, keyed by a method path instead of a closure.
pub fn sort_by_size(words: &[&str]) -> Vec<String> {
    let mut owned: Vec<String> = words.iter().map(ToString::to_string).collect();
    owned.sort_by_key(String::len);
    owned
}

pub fn sort_default<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = words.to_vec();
    sorted.sort();
    sorted
}

pub fn sort_with<'a, F>(words: &[&'a str], mut cmp: F) -> Vec<&'a str>
where
    F: FnMut(&str, &str) -> Ordering,
{
    let mut sorted = words.to_vec();
    sorted.sort_by(|x, y| cmp(*x, *y));
    sorted
}
