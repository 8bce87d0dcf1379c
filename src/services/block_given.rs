/// Behaves differently depending on whether the caller handed over a closure.
pub fn greet<F>(block: Option<F>) -> String
where
    F: FnOnce() -> String,
{
    match block {
        Some(f) => format!("Block says: {}", f()),
        None => "No block :(".to_string(),
    }
}
