use crate::model::Entry;

/// Aggregate metrics over a collection, as rendered by the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JournalStats {
    pub count: usize,
    /// Arithmetic mean of entry text lengths in characters; consumers render
    /// it rounded to two decimal places.
    pub mean_length: f64,
}

/// Mean character length of the given texts; `0.0` for an empty input.
pub fn mean_length<S: AsRef<str>>(texts: &[S]) -> f64 {
    if texts.is_empty() {
        return 0.0;
    }
    let total: usize = texts.iter().map(|t| t.as_ref().chars().count()).sum();
    total as f64 / texts.len() as f64
}

pub fn compute(entries: &[Entry]) -> JournalStats {
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    JournalStats {
        count: entries.len(),
        mean_length: mean_length(&texts),
    }
}
