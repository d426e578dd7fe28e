use serde::{Deserialize, Serialize};

/// One logged note.
///
/// Both fields are immutable after creation; there is no edit operation.
/// The serde renames pin the persisted wire format: a JSON array of
/// `{"t": "<timestamp>", "v": "<text>"}` objects, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Local capture time, formatted `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "t")]
    pub timestamp: String,
    /// Entry text, trimmed and non-empty.
    #[serde(rename = "v")]
    pub text: String,
}

impl Entry {
    // Entries are only ever built by `journal::add`, which enforces the
    // trimmed-non-empty invariant before calling this.
    pub(crate) fn new(timestamp: String, text: String) -> Self {
        Self { timestamp, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_short_keys() {
        let entry = Entry::new("2024-01-02 03:04:05".into(), "hello".into());
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"t":"2024-01-02 03:04:05","v":"hello"}"#);
    }

    #[test]
    fn deserializes_from_short_keys() {
        let entry: Entry =
            serde_json::from_str(r#"{"t":"2024-01-02 03:04:05","v":"hello"}"#).unwrap();
        assert_eq!(entry.timestamp, "2024-01-02 03:04:05");
        assert_eq!(entry.text, "hello");
    }
}
