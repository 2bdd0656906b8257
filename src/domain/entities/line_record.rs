//! Line record entity: one distinct line of input and how often it occurred.

/// A distinct end-trimmed line paired with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub line: String,
    pub count: usize,
}

impl LineRecord {
    /// Creates a record seen once.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            count: 1,
        }
    }

    /// Formats the record as `"<line>: <count>"`.
    pub fn count_line(&self) -> String {
        format!("{}: {}", self.line, self.count)
    }

    /// Formats the record as `"<line>: "` followed by one `*` per occurrence.
    pub fn histogram_line(&self) -> String {
        format!("{}: {}", self.line, "*".repeat(self.count))
    }
}
