//! Line frequency table.
//!
//! Counts how often each distinct line occurs in a text source. Trailing
//! whitespace is trimmed before counting; leading whitespace is kept, so
//! `"  cat"` and `"cat"` are distinct keys. Keys compare case-sensitively.
//! Views iterate in first-occurrence order.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::domain::entities::LineRecord;
use crate::error::AppError;

/// Which report to render from a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyView {
    /// Every distinct line with its count.
    List,
    /// Header with the queried name, then its count line if present.
    Lookup(String),
    /// Every distinct line with a bar of `*`, one per occurrence.
    Histogram,
}

/// Immutable mapping from end-trimmed line to occurrence count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    records: Vec<LineRecord>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Reads and counts every line of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the file is missing or cannot be read.
    /// Nothing is returned on a partial read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AppError::io(path, e))?;
        Self::from_reader(BufReader::new(file)).map_err(|e| AppError::io(path, e))
    }

    /// Counts every line from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Counts an in-memory sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for line in lines {
            table.record(line.as_ref().trim_end());
        }
        table
    }

    fn record(&mut self, line: &str) {
        match self.index.get(line) {
            Some(&pos) => self.records[pos].count += 1,
            None => {
                self.index.insert(line.to_string(), self.records.len());
                self.records.push(LineRecord::new(line));
            }
        }
    }

    /// Count for an exact (already end-trimmed) line, if it was seen.
    pub fn get(&self, line: &str) -> Option<usize> {
        self.index.get(line).map(|&pos| self.records[pos].count)
    }

    /// Records in first-occurrence order.
    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of lines counted.
    pub fn total(&self) -> usize {
        self.records.iter().map(|r| r.count).sum()
    }

    /// `"<line>: <count>"` for every distinct line.
    pub fn list_all(&self) -> Vec<String> {
        self.records.iter().map(LineRecord::count_line).collect()
    }

    /// The queried name, followed by its count line when present.
    ///
    /// `name` must equal a key exactly; it is not trimmed. An absent name is
    /// not an error; only the header is produced.
    pub fn lookup(&self, name: &str) -> Vec<String> {
        let mut lines = vec![name.to_string()];
        if let Some(&pos) = self.index.get(name) {
            lines.push(self.records[pos].count_line());
        }
        lines
    }

    /// `"<line>: "` plus `count` asterisks for every distinct line.
    pub fn histogram(&self) -> Vec<String> {
        self.records.iter().map(LineRecord::histogram_line).collect()
    }

    /// Renders the requested view.
    pub fn render(&self, view: &FrequencyView) -> Vec<String> {
        match view {
            FrequencyView::List => self.list_all(),
            FrequencyView::Lookup(name) => self.lookup(name),
            FrequencyView::Histogram => self.histogram(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> FrequencyTable {
        FrequencyTable::from_reader(Cursor::new("cat\ndog\ncat\n")).unwrap()
    }

    #[test]
    fn test_counts_duplicate_lines() {
        let table = sample();
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("dog"), Some(1));
        assert_eq!(table.get("bird"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_total_matches_line_count() {
        let input = "apple\nbanana\napple\n\ncherry\nbanana\napple";
        let table = FrequencyTable::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(table.total(), input.lines().count());
    }

    #[test]
    fn test_trims_trailing_whitespace_and_crlf() {
        let table = FrequencyTable::from_reader(Cursor::new("cat\r\ncat  \ncat\t\n")).unwrap();
        assert_eq!(table.get("cat"), Some(3));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_leading_whitespace_is_distinct_key() {
        let table = FrequencyTable::from_lines(["cat\n", "  cat\n", "cat  \n"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("  cat"), Some(1));
        assert_eq!(table.list_all(), vec!["cat: 2", "  cat: 1"]);
    }

    #[test]
    fn test_case_sensitive() {
        let table = FrequencyTable::from_lines(["Cat", "cat"]);
        assert_eq!(table.get("Cat"), Some(1));
        assert_eq!(table.get("cat"), Some(1));
    }

    #[test]
    fn test_list_all_in_first_occurrence_order() {
        let table = FrequencyTable::from_lines(["pear", "fig", "pear", "kiwi"]);
        assert_eq!(table.list_all(), vec!["pear: 2", "fig: 1", "kiwi: 1"]);
    }

    #[test]
    fn test_lookup_present() {
        let lines = sample().lookup("cat");
        assert_eq!(lines, vec!["cat", "cat: 2"]);
    }

    #[test]
    fn test_lookup_padded_query_matches_nothing() {
        let table = FrequencyTable::from_lines(["cat", "dog", "cat"]);
        assert_eq!(table.lookup(" cat"), vec![" cat"]);
        assert_eq!(table.lookup("cat "), vec!["cat "]);
    }

    #[test]
    fn test_lookup_absent_prints_header_only() {
        let lines = sample().lookup("bird");
        assert_eq!(lines, vec!["bird"]);
    }

    #[test]
    fn test_histogram_bar_lengths() {
        let table = FrequencyTable::from_lines(["a", "b", "a", "a"]);
        let histogram = table.histogram();
        assert_eq!(histogram, vec!["a: ***", "b: *"]);
        for (line, record) in histogram.iter().zip(table.records()) {
            assert_eq!(line.matches('*').count(), record.count);
        }
    }

    #[test]
    fn test_histogram_example() {
        assert_eq!(sample().histogram()[0], "cat: **");
    }

    #[test]
    fn test_render_dispatches_views() {
        let table = sample();
        assert_eq!(table.render(&FrequencyView::List), table.list_all());
        assert_eq!(table.render(&FrequencyView::Histogram), table.histogram());
        assert_eq!(
            table.render(&FrequencyView::Lookup("dog".to_string())),
            vec!["dog", "dog: 1"]
        );
    }

    #[test]
    fn test_empty_source() {
        let table = FrequencyTable::from_reader(Cursor::new("")).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.histogram().is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let result = FrequencyTable::open("definitely/not/here.txt");
        assert!(matches!(result, Err(AppError::Io { .. })));
    }
}
