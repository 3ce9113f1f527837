use serde::{Deserialize, Serialize};

/// One decoded line of line-delimited JSON. Any JSON value is accepted.
pub type Record = serde_json::Value;

/// Records in input line order. Only ever appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSequence {
    records: Vec<Record>,
    blank_lines: usize,
}

impl RecordSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub(crate) fn skip_blank_line(&mut self) {
        self.blank_lines += 1;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Blank or whitespace-only lines skipped while decoding.
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub input_path: String,
    pub output_path: String,
    pub records: usize,
    pub blank_lines: usize,
}
