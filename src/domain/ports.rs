use crate::domain::model::{ConversionSummary, RecordSequence};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Where records are read from and written to. Returned handles are closed on drop.
pub trait Storage {
    fn open_reader(&self, path: &str) -> Result<Box<dyn BufRead>>;
    fn create_writer(&self, path: &str) -> Result<Box<dyn Write>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn indent(&self) -> usize;
}

pub trait Pipeline {
    fn extract(&self) -> Result<RecordSequence>;
    fn load(&self, records: RecordSequence) -> Result<ConversionSummary>;
}
