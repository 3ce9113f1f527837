pub mod engine;
pub mod jsonl;
pub mod pipeline;

pub use crate::domain::model::{ConversionSummary, Record, RecordSequence};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
