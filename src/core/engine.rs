use crate::core::{ConversionSummary, Pipeline};
use crate::utils::error::Result;

/// Runs a pipeline end to end: extract every record, then load them in one go.
pub struct Converter<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Converter<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        tracing::info!("Starting conversion");

        tracing::info!("Reading records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Read {} records", records.len());

        tracing::info!("Writing JSON array...");
        let summary = self.pipeline.load(records)?;
        tracing::info!("Output saved to: {}", summary.output_path);

        Ok(summary)
    }
}
