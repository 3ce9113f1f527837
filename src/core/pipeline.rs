use crate::core::jsonl::{decode_lines, encode_array};
use crate::core::{ConfigProvider, ConversionSummary, Pipeline, RecordSequence, Storage};
use crate::utils::error::Result;

/// Reads line-delimited JSON from the configured input and writes it back as one array.
pub struct JsonlPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> JsonlPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for JsonlPipeline<S, C> {
    fn extract(&self) -> Result<RecordSequence> {
        let input_path = self.config.input_path();
        tracing::debug!("Opening input file: {}", input_path);

        let reader = self.storage.open_reader(input_path)?;
        let records = decode_lines(reader, input_path)?;

        tracing::debug!(
            "Decoded {} records from {} ({} blank lines skipped)",
            records.len(),
            input_path,
            records.blank_lines()
        );
        Ok(records)
    }

    fn load(&self, records: RecordSequence) -> Result<ConversionSummary> {
        let output_path = self.config.output_path();
        tracing::debug!("Creating output file: {}", output_path);

        {
            let writer = self.storage.create_writer(output_path)?;
            encode_array(writer, records.records(), self.config.indent(), output_path)?;
        }

        tracing::debug!("Wrote {} records to {}", records.len(), output_path);
        Ok(ConversionSummary {
            input_path: self.config.input_path().to_string(),
            output_path: output_path.to_string(),
            records: records.len(),
            blank_lines: records.blank_lines(),
        })
    }
}
