pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{storage::LocalStorage, ConversionConfig};

pub use core::{engine::Converter, pipeline::JsonlPipeline};
pub use domain::model::{ConversionSummary, Record, RecordSequence};
pub use utils::error::{ConvertError, Result};

use utils::validation::Validate;

/// Combines the line-delimited JSON file at `input_path` into a JSON array at
/// `output_path`, indented by four spaces per level.
///
/// The input is decoded completely before the output is opened, so a read or
/// parse failure leaves any existing output file untouched.
pub fn convert(input_path: &str, output_path: &str) -> Result<()> {
    convert_with_config(ConversionConfig::new(input_path, output_path)).map(|_| ())
}

pub fn convert_with_config(config: ConversionConfig) -> Result<ConversionSummary> {
    config.validate()?;
    let pipeline = JsonlPipeline::new(LocalStorage::new(), config);
    Converter::new(pipeline).run()
}
