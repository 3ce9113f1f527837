use crate::config::ConversionConfig;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::ffi::OsString;

pub const PROGRAM_NAME: &str = "jsonl-combine";

/// Exactly two positionals; anything else is a usage error.
#[derive(Debug, Clone, Parser)]
#[command(name = "jsonl-combine", disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Combine line-delimited JSON records into a single JSON array")]
pub struct CliConfig {
    /// Line-delimited JSON file to read
    #[arg(allow_hyphen_values = true)]
    pub input_file: String,

    /// JSON file to create or overwrite
    #[arg(allow_hyphen_values = true)]
    pub output_file: String,
}

impl CliConfig {
    /// Parses `args`, program name first.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let usage = || ConvertError::UsageError {
            program: PROGRAM_NAME.to_string(),
        };

        // clap may read a literal `--` as a separator rather than a value
        if args.len() != 3 {
            return Err(usage());
        }

        Self::try_parse_from(args).map_err(|e| {
            tracing::debug!("Argument parsing failed: {}", e);
            usage()
        })
    }

    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig::new(self.input_file.as_str(), self.output_file.as_str())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.conversion_config().validate()
    }
}
