#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;

use crate::core::jsonl::DEFAULT_INDENT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub input_path: String,
    pub output_path: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl ConversionConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl ConfigProvider for ConversionConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn indent(&self) -> usize {
        self.indent
    }
}

impl Validate for ConversionConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_path)?;
        validate_path("output_file", &self.output_path)?;
        validate_range("indent", self.indent, 0, MAX_INDENT)
    }
}
