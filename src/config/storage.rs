use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Local filesystem storage. Paths are used as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn open_reader(&self, path: &str) -> Result<Box<dyn BufRead>> {
        let file = File::open(path).map_err(|source| ConvertError::ReadError {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }

    /// Creates or truncates `path`. Missing parent directories are an error.
    fn create_writer(&self, path: &str) -> Result<Box<dyn Write>> {
        let file = File::create(path).map_err(|source| ConvertError::WriteError {
            path: path.to_string(),
            source,
        })?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
