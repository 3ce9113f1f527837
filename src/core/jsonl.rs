//! Line-delimited JSON decoding and pretty JSON array encoding.

use crate::domain::model::{Record, RecordSequence};
use crate::utils::error::{ConvertError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, BufRead, Write};

pub const DEFAULT_INDENT: usize = 4;

const UTF8_BOM: char = '\u{feff}';

/// Decodes every non-blank line of `reader` as one JSON value, in order.
///
/// Lines may end in `\n` or `\r\n`. A byte-order mark at the start of the
/// first line is ignored. `source_name` only labels errors; the reported
/// line number is the 1-based physical line, blank lines included.
pub fn decode_lines<R: BufRead>(reader: R, source_name: &str) -> Result<RecordSequence> {
    let mut sequence = RecordSequence::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ConvertError::ReadError {
            path: source_name.to_string(),
            source,
        })?;

        let text = if index == 0 {
            line.strip_prefix(UTF8_BOM).unwrap_or(line.as_str())
        } else {
            line.as_str()
        };

        if text.trim().is_empty() {
            sequence.skip_blank_line();
            continue;
        }

        let record: Record =
            serde_json::from_str(text).map_err(|source| ConvertError::ParseError {
                path: source_name.to_string(),
                line: index + 1,
                source,
            })?;
        tracing::trace!("Decoded line {} of {}", index + 1, source_name);
        sequence.push(record);
    }

    Ok(sequence)
}

/// Pretty layout with every non-ASCII character written as a `\uXXXX` escape
/// (surrogate pairs above U+FFFF), so the output is plain ASCII.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (offset, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..offset].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = offset + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Writes `records` as a single JSON array indented by `indent` spaces per level.
///
/// Non-ASCII text is escaped. No trailing newline is written. The writer is
/// flushed before returning.
pub fn encode_array<W: Write>(
    mut writer: W,
    records: &[Record],
    indent: usize,
    destination: &str,
) -> Result<()> {
    let indent = vec![b' '; indent];
    let formatter = AsciiPrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);

    records.serialize(&mut serializer).map_err(|e| {
        if e.is_io() {
            ConvertError::WriteError {
                path: destination.to_string(),
                source: e.into(),
            }
        } else {
            ConvertError::SerializationError(e)
        }
    })?;

    writer.flush().map_err(|source| ConvertError::WriteError {
        path: destination.to_string(),
        source,
    })
}
