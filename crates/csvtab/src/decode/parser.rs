use std::io::Read;

use crate::decode::scanner::{RawLine, scan};
use crate::decode::tokenizer::split_line;
use crate::error::{Error, Result};
use crate::events::Event;
use crate::options::Options;
use crate::provider::{OptionsHost, Provider};
use crate::table::Table;

/// A data line dropped because its field count differs from the header's.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SkippedRow {
    /// 1-based line number in the raw input.
    pub line: usize,
    pub expected: usize,
    pub found: usize,
}

/// Row accounting for the most recent parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParseReport {
    /// Data lines considered, header excluded.
    pub rows_read: usize,
    pub rows_kept: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Turns delimited text into a [`Table`].
#[derive(Debug, Default)]
pub struct Parser {
    host: OptionsHost,
    column_names: Vec<String>,
    strict: bool,
    report: ParseReport,
}

impl Parser {
    pub fn new(options: Options) -> Self {
        Self {
            host: OptionsHost::new(options),
            ..Self::default()
        }
    }

    /// Names used instead of `Column {n}` when the first row is data.
    /// Blank entries fall back to the placeholder.
    pub fn with_column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Reject lines that end inside a quoted field instead of absorbing the rest.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    pub fn parse(&mut self, raw: &str) -> Result<Table> {
        self.report = ParseReport::default();
        if raw.trim().is_empty() {
            return Err(Error::input("raw text cannot be empty"));
        }
        let options = self.host.options();
        options.validate()?;

        let _working = self.host.begin_work();
        let lines = scan(raw, &options.line_endings);
        let mut table = Table::new();
        let mut report = ParseReport::default();

        let Some(first) = lines.first() else {
            self.report = report;
            return Ok(table);
        };

        let header = split(first, options, self.strict)?;
        for (idx, field) in header.iter().enumerate() {
            let base = if options.first_row_as_header {
                field.clone()
            } else {
                match self.column_names.get(idx) {
                    Some(name) if !name.trim().is_empty() => name.clone(),
                    _ => format!("Column {}", idx + 1),
                }
            };
            table.add_column(&base);
        }

        let start = usize::from(options.first_row_as_header);
        for line in &lines[start..] {
            report.rows_read += 1;
            let fields = split(line, options, self.strict)?;
            if fields.len() != table.width() {
                let skipped = SkippedRow {
                    line: line.number,
                    expected: table.width(),
                    found: fields.len(),
                };
                tracing::debug!(
                    line = skipped.line,
                    expected = skipped.expected,
                    found = skipped.found,
                    "dropping row with mismatched field count"
                );
                self.host.emit(&Event::RowSkipped(skipped.clone()));
                report.skipped.push(skipped);
                continue;
            }
            let row = fields
                .into_iter()
                .map(|f| clean_value(f, options.preserve_whitespace))
                .collect();
            table.rows.push(row);
        }

        table.infer_types(options.preserve_whitespace);
        report.rows_kept = table.len();
        tracing::debug!(
            columns = table.width(),
            rows = report.rows_kept,
            skipped = report.skipped.len(),
            "parsed delimited text"
        );
        self.report = report;
        Ok(table)
    }

    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> Result<Table> {
        let mut s = String::new();
        reader.read_to_string(&mut s)?;
        self.parse(&s)
    }
}

impl Provider for Parser {
    fn host(&self) -> &OptionsHost {
        &self.host
    }

    fn host_mut(&mut self) -> &mut OptionsHost {
        &mut self.host
    }
}

fn split(line: &RawLine<'_>, options: &Options, strict: bool) -> Result<Vec<String>> {
    let split = split_line(line.text, &options.delimiter, options.quote);
    if strict && split.open_quote {
        return Err(Error::Syntax {
            line: line.number,
            message: "unterminated quoted field".to_string(),
        });
    }
    Ok(split.fields)
}

fn clean_value(value: String, preserve_whitespace: bool) -> String {
    if preserve_whitespace {
        value
    } else {
        value.trim().to_string()
    }
}
