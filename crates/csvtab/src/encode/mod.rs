//! Encoding pipeline: table -> delimited text.

pub mod primitives;
pub mod writer;

use std::io::Write;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::provider::{OptionsHost, Provider};
use crate::table::Table;
use writer::LineWriter;

/// Serializes a [`Table`] back to delimited text.
#[derive(Debug, Default)]
pub struct Writer {
    host: OptionsHost,
    line_ending: Option<String>,
    columns: Option<Vec<String>>,
}

impl Writer {
    pub fn new(options: Options) -> Self {
        Self {
            host: OptionsHost::new(options),
            ..Self::default()
        }
    }

    /// Overrides the terminator otherwise taken from the options.
    pub fn line_ending(mut self, ending: impl Into<String>) -> Self {
        self.line_ending = Some(ending.into());
        self
    }

    /// Writes columns in this order. The list must name every column of the
    /// table exactly once.
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Override, else the first configured ending, else `\n`.
    pub fn effective_line_ending(&self) -> &str {
        match &self.line_ending {
            Some(e) => e.as_str(),
            None => self.host.options().primary_line_ending(),
        }
    }

    pub fn write_to_string(&mut self, table: &Table) -> Result<String> {
        let options = self.host.options();
        options.validate()?;
        if self.line_ending.as_deref() == Some("") {
            return Err(Error::config("line ending override cannot be empty"));
        }
        let order = self.column_order(table)?;

        let _working = self.host.begin_work();
        let line_ending = self.effective_line_ending();
        let mut w = LineWriter::new(&options.delimiter, options.quote, line_ending);

        if options.first_row_as_header {
            w.record(order.iter().map(|&i| table.columns[i].name.as_str()));
        }
        for row in &table.rows {
            w.record(order.iter().map(|&i| row.get(i).map(String::as_str).unwrap_or("")));
        }
        tracing::debug!(
            columns = order.len(),
            rows = table.len(),
            "wrote delimited text"
        );
        Ok(w.into_string())
    }

    pub fn write_to_writer<W: Write>(&mut self, mut writer: W, table: &Table) -> Result<()> {
        let s = self.write_to_string(table)?;
        writer.write_all(s.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn column_order(&self, table: &Table) -> Result<Vec<usize>> {
        let Some(names) = &self.columns else {
            return Ok((0..table.width()).collect());
        };
        if names.len() != table.width() {
            return Err(Error::ColumnCount {
                expected: table.width(),
                found: names.len(),
            });
        }
        names
            .iter()
            .map(|n| {
                table
                    .column_index(n)
                    .ok_or_else(|| Error::UnknownColumn(n.clone()))
            })
            .collect()
    }
}

impl Provider for Writer {
    fn host(&self) -> &OptionsHost {
        &self.host
    }

    fn host_mut(&mut self) -> &mut OptionsHost {
        &mut self.host
    }
}
