//! Delimited-text (CSV/TSV) parsing with column type inference, and the
//! matching writer.
//!
//! ```
//! let table = csvtab::parse("Name,Age\nAlice,30\nBob,25", &csvtab::Options::default())?;
//! assert_eq!(table.columns[1].data_type, csvtab::DataType::Integer);
//! assert_eq!(table.value(1, "Name"), Some("Bob"));
//! # Ok::<(), csvtab::Error>(())
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod events;
pub mod infer;
pub mod options;
pub mod provider;
pub mod table;

pub use crate::decode::parser::{ParseReport, Parser, SkippedRow};
pub use crate::encode::Writer;
pub use crate::error::{Error, Result};
pub use crate::events::{Event, IgnoreReason, Subscription};
pub use crate::infer::DataType;
pub use crate::options::{LineEnding, Options};
pub use crate::provider::{ChangeIgnored, Provider};
pub use crate::table::{Column, Table};

use std::io::{Read, Write};

pub fn parse(s: &str, options: &Options) -> Result<Table> {
    Parser::new(options.clone()).parse(s)
}

pub fn parse_from_reader<R: Read>(reader: R, options: &Options) -> Result<Table> {
    Parser::new(options.clone()).parse_reader(reader)
}

pub fn write_to_string(table: &Table, options: &Options) -> Result<String> {
    Writer::new(options.clone()).write_to_string(table)
}

pub fn write_to_writer<W: Write>(writer: W, table: &Table, options: &Options) -> Result<()> {
    Writer::new(options.clone()).write_to_writer(writer, table)
}
