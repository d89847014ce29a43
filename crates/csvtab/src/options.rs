use crate::error::{Error, Result};

/// Windows line ending (`\r\n`).
pub const WINDOWS_LINE_ENDING: &str = "\r\n";
/// Unix line ending (`\n`).
pub const UNIX_LINE_ENDING: &str = "\n";
/// Classic Mac OS line ending (`\r`).
pub const MAC_OLD_LINE_ENDING: &str = "\r";

/// Line terminator preset, used where a single ending has to be picked
/// (writer override, CLI flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => UNIX_LINE_ENDING,
            LineEnding::CrLf => WINDOWS_LINE_ENDING,
            LineEnding::Cr => MAC_OLD_LINE_ENDING,
        }
    }
}

/// Parsing and writing rules for delimited text.
///
/// The same options drive both directions: the parser splits on any entry
/// of `line_endings`, while the writer terminates lines with the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Field separator; may be longer than one character.
    pub delimiter: String,
    /// Character wrapping fields that contain delimiters, quotes or line breaks.
    pub quote: char,
    /// Carried for configuration compatibility; doubled quotes are the only
    /// escape recognised inside quoted fields.
    pub escape: char,
    /// Recognised line terminators. Overlapping entries are matched longest first.
    pub line_endings: Vec<String>,
    /// Keep leading/trailing whitespace of fields instead of trimming it.
    pub preserve_whitespace: bool,
    /// Use the first line to name columns.
    pub first_row_as_header: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: String::from(","),
            quote: '"',
            escape: '\\',
            line_endings: vec![
                WINDOWS_LINE_ENDING.to_string(),
                UNIX_LINE_ENDING.to_string(),
                MAC_OLD_LINE_ENDING.to_string(),
            ],
            preserve_whitespace: false,
            first_row_as_header: true,
        }
    }
}

impl Options {
    /// Tab-separated preset.
    pub fn tsv() -> Self {
        Self {
            delimiter: String::from("\t"),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_line_endings<I, S>(mut self, endings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_endings = endings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_header(mut self, first_row_as_header: bool) -> Self {
        self.first_row_as_header = first_row_as_header;
        self
    }

    pub fn with_preserve_whitespace(mut self, preserve: bool) -> Self {
        self.preserve_whitespace = preserve;
        self
    }

    /// True when the options can drive a parse or a write.
    pub fn is_usable(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter.trim().is_empty() && !is_whitespace_delimiter(&self.delimiter) {
            return Err(Error::config("delimiter cannot be empty"));
        }
        if self.line_endings.is_empty() {
            return Err(Error::config("line endings cannot be empty"));
        }
        if self.line_endings.iter().any(|e| e.is_empty()) {
            return Err(Error::config("line endings cannot contain an empty entry"));
        }
        Ok(())
    }

    /// Terminator used when writing: the first configured ending, or `\n`.
    pub fn primary_line_ending(&self) -> &str {
        self.line_endings
            .first()
            .map(String::as_str)
            .unwrap_or(UNIX_LINE_ENDING)
    }
}

// Tab and other non-space whitespace separators are legitimate delimiters.
fn is_whitespace_delimiter(delimiter: &str) -> bool {
    !delimiter.is_empty() && delimiter.chars().all(|c| c.is_whitespace() && c != ' ')
}
