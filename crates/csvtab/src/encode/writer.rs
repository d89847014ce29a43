use crate::encode::primitives::{escape_and_quote_into, needs_quotes};

/// Accumulates delimited lines, quoting fields as needed.
pub struct LineWriter<'a> {
    out: String,
    scratch: String,
    delimiter: &'a str,
    quote: char,
    line_ending: &'a str,
}

impl<'a> LineWriter<'a> {
    pub fn new(delimiter: &'a str, quote: char, line_ending: &'a str) -> Self {
        Self {
            out: String::new(),
            scratch: String::new(),
            delimiter,
            quote,
            line_ending,
        }
    }

    fn write_formatted(&mut self, value: &str) {
        if needs_quotes(value, self.delimiter, self.quote, self.line_ending) {
            self.scratch.clear();
            escape_and_quote_into(&mut self.scratch, value, self.quote);
            self.out.push_str(&self.scratch);
        } else {
            self.out.push_str(value);
        }
    }

    /// Writes one record: fields joined by the delimiter, then the terminator.
    pub fn record<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                self.out.push_str(self.delimiter);
            }
            self.write_formatted(field.as_ref());
        }
        self.out.push_str(self.line_ending);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
