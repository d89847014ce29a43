/// True when `field` must be wrapped in quotes to survive a parse: it
/// contains the delimiter, the quote char, or the line terminator.
pub fn needs_quotes(field: &str, delimiter: &str, quote: char, line_ending: &str) -> bool {
    (!delimiter.is_empty() && field.contains(delimiter))
        || field.contains(quote)
        || (!line_ending.is_empty() && field.contains(line_ending))
}

/// Appends `field` to `out` wrapped in `quote`, doubling embedded quotes.
pub fn escape_and_quote_into(out: &mut String, field: &str, quote: char) {
    out.reserve(field.len() + 2);
    out.push(quote);
    for ch in field.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
}

pub fn escape_and_quote(field: &str, quote: char) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    escape_and_quote_into(&mut out, field, quote);
    out
}

/// Field as it should appear on the wire.
pub fn format_field(field: &str, delimiter: &str, quote: char, line_ending: &str) -> String {
    if needs_quotes(field, delimiter, quote, line_ending) {
        escape_and_quote(field, quote)
    } else {
        field.to_string()
    }
}
