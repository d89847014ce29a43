//! Line to fields.

/// Fields of one line, plus whether the line ended inside a quoted section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    pub fields: Vec<String>,
    pub open_quote: bool,
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn contains_quote(line: &str, quote: char) -> bool {
    if quote.is_ascii() {
        memchr::memchr(quote as u8, line.as_bytes()).is_some()
    } else {
        line.contains(quote)
    }
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn contains_quote(line: &str, quote: char) -> bool {
    line.contains(quote)
}

/// Splits one line into fields.
///
/// A quote toggles quoted mode; inside quotes a doubled quote yields one
/// literal quote. Outside quotes the delimiter is matched as a substring, so
/// multi-character delimiters work. Everything else, quoted or not, lands in
/// the current field. The last field is always emitted, even when empty.
pub fn split_line(line: &str, delimiter: &str, quote: char) -> SplitLine {
    if !contains_quote(line, quote) {
        let fields = if delimiter.is_empty() {
            vec![line.to_string()]
        } else {
            line.split(delimiter).map(str::to_string).collect()
        };
        return SplitLine {
            fields,
            open_quote: false,
        };
    }

    let quote_len = quote.len_utf8();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut i = 0usize;

    while let Some(c) = line[i..].chars().next() {
        let rest = &line[i..];
        if c == quote {
            if in_quotes && rest[quote_len..].starts_with(quote) {
                current.push(quote);
                i += quote_len * 2;
            } else {
                in_quotes = !in_quotes;
                i += quote_len;
            }
            continue;
        }
        if !in_quotes && !delimiter.is_empty() && rest.starts_with(delimiter) {
            fields.push(core::mem::take(&mut current));
            i += delimiter.len();
            continue;
        }
        current.push(c);
        i += c.len_utf8();
    }

    fields.push(current);
    SplitLine {
        fields,
        open_quote: in_quotes,
    }
}

/// Convenience wrapper returning only the fields.
pub fn split_fields(line: &str, delimiter: &str, quote: char) -> Vec<String> {
    split_line(line, delimiter, quote).fields
}
