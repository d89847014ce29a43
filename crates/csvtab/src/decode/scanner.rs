//! Raw text to lines.

/// One physical line of input with its 1-based position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl RawLine<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Splits `input` on any of `endings` and drops whitespace-only lines from
/// both ends. Interior blank lines are kept.
pub fn scan<'a, S: AsRef<str>>(input: &'a str, endings: &[S]) -> Vec<RawLine<'a>> {
    let lines: Vec<RawLine<'a>> = iter(input, endings).collect();
    let start = lines.iter().take_while(|l| l.is_blank()).count();
    let end = lines.len() - lines[start..].iter().rev().take_while(|l| l.is_blank()).count();
    lines[start..end].to_vec()
}

pub struct LineIter<'a, 'e> {
    rest: Option<&'a str>,
    endings: Vec<&'e str>,
    number: usize,
}

/// Iterates every line, including blank ones. A trailing terminator yields a
/// final empty line, the same way `str::split` does.
pub fn iter<'a, 'e, S: AsRef<str>>(input: &'a str, endings: &'e [S]) -> LineIter<'a, 'e> {
    let mut endings: Vec<&'e str> = endings
        .iter()
        .map(|e| e.as_ref())
        .filter(|e| !e.is_empty())
        .collect();
    // Longest first so "\r\n" is not consumed as "\r" followed by "\n".
    endings.sort_by(|a, b| b.len().cmp(&a.len()));
    LineIter {
        rest: Some(input),
        endings,
        number: 0,
    }
}

impl LineIter<'_, '_> {
    fn find_ending(&self, s: &str) -> Option<(usize, usize)> {
        let bytes = s.as_bytes();
        for (i, _) in s.char_indices() {
            for e in &self.endings {
                if bytes[i..].starts_with(e.as_bytes()) {
                    return Some((i, e.len()));
                }
            }
        }
        None
    }
}

impl<'a> Iterator for LineIter<'a, '_> {
    type Item = RawLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        self.number += 1;
        match self.find_ending(rest) {
            Some((pos, len)) => {
                self.rest = Some(&rest[pos + len..]);
                Some(RawLine {
                    number: self.number,
                    text: &rest[..pos],
                })
            }
            None => {
                self.rest = None;
                Some(RawLine {
                    number: self.number,
                    text: rest,
                })
            }
        }
    }
}
