//! Line tokenizer for `.mon` files.
//!
//! Turns raw source lines into `(property, raw value)` pairs:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! Name     = "rat"
//! Skills   = {(HitPoints, 20, 0, 20, 0, 0, 0),
//!             (GoStrength, 14, 14, 14, 0, 0, 0)}
//! ```
//!
//! A line without `=` continues the previous value. Fragments are trimmed and
//! concatenated as-is, so `Name = Big` followed by `  Rat` yields `BigRat`.
//! Only the first `=` on a line separates name from value; any later `=`
//! belongs to the value.

use std::io;
use std::iter::FusedIterator;

use super::span::LineSpan;

/// First non-whitespace character of a comment line.
pub const COMMENT_MARKER: char = '#';

/// Separates a property name from its value.
pub const SEPARATOR: char = '=';

/// A property read from a monster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Lower-cased, trimmed property name
    pub name: String,
    /// Raw value with continuation lines appended
    pub value: String,
    /// Lines the property was read from
    pub span: LineSpan,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>, span: LineSpan) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            span,
        }
    }

    /// Line the property starts on.
    pub fn line(&self) -> u32 {
        self.span.start
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Accumulating(Property),
}

/// Lazy, single-pass iterator over the properties of a line sequence.
///
/// Read errors from the underlying lines are yielded once and end the
/// iteration.
#[derive(Debug)]
pub struct PropertyLines<I> {
    lines: I,
    line_no: u32,
    state: State,
    finished: bool,
}

impl<I> PropertyLines<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_no: 0,
            state: State::Idle,
            finished: false,
        }
    }

    /// Append a continuation fragment to the held value.
    fn continue_value(&mut self, fragment: &str) {
        match &mut self.state {
            State::Accumulating(held) => {
                held.value.push_str(fragment);
                held.span.extend_to(self.line_no);
            }
            State::Idle => {
                // Nothing to continue; the nameless pair is dropped on flush.
                self.state = State::Accumulating(Property::new(
                    "",
                    fragment,
                    LineSpan::line(self.line_no),
                ));
            }
        }
    }

    /// Release the held pair if it is complete.
    fn take_held(&mut self) -> Option<Property> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Accumulating(held) if !held.name.is_empty() && !held.value.is_empty() => {
                Some(held)
            }
            _ => None,
        }
    }
}

impl<I, S> Iterator for PropertyLines<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    type Item = io::Result<Property>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return self.take_held().map(Ok);
                }
            };
            self.line_no += 1;

            let text = line.as_ref().trim_start();
            if text.is_empty() || text.starts_with(COMMENT_MARKER) {
                continue;
            }

            match text.split_once(SEPARATOR) {
                None => self.continue_value(text.trim()),
                Some((name, value)) => {
                    let flushed = self.take_held();
                    self.state = State::Accumulating(Property::new(
                        name.trim().to_lowercase(),
                        value.trim(),
                        LineSpan::line(self.line_no),
                    ));
                    if flushed.is_some() {
                        return flushed.map(Ok);
                    }
                }
            }
        }
    }
}

impl<I, S> FusedIterator for PropertyLines<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
}

/// Tokenize a sequence of fallible lines (e.g. from a buffered reader).
pub fn tokenize<I, S>(lines: I) -> PropertyLines<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    PropertyLines::new(lines.into_iter())
}

/// Tokenize in-memory source text.
pub fn tokenize_str(source: &str) -> PropertyLines<impl Iterator<Item = io::Result<&str>>> {
    PropertyLines::new(source.lines().map(Ok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(source: &str) -> Vec<(String, String)> {
        tokenize_str(source)
            .map(|p| {
                let p = p.unwrap();
                (p.name, p.value)
            })
            .collect()
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_simple_properties() {
        let source = "RaceNumber = 21\nName = \"rat\"\n";

        assert_eq!(
            pairs(source),
            vec![pair("racenumber", "21"), pair("name", "\"rat\"")]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let plain = "racenumber=100\nname=Rat\n";
        let noisy = "# header\n\nracenumber=100\n   # note\n\t\nname=Rat\n\n# trailer";

        assert_eq!(pairs(plain), pairs(noisy));
    }

    #[test]
    fn test_continuation_concatenates_without_separator() {
        assert_eq!(pairs("name=Big\n  Rat\n"), vec![pair("name", "BigRat")]);
    }

    #[test]
    fn test_continuation_survives_comment_between_fragments() {
        let source = "skills = {(HitPoints, 20, 0, 20, 0, 0, 0),\n# hp above\n   (GoStrength, 14, 14, 14, 0, 0, 0)}\n";

        assert_eq!(
            pairs(source),
            vec![pair(
                "skills",
                "{(HitPoints, 20, 0, 20, 0, 0, 0),(GoStrength, 14, 14, 14, 0, 0, 0)}"
            )]
        );
    }

    #[test]
    fn test_only_first_separator_splits() {
        assert_eq!(
            pairs("skills = {(HitPoints, default=200, current=-1)}"),
            vec![pair("skills", "{(HitPoints, default=200, current=-1)}")]
        );
    }

    #[test]
    fn test_names_are_lowercased_and_trimmed() {
        assert_eq!(pairs("  FleeThreshold   =  5  "), vec![pair("fleethreshold", "5")]);
    }

    #[test]
    fn test_empty_value_is_dropped() {
        assert_eq!(
            pairs("article =\nname = rat"),
            vec![pair("name", "rat")]
        );
    }

    #[test]
    fn test_empty_value_filled_by_continuation() {
        assert_eq!(pairs("talk =\n  \"Meep!\""), vec![pair("talk", "\"Meep!\"")]);
    }

    #[test]
    fn test_leading_continuation_is_dropped() {
        assert_eq!(pairs("orphan text\nname = rat"), vec![pair("name", "rat")]);
    }

    #[test]
    fn test_nameless_property_is_dropped() {
        assert_eq!(pairs("= 5\nname = rat"), vec![pair("name", "rat")]);
    }

    #[test]
    fn test_spans_cover_continuation_lines() {
        let props: Vec<Property> = tokenize_str("# c\nname = a\n b\n\n c\nexperience = 5")
            .map(|p| p.unwrap())
            .collect();

        assert_eq!(props[0].span, LineSpan::new(2, 5));
        assert_eq!(props[1].span, LineSpan::line(6));
        assert_eq!(props[1].line(), 6);
    }

    #[test]
    fn test_read_error_ends_iteration() {
        let lines: Vec<io::Result<String>> = vec![
            Ok("name = rat".to_string()),
            Ok("corpse = 1".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
            Ok("experience = 5".to_string()),
        ];
        let mut iter = tokenize(lines);

        assert_eq!(iter.next().unwrap().unwrap().name, "name");
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(pairs("").is_empty());
        assert!(pairs("# only a comment\n\n").is_empty());
    }
}
