//! Monster file loader - streams a file through the decoder.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{MonError, Result};
use crate::mapper::parse_monster;
use crate::parser::tokenize;
use crate::types::MonsterDefinition;

/// Lines of a monster file, decoded one at a time.
///
/// Each line is read as UTF-8 when valid and as Latin-1 otherwise.
/// Line terminators (`\n` or `\r\n`) are stripped, as is a UTF-8 byte-order
/// mark at the start of the file.
#[derive(Debug)]
pub struct SourceLines<R> {
    reader: R,
    buf: Vec<u8>,
    at_start: bool,
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            at_start: true,
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                let line = if std::mem::take(&mut self.at_start) {
                    self.buf.strip_prefix(UTF8_BOM).unwrap_or(&self.buf[..])
                } else {
                    &self.buf[..]
                };
                Some(Ok(decode_line(line)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Decode a raw line, falling back to Latin-1 when it is not UTF-8.
pub fn decode_line(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Load a single monster file.
///
/// Returns `Ok(None)` when the file no longer exists. Any other failure is
/// reported with the file path attached.
pub fn load_monster_file(path: &Path) -> Result<Option<MonsterDefinition>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "monster file disappeared before reading; skipping");
            return Ok(None);
        }
        Err(e) => {
            return Err(MonError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    let lines = SourceLines::new(BufReader::new(file));
    parse_monster(tokenize(lines))
        .map(Some)
        .map_err(|e| e.in_file(path))
}
