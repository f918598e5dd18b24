//! Whitespace-delimited number scanning from any reader.

use std::io::{BufReader, Read};
use utf8_chars::BufReadCharsExt;

use crate::error::TallyError;
use crate::Result;

/// Reads whitespace-separated tokens from a byte stream.
///
/// Tokens may be split across lines; any run of spaces, tabs, or
/// newlines separates one token from the next. The scanner is generic
/// over the reader so tests can feed it in-memory input.
pub struct Scanner<T: Read> {
    reader: BufReader<T>,
}

impl<T: Read> Scanner<T> {
    /// Create a scanner over any reader (stdin, file, byte slice)
    pub fn from_reader(reader: T) -> Self {
        Scanner {
            reader: BufReader::new(reader),
        }
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        match self.reader.chars().next() {
            Some(Ok(c)) => Ok(Some(c)),
            Some(Err(e)) => Err(TallyError::Io(e)),
            None => Ok(None),
        }
    }

    /// Read the next whitespace-delimited token, or None at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        // Skip the separating whitespace, newlines included
        let first = loop {
            match self.next_char()? {
                Some(c) if c.is_whitespace() => continue,
                Some(c) => break c,
                None => return Ok(None),
            }
        };

        let mut token = String::new();
        token.push(first);
        loop {
            match self.next_char()? {
                Some(c) if c.is_whitespace() => break,
                Some(c) => token.push(c),
                None => break,
            }
        }
        Ok(Some(token))
    }

    /// Read the next token and parse it as a signed integer.
    ///
    /// Fails with [`TallyError::InputExhausted`] when the input ends
    /// first, and with [`TallyError::InvalidNumber`] when the token is
    /// not an integer.
    pub fn next_i64(&mut self) -> Result<i64> {
        let token = self.next_token()?.ok_or(TallyError::InputExhausted)?;
        token
            .parse()
            .map_err(|source| TallyError::InvalidNumber { token, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_split_across_lines() {
        let mut scanner = Scanner::from_reader(Cursor::new("3\n4\n"));
        assert_eq!(scanner.next_token().unwrap(), Some("3".to_string()));
        assert_eq!(scanner.next_token().unwrap(), Some("4".to_string()));
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn test_tokens_on_one_line() {
        let mut scanner = Scanner::from_reader(Cursor::new("12 34"));
        assert_eq!(scanner.next_i64().unwrap(), 12);
        assert_eq!(scanner.next_i64().unwrap(), 34);
    }

    #[test]
    fn test_skips_runs_of_whitespace() {
        let mut scanner = Scanner::from_reader(Cursor::new("  7 \t\t 8\r\n"));
        assert_eq!(scanner.next_i64().unwrap(), 7);
        assert_eq!(scanner.next_i64().unwrap(), 8);
    }

    #[test]
    fn test_parses_negative_numbers() {
        let mut scanner = Scanner::from_reader(Cursor::new("-5 12"));
        assert_eq!(scanner.next_i64().unwrap(), -5);
        assert_eq!(scanner.next_i64().unwrap(), 12);
    }

    #[test]
    fn test_rejects_non_numeric_token() {
        let mut scanner = Scanner::from_reader(Cursor::new("abc"));
        match scanner.next_i64() {
            Err(TallyError::InvalidNumber { token, .. }) => assert_eq!(token, "abc"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_reports_exhausted_input() {
        let mut scanner = Scanner::from_reader(Cursor::new("3"));
        assert_eq!(scanner.next_i64().unwrap(), 3);
        assert!(matches!(
            scanner.next_i64(),
            Err(TallyError::InputExhausted)
        ));
    }
}
