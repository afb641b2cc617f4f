//! Low-level token scanning shared by the line parsers.

use std::str::FromStr;

/// Whitespace-delimited reader over a single line.
///
/// Codes are read one character at a time, so `B1234` yields the code `B`
/// followed by the token `1234`. Numbers must occupy a whole token.
pub(crate) struct Scanner<'a> {
  rest: &'a str,
}

impl<'a> Scanner<'a> {
  pub(crate) fn new(input: &'a str) -> Self { Self { rest: input } }

  /// The next non-whitespace character.
  pub(crate) fn next_char(&mut self) -> Option<char> {
    self.rest = self.rest.trim_start();
    let c = self.rest.chars().next()?;
    self.rest = &self.rest[c.len_utf8()..];
    Some(c)
  }

  /// The next run of non-whitespace characters.
  pub(crate) fn next_token(&mut self) -> Option<&'a str> {
    self.rest = self.rest.trim_start();
    if self.rest.is_empty() {
      return None;
    }
    let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
    let (token, rest) = self.rest.split_at(end);
    self.rest = rest;
    Some(token)
  }

  /// The next token, parsed as a whole. `None` when the line is exhausted or
  /// the token does not parse; in the latter case the token is consumed.
  pub(crate) fn next_parsed<T: FromStr>(&mut self) -> Option<T> {
    self.next_token()?.parse().ok()
  }

  /// Whatever has not been consumed yet, trimmed.
  pub(crate) fn rest(&self) -> &'a str { self.rest.trim() }
}

/// Trim `s`, then drop one trailing comma and trim again.
pub(crate) fn trim_trailing_comma(s: &str) -> &str {
  let s = s.trim();
  s.strip_suffix(',').unwrap_or(s).trim()
}
