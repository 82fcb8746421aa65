//! Line-oriented HTTP response reading.
//!
//! A [`Response`] wraps the raw response lines exactly as they came off the
//! socket and answers the three questions the probe pipeline asks:
//! - what is the body (the line after the first blank line)?
//! - what is the value of a given header?
//! - what does Content-Length say?
//!
//! There is deliberately no status-code handling or full header map here.
//! Header lookups scan every line, headers and body alike, matching on a
//! case-sensitive `"Name: "` prefix; that is the contract the photo hosts
//! are probed under. Absent separators, absent headers, and unparseable
//! values come back as explicit outcomes, never as panics.

use crate::config::HEADER_CONTENT_LENGTH;
use crate::error::ProbeError;

/// A complete HTTP response, split into lines.
#[derive(Debug, Clone)]
pub struct Response {
    lines: Vec<String>,
}

impl Response {
    /// Wraps response lines as received from the transport.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Returns the body: the single line following the first blank line.
    ///
    /// The listing endpoint serves its JSON as one line, so "the line after
    /// the separator" and "the body" are the same thing there.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::MissingBody` if no blank line exists or no line
    /// follows it.
    pub fn body(&self) -> Result<&str, ProbeError> {
        let separator = self
            .lines
            .iter()
            .position(|line| line.is_empty())
            .ok_or(ProbeError::MissingBody)?;
        self.lines
            .get(separator + 1)
            .map(String::as_str)
            .ok_or(ProbeError::MissingBody)
    }

    /// Returns the value of the first line starting with `"{name}: "`.
    ///
    /// The match is case-sensitive and requires the single space after the
    /// colon; a line that spells the header differently simply doesn't match.
    pub fn header(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}: ");
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
    }

    /// Returns the advertised body size from the Content-Length header.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::MissingHeader` if no Content-Length line exists,
    /// or `ProbeError::InvalidContentLength` if its value is not a
    /// non-negative integer.
    pub fn content_length(&self) -> Result<u64, ProbeError> {
        let value = self.header(HEADER_CONTENT_LENGTH).ok_or(ProbeError::MissingHeader {
            name: HEADER_CONTENT_LENGTH,
        })?;
        value
            .parse()
            .map_err(|source| ProbeError::InvalidContentLength {
                value: value.to_string(),
                source,
            })
    }
}
