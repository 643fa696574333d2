//! Reading emitted array literals back into bytes.
//!
//! The parser accepts exactly the layout written by `hxx_resources_encode::write_literal`:
//! a `const unsigned char <name>[] = {` header, lines of `0x??,` entries interleaved with `// <offset>` comments, and a `\n};\n` terminator.

use crate::common::{ENTRY_PREFIX, HEADER_PREFIX, HEADER_SUFFIX, MARKER_PREFIX, TERMINATOR};

/// Contents of an emitted literal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    /// Name of the declared array
    pub identifier: smartstring::SmartString<smartstring::LazyCompact>,
    /// Array entries in order
    pub bytes: std::vec::Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not start with a `const unsigned char <name>[] = {` declaration
    MissingHeader,
    /// The text does not end with `\n};\n`
    MissingTerminator,
    /// Something other than a `0x??,` entry where entries were expected
    InvalidEntry { line: usize, entry: String },
    /// An offset comment that doesn't match the number of preceding entries
    MarkerMismatch { line: usize, expected: usize, found: String },
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ParseError::MissingHeader => write!(f, "missing `{HEADER_PREFIX}<name>{HEADER_SUFFIX}` declaration"),
            ParseError::MissingTerminator => write!(f, "literal is not terminated by `}};`"),
            ParseError::InvalidEntry { line, entry } => write!(f, "line {line}: invalid entry '{entry}'"),
            ParseError::MarkerMismatch { line, expected, found } => {
                write!(f, "line {line}: offset comment says {found}, but {expected} entries precede it")
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_entry(entry: &str) -> Option<u8> {
    let digits = entry.strip_prefix(ENTRY_PREFIX)?;
    // lowercase only, like the encoder writes them
    if digits.len() != 2 || !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Parse the text of an emitted literal.
pub fn parse_literal(text: &str) -> Result<Literal, ParseError> {
    let rest = text.strip_prefix(HEADER_PREFIX).ok_or(ParseError::MissingHeader)?;
    let (identifier, rest) = rest.split_once(HEADER_SUFFIX).ok_or(ParseError::MissingHeader)?;
    if identifier.is_empty() || identifier.contains(char::is_whitespace) {
        return Err(ParseError::MissingHeader);
    }
    let body = rest.strip_suffix(TERMINATOR).ok_or(ParseError::MissingTerminator)?;

    let mut bytes = vec![];
    // the first segment is the remainder of the header line
    for (line, segment) in body.split('\n').enumerate().map(|(i, s)| (i + 1, s)) {
        if segment.is_empty() {
            continue;
        }
        if let Some(offset) = segment.strip_prefix(MARKER_PREFIX) {
            if offset.parse::<usize>() != Ok(bytes.len()) {
                return Err(ParseError::MarkerMismatch {
                    line,
                    expected: bytes.len(),
                    found: offset.to_owned(),
                });
            }
            continue;
        }
        let entries = segment.strip_suffix(',').ok_or_else(|| ParseError::InvalidEntry {
            line,
            entry: segment.to_owned(),
        })?;
        for entry in entries.split(',') {
            let byte = parse_entry(entry).ok_or_else(|| ParseError::InvalidEntry {
                line,
                entry: entry.to_owned(),
            })?;
            bytes.push(byte);
        }
    }

    Ok(Literal {
        identifier: identifier.into(),
        bytes,
    })
}
