//! The classic textual rendering: parser and renderer.
//!
//! The classic format is the verbose one a host runtime's own trace printer
//! produces: the outermost error first with its full stack, each cause
//! introduced by `Caused by: ` with the frames it shares with its enclosing
//! record elided behind `... N more`, and runtime-specific conventions
//! (nested-throwable sections, `Suppressed: ` blocks) appended as further
//! records.
//!
//! Line grammar:
//!
//! - record header: `<type>[: <message>]`; message continuation lines run
//!   until the first frame line and are preserved verbatim;
//! - frame: leading whitespace + `at <type>.<method>(<location>)` where the
//!   location is `<file>:<line>`, `<file>`, `Native Method`, or
//!   `Unknown Source`;
//! - suppression marker: `... N more`;
//! - chain markers: `Caused by: `, `Suppressed: `, and `---- Begin
//!   backtrace` section banners.
//!
//! Parsing is two-phase: a lexer pass cuts the text into raw blocks, then a
//! resolution pass copies suppressed frame suffixes from each block's
//! adjacent enclosing record and reverses each causal section into the
//! canonical innermost-first order.

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use core::fmt::{self, Display};

use crate::classify::FrameClassifier;
use crate::types::{common_suffix_len, ErrorRecord, Line, StackFrame};

const CAUSED_BY: &str = "Caused by: ";
const SUPPRESSED: &str = "Suppressed: ";
const SECTION_MARKER: &str = "---- Begin backtrace";
const FRAME_PREFIX: &str = "at ";
const NATIVE_LOCATION: &str = "Native Method";
const UNKNOWN_LOCATION: &str = "Unknown Source";

/// Failure to match the classic grammar, carrying the 1-based line number
/// and the offending text. No partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    line_number: usize,
    line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A record header was expected at this position.
    HeaderExpected,
    /// A frame line did not match `at <type>.<method>(<location>)`.
    MalformedFrame,
    /// A frame location carried a non-numeric line number.
    InvalidLineNumber,
    /// A `... N more` marker claimed more frames than the adjacent record
    /// has.
    SuppressedCountMismatch { claimed: usize, available: usize },
}

impl ParseError {
    fn new<L: Into<String>>(kind: ParseErrorKind, line_number: usize, line: L) -> Self {
        Self {
            kind,
            line_number,
            line: line.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// 1-based line number of the offending line.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The offending line, verbatim.
    #[inline]
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::HeaderExpected => {
                write!(
                    f,
                    "line {}: expected a record header, found {:?}",
                    self.line_number, self.line
                )
            }
            ParseErrorKind::MalformedFrame => {
                write!(
                    f,
                    "line {}: malformed frame line {:?}",
                    self.line_number, self.line
                )
            }
            ParseErrorKind::InvalidLineNumber => {
                write!(
                    f,
                    "line {}: non-numeric line number in {:?}",
                    self.line_number, self.line
                )
            }
            ParseErrorKind::SuppressedCountMismatch { claimed, available } => {
                write!(
                    f,
                    "line {}: `... {} more` exceeds the {} frame(s) available in the adjacent record",
                    self.line_number, claimed, available
                )
            }
        }
    }
}

impl core::error::Error for ParseError {}

/// Parses a classic trace into records ordered innermost first, using the
/// default classification tables.
///
/// # Examples
///
/// ```
/// let text = "java.lang.RuntimeException: wrapper\n\
///             \tat com.example.Service.call(Service.java:42)\n\
///             Caused by: java.io.IOException: disk full\n\
///             \tat com.example.Store.write(Store.java:88)\n\
///             \t... 1 more\n";
///
/// let records = stackfold::classic::parse(text)?;
/// assert_eq!(records[0].headline(), "java.io.IOException: disk full");
/// assert_eq!(records[0].frames().len(), 2);
/// assert_eq!(records[1].headline(), "java.lang.RuntimeException: wrapper");
/// # Ok::<(), stackfold::ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<Vec<ErrorRecord>, ParseError> {
    parse_with(text, &FrameClassifier::default())
}

/// Parses a classic trace into records ordered innermost first.
///
/// Tolerates absent and multi-line messages, zero-frame records, `\r\n` line
/// endings, and arbitrarily long chains. Fails with [`ParseError`] where a
/// header or frame is expected but the text matches neither, and when a
/// `... N more` count exceeds the frames available in the adjacent record.
pub fn parse_with(
    text: &str,
    classifier: &FrameClassifier,
) -> Result<Vec<ErrorRecord>, ParseError> {
    let blocks = scan(text, classifier)?;
    if blocks.is_empty() {
        return Err(ParseError::new(ParseErrorKind::HeaderExpected, 1, ""));
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(blocks = blocks.len(), "lexed classic trace");
    resolve(blocks)
}

/// Renders records (innermost first) as classic trace text, treating the
/// sequence as a single caused-by chain: outermost record first, each cause
/// behind `Caused by: `, and the frames a cause shares with its enclosing
/// record elided behind `... N more`. Native-method frames print
/// `(Native Method)` and lose their file name, which is exactly the loss
/// [`ErrorRecord::equivalent`] tolerates.
#[must_use]
pub fn render(records: &[ErrorRecord]) -> String {
    let mut out = String::new();
    let mut enclosing: Option<&ErrorRecord> = None;
    for record in records.iter().rev() {
        if enclosing.is_some() {
            out.push_str(CAUSED_BY);
        }
        out.push_str(&record.headline());
        out.push('\n');

        let frames = record.frames();
        let shared = enclosing.map_or(0, |e| common_suffix_len(e.frames(), frames));
        for frame in &frames[..frames.len() - shared] {
            out.push_str("\tat ");
            out.push_str(&frame.to_string());
            out.push('\n');
        }
        if shared > 0 {
            out.push_str(&format!("\t... {} more\n", shared));
        }
        enclosing = Some(record);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Root,
    CausedBy,
    /// Nested-throwable section, `Suppressed: ` block, or a fresh header
    /// after a completed trace. A new causal section either way.
    Sibling,
}

struct Elided {
    count: usize,
    line_number: usize,
    line: String,
}

struct Block {
    origin: Origin,
    type_name: String,
    message: Option<String>,
    frames: Vec<StackFrame>,
    elided: Option<Elided>,
}

impl Block {
    fn open(origin: Origin, header: &str) -> Self {
        let (type_name, message) = match header.split_once(": ") {
            Some((type_name, message)) => (String::from(type_name), Some(String::from(message))),
            None => (String::from(header), None),
        };
        Self {
            origin,
            type_name,
            message,
            frames: Vec::new(),
            elided: None,
        }
    }

    /// Still collecting header/message lines; no frame or marker seen yet.
    fn in_message(&self) -> bool {
        self.frames.is_empty() && self.elided.is_none()
    }

    fn append_message(&mut self, line: &str) {
        match &mut self.message {
            Some(message) => {
                message.push('\n');
                message.push_str(line);
            }
            None => self.message = Some(String::from(line)),
        }
    }
}

fn scan(text: &str, classifier: &FrameClassifier) -> Result<Vec<Block>, ParseError> {
    let mut blocks: Vec<Block> = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim_start();
        let indented = trimmed.len() != line.len();

        if trimmed.starts_with(SECTION_MARKER) {
            continue;
        }
        if let Some(header) = trimmed.strip_prefix(CAUSED_BY) {
            blocks.push(Block::open(Origin::CausedBy, header));
            continue;
        }
        if let Some(header) = trimmed.strip_prefix(SUPPRESSED) {
            blocks.push(Block::open(Origin::Sibling, header));
            continue;
        }

        if trimmed.is_empty() {
            // Blank separator between traces; inside a message it is content.
            if let Some(block) = blocks.last_mut() {
                if block.in_message() {
                    block.append_message(line);
                }
            }
            continue;
        }

        if let Some(count) = suppressed_count(trimmed) {
            match blocks.last_mut() {
                Some(block) if block.elided.is_none() => {
                    block.elided = Some(Elided {
                        count,
                        line_number: number,
                        line: String::from(line),
                    });
                }
                _ => {
                    return Err(ParseError::new(ParseErrorKind::HeaderExpected, number, line))
                }
            }
            continue;
        }

        if indented && trimmed.starts_with(FRAME_PREFIX) {
            let body = &trimmed[FRAME_PREFIX.len()..];
            match blocks.last_mut() {
                Some(block) if block.elided.is_none() => match frame(classifier, body) {
                    Ok(parsed) => block.frames.push(parsed),
                    // Before the first frame this can still be message text.
                    Err(_) if block.in_message() => block.append_message(line),
                    Err(kind) => return Err(ParseError::new(kind, number, line)),
                },
                _ => {
                    return Err(ParseError::new(ParseErrorKind::HeaderExpected, number, line))
                }
            }
            continue;
        }

        match blocks.last_mut() {
            Some(block) if block.in_message() => block.append_message(line),
            Some(_) => blocks.push(Block::open(Origin::Sibling, line)),
            None => blocks.push(Block::open(Origin::Root, line)),
        }
    }
    Ok(blocks)
}

fn suppressed_count(trimmed: &str) -> Option<usize> {
    trimmed
        .strip_prefix("... ")?
        .strip_suffix(" more")?
        .parse()
        .ok()
}

fn frame(classifier: &FrameClassifier, body: &str) -> Result<StackFrame, ParseErrorKind> {
    let call_and_location = body
        .strip_suffix(')')
        .ok_or(ParseErrorKind::MalformedFrame)?;
    let (call, location) = call_and_location
        .rsplit_once('(')
        .ok_or(ParseErrorKind::MalformedFrame)?;
    let (declaring_type, method_name) =
        call.rsplit_once('.').ok_or(ParseErrorKind::MalformedFrame)?;

    let (file_name, line) = match location {
        NATIVE_LOCATION => (None, Line::Native),
        UNKNOWN_LOCATION => (None, Line::Unknown),
        _ => match location.rsplit_once(':') {
            Some((file, digits)) => {
                let number = digits
                    .parse::<u32>()
                    .map_err(|_| ParseErrorKind::InvalidLineNumber)?;
                (Some(String::from(file)), Line::Number(number))
            }
            None => (Some(String::from(location)), Line::Unknown),
        },
    };
    Ok(StackFrame::classified(
        declaring_type,
        method_name,
        file_name,
        line,
        classifier,
    ))
}

/// Second pass: suppressed suffixes copy from the adjacent enclosing record
/// (the block lexed immediately before), then each causal section reverses
/// into innermost-first order. Sections stay in encounter order.
fn resolve(blocks: Vec<Block>) -> Result<Vec<ErrorRecord>, ParseError> {
    let mut records: Vec<ErrorRecord> = Vec::with_capacity(blocks.len());
    let mut starts: Vec<usize> = Vec::new();

    for block in blocks {
        if block.origin != Origin::CausedBy || records.is_empty() {
            starts.push(records.len());
        }
        let Block {
            type_name,
            message,
            mut frames,
            elided,
            ..
        } = block;
        if let Some(elided) = elided {
            let donor: &[StackFrame] = match records.last() {
                Some(record) => record.frames(),
                None => &[],
            };
            let available = donor.len();
            if elided.count > available {
                return Err(ParseError::new(
                    ParseErrorKind::SuppressedCountMismatch {
                        claimed: elided.count,
                        available,
                    },
                    elided.line_number,
                    elided.line,
                ));
            }
            frames.extend_from_slice(&donor[available - elided.count..]);
        }
        records.push(ErrorRecord::new(type_name, message, frames));
    }

    starts.push(records.len());
    for bounds in starts.windows(2) {
        records[bounds[0]..bounds[1]].reverse();
    }
    Ok(records)
}
