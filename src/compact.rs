//! The compact two-symbol rendering.
//!
//! The classic trace repeats the tail of every stack once per wrapper. This
//! format shows the root cause's stack once, then for each wrapper only the
//! frames that distinguish it: its call path down to where it re-enters code
//! already shown (` + `, the wrap symbol), plus a single bridge frame
//! re-emitted from the shared tail (` | `, the fault symbol) so the re-entry
//! point stays visible.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{format, string::String, vec::Vec};

use crate::types::{common_suffix_len, ErrorRecord, FrameKind, StackFrame};

const FAULT: &str = " | ";
const WRAP: &str = " + ";
const WRAPPED_BY: &str = "Wrapped by: ";

/// Receives rendered lines one at a time, in emission order.
///
/// Sinks are infallible; a sink that forwards to fallible I/O owns that
/// concern. A header line carrying a multi-line message is delivered in a
/// single call, embedded newlines intact.
pub trait LineSink {
    fn accept(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn accept(&mut self, line: &str) {
        self.push(String::from(line));
    }
}

/// Adapter turning a closure into a [`LineSink`], for feeding lines straight
/// into a logger call.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str)> LineSink for FnSink<F> {
    fn accept(&mut self, line: &str) {
        (self.0)(line);
    }
}

/// Emits the compact rendering of `records` (innermost first) into `sink`.
///
/// Total over any well-formed record slice: absent and duplicate messages,
/// identical type-and-message wrapper/cause pairs, empty stacks, and empty
/// shared suffixes are all rendering cases, never errors. An empty slice
/// emits nothing.
///
/// # Examples
///
/// ```
/// use stackfold::types::{ErrorRecord, Line, StackFrame};
///
/// let io = |line| StackFrame::new("com.example.Store", "write", Some("Store.java".into()), Line::Number(line));
/// let records = [
///     ErrorRecord::new("java.io.IOException", Some("disk full".into()), [io(88)]),
///     ErrorRecord::new("java.lang.RuntimeException", None, [io(88)]),
/// ];
///
/// let mut lines: Vec<String> = Vec::new();
/// stackfold::compact::format(&records, &mut lines);
/// assert_eq!(
///     lines,
///     [
///         "java.io.IOException: disk full",
///         " | com.example.Store.write(88)",
///         "Wrapped by: java.lang.RuntimeException",
///         " | com.example.Store.write(88)",
///     ],
/// );
/// ```
pub fn format<S: LineSink + ?Sized>(records: &[ErrorRecord], sink: &mut S) {
    let Some(first) = records.first() else {
        return;
    };

    sink.accept(&first.headline());
    for frame in first.frames() {
        emit(sink, FAULT, frame);
    }

    for pair in records.windows(2) {
        let (prev, wrapper) = (&pair[0], &pair[1]);
        let frames = wrapper.frames();
        let shared = common_suffix_len(prev.frames(), frames);

        sink.accept(&separator(wrapper, prev));
        let boundary = frames.len() - shared;
        for frame in &frames[..boundary] {
            emit(sink, WRAP, frame);
        }
        if shared > 0 {
            emit(sink, FAULT, &frames[bridge_index(frames, boundary)]);
        }
    }
}

/// Compact rendering as a single newline-joined string.
#[must_use]
pub fn format_to_string(records: &[ErrorRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();
    format(records, &mut lines);
    lines.join("\n")
}

/// `Wrapped by:` separator. The wrapper's message is omitted when absent or
/// when it repeats the previous record's headline verbatim; the cause
/// already said it.
fn separator(wrapper: &ErrorRecord, prev: &ErrorRecord) -> String {
    match wrapper.message() {
        Some(message) if message != prev.headline() => {
            format!("{}{}: {}", WRAPPED_BY, wrapper.type_name(), message)
        }
        _ => format!("{}{}", WRAPPED_BY, wrapper.type_name()),
    }
}

fn emit<S: LineSink + ?Sized>(sink: &mut S, marker: &str, frame: &StackFrame) {
    let line = match frame.kind() {
        FrameKind::ProxyDispatch => format!("{}[proxy].{}", marker, frame.method_name()),
        _ => format!(
            "{}{}.{}({})",
            marker,
            frame.declaring_type(),
            frame.method_name(),
            Location(frame),
        ),
    };
    sink.accept(&line);
}

/// The bridge is the first shared-suffix frame, except that a consecutive
/// run of reflective-dispatch frames collapses to its outermost member, the
/// `Method.invoke`-equivalent the caller actually sees. The internals below
/// it drop silently.
fn bridge_index(frames: &[StackFrame], boundary: usize) -> usize {
    let mut idx = boundary;
    while frames[idx].kind() == FrameKind::ReflectiveDispatch
        && frames
            .get(idx + 1)
            .is_some_and(|f| f.kind() == FrameKind::ReflectiveDispatch)
    {
        idx += 1;
    }
    idx
}

/// Compact location: just the line number; sentinels reuse the classic
/// vocabulary.
struct Location<'a>(&'a StackFrame);

impl core::fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0.line() {
            crate::types::Line::Number(n) => write!(f, "{}", n),
            crate::types::Line::Native => f.write_str("Native Method"),
            crate::types::Line::Unknown => f.write_str("Unknown Source"),
        }
    }
}
