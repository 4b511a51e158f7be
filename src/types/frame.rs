//! Value types for a single call-stack entry.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::FrameClassifier;

/// Host-side line-number sentinel for a frame executing native code.
pub const NATIVE_METHOD_LINE: i32 = -2;

/// Host-side line-number sentinel for a frame with no recorded line.
pub const UNKNOWN_LINE: i32 = -1;

/// Source position of a frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Line number in the declaring source file.
    Number(u32),
    /// The frame executes native code. The classic rendering prints
    /// `Native Method` here and drops the file name.
    Native,
    /// No line (and usually no file) information was recorded; the classic
    /// rendering prints `Unknown Source`.
    Unknown,
}

impl Line {
    /// Converts a host sentinel integer (`-2` native, any other negative
    /// value unknown) into a [`Line`].
    #[inline]
    pub fn from_raw(line_number: i32) -> Self {
        if line_number >= 0 {
            Self::Number(line_number as u32)
        } else if line_number == NATIVE_METHOD_LINE {
            Self::Native
        } else {
            Self::Unknown
        }
    }

    /// Whether this is a real source line rather than a sentinel.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Classification tag assigned once when a frame enters the canonical model.
///
/// Rendering and elision switch on this tag; nothing re-inspects frame text
/// after classification.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Ordinary,
    NativeMethod,
    /// Generated dynamic-proxy dispatch; rendered compactly as
    /// `[proxy].<method>` with no location.
    ProxyDispatch,
    /// Reflection machinery sitting between a call site and its target.
    ReflectiveDispatch,
}

/// A call-stack entry as captured by the host runtime, before
/// classification.
///
/// This is the currency of the [`Throwable`](crate::chain::Throwable) trait:
/// hosts hand these to the normalizer, which maps each one to a
/// [`StackFrame`]. `line_number` uses the host sentinel convention
/// ([`NATIVE_METHOD_LINE`], [`UNKNOWN_LINE`]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub declaring_type: String,
    pub method_name: String,
    pub file_name: Option<String>,
    pub line_number: i32,
}

impl RawFrame {
    #[inline]
    pub fn new<T, M>(
        declaring_type: T,
        method_name: M,
        file_name: Option<String>,
        line_number: i32,
    ) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Self {
            declaring_type: declaring_type.into(),
            method_name: method_name.into(),
            file_name,
            line_number,
        }
    }
}

/// A single canonical call-stack entry.
///
/// Within a record, index 0 is the deepest (most specific) frame, matching
/// the host runtime's native ordering.
///
/// Equality is purely structural over the four data fields: declaring type,
/// method name, file name, line. The [`FrameKind`] tag is derived metadata
/// and does not participate, so frames classified under different
/// [`FrameClassifier`] tables still compare by content.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Eq)]
pub struct StackFrame {
    declaring_type: String,
    method_name: String,
    file_name: Option<String>,
    line: Line,
    kind: FrameKind,
}

impl StackFrame {
    /// Builds a frame, classifying it with the default tables.
    ///
    /// Use [`StackFrame::classified`] when a custom [`FrameClassifier`] is in
    /// play.
    #[inline]
    pub fn new<T, M>(declaring_type: T, method_name: M, file_name: Option<String>, line: Line) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Self::classified(
            declaring_type,
            method_name,
            file_name,
            line,
            &FrameClassifier::default(),
        )
    }

    /// Builds a frame classified by the given tables.
    pub fn classified<T, M>(
        declaring_type: T,
        method_name: M,
        file_name: Option<String>,
        line: Line,
        classifier: &FrameClassifier,
    ) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        let declaring_type = declaring_type.into();
        let method_name = method_name.into();
        let kind = classifier.classify(&declaring_type, &method_name, line);
        Self {
            declaring_type,
            method_name,
            file_name,
            line,
            kind,
        }
    }

    #[inline]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    #[inline]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    #[inline]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[inline]
    pub fn line(&self) -> Line {
        self.line
    }

    #[inline]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Classic-rendering-tolerant comparison.
    ///
    /// The file name is only compared when the line is a real number, since
    /// `Native Method` and `Unknown Source` locations lose the file name in
    /// the classic format.
    pub fn equivalent(&self, other: &Self) -> bool {
        self.declaring_type == other.declaring_type
            && self.method_name == other.method_name
            && self.line == other.line
            && (!self.line.is_number() || self.file_name == other.file_name)
    }
}

impl PartialEq for StackFrame {
    fn eq(&self, other: &Self) -> bool {
        self.declaring_type == other.declaring_type
            && self.method_name == other.method_name
            && self.file_name == other.file_name
            && self.line == other.line
    }
}

/// Renders the classic frame form: `<type>.<method>(<location>)`.
impl Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.declaring_type, self.method_name)?;
        match (&self.file_name, self.line) {
            (_, Line::Native) => f.write_str("Native Method")?,
            (Some(file), Line::Number(n)) => write!(f, "{}:{}", file, n)?,
            (Some(file), Line::Unknown) => f.write_str(file)?,
            (None, _) => f.write_str("Unknown Source")?,
        }
        f.write_str(")")
    }
}

/// Length of the maximal trailing run of frame-equal entries shared by two
/// stacks.
pub fn common_suffix_len(a: &[StackFrame], b: &[StackFrame]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}
