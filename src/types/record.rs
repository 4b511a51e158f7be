//! A single error record: type name, message, captured call stack.

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};
#[cfg(feature = "std")]
use std::string::{String, ToString};

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{FrameVec, StackFrame};

/// One error in a chain: its type, optional message, and call stack.
///
/// Record sequences produced by [`normalize`](crate::chain::normalize) and
/// [`parse`](crate::classic::parse) are ordered innermost first: the root
/// cause at index 0, each wrapper after the record it wraps.
///
/// Records are immutable values with no identity beyond their fields: two
/// records with identical fields compare equal even when they originate from
/// different chain traversals.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    type_name: String,
    message: Option<String>,
    frames: FrameVec,
}

impl ErrorRecord {
    #[inline]
    pub fn new<T, F>(type_name: T, message: Option<String>, frames: F) -> Self
    where
        T: Into<String>,
        F: IntoIterator<Item = StackFrame>,
    {
        Self {
            type_name: type_name.into(),
            message,
            frames: frames.into_iter().collect(),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The message, possibly spanning multiple lines. Preserved verbatim.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Frames, deepest first.
    #[inline]
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// The first line of both textual formats: `"<type>: <message>"`, or the
    /// bare type name when there is no message.
    ///
    /// This string is also the comparand for duplicate-message suppression in
    /// the compact format: a wrapper whose message equals its cause's
    /// headline repeats nothing and is rendered without a message.
    #[must_use]
    pub fn headline(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", self.type_name, message),
            None => self.type_name.to_string(),
        }
    }

    /// Structural equivalence modulo what the classic rendering loses.
    ///
    /// Same type, message, and frame count, with frames compared through
    /// [`StackFrame::equivalent`], so a record that went through
    /// [`render`](crate::classic::render) and [`parse`](crate::classic::parse)
    /// still matches its original despite native-method frames dropping their
    /// file names.
    pub fn equivalent(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.message == other.message
            && self.frames.len() == other.frames.len()
            && self
                .frames
                .iter()
                .zip(other.frames.iter())
                .all(|(a, b)| a.equivalent(b))
    }
}

impl Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline())
    }
}
