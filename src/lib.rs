//! Lossless two-way codec between classic throwable stack traces and a
//! compact deduplicated rendering.
//!
//! An exception chain is a causally-linked sequence of error records, each
//! carrying a message and a call-stack snapshot. The classic textual
//! rendering repeats most of the stack once per wrapper; this crate
//! normalizes a host chain into a canonical record sequence, renders it
//! compactly by folding the repeated frame suffixes away, and parses classic
//! text back into the same canonical form.
//!
//! - [`chain`] walks a host throwable graph (caused-by links plus the
//!   non-causal "next" sibling convention) into records ordered innermost
//!   first, handling cycles.
//! - [`compact`] renders records with the two-symbol annotation: ` | ` marks
//!   frames belonging to the original fault, ` + ` marks the wrapping call
//!   path, reflective dispatch noise is folded down to its entry point, and
//!   dynamic-proxy frames read as `[proxy].<method>`.
//! - [`classic`] parses the verbose `Caused by:` / `... N more` format back
//!   into records, and renders it for round trips.
//! - [`classify`] holds the pattern tables deciding which frames count as
//!   dispatch machinery.
//!
//! # Examples
//!
//! ```
//! use stackfold::{classic, compact};
//!
//! let text = "java.lang.RuntimeException: wrapper\n\
//!             \tat com.example.Service.call(Service.java:42)\n\
//!             \tat com.example.Main.run(Main.java:7)\n\
//!             Caused by: java.io.IOException: disk full\n\
//!             \tat com.example.Store.write(Store.java:88)\n\
//!             \tat com.example.Service.call(Service.java:40)\n\
//!             \tat com.example.Main.run(Main.java:7)\n";
//!
//! let records = classic::parse(text)?;
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].type_name(), "java.io.IOException");
//!
//! let mut lines: Vec<String> = Vec::new();
//! compact::format(&records, &mut lines);
//! assert_eq!(
//!     lines,
//!     [
//!         "java.io.IOException: disk full",
//!         " | com.example.Store.write(88)",
//!         " | com.example.Service.call(40)",
//!         " | com.example.Main.run(7)",
//!         "Wrapped by: java.lang.RuntimeException: wrapper",
//!         " + com.example.Service.call(42)",
//!         " | com.example.Main.run(7)",
//!     ],
//! );
//! # Ok::<(), stackfold::ParseError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Chain normalization: host throwable graph to canonical records
pub mod chain;
/// Classic format: parser and renderer
pub mod classic;
/// Frame classification tables
pub mod classify;
/// Compact two-symbol rendering
pub mod compact;
/// Construction shorthand
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Frame and record value types
pub mod types;

pub use chain::{normalize, normalize_with, Throwable};
pub use classic::{parse, parse_with, render, ParseError, ParseErrorKind};
pub use classify::FrameClassifier;
pub use compact::{format, format_to_string, FnSink, LineSink};
pub use types::{ErrorRecord, FrameKind, Line, RawFrame, StackFrame};
