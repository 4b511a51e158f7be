//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use stackfold::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use stackfold::prelude::*;
//!
//! let records = parse(
//!     "java.io.IOException: disk full\n\
//!      \tat com.example.Store.write(Store.java:88)\n",
//! )?;
//! assert_eq!(format_to_string(&records).lines().count(), 2);
//! # Ok::<(), ParseError>(())
//! ```

// Macros
pub use crate::frame;

// Operations
pub use crate::chain::{normalize, normalize_with};
pub use crate::classic::{parse, parse_with, render};
pub use crate::compact::{format, format_to_string};

// Types and traits
pub use crate::chain::Throwable;
pub use crate::classic::{ParseError, ParseErrorKind};
pub use crate::classify::FrameClassifier;
pub use crate::compact::{FnSink, LineSink};
pub use crate::types::{ErrorRecord, FrameKind, Line, RawFrame, StackFrame};
