//! Value types for frames and error records.
//!
//! # Examples
//!
//! ```
//! use stackfold::types::{ErrorRecord, Line, StackFrame};
//!
//! let record = ErrorRecord::new(
//!     "java.io.IOException",
//!     Some("disk full".into()),
//!     [StackFrame::new(
//!         "com.example.Store",
//!         "write",
//!         Some("Store.java".into()),
//!         Line::Number(88),
//!     )],
//! );
//!
//! assert_eq!(record.headline(), "java.io.IOException: disk full");
//! ```
use smallvec::SmallVec;

pub mod frame;
pub mod record;

pub use frame::{
    common_suffix_len, FrameKind, Line, RawFrame, StackFrame, NATIVE_METHOD_LINE, UNKNOWN_LINE,
};
pub use record::ErrorRecord;

/// SmallVec-backed frame list; shallow stacks stay inline.
pub type FrameVec = SmallVec<[StackFrame; 4]>;
