//! Walking a host throwable graph into the canonical record sequence.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use smallvec::SmallVec;

use crate::classify::FrameClassifier;
use crate::types::{ErrorRecord, RawFrame};

/// Read-only view of one node in a host exception graph.
///
/// The normalizer follows two relations: [`cause`](Throwable::cause), the
/// ordinary wrapper-wraps-cause nesting, and [`next`](Throwable::next), the
/// sibling linkage some checked-exception families use to chain errors that
/// are not causally nested (a database driver reporting several failures at
/// once, for example). Both default to `None`, so a minimal implementor only
/// supplies a type name and frames.
///
/// # Examples
///
/// ```
/// use stackfold::{frame, normalize, RawFrame, Throwable};
///
/// struct Plain {
///     frames: Vec<RawFrame>,
/// }
///
/// impl Throwable for Plain {
///     fn type_name(&self) -> &str {
///         "com.example.PlainException"
///     }
///     fn message(&self) -> Option<&str> {
///         Some("boom")
///     }
///     fn frames(&self) -> &[RawFrame] {
///         &self.frames
///     }
/// }
///
/// let records = normalize(&Plain {
///     frames: vec![frame!("com.example.Service", "call", "Service.java", 42)],
/// });
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].headline(), "com.example.PlainException: boom");
/// ```
pub trait Throwable {
    fn type_name(&self) -> &str;

    fn message(&self) -> Option<&str> {
        None
    }

    fn frames(&self) -> &[RawFrame];

    /// The causally-nested error this one wraps.
    fn cause(&self) -> Option<&dyn Throwable> {
        None
    }

    /// Sibling error chained after this one without being causally nested.
    fn next(&self) -> Option<&dyn Throwable> {
        None
    }
}

/// Flattens a throwable graph into records ordered innermost first, using
/// the default classification tables.
pub fn normalize(root: &dyn Throwable) -> Vec<ErrorRecord> {
    normalize_with(root, &FrameClassifier::default())
}

/// Flattens a throwable graph into records ordered innermost first.
///
/// The cause chain is traversed to the terminal cause, which becomes record
/// 0; each wrapper follows the record it wraps. A node's `next` siblings are
/// inserted immediately after their origin, in encounter order, as flat
/// records rather than wrappers. Every host frame maps 1:1 to a
/// [`StackFrame`](crate::types::StackFrame); classification happens here,
/// suppression is left to the formatter.
///
/// Cyclic or self-referential graphs terminate: a node already visited (by
/// identity) is treated as the end of its branch.
pub fn normalize_with(root: &dyn Throwable, classifier: &FrameClassifier) -> Vec<ErrorRecord> {
    let mut seen: SmallVec<[*const (); 8]> = SmallVec::new();
    let mut records = Vec::new();
    visit(root, classifier, &mut seen, &mut records);
    #[cfg(feature = "tracing")]
    tracing::trace!(records = records.len(), "normalized throwable chain");
    records
}

fn visit(
    node: &dyn Throwable,
    classifier: &FrameClassifier,
    seen: &mut SmallVec<[*const (); 8]>,
    out: &mut Vec<ErrorRecord>,
) {
    let identity = node as *const dyn Throwable as *const ();
    if seen.contains(&identity) {
        return;
    }
    seen.push(identity);

    if let Some(cause) = node.cause() {
        visit(cause, classifier, seen, out);
    }
    out.push(ErrorRecord::new(
        node.type_name(),
        node.message().map(String::from),
        node.frames().iter().map(|raw| classifier.frame(raw)),
    ));
    if let Some(next) = node.next() {
        visit(next, classifier, seen, out);
    }
}
