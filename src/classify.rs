//! Frame classification: deciding which stack entries are dispatch noise.
//!
//! The compact format suppresses reflection internals and rewrites
//! dynamic-proxy frames, and both rules depend on recognizing runtime
//! machinery by name. Those names are configuration, not code: a host whose
//! runtime lays its dispatch frames out differently overrides the tables
//! here instead of patching the formatter.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use crate::types::{FrameKind, Line, RawFrame, StackFrame};

/// Dispatch internals the default tables treat as reflective, by exact
/// declaring-type match.
const REFLECTIVE_TYPES: &[&str] = &[
    "sun.reflect.NativeMethodAccessorImpl",
    "sun.reflect.DelegatingMethodAccessorImpl",
    "jdk.internal.reflect.NativeMethodAccessorImpl",
    "jdk.internal.reflect.DelegatingMethodAccessorImpl",
    "jdk.internal.reflect.DirectMethodHandleAccessor",
];

/// Generated accessor classes carry a numeric suffix, so they match by
/// prefix.
const REFLECTIVE_PREFIXES: &[&str] = &[
    "sun.reflect.GeneratedMethodAccessor",
    "jdk.internal.reflect.GeneratedMethodAccessor",
];

/// Entry points of the reflection machinery, as (type, method) pairs. These
/// are the frames worth keeping as the dispatch boundary when the internals
/// below them are elided.
const REFLECTIVE_ENTRY_POINTS: &[(&str, &str)] = &[
    ("java.lang.reflect.Method", "invoke"),
    ("java.lang.reflect.Constructor", "newInstance"),
];

/// Generated proxy classes: the final `.`-separated segment of the declaring
/// type starts with this.
const PROXY_MARKERS: &[&str] = &["$Proxy"];

/// Pattern tables mapping raw frames to [`FrameKind`] tags.
///
/// The fields are plain data so the tables can be inspected, extended, or
/// replaced wholesale. [`FrameClassifier::default`] covers the JVM's
/// reflection and proxy machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameClassifier {
    /// Declaring types that are reflective dispatch internals (exact match).
    pub reflective_types: Vec<String>,
    /// Declaring-type prefixes for generated reflective accessors.
    pub reflective_prefixes: Vec<String>,
    /// `(declaring_type, method_name)` pairs forming the visible entry point
    /// of a reflective dispatch.
    pub reflective_entry_points: Vec<(String, String)>,
    /// Prefixes of the final `.`-separated type segment that identify
    /// generated proxy classes.
    pub proxy_markers: Vec<String>,
}

impl Default for FrameClassifier {
    fn default() -> Self {
        Self::jvm()
    }
}

impl FrameClassifier {
    /// Tables matching the JVM's reflection and dynamic-proxy machinery.
    pub fn jvm() -> Self {
        Self {
            reflective_types: REFLECTIVE_TYPES.iter().map(|s| String::from(*s)).collect(),
            reflective_prefixes: REFLECTIVE_PREFIXES
                .iter()
                .map(|s| String::from(*s))
                .collect(),
            reflective_entry_points: REFLECTIVE_ENTRY_POINTS
                .iter()
                .map(|(t, m)| (String::from(*t), String::from(*m)))
                .collect(),
            proxy_markers: PROXY_MARKERS.iter().map(|s| String::from(*s)).collect(),
        }
    }

    /// Tags a frame. Proxy dispatch wins over reflective dispatch, which
    /// wins over the native-method tag.
    pub fn classify(&self, declaring_type: &str, method_name: &str, line: Line) -> FrameKind {
        if self.is_proxy(declaring_type) {
            FrameKind::ProxyDispatch
        } else if self.is_reflective(declaring_type, method_name) {
            FrameKind::ReflectiveDispatch
        } else if line == Line::Native {
            FrameKind::NativeMethod
        } else {
            FrameKind::Ordinary
        }
    }

    /// Maps a host frame into the canonical model.
    pub fn frame(&self, raw: &RawFrame) -> StackFrame {
        StackFrame::classified(
            raw.declaring_type.clone(),
            raw.method_name.clone(),
            raw.file_name.clone(),
            Line::from_raw(raw.line_number),
            self,
        )
    }

    fn is_proxy(&self, declaring_type: &str) -> bool {
        let segment = declaring_type
            .rsplit('.')
            .next()
            .unwrap_or(declaring_type);
        self.proxy_markers
            .iter()
            .any(|marker| segment.starts_with(marker.as_str()))
    }

    fn is_reflective(&self, declaring_type: &str, method_name: &str) -> bool {
        self.reflective_types
            .iter()
            .any(|t| t == declaring_type)
            || self
                .reflective_prefixes
                .iter()
                .any(|p| declaring_type.starts_with(p.as_str()))
            || self
                .reflective_entry_points
                .iter()
                .any(|(t, m)| t == declaring_type && m == method_name)
    }
}
