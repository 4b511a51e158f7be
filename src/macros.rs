//! Construction shorthand for host frames.

/// Builds a [`RawFrame`](crate::types::RawFrame).
///
/// # Syntax
///
/// - `frame!(type, method)`: unknown source
/// - `frame!(type, method, native)`: native method
/// - `frame!(type, method, file, line)`: full location
///
/// # Examples
///
/// ```
/// use stackfold::frame;
///
/// let located = frame!("com.example.Service", "call", "Service.java", 42);
/// assert_eq!(located.line_number, 42);
///
/// let native = frame!("com.example.Service", "init", native);
/// assert_eq!(native.line_number, stackfold::types::NATIVE_METHOD_LINE);
///
/// let unknown = frame!("com.example.Service", "drop");
/// assert!(unknown.file_name.is_none());
/// ```
#[macro_export]
macro_rules! frame {
    ($declaring_type:expr, $method_name:expr) => {
        $crate::types::RawFrame::new(
            $declaring_type,
            $method_name,
            ::core::option::Option::None,
            $crate::types::UNKNOWN_LINE,
        )
    };
    ($declaring_type:expr, $method_name:expr, native) => {
        $crate::types::RawFrame::new(
            $declaring_type,
            $method_name,
            ::core::option::Option::None,
            $crate::types::NATIVE_METHOD_LINE,
        )
    };
    ($declaring_type:expr, $method_name:expr, $file_name:expr, $line_number:expr) => {
        $crate::types::RawFrame::new(
            $declaring_type,
            $method_name,
            ::core::option::Option::Some($file_name.into()),
            $line_number,
        )
    };
}
