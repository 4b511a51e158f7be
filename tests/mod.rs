use stackfold::{normalize, ErrorRecord, Line, StackFrame};

pub mod compact;
pub mod roundtrip;

/// The reference scenario: a root cause wrapped by a message-less
/// `RuntimeException` sharing the whole call path. The cause's message
/// appears exactly once, and the wrapper contributes only its catch-site
/// frame plus the bridge.
#[test]
fn message_less_wrapper_repeats_nothing() {
    let site = |line| {
        StackFrame::new(
            "com.acme.Store",
            "persist",
            Some("Store.java".into()),
            Line::Number(line),
        )
    };
    let records = [
        ErrorRecord::new(
            "java.io.IOException",
            Some("disk full".into()),
            [site(120), site(145)],
        ),
        ErrorRecord::new("java.lang.RuntimeException", None, [site(131), site(145)]),
    ];

    let mut lines: Vec<String> = Vec::new();
    stackfold::compact::format(&records, &mut lines);
    assert_eq!(
        lines,
        [
            "java.io.IOException: disk full",
            " | com.acme.Store.persist(120)",
            " | com.acme.Store.persist(145)",
            "Wrapped by: java.lang.RuntimeException",
            " + com.acme.Store.persist(131)",
            " | com.acme.Store.persist(145)",
        ],
    );
}

/// Normalizer and parser outputs are interchangeable downstream: formatting
/// either yields the same compact text.
#[test]
fn parsed_and_normalized_records_format_identically() {
    let chain = support::wrapped_io_chain();
    let records = normalize(&chain);
    let reparsed = stackfold::parse(&stackfold::render(&records)).unwrap();
    assert_eq!(
        stackfold::format_to_string(&records),
        stackfold::format_to_string(&reparsed),
    );
}
