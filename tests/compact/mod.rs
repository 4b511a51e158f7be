use stackfold::compact::{format, format_to_string, FnSink};
use stackfold::{normalize, ErrorRecord, Line, StackFrame};

use crate::support;

fn lines_for(records: &[ErrorRecord]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    format(records, &mut lines);
    lines
}

#[test]
fn wrap_chain_shows_only_distinguishing_frames() {
    let records = normalize(&support::wrapped_io_chain());
    assert_eq!(
        lines_for(&records),
        [
            "java.io.IOException: socket reset",
            " | com.acme.Pipeline.read(41)",
            " | com.acme.Pipeline.transfer(77)",
            " | com.acme.Pipeline.run(90)",
            " | com.acme.JobRunner.execute(28)",
            "Wrapped by: java.lang.RuntimeException: transfer failed",
            " + com.acme.Pipeline.wrapFailure(52)",
            " + com.acme.Pipeline.transfer(80)",
            " | com.acme.Pipeline.run(90)",
            "Wrapped by: com.acme.JobException: job aborted",
            " + com.acme.Pipeline.run(94)",
            " | com.acme.JobRunner.execute(28)",
        ],
    );
}

#[test]
fn reflective_bridge_collapses_to_the_dispatch_entry_point() {
    let records = normalize(&support::reflective_chain());
    assert_eq!(
        lines_for(&records),
        [
            "java.lang.RuntimeException: deep failure",
            " | com.acme.Target.refresh(19)",
            " | sun.reflect.NativeMethodAccessorImpl.invoke0(Native Method)",
            " | sun.reflect.NativeMethodAccessorImpl.invoke(62)",
            " | sun.reflect.DelegatingMethodAccessorImpl.invoke(43)",
            " | java.lang.reflect.Method.invoke(498)",
            " | com.acme.ReflectiveCaller.call(31)",
            "Wrapped by: java.lang.reflect.InvocationTargetException",
            " | java.lang.reflect.Method.invoke(498)",
        ],
    );
}

#[test]
fn proxy_frames_render_without_location() {
    let records = normalize(&support::proxy_throwable());
    assert_eq!(
        lines_for(&records),
        [
            "java.lang.RuntimeException: proxy blew up",
            " | com.acme.AuditHandler.invoke(25)",
            " | [proxy].submit",
            " | com.acme.ProxyCaller.call(19)",
        ],
    );
}

#[test]
fn duplicate_message_is_omitted_from_the_wrapper() {
    let flush = |line| {
        StackFrame::new(
            "com.acme.Store",
            "flush",
            Some("Store.java".into()),
            Line::Number(line),
        )
    };
    let records = [
        ErrorRecord::new("java.io.IOException", Some("quota exceeded".into()), [flush(60)]),
        ErrorRecord::new(
            "java.lang.RuntimeException",
            Some("java.io.IOException: quota exceeded".into()),
            [flush(63)],
        ),
    ];

    // Zero shared suffix: every wrapper frame is a wrap line, no bridge.
    assert_eq!(
        lines_for(&records),
        [
            "java.io.IOException: quota exceeded",
            " | com.acme.Store.flush(60)",
            "Wrapped by: java.lang.RuntimeException",
            " + com.acme.Store.flush(63)",
        ],
    );
}

#[test]
fn same_type_and_message_pair_keeps_the_message_and_does_not_fault() {
    let get = |line| {
        StackFrame::new(
            "com.acme.Cache",
            "get",
            Some("Cache.java".into()),
            Line::Number(line),
        )
    };
    let records = [
        ErrorRecord::new("com.acme.CacheError", Some("stale entry".into()), [get(40)]),
        ErrorRecord::new("com.acme.CacheError", Some("stale entry".into()), [get(44)]),
    ];

    // "stale entry" differs from the previous headline
    // "com.acme.CacheError: stale entry", so it is not a repeat.
    assert_eq!(
        lines_for(&records),
        [
            "com.acme.CacheError: stale entry",
            " | com.acme.Cache.get(40)",
            "Wrapped by: com.acme.CacheError: stale entry",
            " + com.acme.Cache.get(44)",
        ],
    );
}

#[test]
fn identical_stacks_reduce_the_wrapper_to_its_bridge() {
    let run = StackFrame::new(
        "com.acme.Pipeline",
        "run",
        Some("Pipeline.java".into()),
        Line::Number(90),
    );
    let records = [
        ErrorRecord::new("java.io.IOException", None, [run.clone()]),
        ErrorRecord::new("java.lang.RuntimeException", None, [run]),
    ];

    assert_eq!(
        lines_for(&records),
        [
            "java.io.IOException",
            " | com.acme.Pipeline.run(90)",
            "Wrapped by: java.lang.RuntimeException",
            " | com.acme.Pipeline.run(90)",
        ],
    );
}

#[test]
fn empty_and_frameless_inputs_are_rendering_cases() {
    assert!(lines_for(&[]).is_empty());

    let records = [
        ErrorRecord::new(
            "com.acme.Frameless",
            Some("nothing captured".into()),
            Vec::new(),
        ),
        ErrorRecord::new("com.acme.Wrapper", None, Vec::new()),
    ];
    assert_eq!(
        lines_for(&records),
        [
            "com.acme.Frameless: nothing captured",
            "Wrapped by: com.acme.Wrapper",
        ],
    );
}

#[test]
fn format_to_string_joins_with_newlines() {
    let records = normalize(&support::proxy_throwable());
    let text = format_to_string(&records);
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("java.lang.RuntimeException: proxy blew up\n"));
}

#[test]
fn closure_sink_receives_lines_in_order() {
    let records = normalize(&support::proxy_throwable());
    let mut collected: Vec<String> = Vec::new();
    format(&records, &mut FnSink(|line: &str| collected.push(line.into())));
    assert_eq!(collected, lines_for(&records));
}
