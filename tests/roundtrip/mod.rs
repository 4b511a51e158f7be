use stackfold::classic::{parse, render};
use stackfold::{normalize, RawFrame};

use crate::support::{self, Chained};

#[test]
fn caused_by_chain_survives_render_and_parse_exactly() {
    let records = normalize(&support::wrapped_io_chain());
    let reparsed = parse(&render(&records)).unwrap();
    assert_eq!(records, reparsed);
}

#[test]
fn reflective_chain_survives_with_every_dispatch_frame_intact() {
    let records = normalize(&support::reflective_chain());
    let reparsed = parse(&render(&records)).unwrap();

    // The classic format never elides dispatch noise; only the compact one
    // does. The native invoke0 frame carries no file, so equality is exact.
    assert_eq!(records, reparsed);
}

#[test]
fn native_frames_lose_their_file_but_stay_equivalent() {
    let chain = Chained::new("com.acme.NativeFailure", Some("poll failed")).with_frames(vec![
        RawFrame::new(
            "com.acme.NativeIo",
            "poll",
            Some("NativeIo.java".into()),
            stackfold::types::NATIVE_METHOD_LINE,
        ),
        RawFrame::new("com.acme.Reactor", "spin", Some("Reactor.java".into()), 66),
    ]);

    let records = normalize(&chain);
    let reparsed = parse(&render(&records)).unwrap();

    assert_ne!(records, reparsed);
    assert!(records[0].equivalent(&reparsed[0]));
    assert_eq!(reparsed[0].frames()[0].file_name(), None);
}

#[test]
fn multi_line_messages_survive_verbatim() {
    let chain = Chained::new(
        "com.acme.ReportError",
        Some("summary line\n  detail one\n  detail two"),
    )
    .with_frames(vec![stackfold::frame!(
        "com.acme.Reporter",
        "publish",
        "Reporter.java",
        12
    )]);

    let records = normalize(&chain);
    let reparsed = parse(&render(&records)).unwrap();

    assert_eq!(records, reparsed);
    assert_eq!(
        reparsed[0].message(),
        Some("summary line\n  detail one\n  detail two"),
    );
}

#[test]
fn proxy_frames_reclassify_after_parsing() {
    let records = normalize(&support::proxy_throwable());
    let reparsed = parse(&render(&records)).unwrap();

    assert_eq!(records, reparsed);
    assert_eq!(
        stackfold::format_to_string(&reparsed)
            .lines()
            .nth(2)
            .unwrap(),
        " | [proxy].submit",
    );
}

#[test]
fn identical_wrapper_and_cause_round_trip_without_special_casing() {
    let get = |line| stackfold::frame!("com.acme.Cache", "get", "Cache.java", line);
    let chain = Chained::new("com.acme.CacheError", Some("stale entry"))
        .with_frames(vec![get(44)])
        .caused_by(
            Chained::new("com.acme.CacheError", Some("stale entry")).with_frames(vec![get(40)]),
        );

    let records = normalize(&chain);
    let reparsed = parse(&render(&records)).unwrap();
    assert_eq!(records, reparsed);
}

#[test]
fn long_chains_round_trip() {
    let mut chain = Chained::new("com.acme.Layer0Exception", Some("layer 0"))
        .with_frames(vec![stackfold::frame!("com.acme.Layer", "call0", "Layer.java", 10)]);
    for depth in 1..40 {
        let type_name = format!("com.acme.Layer{depth}Exception");
        let message = format!("layer {depth}");
        chain = Chained::new(&type_name, Some(&message))
            .with_frames(vec![stackfold::frame!(
                "com.acme.Layer",
                format!("call{depth}"),
                "Layer.java",
                10 + depth
            )])
            .caused_by(chain);
    }

    let records = normalize(&chain);
    assert_eq!(records.len(), 40);
    let reparsed = parse(&render(&records)).unwrap();
    assert_eq!(records, reparsed);
}
