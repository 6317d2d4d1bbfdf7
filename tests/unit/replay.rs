use super::*;
use crate::{backend::BackendKind, foundation::core::Frame};

fn script(width: u32, height: u32, events: Vec<RawEvent>, paint: Vec<PaintOp>) -> ReplayScript {
    ReplayScript {
        config: ViewConfig {
            frame: Frame::sized(width, height),
            ..ViewConfig::default()
        },
        events,
        batch: false,
        paint,
    }
}

fn configure(width: u32, height: u32) -> RawEvent {
    RawEvent::ConfigureNotify {
        x: 0,
        y: 0,
        width,
        height,
    }
}

fn expose(x: u32, y: u32, width: u32, height: u32) -> RawEvent {
    RawEvent::Expose {
        x,
        y,
        width,
        height,
        count: 0,
    }
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

const RED: [u8; 4] = [255, 0, 0, 255];

#[test]
fn script_parses_from_json() {
    let s = ReplayScript::from_json_str(
        r#"{
            "config": { "frame": { "x": 0, "y": 0, "width": 8, "height": 8 }, "backend": "stub" },
            "events": [
                { "type": "configure_notify", "x": 0, "y": 0, "width": 8, "height": 8 },
                { "type": "expose", "x": 2, "y": 2, "width": 4, "height": 4 }
            ],
            "paint": [ { "op": "clear", "rgba": [255, 0, 0, 255] } ]
        }"#,
    )
    .unwrap();
    assert_eq!(s.config.backend, BackendKind::Stub);
    assert_eq!(s.events.len(), 2);
    assert_eq!(s.events[1], expose(2, 2, 4, 4));
    assert_eq!(s.paint, vec![PaintOp::Clear { rgba: RED }]);
    assert!(!s.batch);
}

#[test]
fn unknown_script_fields_are_rejected() {
    let err = ReplayScript::from_json_str(r#"{ "frames": 3 }"#).unwrap_err();
    assert!(matches!(err, CasementError::Serde(_)));
}

#[test]
fn full_frame_fill_only_lands_inside_the_exposed_rect() {
    let out = run_replay(&script(
        8,
        8,
        vec![configure(8, 8), expose(2, 2, 4, 4)],
        vec![PaintOp::Clear { rgba: RED }],
    ))
    .unwrap();

    assert_eq!((out.frame.width, out.frame.height), (8, 8));
    assert_eq!(px(&out.frame, 2, 2), RED);
    assert_eq!(px(&out.frame, 5, 5), RED);
    assert_eq!(px(&out.frame, 1, 1), [0, 0, 0, 0]);
    assert_eq!(px(&out.frame, 6, 3), [0, 0, 0, 0]);

    assert_eq!(out.stats.paints, 1);
    assert_eq!(out.stats.exposed, vec![Region::new(2, 2, 4, 4)]);
    // create, configure, expose, destroy
    assert_eq!(out.stats.events, 4);
    assert!(out.stats.paint_failures.is_empty());
}

#[test]
fn expose_before_configure_paints_at_the_initial_frame() {
    let out = run_replay(&script(
        4,
        4,
        vec![expose(0, 0, 2, 2)],
        vec![PaintOp::Clear { rgba: RED }],
    ))
    .unwrap();
    assert_eq!(out.stats.paints, 1);
    assert_eq!((out.frame.width, out.frame.height), (4, 4));
    assert_eq!(px(&out.frame, 1, 1), RED);
    assert_eq!(px(&out.frame, 3, 3), [0, 0, 0, 0]);
}

#[test]
fn batch_collapses_configures_and_merges_exposes() {
    let mut s = script(
        4,
        4,
        vec![
            configure(4, 4),
            expose(1, 1, 2, 2),
            configure(6, 6),
            expose(3, 3, 2, 2),
        ],
        vec![PaintOp::Clear { rgba: RED }],
    );
    s.batch = true;
    let out = run_replay(&s).unwrap();

    assert_eq!((out.frame.width, out.frame.height), (6, 6));
    assert_eq!(out.stats.paints, 1);
    assert_eq!(out.stats.exposed, vec![Region::new(1, 1, 4, 4)]);
    assert_eq!(px(&out.frame, 1, 1), RED);
    assert_eq!(px(&out.frame, 4, 4), RED);
    assert_eq!(px(&out.frame, 5, 5), [0, 0, 0, 0]);
}

#[test]
fn failed_context_creation_is_recorded_and_replay_continues() {
    let out = run_replay(&script(
        4,
        4,
        vec![
            configure(0, 4),
            expose(0, 0, 2, 2),
            configure(4, 4),
            expose(0, 0, 1, 1),
        ],
        vec![PaintOp::Clear { rgba: RED }],
    ))
    .unwrap();

    assert_eq!(out.stats.paint_failures.len(), 1);
    assert_eq!(out.stats.paints, 1);
    assert_eq!(px(&out.frame, 0, 0), RED);
    assert_eq!(px(&out.frame, 1, 1), [0, 0, 0, 0]);
}

#[test]
fn stub_backend_delivers_exposes_without_drawing() {
    let mut s = script(
        4,
        4,
        vec![configure(4, 4), expose(0, 0, 4, 4)],
        vec![PaintOp::Clear { rgba: RED }],
    );
    s.config.backend = BackendKind::Stub;
    let out = run_replay(&s).unwrap();
    assert_eq!(out.stats.paints, 1);
    assert!(out.frame.data.iter().all(|b| *b == 0));
}

#[test]
fn summary_mentions_counts() {
    let stats = ReplayStats {
        events: 5,
        paints: 2,
        exposed: Vec::new(),
        paint_failures: vec!["x".to_string()],
    };
    assert_eq!(summarize(&stats), "5 events, 2 paints (1 failed)");
}

#[test]
fn oversized_frame_is_rejected_before_any_allocation() {
    let s = script(4_000_000_000, 4_000_000_000, vec![configure(8, 8)], Vec::new());
    let err = run_replay(&s).unwrap_err();
    assert!(matches!(err, CasementError::BadParameter(_)));
}
