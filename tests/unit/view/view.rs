use super::*;
use crate::backend::BackendKind;

#[test]
fn new_view_takes_backend_from_config() {
    let cfg = ViewConfig {
        title: "scope".to_string(),
        frame: Frame::sized(100, 100),
        backend: BackendKind::Stub,
        clear_rgba: None,
    };
    let view = View::in_memory(&cfg).unwrap();
    assert_eq!(view.backend().name(), "stub");
    assert_eq!(view.title(), "scope");
    assert_eq!(view.frame(), Frame::sized(100, 100));
    assert_eq!(view.stage(), ViewStage::Allocated);
    assert_eq!(view.drawable().size(), (100, 100));
    assert!(!view.backend_state().is_allocated());
}

#[test]
fn realize_twice_is_rejected() {
    let mut view = View::in_memory(&ViewConfig::default()).unwrap();
    view.realize().unwrap();
    assert!(view.backend_state().is_allocated());
    assert!(matches!(
        view.realize(),
        Err(CasementError::BadParameter(_))
    ));
}

#[test]
fn context_is_none_outside_a_paint_bracket() {
    let mut view = View::in_memory(&ViewConfig::default()).unwrap();
    assert!(view.context().is_none());
    view.realize().unwrap();
    assert!(view.context().is_none());
}

#[test]
fn unrealize_resets_lifecycle_and_allows_realizing_again() {
    let mut view = View::in_memory(&ViewConfig::default()).unwrap();
    view.realize().unwrap();
    view.post_redisplay();
    view.unrealize().unwrap();
    assert_eq!(view.stage(), ViewStage::Allocated);
    assert!(!view.has_pending_redisplay());
    assert!(!view.backend_state().is_allocated());

    view.realize().unwrap();
    assert_eq!(view.stage(), ViewStage::Realized);
}

#[test]
fn debug_output_names_the_backend() {
    let view = View::in_memory(&ViewConfig::default()).unwrap();
    let text = format!("{view:?}");
    assert!(text.contains("vector"));
    assert!(text.contains("Allocated"));
}
