use super::*;
use crate::{
    event::model::{ConfigureEvent, Event},
    foundation::core::Rgba8Premul,
    view::drawable::MemoryDrawable,
};

static BACKEND: VectorBackend = VectorBackend;

fn view(width: u32, height: u32) -> View {
    let drawable = MemoryDrawable::new(width, height, Rgba8Premul::transparent()).unwrap();
    let mut view = View::with_backend(Frame::sized(width, height), &BACKEND, Box::new(drawable));
    view.realize().unwrap();
    view.dispatch_event(&Event::Configure(ConfigureEvent::new(0, 0, width, height)))
        .unwrap();
    view
}

fn state(view: &View) -> &VectorState {
    view.backend_state().as_vector().unwrap()
}

#[test]
fn create_attaches_empty_state_without_surfaces() {
    let v = view(10, 10);
    assert!(!state(&v).is_open());
    assert!(state(&v).back().is_none());
    assert_eq!(state(&v).paint_count(), 0);
}

#[test]
fn create_rejects_frames_larger_than_a_surface() {
    let drawable = MemoryDrawable::new(1, 1, Rgba8Premul::transparent()).unwrap();
    let mut v = View::with_backend(Frame::sized(70_000, 10), &BACKEND, Box::new(drawable));
    let err = v.realize().unwrap_err();
    assert!(matches!(err, CasementError::BackendFailed(_)));
    assert!(!v.backend_state().is_allocated());
    assert!(!v.is_realized());
}

#[test]
fn enter_without_expose_is_a_noop() {
    let mut v = view(10, 10);
    BACKEND.enter_context(&mut v, None).unwrap();
    assert!(!state(&v).is_open());
    assert!(BACKEND.context(&mut v).is_none());
    BACKEND.leave_context(&mut v, None).unwrap();
}

#[test]
fn enter_allocates_frame_sized_pair_and_leave_releases_it() {
    let mut v = view(40, 30);
    let expose = ExposeEvent::new(0, 0, 40, 30);

    BACKEND.enter_context(&mut v, Some(&expose)).unwrap();
    let extent = Extent::new(40, 30).unwrap();
    assert_eq!(state(&v).back().map(Surface::extent), Some(extent));
    assert_eq!(state(&v).front().map(Surface::extent), Some(extent));
    assert!(BACKEND.context(&mut v).is_some());

    BACKEND.leave_context(&mut v, Some(&expose)).unwrap();
    assert!(state(&v).back().is_none());
    assert!(state(&v).front().is_none());
    assert!(BACKEND.context(&mut v).is_none());
    assert_eq!(state(&v).paint_count(), 1);
}

#[test]
fn second_enter_is_rejected_and_keeps_the_first_pair() {
    let mut v = view(16, 16);
    let expose = ExposeEvent::new(0, 0, 16, 16);
    BACKEND.enter_context(&mut v, Some(&expose)).unwrap();

    let err = BACKEND.enter_context(&mut v, Some(&expose)).unwrap_err();
    assert!(matches!(err, CasementError::ContextBusy(_)));
    assert!(state(&v).is_open());

    BACKEND.leave_context(&mut v, Some(&expose)).unwrap();
    assert!(!state(&v).is_open());
}

#[test]
fn empty_frame_fails_context_creation_and_retains_nothing() {
    let mut v = view(16, 16);
    v.dispatch_event(&Event::Configure(ConfigureEvent::new(0, 0, 0, 16)))
        .unwrap();

    let err = BACKEND
        .enter_context(&mut v, Some(&ExposeEvent::new(0, 0, 4, 4)))
        .unwrap_err();
    assert!(matches!(err, CasementError::CreateContextFailed(_)));
    assert!(!state(&v).is_open());
    assert!(BACKEND.context(&mut v).is_none());
}

#[test]
fn empty_expose_is_rejected_before_allocation() {
    let mut v = view(16, 16);
    let err = BACKEND
        .enter_context(&mut v, Some(&ExposeEvent::new(2, 2, 0, 5)))
        .unwrap_err();
    assert!(matches!(err, CasementError::BadParameter(_)));
    assert!(!state(&v).is_open());
}

#[test]
fn configure_clears_cached_extent_and_resize_restores_it() {
    let mut v = view(16, 16);
    let expose = ExposeEvent::new(0, 0, 16, 16);
    BACKEND.enter_context(&mut v, Some(&expose)).unwrap();
    BACKEND.leave_context(&mut v, Some(&expose)).unwrap();
    assert_eq!(state(&v).cached_extent(), Some(Extent::new(16, 16).unwrap()));

    v.dispatch_event(&Event::Configure(ConfigureEvent::new(0, 0, 20, 12)))
        .unwrap();
    assert_eq!(state(&v).cached_extent(), None);

    BACKEND.resize(&mut v).unwrap();
    assert_eq!(state(&v).cached_extent(), Some(Extent::new(20, 12).unwrap()));
}

#[test]
fn destroy_releases_open_surfaces_and_is_repeatable() {
    let mut v = view(8, 8);
    BACKEND
        .enter_context(&mut v, Some(&ExposeEvent::new(0, 0, 8, 8)))
        .unwrap();
    BACKEND.destroy(&mut v).unwrap();
    assert!(!v.backend_state().is_allocated());
    BACKEND.destroy(&mut v).unwrap();
}

#[test]
fn leave_without_open_pair_succeeds() {
    let mut v = view(8, 8);
    BACKEND
        .leave_context(&mut v, Some(&ExposeEvent::new(0, 0, 8, 8)))
        .unwrap();
    assert_eq!(state(&v).paint_count(), 0);
}

#[test]
fn allocation_follows_the_frame_not_the_cached_extent() {
    let mut v = view(16, 16);
    let expose = ExposeEvent::new(0, 0, 4, 4);
    BACKEND.enter_context(&mut v, Some(&expose)).unwrap();
    BACKEND.leave_context(&mut v, Some(&expose)).unwrap();

    v.dispatch_event(&Event::Configure(ConfigureEvent::new(0, 0, 24, 8)))
        .unwrap();
    assert_eq!(state(&v).cached_extent(), None);

    BACKEND.enter_context(&mut v, Some(&expose)).unwrap();
    let extent = Extent::new(24, 8).unwrap();
    assert_eq!(state(&v).back().map(Surface::extent), Some(extent));
    assert_eq!(state(&v).cached_extent(), Some(extent));
    BACKEND.leave_context(&mut v, Some(&expose)).unwrap();
}
