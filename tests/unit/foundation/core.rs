use super::*;

#[test]
fn extent_rejects_empty_and_oversized_frames() {
    assert!(matches!(
        Frame::sized(0, 10).extent(),
        Err(CasementError::CreateContextFailed(_))
    ));
    assert!(matches!(
        Frame::sized(70_000, 10).extent(),
        Err(CasementError::CreateContextFailed(_))
    ));
    let e = Frame::new(5, 7, 200, 150).extent().unwrap();
    assert_eq!((e.width, e.height), (200, 150));
    assert_eq!(e.byte_len(), 200 * 150 * 4);
}

#[test]
fn region_union_ignores_empty_sides() {
    let a = Region::new(10, 10, 5, 5);
    assert_eq!(a.union(Region::default()), a);
    assert_eq!(Region::default().union(a), a);
    assert_eq!(
        a.union(Region::new(0, 12, 3, 10)),
        Region::new(0, 10, 15, 12)
    );
}

#[test]
fn region_intersect_clips_and_detects_disjoint() {
    let bounds = Region::new(0, 0, 100, 100);
    assert_eq!(
        Region::new(90, 95, 20, 20).intersect(bounds),
        Some(Region::new(90, 95, 10, 5))
    );
    assert_eq!(Region::new(100, 0, 5, 5).intersect(bounds), None);
    assert!(Region::new(10, 10, 50, 50).contains(59, 10));
    assert!(!Region::new(10, 10, 50, 50).contains(60, 10));
}

#[test]
fn straight_to_premul_scales_channels() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
