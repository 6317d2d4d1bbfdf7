use super::*;

const RED: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};

#[test]
fn new_drawable_is_filled_with_background() {
    let d = MemoryDrawable::new(3, 2, RED).unwrap();
    assert_eq!(d.size(), (3, 2));
    assert_eq!(d.pixel(2, 1), Some([255, 0, 0, 255]));
    assert_eq!(d.pixel(3, 0), None);
}

#[test]
fn snapshot_at_larger_extent_pads_with_background() {
    let mut d = MemoryDrawable::new(2, 2, Rgba8Premul::transparent()).unwrap();
    let e2 = Extent::new(2, 2).unwrap();
    let mut green = vec![0u8; e2.byte_len()];
    fill(&mut green, [0, 255, 0, 255]);
    d.present(e2, &green).unwrap();

    let snap = d.snapshot(Extent::new(3, 3).unwrap()).unwrap();
    assert_eq!(snap.len(), 3 * 3 * 4);
    assert_eq!(&snap[0..4], &[0, 255, 0, 255]);
    // (2,0) lies outside the old store
    assert_eq!(&snap[8..12], &[0, 0, 0, 0]);
    // (1,1)
    assert_eq!(&snap[16..20], &[0, 255, 0, 255]);
}

#[test]
fn present_replaces_contents_and_counts() {
    let mut d = MemoryDrawable::new(1, 1, RED).unwrap();
    let e = Extent::new(2, 1).unwrap();
    d.present(e, &[1, 1, 1, 1, 2, 2, 2, 2]).unwrap();
    assert_eq!(d.size(), (2, 1));
    assert_eq!(d.pixel(1, 0), Some([2, 2, 2, 2]));
    assert_eq!(d.present_count(), 1);

    assert!(matches!(
        d.present(e, &[0; 4]),
        Err(CasementError::Window(_))
    ));
    assert_eq!(d.present_count(), 1);
}

#[test]
fn sizes_beyond_a_surface_are_rejected_without_allocating() {
    for (w, h) in [(4_000_000_000, 4_000_000_000), (70_000, 1), (1, 65_536)] {
        assert!(matches!(
            MemoryDrawable::new(w, h, RED),
            Err(CasementError::BadParameter(_))
        ));
    }
    let empty = MemoryDrawable::new(0, 5, RED).unwrap();
    assert!(empty.pixels().is_empty());
}
