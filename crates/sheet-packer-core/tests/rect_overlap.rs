use sheet_packer_core::Rect;

#[test]
fn overlapping_rects() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn disjoint_rects() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(20, 0, 10, 10);
    assert!(!a.overlaps(&b));
    let c = Rect::new(0, 20, 10, 10);
    assert!(!a.overlaps(&c));
}

#[test]
fn edge_touching_is_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    // Shares the x = 10 edge
    let right = Rect::new(10, 0, 10, 10);
    assert!(!a.overlaps(&right));
    assert!(!right.overlaps(&a));
    // Shares the y = 10 edge
    let below = Rect::new(0, 10, 10, 10);
    assert!(!a.overlaps(&below));
    // Corner touch only
    let diag = Rect::new(10, 10, 5, 5);
    assert!(!a.overlaps(&diag));
}

#[test]
fn contained_rect_overlaps() {
    let outer = Rect::new(0, 0, 100, 100);
    let inner = Rect::new(10, 10, 5, 5);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn self_overlap() {
    let a = Rect::new(3, 4, 5, 6);
    assert!(a.overlaps(&a));
    assert_eq!(a.right(), 8);
    assert_eq!(a.bottom(), 10);
    assert_eq!(a.area(), 30);
}
