use super::*;

#[test]
fn blend_endpoints() {
    let c = Rgb8::new(210, 210, 210);
    assert_eq!(c.blend_toward(Rgb8::BLACK, 0), c);
    assert_eq!(c.blend_toward(Rgb8::BLACK, 255), Rgb8::BLACK);
}

#[test]
fn blend_half_coverage_over_white() {
    let mid = Rgb8::WHITE.blend_toward(Rgb8::BLACK, 128);
    assert_eq!(mid, Rgb8::new(127, 127, 127));
}

#[test]
fn dist_sq_is_symmetric() {
    let a = Rgb8::new(10, 20, 30);
    let b = Rgb8::new(13, 16, 30);
    assert_eq!(a.dist_sq(b), 9 + 16);
    assert_eq!(a.dist_sq(b), b.dist_sq(a));
    assert_eq!(a.dist_sq(a), 0);
}
