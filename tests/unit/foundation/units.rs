use super::*;

fn pt(v: f64) -> Emu {
    Emu((v * EMU_PER_POINT) as i64)
}

fn widescreen() -> UnitTransformer {
    // 13.333in x 7.5in at 72pt/in.
    UnitTransformer::new(SceneFrame::from_slide_emu(Emu(12_192_000), Emu(6_858_000)).unwrap())
}

#[test]
fn emu_conversions() {
    assert_eq!(Emu(EMU_PER_INCH).to_scene(), 1.0);
    assert_eq!(Emu(12_700).to_points(), 1.0);
    assert_eq!(pt(72.0).to_scene(), 1.0);
}

#[test]
fn frame_rejects_degenerate_extents() {
    assert!(SceneFrame::new(0.0, 1.0).is_err());
    assert!(SceneFrame::new(1.0, f64::NAN).is_err());
    let f = SceneFrame::from_slide_emu(Emu(9_144_000), Emu(6_858_000)).unwrap();
    assert_eq!(f.width, 10.0);
    assert_eq!(f.height, 7.5);
}

#[test]
fn box_centered_on_canvas_maps_to_origin() {
    let t = UnitTransformer::new(SceneFrame::new(10.0, 8.0).unwrap());
    // 2in x 2in box with top-left at (4in, 3in) is centered on a 10x8 canvas.
    let (pos, size) = t.place_box(pt(288.0), pt(216.0), pt(144.0), pt(144.0));
    assert!((pos.x).abs() < 1e-12);
    assert!((pos.y).abs() < 1e-12);
    assert_eq!(pos.z, 0.0);
    assert!((size.width - 2.0).abs() < 1e-12);
    assert!((size.height - 2.0).abs() < 1e-12);
}

#[test]
fn top_left_box_is_up_and_left() {
    let t = UnitTransformer::new(SceneFrame::new(10.0, 8.0).unwrap());
    let (pos, _) = t.place_box(Emu(0), Emu(0), pt(72.0), pt(72.0));
    assert!((pos.x - (-4.5)).abs() < 1e-12);
    assert!((pos.y - 3.5).abs() < 1e-12);
}

#[test]
fn endpoints_have_no_half_extent_offset() {
    let t = UnitTransformer::new(SceneFrame::new(10.0, 8.0).unwrap());
    let p = t.place_point(Emu(0), Emu(0));
    assert_eq!(p, Point::new(-5.0, 4.0));

    let seg = t.place_segment(Emu(0), Emu(0), pt(720.0), pt(576.0));
    assert_eq!(seg.p0, Point::new(-5.0, 4.0));
    assert!((seg.p1.x - 5.0).abs() < 1e-12);
    assert!((seg.p1.y - (-4.0)).abs() < 1e-12);
}

#[test]
fn off_canvas_boxes_are_not_clamped() {
    let t = widescreen();
    let (pos, _) = t.place_box(Emu(-EMU_PER_INCH * 20), Emu(EMU_PER_INCH * 30), Emu(0), Emu(0));
    assert!(pos.x < -t.frame().width);
    assert!(pos.y < -t.frame().height);
}

#[test]
fn placement_is_bit_identical_across_runs() {
    let t = widescreen();
    for left in [-5_000_000i64, 0, 1, 914_400, 7_777_777] {
        for top in [-12_700i64, 0, 3_000_000] {
            for w in [0i64, 1, 2_540_000] {
                let a = t.place_box(Emu(left), Emu(top), Emu(w), Emu(w / 2));
                let b = t.place_box(Emu(left), Emu(top), Emu(w), Emu(w / 2));
                assert_eq!(a.0.x.to_bits(), b.0.x.to_bits());
                assert_eq!(a.0.y.to_bits(), b.0.y.to_bits());
                assert_eq!(a.1.width.to_bits(), b.1.width.to_bits());
            }
        }
    }
}
