// crates/imgpack-core/tests/palette_formulas.rs

use imgpack_core::video::encode::{encode_entry, phase_from_hue};
use imgpack_core::{default_calibration, encode_palette, ColorTable, PackError, Rgb};

#[test]
fn gray_always_has_no_carrier() {
    let cal = default_calibration();
    for v in (0u8..=255).step_by(5) {
        let e = encode_entry(0, Rgb::new(v, v, v), &cal).unwrap();
        assert_eq!(e.chroma, 7, "gray {}", v);
    }
}

#[test]
fn luma_boundaries() {
    let cal = default_calibration();
    assert_eq!(encode_entry(0, Rgb::new(0, 0, 0), &cal).unwrap().luma, 278);
    assert_eq!(encode_entry(0, Rgb::new(255, 255, 255), &cal).unwrap().luma, 1301);
    // 278 + 0.299 * 1023 = 583.877
    assert_eq!(encode_entry(0, Rgb::new(255, 0, 0), &cal).unwrap().luma, 584);
    assert_eq!(encode_entry(0, Rgb::new(128, 128, 128), &cal).unwrap().luma, 792);
}

#[test]
fn saturated_primaries_get_full_carrier() {
    let cal = default_calibration();
    for c in [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), Rgb::new(255, 255, 0)] {
        assert_eq!(encode_entry(0, c, &cal).unwrap().chroma, 0, "{c:?}");
    }
}

#[test]
fn threshold_branch_overrides_formula() {
    let cal = default_calibration();
    // s = 20/255 < 0.1; the general formula alone would give round(6.45) = 6.
    assert_eq!(encode_entry(0, Rgb::new(255, 235, 235), &cal).unwrap().chroma, 7);
    // s = 30/255 > 0.1 -> round(6.18) = 6.
    assert_eq!(encode_entry(0, Rgb::new(255, 225, 225), &cal).unwrap().chroma, 6);
    // s = 0.5 -> round(3.5) = 4.
    assert_eq!(encode_entry(0, Rgb::new(200, 100, 100), &cal).unwrap().chroma, 4);
}

#[test]
fn phase_relative_to_burst() {
    let cal = default_calibration();
    let phase = |c: Rgb| encode_entry(0, c, &cal).unwrap().phase;
    assert_eq!(phase(Rgb::new(255, 255, 0)), 0);
    assert_eq!(phase(Rgb::new(0, 255, 255)), 85);
    assert_eq!(phase(Rgb::new(255, 0, 255)), -85);
    assert_eq!(phase(Rgb::new(255, 0, 0)), -43);
    // blue sits on the wrap boundary and lands on the negative side
    assert_eq!(phase(Rgb::new(0, 0, 255)), -128);
}

#[test]
fn hue_point_nine_takes_wrap_branch() {
    let cal = default_calibration();
    let p = phase_from_hue(0.9, &cal);
    // unwrapped would be (0.9 - 1/6) * 255 = 187
    assert_eq!(p.round() as i64, -68);
}

#[test]
fn phase_always_fits_eight_bits() {
    let cal = default_calibration();
    for r in (0u16..=255).step_by(51) {
        for g in (0u16..=255).step_by(51) {
            for b in (0u16..=255).step_by(51) {
                let e = encode_entry(0, Rgb::new(r as u8, g as u8, b as u8), &cal).unwrap();
                assert!((-128..=127).contains(&e.phase));
                assert!(e.luma <= 2047);
                assert!(e.chroma <= 7);
            }
        }
    }
}

#[test]
fn palette_order_and_all_or_nothing() {
    let cal = default_calibration();
    let table = ColorTable::new(vec![
        Rgb::new(0, 0, 0),
        Rgb::new(255, 0, 0),
        Rgb::new(255, 255, 255),
    ])
    .unwrap();
    let es = encode_palette(&table, &cal).unwrap();
    let idx: Vec<u8> = es.iter().map(|e| e.index).collect();
    assert_eq!(idx, vec![0, 1, 2]);

    let hot = cal.with_pedestal(1100);
    let err = encode_palette(&table, &hot).unwrap_err();
    assert!(matches!(
        err,
        PackError::MalformedColorEntry { index: 2, field: "luma", .. }
    ));
}
