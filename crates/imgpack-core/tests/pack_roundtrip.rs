// crates/imgpack-core/tests/pack_roundtrip.rs

use imgpack_core::pixel::pack::{pack_raster, unpack_bytes};
use imgpack_core::IndexedRaster;

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

fn random_raster(seed: &mut u64, width: usize, height: usize) -> IndexedRaster {
    let pixels = (0..width * height)
        .map(|_| ((lcg_next(seed) >> 56) as u8) & 0x0F)
        .collect();
    IndexedRaster::new(width, height, pixels).expect("valid raster")
}

#[test]
fn two_by_one_packs_to_single_byte() {
    let r = IndexedRaster::new(2, 1, vec![3, 5]).unwrap();
    assert_eq!(pack_raster(&r).unwrap(), vec![0x35]);
}

#[test]
fn four_by_two_packs_two_bytes_per_row() {
    let r = IndexedRaster::new(4, 2, vec![0, 1, 1, 0, 1, 1, 0, 0]).unwrap();
    let packed = pack_raster(&r).unwrap();
    assert_eq!(packed, vec![0x01, 0x10, 0x11, 0x00]);
}

#[test]
fn packed_length_and_roundtrip() {
    let mut seed: u64 = 0x1234_5678_9abc_def0;

    for &(w, h) in &[(2usize, 1usize), (2, 7), (4, 4), (16, 3), (320, 2), (640, 5)] {
        let r = random_raster(&mut seed, w, h);
        let packed = pack_raster(&r).expect("pack ok");
        assert_eq!(packed.len(), w * h / 2, "w={} h={}", w, h);

        let back = unpack_bytes(&packed, w, h).expect("unpack ok");
        assert_eq!(back, r, "w={} h={}", w, h);
    }
}

#[test]
fn scan_order_is_row_major() {
    // Column-major or bottom-up would put 0x2 or 0x4 first.
    let r = IndexedRaster::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(pack_raster(&r).unwrap(), vec![0x12, 0x34, 0x56]);
}

#[test]
fn odd_width_rejected() {
    let r = IndexedRaster::new(5, 2, vec![0; 10]).unwrap();
    let err = pack_raster(&r).unwrap_err();
    assert!(format!("{err}").contains("even"));
}
