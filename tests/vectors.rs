//! Bit-exact regression vectors.
//!
//! Every operation, in 1-4 dimensions, at seeds 0, 1, 42 and `u32::MAX`.
//! Any change here is a change to the output format.

use hashrng::prelude::*;
use serde::Deserialize;

const VECTORS_JSON: &str = include_str!("vectors/hash-vectors-v1.json");

#[derive(Debug, Deserialize)]
struct RootVectors {
    version: u32,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    coords: Vec<i32>,
    seed: u32,
    uint: u32,
    under_7: u32,
    uint_100_1000: u32,
    int_neg50_50: i32,
    zero_to_one_bits: u32,
    neg_one_to_one_bits: u32,
    chance_0_3: bool,
}

fn load() -> RootVectors {
    let root: RootVectors = serde_json::from_str(VECTORS_JSON).expect("parse vectors");
    assert_eq!(root.version, 1);
    assert_eq!(root.cases.len(), 96);
    root
}

/// Route a case through the coordinate entry points.
fn coordinate_outputs(c: &Case) -> (u32, u32, u32, i32, f32, f32, bool) {
    let s = c.seed;
    match *c.coords.as_slice() {
        [x] => (
            hash_1d_uint(x, s),
            hash_1d_uint_under_limit(x, s, 7),
            hash_1d_uint_in_range(x, s, 100, 1000).unwrap(),
            hash_1d_int_in_range(x, s, -50, 50).unwrap(),
            hash_1d_zero_to_one(x, s),
            hash_1d_neg_one_to_one(x, s),
            chance_1d(x, s, 0.3).unwrap(),
        ),
        [x, y] => (
            hash_2d_uint(x, y, s),
            hash_2d_uint_under_limit(x, y, s, 7),
            hash_2d_uint_in_range(x, y, s, 100, 1000).unwrap(),
            hash_2d_int_in_range(x, y, s, -50, 50).unwrap(),
            hash_2d_zero_to_one(x, y, s),
            hash_2d_neg_one_to_one(x, y, s),
            chance_2d(x, y, s, 0.3).unwrap(),
        ),
        [x, y, z] => (
            hash_3d_uint(x, y, z, s),
            hash_3d_uint_under_limit(x, y, z, s, 7),
            hash_3d_uint_in_range(x, y, z, s, 100, 1000).unwrap(),
            hash_3d_int_in_range(x, y, z, s, -50, 50).unwrap(),
            hash_3d_zero_to_one(x, y, z, s),
            hash_3d_neg_one_to_one(x, y, z, s),
            chance_3d(x, y, z, s, 0.3).unwrap(),
        ),
        [x, y, z, w] => (
            hash_4d_uint(x, y, z, w, s),
            hash_4d_uint_under_limit(x, y, z, w, s, 7),
            hash_4d_uint_in_range(x, y, z, w, s, 100, 1000).unwrap(),
            hash_4d_int_in_range(x, y, z, w, s, -50, 50).unwrap(),
            hash_4d_zero_to_one(x, y, z, w, s),
            hash_4d_neg_one_to_one(x, y, z, w, s),
            chance_4d(x, y, z, w, s, 0.3).unwrap(),
        ),
        _ => panic!("unexpected dimension {}", c.coords.len()),
    }
}

#[test]
fn coordinate_entry_points_match_vectors() {
    for c in load().cases {
        let (uint, under, urange, irange, z, n, ch) = coordinate_outputs(&c);
        assert_eq!(uint, c.uint, "uint {:?} seed {}", c.coords, c.seed);
        assert_eq!(under, c.under_7, "under_7 {:?} seed {}", c.coords, c.seed);
        assert_eq!(urange, c.uint_100_1000, "uint_in_range {:?} seed {}", c.coords, c.seed);
        assert_eq!(irange, c.int_neg50_50, "int_in_range {:?} seed {}", c.coords, c.seed);
        assert_eq!(z.to_bits(), c.zero_to_one_bits, "zero_to_one {:?} seed {}", c.coords, c.seed);
        assert_eq!(
            n.to_bits(),
            c.neg_one_to_one_bits,
            "neg_one_to_one {:?} seed {}",
            c.coords,
            c.seed
        );
        assert_eq!(ch, c.chance_0_3, "chance {:?} seed {}", c.coords, c.seed);
    }
}

#[test]
fn buffer_entry_points_match_vectors() {
    for c in load().cases {
        let index = c.coords.as_slice();
        let s = c.seed;
        assert_eq!(hash_uint(index, s), c.uint);
        assert_eq!(hash_uint_under_limit(index, s, 7), c.under_7);
        assert_eq!(hash_uint_in_range(index, s, 100, 1000), Ok(c.uint_100_1000));
        assert_eq!(hash_int_in_range(index, s, -50, 50), Ok(c.int_neg50_50));
        assert_eq!(hash_zero_to_one(index, s).to_bits(), c.zero_to_one_bits);
        assert_eq!(hash_neg_one_to_one(index, s).to_bits(), c.neg_one_to_one_bits);
        assert_eq!(chance(index, s, 0.3), Ok(c.chance_0_3));
    }
}

#[test]
fn byte_buffers_match_vectors() {
    for c in load().cases {
        let bytes: Vec<u8> = c.coords.iter().flat_map(|v| v.to_le_bytes()).collect();
        assert_eq!(hash_bytes(&bytes, c.seed), Ok(c.uint));
        let index = ByteIndex::new(&bytes).unwrap();
        assert_eq!(hash_uint_under_limit(&index, c.seed, 7), c.under_7);
    }
}

#[test]
fn reference_point_130_23() {
    assert_eq!(hash_2d_uint(130, 23, 0), 977_346_410);
    assert_eq!(hash_2d_int_in_range(130, 23, 0, 0, 9), Ok(6));
    assert_eq!(hash_2d_zero_to_one(130, 23, 0).to_bits(), 0x3E82_3ED4);
    assert_eq!(hash_2d_neg_one_to_one(130, 23, 0).to_bits(), 0xBED0_2CDA);
}
