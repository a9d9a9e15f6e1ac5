#![cfg(feature = "rayon")]

//! Parallel scans must be byte-identical to the sequential scans: same
//! first match, same enumeration order, same cap behavior.

use bitmatch::{find_all_bitmap, find_bitmap, Channels, PixelBuffer, SearchOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_rgba(rng: &mut StdRng, width: usize, height: usize) -> PixelBuffer {
    let data: Vec<u8> = (0..width * height * 4).map(|_| rng.random()).collect();
    PixelBuffer::new(data, width, height, Channels::Rgba).unwrap()
}

fn embed(haystack: &mut Vec<u8>, width: usize, needle: &PixelBuffer, x0: usize, y0: usize) {
    for y in 0..needle.height() {
        for x in 0..needle.width() {
            let src = needle.pixel(x, y).unwrap();
            let idx = ((y0 + y) * width + (x0 + x)) * 4;
            haystack[idx..idx + 4].copy_from_slice(src);
        }
    }
}

#[test]
fn parallel_first_match_equals_sequential() {
    let mut rng = StdRng::seed_from_u64(11);
    let needle = random_rgba(&mut rng, 5, 4);

    let width = 120;
    let height = 90;
    let mut data: Vec<u8> = (0..width * height * 4).map(|_| rng.random()).collect();
    // Plant two copies; the earlier one in row-major order must win for
    // both scan strategies.
    embed(&mut data, width, &needle, 60, 12);
    embed(&mut data, width, &needle, 8, 47);
    let haystack = PixelBuffer::new(data, width, height, Channels::Rgba).unwrap();

    let sequential = SearchOptions::default();
    let parallel = SearchOptions {
        parallel: true,
        ..SearchOptions::default()
    };

    let expected = find_bitmap(&haystack, &needle, &sequential);
    assert!(expected.is_some());
    assert_eq!(find_bitmap(&haystack, &needle, &parallel), expected);
}

#[test]
fn parallel_enumeration_equals_sequential() {
    let mut rng = StdRng::seed_from_u64(23);
    let haystack = random_rgba(&mut rng, 80, 60);
    let needle = random_rgba(&mut rng, 3, 3);

    for variance in [64, 128, 255] {
        let sequential = SearchOptions {
            variance,
            ..SearchOptions::default()
        };
        let parallel = SearchOptions {
            variance,
            parallel: true,
            ..SearchOptions::default()
        };
        assert_eq!(
            find_all_bitmap(&haystack, &needle, &parallel),
            find_all_bitmap(&haystack, &needle, &sequential),
            "variance {variance}"
        );
    }
}

#[test]
fn parallel_cap_keeps_row_major_prefix() {
    // Uniform image: every origin matches, so the capped parallel result
    // must be the exact row-major prefix the sequential scan produces.
    let haystack =
        PixelBuffer::new(vec![128u8; 30 * 30 * 4], 30, 30, Channels::Rgba).unwrap();
    let needle = PixelBuffer::new(vec![128u8; 2 * 2 * 4], 2, 2, Channels::Rgba).unwrap();

    for cap in [1, 7, 29, 100] {
        let sequential = SearchOptions {
            max_matches: cap,
            ..SearchOptions::default()
        };
        let parallel = SearchOptions {
            max_matches: cap,
            parallel: true,
            ..SearchOptions::default()
        };
        let seq = find_all_bitmap(&haystack, &needle, &sequential);
        let par = find_all_bitmap(&haystack, &needle, &parallel);
        assert_eq!(seq.len(), cap as usize);
        assert_eq!(par, seq, "cap {cap}");
    }
}
