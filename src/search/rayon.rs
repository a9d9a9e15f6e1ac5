//! Rayon-parallel scanners (feature-gated).
//!
//! Row bands of candidate origins are distributed across the thread pool.
//! Parallelism must not change observable results: `scan_first_par` uses
//! ordered short-circuit search so the row-major "first match" is identical
//! to the scalar scanner's, and `scan_all_par` re-sorts the merged rows into
//! `(y, x)` order before applying the cap.

use crate::image::PixelBuffer;
use crate::region::SearchRegion;
use crate::search::scan::needle_matches_at;
use crate::search::Match;
use rayon::prelude::*;

/// Row-parallel equivalent of the scalar first-match scan.
pub(crate) fn scan_first_par(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    region: SearchRegion,
    variance: u8,
) -> Option<Match> {
    if !region.fits(needle.width(), needle.height()) {
        return None;
    }
    let last_x = region.x + region.width - needle.width();
    let last_y = region.y + region.height - needle.height();

    (region.y..=last_y).into_par_iter().find_map_first(|oy| {
        (region.x..=last_x)
            .find(|&ox| needle_matches_at(haystack, needle, ox, oy, variance))
            .map(|ox| Match { x: ox, y: oy })
    })
}

/// Row-parallel equivalent of the scalar all-match scan.
pub(crate) fn scan_all_par(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    region: SearchRegion,
    variance: u8,
    cap: usize,
) -> Vec<Match> {
    if cap == 0 || !region.fits(needle.width(), needle.height()) {
        return Vec::new();
    }
    let last_x = region.x + region.width - needle.width();
    let last_y = region.y + region.height - needle.height();

    let row_results: Vec<Vec<Match>> = (region.y..=last_y)
        .into_par_iter()
        .map(|oy| {
            let mut row_matches = Vec::new();
            for ox in region.x..=last_x {
                if needle_matches_at(haystack, needle, ox, oy, variance) {
                    row_matches.push(Match { x: ox, y: oy });
                }
            }
            row_matches
        })
        .collect();

    let mut matches: Vec<Match> = row_results.into_iter().flatten().collect();
    matches.sort_unstable_by_key(|m| (m.y, m.x));
    matches.truncate(cap);
    matches
}
