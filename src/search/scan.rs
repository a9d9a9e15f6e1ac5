//! Scalar scan over candidate origins.
//!
//! Both scanners walk candidate top-left origins in row-major order (`oy`
//! outer, `ox` inner) and test every needle pixel against the aligned
//! haystack pixel. The first mismatching pixel abandons the origin
//! immediately; that early exit, not vectorization, is what keeps scans fast
//! on screenshot-sized haystacks.

use crate::compare::pixel_matches;
use crate::image::PixelBuffer;
use crate::region::SearchRegion;
use crate::search::Match;

/// Tests whether the needle matches in full at origin `(ox, oy)`.
///
/// The caller guarantees the needle placed at `(ox, oy)` lies inside the
/// haystack.
#[inline]
pub(crate) fn needle_matches_at(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    ox: usize,
    oy: usize,
    variance: u8,
) -> bool {
    let hay_bpp = haystack.channels().count();
    let needle_bpp = needle.channels().count();
    let hay_alpha = haystack.channels().has_alpha();
    let needle_alpha = needle.channels().has_alpha();
    let needle_width = needle.width();

    for ny in 0..needle.height() {
        let hay_row = &haystack.row(oy + ny)[ox * hay_bpp..];
        let needle_row = needle.row(ny);
        for nx in 0..needle_width {
            let np = &needle_row[nx * needle_bpp..nx * needle_bpp + needle_bpp];
            let hp = &hay_row[nx * hay_bpp..nx * hay_bpp + hay_bpp];
            if !pixel_matches(np, hp, needle_alpha, hay_alpha, variance) {
                return false;
            }
        }
    }
    true
}

/// Returns the first fully matching origin in row-major order, if any.
pub(crate) fn scan_first(
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

    for oy in region.y..=last_y {
        for ox in region.x..=last_x {
            if needle_matches_at(haystack, needle, ox, oy, variance) {
                return Some(Match { x: ox, y: oy });
            }
        }
    }
    None
}

/// Returns every fully matching origin in row-major discovery order.
///
/// Overlapping placements all qualify independently; nothing is merged or
/// deduplicated. Scanning stops once `cap` matches have been collected.
pub(crate) fn scan_all(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    region: SearchRegion,
    variance: u8,
    cap: usize,
) -> Vec<Match> {
    let mut matches = Vec::new();
    if cap == 0 || !region.fits(needle.width(), needle.height()) {
        return matches;
    }
    let last_x = region.x + region.width - needle.width();
    let last_y = region.y + region.height - needle.height();

    for oy in region.y..=last_y {
        for ox in region.x..=last_x {
            if needle_matches_at(haystack, needle, ox, oy, variance) {
                matches.push(Match { x: ox, y: oy });
                if matches.len() == cap {
                    return matches;
                }
            }
        }
    }
    matches
}
