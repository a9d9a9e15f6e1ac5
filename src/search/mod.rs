//! Bitmap search API.
//!
//! `find_bitmap` and `find_all_bitmap` compose region resolution, the pixel
//! comparator, and the origin scanners. Absence of a match and an unusable
//! region are normal outcomes (`None` / empty vector), never errors;
//! automation callers poll for UI elements that are frequently not on
//! screen.

use crate::image::PixelBuffer;
use crate::region::resolve_region;
use crate::trace::{scan_event, scan_span};

#[cfg(feature = "rayon")]
pub(crate) mod rayon;
pub(crate) mod scan;

/// Top-left placement of the needle within the haystack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Column of the placement.
    pub x: usize,
    /// Row of the placement.
    pub y: usize,
}

/// Search configuration with per-field defaults.
///
/// This replaces the optional positional parameters of the automation
/// interface: every field has a documented default and unset bounds mean
/// "to the haystack edge". Out-of-range values are clamped during
/// resolution, never rejected.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    /// Left edge of the search region. Default `0`; negatives clamp to `0`.
    pub x: i64,
    /// Top edge of the search region. Default `0`; negatives clamp to `0`.
    pub y: i64,
    /// Region width. Default `None`, meaning up to the right haystack edge.
    pub width: Option<i64>,
    /// Region height. Default `None`, meaning up to the bottom haystack edge.
    pub height: Option<i64>,
    /// Per-channel tolerance, clamped to `[0, 255]`. Default `0` (exact).
    pub variance: i32,
    /// Cap on results for [`find_all_bitmap`]. Negative means unbounded,
    /// `0` means an empty result. Default `-1`.
    pub max_matches: i64,
    /// Scan row bands in parallel. Only effective with the `rayon` feature;
    /// results are identical either way. Default `false`.
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: None,
            height: None,
            variance: 0,
            max_matches: -1,
            parallel: false,
        }
    }
}

impl SearchOptions {
    #[inline]
    fn clamped_variance(&self) -> u8 {
        self.variance.clamp(0, 255) as u8
    }

    #[inline]
    fn cap(&self) -> usize {
        if self.max_matches < 0 {
            usize::MAX
        } else {
            self.max_matches as usize
        }
    }
}

/// Finds the first placement of `needle` inside `haystack`.
///
/// "First" is the earliest fully matching origin in row-major `(y, x)`
/// order, which makes the result deterministic when several placements
/// qualify. Returns `None` when nothing matches or the resolved region
/// cannot contain the needle.
pub fn find_bitmap(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    options: &SearchOptions,
) -> Option<Match> {
    let region = resolve_region(haystack.width(), haystack.height(), options);
    let variance = options.clamped_variance();
    let _span = scan_span!(
        "find_bitmap",
        region_w = region.width,
        region_h = region.height,
        variance = variance
    )
    .entered();

    let result = run_first(haystack, needle, region, variance, options.parallel);
    scan_event!("find_bitmap_done", found = result.is_some());
    result
}

/// Finds every placement of `needle` inside `haystack`.
///
/// Matches are reported in row-major discovery order; overlapping
/// placements are all reported independently. `options.max_matches` caps
/// the result (`-1` for unbounded), and scanning halts as soon as the cap
/// is reached.
pub fn find_all_bitmap(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    options: &SearchOptions,
) -> Vec<Match> {
    let region = resolve_region(haystack.width(), haystack.height(), options);
    let variance = options.clamped_variance();
    let cap = options.cap();
    let _span = scan_span!(
        "find_all_bitmap",
        region_w = region.width,
        region_h = region.height,
        variance = variance
    )
    .entered();

    let matches = run_all(haystack, needle, region, variance, cap, options.parallel);
    scan_event!("find_all_bitmap_done", count = matches.len());
    matches
}

#[cfg(feature = "rayon")]
fn run_first(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    region: crate::region::SearchRegion,
    variance: u8,
    parallel: bool,
) -> Option<Match> {
    if parallel {
        rayon::scan_first_par(haystack, needle, region, variance)
    } else {
        scan::scan_first(haystack, needle, region, variance)
    }
}

#[cfg(not(feature = "rayon"))]
fn run_first(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    region: crate::region::SearchRegion,
    variance: u8,
    _parallel: bool,
) -> Option<Match> {
    scan::scan_first(haystack, needle, region, variance)
}

#[cfg(feature = "rayon")]
fn run_all(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    region: crate::region::SearchRegion,
    variance: u8,
    cap: usize,
    parallel: bool,
) -> Vec<Match> {
    if parallel {
        rayon::scan_all_par(haystack, needle, region, variance, cap)
    } else {
        scan::scan_all(haystack, needle, region, variance, cap)
    }
}

#[cfg(not(feature = "rayon"))]
fn run_all(
    haystack: &PixelBuffer,
    needle: &PixelBuffer,
    region: crate::region::SearchRegion,
    variance: u8,
    cap: usize,
    _parallel: bool,
) -> Vec<Match> {
    scan::scan_all(haystack, needle, region, variance, cap)
}
