//! Search region resolution.
//!
//! Callers describe where to look with optional, possibly sloppy bounds:
//! negative origins, widths reaching past the haystack edge, or no bounds at
//! all. Resolution clamps everything into the haystack rectangle up front so
//! the scan loops never bounds-check. Clamping instead of rejecting is a
//! deliberate soft-failure contract: automation scripts treat a bad region
//! like an empty one, not like a crash.

use crate::search::SearchOptions;

/// Resolved scan rectangle, fully contained in the haystack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRegion {
    /// Left edge in haystack coordinates.
    pub x: usize,
    /// Top edge in haystack coordinates.
    pub y: usize,
    /// Width in pixels; may be zero, and may be smaller than the needle.
    pub width: usize,
    /// Height in pixels; may be zero, and may be smaller than the needle.
    pub height: usize,
}

impl SearchRegion {
    /// Returns true when a needle of the given size fits inside the region.
    #[inline]
    pub fn fits(&self, needle_width: usize, needle_height: usize) -> bool {
        self.width >= needle_width && self.height >= needle_height
    }
}

/// Clamps the options' region fields into the haystack rectangle.
///
/// Defaults per field: `x = 0`, `y = 0`, `width`/`height` extend to the
/// haystack edge from the resolved origin. Negative origins clamp to zero,
/// origins past the edge clamp onto it (leaving a zero-sized region), and
/// width/height are trimmed so the rectangle never extends past the buffer.
pub fn resolve_region(
    haystack_width: usize,
    haystack_height: usize,
    options: &SearchOptions,
) -> SearchRegion {
    let x = clamp_coord(options.x, haystack_width);
    let y = clamp_coord(options.y, haystack_height);
    let width = clamp_extent(options.width, x, haystack_width);
    let height = clamp_extent(options.height, y, haystack_height);
    SearchRegion {
        x,
        y,
        width,
        height,
    }
}

#[inline]
fn clamp_coord(value: i64, limit: usize) -> usize {
    if value <= 0 {
        return 0;
    }
    (value as u64).min(limit as u64) as usize
}

#[inline]
fn clamp_extent(requested: Option<i64>, origin: usize, limit: usize) -> usize {
    let available = limit - origin;
    match requested {
        None => available,
        Some(v) if v <= 0 => 0,
        Some(v) => (v as u64).min(available as u64) as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchOptions;

    fn opts(x: i64, y: i64, w: Option<i64>, h: Option<i64>) -> SearchOptions {
        SearchOptions {
            x,
            y,
            width: w,
            height: h,
            ..SearchOptions::default()
        }
    }

    #[test]
    fn defaults_cover_full_haystack() {
        let region = resolve_region(640, 480, &SearchOptions::default());
        assert_eq!(
            region,
            SearchRegion {
                x: 0,
                y: 0,
                width: 640,
                height: 480,
            }
        );
    }

    #[test]
    fn negative_origin_clamps_to_zero() {
        let region = resolve_region(100, 100, &opts(-5, -20, Some(50), Some(50)));
        assert_eq!(
            region,
            SearchRegion {
                x: 0,
                y: 0,
                width: 50,
                height: 50,
            }
        );
    }

    #[test]
    fn oversized_extent_trims_to_edge() {
        let region = resolve_region(100, 100, &opts(90, 95, Some(50), Some(50)));
        assert_eq!(
            region,
            SearchRegion {
                x: 90,
                y: 95,
                width: 10,
                height: 5,
            }
        );
    }

    #[test]
    fn origin_past_edge_yields_empty_region() {
        let region = resolve_region(100, 100, &opts(200, 300, None, None));
        assert_eq!(
            region,
            SearchRegion {
                x: 100,
                y: 100,
                width: 0,
                height: 0,
            }
        );
    }

    #[test]
    fn negative_extent_yields_empty_region() {
        let region = resolve_region(100, 100, &opts(10, 10, Some(-3), Some(0)));
        assert_eq!(region.width, 0);
        assert_eq!(region.height, 0);
        assert!(!region.fits(1, 1));
    }

    #[test]
    fn fits_requires_both_axes() {
        let region = SearchRegion {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        assert!(region.fits(4, 2));
        assert!(!region.fits(5, 2));
        assert!(!region.fits(4, 3));
    }
}
