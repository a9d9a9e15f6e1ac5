//! Per-pixel comparison.
//!
//! The comparator runs once per needle pixel per candidate origin and
//! dominates total scan time, so it is inlined and kept branch-minimal.

/// Decides whether one needle pixel matches one haystack pixel.
///
/// A fully transparent needle pixel (alpha 0) is a wildcard and matches any
/// haystack pixel; needles mask irrelevant areas this way. Otherwise each of
/// R, G, B must differ by at most `variance`, and the alpha channel joins
/// the comparison only when both buffers carry one.
///
/// `needle` and `haystack` are the channel bytes of a single pixel; slice
/// lengths follow the respective buffer's channel count.
#[inline(always)]
pub(crate) fn pixel_matches(
    needle: &[u8],
    haystack: &[u8],
    needle_alpha: bool,
    haystack_alpha: bool,
    variance: u8,
) -> bool {
    if needle_alpha && needle[3] == 0 {
        return true;
    }
    if needle[0].abs_diff(haystack[0]) > variance
        || needle[1].abs_diff(haystack[1]) > variance
        || needle[2].abs_diff(haystack[2]) > variance
    {
        return false;
    }
    if needle_alpha && haystack_alpha {
        return needle[3].abs_diff(haystack[3]) <= variance;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::pixel_matches;

    #[test]
    fn exact_match_at_zero_variance() {
        assert!(pixel_matches(
            &[10, 20, 30],
            &[10, 20, 30],
            false,
            false,
            0
        ));
        assert!(!pixel_matches(
            &[10, 20, 30],
            &[10, 21, 30],
            false,
            false,
            0
        ));
    }

    #[test]
    fn variance_bounds_each_channel_independently() {
        assert!(pixel_matches(&[10, 20, 30], &[15, 15, 35], false, false, 5));
        // One channel over the tolerance fails the whole pixel.
        assert!(!pixel_matches(
            &[10, 20, 30],
            &[16, 20, 30],
            false,
            false,
            5
        ));
        assert!(pixel_matches(&[0, 0, 0], &[255, 255, 255], false, false, 255));
    }

    #[test]
    fn transparent_needle_pixel_is_wildcard() {
        assert!(pixel_matches(&[1, 2, 3, 0], &[200, 200, 200, 255], true, true, 0));
        assert!(pixel_matches(&[1, 2, 3, 0], &[200, 200, 200], true, false, 0));
        // Alpha 1 is not transparent; RGB must match.
        assert!(!pixel_matches(
            &[1, 2, 3, 1],
            &[200, 200, 200, 1],
            true,
            true,
            0
        ));
    }

    #[test]
    fn alpha_compared_only_when_both_sides_have_it() {
        // Both RGBA: alpha difference counts.
        assert!(!pixel_matches(&[1, 2, 3, 255], &[1, 2, 3, 250], true, true, 0));
        assert!(pixel_matches(&[1, 2, 3, 255], &[1, 2, 3, 250], true, true, 5));
        // RGBA needle over RGB haystack: alpha ignored.
        assert!(pixel_matches(&[1, 2, 3, 255], &[1, 2, 3], true, false, 0));
        // RGB needle over RGBA haystack: alpha ignored.
        assert!(pixel_matches(&[1, 2, 3], &[1, 2, 3, 7], false, true, 0));
    }
}
