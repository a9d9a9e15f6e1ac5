//! Bitmatch is a pixel-exact bitmap search library for visual automation.
//!
//! It locates a smaller needle bitmap inside a larger haystack bitmap with
//! per-channel variance tolerance, an optional search sub-rectangle, and
//! alpha-aware comparison: fully transparent needle pixels match anything,
//! so needles can mask out irrelevant regions. Matching is synchronous and
//! allocation-free on the scan path, with optional row parallelism via the
//! `rayon` feature and optional image decoding via `image-io`.

mod compare;
pub mod image;
pub mod region;
pub mod search;
mod trace;
pub mod util;

pub use image::{Channels, PixelBuffer};
#[cfg(feature = "image-io")]
pub use image::io;
pub use region::{resolve_region, SearchRegion};
pub use search::{find_all_bitmap, find_bitmap, Match, SearchOptions};
pub use util::{BitmatchError, BitmatchResult};
