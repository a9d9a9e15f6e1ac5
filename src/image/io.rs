//! Decoding helpers for building pixel buffers via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoded images are
//! normalized to RGBA8, matching what screenshot tooling hands the matcher.
//!
//! Byte and base64 inputs fail soft: automation callers feed untrusted
//! clipboard or script data here and expect `None`, not an error path.

use crate::image::{Channels, PixelBuffer};
use crate::util::{BitmatchError, BitmatchResult};
use base64::Engine;
use std::path::Path;

/// Creates an RGBA pixel buffer from an `image` crate RGBA buffer.
pub fn bitmap_from_rgba_image(img: &image::RgbaImage) -> BitmatchResult<PixelBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::new(img.as_raw().clone(), width, height, Channels::Rgba)
}

/// Decodes encoded image bytes (PNG, JPEG) into an RGBA pixel buffer.
///
/// Returns `None` for malformed or unsupported input.
pub fn bitmap_from_bytes(bytes: &[u8]) -> Option<PixelBuffer> {
    let img = image::load_from_memory(bytes).ok()?;
    let rgba = img.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    PixelBuffer::new(rgba.into_raw(), width, height, Channels::Rgba).ok()
}

/// Decodes a base64-encoded image string into an RGBA pixel buffer.
///
/// Returns `None` when the string is not valid base64 or does not decode
/// to a supported image.
pub fn bitmap_from_base64(encoded: &str) -> Option<PixelBuffer> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    bitmap_from_bytes(&bytes)
}

/// Loads an image from disk and converts it to an RGBA pixel buffer.
pub fn load_bitmap<P: AsRef<Path>>(path: P) -> BitmatchResult<PixelBuffer> {
    let img = image::open(path).map_err(|err| BitmatchError::Decode {
        reason: err.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    PixelBuffer::new(rgba.into_raw(), width, height, Channels::Rgba)
}
