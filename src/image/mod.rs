//! Owned pixel buffers.
//!
//! `PixelBuffer` is an immutable, row-major byte store with a top-left
//! origin and either three (RGB) or four (RGBA) channels per pixel. Rows are
//! always contiguous; there is no stride or padding. Buffers are created
//! once, by a decoder or by the caller, and only ever read during matching,
//! so sharing one buffer across concurrent scans needs no synchronization.

use crate::util::{BitmatchError, BitmatchResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Per-pixel channel layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channels {
    /// Three bytes per pixel: red, green, blue.
    Rgb,
    /// Four bytes per pixel: red, green, blue, alpha.
    Rgba,
}

impl Channels {
    /// Returns the number of bytes per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }

    /// Returns true when the layout carries an alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, Channels::Rgba)
    }
}

/// Owned, immutable row-major pixel store.
#[derive(Debug)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: Channels,
}

impl PixelBuffer {
    /// Creates a buffer from raw bytes.
    ///
    /// `data` must hold exactly `width * height * channels.count()` bytes.
    /// A slack tail is rejected rather than ignored so decoder bugs surface
    /// here instead of as silently shifted pixels.
    pub fn new(
        data: Vec<u8>,
        width: usize,
        height: usize,
        channels: Channels,
    ) -> BitmatchResult<Self> {
        if width == 0 || height == 0 {
            return Err(BitmatchError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels.count()))
            .ok_or(BitmatchError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(BitmatchError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Returns the backing bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the byte stride between row starts.
    #[inline]
    pub(crate) fn byte_stride(&self) -> usize {
        self.width * self.channels.count()
    }

    /// Returns the channel bytes of the pixel at `(x, y)` if in bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.channels.count();
        let start = (y * self.width + x) * bpp;
        self.data.get(start..start + bpp)
    }

    /// Returns the contiguous bytes of row `y`.
    ///
    /// Panics if `y >= height`; scan loops only ever pass resolved
    /// in-bounds rows.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let stride = self.byte_stride();
        let start = y * stride;
        &self.data[start..start + stride]
    }
}
