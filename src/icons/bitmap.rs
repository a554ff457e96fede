use std::fmt;

use image::{DynamicImage, RgbaImage};

use crate::{core::constants::BYTES_PER_PIXEL, IconError, Result};

/// Premultiplied RGBA8 pixel buffer, row-major, top row first.
///
/// This is the layout the native renderer expects for annotation icons, so
/// [`Bitmap::to_bytes`] hands the buffer over without conversion.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    pixels: RgbaImage,
}

impl Bitmap {
    /// Wrap an already premultiplied RGBA8 buffer
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(IconError::InvalidBitmap(format!(
                "bitmap must not be empty ({}x{})",
                width, height
            )));
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(IconError::InvalidBitmap(format!(
                "{}x{} bitmap needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        let pixels = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            IconError::InvalidBitmap(format!("could not wrap {}x{} buffer", width, height))
        })?;
        Ok(Self { pixels })
    }

    /// Fully transparent bitmap
    pub fn transparent(width: u32, height: u32) -> Result<Self> {
        Self::from_rgba8(
            width,
            height,
            vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        )
    }

    /// Convert a decoded image, premultiplying straight alpha
    pub fn from_image(image: DynamicImage) -> Result<Self> {
        let mut rgba = image.to_rgba8();
        for pixel in rgba.pixels_mut() {
            let alpha = pixel[3] as u16;
            for channel in &mut pixel.0[..3] {
                *channel = ((*channel as u16 * alpha + 127) / 255) as u8;
            }
        }
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Decode an encoded asset (PNG)
    pub fn decode(data: &[u8]) -> Result<Self> {
        Self::from_image(image::load_from_memory(data)?)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn byte_count(&self) -> usize {
        self.pixels.as_raw().len()
    }

    /// Raw pixel payload as sent to the renderer
    pub fn to_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Pixel equality: same dimensions and identical bytes
    pub fn same_as(&self, other: &Bitmap) -> bool {
        self == other
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.pixels.get_pixel(x, y).0)
        } else {
            None
        }
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
