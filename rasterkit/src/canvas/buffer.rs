use crate::canvas::{Image, ImageMut, Rgb};
use crate::error::{Error, Result};
use crate::seq::{Pixels, Sequence, Storage, StorageKind};

/// An owned image: fixed `(width, height)` and one [`Storage`] of `width * height` pixels.
#[derive(Debug, Clone)]
pub struct ImageBuf {
    width: usize,
    height: usize,
    pixels: Storage,
}

impl ImageBuf {
    /// A black image.
    pub fn new(width: usize, height: usize, kind: StorageKind) -> Result<Self> {
        Self::from_pixel(width, height, Rgb::BLACK, kind)
    }

    /// An image with every pixel set to `pixel`.
    pub fn from_pixel(width: usize, height: usize, pixel: Rgb, kind: StorageKind) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: Storage::filled(kind, len, pixel),
        })
    }

    /// An image initialised from `pixels` in row-major scan order. Exactly `width * height`
    /// pixels must be supplied.
    pub fn from_pixels<I>(width: usize, height: usize, pixels: I, kind: StorageKind) -> Result<Self>
    where
        I: IntoIterator<Item = Rgb>,
    {
        let expected = pixel_count(width, height)?;
        let pixels = Storage::from_pixels(kind, pixels);
        if pixels.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy an 8-bit RGB image decoded by the `image` crate.
    pub fn from_rgb8(image: &image::RgbImage, kind: StorageKind) -> Result<Self> {
        Self::from_pixels(
            image.width() as usize,
            image.height() as usize,
            image.pixels().map(|&p| Rgb::from(p)),
            kind,
        )
    }

    /// Copy into an 8-bit RGB `image::RgbImage`, clamping channels into `0..=255`.
    pub fn to_rgb8(&self) -> image::RgbImage {
        let mut image = image::RgbImage::new(self.width as u32, self.height as u32);
        for (dst, src) in image.pixels_mut().zip(self.pixels()) {
            *dst = src.into();
        }
        image
    }

    /// Index into the backing storage of the pixel at `(row, col)`.
    #[inline]
    pub fn pixel_index(&self, row: usize, col: usize) -> Result<usize> {
        if self.in_bounds(row, col) {
            Ok(row * self.width + col)
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }

    /// Iterate over every pixel in row-major order.
    pub fn pixels(&self) -> Pixels<'_> {
        self.pixels.iter()
    }

    pub fn storage(&self) -> &Storage {
        &self.pixels
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(Error::InvalidDimensions { width, height }),
    }
}

impl Image for ImageBuf {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn storage_kind(&self) -> StorageKind {
        self.pixels.kind()
    }

    fn get_pixel(&self, row: usize, col: usize) -> Result<Rgb> {
        self.pixels.get(self.pixel_index(row, col)?)
    }
}

impl ImageMut for ImageBuf {
    fn set_pixel(&mut self, row: usize, col: usize, pixel: Rgb) -> Result<()> {
        let index = self.pixel_index(row, col)?;
        self.pixels.set(index, pixel)
    }
}

impl PartialEq for ImageBuf {
    /// Images are equal when they have the same dimensions and pixels, whatever their storage.
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.pixels().eq(other.pixels())
    }
}

impl Eq for ImageBuf {}

impl<'a> IntoIterator for &'a ImageBuf {
    type Item = Rgb;
    type IntoIter = Pixels<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels()
    }
}
