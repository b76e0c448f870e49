mod buffer;
mod paste;
mod pixel;
mod view;

pub use buffer::ImageBuf;
pub use paste::paste;
pub use pixel::*;
pub use view::ImageView;

use crate::error::{Error, Result};
use crate::seq::StorageKind;

/// Read access to a grid of [`Rgb`] pixels addressed by `(row, col)`, row-major, with row as the
/// slower-varying coordinate.
pub trait Image {
    /// Width of the image in pixels.
    fn width(&self) -> usize;

    /// Height of the image in pixels.
    fn height(&self) -> usize;

    /// `(width, height)`.
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Is `(row, col)` within the bounds of the image?
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width()
    }

    /// Container variant holding the pixels. Transforms allocate their output with the same kind.
    fn storage_kind(&self) -> StorageKind;

    /// Get the pixel at `(row, col)`, failing with [`Error::CoordsOutOfBounds`] outside the
    /// image.
    fn get_pixel(&self, row: usize, col: usize) -> Result<Rgb>;

    /// Get a view of the `width` by `height` area whose top-left corner is at `(top, left)`. The
    /// area must lie entirely inside the image.
    fn view(&self, left: usize, top: usize, width: usize, height: usize) -> Result<ImageView<&Self>> {
        ImageView::new(self, left, top, width, height)
    }

    /// Error describing an access to `(row, col)`.
    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::CoordsOutOfBounds {
            row,
            col,
            width: self.width(),
            height: self.height(),
        }
    }
}

pub trait ImageMut: Image {
    /// Write the pixel at `(row, col)`, with the same bounds contract as [`Image::get_pixel()`].
    fn set_pixel(&mut self, row: usize, col: usize, pixel: Rgb) -> Result<()>;

    /// As [`Image::view()`], but mutable.
    fn view_mut(
        &mut self,
        left: usize,
        top: usize,
        width: usize,
        height: usize,
    ) -> Result<ImageView<&mut Self>> {
        ImageView::new(self, left, top, width, height)
    }
}
