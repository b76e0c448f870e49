use std::ops::{Deref, DerefMut};

use crate::canvas::{Image, ImageMut, Rgb};
use crate::error::{Error, Result};
use crate::seq::StorageKind;

/// A rectangular window onto another image. Coordinates are relative to the window's top-left
/// corner, and accesses outside the window fail even where the parent image has pixels.
pub struct ImageView<I> {
    image: I,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl<I> ImageView<I>
where
    I: Deref,
    I::Target: Image,
{
    /// Create a new `ImageView` wrapping around `image`. The window must lie entirely within the
    /// area of `image`.
    pub fn new(image: I, left: usize, top: usize, width: usize, height: usize) -> Result<Self> {
        let fits = |offset: usize, extent: usize, limit: usize| {
            offset.checked_add(extent).is_some_and(|end| end <= limit)
        };
        if !fits(left, width, image.width()) || !fits(top, height, image.height()) {
            return Err(Error::ViewOutOfBounds {
                left,
                top,
                view_width: width,
                view_height: height,
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self {
            image,
            left,
            top,
            width,
            height,
        })
    }

    /// Translate view coordinates to parent coordinates.
    fn parent_coords(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        if self.in_bounds(row, col) {
            Ok((row + self.top, col + self.left))
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }
}

impl<I> Image for ImageView<I>
where
    I: Deref,
    I::Target: Image,
{
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn storage_kind(&self) -> StorageKind {
        self.image.storage_kind()
    }

    fn get_pixel(&self, row: usize, col: usize) -> Result<Rgb> {
        let (row, col) = self.parent_coords(row, col)?;
        self.image.get_pixel(row, col)
    }
}

impl<I> ImageMut for ImageView<I>
where
    I: DerefMut,
    I::Target: ImageMut,
{
    fn set_pixel(&mut self, row: usize, col: usize, pixel: Rgb) -> Result<()> {
        let (row, col) = self.parent_coords(row, col)?;
        self.image.set_pixel(row, col, pixel)
    }
}
