use std::iter::FusedIterator;
use std::slice::ChunksExact;

use crate::canvas::{Channel, Rgb};
use crate::error::Result;
use crate::seq::Sequence;

/// Pixel sequence backed by one contiguous channel buffer; slot `i` lives at `[3i, 3i + 3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatSeq {
    len: usize,
    data: Vec<Channel>,
}

impl FlatSeq {
    /// `len` black pixels.
    pub fn new(len: usize) -> Self {
        Self::filled(len, Rgb::BLACK)
    }

    pub fn filled(len: usize, pixel: Rgb) -> Self {
        let mut data = Vec::with_capacity(len * Rgb::CHANNELS);
        for _ in 0..len {
            data.extend_from_slice(&pixel);
        }
        Self { len, data }
    }

    pub fn from_pixels<I: IntoIterator<Item = Rgb>>(pixels: I) -> Self {
        let pixels = pixels.into_iter();
        let mut data = Vec::with_capacity(pixels.size_hint().0 * Rgb::CHANNELS);
        for pixel in pixels {
            data.extend_from_slice(&pixel);
        }
        Self {
            len: data.len() / Rgb::CHANNELS,
            data,
        }
    }

    /// The raw channel buffer, `3 * len()` values long.
    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> FlatIter<'_> {
        FlatIter {
            chunks: self.data.chunks_exact(Rgb::CHANNELS),
        }
    }
}

impl Sequence for FlatSeq {
    type Item = Rgb;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Rgb> {
        self.check_index(index)?;
        let i = index * Rgb::CHANNELS;
        Ok(Rgb([self.data[i], self.data[i + 1], self.data[i + 2]]))
    }

    #[inline]
    fn set(&mut self, index: usize, value: Rgb) -> Result<()> {
        self.check_index(index)?;
        let i = index * Rgb::CHANNELS;
        self.data[i..i + Rgb::CHANNELS].copy_from_slice(&value);
        Ok(())
    }
}

/// Pixel iterator over a [`FlatSeq`], one channel triple at a time.
#[derive(Clone, Debug)]
pub struct FlatIter<'a> {
    chunks: ChunksExact<'a, Channel>,
}

impl Iterator for FlatIter<'_> {
    type Item = Rgb;

    #[inline]
    fn next(&mut self) -> Option<Rgb> {
        self.chunks.next().map(|c| Rgb([c[0], c[1], c[2]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for FlatIter<'_> {}
impl FusedIterator for FlatIter<'_> {}
