//! Fixed-capacity, index-addressable containers used as pixel storage.
//!
//! Two containers share the [`Sequence`] contract: [`FlatSeq`] keeps every channel in one
//! contiguous buffer and answers `get`/`set` in constant time, while [`LinkedSeq`] keeps a chain
//! of boxed nodes and has to walk from the head on every access. [`Storage`] picks one of them
//! once, when an image is created.

mod flat;
mod linked;

use std::iter::FusedIterator;

pub use flat::{FlatIter, FlatSeq};
pub use linked::{LinkedIter, LinkedSeq};

use crate::canvas::Rgb;
use crate::error::{Error, Result};

pub trait Sequence {
    type Item: Copy;

    /// Number of slots, fixed when the container was created.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value at `index`, failing with [`Error::IndexOutOfBounds`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item>;

    /// Overwrite the value at `index`, with the same bounds contract as [`Sequence::get()`].
    fn set(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Check `index` against the length of the container.
    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}

/// Which container backs an image.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    serde::Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    #[display("flat")]
    Flat,
    #[display("linked")]
    Linked,
}

/// Pixel storage, fixed to one container variant for its whole lifetime.
#[derive(Debug, Clone)]
pub enum Storage {
    Flat(FlatSeq),
    Linked(LinkedSeq<Rgb>),
}

impl Storage {
    /// Allocate `len` pixels of `kind`, each set to `initial`.
    pub fn filled(kind: StorageKind, len: usize, initial: Rgb) -> Self {
        match kind {
            StorageKind::Flat => Storage::Flat(FlatSeq::filled(len, initial)),
            StorageKind::Linked => Storage::Linked(LinkedSeq::filled(len, initial)),
        }
    }

    /// Allocate storage of `kind` holding exactly the pixels yielded by `pixels`, in order.
    pub fn from_pixels<I: IntoIterator<Item = Rgb>>(kind: StorageKind, pixels: I) -> Self {
        match kind {
            StorageKind::Flat => Storage::Flat(FlatSeq::from_pixels(pixels)),
            StorageKind::Linked => Storage::Linked(pixels.into_iter().collect()),
        }
    }

    pub fn kind(&self) -> StorageKind {
        match self {
            Storage::Flat(_) => StorageKind::Flat,
            Storage::Linked(_) => StorageKind::Linked,
        }
    }

    pub fn iter(&self) -> Pixels<'_> {
        match self {
            Storage::Flat(seq) => Pixels::Flat(seq.iter()),
            Storage::Linked(seq) => Pixels::Linked(seq.iter()),
        }
    }
}

impl Sequence for Storage {
    type Item = Rgb;

    fn len(&self) -> usize {
        match self {
            Storage::Flat(seq) => seq.len(),
            Storage::Linked(seq) => seq.len(),
        }
    }

    fn get(&self, index: usize) -> Result<Rgb> {
        match self {
            Storage::Flat(seq) => seq.get(index),
            Storage::Linked(seq) => seq.get(index),
        }
    }

    fn set(&mut self, index: usize, value: Rgb) -> Result<()> {
        match self {
            Storage::Flat(seq) => seq.set(index, value),
            Storage::Linked(seq) => seq.set(index, value),
        }
    }
}

impl<'a> IntoIterator for &'a Storage {
    type Item = Rgb;
    type IntoIter = Pixels<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major pixel iterator over a [`Storage`].
pub enum Pixels<'a> {
    Flat(FlatIter<'a>),
    Linked(LinkedIter<'a, Rgb>),
}

impl Iterator for Pixels<'_> {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        match self {
            Pixels::Flat(iter) => iter.next(),
            Pixels::Linked(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Pixels::Flat(iter) => iter.size_hint(),
            Pixels::Linked(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Pixels<'_> {}
impl FusedIterator for Pixels<'_> {}
