use std::str::FromStr;

use crate::error::{Error, Result};

/// A square matrix of integer weights with an odd side length, centred on `(size / 2, size / 2)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mask {
    size: usize,
    weights: Vec<i32>,
}

impl Mask {
    /// Create a mask from its side length and `size * size` weights in row-major order.
    pub fn new(size: usize, weights: Vec<i32>) -> Result<Self> {
        if size % 2 == 0 {
            return Err(Error::invalid_mask(format!(
                "side length must be odd, got {size}"
            )));
        }
        if weights.len() != size * size {
            return Err(Error::invalid_mask(format!(
                "expected {} weights for a {size}x{size} mask, got {}",
                size * size,
                weights.len()
            )));
        }
        Ok(Self { size, weights })
    }

    /// Create a mask from a flat list of values: the side length followed by the weights.
    pub fn from_values(values: &[i32]) -> Result<Self> {
        let Some((&size, weights)) = values.split_first() else {
            return Err(Error::invalid_mask("no side length"));
        };
        let size = usize::try_from(size)
            .map_err(|_| Error::invalid_mask(format!("negative side length {size}")))?;
        Self::new(size, weights.to_vec())
    }

    /// A mask of the given side length with every weight set to 1.
    pub fn uniform(size: usize) -> Result<Self> {
        Self::new(size, vec![1; size * size])
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the centre to the edge, i.e. `size / 2`.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight applied to the neighbour at offset `(dr, dc)` from the centre, or `None` if either
    /// offset lies outside `-radius..=radius`.
    #[inline]
    pub fn weight(&self, dr: isize, dc: isize) -> Option<i32> {
        let radius = self.radius();
        let row = radius.checked_add_signed(dr).filter(|&row| row < self.size)?;
        let col = radius.checked_add_signed(dc).filter(|&col| col < self.size)?;
        Some(self.weights[row * self.size + col])
    }

    pub fn weights(&self) -> &[i32] {
        &self.weights
    }
}

impl FromStr for Mask {
    type Err = Error;

    /// Parse the mask text format: the side length on the first line, then one weight per line.
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| {
                line.parse::<i32>().map_err(|err| {
                    Error::invalid_mask(format!("line {}: {line:?}: {err}", i + 1))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_values(&values)
    }
}
