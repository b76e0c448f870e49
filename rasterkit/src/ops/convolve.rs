use crate::canvas::{Channel, Image, ImageBuf, ImageMut, Rgb};
use crate::error::{Error, Result};
use crate::mask::Mask;

/// Apply `mask` to the gray value of every pixel's neighbourhood, producing a gray image of the
/// same size.
///
/// Neighbours that fall outside the image are left out of both the weighted sum and, when
/// `average` is set, the sum of weights it is divided by. With `average` the result is the
/// weighted sum floor-divided by the weights actually used; without it the weighted sum is used
/// as is. Either way the value is clamped into `0..=255`.
///
/// A pixel whose used weights sum to zero cannot be averaged and fails with
/// [`Error::ZeroDenominator`]. A weighted sum that does not fit in an `i64` fails with
/// [`Error::Overflow`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(width = src.width(), height = src.height(), mask = mask.size(), average = average)
)]
pub fn apply_mask<I: Image + ?Sized>(src: &I, mask: &Mask, average: bool) -> Result<ImageBuf> {
    let (width, height) = src.dimensions();
    let mut dst = ImageBuf::new(width, height, src.storage_kind())?;
    let radius = mask.radius() as isize;
    for row in 0..height {
        for col in 0..width {
            let mut sum: i64 = 0;
            let mut weight_sum: i64 = 0;
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    if !src.in_bounds(r, c) {
                        continue;
                    }
                    let weight = mask.weight(dr, dc).map(i64::from).ok_or_else(|| {
                        Error::invalid_mask(format!("no weight at offset ({dr}, {dc})"))
                    })?;
                    let overflow = || Error::Overflow { row, col };
                    let term = src
                        .get_pixel(r, c)?
                        .gray()
                        .checked_mul(weight)
                        .ok_or_else(overflow)?;
                    sum = sum.checked_add(term).ok_or_else(overflow)?;
                    weight_sum = weight_sum.checked_add(weight).ok_or_else(overflow)?;
                }
            }
            let value = if average {
                if weight_sum == 0 {
                    return Err(Error::ZeroDenominator { row, col });
                }
                floor_div(sum, weight_sum).ok_or(Error::Overflow { row, col })?
            } else {
                sum
            };
            let value = num_traits::clamp(value, 0, 255) as Channel;
            dst.set_pixel(row, col, Rgb::splat(value))?;
        }
    }
    Ok(dst)
}

/// Integer division rounding towards negative infinity, `None` if `b` is zero or the quotient
/// does not fit.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Some(q - 1)
    } else {
        Some(q)
    }
}
