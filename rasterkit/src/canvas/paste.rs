use crate::canvas::{Image, ImageMut};
use crate::error::{Error, Result};

/// Copy every pixel of `src` onto `dst`, which must have the same dimensions. Paste into a region
/// of a larger image by passing an [`ImageMut::view_mut()`] of it.
pub fn paste<S, D>(dst: &mut D, src: &S) -> Result<()>
where
    S: Image + ?Sized,
    D: ImageMut + ?Sized,
{
    if src.dimensions() != dst.dimensions() {
        return Err(Error::DimensionMismatch {
            expected_width: dst.width(),
            expected_height: dst.height(),
            width: src.width(),
            height: src.height(),
        });
    }
    for row in 0..src.height() {
        for col in 0..src.width() {
            dst.set_pixel(row, col, src.get_pixel(row, col)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{ImageBuf, Rgb};
    use crate::seq::StorageKind;

    #[test]
    fn test_paste_at_offset() {
        let bg = Rgb::splat(127);
        let fg = Rgb::splat(1);
        let mut buf = ImageBuf::from_pixel(8, 6, bg, StorageKind::Flat).unwrap();
        let other = ImageBuf::from_pixel(2, 3, fg, StorageKind::Linked).unwrap();
        paste(&mut buf.view_mut(1, 2, 2, 3).unwrap(), &other).unwrap();
        for row in 0..buf.height() {
            for col in 0..buf.width() {
                let expected = if (2..5).contains(&row) && (1..3).contains(&col) {
                    fg
                } else {
                    bg
                };
                assert_eq!(buf.get_pixel(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_paste_size_mismatch() {
        let mut buf = ImageBuf::new(4, 4, StorageKind::Flat).unwrap();
        let other = ImageBuf::from_pixel(2, 3, Rgb::splat(9), StorageKind::Flat).unwrap();
        assert!(matches!(
            paste(&mut buf, &other),
            Err(Error::DimensionMismatch {
                expected_width: 4,
                expected_height: 4,
                width: 2,
                height: 3
            })
        ));
        assert!(buf.pixels().all(|p| p == Rgb::BLACK));
    }

    #[test]
    fn test_paste_transposed_reports_dimensions() {
        // Same pixel count, different shape
        let mut buf = ImageBuf::new(3, 2, StorageKind::Linked).unwrap();
        let other = ImageBuf::from_pixel(2, 3, Rgb::splat(9), StorageKind::Flat).unwrap();
        let err = paste(&mut buf, &other).unwrap_err();
        assert_eq!(err.to_string(), "expected an image of size 3x2, got 2x3");
        assert!(buf.pixels().all(|p| p == Rgb::BLACK));
    }
}
