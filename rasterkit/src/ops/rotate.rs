use crate::canvas::{Image, ImageBuf, ImageMut, paste};
use crate::error::{Error, Result};

/// Rotate `src` by a quarter turn, moving its top-right corner to the top-left: the pixel at
/// `(row, col)` lands on `(width - 1 - col, row)` of a `height` by `width` output.
pub fn rotate_quarter<I: Image + ?Sized>(src: &I) -> Result<ImageBuf> {
    let (width, height) = src.dimensions();
    let mut dst = ImageBuf::new(height, width, src.storage_kind())?;
    for row in 0..height {
        for col in 0..width {
            dst.set_pixel(width - 1 - col, row, src.get_pixel(row, col)?)?;
        }
    }
    Ok(dst)
}

/// Build an image twice the size of `src` holding four successive quarter turns of it: the first
/// turn top-left, the second bottom-left, the third bottom-right and the fourth (the original
/// orientation) top-right. `src` must be square.
#[tracing::instrument(level = "debug", skip_all, fields(width = src.width(), height = src.height()))]
pub fn rotations<I: Image + ?Sized>(src: &I) -> Result<ImageBuf> {
    let (width, height) = src.dimensions();
    if width != height {
        return Err(Error::NonSquare { width, height });
    }
    let mut mosaic = ImageBuf::new(width * 2, height * 2, src.storage_kind())?;
    // (left, top) of the quadrant receiving each successive turn
    let quadrants = [(0, 0), (0, height), (width, height), (width, 0)];
    let mut previous: Option<ImageBuf> = None;
    for (left, top) in quadrants {
        let turned = match &previous {
            None => rotate_quarter(src)?,
            Some(image) => rotate_quarter(image)?,
        };
        log::trace!("placing quarter turn at (left={left}, top={top})");
        paste(&mut mosaic.view_mut(left, top, width, height)?, &turned)?;
        previous = Some(turned);
    }
    Ok(mosaic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgb;
    use crate::seq::StorageKind;

    const KINDS: [StorageKind; 2] = [StorageKind::Flat, StorageKind::Linked];

    fn numbered(width: usize, height: usize, kind: StorageKind) -> ImageBuf {
        let pixels = (0..(width * height) as i32).map(|i| Rgb::new(i, i + 100, i + 200));
        ImageBuf::from_pixels(width, height, pixels, kind).unwrap()
    }

    fn quadrant(mosaic: &ImageBuf, left: usize, top: usize, size: usize) -> ImageBuf {
        let view = mosaic.view(left, top, size, size).unwrap();
        let pixels = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| view.get_pixel(row, col).unwrap())
            .collect::<Vec<_>>();
        ImageBuf::from_pixels(size, size, pixels, StorageKind::Flat).unwrap()
    }

    #[test]
    fn test_quarter_turn_formula() {
        for kind in KINDS {
            let src = numbered(3, 3, kind);
            let turned = rotate_quarter(&src).unwrap();
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(
                        turned.get_pixel(3 - 1 - col, row).unwrap(),
                        src.get_pixel(row, col).unwrap()
                    );
                }
            }
            // Top-right corner moves to the top-left
            assert_eq!(turned.get_pixel(0, 0).unwrap(), src.get_pixel(0, 2).unwrap());
        }
    }

    #[test]
    fn test_quarter_turn_non_square() {
        let src = numbered(3, 2, StorageKind::Flat);
        let turned = rotate_quarter(&src).unwrap();
        assert_eq!(turned.dimensions(), (2, 3));
        assert_eq!(turned.get_pixel(0, 0).unwrap(), src.get_pixel(0, 2).unwrap());
        assert_eq!(turned.get_pixel(2, 1).unwrap(), src.get_pixel(1, 0).unwrap());
    }

    #[test]
    fn test_four_turns_restore_original() {
        let src = numbered(4, 4, StorageKind::Linked);
        let mut image = src.clone();
        for _ in 0..4 {
            image = rotate_quarter(&image).unwrap();
        }
        assert_eq!(image, src);
    }

    #[test]
    fn test_marker_positions() {
        let marker = Rgb::new(255, 0, 0);
        let fill = Rgb::new(0, 0, 255);
        for kind in KINDS {
            let mut src = ImageBuf::from_pixel(2, 2, fill, kind).unwrap();
            src.set_pixel(0, 0, marker).unwrap();
            let mosaic = rotations(&src).unwrap();
            assert_eq!(mosaic.dimensions(), (4, 4));
            assert_eq!(mosaic.storage_kind(), kind);
            let expected_markers = [(1, 0), (3, 1), (2, 3), (0, 2)];
            for row in 0..4 {
                for col in 0..4 {
                    let expected = if expected_markers.contains(&(row, col)) {
                        marker
                    } else {
                        fill
                    };
                    assert_eq!(mosaic.get_pixel(row, col).unwrap(), expected, "({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_quadrants_match_successive_turns() {
        for kind in KINDS {
            let src = numbered(3, 3, kind);
            let mosaic = rotations(&src).unwrap();
            let first = rotate_quarter(&src).unwrap();
            let second = rotate_quarter(&first).unwrap();
            let third = rotate_quarter(&second).unwrap();
            assert_eq!(quadrant(&mosaic, 0, 0, 3), first);
            assert_eq!(quadrant(&mosaic, 0, 3, 3), second);
            assert_eq!(quadrant(&mosaic, 3, 3, 3), third);
            assert_eq!(quadrant(&mosaic, 3, 0, 3), src);
        }
    }

    #[test]
    fn test_source_untouched() {
        let src = numbered(2, 2, StorageKind::Flat);
        let before = src.clone();
        rotations(&src).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_rejects_non_square() {
        let src = numbered(3, 2, StorageKind::Flat);
        assert!(matches!(
            rotations(&src),
            Err(Error::NonSquare {
                width: 3,
                height: 2
            })
        ));
    }

    #[test]
    fn test_single_pixel() {
        let src = ImageBuf::from_pixel(1, 1, Rgb::new(1, 2, 3), StorageKind::Linked).unwrap();
        let mosaic = rotations(&src).unwrap();
        assert!(mosaic.pixels().all(|p| p == Rgb::new(1, 2, 3)));
    }
}
