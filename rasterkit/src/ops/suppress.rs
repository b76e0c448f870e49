use crate::canvas::{Image, ImageBuf, ImageMut};
use crate::error::Result;

/// Which channels [`suppress()`] zeroes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    pub const RED: Channels = Channels::new(true, false, false);
    pub const GREEN: Channels = Channels::new(false, true, false);
    pub const BLUE: Channels = Channels::new(false, false, true);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    pub const fn is_empty(self) -> bool {
        !(self.red || self.green || self.blue)
    }

    /// The channels actually suppressed: red when nothing was selected.
    pub const fn or_default_red(self) -> Self {
        if self.is_empty() { Self::RED } else { self }
    }

    fn as_array(self) -> [bool; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Return a copy of `src` with the selected channels set to zero. Selecting no channels
/// suppresses red.
#[tracing::instrument(level = "debug", skip(src), fields(width = src.width(), height = src.height()))]
pub fn suppress<I: Image + ?Sized>(src: &I, channels: Channels) -> Result<ImageBuf> {
    let zeroed = channels.or_default_red().as_array();
    log::debug!("suppressing channels {:?}", zeroed);
    let (width, height) = src.dimensions();
    let mut dst = ImageBuf::new(width, height, src.storage_kind())?;
    for row in 0..height {
        for col in 0..width {
            let mut pixel = src.get_pixel(row, col)?;
            for (channel, zero) in pixel.iter_mut().zip(zeroed) {
                if zero {
                    *channel = 0;
                }
            }
            dst.set_pixel(row, col, pixel)?;
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgb;
    use crate::seq::StorageKind;

    fn source(kind: StorageKind) -> ImageBuf {
        ImageBuf::from_pixel(3, 2, Rgb::new(200, 100, 50), kind).unwrap()
    }

    fn assert_all(image: &ImageBuf, expected: Rgb) {
        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|p| p == expected));
    }

    #[test]
    fn test_suppress_cases() {
        for kind in [StorageKind::Flat, StorageKind::Linked] {
            let src = source(kind);
            assert_all(&suppress(&src, Channels::RED).unwrap(), Rgb::new(0, 100, 50));
            assert_all(
                &suppress(&src, Channels::default()).unwrap(),
                Rgb::new(0, 100, 50),
            );
            assert_all(
                &suppress(&src, Channels::new(false, true, true)).unwrap(),
                Rgb::new(200, 0, 0),
            );
            assert_all(
                &suppress(&src, Channels::new(true, true, true)).unwrap(),
                Rgb::BLACK,
            );
            assert_eq!(suppress(&src, Channels::BLUE).unwrap().storage_kind(), kind);
        }
    }

    #[test]
    fn test_source_untouched() {
        let src = source(StorageKind::Flat);
        let before = src.clone();
        suppress(&src, Channels::GREEN).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_idempotent() {
        let pixels = (0..6).map(|i| Rgb::new(10 * i, 20 * i, 30 * i));
        let src = ImageBuf::from_pixels(2, 3, pixels, StorageKind::Linked).unwrap();
        for channels in [Channels::default(), Channels::GREEN, Channels::new(true, false, true)] {
            let once = suppress(&src, channels).unwrap();
            let twice = suppress(&once, channels).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_view_source() {
        let mut src = ImageBuf::new(4, 4, StorageKind::Flat).unwrap();
        src.set_pixel(1, 1, Rgb::new(1, 2, 3)).unwrap();
        let view = src.view(1, 1, 2, 2).unwrap();
        let out = suppress(&view, Channels::GREEN).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(0, 0).unwrap(), Rgb::new(1, 0, 3));
    }

    #[test]
    fn test_channels_default_policy() {
        assert!(Channels::default().is_empty());
        assert_eq!(Channels::default().or_default_red(), Channels::RED);
        assert_eq!(Channels::BLUE.or_default_red(), Channels::BLUE);
    }
}
