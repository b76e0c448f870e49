//! File collaborators: decoding and encoding images with the `image` crate, and reading mask
//! files.

use std::fs;
use std::path::Path;

use crate::canvas::ImageBuf;
use crate::error::Result;
use crate::mask::Mask;
use crate::seq::StorageKind;

/// Decode the image at `path` (format inferred by `image`), converted to 8-bit RGB.
pub fn open<P: AsRef<Path>>(path: P, kind: StorageKind) -> Result<ImageBuf> {
    let path = path.as_ref();
    log::debug!("opening {:?} into {} storage", path, kind);
    let image = image::open(path)?.to_rgb8();
    ImageBuf::from_rgb8(&image, kind)
}

/// Encode `image` to `path`, with the format inferred from the extension.
pub fn save<P: AsRef<Path>>(image: &ImageBuf, path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!("saving {:?}", path);
    image.to_rgb8().save(path)?;
    Ok(())
}

/// Read a mask file: the side length on the first line, then one weight per line.
pub fn read_mask<P: AsRef<Path>>(path: P) -> Result<Mask> {
    fs::read_to_string(path)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Image, Rgb};
    use crate::error::Error;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rasterkit-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_png_round_trip() {
        let path = scratch_path("round-trip.png");
        let pixels = (0..6).map(|i| Rgb::new(i * 40, 255 - i * 40, 7));
        let image = ImageBuf::from_pixels(3, 2, pixels, StorageKind::Flat).unwrap();
        save(&image, &path).unwrap();
        let loaded = open(&path, StorageKind::Linked).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.storage_kind(), StorageKind::Linked);
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            open(scratch_path("missing.png"), StorageKind::Flat),
            Err(Error::Image(_))
        ));
    }

    #[test]
    fn test_read_mask() {
        let path = scratch_path("mask.txt");
        fs::write(&path, "3\n1\n1\n1\n1\n1\n1\n1\n1\n1\n").unwrap();
        let mask = read_mask(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(mask, Mask::uniform(3).unwrap());
        assert!(matches!(
            read_mask(scratch_path("missing.txt")),
            Err(Error::Io(_))
        ));
    }
}
