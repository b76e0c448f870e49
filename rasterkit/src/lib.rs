//! In-memory RGB images over interchangeable pixel storage, and a few whole-image transforms:
//! channel suppression, a four-way rotation mosaic and neighbourhood masking.
//!
//! ```
//! use rasterkit::canvas::{Image, ImageBuf, ImageMut, Rgb};
//! use rasterkit::ops::{Channels, suppress};
//! use rasterkit::seq::StorageKind;
//!
//! let mut image = ImageBuf::new(3, 2, StorageKind::Linked)?;
//! image.set_pixel(1, 2, Rgb::new(200, 100, 50))?;
//! let out = suppress(&image, Channels::default())?;
//! assert_eq!(out.get_pixel(1, 2)?, Rgb::new(0, 100, 50));
//! # Ok::<(), rasterkit::Error>(())
//! ```

pub mod canvas;
pub mod error;
pub mod io;
pub mod mask;
pub mod ops;
pub mod seq;
pub mod settings;

#[doc(inline)]
pub use error::{Error, Result};
