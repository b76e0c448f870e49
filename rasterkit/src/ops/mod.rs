//! Whole-image transforms. Each reads its source through [`Image`](crate::canvas::Image), leaves
//! it untouched, and returns a newly allocated [`ImageBuf`](crate::canvas::ImageBuf) using the
//! same storage kind as the source.

mod convolve;
mod rotate;
mod suppress;

pub use convolve::apply_mask;
pub use rotate::{rotate_quarter, rotations};
pub use suppress::{Channels, suppress};
