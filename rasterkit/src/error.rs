/// Errors raised by sequence containers, images, masks and the transforms built on them.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Error {
    #[display("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[display("bad image coordinates (row={row}, col={col}) for image of size {width}x{height}")]
    CoordsOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[display(
        "view {view_width}x{view_height} at (left={left}, top={top}) does not fit in image of size {width}x{height}"
    )]
    ViewOutOfBounds {
        left: usize,
        top: usize,
        view_width: usize,
        view_height: usize,
        width: usize,
        height: usize,
    },

    #[display("expected {expected} pixels, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[display("expected an image of size {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[display("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[display("invalid mask: {reason}")]
    InvalidMask { reason: String },

    #[display("mask weights sum to zero around (row={row}, col={col})")]
    ZeroDenominator { row: usize, col: usize },

    #[display("weighted sum overflows around (row={row}, col={col})")]
    Overflow { row: usize, col: usize },

    #[display("rotation mosaic needs a square image, got {width}x{height}")]
    NonSquare { width: usize, height: usize },

    #[display("image codec error: {_0}")]
    #[from]
    Image(#[error(source)] image::ImageError),

    #[display("I/O error: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid_mask(reason: impl Into<String>) -> Self {
        Error::InvalidMask {
            reason: reason.into(),
        }
    }
}
