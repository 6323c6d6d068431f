use thiserror::Error;

/// Errors returned by the public packer API.
///
/// `too_small` from the design notes has no variant here: it is an
/// internal-only signal (see [`crate::packer::PlacementOutcome`]) that
/// drives the grow-and-retry loop inside [`crate::packer::Packer::add_image`]
/// and is never surfaced to a caller.
#[derive(Debug, Error)]
pub enum PackerError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("out of memory: failed to reserve backing storage for {requested} images")]
    OutOfMemory { requested: usize },

    #[error("atlas already holds its configured maximum of {max} images")]
    OutOfRange { max: usize },

    #[error(
        "growing the atlas to {width}x{height} would exceed the configured ceiling of {ceiling}"
    )]
    TooLarge { width: u32, height: u32, ceiling: u32 },

    #[error("cannot insert a new skyline shelf: the {max}-shelf limit has been reached")]
    TooManyShelves { max: usize },
}

pub type Result<T> = std::result::Result<T, PackerError>;
