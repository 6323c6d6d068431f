//! Online skyline-with-wasted-space rectangle packer.
//!
//! Images are added one at a time; the packer places each against a
//! skyline profile, falling back to a pool of previously wasted
//! rectangles before growing the canvas. There is no batch layout step
//! and no notion of pages — this is a single growing atlas.
//!
//! ```ignore
//! use skyline_atlas::{Packer, PackerConfig, PixelFormat};
//!
//! let mut packer = Packer::new(64, PackerConfig::default())?;
//! let pixels = vec![0u8; 32 * 32 * 4];
//! let rect = packer.add_image(PixelFormat::Rgba, &pixels, 32, 32)?;
//! println!("placed at {:?}, canvas is now {:?}", rect, packer.baked_size());
//! # Ok::<(), skyline_atlas::PackerError>(())
//! ```

mod bake;
pub mod config;
pub mod error;
mod growth;
pub mod model;
pub mod packer;
pub mod pixel;
mod skyline;
mod waste;

pub use config::{PackerConfig, PackerConfigBuilder};
pub use error::{PackerError, Result};
pub use model::{PlacedImage, Rect};
pub use packer::{Packer, ReservedStorage};
pub use pixel::{convert_pixel, PixelFormat};

/// Convenience prelude bringing the primary API into scope.
pub mod prelude {
    pub use crate::config::{PackerConfig, PackerConfigBuilder};
    pub use crate::error::{PackerError, Result};
    pub use crate::model::{PlacedImage, Rect};
    pub use crate::packer::{Packer, ReservedStorage};
    pub use crate::pixel::PixelFormat;
}
