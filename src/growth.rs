//! Canvas growth policy: when nothing fits, double the shorter side
//! (width and height alternate as the atlas approaches square) up to the
//! configured ceiling.

use crate::config::PackerConfig;
use crate::error::{PackerError, Result};
use crate::skyline::SkylineProfile;

/// Double whichever of width/height is currently smaller (width wins
/// ties), failing if that would exceed `config.max_dimension`.
pub(crate) fn grow_once(
    width: &mut u16,
    height: &mut u16,
    shelves: &mut SkylineProfile,
    config: &PackerConfig,
) -> Result<()> {
    let ceiling = config.max_dimension as u32;

    if *width <= *height {
        let old_width = *width;
        let next = old_width as u32 * 2;
        if next > ceiling {
            return Err(PackerError::TooLarge {
                width: next,
                height: *height as u32,
                ceiling,
            });
        }
        *width = next as u16;
        shelves.extend_bottom(old_width, *width - old_width)?;
    } else {
        let next = *height as u32 * 2;
        if next > ceiling {
            return Err(PackerError::TooLarge {
                width: *width as u32,
                height: next,
                ceiling,
            });
        }
        *height = next as u16;
    }
    Ok(())
}
