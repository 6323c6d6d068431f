//! Flattening placed images into a single contiguous pixel buffer. Not
//! part of the core placement algorithm: grounded in the reference
//! implementation's `K15_IABakeImageAtlasIntoPixelBuffer`, which walks
//! the placed-image list and blits each one, converting pixel format as
//! it goes.

use crate::error::{PackerError, Result};
use crate::packer::Packer;
use crate::pixel::{convert_pixel, PixelFormat};

impl<'img> Packer<'img> {
    /// Composite every placed image into `dest`, a buffer laid out as
    /// `baked_size().0 * baked_size().1 * format.bytes_per_pixel()`
    /// bytes, row-major with `(0, 0)` at the bottom-left.
    pub fn bake_into(&self, format: PixelFormat, dest: &mut [u8]) -> Result<()> {
        let (width, height) = self.baked_size();
        let bpp = format.bytes_per_pixel();
        let required = width as usize * height as usize * bpp;
        if dest.len() < required {
            return Err(PackerError::InvalidArguments(format!(
                "destination buffer too small: need {required} bytes, got {}",
                dest.len()
            )));
        }
        dest[..required].fill(0);

        let mut pixel = Vec::with_capacity(bpp);
        for image in self.placed_images() {
            let rect = image.rect;
            let src_bpp = image.pixel_format.bytes_per_pixel();
            for row in 0..rect.height as usize {
                for col in 0..rect.width as usize {
                    let src_offset = (row * rect.width as usize + col) * src_bpp;
                    let src_pixel = &image.pixel_data[src_offset..src_offset + src_bpp];

                    pixel.clear();
                    convert_pixel(src_pixel, image.pixel_format, &mut pixel, format);

                    let dest_x = rect.x as usize + col;
                    let dest_y = rect.y as usize + row;
                    let dest_offset = (dest_y * width as usize + dest_x) * bpp;
                    dest[dest_offset..dest_offset + bpp].copy_from_slice(&pixel);
                }
            }
        }

        Ok(())
    }

    /// Convenience wrapper around [`Self::bake_into`] that allocates and
    /// returns an `image` crate [`image::RgbaImage`]. Requires the
    /// `image` feature.
    #[cfg(feature = "image")]
    pub fn bake_to_rgba_image(&self) -> image::RgbaImage {
        let (width, height) = self.baked_size();
        let mut buf = vec![0u8; width as usize * height as usize * 4];
        self.bake_into(PixelFormat::Rgba, &mut buf)
            .expect("buffer sized from baked_size() always matches");
        image::RgbaImage::from_raw(width as u32, height as u32, buf)
            .expect("buffer length matches width*height*4 by construction")
    }
}
