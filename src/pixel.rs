//! Pixel format conversion, kept deliberately simple: no blending, no
//! rotation, no mipmaps — just the per-pixel routines the format table
//! in the design requires.

use serde::{Deserialize, Serialize};

/// 8-bit-per-channel pixel layout. The numeric tag equals the pixel's
/// byte width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[repr(u8)]
pub enum PixelFormat {
    /// Single grey/red channel.
    R = 1,
    /// Grey/red + alpha.
    RA = 2,
    /// Red, green, blue.
    Rgb = 3,
    /// Red, green, blue, alpha.
    Rgba = 4,
}

impl PixelFormat {
    /// Bytes occupied by one pixel in this format.
    pub fn bytes_per_pixel(self) -> usize {
        self as usize
    }
}

/// Greyscale coefficients applied when collapsing RGB(A) down to one
/// channel: `0.21*R + 0.72*G + 0.07*B`.
const GREY_R: f32 = 0.21;
const GREY_G: f32 = 0.72;
const GREY_B: f32 = 0.07;

/// Convert one pixel from `src_format` to `dst_format`, appending exactly
/// `dst_format.bytes_per_pixel()` bytes to `dst`.
///
/// Premultiplied-alpha conversions from RGBA follow `out = channel *
/// (A/255)` for colour channels; alpha itself passes through unchanged.
pub fn convert_pixel(src: &[u8], src_format: PixelFormat, dst: &mut Vec<u8>, dst_format: PixelFormat) {
    use PixelFormat::*;
    match src_format {
        R => {
            let r = src[0];
            for _ in 0..dst_format.bytes_per_pixel() {
                dst.push(r);
            }
        }
        RA => {
            let r = src[0];
            let a = src[1];
            let premultiplied = ((r as u16 * a as u16) / 255) as u8;
            match dst_format {
                R => dst.push(premultiplied),
                RA => {
                    dst.push(r);
                    dst.push(a);
                }
                Rgb => dst.extend_from_slice(&[premultiplied, premultiplied, premultiplied]),
                Rgba => dst.extend_from_slice(&[r, r, r, a]),
            }
        }
        Rgb => {
            let grey = greyscale(src[0], src[1], src[2]);
            match dst_format {
                R => dst.push(grey),
                RA => dst.extend_from_slice(&[grey, 255]),
                Rgb => dst.extend_from_slice(&src[..3]),
                Rgba => dst.extend_from_slice(&[src[0], src[1], src[2], 255]),
            }
        }
        Rgba => {
            let grey = greyscale(src[0], src[1], src[2]);
            let a = src[3];
            match dst_format {
                R => dst.push(premultiply(grey, a)),
                RA => dst.extend_from_slice(&[grey, a]),
                Rgb => dst.extend_from_slice(&[
                    premultiply(src[0], a),
                    premultiply(src[1], a),
                    premultiply(src[2], a),
                ]),
                Rgba => dst.extend_from_slice(&src[..4]),
            }
        }
    }
}

fn greyscale(r: u8, g: u8, b: u8) -> u8 {
    (r as f32 * GREY_R + g as f32 * GREY_G + b as f32 * GREY_B).round() as u8
}

fn premultiply(channel: u8, alpha: u8) -> u8 {
    (channel as f32 * (alpha as f32 / 255.0)).round() as u8
}
