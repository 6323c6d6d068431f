use crate::pixel::PixelFormat;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in atlas pixel coordinates. Origin is the
/// bottom-left corner; `y = 0` is the bottom shelf.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge (`x + width`).
    pub fn right(&self) -> u32 {
        self.x as u32 + self.width as u32
    }

    /// Exclusive top edge (`y + height`).
    pub fn top(&self) -> u32 {
        self.y as u32 + self.height as u32
    }

    /// True if `self` and `other` overlap on a positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() <= other.x as u32
            || other.right() <= self.x as u32
            || self.top() <= other.y as u32
            || other.top() <= self.y as u32)
    }

    /// True if `self` is fully inside `[0, width) x [0, height)`.
    pub fn within_canvas(&self, width: u16, height: u16) -> bool {
        self.right() <= width as u32 && self.top() <= height as u32
    }
}

/// A rectangle placed by the packer, borrowing the caller's pixel buffer
/// for the lifetime of the packer (see DESIGN.md for the ownership
/// rationale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedImage<'img> {
    pub rect: Rect,
    pub pixel_format: PixelFormat,
    #[serde(skip)]
    pub pixel_data: &'img [u8],
}
