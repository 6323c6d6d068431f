//! The online packer: ties the skyline profile, the wasted-space pool
//! and the growth policy together behind `add_image`.

use crate::config::PackerConfig;
use crate::error::{PackerError, Result};
use crate::growth::grow_once;
use crate::model::{PlacedImage, Rect};
use crate::pixel::PixelFormat;
use crate::skyline::{Shelf, SkylineProfile};
use crate::waste::WastedSpacePool;

/// Pre-allocated backing storage for a [`Packer`], handed in up front so
/// the packer never reallocates its internal bookkeeping while images are
/// being added. Mirrors the reference implementation's "caller supplies
/// one arena, packer carves it up" contract, expressed here as an owned,
/// safe allocation instead of a raw buffer.
pub struct ReservedStorage {
    shelf_capacity: usize,
    waste_capacity: usize,
}

impl ReservedStorage {
    /// Reserve storage sized for `config.max_shelves` shelves and
    /// `config.max_wasted_rects` wasted-space rectangles. `max_images` is
    /// accepted for symmetry with the packer's own reservation but is not
    /// used here: placed-image storage is reserved separately by
    /// [`Packer::with_reserved_storage`], since it borrows caller pixel
    /// data rather than living in this arena.
    pub fn with_capacity(_max_images: usize, config: &PackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            shelf_capacity: config.max_shelves,
            waste_capacity: config.max_wasted_rects,
        })
    }

    fn shelf_capacity(&self) -> usize {
        self.shelf_capacity
    }

    fn waste_capacity(&self) -> usize {
        self.waste_capacity
    }
}

pub(crate) enum PlacementOutcome {
    Placed(Rect),
    /// No shelf or wasted-space rectangle can hold the requested node at
    /// the current canvas size. Never returned to a caller; it only
    /// drives the grow-and-retry loop in [`Packer::add_image`].
    TooSmall,
}

/// An online rectangle packer built around a skyline profile backed by a
/// pool of reusable wasted-space rectangles.
///
/// `'img` is the lifetime of the pixel buffers passed to [`Self::add_image`]:
/// the packer borrows them rather than copying, so they must outlive the
/// packer itself.
pub struct Packer<'img> {
    config: PackerConfig,
    width: u16,
    height: u16,
    shelves: SkylineProfile,
    waste: WastedSpacePool,
    placed: Vec<PlacedImage<'img>>,
    max_images: usize,
}

impl<'img> Packer<'img> {
    /// Create a packer that can hold at most `max_images` images, with
    /// internal storage freshly allocated per `config`.
    pub fn new(max_images: usize, config: PackerConfig) -> Result<Self> {
        config.validate()?;
        if max_images == 0 {
            return Err(PackerError::InvalidArguments(
                "max_images must be greater than 0".into(),
            ));
        }
        let mut placed = Vec::new();
        placed
            .try_reserve_exact(max_images)
            .map_err(|_| PackerError::OutOfMemory {
                requested: max_images,
            })?;

        Ok(Self {
            width: config.min_dimension,
            height: config.min_dimension,
            shelves: SkylineProfile::new(config.min_dimension, config.max_shelves),
            waste: WastedSpacePool::new(config.max_wasted_rects),
            placed,
            max_images,
            config,
        })
    }

    /// Create a packer using storage reserved ahead of time via
    /// [`ReservedStorage::with_capacity`]. Fails if the storage was sized
    /// for a smaller `max_shelves`/`max_wasted_rects` than `config` asks
    /// for.
    pub fn with_reserved_storage(
        max_images: usize,
        config: PackerConfig,
        storage: ReservedStorage,
    ) -> Result<Self> {
        config.validate()?;
        if max_images == 0 {
            return Err(PackerError::InvalidArguments(
                "max_images must be greater than 0".into(),
            ));
        }
        if storage.shelf_capacity() < config.max_shelves
            || storage.waste_capacity() < config.max_wasted_rects
        {
            return Err(PackerError::InvalidArguments(
                "reserved storage is smaller than the configured bounds".into(),
            ));
        }
        let mut placed = Vec::new();
        placed
            .try_reserve_exact(max_images)
            .map_err(|_| PackerError::OutOfMemory {
                requested: max_images,
            })?;

        Ok(Self {
            width: config.min_dimension,
            height: config.min_dimension,
            shelves: SkylineProfile::new(config.min_dimension, config.max_shelves),
            waste: WastedSpacePool::new(config.max_wasted_rects),
            placed,
            max_images,
            config,
        })
    }

    /// Current canvas dimensions. Grows monotonically as images are
    /// added; never shrinks.
    pub fn baked_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Every image placed so far, in insertion order.
    pub fn placed_images(&self) -> &[PlacedImage<'img>] {
        &self.placed
    }

    /// Place one image, growing the canvas as many times as necessary.
    ///
    /// `pixel_data` must contain at least `width * height *
    /// format.bytes_per_pixel()` bytes; it is borrowed, not copied, so it
    /// must outlive this packer.
    pub fn add_image(
        &mut self,
        format: PixelFormat,
        pixel_data: &'img [u8],
        width: u16,
        height: u16,
    ) -> Result<Rect> {
        if width == 0 || height == 0 {
            return Err(PackerError::InvalidArguments(format!(
                "image dimensions must be non-zero (got {width}x{height})"
            )));
        }
        let expected_len = width as usize * height as usize * format.bytes_per_pixel();
        if pixel_data.len() < expected_len {
            return Err(PackerError::InvalidArguments(format!(
                "pixel buffer too small: need {expected_len} bytes, got {}",
                pixel_data.len()
            )));
        }
        if self.placed.len() == self.max_images {
            return Err(PackerError::OutOfRange {
                max: self.max_images,
            });
        }

        let rect = loop {
            match self.try_place(width, height)? {
                PlacementOutcome::Placed(rect) => break rect,
                PlacementOutcome::TooSmall => {
                    grow_once(&mut self.width, &mut self.height, &mut self.shelves, &self.config)?;
                }
            }
        };

        tracing::debug!(x = rect.x, y = rect.y, width, height, "placed image");
        self.placed.push(PlacedImage {
            rect,
            pixel_format: format,
            pixel_data,
        });
        Ok(rect)
    }

    /// One placement attempt at the current canvas size: try the
    /// wasted-space pool first, then scan the skyline for the
    /// least-wasteful shelf.
    fn try_place(&mut self, node_w: u16, node_h: u16) -> Result<PlacementOutcome> {
        if let Some((index, x, y)) = self.waste.try_best_fit(node_w, node_h) {
            self.waste.consume(index, node_w, node_h);
            let rect = Rect::new(x, y, node_w, node_h);
            self.shelves
                .reconcile_shadow(rect.x, rect.y, rect.width, &mut self.waste);
            return Ok(PlacementOutcome::Placed(rect));
        }

        let Some(shelf_index) = self.find_best_shelf(node_w, node_h) else {
            return Ok(PlacementOutcome::TooSmall);
        };

        let shelf = self.shelves.get(shelf_index);
        let rect = Rect::new(shelf.base_x, shelf.base_y, node_w, node_h);

        // Check capacity before touching the chosen shelf: inserting the
        // replacement shelf below can fail with `TooManyShelves`, and we
        // must not leave the profile with the old shelf trimmed/removed
        // and no replacement if that happens. Trimming keeps the old shelf
        // around (no slot freed); removing it does free one, so the two
        // cases need different headroom.
        let removes_old_shelf = shelf.base_width <= node_w;
        let count_after_removal = self.shelves.len() - usize::from(removes_old_shelf);
        if count_after_removal >= self.shelves.max_shelves() {
            return Err(PackerError::TooManyShelves {
                max: self.config.max_shelves,
            });
        }

        if shelf.base_width > node_w {
            self.shelves
                .trim(shelf_index, rect.x + node_w, shelf.base_width - node_w);
        } else {
            self.shelves.remove(shelf_index);
        }

        self.shelves
            .insert(rect.y + rect.height, rect.x, rect.width)?;
        self.shelves
            .reconcile_shadow(rect.x, rect.y, rect.width, &mut self.waste);

        Ok(PlacementOutcome::Placed(rect))
    }

    /// Scan every shelf for the candidate that minimises the placement
    /// heuristic, rejecting shelves that can't hold the node or whose
    /// overhang would be blocked by a taller neighbour.
    fn find_best_shelf(&self, node_w: u16, node_h: u16) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;

        for i in 0..self.shelves.len() {
            let shelf = self.shelves.get(i);

            if self.height as u32 - shelf.base_y as u32 < node_h as u32 {
                continue;
            }
            if shelf.base_x as u32 + node_w as u32 > self.width as u32 {
                continue;
            }
            if (shelf.base_width as u32) < node_w as u32 {
                // Shelves are kept in ascending base_x order, so only
                // neighbours to the right of this candidate can be in its
                // overhang; anything to the left sits behind it and can't
                // obstruct the placement (matches K15_IACheckCollision's
                // forward-only scan from `skyline + 1`).
                let overhang_limit = shelf.base_x as u32 + node_w as u32;
                let blocked = ((i + 1)..self.shelves.len()).any(|j| {
                    let other = self.shelves.get(j);
                    other.base_x as u32 <= overhang_limit && other.base_y > shelf.base_y
                });
                if blocked {
                    continue;
                }
            }

            let score = self.placement_heuristic(&shelf, node_w);
            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((i, score));
            }
        }

        best.map(|(i, _)| i)
    }

    /// Wasted area a shelf would bury beneath it if chosen: the sum, over
    /// every shelf whose `base_x` lies within `[bx, bx + node_w)`, of
    /// that shelf's horizontal overlap with the candidate times how far
    /// below the candidate it sits.
    fn placement_heuristic(&self, shelf: &Shelf, node_w: u16) -> u32 {
        let base_x = shelf.base_x as u32;
        let span_end = base_x + node_w as u32;
        let mut total = 0u32;

        for i in 0..self.shelves.len() {
            let other = self.shelves.get(i);
            let other_x = other.base_x as u32;
            if other_x < base_x || other_x >= span_end {
                continue;
            }
            let other_end = other_x + other.base_width as u32;
            let overlap = other_end.min(span_end) - other_x;
            if other.base_y < shelf.base_y {
                let drop = (shelf.base_y - other.base_y) as u32;
                total = total.saturating_add(overlap.saturating_mul(drop));
            }
        }

        total
    }
}
