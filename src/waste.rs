//! The wasted-space pool: rectangles left behind when a placement's
//! shadow trims or removes skyline shelves. Checked first on every
//! placement attempt so those gaps get reused instead of growing the
//! canvas.

use crate::model::Rect;

pub(crate) struct WastedSpacePool {
    free: Vec<Rect>,
    max: usize,
}

impl WastedSpacePool {
    pub fn new(max: usize) -> Self {
        Self {
            free: Vec::with_capacity(max),
            max,
        }
    }

    /// Record a freed rectangle. Silently dropped once the pool is at
    /// capacity or the rectangle is degenerate — losing track of a sliver
    /// of wasted space is cheaper than failing the whole placement.
    pub fn add(&mut self, x: u16, y: u16, width: u16, height: u16) {
        if width == 0 || height == 0 || self.free.len() == self.max {
            return;
        }
        self.free.push(Rect::new(x, y, width, height));
    }

    /// Smallest-area rectangle that fits `node_w x node_h`, ties broken
    /// by whichever was found first.
    pub fn try_best_fit(&self, node_w: u16, node_h: u16) -> Option<(usize, u16, u16)> {
        let mut best: Option<(usize, u32)> = None;
        for (i, r) in self.free.iter().enumerate() {
            if r.width < node_w || r.height < node_h {
                continue;
            }
            let area = r.width as u32 * r.height as u32;
            if best.map_or(true, |(_, best_area)| area < best_area) {
                best = Some((i, area));
            }
        }
        best.map(|(i, _)| (i, self.free[i].x, self.free[i].y))
    }

    /// Consume a node-sized chunk out of the rectangle at `index`: shrink
    /// in place if one dimension matches exactly, otherwise split the
    /// residual along its long axis into (at most) two new free
    /// rectangles.
    pub fn consume(&mut self, index: usize, node_w: u16, node_h: u16) {
        let r = self.free[index];

        if r.width == node_w && r.height > node_h {
            self.free[index].y += node_h;
            self.free[index].height -= node_h;
            return;
        }
        if r.height == node_h && r.width > node_w {
            self.free[index].x += node_w;
            self.free[index].width -= node_w;
            return;
        }

        self.free.remove(index);
        let residual_w = r.width - node_w;
        let residual_h = r.height - node_h;
        if residual_w == 0 || residual_h == 0 {
            return;
        }
        if residual_w > residual_h {
            self.add(r.x + node_w, r.y, residual_w, r.height);
            self.add(r.x, r.y + node_h, node_w, residual_h);
        } else {
            self.add(r.x, r.y + node_h, r.width, residual_h);
            self.add(r.x + node_w, r.y, residual_w, node_h);
        }
    }
}
