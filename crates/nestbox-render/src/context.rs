//! Per-pass render state.

use nestbox_layout::{BoxId, BoxTree};
use nestbox_types::{NestBoxError, Result};

use crate::cell::Cell;

/// Character grid for one render pass.
///
/// The grid is allocated by the first box rasterized into it and keeps
/// those dimensions until [`reset`](Self::reset). Rasterizing a second tree
/// without resetting draws into the old grid, clipped to its size.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    grid: Vec<Vec<char>>,
    allocated: bool,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    /// Grid size as `(rows, columns)`; `(0, 0)` before allocation.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.len(), self.grid.first().map_or(0, Vec::len))
    }

    /// Drop the grid so the next pass sizes a fresh one.
    pub fn reset(&mut self) {
        self.grid = Vec::new();
        self.allocated = false;
    }

    /// Draw the tree under `master` into the grid.
    ///
    /// Nothing is drawn if `master` has a parent.
    pub fn rasterize(&mut self, tree: &BoxTree, master: BoxId) -> Result<()> {
        if !tree.get(master).is_master() {
            return Err(NestBoxError::InvalidMaster(master));
        }
        self.draw_box(tree, master);
        Ok(())
    }

    /// Row-major grid text, one newline after each row.
    pub fn serialize(&self) -> String {
        let (rows, cols) = self.dimensions();
        let mut out = String::with_capacity(rows * (cols + 1));
        for row in &self.grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn allocate(&mut self, rows: usize, cols: usize) {
        log::trace!("Allocating {rows}x{cols} grid");
        self.grid = vec![vec![Cell::Blank.glyph(); cols]; rows];
        self.allocated = true;
    }

    fn draw_box(&mut self, tree: &BoxTree, id: BoxId) {
        let node = tree.get(id);
        let (v_pad, h_pad) = (node.vertical_padding(), node.horizontal_padding());
        if !self.allocated {
            self.allocate(v_pad + 2, h_pad + 2);
        }

        for &child in node.children() {
            self.draw_box(tree, child);
        }

        if !tree.is_contained(id) {
            log::warn!("Box {id} extends outside its parent");
        }

        let mut clipped = 0usize;
        for row in 0..=v_pad + 1 {
            for col in 0..=h_pad + 1 {
                let cell = Cell::classify(col, row, h_pad, v_pad);
                if cell == Cell::Blank {
                    continue;
                }
                let slot = self
                    .grid
                    .get_mut(node.anchor_y() + row)
                    .and_then(|r| r.get_mut(node.anchor_x() + col));
                match slot {
                    Some(slot) => *slot = cell.glyph(),
                    None => clipped += 1,
                }
            }
        }
        if clipped > 0 {
            log::warn!("Box {id}: clipped {clipped} border cells outside the grid");
        }
    }
}
