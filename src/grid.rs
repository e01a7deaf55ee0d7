// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::geom::IntSize;

/// A label matrix over signed cell offsets.
///
/// Cell `(0, 0)` is the center cell. The first path axis selects the row,
/// with the most negative offset in the top row; the second axis selects
/// the column. Both extents must be odd so that a center cell exists.
///
/// Freshly created grids are all zero, the background label.
#[derive(Clone, PartialEq, Debug)]
pub struct LabelGrid {
    data: Vec<i32>,
    size: IntSize,
}

impl LabelGrid {
    /// Creates a zero-filled grid.
    ///
    /// Both extents must be odd and non-zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return None;
        }
        let size = IntSize::from_wh(width, height)?;
        let len = (width as usize).checked_mul(height as usize)?;

        Some(LabelGrid {
            data: vec![0; len],
            size,
        })
    }

    /// Returns grid's width (number of columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Returns grid's height (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Half-extent of the row axis: row offsets span `-h..=h`.
    #[inline]
    fn half_rows(&self) -> i32 {
        (self.size.height() / 2) as i32
    }

    /// Half-extent of the column axis: column offsets span `-w..=w`.
    #[inline]
    fn half_cols(&self) -> i32 {
        (self.size.width() / 2) as i32
    }

    fn index(&self, dr: i32, dc: i32) -> Option<usize> {
        let row = dr.checked_add(self.half_rows())?;
        let col = dc.checked_add(self.half_cols())?;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as u32, col as u32);
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some((row * self.width() + col) as usize)
    }

    /// Returns the label at the given signed offsets.
    ///
    /// Returns `None` when the offsets are out of bounds.
    pub fn get(&self, dr: i32, dc: i32) -> Option<i32> {
        Some(self.data[self.index(dr, dc)?])
    }

    /// Writes `label` into every cell `path` visits.
    ///
    /// The whole path is bounds-checked first: a coordinate outside the
    /// signed offset range is an error and leaves the grid untouched.
    pub fn stamp(&mut self, path: &[[i32; 2]], label: i32) -> Option<()> {
        let mut indices = Vec::with_capacity(path.len());
        for p in path {
            indices.push(self.index(p[0], p[1])?);
        }
        for idx in indices {
            self.data[idx] = label;
        }
        Some(())
    }

    /// Stamps each path with its 1-based index.
    ///
    /// Later paths overwrite earlier ones at shared cells. This
    /// insertion-order precedence is a presentation artifact, not a
    /// guaranteed semantic.
    pub fn stamp_paths(&mut self, paths: &[Vec<[i32; 2]>]) -> Option<()> {
        for (i, path) in paths.iter().enumerate() {
            self.stamp(path, i as i32 + 1)?;
        }
        Some(())
    }

    /// Returns the labels in row-major order.
    pub fn labels(&self) -> &[i32] {
        self.data.as_slice()
    }

    /// Returns the highest label present in the grid.
    pub fn max_label(&self) -> i32 {
        self.data.iter().cloned().max().unwrap_or(0)
    }
}
