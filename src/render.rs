// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::color::ColorU8;
use crate::colormap::Colormap;
use crate::grid::LabelGrid;
use crate::pixmap::Pixmap;

/// Visual parameters of a rendered grid panel.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PanelStyle {
    /// Edge length of one grid cell in pixels. Must be non-zero.
    pub cell_size: u32,
    /// Width of the reference gridlines in pixels.
    ///
    /// Gridlines separate the cells and frame the panel. Zero disables
    /// them.
    pub line_width: u32,
    /// Color of the reference gridlines.
    pub line_color: ColorU8,
    /// Color of the gutter between montage panels.
    pub background: ColorU8,
    /// Ramp used to color the labels.
    pub colormap: Colormap,
}

impl Default for PanelStyle {
    /// Thin black gridlines over the reversed "afmhot" ramp.
    fn default() -> Self {
        PanelStyle {
            cell_size: 20,
            line_width: 1,
            line_color: ColorU8::from_rgb(0, 0, 0),
            background: ColorU8::from_rgb(255, 255, 255),
            colormap: Colormap::afmhot_r(),
        }
    }
}

impl PanelStyle {
    /// Pixel size of one rendered panel for a grid of the given shape.
    ///
    /// Returns `None` on overflow.
    pub fn panel_size(&self, grid_width: u32, grid_height: u32) -> Option<(u32, u32)> {
        let w = self.extent(grid_width)?;
        let h = self.extent(grid_height)?;
        Some((w, h))
    }

    fn extent(&self, cells: u32) -> Option<u32> {
        // `cells` cell spans plus `cells + 1` gridlines.
        let cells_px = cells.checked_mul(self.cell_size)?;
        let lines_px = cells.checked_add(1)?.checked_mul(self.line_width)?;
        cells_px.checked_add(lines_px)
    }
}

/// Renders one grid as a color-mapped panel with reference gridlines.
///
/// Every cell is scaled to `cell_size` pixels; gridlines run along all
/// interior and outer cell boundaries. Labels are colored by the style's
/// colormap, normalized to the grid's highest label.
///
/// Returns `None` when `cell_size` is zero or the panel dimensions
/// overflow.
pub fn render_grid(grid: &LabelGrid, style: &PanelStyle) -> Option<Pixmap> {
    if style.cell_size == 0 {
        return None;
    }

    let (w, h) = style.panel_size(grid.width(), grid.height())?;
    let mut pixmap = Pixmap::new(w, h)?;

    // Cells are painted over a line-colored canvas; the gridlines are
    // what remains visible between them.
    pixmap.fill(style.line_color);

    let max_label = grid.max_label();
    let step = style.cell_size + style.line_width;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let label = grid.labels()[(row * grid.width() + col) as usize];
            let color = style.colormap.color_for_label(label, max_label);
            let x = style.line_width + col * step;
            let y = style.line_width + row * step;
            fill_rect(&mut pixmap, x, y, style.cell_size, style.cell_size, color);
        }
    }

    Some(pixmap)
}

/// Renders several grids side by side, separated by a background gutter.
///
/// Returns `None` for an empty slice, when the panels end up with
/// different heights, or when a dimension overflows.
pub fn render_row(grids: &[LabelGrid], style: &PanelStyle, gutter: u32) -> Option<Pixmap> {
    let panels = grids
        .iter()
        .map(|grid| render_grid(grid, style))
        .collect::<Option<Vec<_>>>()?;

    let height = panels.first()?.height();
    if panels.iter().any(|panel| panel.height() != height) {
        return None;
    }

    let mut width = 0u32;
    for (i, panel) in panels.iter().enumerate() {
        if i > 0 {
            width = width.checked_add(gutter)?;
        }
        width = width.checked_add(panel.width())?;
    }

    let mut pixmap = Pixmap::new(width, height)?;
    pixmap.fill(style.background);

    let mut x = 0u32;
    for panel in &panels {
        blit(&mut pixmap, panel, x);
        x = x.saturating_add(panel.width()).saturating_add(gutter);
    }

    Some(pixmap)
}

fn fill_rect(pixmap: &mut Pixmap, x: u32, y: u32, w: u32, h: u32, color: ColorU8) {
    let stride = pixmap.width() as usize;
    let pixels = pixmap.pixels_mut();
    for dy in 0..h as usize {
        let start = (y as usize + dy) * stride + x as usize;
        for p in &mut pixels[start..start + w as usize] {
            *p = color;
        }
    }
}

fn blit(dst: &mut Pixmap, src: &Pixmap, x: u32) {
    let dst_stride = dst.width() as usize;
    let src_stride = src.width() as usize;
    let x = x as usize;
    let src_pixels = src.pixels();
    let dst_pixels = dst.pixels_mut();
    for row in 0..src.height() as usize {
        let d = row * dst_stride + x;
        let s = row * src_stride;
        dst_pixels[d..d + src_stride].copy_from_slice(&src_pixels[s..s + src_stride]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_size() {
        let style = PanelStyle::default();
        // 19 cells of 20px plus 20 gridlines of 1px.
        assert_eq!(style.panel_size(19, 19), Some((400, 400)));

        let style = PanelStyle {
            line_width: 0,
            ..PanelStyle::default()
        };
        assert_eq!(style.panel_size(19, 19), Some((380, 380)));
    }

    #[test]
    fn zero_cell_size_is_an_error() {
        let grid = LabelGrid::new(3, 3).unwrap();
        let style = PanelStyle {
            cell_size: 0,
            ..PanelStyle::default()
        };
        assert!(render_grid(&grid, &style).is_none());
    }

    #[test]
    fn empty_montage_is_an_error() {
        assert!(render_row(&[], &PanelStyle::default(), 10).is_none());
    }
}
