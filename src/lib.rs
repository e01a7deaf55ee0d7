// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
`pixel-path` traces pixel/voxel paths between integer grid points and
renders them as color-mapped label grids.

The tracing algorithms live in the
[`pixel-path-trace`](https://crates.io/crates/pixel-path-trace) crate and
are re-exported here. This crate adds the label-grid rasterization step,
a small RGBA pixmap with PNG export, and the panel rendering that draws a
grid as a color-mapped image with thin reference gridlines.

See the `demos/` directory for usage examples.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::identity_op)]
#![allow(clippy::needless_range_loop)]

mod color;
mod colormap;
mod geom;
mod grid;
mod pixmap;
mod render;

pub use pixel_path_trace::{stamp_points, trace, ModeParseError, TraceMode};

pub use color::ColorU8;
pub use colormap::Colormap;
pub use grid::LabelGrid;
pub use pixmap::{Pixmap, BYTES_PER_PIXEL};
pub use render::{render_grid, render_row, PanelStyle};

/// An integer length that is guarantee to be > 0
type LengthU32 = core::num::NonZeroU32;
