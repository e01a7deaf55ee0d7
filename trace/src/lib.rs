// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
A [pixel-path](https://crates.io/crates/pixel-path) path tracing implementation.

Provides the pixel/voxel paths that connect two integer grid points under
three rasterization algorithms, and the end-points of the region-of-interest
stamp used by path-based correlations.

All coordinates are cell indices. A path point is a fixed-size array of
`i32`, generic over the number of dimensions.
*/

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::needless_range_loop)]

extern crate alloc;

mod mode;
mod stamp;
mod trace;

pub use mode::{ModeParseError, TraceMode};
pub use stamp::stamp_points;
pub use trace::trace;
