// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::color::ColorU8;

/// A continuous color ramp sampled per label.
///
/// Only the gnuplot-style "afmhot" ramp is provided, in both directions.
/// Each channel is a clipped linear ramp: black turns red, then yellow,
/// then white.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colormap {
    reversed: bool,
}

impl Colormap {
    /// Black to red to yellow to white.
    #[inline]
    pub fn afmhot() -> Self {
        Colormap { reversed: false }
    }

    /// White to yellow to red to black.
    ///
    /// Maps the zero background label to white, which is what the label
    /// grid panels use.
    #[inline]
    pub fn afmhot_r() -> Self {
        Colormap { reversed: true }
    }

    /// Samples the ramp at `t`.
    ///
    /// `t` is clamped to 0..=1; NaN samples the ramp start.
    pub fn color_at(&self, t: f32) -> ColorU8 {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        let t = if self.reversed { 1.0 - t } else { t };
        ColorU8::from_rgb(
            channel(2.0 * t),
            channel(2.0 * t - 0.5),
            channel(2.0 * t - 1.0),
        )
    }

    /// Returns the color of `label` normalized by `max_label`.
    ///
    /// Labels are spread uniformly over the ramp, label zero at the ramp
    /// start and `max_label` at the ramp end. A grid with no labels
    /// (`max_label <= 0`) samples the ramp start everywhere.
    pub fn color_for_label(&self, label: i32, max_label: i32) -> ColorU8 {
        if max_label <= 0 {
            return self.color_at(0.0);
        }
        self.color_at(label as f32 / max_label as f32)
    }
}

impl Default for Colormap {
    #[inline]
    fn default() -> Self {
        Colormap::afmhot_r()
    }
}

fn channel(v: f32) -> u8 {
    let v = v.max(0.0).min(1.0);
    (v * 255.0 + 0.5) as u8
}
