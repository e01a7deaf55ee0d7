// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec;
use alloc::vec::Vec;

use crate::TraceMode;

/// Cell-face crossings this close (in segment parameter space) are treated
/// as simultaneous, i.e. the segment passes through a cell edge or corner.
const TIE_EPSILON: f64 = 1e-6;

/// Returns the ordered cells that connect `from` to `to` under `mode`.
///
/// The first cell is always `from` and the last is always `to`, both
/// inclusive. When `from == to` the path is the single cell `from`,
/// whatever the mode. The output is deterministic for fixed inputs.
pub fn trace<const DIM: usize>(
    from: [i32; DIM],
    to: [i32; DIM],
    mode: TraceMode,
) -> Vec<[i32; DIM]> {
    if from == to {
        return vec![from];
    }

    match mode {
        TraceMode::Bresenham => bresenham(from, to),
        TraceMode::Actual => parametric(from, to, false),
        TraceMode::Full => parametric(from, to, true),
    }
}

/// Integer error-accumulation walk along the dominant axis.
///
/// Uses doubled distances so all error terms stay integral. The path has
/// exactly `|to[j] - from[j]| + 1` cells, `j` being the dominant axis.
fn bresenham<const DIM: usize>(from: [i32; DIM], to: [i32; DIM]) -> Vec<[i32; DIM]> {
    // Doubled absolute distance and step sign per axis. Distances are
    // widened to i64 so that the doubling cannot overflow.
    let mut dist2 = [0i64; DIM];
    let mut step = [0i32; DIM];
    for i in 0..DIM {
        let d = i64::from(to[i]) - i64::from(from[i]);
        dist2[i] = d.abs() << 1;
        step[i] = d.signum() as i32;
    }

    // The first axis at least as long as all others drives the walk.
    let mut dominant = 0;
    for i in 1..DIM {
        if dist2[i] > dist2[dominant] {
            dominant = i;
        }
    }

    // Error terms for the non-dominant axes.
    let mut error = [0i64; DIM];
    for i in 0..DIM {
        if i != dominant {
            error[i] = dist2[i] - (dist2[dominant] >> 1);
        }
    }

    let mut cell = from;
    let mut path = Vec::with_capacity((dist2[dominant] >> 1) as usize + 1);
    loop {
        path.push(cell);
        if cell[dominant] == to[dominant] {
            return path;
        }

        for i in 0..DIM {
            if i != dominant && error[i] >= 0 {
                cell[i] += step[i];
                error[i] -= dist2[dominant];
            }
        }
        cell[dominant] += step[dominant];
        for i in 0..DIM {
            if i != dominant {
                error[i] += dist2[i];
            }
        }
    }
}

/// Parametric traversal through the cell-face crossings of the continuous
/// segment.
///
/// At every step the nearest face crossing along the segment is taken.
/// Crossings inside the tie window advance their axes together. With
/// `full` set, each individual crossing records a cell; otherwise only the
/// cell reached after a (possibly diagonal) step is recorded.
fn parametric<const DIM: usize>(from: [i32; DIM], to: [i32; DIM], full: bool) -> Vec<[i32; DIM]> {
    // Slope, step sign and next face offset per axis. Axes with zero
    // slope never cross a face and stay inactive.
    let mut slope = [0.0f64; DIM];
    let mut step = [0i32; DIM];
    let mut next = [0.0f64; DIM];
    let mut active = [false; DIM];
    let mut total = 1usize;
    for i in 0..DIM {
        slope[i] = f64::from(to[i]) - f64::from(from[i]);
        if slope[i] != 0.0 {
            step[i] = if slope[i] > 0.0 { 1 } else { -1 };
            // The first face crossed lies half a cell away from the start.
            next[i] = f64::from(from[i]) + f64::from(step[i]) * 0.5;
            active[i] = true;
            total += (i64::from(to[i]) - i64::from(from[i])).abs() as usize;
        }
    }

    let mut pos = [0.0f64; DIM];
    for i in 0..DIM {
        pos[i] = f64::from(from[i]);
    }

    let mut cell = from;
    let mut path = Vec::with_capacity(total);
    path.push(cell);

    while cell != to {
        // Segment parameter of the nearest face crossing per active axis.
        let mut t = [f64::INFINITY; DIM];
        let mut t_min = f64::INFINITY;
        for i in 0..DIM {
            if active[i] {
                t[i] = (next[i] - pos[i]) / slope[i];
                if t[i] < t_min {
                    t_min = t[i];
                }
            }
        }

        for i in 0..DIM {
            if active[i] && t[i] - t_min < TIE_EPSILON {
                cell[i] += step[i];
                next[i] += f64::from(step[i]);
                if full {
                    path.push(cell);
                }
            }
        }
        if !full {
            path.push(cell);
        }

        // Any point on the segment line works as the next reference: the
        // crossing parameters are all offset by the same amount, which
        // preserves their ordering.
        for i in 0..DIM {
            pos[i] = f64::from(from[i]) + slope[i] * t_min;
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_is_single_cell() {
        for &mode in &[TraceMode::Bresenham, TraceMode::Actual, TraceMode::Full] {
            assert_eq!(trace([4, -2], [4, -2], mode), vec![[4, -2]]);
            assert_eq!(trace([0], [0], mode), vec![[0]]);
        }
    }

    #[test]
    fn bresenham_axis_aligned() {
        assert_eq!(trace([0], [4], TraceMode::Bresenham), vec![[0], [1], [2], [3], [4]]);
        assert_eq!(
            trace([0, 0], [0, -3], TraceMode::Bresenham),
            vec![[0, 0], [0, -1], [0, -2], [0, -3]]
        );
    }

    #[test]
    fn bresenham_diagonal() {
        assert_eq!(
            trace([0, 0], [3, 3], TraceMode::Bresenham),
            vec![[0, 0], [1, 1], [2, 2], [3, 3]]
        );
    }

    #[test]
    fn bresenham_shallow() {
        assert_eq!(
            trace([0, 0], [9, 2], TraceMode::Bresenham),
            vec![
                [0, 0],
                [1, 0],
                [2, 0],
                [3, 1],
                [4, 1],
                [5, 1],
                [6, 1],
                [7, 2],
                [8, 2],
                [9, 2],
            ]
        );
    }

    #[test]
    fn bresenham_length_is_dominant_distance() {
        for &to in &[[9, 2], [-3, 9], [-8, 9], [-9, 0], [-9, -3], [-2, -9], [9, -2]] {
            let path = trace([0, 0], to, TraceMode::Bresenham);
            let longest = to[0].abs().max(to[1].abs());
            assert_eq!(path.len(), longest as usize + 1);
            assert_eq!(path[0], [0, 0]);
            assert_eq!(*path.last().unwrap(), to);
        }
    }

    #[test]
    fn actual_records_every_entered_cell() {
        assert_eq!(
            trace([0, 0], [9, 2], TraceMode::Actual),
            vec![
                [0, 0],
                [1, 0],
                [2, 0],
                [2, 1],
                [3, 1],
                [4, 1],
                [5, 1],
                [6, 1],
                [7, 1],
                [7, 2],
                [8, 2],
                [9, 2],
            ]
        );
    }

    #[test]
    fn actual_diagonal_skips_corners() {
        assert_eq!(
            trace([0, 0], [2, 2], TraceMode::Actual),
            vec![[0, 0], [1, 1], [2, 2]]
        );
    }

    #[test]
    fn full_diagonal_is_face_connected() {
        assert_eq!(
            trace([0, 0], [2, 2], TraceMode::Full),
            vec![[0, 0], [1, 0], [1, 1], [2, 1], [2, 2]]
        );
    }

    #[test]
    fn full_length_is_total_distance() {
        // One cell per face crossing: |dx| + |dy| crossings in 2-D.
        for &to in &[[9, 2], [-3, 9], [-8, 9], [-9, 0], [-9, -3], [-2, -9], [9, -2]] {
            let path = trace([0, 0], to, TraceMode::Full);
            assert_eq!(path.len(), (to[0].abs() + to[1].abs()) as usize + 1);
            assert_eq!(*path.last().unwrap(), to);
        }
    }

    #[test]
    fn arbitrary_start_matches_shifted_origin() {
        for &mode in &[TraceMode::Bresenham, TraceMode::Actual, TraceMode::Full] {
            let origin = trace([0, 0], [7, -4], mode);
            let shifted = trace([100, 50], [107, 46], mode);
            assert_eq!(origin.len(), shifted.len());
            for (a, b) in origin.iter().zip(&shifted) {
                assert_eq!([a[0] + 100, a[1] + 50], *b);
            }
        }
    }

    #[test]
    fn three_dimensional() {
        let path = trace([0, 0, 0], [4, 2, 1], TraceMode::Bresenham);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], [0, 0, 0]);
        assert_eq!(*path.last().unwrap(), [4, 2, 1]);

        let path = trace([0, 0, 0], [4, 2, 1], TraceMode::Full);
        assert_eq!(path.len(), 8);
        assert_eq!(*path.last().unwrap(), [4, 2, 1]);
    }

    #[test]
    fn deterministic() {
        for &mode in &[TraceMode::Bresenham, TraceMode::Actual, TraceMode::Full] {
            assert_eq!(trace([0, 0], [-8, 9], mode), trace([0, 0], [-8, 9], mode));
        }
    }
}
