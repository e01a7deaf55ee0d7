// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

/// Returns the end-points of the region-of-interest stamp of `shape`.
///
/// These are all cells on the surface of a box of the given shape,
/// centered on the origin, as signed offsets from the center cell. Tracing
/// a path from the origin to each of them in turn sweeps the whole box,
/// which is how path-based correlations consume them.
///
/// Points are ordered row-major. Every extent must be odd (so a center
/// cell exists) and non-zero; otherwise `None` is returned.
pub fn stamp_points<const DIM: usize>(shape: [u32; DIM]) -> Option<Vec<[i32; DIM]>> {
    if DIM == 0 {
        return None;
    }
    for &n in &shape {
        if n == 0 || n % 2 == 0 {
            return None;
        }
    }

    let mut mid = [0i32; DIM];
    for i in 0..DIM {
        mid[i] = (shape[i] / 2) as i32;
    }

    let mut points = Vec::new();
    let mut index = [0u32; DIM];
    loop {
        let on_surface = (0..DIM).any(|i| index[i] == 0 || index[i] + 1 == shape[i]);
        if on_surface {
            let mut point = [0i32; DIM];
            for i in 0..DIM {
                point[i] = index[i] as i32 - mid[i];
            }
            points.push(point);
        }

        // Advance the multi-index, last axis fastest.
        let mut axis = DIM;
        loop {
            if axis == 0 {
                return Some(points);
            }
            axis -= 1;
            index[axis] += 1;
            if index[axis] < shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dimensional() {
        assert_eq!(stamp_points([19]), Some(alloc::vec![[-9], [9]]));
        assert_eq!(stamp_points([1]), Some(alloc::vec![[0]]));
    }

    #[test]
    fn two_dimensional_is_perimeter() {
        let points = stamp_points([5, 5]).unwrap();
        assert_eq!(points.len(), 16);
        for p in &points {
            assert!(p[0].abs() == 2 || p[1].abs() == 2);
            assert!(p[0].abs() <= 2 && p[1].abs() <= 2);
        }
    }

    #[test]
    fn three_dimensional_is_box_surface() {
        let points = stamp_points([3, 3, 3]).unwrap();
        // Everything but the center cell lies on the surface.
        assert_eq!(points.len(), 26);
        assert!(!points.contains(&[0, 0, 0]));
    }

    #[test]
    fn rejects_even_or_zero_extents() {
        assert_eq!(stamp_points([4]), None);
        assert_eq!(stamp_points([3, 0]), None);
        assert_eq!(stamp_points([3, 6, 3]), None);
    }
}
