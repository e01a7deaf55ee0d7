use pixel_path::*;

// This demo renders the three tracing algorithms side by side: seven paths
// from the center of a 19x19 grid to fixed directional end-points, stamped
// into a label grid and drawn with the reversed "afmhot" ramp.

fn main() {
    let endpoints: [[i32; 2]; 7] = [
        [9, 2],
        [-3, 9],
        [-8, 9],
        [-9, 0],
        [-9, -3],
        [-2, -9],
        [9, -2],
    ];

    let now = std::time::Instant::now();

    let mut grids = Vec::new();
    for &mode in &[TraceMode::Bresenham, TraceMode::Actual, TraceMode::Full] {
        let paths: Vec<_> = endpoints
            .iter()
            .map(|&end| trace([0, 0], end, mode))
            .collect();

        let mut grid = LabelGrid::new(19, 19).unwrap();
        grid.stamp_paths(&paths).unwrap();
        grids.push(grid);
    }

    let style = PanelStyle::default();
    let pixmap = render_row(&grids, &style, 10).unwrap();

    println!("Rendered in {:.2}ms", now.elapsed().as_micros() as f64 / 1000.0);

    pixmap.save_png("pixel_path.png").unwrap();
}
