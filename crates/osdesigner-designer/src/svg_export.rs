//! # Frame SVG Export
//!
//! Generates a cut-ready outline of the frame in millimetres:
//! - `outer-frame-edges`: the outer rectangle
//! - `inner-frame-edges`: the border of the grid area
//! - `screw-holes`: arcs for every perimeter screw hole
//!
//! Straight edges are split per grid cell and pulled back by the screw radius
//! at each intersection so they never cross a hole. Corner holes get a
//! three-quarter arc and edge holes a half arc.

use crate::grid::GridConfig;
use crate::screw_holes::PerimeterPosition;
use osdesigner_core::units::GRID_UNIT_MM;
use tracing::debug;

const STROKE: &str = r##"stroke="#000000" stroke-width="0.1""##;

/// Arc path for a perimeter hole centred at `(cx, cy)` with radius `r`
pub fn hole_arc_path(position: PerimeterPosition, cx: f64, cy: f64, r: f64) -> String {
    // (start, large-arc, sweep, end)
    let (start, large_arc, sweep, end) = match position {
        PerimeterPosition::TopLeft => ((cx + r, cy), 1, 0, (cx, cy + r)),
        PerimeterPosition::TopRight => ((cx, cy + r), 1, 0, (cx - r, cy)),
        PerimeterPosition::BottomLeft => ((cx, cy - r), 1, 0, (cx + r, cy)),
        PerimeterPosition::BottomRight => ((cx - r, cy), 1, 0, (cx, cy - r)),
        PerimeterPosition::Left => ((cx, cy - r), 0, 0, (cx, cy + r)),
        PerimeterPosition::Right => ((cx, cy + r), 0, 0, (cx, cy - r)),
        PerimeterPosition::Top => ((cx - r, cy), 0, 1, (cx + r, cy)),
        PerimeterPosition::Bottom => ((cx + r, cy), 0, 1, (cx - r, cy)),
    };
    format!(
        "M {} {} A {} {} 0 {} {} {} {}",
        start.0, start.1, r, r, large_arc, sweep, end.0, end.1
    )
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!(
        "        <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>\n",
        x1, y1, x2, y2, STROKE
    )
}

/// Render the frame outline for `grid` as an SVG document
pub fn export_frame_svg(grid: &GridConfig) -> String {
    let outer_width = grid.outer_width_mm();
    let outer_height = grid.outer_height_mm();
    let inner_x = grid.border_x_mm();
    let inner_y = grid.border_y_mm();
    let grid_width = grid.grid_width_mm();
    let grid_height = grid.grid_height_mm();
    let r = grid.screw_radius_mm();

    let mut holes = String::new();
    for row in 0..=grid.height_units {
        for col in 0..=grid.width_units {
            let Some(position) = PerimeterPosition::classify(grid, col, row) else {
                continue;
            };
            let (cx, cy) = grid.hole_center_mm(col, row);
            holes.push_str(&format!(
                "        <path d=\"{}\" fill=\"none\" {}/>\n",
                hole_arc_path(position, cx, cy, r),
                STROKE
            ));
        }
    }

    let mut outer = String::new();
    let mut inner = String::new();
    for i in 0..grid.width_units {
        let x1 = inner_x + f64::from(i) * GRID_UNIT_MM + r;
        let x2 = inner_x + f64::from(i + 1) * GRID_UNIT_MM - r;
        outer.push_str(&line(x1, 0.0, x2, 0.0));
        outer.push_str(&line(x1, outer_height, x2, outer_height));
        inner.push_str(&line(x1, inner_y, x2, inner_y));
        inner.push_str(&line(x1, inner_y + grid_height, x2, inner_y + grid_height));
    }
    for i in 0..grid.height_units {
        let y1 = inner_y + f64::from(i) * GRID_UNIT_MM + r;
        let y2 = inner_y + f64::from(i + 1) * GRID_UNIT_MM - r;
        outer.push_str(&line(0.0, y1, 0.0, y2));
        outer.push_str(&line(outer_width, y1, outer_width, y2));
        inner.push_str(&line(inner_x, y1, inner_x, y2));
        inner.push_str(&line(inner_x + grid_width, y1, inner_x + grid_width, y2));
    }

    debug!(
        "Frame SVG {}x{}mm with {} perimeter holes",
        outer_width,
        outer_height,
        2 * (grid.width_units + grid.height_units)
    );

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    svg.push_str(&format!(
        "<svg width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        w = outer_width,
        h = outer_height
    ));
    svg.push_str("    <g id=\"outer-frame-edges\">\n");
    svg.push_str(&outer);
    svg.push_str("    </g>\n");
    svg.push_str("    <g id=\"inner-frame-edges\">\n");
    svg.push_str(&inner);
    svg.push_str("    </g>\n");
    svg.push_str("    <g id=\"screw-holes\">\n");
    svg.push_str(&holes);
    svg.push_str("    </g>\n");
    svg.push_str("</svg>");
    svg
}

/// Suggested file name, e.g. `outer-frame-8x8-340x340mm.svg`
pub fn svg_file_name(grid: &GridConfig) -> String {
    format!(
        "outer-frame-{}x{}-{}x{}mm.svg",
        grid.width_units,
        grid.height_units,
        grid.outer_width_mm(),
        grid.outer_height_mm()
    )
}
