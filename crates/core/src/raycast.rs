//! Raycast module - per-column ray marching against the map grid.
//!
//! One ray is cast per screen column. The ray marches in fixed `RAY_STEP`
//! increments until it enters a wall cell or runs out of vision depth.
//! This runs for every column of every frame, so the hot path allocates
//! nothing.

use std::cmp::Ordering;

use arrayvec::ArrayVec;

use tui_fps_types::{Tile, BOUNDARY_RAD, RAY_STEP};

use crate::grid::Grid;

/// Result of casting one column's ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnHit {
    /// Marched distance; equals the vision depth when no wall was reached.
    pub distance: f32,
    /// Whether a wall cell stopped the ray within the vision depth.
    pub hit_wall: bool,
    /// Whether the ray grazed a wall-tile corner (rendered as a divider).
    pub boundary: bool,
}

/// Ray angle for screen column `column` of `screen_width`, centered on the
/// facing angle `pa` and spread across `fov`.
pub fn column_angle(pa: f32, fov: f32, column: u16, screen_width: u16) -> f32 {
    pa - fov / 2.0 + (column as f32 / screen_width as f32) * fov
}

/// March a ray from `(ox, oy)` along `angle` until it strikes a wall or
/// exceeds `depth`.
///
/// Leaving the grid counts as open view: the distance is reported as the
/// full vision depth with no wall and no boundary.
pub fn cast(grid: &Grid, ox: f32, oy: f32, angle: f32, depth: f32) -> ColumnHit {
    let dir_x = angle.cos();
    let dir_y = angle.sin();

    let mut distance = 0.0_f32;
    while distance < depth {
        distance += RAY_STEP;

        let tx = (ox + dir_x * distance) as i32;
        let ty = (oy + dir_y * distance) as i32;

        match grid.get(tx, ty) {
            // Off the map: no wall within range.
            None => break,
            Some(Tile::Wall) => {
                return ColumnHit {
                    distance,
                    hit_wall: true,
                    boundary: grazes_corner(ox, oy, dir_x, dir_y, tx, ty),
                };
            }
            Some(_) => {}
        }
    }

    ColumnHit {
        distance: depth,
        hit_wall: false,
        boundary: false,
    }
}

/// Edge detection for a hit wall cell.
///
/// Measures the angle between the ray direction and the direction to each of
/// the cell's four corners, and flags the column when any of the three
/// corners nearest the ray origin subtends less than `BOUNDARY_RAD`.
fn grazes_corner(ox: f32, oy: f32, dir_x: f32, dir_y: f32, tx: i32, ty: i32) -> bool {
    // (distance to corner, angle between ray and corner direction)
    let mut corners: ArrayVec<(f32, f32), 4> = ArrayVec::new();

    for cy in 0..2 {
        for cx in 0..2 {
            let vx = (tx + cx) as f32 - ox;
            let vy = (ty + cy) as f32 - oy;
            let mut d = (vx * vx + vy * vy).sqrt();
            if d == 0.0 {
                // Corner coincides with the ray origin; avoid dividing by it.
                d = 1e-6;
            }
            let dot = ((dir_x * vx) + (dir_y * vy)) / d;
            corners.push((d, dot.clamp(-1.0, 1.0).acos()));
        }
    }

    corners.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    corners.iter().take(3).any(|&(_, ang)| ang < BOUNDARY_RAD)
}
