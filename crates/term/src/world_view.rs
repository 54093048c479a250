//! WorldView: renders the raycast scene into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each screen column gets one ray. Its marched distance sets the vertical
//! wall slice (`ceiling = h/2 - h/d`, `floor = h - ceiling`) and the wall
//! shading; rows above are sky, rows below are floor shaded by how far they
//! sit beneath mid-screen. Columns whose ray grazed a tile corner render as
//! a blank divider so adjacent wall tiles stay visually separated.

use tui_fps_core::{raycast, Grid, Player};
use tui_fps_types::{FIELD_OF_VIEW, VISION_DEPTH};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Wall glyph for a given ray distance: denser when nearer, blank once the
/// ray reached the vision depth without a wall.
pub fn wall_shade(distance: f32, depth: f32) -> char {
    if distance <= depth / 4.0 {
        '█'
    } else if distance <= depth / 2.0 {
        '▓'
    } else if distance <= depth * 3.0 / 4.0 {
        '▒'
    } else if distance < depth {
        '░'
    } else {
        ' '
    }
}

/// Wall foreground brightness: linear in distance, clamped at both ends.
pub fn wall_brightness(distance: f32, depth: f32) -> u8 {
    let t = (1.0 - distance / depth).clamp(0.0, 1.0);
    60 + (t * 180.0) as u8
}

/// Floor glyph for a row below mid-screen: rows farther down are closer
/// floor and render denser, independent of wall distance.
pub fn floor_shade(row: u16, height: u16) -> char {
    let half = height as f32 / 2.0;
    let b = 1.0 - ((row as f32 - half) / half).clamp(0.0, 1.0);
    if b < 0.25 {
        '#'
    } else if b < 0.5 {
        'x'
    } else if b < 0.75 {
        '.'
    } else if b < 0.9 {
        '-'
    } else {
        ' '
    }
}

/// The first-person view plus its overhead-map and stats overlays.
pub struct WorldView {
    minimap: bool,
    stats: bool,
}

impl Default for WorldView {
    fn default() -> Self {
        Self {
            minimap: true,
            stats: true,
        }
    }
}

impl WorldView {
    pub fn new(minimap: bool, stats: bool) -> Self {
        Self { minimap, stats }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path (overlays excepted). Callers
    /// reuse a framebuffer across frames and it resizes only when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        grid: &Grid,
        player: &Player,
        fps: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w = viewport.width;
        let h = viewport.height;
        if w == 0 || h == 0 {
            return;
        }

        let wall_bg = Rgb::new(0, 0, 0);
        let floor_style = CellStyle {
            fg: Rgb::gray(130),
            bg: wall_bg,
            bold: false,
            dim: true,
        };

        for x in 0..w {
            let angle = raycast::column_angle(player.angle, FIELD_OF_VIEW, x, w);
            let hit = raycast::cast(grid, player.x, player.y, angle, VISION_DEPTH);

            let ceiling = h as f32 / 2.0 - h as f32 / hit.distance;
            let floor = h as f32 - ceiling;

            let wall_ch = if hit.boundary {
                // Edge divider between adjacent wall tiles.
                ' '
            } else {
                wall_shade(hit.distance, VISION_DEPTH)
            };
            let wall_style = CellStyle {
                fg: Rgb::gray(wall_brightness(hit.distance, VISION_DEPTH)),
                bg: wall_bg,
                bold: false,
                dim: false,
            };

            for y in 0..h {
                let row = y as f32;
                if row <= ceiling {
                    // Sky: fixed shade, already cleared.
                } else if row <= floor {
                    fb.put_char(x, y, wall_ch, wall_style);
                } else {
                    fb.put_char(x, y, floor_shade(y, h), floor_style);
                }
            }
        }

        if self.minimap {
            self.draw_minimap(grid, fb);
        }
        if self.stats {
            self.draw_stats(player, fps, fb);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, player: &Player, fps: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, player, fps, viewport, &mut fb);
        fb
    }

    /// Overhead map in the top-left corner: walls, the occupant cell, and
    /// blanked empty space so the panel reads as a block.
    fn draw_minimap(&self, grid: &Grid, fb: &mut FrameBuffer) {
        use tui_fps_types::Tile;

        let style = CellStyle {
            fg: Rgb::gray(200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let player_style = CellStyle {
            bold: true,
            ..style
        };

        for y in 0..grid.height().min(fb.height() as usize) {
            for x in 0..grid.width().min(fb.width() as usize) {
                match grid.get(x as i32, y as i32) {
                    Some(Tile::Wall) => fb.put_char(x as u16, y as u16, '▐', style),
                    Some(Tile::Occupant) => fb.put_char(x as u16, y as u16, '◈', player_style),
                    _ => fb.put_char(x as u16, y as u16, ' ', style),
                }
            }
        }
    }

    /// One-line status readout on the bottom row.
    fn draw_stats(&self, player: &Player, fps: u32, fb: &mut FrameBuffer) {
        if fb.height() == 0 {
            return;
        }
        let line = format!(
            "fps {:>4}  x {:>5.1}  y {:>5.1}  a {:>4.2}  depth {:.0}",
            fps,
            player.x,
            player.y,
            player.facing(),
            VISION_DEPTH,
        );
        let style = CellStyle {
            fg: Rgb::gray(220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        fb.put_str(0, fb.height() - 1, &line, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_density(ch: char) -> u8 {
        match ch {
            '█' => 4,
            '▓' => 3,
            '▒' => 2,
            '░' => 1,
            _ => 0,
        }
    }

    #[test]
    fn test_wall_shade_monotone_and_clamped() {
        let depth = VISION_DEPTH;
        let mut last = u8::MAX;
        let mut d = 0.1;
        while d <= depth + 1.0 {
            let density = glyph_density(wall_shade(d, depth));
            assert!(density <= last, "density increased at distance {}", d);
            last = density;
            d += 0.1;
        }
        assert_eq!(wall_shade(0.1, depth), '█');
        assert_eq!(wall_shade(depth, depth), ' ');
        assert_eq!(wall_shade(depth + 5.0, depth), ' ');
    }

    #[test]
    fn test_wall_brightness_monotone_and_clamped() {
        let depth = VISION_DEPTH;
        assert_eq!(wall_brightness(0.0, depth), 240);
        assert_eq!(wall_brightness(depth, depth), 60);
        assert_eq!(wall_brightness(depth * 2.0, depth), 60);
        let mut last = u8::MAX;
        let mut d = 0.0;
        while d <= depth {
            let b = wall_brightness(d, depth);
            assert!(b <= last);
            last = b;
            d += 0.25;
        }
    }

    #[test]
    fn test_floor_shade_denser_toward_bottom() {
        let h = 40;
        assert_eq!(floor_shade(h - 1, h), '#');
        // Just below mid-screen the floor is far away and nearly blank.
        assert_eq!(floor_shade(h / 2 + 1, h), ' ');
        let mut last = 0;
        for row in h / 2..h {
            let density = match floor_shade(row, h) {
                '#' => 4,
                'x' => 3,
                '.' => 2,
                '-' => 1,
                _ => 0,
            };
            assert!(density >= last, "floor density dropped at row {}", row);
            last = density;
        }
    }
}
