//! WorldView tests - frame composition without a terminal.

use tui_fps::core::{Grid, Player, SimpleRng};
use tui_fps::term::{FrameBuffer, Viewport, WorldView};

fn bordered_9x9() -> Grid {
    let mut rows = String::new();
    for y in 0..9 {
        if y == 0 || y == 8 {
            rows.push_str("#########\n");
        } else {
            rows.push_str("#.......#\n");
        }
    }
    Grid::parse(&rows).unwrap()
}

fn wall_glyph(ch: char) -> bool {
    matches!(ch, '█' | '▓' | '▒' | '░')
}

fn floor_glyph(ch: char) -> bool {
    matches!(ch, '#' | 'x' | '.' | '-')
}

#[test]
fn test_frame_has_sky_wall_floor_bands() {
    let mut grid = bordered_9x9();
    // Far from the east wall so sky and floor bands are both visible.
    let mut player =
        Player::place(&mut grid, Some((1.0, 4.5)), &mut SimpleRng::new(1)).unwrap();
    player.angle = 0.0;

    let view = WorldView::new(false, false);
    let fb = view.render(&grid, &player, 60, Viewport::new(40, 20));

    // Center column hits the east border at distance ~7.
    let x = 20;
    assert_eq!(fb.get(x, 0).unwrap().ch, ' ', "top row should be sky");
    assert!(
        wall_glyph(fb.get(x, 10).unwrap().ch),
        "mid row should be wall, got {:?}",
        fb.get(x, 10).unwrap().ch
    );
    assert!(
        floor_glyph(fb.get(x, 19).unwrap().ch),
        "bottom row should be floor, got {:?}",
        fb.get(x, 19).unwrap().ch
    );
}

#[test]
fn test_nearer_wall_renders_denser_glyph() {
    fn density(ch: char) -> u8 {
        match ch {
            '█' => 4,
            '▓' => 3,
            '▒' => 2,
            '░' => 1,
            _ => 0,
        }
    }

    let view = WorldView::new(false, false);
    let viewport = Viewport::new(40, 20);

    let mut near_grid = bordered_9x9();
    let mut near =
        Player::place(&mut near_grid, Some((7.0, 4.5)), &mut SimpleRng::new(1)).unwrap();
    near.angle = 0.0;
    let near_fb = view.render(&near_grid, &near, 60, viewport);

    let mut far_grid = bordered_9x9();
    let mut far = Player::place(&mut far_grid, Some((3.0, 4.5)), &mut SimpleRng::new(1)).unwrap();
    far.angle = 0.0;
    let far_fb = view.render(&far_grid, &far, 60, viewport);

    assert!(density(near_fb.get(20, 10).unwrap().ch) > density(far_fb.get(20, 10).unwrap().ch));
}

#[test]
fn test_boundary_column_renders_divider() {
    let mut grid = Grid::parse("#####\n#...#\n#...#\n#...#\n#####").unwrap();
    let mut player = Player::place(&mut grid, Some((2.5, 2.5)), &mut SimpleRng::new(1)).unwrap();
    // Center column aims straight at the corner shared by (4, 1) and (4, 2).
    player.angle = (2.0_f32 - 2.5).atan2(4.0 - 2.5);

    let view = WorldView::new(false, false);
    let fb = view.render(&grid, &player, 60, Viewport::new(40, 20));

    // The wall is close enough that the whole column is wall region, so a
    // blank mid-row cell can only be the edge divider.
    assert_eq!(fb.get(20, 10).unwrap().ch, ' ');
    // A neighboring column on the same wall renders a solid face.
    assert!(wall_glyph(fb.get(22, 10).unwrap().ch));
}

#[test]
fn test_minimap_overlay_draws_walls_and_player() {
    let mut grid = Grid::parse("#####\n#...#\n#...#\n#...#\n#####").unwrap();
    let player = Player::place(&mut grid, Some((2.5, 2.5)), &mut SimpleRng::new(1)).unwrap();

    let view = WorldView::default();
    let fb = view.render(&grid, &player, 60, Viewport::new(40, 20));

    assert_eq!(fb.get(0, 0).unwrap().ch, '▐');
    assert_eq!(fb.get(4, 4).unwrap().ch, '▐');
    assert_eq!(fb.get(2, 2).unwrap().ch, '◈');
}

#[test]
fn test_stats_overlay_on_bottom_row() {
    let mut grid = Grid::parse("#####\n#...#\n#...#\n#...#\n#####").unwrap();
    let player = Player::place(&mut grid, Some((2.5, 2.5)), &mut SimpleRng::new(1)).unwrap();

    let view = WorldView::default();
    let fb = view.render(&grid, &player, 60, Viewport::new(60, 20));

    let row: String = (0..60).map(|x| fb.get(x, 19).unwrap().ch).collect();
    assert!(row.contains("fps"), "stats row missing, got {:?}", row);
    assert!(row.contains("depth"));
}

#[test]
fn test_render_into_reuses_buffer_across_resizes() {
    let mut grid = bordered_9x9();
    let player = Player::place(&mut grid, Some((4.5, 4.5)), &mut SimpleRng::new(1)).unwrap();

    let view = WorldView::new(false, false);
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&grid, &player, 60, Viewport::new(30, 10), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 10));
    view.render_into(&grid, &player, 60, Viewport::new(50, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 24));
}

#[test]
fn test_zero_sized_viewport_is_harmless() {
    let mut grid = bordered_9x9();
    let player = Player::place(&mut grid, Some((4.5, 4.5)), &mut SimpleRng::new(1)).unwrap();

    let view = WorldView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&grid, &player, 60, Viewport::new(0, 0), &mut fb);
}
