//! Terminal FPS runner (default binary).
//!
//! Loads the map (embedded default or a path argument), places the player,
//! then runs the synchronous frame loop: measure elapsed time, render, poll
//! for at most one tick, step the movement model.

use std::env;
use std::fs;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_fps::core::{Grid, Player, SimpleRng};
use tui_fps::input::{handle_key_event, should_quit};
use tui_fps::term::{FrameBuffer, TerminalRenderer, Viewport, WorldView};
use tui_fps::types::{StepOutcome, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_MS};

const DEFAULT_MAP: &str = include_str!("../maps/level1.txt");

fn main() -> Result<()> {
    let map_text = match env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("reading map file {path}"))?
        }
        None => DEFAULT_MAP.to_string(),
    };
    let mut grid = Grid::parse(&map_text)?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut rng = SimpleRng::new(seed);
    let mut player = Player::place(&mut grid, None, &mut rng)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut grid, &mut player);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, grid: &mut Grid, player: &mut Player) -> Result<()> {
    let view = WorldView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();

    loop {
        let dt = last_frame.elapsed().as_secs_f32().max(1e-6);
        last_frame = Instant::now();
        let fps = (1.0 / dt) as u32;

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((SCREEN_WIDTH, SCREEN_HEIGHT));
        view.render_into(grid, player, fps, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Non-blocking input: wait at most one tick for a key. No key means
        // no intent for this frame.
        let mut intent = None;
        if event::poll(Duration::from_millis(TICK_MS as u64))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if key.kind == KeyEventKind::Press {
                        intent = handle_key_event(key);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if player.step(grid, intent, dt) == StepOutcome::Quit {
            return Ok(());
        }
    }
}
