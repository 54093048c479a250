//! Player module - pose, spawn placement, and the movement/collision model.
//!
//! Position is continuous (sub-cell precision); the grid cell is the
//! truncated position. Collision checks the destination cell only: a large
//! enough per-frame displacement can tunnel through a single-cell-thin wall.
//! That is an accepted property of the model, not something this module
//! papers over.

use std::f32::consts::TAU;
use std::fmt;

use tui_fps_types::{Intent, StepOutcome, Tile, INITIAL_FACING, MOVE_SPEED, ROTATE_FACTOR};

use crate::grid::Grid;
use crate::rng::SimpleRng;

/// Spawn placement failure. Fatal for the session; the caller must not
/// render with an unplaced pose.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceError {
    /// The requested cell is a wall.
    Blocked { x: usize, y: usize },
    /// The requested position lies outside the grid.
    OutOfBounds { x: f32, y: f32 },
    /// No non-wall interior cell exists to sample from.
    NoOpenCell,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::Blocked { x, y } => {
                write!(f, "cannot place player inside wall cell ({}, {})", x, y)
            }
            PlaceError::OutOfBounds { x, y } => {
                write!(f, "cannot place player outside the map at ({}, {})", x, y)
            }
            PlaceError::NoOpenCell => write!(f, "map has no open interior cell to spawn in"),
        }
    }
}

impl std::error::Error for PlaceError {}

/// The player pose: continuous position plus facing angle in radians.
///
/// Invariant: the truncated cell of `(x, y)` is never a wall, and it holds
/// the grid's single `Occupant` marker. Positions are never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Player {
    /// Place the player on the grid and mark the occupant cell.
    ///
    /// With a candidate position, that exact position is used or placement
    /// fails. Without one, interior cells (the outermost border ring
    /// excluded) are sampled until a non-wall cell is found, and the pose is
    /// centered in the cell.
    pub fn place(
        grid: &mut Grid,
        candidate: Option<(f32, f32)>,
        rng: &mut SimpleRng,
    ) -> Result<Self, PlaceError> {
        if let Some((x, y)) = candidate {
            if x < 0.0 || y < 0.0 {
                return Err(PlaceError::OutOfBounds { x, y });
            }
            let (cx, cy) = (x as i32, y as i32);
            return match grid.get(cx, cy) {
                None => Err(PlaceError::OutOfBounds { x, y }),
                Some(Tile::Wall) => Err(PlaceError::Blocked {
                    x: cx as usize,
                    y: cy as usize,
                }),
                Some(_) => {
                    grid.set(cx, cy, Tile::Occupant);
                    Ok(Self {
                        x,
                        y,
                        angle: INITIAL_FACING,
                    })
                }
            };
        }

        // Rejection sampling terminates iff an open interior cell exists,
        // so rule that out up front instead of spinning.
        if !grid.has_open_interior() {
            return Err(PlaceError::NoOpenCell);
        }
        loop {
            let cx = 1 + rng.next_range((grid.width() - 2) as u32) as i32;
            let cy = 1 + rng.next_range((grid.height() - 2) as u32) as i32;
            if !grid.is_wall(cx, cy) {
                grid.set(cx, cy, Tile::Occupant);
                return Ok(Self {
                    x: cx as f32 + 0.5,
                    y: cy as f32 + 0.5,
                    angle: INITIAL_FACING,
                });
            }
        }
    }

    /// Truncated grid cell of the current position.
    pub fn cell(&self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }

    /// Facing angle normalized to `[0, 2π)` for display. Movement arithmetic
    /// leaves `angle` unbounded on purpose.
    pub fn facing(&self) -> f32 {
        self.angle.rem_euclid(TAU)
    }

    /// Apply one frame's intent, scaled by the elapsed time `dt` in seconds.
    ///
    /// Rotation always succeeds (it does not move the position). Translation
    /// is committed only if the destination cell is in bounds and not a
    /// wall; otherwise the pose is left untouched and `Blocked` is returned.
    pub fn step(&mut self, grid: &mut Grid, intent: Option<Intent>, dt: f32) -> StepOutcome {
        let Some(intent) = intent else {
            return StepOutcome::Idle;
        };

        let dist = MOVE_SPEED * dt;
        let (dx, dy) = match intent {
            Intent::Quit => return StepOutcome::Quit,
            Intent::RotateLeft => {
                self.angle -= ROTATE_FACTOR * dist;
                return StepOutcome::Moved;
            }
            Intent::RotateRight => {
                self.angle += ROTATE_FACTOR * dist;
                return StepOutcome::Moved;
            }
            Intent::Forward => (self.angle.cos() * dist, self.angle.sin() * dist),
            Intent::Backward => (-self.angle.cos() * dist, -self.angle.sin() * dist),
            // Perpendicular to the facing vector, same speed scaling.
            Intent::StrafeLeft => (self.angle.sin() * dist, -self.angle.cos() * dist),
            Intent::StrafeRight => (-self.angle.sin() * dist, self.angle.cos() * dist),
        };
        self.try_translate(grid, dx, dy)
    }

    fn try_translate(&mut self, grid: &mut Grid, dx: f32, dy: f32) -> StepOutcome {
        let nx = self.x + dx;
        let ny = self.y + dy;
        if nx < 0.0 || ny < 0.0 {
            return StepOutcome::Blocked;
        }

        let (cx, cy) = (nx as i32, ny as i32);
        match grid.get(cx, cy) {
            Some(tile) if !tile.is_wall() => {
                let old = self.cell();
                self.x = nx;
                self.y = ny;
                grid.move_occupant(old, (cx as usize, cy as usize));
                StepOutcome::Moved
            }
            // Wall or out of bounds: the frame proceeds with the old pose.
            _ => StepOutcome::Blocked,
        }
    }
}
