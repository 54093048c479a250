//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the map grid, the movement/collision model, and the
//! raycasting math. It has **zero dependencies** on UI, timing, or I/O,
//! making it:
//!
//! - **Deterministic**: seeded RNG produces identical spawns (for tests)
//! - **Testable**: every rule is exercised without a terminal
//! - **Fast**: zero-allocation hot path for per-column ray casting
//!
//! # Module Structure
//!
//! - [`grid`]: map grid parsed from text, with occupant bookkeeping
//! - [`player`]: pose, spawn placement, and time-scaled movement
//! - [`raycast`]: per-column ray march and wall-edge boundary detection
//! - [`rng`]: small seedable LCG for random spawn sampling
//!
//! # Example
//!
//! ```
//! use tui_fps_core::{Grid, Player, SimpleRng};
//! use tui_fps_types::{Intent, StepOutcome};
//!
//! let mut grid = Grid::parse("#####\n#...#\n#...#\n#...#\n#####").unwrap();
//! let mut rng = SimpleRng::new(7);
//! let mut player = Player::place(&mut grid, None, &mut rng).unwrap();
//!
//! // A frame's worth of forward movement; a wall just rejects it.
//! let outcome = player.step(&mut grid, Some(Intent::Forward), 0.016);
//! assert!(matches!(outcome, StepOutcome::Moved | StepOutcome::Blocked));
//! ```

pub mod grid;
pub mod player;
pub mod raycast;
pub mod rng;

pub use tui_fps_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, MapError};
pub use player::{PlaceError, Player};
pub use raycast::{cast, column_angle, ColumnHit};
pub use rng::SimpleRng;
