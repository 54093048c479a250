//! Terminal rendering crate.
//!
//! The world view renders the raycast scene into a plain framebuffer of
//! styled character cells; the terminal renderer flushes that framebuffer
//! with diffed, run-coalesced writes. The view itself is pure (no I/O) and
//! can be unit-tested headless.

pub mod fb;
pub mod renderer;
pub mod world_view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use world_view::{floor_shade, wall_brightness, wall_shade, Viewport, WorldView};
