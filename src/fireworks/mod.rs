//! Fireworks show.
//!
//! The show runs three phases in order:
//! - Animate: a fixed number of frames, each a random burst followed by a pause
//! - Announce: a centered message followed by a longer dwell
//! - WishPrompt: one [`Exchange`](crate::prompt::Exchange) on stdin/stdout
//!
//! # Architecture
//!
//! - `palette`: burst colors and the ANSI SGR codes they map to
//! - `burst`: burst geometry and random sampling
//! - `render`: ANSI output through crossterm commands
//! - `pacing`: cancellable frame delays and Ctrl-C handling
//! - `show`: the phase state machine tying the above together

mod burst;
mod error;
mod pacing;
mod palette;
mod render;
mod show;

pub use burst::{Burst, BurstSampler, Point, ANCHOR_COLS, ANCHOR_ROWS, GLYPH, GLYPH_OFFSETS};
pub use error::ShowError;
pub use pacing::{Interrupt, Pacer, RecordingPacer, ThreadPacer, INTERRUPTED_EXIT_CODE};
pub use palette::{Color, ANNOUNCE_STYLE, PALETTE, RESET};
pub use render::{center_column, styled_center_column, Renderer};
pub use show::{Phase, Show, ShowReport, ShowSettings};
