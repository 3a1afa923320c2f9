//! newyear - terminal fireworks show and prompt-echo greeter.
//!
//! The library holds everything the `newyear` binary needs:
//!
//! - `prompt`: one-line question/answer exchanges (`ask`, and the wish after the show)
//! - `fireworks`: the burst model, ANSI renderer, pacing and the show state machine
//! - `config`: TOML configuration with defaults
//! - `cli`: clap definitions (shared with `xtask` for man pages)
//! - `logging`: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod fireworks;
pub mod logging;
pub mod prompt;

pub use config::{Config, ConfigError, FireworksConfig};
pub use prompt::Exchange;
