//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render man pages from it.

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{FireworksConfig, MAX_FRAMES};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("NEWYEAR_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("NEWYEAR_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "newyear",
    about = "Terminal fireworks show and prompt-echo greeter",
    version,
    long_version = LONG_VERSION,
    long_about = "Plays an ANSI fireworks show in the terminal and asks for a wish, \
                  or asks a single question and echoes the answer.\n\n\
                  Configuration is read from the file printed by `newyear config path` \
                  (override with NEWYEAR_CONFIG). Logs go to stderr; set NEWYEAR_LOG \
                  or pass -v to see them."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask for Jonathan's height and echo it back
    Ask,

    /// Play the fireworks show, then ask for a wish
    Fireworks(FireworksArgs),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Overrides for the `[fireworks]` configuration section.
#[derive(Debug, Default, Args)]
pub struct FireworksArgs {
    /// Number of animation frames
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_FRAMES as i64))]
    pub frames: Option<u32>,

    /// Pause after each frame, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Pause after the message, in milliseconds
    #[arg(long, value_name = "MS")]
    pub dwell: Option<u64>,

    /// Message shown after the animation
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Seed the burst generator for a repeatable show
    #[arg(long)]
    pub seed: Option<u64>,

    /// Center the message on the real terminal width
    #[arg(long)]
    pub fit_terminal: bool,
}

impl FireworksArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut FireworksConfig) {
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(delay) = self.delay {
            config.frame_delay_ms = delay;
        }
        if let Some(dwell) = self.dwell {
            config.dwell_ms = dwell;
        }
        if let Some(message) = &self.message {
            config.message = message.clone();
        }
        if self.fit_terminal {
            config.fit_terminal = true;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
