//! The fireworks show state machine.

use std::io::{BufRead, Write};
use std::time::Duration;

use rand::Rng;
use terminal_size::{terminal_size, Width};
use tracing::{debug, info};

use super::burst::{Burst, BurstSampler};
use super::error::ShowError;
use super::pacing::Pacer;
use super::render::{center_column, styled_center_column, Renderer};
use crate::config::FireworksConfig;
use crate::prompt::Exchange;

/// Where the show is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Drawing frame `frame` (0-based)
    Animate { frame: u32 },
    /// Showing the centered message
    Announce,
    /// Waiting for the wish; terminal
    WishPrompt,
}

impl Phase {
    /// Starting phase for a show with `frames` frames.
    pub fn first(frames: u32) -> Self {
        if frames == 0 {
            Self::Announce
        } else {
            Self::Animate { frame: 0 }
        }
    }

    /// Phase after this one in a show with `frames` frames.
    pub fn next(self, frames: u32) -> Self {
        match self {
            Self::Animate { frame } if frame + 1 < frames => Self::Animate { frame: frame + 1 },
            Self::Animate { .. } => Self::Announce,
            Self::Announce | Self::WishPrompt => Self::WishPrompt,
        }
    }
}

/// Resolved show parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSettings {
    pub frames: u32,
    pub frame_delay: Duration,
    pub dwell: Duration,
    pub message: String,
    pub screen_width: u16,
    pub message_row: u16,
    pub hide_cursor: bool,
    /// Center on the visible width of the message instead of the classic
    /// styled length
    pub fit_terminal: bool,
    pub wish: Exchange,
}

impl Default for ShowSettings {
    fn default() -> Self {
        Self::from_config(&FireworksConfig::default(), Exchange::wish())
    }
}

impl ShowSettings {
    /// Build settings from configuration.
    ///
    /// With `fit_terminal` the screen width is the detected terminal width,
    /// falling back to `screen_width` when there is no terminal.
    pub fn from_config(config: &FireworksConfig, wish: Exchange) -> Self {
        let screen_width = if config.fit_terminal {
            match terminal_size() {
                Some((Width(width), _)) if width > 0 => width,
                _ => {
                    debug!(
                        fallback = config.screen_width,
                        "no terminal size available, using configured width"
                    );
                    config.screen_width
                }
            }
        } else {
            config.screen_width
        };

        Self {
            frames: config.frames,
            frame_delay: Duration::from_millis(config.frame_delay_ms),
            dwell: Duration::from_millis(config.dwell_ms),
            message: config.message.clone(),
            screen_width,
            message_row: config.message_row,
            hide_cursor: config.hide_cursor,
            fit_terminal: config.fit_terminal,
            wish,
        }
    }

    /// Column the announce message starts at.
    ///
    /// The classic layout counts the style and reset sequences as part of
    /// the message length. With `fit_terminal` only visible columns count.
    pub fn message_column(&self) -> u16 {
        if self.fit_terminal {
            center_column(self.screen_width, &self.message)
        } else {
            styled_center_column(self.screen_width, &self.message)
        }
    }
}

/// What a completed show produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowReport {
    /// Bursts in the order they were drawn
    pub bursts: Vec<Burst>,
    pub wish: String,
}

/// Runs the phases of a fireworks show.
pub struct Show {
    settings: ShowSettings,
}

impl Show {
    pub fn new(settings: ShowSettings) -> Self {
        Self { settings }
    }

    /// Run the whole show: animation, announce, then the wish prompt.
    pub fn run<W, R, P, G>(
        &self,
        renderer: &mut Renderer<W>,
        input: &mut R,
        pacer: &mut P,
        sampler: &mut BurstSampler<G>,
    ) -> Result<ShowReport, ShowError>
    where
        W: Write,
        R: BufRead + ?Sized,
        P: Pacer + ?Sized,
        G: Rng,
    {
        let bursts = self.play(renderer, pacer, sampler)?;
        let wish = self.ask_wish(renderer, input)?;
        Ok(ShowReport { bursts, wish })
    }

    /// Run the Animate and Announce phases.
    ///
    /// The cursor is hidden for the duration if configured, and shown again
    /// on every exit path.
    ///
    /// # Returns
    /// The bursts drawn, one per frame
    pub fn play<W, P, G>(
        &self,
        renderer: &mut Renderer<W>,
        pacer: &mut P,
        sampler: &mut BurstSampler<G>,
    ) -> Result<Vec<Burst>, ShowError>
    where
        W: Write,
        P: Pacer + ?Sized,
        G: Rng,
    {
        if self.settings.hide_cursor {
            renderer.hide_cursor()?;
        }
        let played = self.animate_and_announce(renderer, pacer, sampler);
        let restored = renderer.restore();
        let bursts = played?;
        restored?;
        Ok(bursts)
    }

    /// Run the WishPrompt phase.
    pub fn ask_wish<W, R>(&self, renderer: &mut Renderer<W>, input: &mut R) -> Result<String, ShowError>
    where
        W: Write,
        R: BufRead + ?Sized,
    {
        info!(phase = "wish_prompt", "asking for a wish");
        Ok(self.settings.wish.run(input, renderer.get_mut())?)
    }

    fn animate_and_announce<W, P, G>(
        &self,
        renderer: &mut Renderer<W>,
        pacer: &mut P,
        sampler: &mut BurstSampler<G>,
    ) -> Result<Vec<Burst>, ShowError>
    where
        W: Write,
        P: Pacer + ?Sized,
        G: Rng,
    {
        let frames = self.settings.frames;
        let mut bursts = Vec::new();
        let mut phase = Phase::first(frames);
        info!(phase = "animate", frames, "starting fireworks");

        loop {
            match phase {
                Phase::Animate { frame } => {
                    renderer.clear()?;
                    let burst = sampler.sample();
                    debug!(
                        frame,
                        col = burst.anchor.col,
                        row = burst.anchor.row,
                        color = burst.color.name(),
                        "burst"
                    );
                    renderer.draw_burst(&burst)?;
                    renderer.flush()?;
                    bursts.push(burst);
                    pacer.pause(self.settings.frame_delay)?;
                }
                Phase::Announce => {
                    let col = self.settings.message_column();
                    info!(
                        phase = "announce",
                        row = self.settings.message_row,
                        col,
                        "showing message"
                    );
                    renderer.clear()?;
                    renderer.draw_message(&self.settings.message, self.settings.message_row, col)?;
                    renderer.flush()?;
                    pacer.pause(self.settings.dwell)?;
                }
                Phase::WishPrompt => return Ok(bursts),
            }
            phase = phase.next(frames);
        }
    }
}
