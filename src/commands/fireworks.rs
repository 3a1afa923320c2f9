//! `newyear fireworks` handler

use std::io;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use newyear::cli::FireworksArgs;
use newyear::fireworks::{BurstSampler, Interrupt, Renderer, Show, ShowSettings, ThreadPacer};
use newyear::Config;

/// Play the show on stdout, then ask for a wish on stdin.
///
/// Ctrl-C during the animation or dwell stops the show and restores the
/// cursor; at the wish prompt it exits immediately.
pub fn handle(args: &FireworksArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.apply(&mut config.fireworks);
    config.validate()?;

    let mut settings = ShowSettings::from_config(&config.fireworks, config.wish.clone());
    if !atty::is(atty::Stream::Stdout) {
        settings.hide_cursor = false;
    }
    let show = Show::new(settings);

    let rng = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut sampler = BurstSampler::new(rng);

    let interrupt = Interrupt::install().context("Failed to install Ctrl-C handler")?;
    let mut pacer = ThreadPacer::new(interrupt.clone());

    let stdout = io::stdout();
    let mut renderer = Renderer::new(stdout.lock());

    interrupt.set_cooperative(true);
    let played = show.play(&mut renderer, &mut pacer, &mut sampler);
    interrupt.set_cooperative(false);
    let bursts = played?;
    tracing::info!(frames = bursts.len(), "animation finished");

    let stdin = io::stdin();
    show.ask_wish(&mut renderer, &mut stdin.lock())?;
    Ok(())
}
