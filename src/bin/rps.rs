//! Rock, Paper, Scissors in the terminal.
//!
//! Pick a hand from the menu; the computer answers with a random one, the
//! result fades in, and the score accumulates until you quit.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use rust_rps::animation::Easing;
use rust_rps::controller::Snapshot;
use rust_rps::core::config::{DEFAULT_FRAME_MS, DEFAULT_REVEAL_MS};
use rust_rps::core::SessionConfig;
use rust_rps::session::Session;
use rust_rps::ui::{self, MenuItem, Palette};

#[derive(Debug, Parser)]
#[command(name = "rps", about = "Rock, Paper, Scissors against the computer")]
struct Args {
    /// Seed for the computer's draws (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Length of the result fade-in in milliseconds
    #[arg(long, default_value_t = DEFAULT_REVEAL_MS)]
    reveal_ms: u64,

    /// Redraw interval while the result fades in, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_MS, value_parser = clap::value_parser!(u64).range(1..))]
    frame_ms: u64,

    /// Fade-in curve
    #[arg(long, value_enum, default_value_t = Easing::EaseInOut)]
    easing: Easing,
}

impl Args {
    fn config(&self) -> SessionConfig {
        let config = SessionConfig::new()
            .with_reveal_ms(self.reveal_ms)
            .with_frame_ms(self.frame_ms)
            .with_easing(self.easing);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn draw(snapshot: &Snapshot, palette: &Palette) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\x1B[2J\x1B[H{}", ui::render(snapshot, palette)).context("draw frame")?;
    stdout.flush().context("flush frame")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut session = Session::from_config(args.config()).context("start session")?;
    let palette = Palette::default();

    let (frames, mut pending) = tokio::sync::mpsc::unbounded_channel::<Snapshot>();
    session.subscribe(Box::new(move |snapshot: &Snapshot| {
        // Receiver only goes away on shutdown.
        let _ = frames.send(snapshot.clone());
    }));

    draw(&session.snapshot(), &palette)?;
    let mut last = MenuItem::Play(rust_rps::core::Choice::Rock);

    loop {
        let item = tokio::task::spawn_blocking(move || ui::prompt(last))
            .await
            .context("prompt task")?
            .context("read selection")?;

        match item {
            MenuItem::Play(choice) => {
                session.play(choice);
            }
            MenuItem::Reset => session.reset(),
            MenuItem::ResetScore => session.reset_score(),
            MenuItem::Quit => break,
        }
        last = item;

        // Redraw every frame until the reveal settles.
        {
            let settle = session.settle();
            tokio::pin!(settle);
            loop {
                tokio::select! {
                    Some(snapshot) = pending.recv() => draw(&snapshot, &palette)?,
                    _ = &mut settle => break,
                }
            }
        }
        while let Ok(snapshot) = pending.try_recv() {
            draw(&snapshot, &palette)?;
        }
    }

    let snapshot = session.snapshot();
    log::info!(
        "final score {} after {} rounds ({} ties)",
        snapshot.score,
        snapshot.stats.rounds,
        snapshot.stats.ties
    );
    println!("Final score: You {} Computer", snapshot.score);
    Ok(())
}
