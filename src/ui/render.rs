//! Text rendering of a snapshot.
//!
//! The layout follows the single-screen view: title, both choices side by
//! side, the result banner, then the score. The banner fades in by blending
//! its color from the background toward the text color.

use colored::Colorize;

use crate::controller::Snapshot;

/// RGB color.
pub type Rgb = (u8, u8, u8);

/// Screen colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub accent: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: (0x28, 0x2c, 0x34),
            accent: (0x61, 0xda, 0xfb),
            text: (0xff, 0xff, 0xff),
        }
    }
}

impl Palette {
    /// Banner color at `opacity`: background at 0, text color at 1.
    #[must_use]
    pub fn blend(&self, opacity: f32) -> Rgb {
        let opacity = opacity.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let from = f32::from(from);
            let to = f32::from(to);
            (from + (to - from) * opacity).round() as u8
        };
        (
            mix(self.background.0, self.text.0),
            mix(self.background.1, self.text.1),
            mix(self.background.2, self.text.2),
        )
    }
}

pub const TITLE: &str = "Rock, Paper, Scissors";

/// Render one frame.
#[must_use]
pub fn render(snapshot: &Snapshot, palette: &Palette) -> String {
    let (ar, ag, ab) = palette.accent;
    let (tr, tg, tb) = palette.text;
    let round = &snapshot.round;

    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(format!("  {}", TITLE.truecolor(ar, ag, ab).bold()));
    lines.push(String::new());

    // Pad before coloring so escape codes don't count toward the width.
    let player = format!("{:<24}", format!("Player: {}", round.player_choice()));
    let computer = format!("Computer: {}", round.computer_choice());
    lines.push(format!(
        "  {}{}",
        player.truecolor(tr, tg, tb),
        computer.truecolor(tr, tg, tb)
    ));
    lines.push(String::new());

    let (br, bg, bb) = palette.blend(snapshot.banner_opacity());
    lines.push(format!("  {}", snapshot.result_text().truecolor(br, bg, bb).bold()));
    lines.push(String::new());

    lines.push(format!(
        "  Score  You {} Computer   ({} rounds, {} ties)",
        snapshot.score.to_string().truecolor(ar, ag, ab),
        snapshot.stats.rounds,
        snapshot.stats.ties
    ));
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
