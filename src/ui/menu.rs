//! Selection controls.

use dialoguer::Select;

use crate::core::Choice;

/// One entry of the control menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Play(Choice),
    /// Clear the shown round.
    Reset,
    ResetScore,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Play(Choice::Rock),
        MenuItem::Play(Choice::Paper),
        MenuItem::Play(Choice::Scissors),
        MenuItem::Reset,
        MenuItem::ResetScore,
        MenuItem::Quit,
    ];

    #[must_use]
    pub fn label(self) -> String {
        match self {
            MenuItem::Play(choice) => format!("{} {}", choice.glyph(), choice),
            MenuItem::Reset => "Reset round".to_string(),
            MenuItem::ResetScore => "Reset score".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }

    /// Position in [`MenuItem::ALL`].
    #[must_use]
    pub fn position(self) -> usize {
        MenuItem::ALL.iter().position(|item| *item == self).unwrap_or(0)
    }
}

/// Show the controls and wait for a selection. Escape means quit.
pub fn prompt(default: MenuItem) -> Result<MenuItem, dialoguer::Error> {
    let labels: Vec<String> = MenuItem::ALL.iter().map(|item| item.label()).collect();
    let selection = Select::new()
        .with_prompt("Your move")
        .report(false)
        .items(&labels[..])
        .default(default.position())
        .interact_opt()?;

    Ok(selection.map_or(MenuItem::Quit, |index| MenuItem::ALL[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(MenuItem::Play(Choice::Rock).label(), "✊ Rock");
        assert_eq!(MenuItem::Reset.label(), "Reset round");
    }

    #[test]
    fn test_positions_match_all() {
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            assert_eq!(item.position(), i);
        }
        // Not in the menu
        assert_eq!(MenuItem::Play(Choice::None).position(), 0);
    }
}
