//! Value enums shared by the command line and the UI.

use clap::ValueEnum;

/// Display theme selectable at startup.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn is_dark(self) -> bool {
        self == ThemeChoice::Dark
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeChoice::Dark
        } else {
            ThemeChoice::Light
        }
    }

    /// Label for the toggle control, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "Switch to Light Mode",
            ThemeChoice::Light => "Switch to Dark Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_names_other_theme() {
        assert_eq!(ThemeChoice::from_dark_mode(true).toggle_label(), "Switch to Light Mode");
        assert_eq!(ThemeChoice::from_dark_mode(false).toggle_label(), "Switch to Dark Mode");
    }

    #[test]
    fn test_default_is_dark() {
        assert!(ThemeChoice::default().is_dark());
        assert!(!ThemeChoice::Light.is_dark());
    }
}
