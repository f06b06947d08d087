use serde::{Deserialize, Serialize};
use std::fmt;

/// Named color understood by the inline `[name]...[-]` markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Yellow,
    Orange,
    Red,
    DarkRed,
    Cyan,
    Gray,
    White,
}

impl ColorTag {
    pub const ALL: [Self; 8] = [
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Red,
        Self::DarkRed,
        Self::Cyan,
        Self::Gray,
        Self::White,
    ];

    /// Markup name, e.g. `"darkred"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::DarkRed => "darkred",
            Self::Cyan => "cyan",
            Self::Gray => "gray",
            Self::White => "white",
        }
    }

    /// Case-insensitive lookup; `"grey"` is accepted as well.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "grey" {
            return Some(Self::Gray);
        }
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Convert to a [`ratatui::style::Color`] for terminal output.
    #[inline]
    pub fn to_ratatui(self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Orange => Color::Rgb(255, 165, 0),
            Self::Red => Color::Red,
            Self::DarkRed => Color::Rgb(139, 0, 0),
            Self::Cyan => Color::Cyan,
            Self::Gray => Color::Gray,
            Self::White => Color::White,
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
