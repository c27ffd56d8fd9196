//! Light/dark theme toggle.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opposite of the theme named in `current`.
///
/// `current` may be a full label such as `"Current Theme: light"`; anything
/// without `"light"` in it toggles back to light.
pub fn toggle_theme(current: &str) -> Theme {
    if current.contains("light") {
        Theme::Dark
    } else {
        Theme::Light
    }
}
