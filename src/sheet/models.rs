use serde::{Deserialize, Serialize};

/// Which key-label convention is displayed and matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Mac,
    Win,
}

impl Os {
    pub fn toggle(self) -> Self {
        match self {
            Os::Mac => Os::Win,
            Os::Win => Os::Mac,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Os::Mac => "macOS",
            Os::Win => "Windows",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Os::Mac => "mac",
            Os::Win => "win",
        }
    }
}

impl std::str::FromStr for Os {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mac" | "macos" => Ok(Os::Mac),
            "win" | "windows" => Ok(Os::Win),
            other => Err(format!("unknown OS '{}', expected 'mac' or 'win'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// The two parallel key sequences of a shortcut, one per OS variant.
#[derive(Debug, Clone, Deserialize)]
pub struct KeySet {
    pub mac: Vec<String>,
    pub win: Vec<String>,
}

impl KeySet {
    pub fn for_os(&self, os: Os) -> &[String] {
        match os {
            Os::Mac => &self.mac,
            Os::Win => &self.win,
        }
    }
}

/// One keyboard-action mapping for one target application. Immutable,
/// defined entirely in the embedded dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Shortcut {
    pub id: String,
    pub action: String,
    pub category: String,
    #[serde(flatten)]
    pub keys: KeySet,
    #[serde(default)]
    pub description: Option<String>,
}

/// An application and its ordered shortcut list.
#[derive(Debug, Clone, Deserialize)]
pub struct AppData {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
}

impl AppData {
    /// Parses the `#rrggbb` accent color; falls back to white on anything
    /// that isn't six hex digits.
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        if hex.len() != 6 {
            return (255, 255, 255);
        }
        let channel = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }
}
