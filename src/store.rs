use crate::sheet::models::Theme;
use std::fs;
use std::path::PathBuf;

/// On-disk store for the two persisted user scalars: the theme choice and
/// the favorite-shortcut id list. Each lives in its own file under the
/// config directory; writers rewrite the whole value. Concurrent processes
/// are last-write-wins, which is accepted.
pub struct Store {
    dir: PathBuf,
}

const THEME_FILE: &str = "theme";
const FAVORITES_FILE: &str = "favorites.json";

impl Store {
    pub fn open() -> Result<Self, StoreError> {
        let config_dir = dirs::config_dir().ok_or(StoreError::ConfigDirNotFound)?;
        Ok(Self::at(config_dir.join("cheatsheet")))
    }

    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The stored theme, or None when nothing valid is stored. Unreadable
    /// or unrecognized content is treated the same as absent.
    pub fn load_theme(&self) -> Option<Theme> {
        let content = fs::read_to_string(self.dir.join(THEME_FILE)).ok()?;
        Theme::parse(&content)
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.write(THEME_FILE, theme.as_str())
    }

    /// The stored favorite ids. Absent or malformed content fails safe as
    /// an empty list; the user never sees a parse error.
    pub fn load_favorites(&self) -> Vec<String> {
        let content = match fs::read_to_string(self.dir.join(FAVORITES_FILE)) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    pub fn save_favorites(&self, favorites: &[String]) -> Result<(), StoreError> {
        let content = serde_json::to_string(favorites)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;
        self.write(FAVORITES_FILE, &content)
    }

    fn write(&self, name: &str, content: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteError(e.to_string()))?;
        fs::write(self.dir.join(name), content).map_err(|e| StoreError::WriteError(e.to_string()))
    }
}

#[derive(Debug)]
pub enum StoreError {
    ConfigDirNotFound,
    WriteError(String),
    SerializeError(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::ConfigDirNotFound => {
                write!(f, "Could not find config directory")
            }
            StoreError::WriteError(msg) => {
                write!(f, "Failed to write store file: {}", msg)
            }
            StoreError::SerializeError(msg) => {
                write!(f, "Failed to serialize store value: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Best-effort guess at the terminal's color scheme, used only when no
/// theme has been stored. COLORFGBG is "<fg>;<bg>" with low ANSI indexes
/// meaning a dark background. Absent or unparseable reports as light,
/// matching the stored-preference default.
pub fn detect_terminal_theme() -> Theme {
    match std::env::var("COLORFGBG") {
        Ok(value) => theme_from_colorfgbg(&value),
        Err(_) => Theme::Light,
    }
}

fn theme_from_colorfgbg(value: &str) -> Theme {
    let bg = value.rsplit(';').next().and_then(|s| s.trim().parse::<u8>().ok());
    match bg {
        Some(n) if n <= 6 || n == 8 => Theme::Dark,
        _ => Theme::Light,
    }
}
