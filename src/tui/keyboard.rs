use crate::sheet::models::Os;

/// Fixed key layout: function row, number row, QWERTY rows, modifier row.
/// Labels are the canonical mac-style tokens; `display_label` swaps the
/// two platform-dependent ones for display only.
pub const ROWS: &[&[&str]] = &[
    &["Esc", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12"],
    &["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace"],
    &["Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]", "\\"],
    &["Caps", "A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "Enter"],
    &["Shift", "Z", "X", "C", "V", "B", "N", "M", ",", ".", "/", "Shift"],
    &["Ctrl", "Opt", "Cmd", "Space", "Cmd", "Opt", "Ctrl"],
];

/// Cursor over the virtual keyboard grid.
pub struct KeyboardState {
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    pub fn key_under_cursor(&self) -> &'static str {
        ROWS[self.cursor_row][self.cursor_col]
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row < ROWS.len() - 1 {
            self.cursor_row += 1;
            self.clamp_col();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < ROWS[self.cursor_row].len() - 1 {
            self.cursor_col += 1;
        }
    }

    fn clamp_col(&mut self) {
        let row_len = ROWS[self.cursor_row].len();
        if self.cursor_col >= row_len {
            self.cursor_col = row_len - 1;
        }
    }
}

/// Idempotent toggle: selecting the already-active key clears the filter.
pub fn toggle_key(active: Option<&str>, key: &str) -> Option<String> {
    if active == Some(key) {
        None
    } else {
        Some(key.to_string())
    }
}

/// Display label for a key. Only two keys differ between platforms; the
/// canonical token is what flows into the filter engine either way.
pub fn display_label(key: &str, os: Os) -> &str {
    if os == Os::Win {
        match key {
            "Cmd" => return "Win",
            "Opt" => return "Alt",
            _ => {}
        }
    }
    key
}
