use crate::config::Config;
use crate::sheet::data::Dataset;
use crate::sheet::filter::{self, Criteria};
use crate::sheet::models::{AppData, Os, Shortcut, Theme};
use crate::store::{self, Store};
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction, SearchModeAction};
use crate::tui::keyboard::{self, KeyboardState};
use crate::tui::search::SearchState;
use anyhow::Result;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Keyboard,
    Grid,
}

/// All session state. Every transition happens synchronously inside
/// `handle_key_event`; the draw pass only reads.
pub struct App {
    pub dataset: Dataset,
    store: Store,
    pub current_app_id: String,
    pub os: Os,
    pub theme: Theme,
    pub search: SearchState,
    pub active_key: Option<String>,
    pub favorites: Vec<String>,
    pub favorites_only: bool,
    pub sidebar_open: bool,
    pub focus: Focus,
    pub keyboard: KeyboardState,
    pub sidebar_index: usize,
    pub grid_index: usize,
    pub help_mode: bool,
    pub should_quit: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new(dataset: Dataset, store: Store, config: &Config) -> Self {
        // Stored theme wins; the terminal heuristic is only a fallback
        let theme = store.load_theme().unwrap_or_else(store::detect_terminal_theme);
        let favorites = store.load_favorites();
        let sidebar_index = dataset.position(&config.default_app).unwrap_or(0);

        Self {
            dataset,
            store,
            current_app_id: config.default_app.clone(),
            os: config.default_os,
            theme,
            search: SearchState::new(),
            active_key: None,
            favorites,
            favorites_only: false,
            sidebar_open: true,
            focus: Focus::Grid,
            keyboard: KeyboardState::new(),
            sidebar_index,
            grid_index: 0,
            help_mode: false,
            should_quit: false,
            status: None,
        }
    }

    pub fn current_app(&self) -> Option<&AppData> {
        self.dataset.app(&self.current_app_id)
    }

    pub fn criteria(&self) -> Criteria {
        Criteria {
            query: self.search.query.clone(),
            active_key: self.active_key.clone(),
            favorites_only: self.favorites_only,
            favorites: self.favorites.clone(),
        }
    }

    /// The exact ordered subset to display. Unknown app ids yield an
    /// empty list, which the UI renders as the no-results view.
    pub fn visible_shortcuts(&self) -> Vec<&Shortcut> {
        match self.current_app() {
            Some(app) => filter::filter_shortcuts(&app.shortcuts, self.os, &self.criteria()),
            None => Vec::new(),
        }
    }

    pub fn selected_shortcut(&self) -> Option<&Shortcut> {
        self.visible_shortcuts().get(self.grid_index).copied()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event)
        } else if self.search.search_mode {
            self.handle_search_mode_key(key_event)
        } else {
            self.handle_normal_mode_key(key_event)
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::HandleEscape => self.handle_escape(),
            NormalModeAction::MoveUp => self.move_up(),
            NormalModeAction::MoveDown => self.move_down(),
            NormalModeAction::MoveLeft => self.move_left(),
            NormalModeAction::MoveRight => self.move_right(),
            NormalModeAction::Activate => self.activate(),
            NormalModeAction::CycleFocus => self.cycle_focus(),
            NormalModeAction::PrevApp => self.step_app(-1),
            NormalModeAction::NextApp => self.step_app(1),
            NormalModeAction::ToggleFavorite => self.toggle_favorite_selected(),
            NormalModeAction::ToggleOs => {
                self.os = self.os.toggle();
                self.clamp_grid_index();
            }
            NormalModeAction::ToggleFavoritesOnly => self.toggle_favorites_only(),
            NormalModeAction::ToggleTheme => self.toggle_theme(),
            NormalModeAction::ToggleSidebar => self.toggle_sidebar(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::EnterSearchMode => self.search.enter_search_mode(),
            NormalModeAction::None => {}
        }
        Ok(())
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
        Ok(())
    }

    fn handle_search_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_search_mode_key(key_event) {
            SearchModeAction::CancelSearch => self.search.cancel_search(),
            SearchModeAction::ConfirmSearch => self.search.confirm_search(),
            SearchModeAction::Backspace => self.search.backspace(),
            SearchModeAction::InsertChar(c) => self.search.insert_char(c),
            SearchModeAction::None => {}
        }
        self.clamp_grid_index();
        Ok(())
    }

    /// Escape peels filters off one at a time: key filter, then query,
    /// then favorites-only. Something is always left rendered.
    fn handle_escape(&mut self) {
        if self.active_key.is_some() {
            self.active_key = None;
        } else if self.search.is_active() {
            self.search.clear();
        } else if self.favorites_only {
            self.favorites_only = false;
        } else {
            self.status = None;
        }
        self.clamp_grid_index();
    }

    fn move_up(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                if self.sidebar_index > 0 {
                    self.sidebar_index -= 1;
                }
            }
            Focus::Keyboard => self.keyboard.move_up(),
            Focus::Grid => {
                if self.grid_index > 0 {
                    self.grid_index -= 1;
                }
            }
        }
    }

    fn move_down(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                if self.sidebar_index < self.dataset.apps.len().saturating_sub(1) {
                    self.sidebar_index += 1;
                }
            }
            Focus::Keyboard => self.keyboard.move_down(),
            Focus::Grid => {
                if self.grid_index < self.visible_shortcuts().len().saturating_sub(1) {
                    self.grid_index += 1;
                }
            }
        }
    }

    fn move_left(&mut self) {
        if self.focus == Focus::Keyboard {
            self.keyboard.move_left();
        }
    }

    fn move_right(&mut self) {
        if self.focus == Focus::Keyboard {
            self.keyboard.move_right();
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                if let Some(app) = self.dataset.apps.get(self.sidebar_index) {
                    self.current_app_id = app.id.clone();
                    self.grid_index = 0;
                }
            }
            Focus::Keyboard => {
                let key = self.keyboard.key_under_cursor();
                self.active_key = keyboard::toggle_key(self.active_key.as_deref(), key);
                self.clamp_grid_index();
            }
            Focus::Grid => self.toggle_favorite_selected(),
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => {
                if self.keyboard_visible() {
                    Focus::Keyboard
                } else {
                    Focus::Grid
                }
            }
            Focus::Keyboard => Focus::Grid,
            Focus::Grid => {
                if self.sidebar_open {
                    Focus::Sidebar
                } else if self.keyboard_visible() {
                    Focus::Keyboard
                } else {
                    Focus::Grid
                }
            }
        };
    }

    /// The keyboard pane is hidden in favorites-only mode, matching the
    /// favorites view being a flat curated list.
    pub fn keyboard_visible(&self) -> bool {
        !self.favorites_only
    }

    fn step_app(&mut self, step: isize) {
        if self.dataset.apps.is_empty() {
            return;
        }
        let len = self.dataset.apps.len() as isize;
        let current = self.dataset.position(&self.current_app_id).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.current_app_id = self.dataset.apps[next].id.clone();
        self.sidebar_index = next;
        self.grid_index = 0;
    }

    fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
        if !self.keyboard_visible() && self.focus == Focus::Keyboard {
            self.focus = Focus::Grid;
        }
        self.clamp_grid_index();
    }

    fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        if !self.sidebar_open && self.focus == Focus::Sidebar {
            self.focus = Focus::Grid;
        }
    }

    /// Write-then-reflect: the store is rewritten first, and memory only
    /// changes once the write succeeded.
    fn toggle_favorite_selected(&mut self) {
        let Some(id) = self.selected_shortcut().map(|s| s.id.clone()) else {
            return;
        };

        let mut next = self.favorites.clone();
        match next.iter().position(|f| f == &id) {
            Some(pos) => {
                next.remove(pos);
            }
            None => next.push(id),
        }

        match self.store.save_favorites(&next) {
            Ok(()) => {
                self.favorites = next;
                self.clamp_grid_index();
            }
            Err(e) => self.status = Some(format!("Failed to save favorites: {}", e)),
        }
    }

    fn toggle_theme(&mut self) {
        let next = self.theme.toggle();
        match self.store.save_theme(next) {
            Ok(()) => self.theme = next,
            Err(e) => self.status = Some(format!("Failed to save theme: {}", e)),
        }
    }

    fn clamp_grid_index(&mut self) {
        let len = self.visible_shortcuts().len();
        if self.grid_index >= len {
            self.grid_index = len.saturating_sub(1);
        }
    }
}
