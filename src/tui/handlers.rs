use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Pure key decoding: maps raw key events to mode-specific actions. The
/// App applies them, so the tables stay testable without a terminal.
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Esc => NormalModeAction::HandleEscape,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveDown,
            KeyCode::Left | KeyCode::Char('h') => NormalModeAction::MoveLeft,
            KeyCode::Right | KeyCode::Char('l') => NormalModeAction::MoveRight,
            KeyCode::Enter => NormalModeAction::Activate,
            KeyCode::Tab => NormalModeAction::CycleFocus,
            KeyCode::Char('[') => NormalModeAction::PrevApp,
            KeyCode::Char(']') => NormalModeAction::NextApp,
            KeyCode::Char(' ') => NormalModeAction::ToggleFavorite,
            KeyCode::Char('o') => NormalModeAction::ToggleOs,
            KeyCode::Char('f') => NormalModeAction::ToggleFavoritesOnly,
            KeyCode::Char('t') => NormalModeAction::ToggleTheme,
            KeyCode::Char('b') => NormalModeAction::ToggleSidebar,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            KeyCode::Char('/') => NormalModeAction::EnterSearchMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_search_mode_key(key_event: KeyEvent) -> SearchModeAction {
        match key_event.code {
            KeyCode::Esc => SearchModeAction::CancelSearch,
            KeyCode::Enter => SearchModeAction::ConfirmSearch,
            KeyCode::Backspace => SearchModeAction::Backspace,
            KeyCode::Char(c) => SearchModeAction::InsertChar(c),
            _ => SearchModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    HandleEscape,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Activate,
    CycleFocus,
    PrevApp,
    NextApp,
    ToggleFavorite,
    ToggleOs,
    ToggleFavoritesOnly,
    ToggleTheme,
    ToggleSidebar,
    ToggleHelpMode,
    EnterSearchMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum SearchModeAction {
    None,
    CancelSearch,
    ConfirmSearch,
    Backspace,
    InsertChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::HandleEscape);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Activate);

        let key_event = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleFavorite);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveUp);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveDown);

        let key_event = KeyEvent::from(KeyCode::Char('h'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveLeft);

        let key_event = KeyEvent::from(KeyCode::Char('l'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveRight);
    }

    #[test]
    fn test_normal_mode_toggles() {
        let key_event = KeyEvent::from(KeyCode::Char('o'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleOs);

        let key_event = KeyEvent::from(KeyCode::Char('f'));
        assert_eq!(
            KeyHandler::handle_normal_mode_key(key_event),
            NormalModeAction::ToggleFavoritesOnly
        );

        let key_event = KeyEvent::from(KeyCode::Char('t'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleTheme);

        let key_event = KeyEvent::from(KeyCode::Char(']'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::NextApp);
    }

    #[test]
    fn test_normal_mode_ctrl_keys() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }

    #[test]
    fn test_search_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_search_mode_key(key_event), SearchModeAction::CancelSearch);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_search_mode_key(key_event), SearchModeAction::ConfirmSearch);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_search_mode_key(key_event), SearchModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(
            KeyHandler::handle_search_mode_key(key_event),
            SearchModeAction::InsertChar('a')
        );
    }
}
