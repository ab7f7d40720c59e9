use crate::application::{App, AppMode};
use crate::infrastructure::copy_to_clipboard;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::History => Self::handle_history_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// Text a key appends to the display, using the keypad glyphs.
    pub fn keypad_text(c: char) -> Option<&'static str> {
        let text = match c {
            '0' => "0",
            '1' => "1",
            '2' => "2",
            '3' => "3",
            '4' => "4",
            '5' => "5",
            '6' => "6",
            '7' => "7",
            '8' => "8",
            '9' => "9",
            '.' => ".",
            '+' => "+",
            '-' => "-",
            '*' => "×",
            '/' => "÷",
            '^' => "^",
            '%' => "%",
            '(' => "(",
            ')' => ")",
            's' => "sin(",
            'c' => "cos(",
            't' => "tan(",
            'l' => "log(",
            'n' => "ln(",
            'r' => "√(",
            'p' => "π",
            'e' => "e",
            _ => return None,
        };
        Some(text)
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('a') => app.select_all(),
                KeyCode::Char('y') => {
                    let result = copy_to_clipboard(&app.display);
                    app.set_copy_result(result);
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Enter | KeyCode::Char('=') => {
                app.evaluate();
            }
            KeyCode::Backspace => {
                app.delete_last();
            }
            KeyCode::Esc => {
                app.clear_all();
            }
            KeyCode::Char('h') => {
                app.open_history();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.show_help();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            KeyCode::Char(c) => {
                if let Some(text) = Self::keypad_text(c) {
                    app.append(text);
                }
            }
            _ => {}
        }
    }

    fn handle_history_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('q') => {
                app.close_history();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.previous_history_entry();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.next_history_entry();
            }
            KeyCode::Enter => {
                app.load_history_entry();
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                app.clear_history();
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keys_map_to_keypad_glyphs() {
        let mut app = App::default();
        type_str(&mut app, "6*7/2-1");
        assert_eq!(app.display, "6×7÷2-1");
    }

    #[test]
    fn test_function_shortcuts() {
        let mut app = App::default();
        type_str(&mut app, "r16)");
        assert_eq!(app.display, "√(16)");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.display, "4");
        assert_eq!(app.expression_line, "√(16) =");
    }

    #[test]
    fn test_equals_key_evaluates() {
        let mut app = App::default();
        type_str(&mut app, "50%=");
        assert_eq!(app.display, "0.5");
    }

    #[test]
    fn test_backspace_and_escape() {
        let mut app = App::default();
        type_str(&mut app, "123");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.display, "12");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.display, "0");
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut app = App::default();
        type_str(&mut app, "xyz");
        assert_eq!(app.display, "0");
    }

    #[test]
    fn test_ctrl_a_selects_display() {
        let mut app = App::default();
        type_str(&mut app, "99");
        InputHandler::handle_key_event(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert!(app.should_reset);

        type_str(&mut app, "1");
        assert_eq!(app.display, "1");
    }

    #[test]
    fn test_history_panel_keys() {
        let mut app = App::default();
        type_str(&mut app, "1+1=");
        type_str(&mut app, "2+2=");

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.mode, AppMode::History);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.display, "2");

        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.history.is_empty());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.mode, AppMode::Help);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.help_scroll, 6);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 5);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.help_scroll, 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }
}
