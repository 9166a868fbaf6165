use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, FetchRequest, Focus};

/// Route a key event to the app.
///
/// Returns a [`FetchRequest`] when the lookup pane submitted a name; the
/// caller is responsible for spawning the fetch.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<FetchRequest> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') {
        app.request_quit();
        return None;
    }

    match key.code {
        KeyCode::Tab => {
            app.toggle_focus();
            None
        }
        KeyCode::Enter if app.focus() == Focus::Lookup => app.submit_lookup(),
        KeyCode::Backspace => {
            app.backspace();
            None
        }
        KeyCode::Char(_) if is_ctrl_char(key, 'u') => {
            app.clear_field();
            None
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_char(ch);
            None
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
