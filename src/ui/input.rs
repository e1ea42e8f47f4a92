use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.request_quit(),
            KeyCode::Char('l') => app.clear_filters(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_prev(),
        _ => {}
    }

    if app.is_editing() {
        match key.code {
            KeyCode::Char(c) => app.on_char(c),
            KeyCode::Backspace => app.on_backspace(),
            KeyCode::Enter => app.on_enter(),
            KeyCode::Esc => app.set_focus(Focus::Products),
            _ => {}
        }
        return;
    }

    match (app.focus(), key.code) {
        (_, KeyCode::Char('q') | KeyCode::Esc) => app.request_quit(),
        (Focus::Category, KeyCode::Right) => app.cycle_category(true),
        (Focus::Category, KeyCode::Left) => app.cycle_category(false),
        (Focus::Products, KeyCode::Down | KeyCode::Char('j')) => app.select_next(),
        (Focus::Products, KeyCode::Up | KeyCode::Char('k')) => app.select_prev(),
        (_, KeyCode::Char('/')) => app.set_focus(Focus::SearchQuery),
        (_, KeyCode::Char('r')) => app.retry(),
        _ => {}
    }
}
