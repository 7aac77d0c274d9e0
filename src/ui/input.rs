use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{
    can_add_field_char, can_add_password_char, App, AppState, LoginFocus, RegisterFocus, Route,
    PAGE_SCROLL_SIZE,
};

/// Handle a key event. Returns Ok(true) when the app should exit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Overlays take priority over everything else
    if matches!(app.state, AppState::ShowingHelp) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // Text-entry pages consume printable keys before the global bindings
    match app.route {
        Route::Login => return handle_login_input(app, key).await,
        Route::Register => return handle_register_input(app, key).await,
        Route::Search => return handle_search_input(app, key),
        _ => {}
    }

    // Global keys for the browse pages
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char('1') => app.navigate(Route::Home),
        KeyCode::Char('2') | KeyCode::Char('/') => app.navigate(Route::Search),
        KeyCode::Char('3') => {
            // The guard sends this wherever the session allows
            if app.is_authenticated() {
                app.navigate(Route::Profile);
            } else {
                app.navigate(Route::Login);
            }
        }
        KeyCode::Char('4') => app.navigate(Route::Register),
        KeyCode::Char('j') | KeyCode::Down => {
            if matches!(app.route, Route::Breed(_)) {
                app.detail_scroll = app.detail_scroll.saturating_add(1);
            } else {
                app.select_next();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if matches!(app.route, Route::Breed(_)) {
                app.detail_scroll = app.detail_scroll.saturating_sub(1);
            } else {
                app.select_prev();
            }
        }
        KeyCode::PageDown => {
            if matches!(app.route, Route::Breed(_)) {
                app.detail_scroll = app.detail_scroll.saturating_add(PAGE_SCROLL_SIZE as u16);
            } else {
                app.select_page_down();
            }
        }
        KeyCode::PageUp => {
            if matches!(app.route, Route::Breed(_)) {
                app.detail_scroll = app.detail_scroll.saturating_sub(PAGE_SCROLL_SIZE as u16);
            } else {
                app.select_page_up();
            }
        }
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('n') => {
            if matches!(app.route, Route::Home) {
                app.next_breeds_page();
            }
        }
        KeyCode::Char('p') => {
            if matches!(app.route, Route::Home) {
                app.prev_breeds_page();
            }
        }
        KeyCode::Char('r') => app.refresh_current(),
        KeyCode::Char('x') => {
            if matches!(app.route, Route::Profile) {
                app.logout();
            }
        }
        KeyCode::Esc => match app.route {
            Route::Breed(_) => app.close_breed(),
            Route::Profile => app.navigate(Route::Home),
            _ => {}
        },
        _ => {}
    }

    Ok(false)
}

async fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Home);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.login_focus = app.login_focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.login_focus = app.login_focus.prev();
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Email => {
                app.login_focus = LoginFocus::Password;
            }
            LoginFocus::Password => {
                app.login_focus = LoginFocus::Submit;
            }
            LoginFocus::Submit => {
                // On success this navigates home; on failure login_error is set
                let _ = app.attempt_login().await;
            }
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Email => {
                app.login_email.pop();
            }
            LoginFocus::Password => {
                app.login_password.pop();
            }
            LoginFocus::Submit => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginFocus::Email => {
                if can_add_field_char(app.login_email.len(), c) {
                    app.login_email.push(c);
                }
            }
            LoginFocus::Password => {
                if can_add_password_char(app.login_password.len(), c) {
                    app.login_password.push(c);
                }
            }
            LoginFocus::Submit => {}
        },
        _ => {}
    }
    Ok(false)
}

async fn handle_register_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Home);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.register_focus = app.register_focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.register_focus = app.register_focus.prev();
        }
        KeyCode::Enter => match app.register_focus {
            RegisterFocus::Submit => {
                // On success this lands on the sign-in page prefilled
                let _ = app.attempt_register().await;
            }
            _ => {
                app.register_focus = app.register_focus.next();
            }
        },
        KeyCode::Backspace => {
            if let Some(field) = register_field_mut(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            let masked = matches!(
                app.register_focus,
                RegisterFocus::Password | RegisterFocus::Confirm
            );
            if let Some(field) = register_field_mut(app) {
                let allowed = if masked {
                    can_add_password_char(field.len(), c)
                } else {
                    can_add_field_char(field.len(), c)
                };
                if allowed {
                    field.push(c);
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

/// The form field the register focus points at, if any
fn register_field_mut(app: &mut App) -> Option<&mut String> {
    match app.register_focus {
        RegisterFocus::Name => Some(&mut app.register_name),
        RegisterFocus::Email => Some(&mut app.register_email),
        RegisterFocus::Password => Some(&mut app.register_password),
        RegisterFocus::Confirm => Some(&mut app.register_confirm),
        RegisterFocus::Submit => None,
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            // First Esc clears the search, a second one leaves the page
            if app.search_query.is_empty() && !app.searched {
                app.navigate(Route::Home);
            } else {
                app.clear_search();
            }
        }
        KeyCode::Enter => {
            // Re-pressing Enter on an unchanged query opens the highlighted row
            if app.searched && app.search_query.trim() == app.search_term {
                app.open_selected();
            } else {
                app.run_search();
            }
        }
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::PageDown => app.select_page_down(),
        KeyCode::PageUp => app.select_page_up(),
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(c) => {
            if can_add_field_char(app.search_query.len(), c) {
                app.search_query.push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}
