use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::UiSettings;
use crate::error::AppError;
use crate::stats::PlotData;
use crate::ui;

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    data: &PlotData,
    ui_settings: &UiSettings,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, data, ui_settings))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Show the plot full-screen until the user quits.
///
/// Raw mode and the alternate screen are undone on every return path.
pub fn show(data: &PlotData, ui_settings: &UiSettings) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(t) => t,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    };

    let run_result = event_loop(&mut terminal, data, ui_settings);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit_key(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&press(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn key_release_does_not_quit() {
        let mut key = press(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!is_quit_key(&key));
    }
}
