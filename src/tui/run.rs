//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread feeds an mpsc channel; the event loop owns the
//! App and is the only caller of the navigator.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::types::Key;

use super::state::{App, AppEvent, Input};
use super::update::apply;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to presenter input.
///
/// Returns None for key releases (reported by some terminals), so a
/// single physical press moves exactly once. Unbound presses still reach
/// the navigator as [`Key::Other`]: they cancel a pending count.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Quit),
            _ => Some(Input::Navigate(Key::Other)),
        };
    }

    let nav = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Input::Quit),

        KeyCode::Char(c @ '0'..='9') => Key::Digit(c as u8 - b'0'),
        KeyCode::Char('g') => Key::G,
        KeyCode::Char('G') => Key::ShiftG,

        // Slides
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char('j') => Key::J,
        KeyCode::Right => Key::Right,
        KeyCode::Char('l') => Key::L,
        KeyCode::Enter => Key::Enter,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Char('k') => Key::K,
        KeyCode::Left => Key::Left,
        KeyCode::Char('h') => Key::H,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::Char('N') => Key::ShiftN,

        // Sections
        KeyCode::Up => Key::Up,
        KeyCode::Char('p') => Key::P,
        KeyCode::Down => Key::Down,
        KeyCode::Char('n') => Key::N,

        _ => Key::Other,
    };

    Some(Input::Navigate(nav))
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// KEY READER
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue, // ignore mouse, focus, paste
                Err(e) => {
                    log::warn!("terminal event read failed: {}", e);
                    break;
                }
            };
            if tx.send(forwarded).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the presenter until the user quits.
pub fn run(mut app: App) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    log::info!(
        "presenting {} slides, starting at slide {}",
        app.nav.total_slides,
        app.nav.page + 1
    );

    let result = event_loop(&mut terminal, &mut app, &rx);

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // reader thread gone
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(input) = map_key(key) {
                    apply(app, input);
                }
            }
            AppEvent::Resize => {} // redrawn at top of loop
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
