//! TUI state: pure types, zero effects.
//!
//! The presenter model is just the deck plus the navigator's state.
//! Navigation semantics live in [`crate::navigation`]; this module only
//! adds what the terminal host needs on top (quit flag, event plumbing).

use crossterm::event::KeyEvent;

use crate::deck::Deck;
use crate::navigation::navigate_slide;
use crate::types::{Key, NavigationState};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// The key reader thread is the only producer. Resizes are forwarded so
/// the loop redraws at the new size.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize,
}

// ============================================================================
// INPUT
// ============================================================================

/// What a key press means to the presenter.
///
/// Quitting belongs to the host; everything else is handed to the
/// navigator, including keys it will ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Feed this key to the navigator.
    Navigate(Key),
    /// Leave the presentation.
    Quit,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level presenter model.
#[derive(Debug)]
pub struct App {
    /// The loaded presentation.
    pub deck: Deck,

    /// Current position. `total_sections` always matches `deck` at `page`.
    pub nav: NavigationState,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Open `deck` at its first slide.
    pub fn new(deck: Deck) -> Self {
        let nav = NavigationState::new(deck.len(), deck.sections_in(0));
        App {
            deck,
            nav,
            should_quit: false,
        }
    }

    /// Open `deck` at a 1-based slide number (clamped to the deck).
    pub fn at_slide(deck: Deck, slide: usize) -> Self {
        let page = navigate_slide(&slide.to_string(), deck.len());
        let nav = NavigationState {
            page,
            total_sections: deck.sections_in(page),
            ..NavigationState::new(deck.len(), 0)
        };
        App {
            deck,
            nav,
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
