//! Pure state transitions: (NavigationState, Input, Deck) → Transition.
//!
//! Wraps the navigator with the one thing it cannot know: how many
//! sections the slide it lands on has. Fully testable without a terminal.

use crate::deck::Deck;
use crate::navigation::transition;
use crate::types::NavigationState;

use super::state::{App, Input};

/// Result of handling one input.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this position (may equal the current one).
    Navigate(NavigationState),
    /// Quit the application.
    Quit,
}

/// Pure presenter transition.
///
/// After the navigator moves, `total_sections` is refreshed from the deck
/// for the resulting page and `section` is pulled back inside it.
pub fn update(nav: &NavigationState, input: Input, deck: &Deck) -> Transition {
    match input {
        Input::Quit => Transition::Quit,
        Input::Navigate(key) => {
            let next = transition(nav, key);
            Transition::Navigate(sync_sections(next, deck))
        }
    }
}

/// Apply an input to the app in place.
pub fn apply(app: &mut App, input: Input) {
    match update(&app.nav, input, &app.deck) {
        Transition::Navigate(nav) => {
            if nav.page != app.nav.page || nav.section != app.nav.section {
                log::debug!(
                    "{:?}: slide {} section {} -> slide {} section {}",
                    input,
                    app.nav.page + 1,
                    app.nav.section + 1,
                    nav.page + 1,
                    nav.section + 1,
                );
            }
            app.nav = nav;
        }
        Transition::Quit => {
            log::info!("quit requested on slide {}", app.nav.page + 1);
            app.should_quit = true;
        }
    }
}

fn sync_sections(nav: NavigationState, deck: &Deck) -> NavigationState {
    let total_sections = deck.sections_in(nav.page);
    let section = nav.section.min(total_sections.saturating_sub(1));
    NavigationState {
        section,
        total_sections,
        ..nav
    }
}

// ============================================================================
// TESTS
// ============================================================================
