//! Domain types for slidenav.
//!
//! Plain values only. The navigator consumes and produces these; the
//! presenter owns one `NavigationState` and replaces it on every key.

use std::path::PathBuf;

// ============================================================================
// NAVIGATION STATE
// ============================================================================

/// Where the presenter is in the deck, plus any pending count input.
///
/// Replaced wholesale on every transition, never mutated in place by
/// the navigator. Both totals are supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Pending repeat count or target slide (digits only), the literal
    /// `"g"` after a single `g`, or empty.
    pub buffer: String,
    /// Index of the current slide.
    pub page: usize,
    /// Index of the current section within the slide.
    pub section: usize,
    /// Number of slides in the deck.
    pub total_slides: usize,
    /// Number of sections in the current slide.
    pub total_sections: usize,
}

impl NavigationState {
    /// Fresh state at the first section of the first slide.
    pub fn new(total_slides: usize, total_sections: usize) -> Self {
        NavigationState {
            buffer: String::new(),
            page: 0,
            section: 0,
            total_slides,
            total_sections,
        }
    }

    /// Index of the last slide (0 for an empty deck).
    pub fn last_page(&self) -> usize {
        self.total_slides.saturating_sub(1)
    }
}

// ============================================================================
// KEYS
// ============================================================================

/// A key the navigator understands.
///
/// Closed set: the host maps raw terminal events onto these, and
/// anything it cannot map becomes [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0`–`9`. Values above 9 are treated as [`Key::Other`].
    Digit(u8),
    /// `g` (half of `gg`).
    G,
    /// `G`
    ShiftG,
    /// Space bar.
    Space,
    /// `j`
    J,
    /// Right arrow.
    Right,
    /// `l`
    L,
    /// Enter / Return.
    Enter,
    /// Page Down.
    PageDown,
    /// `k`
    K,
    /// Left arrow.
    Left,
    /// `h`
    H,
    /// Page Up.
    PageUp,
    /// `N`
    ShiftN,
    /// Up arrow.
    Up,
    /// `p`
    P,
    /// Down arrow.
    Down,
    /// `n`
    N,
    /// Anything else.
    Other,
}

impl Key {
    /// Parse a symbolic key name (`"j"`, `"pgdown"`, `"7"`, ...).
    ///
    /// Total: unknown names map to [`Key::Other`].
    pub fn from_name(name: &str) -> Key {
        match name {
            "g" => Key::G,
            "G" => Key::ShiftG,
            " " => Key::Space,
            "j" => Key::J,
            "right" => Key::Right,
            "l" => Key::L,
            "enter" => Key::Enter,
            "pgdown" => Key::PageDown,
            "k" => Key::K,
            "left" => Key::Left,
            "h" => Key::H,
            "pgup" => Key::PageUp,
            "N" => Key::ShiftN,
            "up" => Key::Up,
            "p" => Key::P,
            "down" => Key::Down,
            "n" => Key::N,
            _ => {
                let mut chars = name.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => Key::Digit(d as u8),
                    _ => Key::Other,
                }
            }
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Settings for a presentation run, assembled from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct PresentConfig {
    /// Markdown deck to present (`-` reads stdin).
    pub deck_path: PathBuf,
    /// 1-based slide to open on.
    pub start_slide: Option<usize>,
    /// Write debug logs here. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// TESTS
// ============================================================================
