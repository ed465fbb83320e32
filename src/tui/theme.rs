//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Bold: slide headings and the title bar
//! - Cyan: pending count input, keybinding hints
//! - Dim: position indicator, separators, hidden-section marker

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SLIDE CONTENT
// ============================================================================

/// Markdown heading line.
pub const STYLE_HEADING: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Ordinary slide text.
pub const STYLE_BODY: Style = Style::new();

/// Code block line (fenced or indented).
pub const STYLE_CODE: Style = Style::new().fg(Color::Green);

/// Marker shown when more sections are still hidden.
pub const STYLE_MORE: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);

// ============================================================================
// CHROME
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Slide/section position indicator.
pub const STYLE_POSITION: Style = Style::new().fg(Color::DarkGray);

/// Pending count or `g` in the footer.
pub const STYLE_BUFFER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
