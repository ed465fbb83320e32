//! Pure keypress navigation: (NavigationState, Key) → NavigationState.
//!
//! Vim-style count prefixes: digits accumulate in the buffer and the next
//! motion consumes them. Every index is clamped to the deck, never
//! wrapped. No I/O, no terminal, no deck content.

use crate::types::{Key, NavigationState};

/// Buffer contents after the first `g` of `gg`.
const GOTO_START_PENDING: &str = "g";

/// One clamped step along an axis: (index, total) → index.
type Step = fn(usize, usize) -> usize;

/// Compute the state that follows `state` when `key` is pressed.
///
/// Total over its input: unrecognized keys clear the pending buffer and
/// leave everything else alone. Both totals are always carried forward.
pub fn transition(state: &NavigationState, key: Key) -> NavigationState {
    match key {
        Key::Digit(digit) => push_digit(state, digit),
        Key::G => goto_start(state),
        Key::ShiftG => goto_slide(state),
        Key::Space | Key::J | Key::Right | Key::L | Key::Enter | Key::PageDown => {
            step_page(state, increment_clamped)
        }
        Key::K | Key::Left | Key::H | Key::PageUp | Key::ShiftN => {
            step_page(state, decrement_clamped)
        }
        Key::Up | Key::P => step_section(state, decrement_clamped),
        Key::Down | Key::N => step_section(state, increment_clamped),
        Key::Other => clear_buffer(state),
    }
}

// ============================================================================
// PER-KEY HANDLERS
// ============================================================================

/// Digits extend a numeric buffer, or replace a non-numeric one (`"g"`).
fn push_digit(state: &NavigationState, digit: u8) -> NavigationState {
    let Some(ch) = char::from_digit(u32::from(digit), 10) else {
        return clear_buffer(state);
    };

    let mut buffer = if is_numeric(&state.buffer) {
        state.buffer.clone()
    } else {
        String::new()
    };
    buffer.push(ch);

    NavigationState {
        buffer,
        ..state.clone()
    }
}

/// `gg` jumps to the very start; a lone `g` waits for the second one.
fn goto_start(state: &NavigationState) -> NavigationState {
    if state.buffer == GOTO_START_PENDING {
        NavigationState {
            buffer: String::new(),
            page: 0,
            section: 0,
            total_slides: state.total_slides,
            total_sections: state.total_sections,
        }
    } else {
        NavigationState {
            buffer: GOTO_START_PENDING.to_string(),
            ..state.clone()
        }
    }
}

/// `G` jumps to the slide named by the buffer (1-based), or the last one.
fn goto_slide(state: &NavigationState) -> NavigationState {
    let page = if is_numeric(&state.buffer) {
        navigate_slide(&state.buffer, state.total_slides)
    } else {
        state.last_page()
    };

    NavigationState {
        buffer: String::new(),
        page,
        section: 0,
        total_slides: state.total_slides,
        total_sections: state.total_sections,
    }
}

/// Move along the slide axis. Landing on a different slide starts it
/// from its first section.
fn step_page(state: &NavigationState, step: Step) -> NavigationState {
    let page = repeatable_action(step, state.page, state.total_slides, &state.buffer);
    let section = if page == state.page { state.section } else { 0 };

    NavigationState {
        buffer: String::new(),
        page,
        section,
        total_slides: state.total_slides,
        total_sections: state.total_sections,
    }
}

/// Move along the section axis of the current slide.
fn step_section(state: &NavigationState, step: Step) -> NavigationState {
    let section = repeatable_action(step, state.section, state.total_sections, &state.buffer);

    NavigationState {
        buffer: String::new(),
        page: state.page,
        section,
        total_slides: state.total_slides,
        total_sections: state.total_sections,
    }
}

fn clear_buffer(state: &NavigationState) -> NavigationState {
    NavigationState {
        buffer: String::new(),
        ..state.clone()
    }
}

// ============================================================================
// COUNT HANDLING
// ============================================================================

/// True for a non-empty, all-ASCII-digit buffer.
pub fn is_numeric(buffer: &str) -> bool {
    !buffer.is_empty() && buffer.bytes().all(|b| b.is_ascii_digit())
}

/// Parse the buffer as a count. Saturates instead of overflowing, so an
/// absurdly long digit string is just "very large".
fn parse_count(buffer: &str) -> Option<usize> {
    if !is_numeric(buffer) {
        return None;
    }

    Some(buffer.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    }))
}

/// Apply `step` to `target` as many times as the buffer's count says.
///
/// No count, or a count of zero, means a single step (as in vim). The
/// count is capped at `total`: from any index, that many clamped steps
/// already reach the boundary.
pub fn repeatable_action(step: Step, target: usize, total: usize, buffer: &str) -> usize {
    let repeat = match parse_count(buffer) {
        None | Some(0) => 1,
        Some(n) => n.min(total.max(1)),
    };

    (0..repeat).fold(target, |index, _| step(index, total))
}

/// Next index, saturating at the last one.
pub fn increment_clamped(index: usize, total: usize) -> usize {
    index.saturating_add(1).min(total.saturating_sub(1))
}

/// Previous index, saturating at zero.
pub fn decrement_clamped(index: usize, _total: usize) -> usize {
    index.saturating_sub(1)
}

/// Resolve a 1-based slide number in `buffer` to a clamped 0-based index.
///
/// An unparsable buffer resolves to the first slide.
pub fn navigate_slide(buffer: &str, total_slides: usize) -> usize {
    parse_count(buffer)
        .unwrap_or(0)
        .saturating_sub(1)
        .min(total_slides.saturating_sub(1))
}

// ============================================================================
// TESTS
// ============================================================================
