//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::deck::Slide;
use crate::types::NavigationState;

use super::state::App;
use super::theme;

const HELP_TEXT: &str =
    "[j/k] slide  [n/p] section  [0-9] count  [gg/G] start/end  [NG] go to  [q] quit";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current slide to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Title bar at top, slide in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // slide
        Constraint::Length(1), // help
    ])
    .split(area);

    let slide = app.deck.slide(app.nav.page);

    frame.render_widget(render_title(slide, &app.nav), chunks[0]);
    frame.render_widget(render_help(&app.nav), chunks[2]);

    match slide {
        Some(slide) => render_slide(slide, app.nav.section, frame, chunks[1]),
        None => {
            let empty = Paragraph::new(Span::styled("  (no slide)", theme::STYLE_POSITION));
            frame.render_widget(empty, chunks[1]);
        }
    }
}

// ============================================================================
// CHROME
// ============================================================================

/// Title bar: slide heading plus position.
fn render_title(slide: Option<&Slide>, nav: &NavigationState) -> Paragraph<'static> {
    let title = slide
        .and_then(Slide::title)
        .unwrap_or("slidenav")
        .to_string();

    let mut spans = vec![
        Span::styled(format!(" {}", title), theme::STYLE_TITLE),
        Span::styled(
            format!("  {}/{}", nav.page + 1, nav.total_slides),
            theme::STYLE_POSITION,
        ),
    ];

    if nav.total_sections > 1 {
        spans.push(Span::styled(
            format!("  §{}/{}", nav.section + 1, nav.total_sections),
            theme::STYLE_POSITION,
        ));
    }

    Paragraph::new(Line::from(spans))
}

/// Help line, prefixed by any pending count input.
fn render_help(nav: &NavigationState) -> Paragraph<'static> {
    let mut spans = Vec::new();

    if !nav.buffer.is_empty() {
        spans.push(Span::styled(format!(" {} ", nav.buffer), theme::STYLE_BUFFER));
    }
    spans.push(Span::styled(format!(" {}", HELP_TEXT), theme::STYLE_HELP));

    Paragraph::new(Line::from(spans))
}

// ============================================================================
// SLIDE BODY
// ============================================================================

fn render_slide(slide: &Slide, section: usize, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(slide_lines(slide, section)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Lines for sections `0..=section`, with a marker when more remain.
fn slide_lines(slide: &Slide, section: usize) -> Vec<Line<'static>> {
    let visible = section.saturating_add(1).min(slide.len());
    let mut lines = vec![Line::from("")];
    let mut in_fence = false;

    for (i, text) in slide.sections()[..visible].iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for raw in text.lines() {
            let is_fence = raw.trim_start().starts_with("```");
            let style = if is_fence || in_fence || raw.starts_with("    ") {
                theme::STYLE_CODE
            } else if raw.starts_with('#') {
                theme::STYLE_HEADING
            } else {
                theme::STYLE_BODY
            };
            if is_fence {
                in_fence = !in_fence;
            }
            lines.push(Line::from(Span::styled(format!("  {}", raw), style)));
        }
    }

    if visible < slide.len() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  …", theme::STYLE_MORE)));
    }

    lines
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::tui::update::apply;
    use crate::tui::state::Input;
    use crate::types::Key;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(90, 20);
        Terminal::new(backend).unwrap()
    }

    fn sample_app() -> App {
        let deck = Deck::parse(
            "# Intro\nHello\n---\n# Steps\nfirst\n<!-- pause -->\nsecond\n---\n```\ncode\n```\n",
        )
        .unwrap();
        App::new(deck)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn first_slide_renders_title_and_position() {
        let mut terminal = make_terminal();
        let app = sample_app();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = screen_text(&terminal);
        assert!(content.contains("Intro"));
        assert!(content.contains("1/3"));
        assert!(content.contains("Hello"));
    }

    #[test]
    fn hidden_sections_are_not_rendered() {
        let mut terminal = make_terminal();
        let mut app = sample_app();
        apply(&mut app, Input::Navigate(Key::J));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = screen_text(&terminal);
        assert!(content.contains("first"));
        assert!(!content.contains("second"));
        assert!(content.contains("§1/2"));
    }

    #[test]
    fn revealed_section_is_rendered() {
        let mut terminal = make_terminal();
        let mut app = sample_app();
        apply(&mut app, Input::Navigate(Key::J));
        apply(&mut app, Input::Navigate(Key::N));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(screen_text(&terminal).contains("second"));
    }

    #[test]
    fn pending_count_shows_in_footer() {
        let mut terminal = make_terminal();
        let mut app = sample_app();
        apply(&mut app, Input::Navigate(Key::Digit(4)));
        apply(&mut app, Input::Navigate(Key::Digit(2)));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(screen_text(&terminal).contains(" 42 "));
    }

    #[test]
    fn untitled_slide_falls_back_to_app_name() {
        let mut terminal = make_terminal();
        let mut app = sample_app();
        apply(&mut app, Input::Navigate(Key::ShiftG));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = screen_text(&terminal);
        assert!(content.contains("slidenav"));
        assert!(content.contains("3/3"));
    }

    #[test]
    fn every_slide_renders_on_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let mut app = sample_app();
        for _ in 0..app.deck.len() {
            terminal
                .draw(|frame| render(&app, frame))
                .expect("render should not panic");
            apply(&mut app, Input::Navigate(Key::J));
        }
    }

    #[test]
    fn slide_lines_mark_remaining_sections() {
        let deck = Deck::parse("a\n<!-- pause -->\nb\n<!-- pause -->\nc\n").unwrap();
        let slide = deck.slide(0).unwrap();

        let partial = slide_lines(slide, 1);
        let last = partial.last().unwrap();
        assert_eq!(last.spans[0].content, "  …");

        let full = slide_lines(slide, 2);
        assert_eq!(full.last().unwrap().spans[0].content, "  c");
    }

    #[test]
    fn slide_lines_style_code_fences() {
        let deck = Deck::parse("```\nlet x = 1;\n```\nafter\n").unwrap();
        let lines = slide_lines(deck.slide(0).unwrap(), 0);
        // lines[0] is the top spacer
        assert_eq!(lines[2].spans[0].style, theme::STYLE_CODE);
        assert_eq!(lines[3].spans[0].style, theme::STYLE_CODE);
        assert_eq!(lines[4].spans[0].style, theme::STYLE_BODY);
    }
}
