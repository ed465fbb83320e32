//! Markdown deck loading.
//!
//! A deck is plain markdown split into slides by `---` lines. Inside a
//! slide, `<!-- pause -->` lines split it into sections that are revealed
//! one at a time.
//!
//! Structure:
//! - Pure: `Deck::parse` (text in, slides out)
//! - Effect: `Deck::load` (reads a file or stdin)

use std::io::Read;
use std::path::{Path, PathBuf};

/// Line that separates two slides.
pub const SLIDE_SEPARATOR: &str = "---";

/// Line that separates two sections of one slide.
pub const SECTION_SEPARATOR: &str = "<!-- pause -->";

/// Path that means "read the deck from stdin".
pub const STDIN_PATH: &str = "-";

// ============================================================================
// TYPES
// ============================================================================

/// One slide: an ordered list of sections, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    sections: Vec<String>,
}

/// A parsed presentation, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

/// Error while loading a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Could not read the source.
    Io { path: PathBuf, message: String },

    /// Source contained no slides.
    Empty,
}

// ============================================================================
// PARSING
// ============================================================================

impl Deck {
    /// Split markdown source into slides and sections.
    ///
    /// Slides with no visible text are dropped; an all-blank source is
    /// [`DeckError::Empty`].
    pub fn parse(source: &str) -> Result<Deck, DeckError> {
        let slides: Vec<Slide> = split_on_line(source, SLIDE_SEPARATOR)
            .into_iter()
            .filter_map(|chunk| Slide::parse(&chunk))
            .collect();

        if slides.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(Deck { slides })
    }

    /// Read and parse a deck. `-` reads stdin.
    pub fn load(path: &Path) -> Result<Deck, DeckError> {
        let io_error = |e: std::io::Error| DeckError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let source = if path == Path::new(STDIN_PATH) {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
            buf
        } else {
            std::fs::read_to_string(path).map_err(io_error)?
        };

        let deck = Deck::parse(&source)?;
        log::info!("loaded {} slides from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a parsed deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Section count of a slide, 0 when out of range.
    pub fn sections_in(&self, index: usize) -> usize {
        self.slide(index).map_or(0, Slide::len)
    }
}

impl Slide {
    fn parse(chunk: &str) -> Option<Slide> {
        let sections: Vec<String> = split_on_line(chunk, SECTION_SEPARATOR)
            .into_iter()
            .map(|s| trim_blank_lines(&s).to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if sections.is_empty() {
            None
        } else {
            Some(Slide { sections })
        }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// First markdown heading in the slide, without its `#` marks.
    pub fn title(&self) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.lines())
            .find_map(|line| line.strip_prefix('#'))
            .map(|rest| rest.trim_start_matches('#').trim())
    }
}

/// Split `source` on lines that equal `separator` (ignoring surrounding
/// whitespace). Separator lines themselves are dropped.
fn split_on_line(source: &str, separator: &str) -> Vec<String> {
    let mut chunks = vec![String::new()];

    for line in source.lines() {
        if line.trim() == separator {
            chunks.push(String::new());
            continue;
        }
        if let Some(current) = chunks.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }

    chunks
}

/// Drop leading and trailing blank lines, keep inner indentation.
fn trim_blank_lines(text: &str) -> &str {
    let start = text
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| {
            text[..i].rfind('\n').map_or(0, |nl| nl + 1)
        });

    text[start..].trim_end()
}

// ============================================================================
// DISPLAY
// ============================================================================

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Io { path, message } => {
                write!(f, "Could not read {}: {}", path.display(), message)
            }
            DeckError::Empty => write!(f, "Deck contains no slides"),
        }
    }
}

impl std::error::Error for DeckError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
# Welcome

Hello there.

---

# Agenda

- one
<!-- pause -->
- two
<!-- pause -->
- three

---

    indented code
";

    #[test]
    fn parse_splits_slides() {
        let deck = Deck::parse(SAMPLE).unwrap();
        assert_eq!(deck.len(), 3);
        assert!(!deck.is_empty());
    }

    #[test]
    fn parse_splits_sections() {
        let deck = Deck::parse(SAMPLE).unwrap();
        assert_eq!(deck.sections_in(0), 1);
        assert_eq!(deck.sections_in(1), 3);
        assert_eq!(deck.slide(1).unwrap().sections()[2], "- three");
    }

    #[test]
    fn sections_out_of_range_is_zero() {
        let deck = Deck::parse(SAMPLE).unwrap();
        assert_eq!(deck.sections_in(3), 0);
        assert!(deck.slide(3).is_none());
    }

    #[test]
    fn parse_keeps_indentation_of_first_line() {
        let deck = Deck::parse(SAMPLE).unwrap();
        assert_eq!(deck.slide(2).unwrap().sections()[0], "    indented code");
    }

    #[test]
    fn blank_slides_are_dropped() {
        let deck = Deck::parse("---\n\n---\n# Only\n---\n   \n").unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slide(0).unwrap().title(), Some("Only"));
    }

    #[test]
    fn blank_source_is_empty_error() {
        assert_eq!(Deck::parse(""), Err(DeckError::Empty));
        assert_eq!(Deck::parse("\n---\n\n"), Err(DeckError::Empty));
    }

    #[test]
    fn separator_with_surrounding_spaces_still_splits() {
        let deck = Deck::parse("a\n  ---  \nb\n").unwrap();
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn title_strips_heading_marks() {
        let deck = Deck::parse("text first\n\n### Deep heading\n").unwrap();
        assert_eq!(deck.slide(0).unwrap().title(), Some("Deep heading"));
    }

    #[test]
    fn title_absent_without_heading() {
        let deck = Deck::parse("no heading here\n").unwrap();
        assert_eq!(deck.slide(0).unwrap().title(), None);
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("talk.md");
        fs::write(&path, SAMPLE).unwrap();

        let deck = Deck::load(&path).unwrap();
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.md");

        match Deck::load(&path) {
            Err(DeckError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn error_display_mentions_path() {
        let err = DeckError::Io {
            path: PathBuf::from("/tmp/talk.md"),
            message: "denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/talk.md"));
        assert!(msg.contains("denied"));
    }
}
