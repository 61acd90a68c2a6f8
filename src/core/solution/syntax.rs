//! Syntax highlighting for solution lines using syntect.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;

use super::{Language, LineHighlighter};

static SYNTAX_SET: std::sync::OnceLock<SyntaxSet> = std::sync::OnceLock::new();
static THEME_SET: std::sync::OnceLock<ThemeSet> = std::sync::OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Names of the bundled themes, sorted.
pub fn theme_names() -> Vec<&'static str> {
    theme_set().themes.keys().map(String::as_str).collect()
}

pub fn has_theme(name: &str) -> bool {
    theme_set().themes.contains_key(name)
}

/// Inline-styled HTML highlighter backed by syntect's bundled syntaxes.
///
/// Each call builds its own `HighlightLines` state, so nothing is shared
/// between lines or between concurrent renders.
pub struct SyntectHighlighter {
    theme: &'static Theme,
}

impl SyntectHighlighter {
    /// Returns `None` when `theme_name` is not a bundled theme.
    pub fn new(theme_name: &str) -> Option<Self> {
        theme_set()
            .themes
            .get(theme_name)
            .map(|theme| SyntectHighlighter { theme })
    }
}

impl LineHighlighter for SyntectHighlighter {
    fn highlight_line(&self, language: Language, line: &str) -> Option<String> {
        let ps = syntax_set();
        let syntax = ps.find_syntax_by_extension(language.extension())?;

        let mut h = HighlightLines::new(syntax, self.theme);
        let line_with_ending = format!("{}\n", line);
        let segments = match h.highlight_line(line_with_ending.as_str(), ps) {
            Ok(segments) => segments,
            Err(e) => {
                log::debug!("Highlighting failed for {:?} line: {}", language, e);
                return None;
            }
        };

        // The newline was only needed by the newline-aware syntaxes.
        let segments: Vec<(Style, &str)> = segments
            .into_iter()
            .map(|(style, text)| (style, text.strip_suffix('\n').unwrap_or(text)))
            .filter(|(_, text)| !text.is_empty())
            .collect();

        styled_line_to_highlighted_html(&segments, IncludeBackground::No).ok()
    }
}
