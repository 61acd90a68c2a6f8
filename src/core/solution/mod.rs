//! Reference solutions: per-line highlighting and copy-ready text.

mod copy;
pub mod syntax;

pub use copy::copy_format;

use serde::Serialize;

use crate::core::content::normalize_escapes;
use crate::core::util::escape_html;

/// Separator placed between rendered lines. Never emitted after the last line.
pub const LINE_BREAK: &str = "<br>";

/// Languages reference solutions are published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Cpp,
    C,
}

impl Language {
    /// Map a language tag (e.g. "python", "c++") to a supported language.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "py" | "python" | "python3" => Some(Language::Python),
            "cpp" | "c++" | "cc" | "cxx" | "hpp" => Some(Language::Cpp),
            "c" | "h" => Some(Language::C),
            _ => None,
        }
    }

    pub fn comment_marker(self) -> &'static str {
        match self {
            Language::Python => "#",
            Language::Cpp | Language::C => "//",
        }
    }

    /// File extension used to look up the syntax definition.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::Cpp => "cpp",
            Language::C => "c",
        }
    }
}

/// Highlights a single non-blank line of code into an HTML fragment.
pub trait LineHighlighter {
    /// Returns `None` if the line could not be highlighted; the caller then
    /// falls back to escaped plain text.
    fn highlight_line(&self, language: Language, line: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Comment,
    Code,
    Blank,
}

/// One line of a reference solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLine {
    pub kind: LineKind,
    pub raw_text: String,
    /// [`LINE_BREAK`] for blank lines.
    pub highlighted_html: String,
}

impl CodeLine {
    pub fn is_comment(&self) -> bool {
        self.kind == LineKind::Comment
    }
}

/// Highlighted solution: per-line metadata and the joined HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedCode {
    pub language: Option<Language>,
    pub lines: Vec<CodeLine>,
    pub html: String,
}

/// Highlight a reference solution line by line.
///
/// The code is escape-normalized once, then split on real line breaks. Blank
/// lines never reach the highlighter. An unknown `language_tag` renders every
/// line as escaped plain text.
pub fn highlight_solution(
    code: &str,
    language_tag: &str,
    highlighter: &dyn LineHighlighter,
) -> HighlightedCode {
    let language = Language::from_tag(language_tag);
    if language.is_none() {
        log::debug!(
            "Unsupported solution language {:?}; rendering plain text",
            language_tag
        );
    }

    let normalized = normalize_escapes(code);
    let lines: Vec<CodeLine> = normalized
        .lines()
        .map(|line| render_line(line, language, highlighter))
        .collect();
    let html = join_lines(&lines);

    HighlightedCode {
        language,
        lines,
        html,
    }
}

fn render_line(
    line: &str,
    language: Option<Language>,
    highlighter: &dyn LineHighlighter,
) -> CodeLine {
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return CodeLine {
            kind: LineKind::Blank,
            raw_text: line.to_string(),
            highlighted_html: LINE_BREAK.to_string(),
        };
    }

    let (kind, html) = match language {
        Some(lang) => {
            let kind = if trimmed.starts_with(lang.comment_marker()) {
                LineKind::Comment
            } else {
                LineKind::Code
            };
            let html = highlighter
                .highlight_line(lang, line)
                .unwrap_or_else(|| escape_html(line));
            (kind, html)
        }
        None => (LineKind::Code, escape_html(line)),
    };

    CodeLine {
        kind,
        raw_text: line.to_string(),
        highlighted_html: preserve_whitespace(&html),
    }
}

/// Concatenate line segments with a separator after every non-blank line
/// except the last. A blank line's own marker is its break, so blank lines
/// never double up with a separator and the output never ends in one.
fn join_lines(lines: &[CodeLine]) -> String {
    let mut html = String::new();
    for (i, line) in lines.iter().enumerate() {
        html.push_str(&line.highlighted_html);
        if line.kind != LineKind::Blank && i + 1 < lines.len() {
            html.push_str(LINE_BREAK);
        }
    }
    html
}

/// Pin `white-space: pre` on one rendered line so indentation survives
/// whatever styles the page applies to the code container.
fn preserve_whitespace(line_html: &str) -> String {
    format!("<span style=\"white-space:pre\">{}</span>", line_html)
}

#[cfg(test)]
mod tests;
