use std::cell::{Cell, RefCell};

use super::syntax::SyntectHighlighter;
use super::{LINE_BREAK, Language, LineHighlighter, LineKind, highlight_solution};

/// Wraps each line in a marker and counts calls.
#[derive(Default)]
struct RecordingHighlighter {
    calls: Cell<usize>,
    seen: RefCell<Vec<String>>,
}

impl LineHighlighter for RecordingHighlighter {
    fn highlight_line(&self, _language: Language, line: &str) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(line.to_string());
        Some(format!("<hl>{}</hl>", line))
    }
}

/// Always fails, forcing the plain-text fallback.
struct FailingHighlighter;

impl LineHighlighter for FailingHighlighter {
    fn highlight_line(&self, _language: Language, _line: &str) -> Option<String> {
        None
    }
}

#[test]
fn language_tags() {
    assert_eq!(Language::from_tag("Python"), Some(Language::Python));
    assert_eq!(Language::from_tag(" c++ "), Some(Language::Cpp));
    assert_eq!(Language::from_tag("c"), Some(Language::C));
    assert_eq!(Language::from_tag("haskell"), None);
    assert_eq!(Language::Python.comment_marker(), "#");
    assert_eq!(Language::Cpp.comment_marker(), "//");
}

#[test]
fn python_comment_classification() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("# header\nx = 1\n# done", "python", &h);
    let kinds: Vec<LineKind> = out.lines.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, [LineKind::Comment, LineKind::Code, LineKind::Comment]);
    assert!(out.lines.iter().all(|l| !l.highlighted_html.is_empty()));
    assert_eq!(h.calls.get(), 3);
}

#[test]
fn indented_cpp_comment_is_classified() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("int main() {\n    // read input\n}", "cpp", &h);
    assert!(!out.lines[0].is_comment());
    assert!(out.lines[1].is_comment());
    assert_eq!(out.lines[1].raw_text, "    // read input");
    // Whitespace is passed through to the highlighter as-is.
    assert_eq!(h.seen.borrow()[1], "    // read input");
}

#[test]
fn blank_lines_skip_highlighter() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("   ", "python", &h);
    assert_eq!(h.calls.get(), 0);
    assert_eq!(out.lines.len(), 1);
    assert_eq!(out.lines[0].kind, LineKind::Blank);
    assert_eq!(out.lines[0].highlighted_html, LINE_BREAK);
    assert_eq!(out.html, LINE_BREAK);
}

#[test]
fn blank_line_renders_the_same_break_wherever_it_sits() {
    let h = RecordingHighlighter::default();
    let trailing = highlight_solution("x = 1\n   ", "python", &h);
    assert_eq!(
        trailing.html,
        format!("<span style=\"white-space:pre\"><hl>x = 1</hl></span>{0}{0}", LINE_BREAK)
    );
    let leading = highlight_solution("\nx = 1", "python", &h);
    assert!(leading.html.starts_with(LINE_BREAK));
    assert_eq!(leading.html.matches(LINE_BREAK).count(), 1);
    assert_eq!(h.calls.get(), 2);
}

#[test]
fn consecutive_blank_lines_each_add_one_break() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("a\n\n\nb", "python", &h);
    assert_eq!(out.html.matches(LINE_BREAK).count(), 3);
    assert_eq!(h.calls.get(), 2);
}

#[test]
fn blank_line_between_code_becomes_double_break() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("a = 1\n\nb = 2", "python", &h);
    assert_eq!(h.calls.get(), 2);
    assert_eq!(out.lines[1].kind, LineKind::Blank);
    assert!(out.html.contains(&format!("{0}{0}", LINE_BREAK)));
}

#[test]
fn no_trailing_separator() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("a = 1\nb = 2\n", "python", &h);
    assert_eq!(out.lines.len(), 2);
    assert!(!out.html.ends_with(LINE_BREAK));
    assert_eq!(out.html.matches(LINE_BREAK).count(), 1);
}

#[test]
fn escapes_normalized_before_splitting() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("print(\"a\\\\nb\")\\nprint(2)", "python", &h);
    assert_eq!(out.lines.len(), 2);
    assert_eq!(out.lines[0].raw_text, "print(\"a\\nb\")");
    assert_eq!(out.lines[1].raw_text, "print(2)");
}

#[test]
fn unknown_language_renders_escaped_plain_text() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("if a < b:\n-- note", "lua", &h);
    assert_eq!(h.calls.get(), 0);
    assert_eq!(out.language, None);
    assert!(out.lines.iter().all(|l| l.kind == LineKind::Code));
    assert!(out.html.contains("if a &lt; b:"));
}

#[test]
fn failed_highlight_falls_back_to_plain_text() {
    let out = highlight_solution("x = \"<b>\"", "python", &FailingHighlighter);
    assert!(out.html.contains("x = &quot;&lt;b&gt;&quot;"));
}

#[test]
fn each_line_pins_whitespace() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("  x = 1", "python", &h);
    assert_eq!(
        out.lines[0].highlighted_html,
        "<span style=\"white-space:pre\"><hl>  x = 1</hl></span>"
    );
}

#[test]
fn empty_code_has_no_lines() {
    let h = RecordingHighlighter::default();
    let out = highlight_solution("", "cpp", &h);
    assert!(out.lines.is_empty());
    assert_eq!(out.html, "");
}

#[test]
fn syntect_highlights_every_nonblank_line() {
    let h = SyntectHighlighter::new("InspiredGitHub").expect("bundled theme");
    let out = highlight_solution("# header\nx = 1\n\n# done", "python", &h);
    assert_eq!(out.lines.len(), 4);
    assert!(out.lines[0].highlighted_html.contains("header"));
    assert!(out.lines[1].highlighted_html.contains("<span style=\"color:"));
    assert_eq!(out.lines[2].highlighted_html, LINE_BREAK);
    assert_eq!(out.html.matches(LINE_BREAK).count(), 3);
}
