//! Copy-to-clipboard text for reference solutions.

use crate::core::content::{LINE_BREAK_ESCAPE, LITERAL_ESCAPE};

/// Plain text for pasting into an editor.
///
/// Collapses every author-facing `\\n` into the visible text `\n`. Real
/// newlines are already line breaks in stored code and are left alone, as is
/// everything else. Independent of highlighting.
pub fn copy_format(code: &str) -> String {
    code.replace(LITERAL_ESCAPE, LINE_BREAK_ESCAPE)
}
