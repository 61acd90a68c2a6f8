//! Escape-sequence normalization for authored text.
//!
//! Authors write `\n` (backslash, n) for a line break and `\\n` (two
//! backslashes, n) for the visible text `\n`. The literal form must be
//! protected before the line-break form is expanded, because the two-character
//! escape also occurs inside the three-character one.

use super::token::Sentinel;

/// Three characters: backslash, backslash, `n`. Displays as `\n`.
pub const LITERAL_ESCAPE: &str = "\\\\n";

/// Two characters: backslash, `n`. Becomes a real line break.
pub const LINE_BREAK_ESCAPE: &str = "\\n";

const LITERAL_TOKEN_NAME: &str = "DOUBLE_BACKSLASH_N";

/// Resolve the escapes in one fragment of prose or one code block interior.
///
/// Not idempotent: the `\n` text produced from a literal escape would be
/// expanded by a second pass. Normalize each fragment exactly once.
pub fn normalize_escapes(fragment: &str) -> String {
    if !fragment.contains(LINE_BREAK_ESCAPE) {
        return fragment.to_string();
    }
    let token = Sentinel::for_text(fragment).wrap(LITERAL_TOKEN_NAME);
    fragment
        .replace(LITERAL_ESCAPE, &token)
        .replace(LINE_BREAK_ESCAPE, "\n")
        .replace(&token, LINE_BREAK_ESCAPE)
}
