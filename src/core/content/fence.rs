//! Fenced code block extraction: split authored text into prose and code blocks.
//!
//! A fence opens on a line that begins (column 0) with three or more backticks
//! whose info string contains no backtick, and closes on the next line made only
//! of at least as many backticks. Backtick runs anywhere else are prose.

use super::token::Sentinel;

/// Name stem of the placeholder left in the prose for each extracted block.
pub(super) const PLACEHOLDER_STEM: &str = "CODE_BLOCK_";

const FENCE_CHAR: char = '`';
const MIN_FENCE_LEN: usize = 3;

/// A fenced code block lifted out of the prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    pub index: usize,
    /// First word of the info string, empty when the fence has none.
    pub language: String,
    /// Interior lines, each with its line terminator.
    pub raw_interior: String,
    /// Opening fence line, including its line terminator when present.
    pub(super) open_line: String,
    /// Closing fence line without terminator. `None` for an unterminated fence.
    pub(super) close_line: Option<String>,
}

impl ExtractedBlock {
    /// Interior without the newline that precedes the closing fence.
    pub fn code(&self) -> &str {
        self.raw_interior
            .strip_suffix('\n')
            .unwrap_or(&self.raw_interior)
    }

    pub fn is_closed(&self) -> bool {
        self.close_line.is_some()
    }

    /// Same block with a replacement interior (fence lines untouched).
    pub fn with_interior(self, raw_interior: String) -> Self {
        Self {
            raw_interior,
            ..self
        }
    }

    /// The block as fenced Markdown, byte-identical to the source when the
    /// interior has not been changed.
    pub fn to_fenced(&self) -> String {
        let close = self.close_line.as_deref().unwrap_or("");
        let mut out =
            String::with_capacity(self.open_line.len() + self.raw_interior.len() + close.len());
        out.push_str(&self.open_line);
        out.push_str(&self.raw_interior);
        out.push_str(close);
        out
    }
}

/// Prose with one placeholder per block, plus the blocks in source order.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub prose: String,
    pub blocks: Vec<ExtractedBlock>,
    /// Delimiter the placeholders were built with; needed for reinjection.
    pub sentinel: Sentinel,
}

/// Placeholder token for block `index`.
pub(super) fn placeholder(sentinel: &Sentinel, index: usize) -> String {
    sentinel.wrap(&format!("{}{}", PLACEHOLDER_STEM, index))
}

/// Split `raw` into prose and fenced code blocks.
///
/// An unterminated fence swallows the rest of the input as its interior.
pub fn extract(raw: &str) -> Extraction {
    let sentinel = Sentinel::for_text(raw);
    let mut prose = String::with_capacity(raw.len());
    let mut blocks = Vec::new();
    let mut lines = raw.split_inclusive('\n');

    while let Some(line) = lines.next() {
        let Some((fence_len, info)) = opening_fence(line) else {
            prose.push_str(line);
            continue;
        };

        let mut raw_interior = String::new();
        let mut close_line = None;
        let mut terminator = "";
        for inner in lines.by_ref() {
            let (content, end) = split_terminator(inner);
            if is_closing_fence(content, fence_len) {
                close_line = Some(content.to_string());
                terminator = end;
                break;
            }
            raw_interior.push_str(inner);
        }

        let index = blocks.len();
        prose.push_str(&placeholder(&sentinel, index));
        prose.push_str(terminator);
        blocks.push(ExtractedBlock {
            index,
            language: info.split_whitespace().next().unwrap_or("").to_string(),
            raw_interior,
            open_line: line.to_string(),
            close_line,
        });
    }

    if !blocks.is_empty() {
        log::debug!("Extracted {} fenced code block(s)", blocks.len());
    }
    Extraction {
        prose,
        blocks,
        sentinel,
    }
}

/// Returns the fence length and info string when `line` opens a fence.
fn opening_fence(line: &str) -> Option<(usize, &str)> {
    let (content, _) = split_terminator(line);
    let fence_len = content.chars().take_while(|&c| c == FENCE_CHAR).count();
    if fence_len < MIN_FENCE_LEN {
        return None;
    }
    // Backtick chars are one byte each.
    let info = &content[fence_len..];
    if info.contains(FENCE_CHAR) {
        return None;
    }
    Some((fence_len, info.trim()))
}

fn is_closing_fence(content: &str, fence_len: usize) -> bool {
    let trimmed = content.trim_end();
    trimmed.len() >= fence_len && trimmed.chars().all(|c| c == FENCE_CHAR)
}

/// Split a line into its content and its `\n` terminator (if any).
fn split_terminator(line: &str) -> (&str, &str) {
    match line.strip_suffix('\n') {
        Some(content) => (content, "\n"),
        None => (line, ""),
    }
}
