//! Authored content pipeline: fence extraction, escape normalization, reinjection.
//!
//! Every view that renders problem text goes through [`normalize_content`], so
//! prose and code blocks are normalized the same way everywhere.

mod escape;
mod fence;
mod reinject;
mod token;

pub use escape::{LINE_BREAK_ESCAPE, LITERAL_ESCAPE, normalize_escapes};
pub use fence::{ExtractedBlock, Extraction, extract};
pub use reinject::{ReinjectionError, reinject};

/// Turn raw authored text into Markdown ready for the renderer.
///
/// Code blocks are lifted out before the prose is normalized, each block
/// interior is normalized on its own, and the blocks are put back in place.
pub fn normalize_content(raw: &str) -> Result<String, ReinjectionError> {
    if raw.is_empty() {
        return Ok(String::new());
    }
    let Extraction {
        prose,
        blocks,
        sentinel,
    } = extract(raw);
    if blocks.last().is_some_and(|b| !b.is_closed()) {
        log::debug!("Unterminated code fence runs to the end of the content");
    }
    let prose = normalize_escapes(&prose);
    let blocks: Vec<ExtractedBlock> = blocks
        .into_iter()
        .map(|block| {
            let interior = normalize_escapes(&block.raw_interior);
            block.with_interior(interior)
        })
        .collect();
    reinject(&prose, &blocks, &sentinel)
}

/// [`normalize_content`] for render paths that must not fail: on an internal
/// pipeline error, log it and fall back to the raw text.
pub fn normalize_content_or_raw(raw: &str) -> String {
    normalize_content(raw).unwrap_or_else(|e| {
        log::error!("Content pipeline invariant violated: {}", e);
        raw.to_string()
    })
}
