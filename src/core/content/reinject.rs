//! Put extracted code blocks back into normalized prose.

use super::fence::{ExtractedBlock, PLACEHOLDER_STEM};
use super::token::Sentinel;

/// Extractor and reinjector disagree about the placeholders. Always a bug in
/// the pipeline, never a problem with the authored content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReinjectionError {
    #[error("code block {index} has no placeholder in the prose")]
    MissingPlaceholder { index: usize },

    #[error("placeholder refers to code block {index}, which does not exist")]
    UnknownPlaceholder { index: usize },

    #[error("placeholder for code block {found} found where block {expected} was expected")]
    OutOfOrder { expected: usize, found: usize },

    #[error("malformed code block placeholder at byte {offset}")]
    Malformed { offset: usize },
}

/// Replace every placeholder in `prose` with its block's fenced form.
///
/// Placeholders must appear exactly once each, in block order.
pub fn reinject(
    prose: &str,
    blocks: &[ExtractedBlock],
    sentinel: &Sentinel,
) -> Result<String, ReinjectionError> {
    let marker = sentinel.as_str();
    let mut out = String::with_capacity(
        prose.len()
            + blocks
                .iter()
                .map(|b| b.raw_interior.len() + 16)
                .sum::<usize>(),
    );
    let mut rest = prose;
    let mut offset = 0;
    let mut expected = 0;

    while let Some(start) = rest.find(marker) {
        out.push_str(&rest[..start]);
        let body = &rest[start + marker.len()..];
        let (index, body_len) = parse_placeholder(body, marker).ok_or(
            ReinjectionError::Malformed {
                offset: offset + start,
            },
        )?;
        let block = blocks
            .get(index)
            .ok_or(ReinjectionError::UnknownPlaceholder { index })?;
        if index != expected {
            return Err(ReinjectionError::OutOfOrder {
                expected,
                found: index,
            });
        }
        out.push_str(&block.to_fenced());
        expected += 1;

        let consumed = start + marker.len() + body_len;
        offset += consumed;
        rest = &rest[consumed..];
    }
    out.push_str(rest);

    if expected < blocks.len() {
        return Err(ReinjectionError::MissingPlaceholder { index: expected });
    }
    Ok(out)
}

/// Parse `CODE_BLOCK_<n><marker>` at the start of `body`.
/// Returns the block index and the number of bytes consumed.
fn parse_placeholder(body: &str, marker: &str) -> Option<(usize, usize)> {
    let tail = body.strip_prefix(PLACEHOLDER_STEM)?;
    let end = tail.find(marker)?;
    let index = tail[..end].parse::<usize>().ok()?;
    Some((index, PLACEHOLDER_STEM.len() + end + marker.len()))
}
