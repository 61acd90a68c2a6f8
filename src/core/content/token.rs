//! Reserved tokens that cannot collide with author text.

/// Private-use code point; authored problem text has no reason to contain it.
const SENTINEL_CHAR: char = '\u{E000}';

/// Delimiter for reserved tokens. Lengthened until it does not occur in the
/// text it will be substituted into, so a wrapped token is always unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinel(String);

impl Sentinel {
    /// Pick the shortest run of sentinel characters absent from `text`:
    /// one longer than the longest run already present.
    pub fn for_text(text: &str) -> Self {
        Sentinel(SENTINEL_CHAR.to_string().repeat(longest_run(text) + 1))
    }

    /// `name` enclosed in the sentinel on both sides.
    pub fn wrap(&self, name: &str) -> String {
        format!("{0}{1}{0}", self.0, name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Length of the longest run of consecutive [`SENTINEL_CHAR`]s, in one pass.
fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == SENTINEL_CHAR {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
