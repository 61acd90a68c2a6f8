//! Category MDC files: prose with the category record embedded as a JSON code block.

use serde::{Deserialize, Serialize};

use super::{AuthoringError, check_path_segment};
use crate::core::content;

/// A category as stored in `data/categories/<difficulty>/<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub icon_id: String,
    pub order: i64,
}

/// Parse a category record from JSON. All fields are required.
pub fn parse_category_json(json: &str) -> Result<CategoryRecord, AuthoringError> {
    let category: CategoryRecord = serde_json::from_str(json)?;
    check_path_segment("id", &category.id)?;
    check_path_segment("difficulty", &category.difficulty)?;
    Ok(category)
}

impl CategoryRecord {
    /// Read the record from the longest ```` ```json ```` block in an MDC file.
    /// Shorter JSON blocks are usually illustrative snippets.
    pub fn from_mdc(source: &str) -> Result<Self, AuthoringError> {
        let extraction = content::extract(source);
        let longest = extraction
            .blocks
            .iter()
            .filter(|b| b.language.eq_ignore_ascii_case("json"))
            .map(|b| b.code())
            .max_by_key(|code| code.len())
            .ok_or(AuthoringError::MissingJsonBlock)?;
        parse_category_json(longest)
    }
}
