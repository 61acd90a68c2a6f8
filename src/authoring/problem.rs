//! Problem MDX files: YAML frontmatter followed by a Markdown body with
//! fixed section headings.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{AuthoringError, check_path_segment};
use crate::core::content;

const DEFAULT_TITLE: &str = "제목 없음";
const DEFAULT_DESCRIPTION: &str = "설명 없음";
const DEFAULT_DIFFICULTY: &str = "tutorial";
const DEFAULT_CATEGORY: &str = "output";
const DEFAULT_ORDER: i64 = 1;

/// Directory that anchors `<difficulty>/<category>/<id>.mdx` in a content tree.
const PROBLEMS_DIR: &str = "problems";

// Body section headings (`## ...`) used by problem authors.
const INPUT_SECTION: &str = "입력";
const OUTPUT_SECTION: &str = "출력";
const NOTES_SECTION: &str = "노트";
const EXAMPLE_INPUT_SECTION: &str = "예제 입력";
const EXAMPLE_OUTPUT_SECTION: &str = "예제 출력";

static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\n(.*?)\n---[ \t]*(?:\n|\z)").expect("FRONTMATTER regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemExample {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A problem as stored in `data/problems/<difficulty>/<category>/<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub category: String,
    pub order: i64,
    pub content: String,
    pub solution_idea: String,
    pub python_code: String,
    pub cpp_code: String,
    pub input: String,
    pub output: String,
    pub examples: Vec<ProblemExample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parse a problem record from JSON. At least one example is required.
pub fn parse_problem_json(json: &str) -> Result<ProblemRecord, AuthoringError> {
    let problem: ProblemRecord = serde_json::from_str(json)?;
    if problem.examples.is_empty() {
        return Err(AuthoringError::NoExamples);
    }
    Ok(problem)
}

impl ProblemRecord {
    /// Build a record from an MDX source file.
    ///
    /// `path` supplies the id (file stem) and, when it lies under a
    /// `problems/<difficulty>/<category>/` directory, the difficulty and category.
    pub fn from_mdx(path: &Path, source: &str) -> Result<Self, AuthoringError> {
        let source = source.replace("\r\n", "\n");
        let caps = FRONTMATTER
            .captures(&source)
            .ok_or(AuthoringError::MissingFrontmatter)?;
        let frontmatter = Frontmatter::parse(caps.get(1).map_or("", |m| m.as_str()))?;
        let body_start = caps.get(0).map_or(0, |m| m.end());
        let content = source[body_start..].trim().to_string();
        let (input, output, examples, notes) = {
            let sections = Sections::parse(&content);
            let notes = sections
                .get(NOTES_SECTION)
                .filter(|n| !n.is_empty())
                .map(str::to_string);
            (
                sections.get(INPUT_SECTION).unwrap_or_default().to_string(),
                sections.get(OUTPUT_SECTION).unwrap_or_default().to_string(),
                sections.examples(),
                notes,
            )
        };

        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let (difficulty, category) = difficulty_and_category(path);
        check_path_segment("id", &id)?;
        check_path_segment("difficulty", &difficulty)?;
        check_path_segment("category", &category)?;

        Ok(ProblemRecord {
            title: text_or(frontmatter.title, DEFAULT_TITLE),
            description: text_or(frontmatter.description, DEFAULT_DESCRIPTION),
            order: frontmatter.order.unwrap_or(DEFAULT_ORDER),
            solution_idea: text_or(frontmatter.solution_idea, ""),
            python_code: text_or(frontmatter.python_code, ""),
            cpp_code: text_or(frontmatter.cpp_code, ""),
            input,
            output,
            examples,
            notes,
            id,
            difficulty,
            category,
            content,
        })
    }
}

/// `(difficulty, category)` from the two directories following `problems`.
fn difficulty_and_category(path: &Path) -> (String, String) {
    let dirs: Vec<&str> = path
        .parent()
        .map(|p| {
            p.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => s.to_str(),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();
    match dirs.iter().position(|d| *d == PROBLEMS_DIR) {
        Some(i) if i + 2 < dirs.len() => (dirs[i + 1].to_string(), dirs[i + 2].to_string()),
        _ => (DEFAULT_DIFFICULTY.to_string(), DEFAULT_CATEGORY.to_string()),
    }
}

/// Frontmatter fields read from a problem file. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Frontmatter {
    title: Option<String>,
    description: Option<String>,
    order: Option<i64>,
    solution_idea: Option<String>,
    python_code: Option<String>,
    cpp_code: Option<String>,
}

impl Frontmatter {
    fn parse(yaml: &str) -> Result<Self, AuthoringError> {
        let trimmed = yaml.trim();
        if trimmed.is_empty() {
            return Ok(Frontmatter::default());
        }
        Ok(serde_yaml::from_str(trimmed)?)
    }
}

/// Field text without trailing whitespace; `default` when missing or blank.
fn text_or(value: Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim_end) {
        Some(text) if !text.trim_start().is_empty() => text.to_string(),
        _ => default.to_string(),
    }
}

/// Body split by `## heading` lines.
struct Sections<'a> {
    entries: Vec<(&'a str, String)>,
}

impl<'a> Sections<'a> {
    fn parse(body: &'a str) -> Self {
        let mut entries: Vec<(&'a str, String)> = Vec::new();
        let mut current: Option<(&'a str, Vec<&'a str>)> = None;
        let mut in_fence = false;
        for line in body.lines() {
            if line.starts_with("```") {
                in_fence = !in_fence;
            }
            let heading = if in_fence {
                None
            } else {
                line.strip_prefix("## ")
            };
            match heading {
                Some(name) => {
                    if let Some((name, lines)) = current.take() {
                        entries.push((name, lines.join("\n").trim().to_string()));
                    }
                    current = Some((name.trim(), Vec::new()));
                }
                None => {
                    if let Some((_, lines)) = current.as_mut() {
                        lines.push(line);
                    }
                }
            }
        }
        if let Some((name, lines)) = current {
            entries.push((name, lines.join("\n").trim().to_string()));
        }
        Sections { entries }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| text.as_str())
    }

    /// Pair `예제 입력[ N]` with `예제 출력[ N]`. Falls back to one empty example.
    fn examples(&self) -> Vec<ProblemExample> {
        let mut examples: Vec<ProblemExample> = self
            .entries
            .iter()
            .filter_map(|(name, text)| {
                let suffix = name.strip_prefix(EXAMPLE_INPUT_SECTION)?;
                let output = self.get(&format!("{}{}", EXAMPLE_OUTPUT_SECTION, suffix))?;
                Some(ProblemExample {
                    input: fenced_text(text),
                    output: fenced_text(output),
                    explanation: None,
                })
            })
            .collect();
        if examples.is_empty() {
            examples.push(ProblemExample {
                input: String::new(),
                output: String::new(),
                explanation: None,
            });
        }
        examples
    }
}

/// Interior of the first fenced block in `text`, or the text itself.
fn fenced_text(text: &str) -> String {
    let extraction = content::extract(text);
    match extraction.blocks.first() {
        Some(block) => block.code().trim().to_string(),
        None => text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\ntitle: \"Hello World\"\ndescription: 'Print a greeting'\norder: 3\nsolutionIdea: |\n  Just print it.\n  Nothing else.\npythonCode: |\n  def main():\n      print(\"Hello World!\")\ncppCode: |\n  #include <iostream>\n  int main() { std::cout << \"Hello World!\\n\"; }\n---\n\n## 문제\n\nPrint Hello World!\n\n## 입력\n\nNone.\n\n## 출력\n\nHello World!\n\n## 예제 입력\n\n```\n\n```\n\n## 예제 출력\n\n```\nHello World!\n```\n";

    fn sample_path() -> &'static Path {
        Path::new("content/problems/tutorial/output/hello-world.mdx")
    }

    #[test]
    fn from_mdx_reads_frontmatter() {
        let p = ProblemRecord::from_mdx(sample_path(), SAMPLE).unwrap();
        assert_eq!(p.id, "hello-world");
        assert_eq!(p.title, "Hello World");
        assert_eq!(p.description, "Print a greeting");
        assert_eq!(p.order, 3);
        assert_eq!(p.solution_idea, "Just print it.\nNothing else.");
    }

    #[test]
    fn from_mdx_dedents_code_blocks_keeping_relative_indent() {
        let p = ProblemRecord::from_mdx(sample_path(), SAMPLE).unwrap();
        assert_eq!(p.python_code, "def main():\n    print(\"Hello World!\")");
        assert!(p.cpp_code.starts_with("#include <iostream>\n"));
        assert!(p.cpp_code.contains("\\n"));
    }

    #[test]
    fn from_mdx_reads_sections_and_examples() {
        let p = ProblemRecord::from_mdx(sample_path(), SAMPLE).unwrap();
        assert_eq!(p.input, "None.");
        assert_eq!(p.output, "Hello World!");
        assert_eq!(p.examples.len(), 1);
        assert_eq!(p.examples[0].input, "");
        assert_eq!(p.examples[0].output, "Hello World!");
        assert_eq!(p.notes, None);
        assert!(p.content.starts_with("## 문제"));
    }

    #[test]
    fn from_mdx_takes_difficulty_and_category_from_path() {
        let p = ProblemRecord::from_mdx(
            Path::new("/site/content/problems/bronze/loops/sum.mdx"),
            SAMPLE,
        )
        .unwrap();
        assert_eq!(p.difficulty, "bronze");
        assert_eq!(p.category, "loops");
    }

    #[test]
    fn from_mdx_defaults_without_problems_dir() {
        let p = ProblemRecord::from_mdx(Path::new("sum.mdx"), "---\nfoo: bar\n---\nbody").unwrap();
        assert_eq!(p.difficulty, "tutorial");
        assert_eq!(p.category, "output");
        assert_eq!(p.title, "제목 없음");
        assert_eq!(p.description, "설명 없음");
        assert_eq!(p.order, 1);
        assert_eq!(p.content, "body");
        assert_eq!(p.examples.len(), 1);
    }

    #[test]
    fn frontmatter_follows_yaml_quoting_and_comments() {
        let src = "---\ntitle: \"Say \\\"hi\\\"\"\ndescription: \"d\" # shown on cards\norder: 7 # position\n---\nbody";
        let p = ProblemRecord::from_mdx(sample_path(), src).unwrap();
        assert_eq!(p.title, "Say \"hi\"");
        assert_eq!(p.description, "d");
        assert_eq!(p.order, 7);
    }

    #[test]
    fn folded_block_scalar_joins_lines() {
        let src = "---\ntitle: t\nsolutionIdea: >\n  Read both numbers\n  and add them.\n---\nbody";
        let p = ProblemRecord::from_mdx(sample_path(), src).unwrap();
        assert_eq!(p.solution_idea, "Read both numbers and add them.");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let src = "---\ntitle: \"  \"\ndescription:\n---\nbody";
        let p = ProblemRecord::from_mdx(sample_path(), src).unwrap();
        assert_eq!(p.title, "제목 없음");
        assert_eq!(p.description, "설명 없음");
    }

    #[test]
    fn empty_frontmatter_uses_defaults() {
        let p = ProblemRecord::from_mdx(sample_path(), "---\n\n---\nbody").unwrap();
        assert_eq!(p.title, "제목 없음");
        assert_eq!(p.order, 1);
    }

    #[test]
    fn malformed_frontmatter_is_an_error() {
        let err = ProblemRecord::from_mdx(sample_path(), "---\ntitle: [unclosed\n---\nbody")
            .unwrap_err();
        assert!(matches!(err, AuthoringError::Frontmatter(_)));
    }

    #[test]
    fn from_mdx_requires_frontmatter() {
        let err = ProblemRecord::from_mdx(sample_path(), "# No frontmatter").unwrap_err();
        assert!(matches!(err, AuthoringError::MissingFrontmatter));
    }

    #[test]
    fn from_mdx_handles_crlf() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let p = ProblemRecord::from_mdx(sample_path(), &crlf).unwrap();
        assert_eq!(p.title, "Hello World");
        assert_eq!(p.output, "Hello World!");
    }

    #[test]
    fn numbered_examples_are_paired() {
        let src = "---\ntitle: t\n---\n\n## 예제 입력 1\n\n```\n1 2\n```\n\n## 예제 출력 1\n\n```\n3\n```\n\n## 예제 입력 2\n\n```\n5 5\n```\n\n## 예제 출력 2\n\n```\n10\n```\n\n## 노트\n\nSum fits in i32.\n";
        let p = ProblemRecord::from_mdx(sample_path(), src).unwrap();
        assert_eq!(p.examples.len(), 2);
        assert_eq!(p.examples[1].input, "5 5");
        assert_eq!(p.examples[1].output, "10");
        assert_eq!(p.notes.as_deref(), Some("Sum fits in i32."));
    }

    #[test]
    fn heading_inside_code_fence_is_not_a_section() {
        let src = "---\ntitle: t\n---\n\n## 입력\n\n```\n## not a heading\n```\n\n## 출력\n\nok\n";
        let p = ProblemRecord::from_mdx(sample_path(), src).unwrap();
        assert!(p.input.contains("## not a heading"));
        assert_eq!(p.output, "ok");
    }

    #[test]
    fn parse_problem_json_requires_examples() {
        let p = ProblemRecord::from_mdx(sample_path(), SAMPLE).unwrap();
        let mut value = serde_json::to_value(&p).unwrap();
        value["examples"] = serde_json::json!([]);
        let err = parse_problem_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, AuthoringError::NoExamples));
    }

    #[test]
    fn parse_problem_json_reports_missing_field() {
        let err = parse_problem_json(r#"{"id":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn json_uses_camel_case_and_omits_missing_notes() {
        let p = ProblemRecord::from_mdx(sample_path(), SAMPLE).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"solutionIdea\""));
        assert!(json.contains("\"pythonCode\""));
        assert!(!json.contains("\"notes\""));
        assert_eq!(parse_problem_json(&json).unwrap(), p);
    }
}
