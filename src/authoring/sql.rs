//! SQL seed statements for category and problem records.
//!
//! The hosted store has no multi-statement transactions from the client, so a
//! problem is written as: upsert the problem, delete its examples, insert the
//! current examples. Re-running a file converges to the same rows.

use super::{
    AuthoringError, CategoryRecord, ProblemRecord, RecordKind, parse_category_json,
    parse_problem_json,
};

/// Single-quoted SQL string literal.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn quote_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "NULL".to_string(), quote)
}

/// Upsert for one category, keyed by id.
pub fn category_upsert(category: &CategoryRecord) -> String {
    let id = quote(&category.id);
    let title = quote(&category.title);
    let description = quote(&category.description);
    let difficulty = quote(&category.difficulty);
    let icon = quote(&category.icon_id);
    let order = category.order;
    format!(
        "INSERT INTO categories (id, title, description, difficulty_id, icon_id, order_num)
VALUES ({id}, {title}, {description}, {difficulty}, {icon}, {order})
ON CONFLICT (id) DO UPDATE SET
  title = {title},
  description = {description},
  difficulty_id = {difficulty},
  icon_id = {icon},
  order_num = {order},
  updated_at = now();
"
    )
}

/// Upsert for one problem followed by a full replacement of its examples.
pub fn problem_upsert(problem: &ProblemRecord) -> String {
    let id = quote(&problem.id);
    let category = quote(&problem.category);
    let difficulty = quote(&problem.difficulty);
    let title = quote(&problem.title);
    let description = quote(&problem.description);
    let order = problem.order;
    let content = quote(&problem.content);
    let solution_idea = quote(&problem.solution_idea);
    let python_code = quote(&problem.python_code);
    let cpp_code = quote(&problem.cpp_code);
    let input = quote(&problem.input);
    let output = quote(&problem.output);
    let notes = quote_opt(problem.notes.as_deref());

    let mut sql = format!(
        "-- problem {id}
INSERT INTO problems (id, category_id, difficulty_id, title, description, order_num, content, solution_idea, python_code, cpp_code, input_description, output_description, notes)
VALUES ({id}, {category}, {difficulty}, {title}, {description}, {order}, {content}, {solution_idea}, {python_code}, {cpp_code}, {input}, {output}, {notes})
ON CONFLICT (difficulty_id, category_id, id) DO UPDATE SET
  title = {title},
  description = {description},
  order_num = {order},
  content = {content},
  solution_idea = {solution_idea},
  python_code = {python_code},
  cpp_code = {cpp_code},
  input_description = {input},
  output_description = {output},
  notes = {notes},
  updated_at = now();

DELETE FROM examples
WHERE difficulty_id = {difficulty}
  AND category_id = {category}
  AND problem_id = {id};
"
    );

    for (i, example) in problem.examples.iter().enumerate() {
        sql.push_str(&format!(
            "
-- example {n}
INSERT INTO examples (problem_id, category_id, difficulty_id, input_example, output_example, explanation, order_num)
VALUES ({id}, {category}, {difficulty}, {input}, {output}, {explanation}, {n});
",
            n = i + 1,
            input = quote(&example.input),
            output = quote(&example.output),
            explanation = quote_opt(example.explanation.as_deref()),
        ));
    }
    sql
}

/// Validate a JSON record of the given kind and render its SQL.
pub fn sql_from_json(json: &str, kind: RecordKind) -> Result<String, AuthoringError> {
    match kind {
        RecordKind::Category => Ok(category_upsert(&parse_category_json(json)?)),
        RecordKind::Problem => Ok(problem_upsert(&parse_problem_json(json)?)),
    }
}
