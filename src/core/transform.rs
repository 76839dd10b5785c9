use crate::domain::model::{OutputRow, Record};
use crate::utils::error::{EtlError, Result};
use crate::utils::text::{
    clean_html, format_id, map_priority, promote_preconditions, rewrite_test_case_links,
    suite_to_folder,
};

/// Upper bound on the numbered `Step {i}` columns scanned per row.
pub const DEFAULT_MAX_STEPS: usize = 1000;

const STEPS_HEADING: &str = "## Steps";
const EXPECTED_PREFIX: &str = "  *Expected:* ";

/// Converts one exported test case into an import row.
///
/// `row_number` is 1-based and only used for error reporting. Fails when the
/// row has no `Suite` column at all; every other column falls back to empty.
pub fn transform_record(record: &Record, row_number: usize, max_steps: usize) -> Result<OutputRow> {
    let suite = record
        .get("Suite")
        .ok_or_else(|| EtlError::MissingFieldError {
            field: "Suite".to_string(),
            row: row_number,
        })?;

    let labels = match record.get("Test Type") {
        Some(test_type) if !test_type.is_empty() => test_type.to_string(),
        _ => String::new(),
    };

    Ok(OutputRow {
        id: record.get("Key").and_then(format_id),
        title: record.get("Title").unwrap_or_default().to_string(),
        folder: suite_to_folder(suite),
        priority: map_priority(record.get("Priority")).to_string(),
        tags: record.get("Tags").unwrap_or_default().to_string(),
        owner: record.get("Created By").unwrap_or_default().to_string(),
        description: build_description(record, max_steps),
        labels,
        ..Default::default()
    })
}

/// Description body followed by the step block, separated by a blank line.
pub fn build_description(record: &Record, max_steps: usize) -> String {
    let body = description_body(record.get("Description"));
    let steps = render_step_block(&step_lines(record, max_steps));

    if body.trim().is_empty() {
        steps
    } else {
        format!("{}\n\n{}", body, steps)
    }
}

pub fn description_body(description: Option<&str>) -> String {
    let text = promote_preconditions(description.unwrap_or_default());
    rewrite_test_case_links(&text)
}

/// Bullet lines for both the numbered `Step {i}`/`Result {i}` pairs and the
/// free-text `Steps`/`Expected Result` columns, in that order.
pub fn step_lines(record: &Record, max_steps: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for i in 1..=max_steps {
        let Some(step) = record.get(&format!("Step {}", i)) else {
            break;
        };

        if step.trim().is_empty() {
            continue;
        }

        lines.push(format!("* {}", clean_html(Some(step.trim()))));
        if let Some(result) = record.non_blank(&format!("Result {}", i)) {
            lines.push(format!("{}{}", EXPECTED_PREFIX, clean_html(Some(result.trim()))));
        }
    }

    if let Some(steps) = record.non_blank("Steps") {
        for line in steps.lines().map(str::trim).filter(|l| !l.is_empty()) {
            lines.push(format!("* {}", clean_html(Some(line))));
        }

        if let Some(expected) = record.non_blank("Expected Result") {
            lines.push(format!("{}{}", EXPECTED_PREFIX, clean_html(Some(expected.trim()))));
        }
    }

    lines
}

pub fn render_step_block(lines: &[String]) -> String {
    let mut block = format!("\n{}\n", STEPS_HEADING);
    for line in lines {
        block.push('\n');
        block.push_str(line);
    }
    block
}
