//! Presenting scan results on the terminal

use serde::Serialize;
use std::path::Path;

use torpedodepot::annotation::Annotation;
use torpedodepot::language::Position;

/// One reported address, in the shape written out by `--json`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Row<'i> {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub text: &'i str,
    pub message: &'i str,
}

pub fn rows<'i>(content: &'i str, annotations: &'i [Annotation]) -> Vec<Row<'i>> {
    annotations
        .iter()
        .map(|annotation| {
            let range = annotation.range;
            let position = Position::locate(content, range.start);

            Row {
                start: range.start,
                end: range.end,
                line: position.line,
                column: position.column,
                text: range
                    .text(content)
                    .unwrap_or_default(),
                message: &annotation.message,
            }
        })
        .collect()
}

// Lines and columns are shown one-origin, the way editors and compilers
// report them.
pub fn to_text(filename: &Path, rows: &[Row]) -> String {
    let mut result = String::new();

    for row in rows {
        result.push_str(&format!(
            "{}:{}:{}: {}\n",
            filename.display(),
            row.line + 1,
            row.column + 1,
            row.message
        ));
    }

    result
}

pub fn to_json(rows: &[Row]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}
