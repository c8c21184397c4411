//! CSV parser for course catalog data
//!
//! Expected layout: a header row naming at least `Course ID`, followed by
//! one course per line. `Subject`, `Title` and `Credits` are optional
//! columns; header names are matched case-insensitively and in any order.
//!
//! ```text
//! Course ID,Subject,Title,Credits
//! CS1100,Computer Science,Intro to Programming,3
//! "CS 2011","Computer Science","Data Structures, Lab",4
//! ```

use super::{StoreError, StoreResult};
use crate::core::models::CatalogCourse;
use crate::warn;
use std::fs;
use std::path::Path;

/// Read and parse a catalog CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or has no usable header
pub fn read_catalog_csv<P: AsRef<Path>>(path: P) -> StoreResult<Vec<CatalogCourse>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_csv(&content)
}

/// Parse catalog CSV content.
///
/// Rows without a course id are skipped with a warning; an unparseable
/// credit value reads as 0.
///
/// # Errors
/// Returns an error if there is no header row or it lacks a `Course ID` column
pub fn parse_catalog_csv(content: &str) -> StoreResult<Vec<CatalogCourse>> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_idx, header_line) = lines.next().ok_or_else(|| StoreError::Csv {
        line: 1,
        message: "empty catalog file".to_string(),
    })?;
    let headers = parse_csv_line(header_line);

    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let id_col = column("Course ID").ok_or_else(|| StoreError::Csv {
        line: header_idx + 1,
        message: "missing 'Course ID' column".to_string(),
    })?;
    let subject_col = column("Subject");
    let title_col = column("Title");
    let credits_col = column("Credits");

    let mut courses = Vec::new();
    for (idx, line) in lines {
        let fields = parse_csv_line(line);
        let field = |col: Option<usize>| {
            col.and_then(|c| fields.get(c))
                .cloned()
                .unwrap_or_default()
        };

        let course_id = field(Some(id_col));
        if course_id.is_empty() {
            warn!("Skipping catalog line {}: missing course id", idx + 1);
            continue;
        }
        let credits = field(credits_col).parse::<f32>().unwrap_or(0.0);
        courses.push(CatalogCourse::new(
            course_id,
            field(subject_col),
            field(title_col),
            credits,
        ));
    }

    Ok(courses)
}

/// Split one CSV line into trimmed fields. Double-quoted fields may contain
/// commas, and `""` inside quotes is a literal quote.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
