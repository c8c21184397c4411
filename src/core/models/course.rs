//! Catalog course model

use serde::{Deserialize, Serialize};

/// A course offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCourse {
    /// Primary identifier as stored (e.g., "CS1100", "CS 2011")
    pub course_id: String,

    /// Subject area (e.g., "Computer Science")
    #[serde(default)]
    pub subject: String,

    /// Course title (e.g., "Data Structures")
    #[serde(default)]
    pub title: String,

    /// Credit hours (can be fractional)
    #[serde(default)]
    pub credits: f32,
}

impl CatalogCourse {
    /// Create a new catalog course
    ///
    /// # Arguments
    /// * `course_id` - Course identifier
    /// * `subject` - Subject area
    /// * `title` - Course title
    /// * `credits` - Credit hours
    #[must_use]
    pub const fn new(course_id: String, subject: String, title: String, credits: f32) -> Self {
        Self {
            course_id,
            subject,
            title,
            credits,
        }
    }

    /// Case-insensitive substring match against id, title and subject.
    /// A blank query matches every course.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.course_id.to_lowercase().contains(&q)
            || self.title.to_lowercase().contains(&q)
            || (!self.subject.is_empty() && self.subject.to_lowercase().contains(&q))
    }
}

/// Filter a catalog by a free-text query, keeping catalog order
#[must_use]
pub fn search<'a>(catalog: &'a [CatalogCourse], query: &str) -> Vec<&'a CatalogCourse> {
    catalog.iter().filter(|c| c.matches(query)).collect()
}
