//! Topic model.
//!
//! A topic is a unit of curriculum content with an estimated teaching
//! duration in hours. Topics are immutable values from the scheduler's
//! point of view: it reads `title` and `estimated_hours` and copies
//! everything else unchanged onto split fragments.

use serde::{Deserialize, Serialize};

use super::SyllabusLevel;

/// A unit of curriculum content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic identifier. Split fragments keep the original's id.
    pub id: String,
    /// Syllabus section this topic belongs to.
    pub section_id: i64,
    /// Display title. Split fragments append a `"(Part N)"` suffix.
    pub title: String,
    /// Syllabus classification.
    pub level: SyllabusLevel,
    /// Estimated teaching duration in hours.
    pub estimated_hours: f64,
    /// Optional syllabus description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Topic {
    /// Creates a new topic with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section_id: 0,
            title: String::new(),
            level: SyllabusLevel::Custom,
            estimated_hours: 0.0,
            description: None,
        }
    }

    /// Sets the syllabus section id.
    pub fn with_section(mut self, section_id: i64) -> Self {
        self.section_id = section_id;
        self
    }

    /// Sets the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the syllabus level.
    pub fn with_level(mut self, level: SyllabusLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the estimated duration in hours.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Sets the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Splits this topic's title into `(base, part number)`.
    ///
    /// A title of the form `"<base> (Part N)"` yields `(base, Some(N))`;
    /// anything else is its own base with no part number. Only the last
    /// suffix counts, so `"X (Part 2) (Part 3)"` parses as
    /// `("X (Part 2)", Some(3))`.
    pub fn split_title(&self) -> (&str, Option<u32>) {
        parse_part_title(&self.title)
    }
}

/// Parses a `"<base> (Part N)"` title into `(base, Some(N))`.
pub(crate) fn parse_part_title(title: &str) -> (&str, Option<u32>) {
    if let Some(stripped) = title.strip_suffix(')') {
        if let Some((base, digits)) = stripped.rsplit_once(" (Part ") {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(n) = digits.parse::<u32>() {
                    return (base, Some(n));
                }
            }
        }
    }
    (title, None)
}

/// Renders the split-fragment title for part `n` of `base`.
pub(crate) fn part_label(base: &str, n: u32) -> String {
    format!("{base} (Part {n})")
}
