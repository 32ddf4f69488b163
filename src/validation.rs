//! Input validation for teaching plans.
//!
//! The scheduler itself is total: it degrades to an empty or truncated
//! plan on malformed input rather than failing. Upstream rejection of
//! bad state is this module's job. Detects:
//! - Duplicate topic ids (catalog + custom topics, teaching order)
//! - References to unknown topic ids
//! - Inverted date ranges
//! - Non-positive hour values

use std::collections::HashSet;

use crate::models::{Classroom, SyllabusCatalog};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two topics share the same id, or an id repeats in the teaching order.
    DuplicateId,
    /// Tracking state references a topic id that doesn't exist.
    UnknownTopicReference,
    /// The exam date is not after the start date.
    InvalidDateRange,
    /// A weekly budget, topic estimate, or override is zero or negative.
    NonPositiveHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a classroom's state against its catalog.
///
/// Checks:
/// 1. No duplicate topic ids across the catalog and custom topics
/// 2. No duplicate ids in the teaching order
/// 3. Teaching order, completion list, and hour overrides reference known ids
/// 4. `exam_date` is after `start_date`
/// 5. Weekly hours, topic estimates, and overrides are all positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_classroom(class: &Classroom, catalog: &SyllabusCatalog) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect known topic ids
    let mut known_ids: HashSet<&str> = HashSet::new();
    for topic in catalog.flattened().into_iter().chain(class.custom_topics.iter()) {
        if !known_ids.insert(topic.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate topic id: {}", topic.id),
            ));
        }
        if topic.estimated_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHours,
                format!(
                    "Topic '{}' has non-positive estimate {}h",
                    topic.id, topic.estimated_hours
                ),
            ));
        }
    }

    // Teaching order: no repeats, no unknowns
    let mut seen_order: HashSet<&str> = HashSet::new();
    for id in &class.topic_order {
        if !seen_order.insert(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Topic id '{id}' appears twice in the teaching order"),
            ));
        }
        if !known_ids.contains(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTopicReference,
                format!("Teaching order references unknown topic '{id}'"),
            ));
        }
    }

    for id in &class.completed_topic_ids {
        if !known_ids.contains(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTopicReference,
                format!("Completion list references unknown topic '{id}'"),
            ));
        }
    }

    for (id, hours) in &class.hour_overrides {
        if !known_ids.contains(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTopicReference,
                format!("Hour override references unknown topic '{id}'"),
            ));
        }
        if *hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHours,
                format!("Hour override for '{id}' is non-positive ({hours}h)"),
            ));
        }
    }

    if class.exam_date <= class.start_date {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDateRange,
            format!(
                "Exam date {} is not after start date {}",
                class.exam_date, class.start_date
            ),
        ));
    }

    if class.weekly_hours <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveHours,
            format!("Weekly hours must be positive (got {})", class.weekly_hours),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
