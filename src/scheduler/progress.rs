//! Syllabus progress metrics.
//!
//! Computes completion indicators for a classroom against its catalog:
//! overall and per-level completion percentages, plus remaining
//! teaching hours with per-topic overrides honored.

use crate::models::{Classroom, SyllabusCatalog, SyllabusLevel, Topic};

/// Completion counts for one syllabus level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    /// Topics of this level in the class's scope.
    pub total: usize,
    /// How many of those are marked completed.
    pub completed: usize,
    /// Completion percentage (0–100; 0 when the level is empty).
    pub pct: f64,
}

impl LevelProgress {
    fn calculate(topics: &[&Topic], class: &Classroom, level: SyllabusLevel) -> Self {
        let of_level: Vec<&&Topic> = topics.iter().filter(|t| t.level == level).collect();
        let total = of_level.len();
        let completed = of_level.iter().filter(|t| class.is_completed(&t.id)).count();
        Self {
            total,
            completed,
            pct: percentage(completed, total),
        }
    }

    /// Whether the class teaches any topics of this level.
    pub fn is_taught(&self) -> bool {
        self.total > 0
    }
}

/// Progress indicators for a classroom.
///
/// Totals cover the catalog topics in the class's scope plus its
/// custom topics; per-level figures cover catalog topics only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// Topics in scope, custom topics included.
    pub total_topics: usize,
    /// Completed topics among those.
    pub completed_topics: usize,
    /// Overall completion percentage (0–100).
    pub overall_pct: f64,
    /// AS-level completion.
    pub as_progress: LevelProgress,
    /// A-level completion.
    pub a_progress: LevelProgress,
    /// IGCSE completion.
    pub igcse_progress: LevelProgress,
    /// Teaching hours across all in-scope topics, overrides applied.
    pub total_hours: f64,
    /// Hours still to teach (total minus completed).
    pub remaining_hours: f64,
}

impl ProgressReport {
    /// Computes progress for a classroom against its catalog.
    pub fn calculate(class: &Classroom, catalog: &SyllabusCatalog) -> Self {
        let scope_topics = catalog.topics_in_scope(class.scope);
        let mut relevant: Vec<&Topic> = scope_topics.clone();
        relevant.extend(class.custom_topics.iter());

        let total_topics = relevant.len();
        let completed_topics = relevant
            .iter()
            .filter(|t| class.is_completed(&t.id))
            .count();

        let hours = |topics: &[&Topic]| -> f64 {
            topics.iter().map(|t| class.effective_hours(t)).sum()
        };
        let completed: Vec<&Topic> = relevant
            .iter()
            .copied()
            .filter(|t| class.is_completed(&t.id))
            .collect();
        let total_hours = hours(&relevant);
        let completed_hours = hours(&completed);

        Self {
            total_topics,
            completed_topics,
            overall_pct: percentage(completed_topics, total_topics),
            as_progress: LevelProgress::calculate(&scope_topics, class, SyllabusLevel::As),
            a_progress: LevelProgress::calculate(&scope_topics, class, SyllabusLevel::A),
            igcse_progress: LevelProgress::calculate(&scope_topics, class, SyllabusLevel::Igcse),
            total_hours,
            remaining_hours: total_hours - completed_hours,
        }
    }
}

fn percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (completed as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassScope, SyllabusSection};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn topic(id: &str, level: SyllabusLevel, hours: f64) -> Topic {
        Topic::new(id)
            .with_title(id.to_uppercase())
            .with_level(level)
            .with_hours(hours)
    }

    fn catalog() -> SyllabusCatalog {
        SyllabusCatalog::new()
            .with_section(
                SyllabusSection::new(1, "AS content", SyllabusLevel::As)
                    .with_topic(topic("as.1", SyllabusLevel::As, 4.0))
                    .with_topic(topic("as.2", SyllabusLevel::As, 6.0)),
            )
            .with_section(
                SyllabusSection::new(13, "A2 content", SyllabusLevel::A)
                    .with_topic(topic("a.1", SyllabusLevel::A, 5.0)),
            )
    }

    fn full_class() -> Classroom {
        Classroom::new(
            "c1",
            "Year 13",
            ClassScope::Full,
            date(2026, 9, 7),
            date(2027, 5, 24),
            4.0,
        )
    }

    #[test]
    fn test_overall_and_per_level_progress() {
        let catalog = catalog();
        let mut class = full_class();
        class.toggle_completed("as.1");

        let report = ProgressReport::calculate(&class, &catalog);
        assert_eq!(report.total_topics, 3);
        assert_eq!(report.completed_topics, 1);
        assert!((report.overall_pct - 100.0 / 3.0).abs() < 1e-9);

        assert_eq!(report.as_progress.total, 2);
        assert_eq!(report.as_progress.completed, 1);
        assert!((report.as_progress.pct - 50.0).abs() < 1e-9);
        assert_eq!(report.a_progress.total, 1);
        assert_eq!(report.a_progress.completed, 0);
        assert!(!report.igcse_progress.is_taught());
    }

    #[test]
    fn test_remaining_hours_honor_overrides() {
        let catalog = catalog();
        let mut class = full_class();
        class.set_hour_override("as.2", 8.0); // 6 → 8
        class.toggle_completed("a.1"); // 5h done

        let report = ProgressReport::calculate(&class, &catalog);
        assert!((report.total_hours - 17.0).abs() < 1e-9); // 4 + 8 + 5
        assert!((report.remaining_hours - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_topics_count_toward_totals() {
        let catalog = catalog();
        let mut class = full_class();
        class.add_custom_topic(topic("custom-1", SyllabusLevel::Custom, 2.0));
        class.toggle_completed("custom-1");

        let report = ProgressReport::calculate(&class, &catalog);
        assert_eq!(report.total_topics, 4);
        assert_eq!(report.completed_topics, 1);
        assert!((report.total_hours - 17.0).abs() < 1e-9);
        assert!((report.remaining_hours - 15.0).abs() < 1e-9);
        // Custom topics do not shift per-level figures
        assert_eq!(report.as_progress.total, 2);
    }

    #[test]
    fn test_scope_narrows_report() {
        let catalog = catalog();
        let mut class = full_class();
        class.scope = ClassScope::As;

        let report = ProgressReport::calculate(&class, &catalog);
        assert_eq!(report.total_topics, 2);
        assert!(!report.a_progress.is_taught());
    }

    #[test]
    fn test_empty_catalog() {
        let class = full_class();
        let report = ProgressReport::calculate(&class, &SyllabusCatalog::new());
        assert_eq!(report.total_topics, 0);
        assert_eq!(report.overall_pct, 0.0);
        assert_eq!(report.remaining_hours, 0.0);
    }
}
