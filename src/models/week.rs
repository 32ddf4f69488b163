//! Week plan (scheduler output) model.
//!
//! A week plan is the solution produced by the weekly scheduler: an
//! ordered list of 7-day buckets, each holding the topic occurrences
//! taught that week. Buckets are chronologically contiguous by
//! construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Topic;
use crate::scheduler::MAX_SCHEDULE_WEEKS;

/// One 7-day teaching window and the topic occurrences assigned to it.
///
/// `week_end` is inclusive: always `week_start + 6 days`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// First day of the week (inclusive).
    pub week_start: NaiveDate,
    /// Last day of the week (inclusive).
    pub week_end: NaiveDate,
    /// Topic occurrences taught this week, in priority order.
    /// Split fragments appear in the original topic's position.
    pub topics: Vec<Topic>,
    /// Total hours consumed this week, rounded to one decimal place.
    pub hours_used: f64,
}

impl WeekBucket {
    /// Number of topic occurrences in this week.
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Whether any occurrence of the given topic id is taught this week.
    pub fn contains_topic(&self, topic_id: &str) -> bool {
        self.topics.iter().any(|t| t.id == topic_id)
    }
}

/// A complete weekly teaching plan (solution to a scheduling request).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Week buckets in chronological order.
    pub weeks: Vec<WeekBucket>,
}

impl WeekPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a week bucket.
    pub fn push_week(&mut self, week: WeekBucket) {
        self.weeks.push(week);
    }

    /// Number of weeks in the plan.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Whether the plan has no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Distinct topic ids appearing in the plan, in first-seen order.
    ///
    /// A topic split across several weeks appears once.
    pub fn scheduled_topic_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for week in &self.weeks {
            for topic in &week.topics {
                if seen.insert(topic.id.as_str()) {
                    ids.push(topic.id.clone());
                }
            }
        }
        ids
    }

    /// Whether any occurrence of the given topic id was scheduled.
    pub fn contains_topic(&self, topic_id: &str) -> bool {
        self.weeks.iter().any(|w| w.contains_topic(topic_id))
    }

    /// Sum of `hours_used` across all weeks.
    pub fn total_hours(&self) -> f64 {
        self.weeks.iter().map(|w| w.hours_used).sum()
    }

    /// Ids from the given input topics that never made it into the plan.
    ///
    /// The scheduler truncates silently at the week ceiling; comparing
    /// the plan against the input it was built from is how callers
    /// detect an infeasible request.
    pub fn unscheduled_ids(&self, topics: &[Topic]) -> Vec<String> {
        let scheduled: HashSet<&str> = self
            .weeks
            .iter()
            .flat_map(|w| w.topics.iter())
            .map(|t| t.id.as_str())
            .collect();
        topics
            .iter()
            .filter(|t| !scheduled.contains(t.id.as_str()))
            .map(|t| t.id.clone())
            .collect()
    }

    /// Whether the plan ran all the way to the week-count safety ceiling.
    ///
    /// Heuristic only: a workload that legitimately finishes in exactly
    /// the ceiling week also reports `true`. [`Self::unscheduled_ids`]
    /// is the authoritative truncation check.
    pub fn hit_week_ceiling(&self) -> bool {
        self.weeks.len() == MAX_SCHEDULE_WEEKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SyllabusLevel;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn topic(id: &str, title: &str, hours: f64) -> Topic {
        Topic::new(id)
            .with_title(title)
            .with_level(SyllabusLevel::As)
            .with_hours(hours)
    }

    fn sample_plan() -> WeekPlan {
        let mut plan = WeekPlan::new();
        plan.push_week(WeekBucket {
            week_start: date(2026, 9, 7),
            week_end: date(2026, 9, 13),
            topics: vec![topic("1.1", "Data representation", 3.0), topic("1.2", "Multimedia (Part 1)", 1.0)],
            hours_used: 4.0,
        });
        plan.push_week(WeekBucket {
            week_start: date(2026, 9, 14),
            week_end: date(2026, 9, 20),
            topics: vec![topic("1.2", "Multimedia (Part 2)", 3.0)],
            hours_used: 3.0,
        });
        plan
    }

    #[test]
    fn test_scheduled_ids_dedup_first_seen_order() {
        let plan = sample_plan();
        assert_eq!(plan.scheduled_topic_ids(), ["1.1", "1.2"]);
    }

    #[test]
    fn test_contains_topic() {
        let plan = sample_plan();
        assert!(plan.contains_topic("1.2"));
        assert!(!plan.contains_topic("9.9"));
        assert!(plan.weeks[1].contains_topic("1.2"));
        assert!(!plan.weeks[1].contains_topic("1.1"));
    }

    #[test]
    fn test_unscheduled_ids() {
        let plan = sample_plan();
        let inputs = vec![
            topic("1.1", "Data representation", 3.0),
            topic("1.2", "Multimedia", 4.0),
            topic("1.3", "Compression", 2.0),
        ];
        assert_eq!(plan.unscheduled_ids(&inputs), ["1.3"]);
    }

    #[test]
    fn test_total_hours() {
        let plan = sample_plan();
        assert!((plan.total_hours() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_plan() {
        let plan = WeekPlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.week_count(), 0);
        assert!(plan.scheduled_topic_ids().is_empty());
        assert!(!plan.hit_week_ceiling());
    }
}
