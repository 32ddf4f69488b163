//! Classroom state model.
//!
//! A classroom is the explicit store the surrounding application owns:
//! which topics are done, the teaching order, per-topic hour overrides,
//! and any user-added practice sessions. The weekly scheduler never
//! reads this store directly; [`Classroom::effective_topics`] produces
//! the ordered, override-applied topic list it consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ClassScope, SyllabusCatalog, Topic};

/// Direction for reordering a topic within the teaching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the front of the order (higher priority).
    Up,
    /// Toward the back of the order (lower priority).
    Down,
}

/// Persistent state for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique class identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Which slice of the catalog this class teaches.
    pub scope: ClassScope,
    /// First teaching day.
    pub start_date: NaiveDate,
    /// Exam date; scheduling stops here.
    pub exam_date: NaiveDate,
    /// Teaching capacity per week, in hours.
    pub weekly_hours: f64,
    /// Ids of topics already taught.
    pub completed_topic_ids: Vec<String>,
    /// Topic ids in teaching priority order.
    pub topic_order: Vec<String>,
    /// Per-topic replacements for the catalog's estimated hours.
    pub hour_overrides: HashMap<String, f64>,
    /// User-added practice sessions outside the published syllabus.
    pub custom_topics: Vec<Topic>,
}

impl Classroom {
    /// Creates a classroom with empty tracking state.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        scope: ClassScope,
        start_date: NaiveDate,
        exam_date: NaiveDate,
        weekly_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scope,
            start_date,
            exam_date,
            weekly_hours,
            completed_topic_ids: Vec::new(),
            topic_order: Vec::new(),
            hour_overrides: HashMap::new(),
            custom_topics: Vec::new(),
        }
    }

    /// Seeds the teaching order from the catalog topics in this class's scope.
    pub fn with_order_from(mut self, catalog: &SyllabusCatalog) -> Self {
        self.topic_order = catalog
            .topics_in_scope(self.scope)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        self
    }

    /// Whether a topic has been marked completed.
    pub fn is_completed(&self, topic_id: &str) -> bool {
        self.completed_topic_ids.iter().any(|id| id == topic_id)
    }

    /// Toggles a topic's completion state.
    pub fn toggle_completed(&mut self, topic_id: &str) {
        if let Some(pos) = self.completed_topic_ids.iter().position(|id| id == topic_id) {
            self.completed_topic_ids.remove(pos);
        } else {
            self.completed_topic_ids.push(topic_id.to_string());
        }
    }

    /// Sets a per-topic hour override.
    pub fn set_hour_override(&mut self, topic_id: impl Into<String>, hours: f64) {
        self.hour_overrides.insert(topic_id.into(), hours);
    }

    /// Removes a per-topic hour override, reverting to the catalog estimate.
    pub fn clear_hour_override(&mut self, topic_id: &str) {
        self.hour_overrides.remove(topic_id);
    }

    /// The hours to teach a topic for: the override if set, else the estimate.
    pub fn effective_hours(&self, topic: &Topic) -> f64 {
        self.hour_overrides
            .get(&topic.id)
            .copied()
            .unwrap_or(topic.estimated_hours)
    }

    /// Adds a user-defined practice session to the teaching order.
    ///
    /// The session is inserted at the first uncompleted position so it
    /// schedules immediately, ahead of the remaining syllabus topics.
    /// When every topic is completed it goes to the end.
    pub fn add_custom_topic(&mut self, topic: Topic) {
        let insert_index = self
            .topic_order
            .iter()
            .position(|id| !self.is_completed(id))
            .unwrap_or(self.topic_order.len());
        self.topic_order.insert(insert_index, topic.id.clone());
        self.custom_topics.push(topic);
    }

    /// Removes a custom topic and all tracking state referring to it.
    pub fn remove_custom_topic(&mut self, topic_id: &str) {
        self.custom_topics.retain(|t| t.id != topic_id);
        self.topic_order.retain(|id| id != topic_id);
        self.completed_topic_ids.retain(|id| id != topic_id);
        self.hour_overrides.remove(topic_id);
    }

    /// Swaps a topic with its neighbor in the teaching order.
    ///
    /// No-op for unknown ids or moves past either end.
    pub fn move_topic(&mut self, topic_id: &str, direction: MoveDirection) {
        let Some(index) = self.topic_order.iter().position(|id| id == topic_id) else {
            return;
        };
        match direction {
            MoveDirection::Up if index > 0 => self.topic_order.swap(index, index - 1),
            MoveDirection::Down if index + 1 < self.topic_order.len() => {
                self.topic_order.swap(index, index + 1)
            }
            _ => {}
        }
    }

    /// The ordered topic list to schedule: uncompleted topics in teaching
    /// order, resolved against the catalog and this class's custom topics,
    /// with hour overrides applied. Ids that resolve to no topic are skipped.
    pub fn effective_topics(&self, catalog: &SyllabusCatalog) -> Vec<Topic> {
        self.topic_order
            .iter()
            .filter(|id| !self.is_completed(id))
            .filter_map(|id| {
                catalog
                    .find(id)
                    .or_else(|| self.custom_topics.iter().find(|t| &t.id == id))
            })
            .map(|topic| {
                let mut topic = topic.clone();
                topic.estimated_hours = self.effective_hours(&topic);
                topic
            })
            .collect()
    }
}
