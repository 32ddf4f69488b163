//! Weekly allocation scheduler.
//!
//! # Algorithm
//!
//! 1. Walk 7-day windows from the start date toward the end date.
//! 2. Fill each week from the head of the topic queue until capacity
//!    is exhausted (0.01h epsilon guard against float noise).
//! 3. A topic that does not fit is split: the portion that fits stays
//!    in the current week as `"<title> (Part N)"`, the remainder
//!    replaces the queue head and is reconsidered next week.
//! 4. Stop when the queue drains, the end date is reached, or the
//!    104-week safety ceiling is hit.
//!
//! The scheduler is a pure function: deterministic, no I/O, and it
//! never reorders or mutates the caller's topic list. Priority order
//! is entirely the caller's decision.
//!
//! # Complexity
//! O(w + n) where w = weeks emitted (≤ 104), n = input topics.

use std::collections::VecDeque;

use chrono::{Days, NaiveDate};

use crate::models::{parse_part_title, part_label, Topic, WeekBucket, WeekPlan};

/// Hard ceiling on emitted weeks (two years).
///
/// Guarantees termination under adversarial inputs such as a
/// near-zero weekly budget with a non-empty topic list. A plan that
/// reaches the ceiling is silently truncated; callers detect this via
/// [`WeekPlan::unscheduled_ids`] or [`WeekPlan::hit_week_ceiling`].
pub const MAX_SCHEDULE_WEEKS: usize = 104;

/// Tolerance for capacity comparisons, in hours.
pub const CAPACITY_EPSILON: f64 = 0.01;

/// Rounds to one decimal place (display stability for hour values).
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A queued topic with its split-chain state.
///
/// The `(base, part)` pair is parsed from the title once on entry, so
/// an input already titled `"<base> (Part N)"` continues numbering
/// from N instead of restarting at 1.
struct QueuedTopic {
    topic: Topic,
    base_title: String,
    part: Option<u32>,
}

impl QueuedTopic {
    fn new(topic: Topic) -> Self {
        let (base, part) = parse_part_title(&topic.title);
        let base_title = base.to_string();
        Self {
            topic,
            base_title,
            part,
        }
    }
}

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// First teaching day.
    pub start_date: NaiveDate,
    /// Day scheduling stops (exclusive; typically the exam date).
    pub end_date: NaiveDate,
    /// Teaching capacity per week, in hours.
    pub weekly_hours: f64,
    /// Topics in priority order, durations already resolved by the caller.
    pub topics: Vec<Topic>,
}

impl ScheduleRequest {
    /// Creates a request with no capacity and no topics.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            weekly_hours: 0.0,
            topics: Vec::new(),
        }
    }

    /// Sets the weekly hour budget.
    pub fn with_weekly_hours(mut self, hours: f64) -> Self {
        self.weekly_hours = hours;
        self
    }

    /// Sets the ordered topic list.
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.topics = topics;
        self
    }

    /// Appends a topic to the ordered list.
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }
}

/// Deterministic weekly allocation scheduler.
///
/// Maps `(start, end, weekly hour budget, ordered topics)` to a
/// [`WeekPlan`]. Total for all inputs: malformed ranges or empty topic
/// lists degrade to an empty plan rather than an error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use teachplan::models::Topic;
/// use teachplan::scheduler::WeeklyScheduler;
///
/// let topics = vec![Topic::new("1.1").with_title("Number systems").with_hours(3.0)];
/// let start = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
///
/// let plan = WeeklyScheduler::new().schedule(start, end, 4.0, &topics);
/// assert_eq!(plan.week_count(), 1);
/// assert_eq!(plan.weeks[0].hours_used, 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduler;

impl WeeklyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Builds a week-by-week plan.
    ///
    /// Returns an empty plan when `start_date >= end_date` or `topics`
    /// is empty. A non-positive budget emits empty weeks up to the
    /// [`MAX_SCHEDULE_WEEKS`] ceiling; it never loops forever.
    pub fn schedule(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        weekly_hours: f64,
        topics: &[Topic],
    ) -> WeekPlan {
        let mut plan = WeekPlan::new();
        let mut queue: VecDeque<QueuedTopic> =
            topics.iter().cloned().map(QueuedTopic::new).collect();

        let mut week_start = start_date;
        let mut week_count = 0;

        while week_start < end_date && !queue.is_empty() && week_count < MAX_SCHEDULE_WEEKS {
            let Some(week_end) = week_start.checked_add_days(Days::new(6)) else {
                break;
            };

            let mut week_topics: Vec<Topic> = Vec::new();
            let mut hours_used: f64 = 0.0;

            loop {
                let remaining = (weekly_hours - hours_used).max(0.0);
                if remaining <= CAPACITY_EPSILON {
                    break;
                }
                let Some(head) = queue.front_mut() else {
                    break;
                };

                if head.topic.estimated_hours <= remaining + CAPACITY_EPSILON {
                    // Fits whole; exact fits (within epsilon) are never
                    // split into a zero-length remainder.
                    hours_used += head.topic.estimated_hours;
                    if let Some(item) = queue.pop_front() {
                        week_topics.push(item.topic);
                    }
                } else {
                    // Split: what fits stays here, the remainder
                    // replaces the queue head for next week.
                    let hours_this_week = round1(remaining);
                    let hours_left = round1(head.topic.estimated_hours - hours_this_week);
                    let part = head.part.unwrap_or(1);

                    let mut fragment = head.topic.clone();
                    fragment.title = part_label(&head.base_title, part);
                    fragment.estimated_hours = hours_this_week;
                    week_topics.push(fragment);
                    hours_used += hours_this_week;

                    head.topic.title = part_label(&head.base_title, part + 1);
                    head.topic.estimated_hours = hours_left;
                    head.part = Some(part + 1);
                }
            }

            plan.push_week(WeekBucket {
                week_start,
                week_end,
                topics: week_topics,
                hours_used: round1(hours_used),
            });

            week_start = match week_start.checked_add_days(Days::new(7)) {
                Some(next) => next,
                None => break,
            };
            week_count += 1;
        }

        plan
    }

    /// Builds a plan from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> WeekPlan {
        self.schedule(
            request.start_date,
            request.end_date,
            request.weekly_hours,
            &request.topics,
        )
    }
}

/// Convenience wrapper around [`WeeklyScheduler::schedule`].
pub fn calculate_schedule(
    start_date: NaiveDate,
    end_date: NaiveDate,
    weekly_hours: f64,
    topics: &[Topic],
) -> WeekPlan {
    WeeklyScheduler::new().schedule(start_date, end_date, weekly_hours, topics)
}
