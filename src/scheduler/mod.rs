//! Weekly scheduler and progress metrics.
//!
//! Provides the deterministic week-by-week allocation algorithm and
//! classroom completion metrics.
//!
//! # Algorithm
//!
//! `WeeklyScheduler` fills fixed-capacity 7-day buckets from an ordered
//! topic queue, splitting a topic mid-week when it exceeds the week's
//! remaining capacity. It is a pure function of its inputs: no state
//! survives a call and identical inputs produce identical plans.
//!
//! # Progress
//!
//! `ProgressReport` computes completion percentages (overall and per
//! syllabus level) and remaining teaching hours for a classroom.

mod progress;
mod weekly;

pub use progress::{LevelProgress, ProgressReport};
pub use weekly::{
    calculate_schedule, ScheduleRequest, WeeklyScheduler, CAPACITY_EPSILON, MAX_SCHEDULE_WEEKS,
};
