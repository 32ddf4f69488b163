//! Teaching-plan scheduling library.
//!
//! Tracks a class through a syllabus and generates its week-by-week
//! teaching schedule: an ordered list of variable-duration topics is
//! allocated into fixed-capacity weekly buckets between a start date
//! and an exam date, with mid-topic splitting when a topic does not
//! fit the remaining capacity of a week.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Topic`, `SyllabusCatalog`,
//!   `Classroom`, `WeekBucket`, `WeekPlan`
//! - **`scheduler`**: The weekly allocation algorithm
//!   (`WeeklyScheduler`) and completion metrics (`ProgressReport`)
//! - **`validation`**: Input integrity checks (duplicate ids, unknown
//!   references, inverted dates, non-positive hours)
//!
//! # Architecture
//!
//! The scheduler is a pure function: it owns no state, performs no
//! I/O, and is deterministic for identical inputs. `Classroom` is the
//! explicit store the surrounding application persists; it feeds the
//! scheduler through [`models::Classroom::effective_topics`] but is
//! never read by the scheduler directly. Persistence and rendering
//! live outside this crate.

pub mod models;
pub mod scheduler;
pub mod validation;
