//! Teaching-plan domain models.
//!
//! Provides the core data types for representing a syllabus, a class's
//! tracking state, and the weekly plans the scheduler produces.
//!
//! # Domain Mappings
//!
//! | teachplan | Planner UI |
//! |-----------|------------|
//! | Topic | Syllabus topic / custom practice session |
//! | SyllabusCatalog | Published syllabus data |
//! | Classroom | Saved class (completion, order, overrides) |
//! | WeekBucket | One row of the schedule view |
//! | WeekPlan | The generated week-by-week schedule |

mod classroom;
mod level;
mod syllabus;
mod topic;
mod week;

pub use classroom::{Classroom, MoveDirection};
pub use level::{ClassScope, SyllabusLevel};
pub use syllabus::{SyllabusCatalog, SyllabusSection};
pub use topic::Topic;
pub(crate) use topic::{parse_part_title, part_label};
pub use week::{WeekBucket, WeekPlan};
