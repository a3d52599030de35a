//! Lunch scheduling domain models.
//!
//! Provides the data types for rosters and generated schedules.
//!
//! # Domain Mappings
//!
//! | lunch-schedule | Round-robin tournament |
//! |----------------|------------------------|
//! | Employee | Participant |
//! | LunchTeam | Match (pairing) |
//! | LunchDay | Round |
//! | LunchSchedule | Tournament schedule |

mod calendar;
mod day;
mod employee;
mod schedule;

pub use calendar::{adjust_for_weekend, day_name, Calendar};
pub use day::{LunchDay, LunchTeam};
pub use employee::Employee;
pub use schedule::LunchSchedule;
